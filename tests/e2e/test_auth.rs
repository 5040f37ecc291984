use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

const SCOPED_GETS: [&str; 2] = ["/v1/users", "/v1/feed_follows"];

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_scoped_routes_without_authorization_header(ctx: &TestContext) {
    for path in SCOPED_GETS {
        let response = ctx.client.get(path).await.unwrap();
        response
            .assert_status(StatusCode::UNAUTHORIZED)
            .assert_error("no authorization header included");
    }

    let response = ctx
        .client
        .post("/v1/feeds", &json!({ "name": "Blog", "url": "http://x" }))
        .await
        .unwrap();
    response
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error("no authorization header included");

    let response = ctx
        .client
        .post("/v1/feed_follows", &json!({ "feed_id": uuid::Uuid::new_v4() }))
        .await
        .unwrap();
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = ctx
        .client
        .delete(&format!("/v1/feed_follows/{}", uuid::Uuid::new_v4()))
        .await
        .unwrap();
    response.assert_status(StatusCode::UNAUTHORIZED);

    // Neither the gate nor any handler touched the store
    assert_eq!(ctx.store.calls(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_authorization_headers(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("alice").await.unwrap();
    let before = ctx.store.calls();

    for header in [
        format!("Bearer {}", user.api_key),
        format!("apikey {}", user.api_key),
        "ApiKey".to_string(),
        format!("ApiKey {} extra", user.api_key),
        format!("ApiKey  {}", user.api_key),
        format!("ApiKey\t{}", user.api_key),
        user.api_key.clone(),
    ] {
        let response = ctx
            .client
            .get_with_authorization("/v1/users", &header)
            .await
            .unwrap();
        response
            .assert_status(StatusCode::UNAUTHORIZED)
            .assert_error("malformed authorization header");
    }

    assert_eq!(ctx.store.calls(), before, "Store must not be queried");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_unknown_api_key(ctx: &TestContext) {
    let before = ctx.store.calls();

    let response = ctx
        .client
        .post_with_auth(
            "/v1/feeds",
            &json!({ "name": "Blog", "url": "http://x" }),
            "does-not-exist",
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error("couldn't get user");

    // Only the key lookup ran; the handler never wrote a feed
    assert_eq!(ctx.store.calls(), before + 1);
    assert_eq!(ctx.fixtures.feed_count().await.unwrap(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_when_lookup_fails(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("alice").await.unwrap();
    ctx.store.set_failing(true);

    let response = ctx
        .client
        .get_with_auth("/v1/users", &user.api_key)
        .await
        .unwrap();

    // Store outages are indistinguishable from unknown keys
    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error("couldn't get user");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_look_up_the_key_on_every_request(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("alice").await.unwrap();
    let before = ctx.store.calls();

    for _ in 0..3 {
        ctx.client
            .get_with_auth("/v1/users", &user.api_key)
            .await
            .unwrap()
            .assert_status(StatusCode::OK);
    }

    assert_eq!(ctx.store.calls(), before + 3);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_leave_public_routes_open(ctx: &TestContext) {
    let response = ctx.client.get("/v1/feeds").await.unwrap();
    response.assert_status(StatusCode::OK);

    let response = ctx
        .client
        .post("/v1/users", &json!({ "name": "alice" }))
        .await
        .unwrap();
    response.assert_status(StatusCode::CREATED);
}
