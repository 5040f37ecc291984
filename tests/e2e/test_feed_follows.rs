use crate::e2e::helpers;

use helpers::{assertions::assert_user_response, TestContext};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use rss_aggregator::domain::{
    feed::CreateFeedResponse,
    feed_follow::FeedFollow,
    user::User,
};
use serde_json::json;
use test_context::test_context;
use uuid::Uuid;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_run_the_full_follow_lifecycle(ctx: &TestContext) {
    // Register
    let response = ctx
        .client
        .post("/v1/users", &json!({ "name": "alice" }))
        .await
        .unwrap();
    response.assert_status(StatusCode::CREATED);
    assert_user_response(response.body.as_ref().unwrap(), "alice");
    let alice: User = response.json().unwrap();

    // Look ourselves up
    let response = ctx
        .client
        .get_with_auth("/v1/users", &alice.api_key)
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<User>().unwrap(), alice);

    // Create a feed; the creator follows it
    let response = ctx
        .client
        .post_with_auth(
            "/v1/feeds",
            &json!({ "name": "Blog", "url": "http://x" }),
            &alice.api_key,
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::CREATED);
    let created: CreateFeedResponse = response.json().unwrap();
    assert_eq!(created.feed_follow.user_id, created.feed.user_id);

    // Unfollow
    let response = ctx
        .client
        .delete_with_auth(
            &format!("/v1/feed_follows/{}", created.feed_follow.id),
            &alice.api_key,
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);

    // Nothing left
    let response = ctx
        .client
        .get_with_auth("/v1/feed_follows", &alice.api_key)
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    assert!(response.json::<Vec<FeedFollow>>().unwrap().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_follow_another_users_feed(ctx: &TestContext) {
    let alice = ctx.fixtures.create_user("alice").await.unwrap();
    let bob = ctx.fixtures.create_user("bob").await.unwrap();
    let feed = ctx
        .fixtures
        .create_feed(alice.id, "Blog", "http://x")
        .await
        .unwrap();

    let response = ctx
        .client
        .post_with_auth("/v1/feed_follows", &json!({ "feed_id": feed.id }), &bob.api_key)
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);
    let follow: FeedFollow = response.json().unwrap();
    assert_eq!(follow.user_id, bob.id);
    assert_eq!(follow.feed_id, feed.id);

    let response = ctx
        .client
        .get_with_auth("/v1/feed_follows", &bob.api_key)
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Vec<FeedFollow>>().unwrap(), vec![follow]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_scope_follow_listing_to_the_caller(ctx: &TestContext) {
    let alice = ctx.fixtures.create_user("alice").await.unwrap();
    let bob = ctx.fixtures.create_user("bob").await.unwrap();

    let created: CreateFeedResponse = ctx
        .client
        .post_with_auth(
            "/v1/feeds",
            &json!({ "name": "Blog", "url": "http://x" }),
            &alice.api_key,
        )
        .await
        .unwrap()
        .json()
        .unwrap();

    let bobs: Vec<FeedFollow> = ctx
        .client
        .get_with_auth("/v1/feed_follows", &bob.api_key)
        .await
        .unwrap()
        .json()
        .unwrap();
    assert!(bobs.is_empty(), "Bob must not see Alice's follows");

    let alices: Vec<FeedFollow> = ctx
        .client
        .get_with_auth("/v1/feed_follows", &alice.api_key)
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(alices, vec![created.feed_follow]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_allow_duplicate_follows(ctx: &TestContext) {
    let alice = ctx.fixtures.create_user("alice").await.unwrap();
    let feed = ctx
        .fixtures
        .create_feed(alice.id, "Blog", "http://x")
        .await
        .unwrap();

    for _ in 0..2 {
        ctx.client
            .post_with_auth(
                "/v1/feed_follows",
                &json!({ "feed_id": feed.id }),
                &alice.api_key,
            )
            .await
            .unwrap()
            .assert_status(StatusCode::CREATED);
    }

    assert_eq!(ctx.fixtures.follows_of(alice.id).await.unwrap().len(), 2);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_feed_id_in_body(ctx: &TestContext) {
    let alice = ctx.fixtures.create_user("alice").await.unwrap();

    let response = ctx
        .client
        .post_with_auth(
            "/v1/feed_follows",
            &json!({ "feed_id": "not-a-uuid" }),
            &alice.api_key,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(ctx.fixtures.follows_of(alice.id).await.unwrap().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_unknown_feed_as_server_error(ctx: &TestContext) {
    let alice = ctx.fixtures.create_user("alice").await.unwrap();

    let response = ctx
        .client
        .post_with_auth(
            "/v1/feed_follows",
            &json!({ "feed_id": Uuid::new_v4() }),
            &alice.api_key,
        )
        .await
        .unwrap();

    // Existence is left to the store's foreign key
    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error("couldn't create feed follow");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_feed_follow_id_in_path(ctx: &TestContext) {
    let alice = ctx.fixtures.create_user("alice").await.unwrap();

    let response = ctx
        .client
        .delete_with_auth("/v1/feed_follows/not-a-uuid", &alice.api_key)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("bad request");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_delete_another_users_follow(ctx: &TestContext) {
    let alice = ctx.fixtures.create_user("alice").await.unwrap();
    let bob = ctx.fixtures.create_user("bob").await.unwrap();
    let feed = ctx
        .fixtures
        .create_feed(bob.id, "Blog", "http://x")
        .await
        .unwrap();
    let bobs_follow = ctx.fixtures.follow(bob.id, feed.id).await.unwrap();

    let response = ctx
        .client
        .delete_with_auth(
            &format!("/v1/feed_follows/{}", bobs_follow.id),
            &alice.api_key,
        )
        .await
        .unwrap();

    // Not-owned is reported like a failed delete, never as success
    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error("could not delete feed");

    assert_eq!(
        ctx.fixtures.follows_of(bob.id).await.unwrap(),
        vec![bobs_follow]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_deleting_unknown_follow_as_server_error(ctx: &TestContext) {
    let alice = ctx.fixtures.create_user("alice").await.unwrap();

    let response = ctx
        .client
        .delete_with_auth(&format!("/v1/feed_follows/{}", Uuid::new_v4()), &alice.api_key)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error("could not delete feed");
}
