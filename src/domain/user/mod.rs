pub mod error;
pub mod model;
pub mod service;

pub use error::UserServiceError;
pub use model::{CreateUserRequest, User};
pub use service::{UserService, UserServiceApi};
