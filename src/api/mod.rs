// HTTP handlers exposing each page's data as JSON

pub mod community;
pub mod error;
pub mod health;
pub mod home;
pub mod nutrition;
pub mod programs;
pub mod progress;
pub mod routes;
pub mod workouts;

pub use error::{ApiError, ApiResult};
pub use routes::{create_routes, AppState};
