pub mod error;
pub mod models;
pub mod schema;
pub mod utility;

pub use error::{ApiError, ApiErrorResponse};
