pub mod api;
pub mod documents;
pub mod traits;
pub mod users;

mod status;
pub use status::Status;

mod tracing;
pub use crate::tracing::Tracing;
