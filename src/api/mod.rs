//! HTTP API for taskboard.
//!
//! ## Endpoints
//!
//! - `GET /api/health` - Health check
//! - `GET /api/tasks?status={all|active|completed}` - List tasks
//! - `POST /api/tasks` - Create a task
//! - `GET /api/tasks/{id}` - Get a single task
//! - `PUT /api/tasks/{id}` - Partially update a task
//! - `DELETE /api/tasks/{id}` - Delete a task
//! - `POST /api/tasks/clear` - Remove all tasks (test/reset utility)
//!
//! Anything that is not an `/api` route falls through to the static
//! single-page client.

mod error;
mod routes;
mod types;

pub use error::ApiError;
pub use routes::serve;
pub use types::*;
