//! REST API over the colour enumeration
//!
//! JSON only: option lists and labels are returned as data and rendering is
//! left to the client.

pub mod error;
pub mod handlers;
pub mod router;

pub use error::AppError;
pub use router::build_router;
