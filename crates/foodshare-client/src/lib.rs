//! Client side of the event backend.
//!
//! [`EventApi`] is the contract; [`HttpApi`] speaks it over blocking HTTP.

mod api;
pub mod endpoint;
mod error;
mod http;
pub mod multipart;

pub use api::{EventApi, fetch_reference_data, join_scoped};
pub use endpoint::Query;
pub use error::{ApiError, Result};
pub use http::{DEFAULT_TIMEOUT, HttpApi};
