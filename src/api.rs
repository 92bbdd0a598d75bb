//! Generic API client
//!
//! Every request goes through [`GenericClient::request`] and comes back as an
//! [`ApiResponse`] holding exactly one of a payload or an error message.

mod client;
mod response;

pub use client::{GenericClient, RequestSpec};
pub use response::{ApiError, ApiResponse, GENERIC_ERROR_MESSAGE};
