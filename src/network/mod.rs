//! Network layer - API request execution
//!
//! The Network actor receives API commands and sends back one response per request.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::ApiClient;
