/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and unwrapped API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod exchange;
pub mod signature;

pub use error::{FixedFloatError, Result};
pub use signature::RequestSigner;

pub use client::{ClientConfig, Credentials, DEFAULT_BASE_URL, FixedFloatClient};
