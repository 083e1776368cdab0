pub mod client;
pub mod error;

pub use client::{ApiClient, TokenSource};
pub use error::ApiFailure;
