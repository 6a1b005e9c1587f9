mod client;
mod error;

pub use client::ScholarClient;
pub use error::ScholarError;
