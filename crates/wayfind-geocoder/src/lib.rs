pub mod client;
pub mod error;
pub mod types;

pub use client::{GeocoderClient, RESULT_LIMIT};
pub use error::GeocodeError;
