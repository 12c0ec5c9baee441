pub mod client;
pub mod error;

pub use client::RouteClient;
pub use error::RouteError;
