//! API client for the Spotify catalog.
//!
//! - [`SpotifyApi`]: operation façade (request building and hydration)
//! - [`Transport`]: the network seam, with [`HttpTransport`] as the reqwest implementation

pub mod client;
pub mod transport;

pub use client::{Page, SpotifyApi, DEFAULT_LIMIT};
pub use transport::{ApiRequest, HttpTransport, Transport, TransportError};
