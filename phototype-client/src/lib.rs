//! Client data layer for the phototype catalog service.
//!
//! This crate owns everything between the presentation layer and the wire:
//! the paginated catalog store ([`PhotoCatalog`]), the HTTP transport
//! ([`ApiClient`]) and the multipart body encoding for photo uploads
//! ([`MultipartForm`]). The UI hands it a transport, calls a handful of
//! async methods and gets plain data or an [`ApiError`] back — no view
//! state, no alerts, no reachability checks live here.

pub mod api_client;
pub mod config;
pub mod error;
pub mod multipart;
pub mod store;
pub mod transport;

pub use api_client::ApiClient;
pub use config::{ClientConfig, DEFAULT_API_BASE};
pub use error::{ApiError, Result};
pub use multipart::MultipartForm;
pub use store::{FetchOutcome, PhotoCatalog};
pub use transport::CatalogTransport;

pub use phototype_model as model;
