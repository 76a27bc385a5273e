//! api-dash: a terminal dashboard for a small JSON REST API.
//!
//! The dashboard shows three containers (API info, items, server health). Each
//! one is filled by a view caller in [`loaders`] that goes through the shared
//! [`client::ApiClient`].

pub mod actions;
pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod loaders;
pub mod logging;
pub mod messages;
pub mod state;
pub mod types;
pub mod ui;

pub use client::{ApiClient, RequestOptions};
pub use error::ApiError;
