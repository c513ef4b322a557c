//! # collatz-dash
//!
//! Browser dashboard for exploring 3-D "Collatz shrubs".
//!
//! Each sampled starting integer is iterated under a Collatz-type map until it
//! reaches 1. The orbit is drawn as a turtle polyline: the heading turns left
//! or right depending on the residue class of the current value, the step
//! length shrinks like `1/ln(n)`, and the vertical axis advances one step per
//! iteration so height encodes stopping time.
//!
//! ## Architecture
//!
//! - [`models`]: iteration rules ([`models::Scheme`]) and dashboard controls
//! - [`services`]: sampling, turtle paths, figure building, background jobs
//! - [`routes`]: serialisable figure and path types
//! - [`api`]: consolidated re-exports of the public DTOs
//! - [`http`]: axum server serving the dashboard page and JSON API
//! - [`config`]: environment-driven server configuration

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{ShrubError, ShrubResult};
