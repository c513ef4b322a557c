//! HTTP server module for the dashboard.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Dashboard page, JSON figures, job SSE                  │
//! │  - CORS, compression, timeout, error handling             │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Sampling, turtle paths, figure building                │
//! │  - Background jobs                                        │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Models (models/)                                         │
//! │  - Iteration rules, dashboard controls                    │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod page;
pub mod router;
pub mod state;

pub use router::{create_router, create_router_with_timeout};
pub use state::AppState;
