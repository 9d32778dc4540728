//! Cascading region filter feature.
//!
//! The single page of the application: three dependent dropdowns over the
//! region hierarchy, driven entirely by root-route query parameters and a
//! persisted selection snapshot. Selecting a parent level drops every
//! descendant selection (cascade invalidation); every change is a fresh
//! navigation that re-resolves the whole state.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | The filter page (`province`, `regency`, `district` query params) |
//! | POST | `/reset` | Drop the persisted filter, redirect to `/` |
//! | GET | `/static/styles.css` | Stylesheet |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::FilterService;
