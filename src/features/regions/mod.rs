//! Indonesian administrative regions (wilayah) feature.
//!
//! Holds the static hierarchical region dataset and the loader that reads
//! it from disk. The dataset covers three levels:
//!
//! - Level 1: Provinces (Provinsi)
//! - Level 2: Regencies/Cities (Kabupaten/Kota)
//! - Level 3: Districts (Kecamatan)
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/data/regions.json` | The full dataset as JSON |

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{RegionDataset, RegionDatasetService};
