mod filter_service;
pub mod navigation;

pub use filter_service::{FilterService, ResolvedFilter};
