mod dataset_service;

pub use dataset_service::{RegionDataset, RegionDatasetService};
