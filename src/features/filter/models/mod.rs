mod selection;

pub use selection::{FilterSelection, SelectionDepth};
