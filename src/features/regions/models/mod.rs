mod district;
mod province;
mod regency;

pub use district::District;
pub use province::Province;
pub use regency::Regency;
