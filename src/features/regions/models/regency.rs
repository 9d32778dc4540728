use serde::{Deserialize, Serialize};

/// Regency model representing Indonesian regencies/cities (kabupaten/kota)
///
/// `province_id` must reference an existing province or the regency is
/// unreachable in the cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regency {
    pub id: i64,
    pub name: String,
    pub province_id: i64,
}
