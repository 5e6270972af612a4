//! Domain data structures for districts and their collection schedules.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One bin-type/day/date triple within a district's schedule.
pub struct CollectionEntry {
    /// Category label such as “Recycling” or “General Waste”.
    pub bin_type: String,
    /// Weekday label such as “Monday”.
    pub collection_day: String,
    /// Date of the next pickup. Echoed verbatim, never parsed or validated.
    pub next_collection_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Reference record for a single postcode district.
pub struct DistrictRecord {
    /// Short alphanumeric code such as “BD7”. Unique key, case-insensitive.
    pub postcode_district: String,
    /// Human-readable locality name. Not guaranteed unique.
    pub area_name: String,
    /// Scheduled collections in their published order.
    pub collections: Vec<CollectionEntry>,
}

impl DistrictRecord {
    /// The record's district code folded to the canonical uppercase form.
    #[must_use]
    pub fn normalized_code(&self) -> String {
        self.postcode_district.to_uppercase()
    }
}
