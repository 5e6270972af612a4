//! Deterministic rendering of resolution outcomes into reply text.

use crate::model::DistrictRecord;
use crate::store::ScheduleStore;

/// Render a matched record as the factual multi-line reply.
///
/// The header line names the area, then each collection entry is echoed in
/// stored order. No reordering, no deduplication, no date arithmetic.
#[must_use]
pub fn format_found(record: &DistrictRecord) -> String {
    let mut lines = vec![format!("Bin collection info for {}:\n", record.area_name)];

    for entry in &record.collections {
        lines.push(format!(
            "{} - {} (Next: {})",
            entry.bin_type, entry.collection_day, entry.next_collection_date
        ));
    }

    lines.join("\n")
}

/// Render the fallback reply for queries that resolved to nothing.
///
/// The enumerated district list always comes from the store's sorted code
/// set, so it can never go stale or drop a supported district. The closing
/// hint names the first record's area as an example query.
#[must_use]
pub fn format_not_found(store: &ScheduleStore) -> String {
    let districts = store.all_district_codes().join(", ");
    let example = store
        .records()
        .first()
        .map_or("Little Horton", |record| record.area_name.as_str());

    format!(
        "Sorry — I couldn’t find bin collection info for that. \
         I currently support these postcode districts: {districts}. \
         You can also type your area name (e.g., '{example}')."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CollectionEntry;

    fn record() -> DistrictRecord {
        DistrictRecord {
            postcode_district: "BD7".to_owned(),
            area_name: "Little Horton".to_owned(),
            collections: vec![
                CollectionEntry {
                    bin_type: "Recycling".to_owned(),
                    collection_day: "Monday".to_owned(),
                    next_collection_date: "2024-06-10".to_owned(),
                },
                CollectionEntry {
                    bin_type: "General Waste".to_owned(),
                    collection_day: "Thursday".to_owned(),
                    next_collection_date: "2024-06-13".to_owned(),
                },
            ],
        }
    }

    #[test]
    fn found_reply_has_header_blank_line_and_entries() {
        let reply = format_found(&record());
        assert_eq!(
            reply,
            "Bin collection info for Little Horton:\n\n\
             Recycling - Monday (Next: 2024-06-10)\n\
             General Waste - Thursday (Next: 2024-06-13)",
        );
    }

    #[test]
    fn found_reply_preserves_entry_order() {
        let mut reversed = record();
        reversed.collections.reverse();
        let reply = format_found(&reversed);
        let general = reply.find("General Waste").unwrap();
        let recycling = reply.find("Recycling").unwrap();
        assert!(general < recycling, "entries must keep their stored order");
    }

    #[test]
    fn found_reply_with_no_collections_is_just_the_header() {
        let mut empty = record();
        empty.collections.clear();
        assert_eq!(format_found(&empty), "Bin collection info for Little Horton:\n");
    }

    #[test]
    fn not_found_reply_enumerates_exactly_the_supported_codes() {
        let store = ScheduleStore::from_json(
            r#"{
                "districts": [
                    {"postcode_district": "BD7", "area_name": "Little Horton", "collections": []},
                    {"postcode_district": "BD1", "area_name": "City Centre", "collections": []},
                    {"postcode_district": "BD15", "area_name": "Allerton", "collections": []}
                ]
            }"#,
        )
        .unwrap();

        let reply = format_not_found(&store);

        // The listed set must equal the store's sorted set exactly, not
        // merely be non-empty.
        let listed = reply
            .split("postcode districts: ")
            .nth(1)
            .and_then(|tail| tail.split('.').next())
            .unwrap();
        let codes: Vec<&str> = listed.split(", ").collect();
        let expected: Vec<&str> = store
            .all_district_codes()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(codes, expected);

        assert!(reply.contains("Little Horton"), "example area from first record");
    }
}
