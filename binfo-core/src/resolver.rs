//! Resolution of free-text queries to district records.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::DistrictRecord;
use crate::store::ScheduleStore;

/// Standalone district token: the fixed “BD” prefix immediately followed by
/// one or two digits, delimited by word boundaries.
static DISTRICT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bBD[0-9]{1,2}\b").expect("district token pattern is valid"));

/// Extract the leftmost standalone district token from `text`, uppercased.
///
/// `BD7` and `BD7 1AB` both yield `BD7`. Tokens embedded in a longer
/// alphanumeric run (`ABD7`, `BD71AB`) do not match.
#[must_use]
pub fn extract_district_token(text: &str) -> Option<String> {
    let upper = text.to_uppercase();
    DISTRICT_TOKEN
        .find(&upper)
        .map(|token| token.as_str().to_owned())
}

/// Collapse whitespace runs to single spaces, trim, and lowercase.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase()
}

/// Resolve raw user text to a district record, if any.
///
/// District-token extraction runs first. When a token is syntactically
/// present but unknown to the store, resolution stops there and returns
/// `None` without falling back to area matching: an explicit district code
/// is the more authoritative signal, even an unregistered one.
///
/// Only when the input carries no district token at all is the area-name
/// fallback tried: the normalized query matches a record when it equals the
/// normalized area name or either is a substring of the other. Records are
/// scanned in dataset order and the first hit wins.
#[must_use]
pub fn resolve<'store>(
    store: &'store ScheduleStore,
    raw_text: &str,
) -> Option<&'store DistrictRecord> {
    if let Some(code) = extract_district_token(raw_text) {
        return store.lookup_by_district(&code);
    }

    let query = normalize_text(raw_text);
    if query.is_empty() {
        return None;
    }

    store.records().iter().find(|record| {
        let area = normalize_text(&record.area_name);
        query == area || area.contains(&query) || query.contains(&area)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ScheduleStore {
        ScheduleStore::from_json(
            r#"{
                "districts": [
                    {"postcode_district": "BD7", "area_name": "Little Horton Green", "collections": []},
                    {"postcode_district": "BD1", "area_name": "City Centre", "collections": []},
                    {"postcode_district": "BD15", "area_name": "Allerton", "collections": []}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn extracts_bare_token() {
        assert_eq!(extract_district_token("BD7").as_deref(), Some("BD7"));
        assert_eq!(extract_district_token("bd7").as_deref(), Some("BD7"));
    }

    #[test]
    fn extracts_token_from_full_postcode() {
        assert_eq!(extract_district_token("BD7 1AB").as_deref(), Some("BD7"));
    }

    #[test]
    fn extracts_token_from_surrounding_text() {
        assert_eq!(
            extract_district_token("when are bins emptied in bd15 please").as_deref(),
            Some("BD15"),
        );
    }

    #[test]
    fn embedded_runs_do_not_match() {
        assert_eq!(extract_district_token("ABD7"), None);
        assert_eq!(extract_district_token("BD71AB"), None);
        assert_eq!(extract_district_token("XBD15Y"), None);
    }

    #[test]
    fn leftmost_token_wins() {
        assert_eq!(
            extract_district_token("BD1 or maybe BD7").as_deref(),
            Some("BD1"),
        );
    }

    #[test]
    fn normalize_collapses_whitespace_and_case() {
        assert_eq!(normalize_text("  Little\t Horton \n"), "little horton");
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn resolves_every_registered_code_embedded_in_text() {
        let store = store();
        for code in store.all_district_codes() {
            let record = resolve(&store, &format!("visit {code} today")).unwrap();
            assert_eq!(record.normalized_code(), *code);
        }
    }

    #[test]
    fn unknown_token_does_not_fall_back_to_area_match() {
        let store = store();
        // "BD99" is unregistered; "little horton" alone would match BD7.
        assert!(resolve(&store, "BD99 little horton").is_none());
        assert!(resolve(&store, "bd2").is_none());
    }

    #[test]
    fn area_match_ignores_case_and_outer_whitespace() {
        let store = store();
        let expected = resolve(&store, "Little Horton Green").unwrap();
        for query in ["LITTLE HORTON GREEN", "  Little Horton Green  "] {
            let record = resolve(&store, query).unwrap();
            assert_eq!(record, expected);
        }
    }

    #[test]
    fn query_substring_of_area_matches() {
        let store = store();
        let record = resolve(&store, "little horton").unwrap();
        assert_eq!(record.postcode_district, "BD7");
    }

    #[test]
    fn area_substring_of_query_matches() {
        let store = store();
        let record = resolve(&store, "the little horton green estate").unwrap();
        assert_eq!(record.postcode_district, "BD7");
    }

    #[test]
    fn first_record_in_dataset_order_wins() {
        let store = ScheduleStore::from_json(
            r#"{
                "districts": [
                    {"postcode_district": "BD3", "area_name": "Barkerend", "collections": []},
                    {"postcode_district": "BD4", "area_name": "Barkerend East", "collections": []}
                ]
            }"#,
        )
        .unwrap();
        let record = resolve(&store, "barkerend").unwrap();
        assert_eq!(record.postcode_district, "BD3");
    }

    #[test]
    fn empty_and_whitespace_input_resolve_to_nothing() {
        let store = store();
        assert!(resolve(&store, "").is_none());
        assert!(resolve(&store, "   \t\n").is_none());
    }

    #[test]
    fn unrelated_text_resolves_to_nothing() {
        let store = store();
        assert!(resolve(&store, "when is the next bank holiday?").is_none());
    }
}
