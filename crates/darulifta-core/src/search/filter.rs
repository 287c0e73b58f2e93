use crate::models::{CategorySelector, Fatwa};

/// Deterministic keyword filter over a store snapshot. Category first
/// (exact enum equality), then a case-insensitive substring match of the
/// query against title, details, and fatwa number. Store order is
/// preserved; an empty result is a valid outcome, not an error.
#[must_use]
pub fn filter_records(records: &[Fatwa], selector: CategorySelector, query: &str) -> Vec<Fatwa> {
    let needle = query.trim().to_lowercase();
    records
        .iter()
        .filter(|record| selector.matches(record.category))
        .filter(|record| needle.is_empty() || matches_query(record, &needle))
        .cloned()
        .collect()
}

fn matches_query(record: &Fatwa, needle: &str) -> bool {
    record.question_title.to_lowercase().contains(needle)
        || record.question_details.to_lowercase().contains(needle)
        || record.fatwa_number.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategorySelector};
    use crate::seed::seed_fatwas;

    #[test]
    fn all_sentinel_returns_every_record() {
        let records = seed_fatwas();
        let result = filter_records(&records, CategorySelector::All, "");
        assert_eq!(result.len(), records.len());
    }

    #[test]
    fn category_filter_returns_only_that_category() {
        let records = seed_fatwas();
        for category in Category::ALL {
            let result = filter_records(&records, CategorySelector::One(category), "");
            assert!(result.iter().all(|record| record.category == category));
        }
        let zakat = filter_records(&records, CategorySelector::One(Category::Zakat), "");
        assert_eq!(zakat.len(), 1);
        assert_eq!(zakat[0].id, "1004");
    }

    #[test]
    fn query_matches_title_details_or_number_case_insensitively() {
        let records = seed_fatwas();
        let by_title = filter_records(&records, CategorySelector::All, "NIKAH");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "1005");

        let by_details = filter_records(&records, CategorySelector::All, "rest area");
        assert_eq!(by_details.len(), 1);
        assert_eq!(by_details[0].id, "1001");

        let by_number = filter_records(&records, CategorySelector::All, "l-2023-1003");
        assert_eq!(by_number.len(), 1);
        assert_eq!(by_number[0].id, "1003");
    }

    #[test]
    fn non_matching_query_yields_empty_result() {
        let records = seed_fatwas();
        let result = filter_records(&records, CategorySelector::All, "cryptocurrency staking");
        assert!(result.is_empty());
    }

    #[test]
    fn result_keeps_store_order() {
        let records = seed_fatwas();
        let result = filter_records(&records, CategorySelector::All, "the");
        let positions: Vec<usize> = result
            .iter()
            .map(|hit| records.iter().position(|r| r.id == hit.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn category_and_query_compose() {
        let records = seed_fatwas();
        let result = filter_records(
            &records,
            CategorySelector::One(Category::Business),
            "prayers",
        );
        assert!(result.is_empty());
    }
}
