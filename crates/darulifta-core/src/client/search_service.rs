use crate::error::Result;
use crate::models::{CategorySelector, Fatwa, SearchOutcome};
use crate::search::{RERANK_MIN_QUERY_CHARS, apply_ranked_ids, filter_records};
use crate::suggest::{SUGGEST_MIN_QUERY_CHARS, SuggestBox};

impl super::DarulIfta {
    /// Plain keyword filter over the current store snapshot, in store
    /// order. Used on every category change.
    pub fn browse(&self, selector: CategorySelector, query: &str) -> Result<Vec<Fatwa>> {
        Ok(filter_records(self.records_read()?.all(), selector, query))
    }

    /// Explicit search submission: keyword filter first, then, for
    /// queries long enough, one AI rank call whose id list floats
    /// matches to the front. The call completes (or fails to an empty
    /// list) before the outcome exists; there is no partial state for a
    /// later response to clobber.
    pub fn search(&self, selector: CategorySelector, query: &str) -> Result<SearchOutcome> {
        let (filtered, listing) = {
            let records = self.records_read()?;
            let filtered = filter_records(records.all(), selector, query);
            let listing: Vec<(String, String)> = records
                .all()
                .iter()
                .map(|record| (record.id.clone(), record.question_title.clone()))
                .collect();
            (filtered, listing)
        };

        if query.trim().chars().count() < RERANK_MIN_QUERY_CHARS {
            return Ok(SearchOutcome {
                fatwas: filtered,
                ai_ranked: false,
            });
        }

        let ranked_ids = self.assist().rank(query.trim(), &listing);
        let ai_ranked = !ranked_ids.is_empty();
        Ok(SearchOutcome {
            fatwas: apply_ranked_ids(filtered, &ranked_ids),
            ai_ranked,
        })
    }

    /// Fetch side of autocomplete: the caller owns the debounce (see
    /// [`crate::suggest::SuggestBox`]); this just refuses short prefixes
    /// and otherwise asks the augmenter with the current titles as
    /// context.
    pub fn suggestions(&self, partial: &str) -> Result<Vec<String>> {
        let partial = partial.trim();
        if partial.chars().count() < SUGGEST_MIN_QUERY_CHARS {
            return Ok(Vec::new());
        }
        let titles: Vec<String> = self
            .records_read()?
            .all()
            .iter()
            .map(|record| record.question_title.clone())
            .collect();
        Ok(self.assist().suggest(partial, &titles))
    }

    /// Debounce side of autocomplete, pre-armed with the configured
    /// window. One box per input widget; feed its fetch directives into
    /// [`Self::suggestions`].
    #[must_use]
    pub fn suggest_box(&self) -> SuggestBox {
        SuggestBox::from_config(self.assist().config())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::AssistConfig;
    use crate::models::{Category, CategorySelector};
    use crate::DarulIfta;

    // All tests run keyless: the rank augmenter degrades to an empty id
    // list, so search order must equal plain filter order.
    fn app() -> DarulIfta {
        DarulIfta::with_config(AssistConfig::default()).expect("app")
    }

    #[test]
    fn browse_filters_by_category_and_query() {
        let app = app();
        let all = app.browse(CategorySelector::All, "").expect("browse");
        assert_eq!(all.len(), 5);

        let zakat = app
            .browse(CategorySelector::One(Category::Zakat), "")
            .expect("browse");
        assert_eq!(zakat.len(), 1);
        assert_eq!(zakat[0].id, "1004");

        let nothing = app
            .browse(CategorySelector::All, "no such phrase anywhere")
            .expect("browse");
        assert!(nothing.is_empty());
    }

    #[test]
    fn keyless_search_preserves_filter_order_and_reports_no_ranking() {
        let app = app();
        let outcome = app
            .search(CategorySelector::All, "prayers during travel")
            .expect("search");
        let browsed = app
            .browse(CategorySelector::All, "prayers during travel")
            .expect("browse");
        assert!(!outcome.ai_ranked);
        let outcome_ids: Vec<&str> = outcome.fatwas.iter().map(|f| f.id.as_str()).collect();
        let browsed_ids: Vec<&str> = browsed.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(outcome_ids, browsed_ids);
    }

    #[test]
    fn short_queries_skip_the_rank_augmenter() {
        let app = app();
        let outcome = app.search(CategorySelector::All, "zak").expect("search");
        assert!(!outcome.ai_ranked);
    }

    #[test]
    fn short_prefixes_yield_no_suggestions() {
        let app = app();
        assert!(app.suggestions("za").expect("suggest").is_empty());
        assert!(app.suggestions("  z  ").expect("suggest").is_empty());
    }

    #[test]
    fn keyless_suggestions_are_empty_for_long_prefixes_too() {
        let app = app();
        assert!(app.suggestions("zakat on gold").expect("suggest").is_empty());
    }

    #[test]
    fn suggest_box_uses_the_configured_debounce_window() {
        use std::time::{Duration, Instant};

        let config = AssistConfig {
            suggest_debounce_ms: 250,
            ..AssistConfig::default()
        };
        let app = DarulIfta::with_config(config).expect("app");

        let start = Instant::now();
        let mut sbox = app.suggest_box();
        sbox.input("zakat", start);
        assert!(sbox.poll(start + Duration::from_millis(249)).is_none());
        let directive = sbox
            .poll(start + Duration::from_millis(250))
            .expect("fetch directive");
        assert_eq!(directive.query, "zakat");
    }
}
