//! Autocomplete state machine: `Idle -> Debouncing -> Fetching ->
//! Suggesting -> Idle`. The machine is driven by explicit events and
//! caller-supplied timestamps, so the debounce behavior is testable
//! without real timers; the owner decides when to call [`SuggestBox::poll`]
//! and performs the actual fetch for the directives it emits.
//!
//! In-flight fetches are keyed by a generation counter; a resolution for
//! a stale generation is discarded. Fetch failures resolve with an empty
//! list and are never visible as errors.

use std::time::{Duration, Instant};

use crate::config::AssistConfig;

/// Queries shorter than this never trigger a fetch.
pub const SUGGEST_MIN_QUERY_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestPhase {
    Idle,
    Debouncing,
    Fetching,
    Suggesting,
}

/// A fetch the owner should perform, answered via [`SuggestBox::resolve`]
/// with the same generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchDirective {
    pub generation: u64,
    pub query: String,
}

#[derive(Debug)]
pub struct SuggestBox {
    debounce: Duration,
    phase: SuggestPhase,
    query: String,
    deadline: Option<Instant>,
    generation: u64,
    suggestions: Vec<String>,
    suppress_for: Option<String>,
}

impl SuggestBox {
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            phase: SuggestPhase::Idle,
            query: String::new(),
            deadline: None,
            generation: 0,
            suggestions: Vec::new(),
            suppress_for: None,
        }
    }

    /// Builds a box with the configured debounce window
    /// (`DARULIFTA_SUGGEST_DEBOUNCE_MS` when the config came from the
    /// environment).
    #[must_use]
    pub fn from_config(config: &AssistConfig) -> Self {
        Self::new(Duration::from_millis(config.suggest_debounce_ms))
    }

    #[must_use]
    pub fn phase(&self) -> SuggestPhase {
        self.phase
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Visible only while `Suggesting`; empty otherwise.
    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// A keystroke. Restarts the trailing debounce window, invalidates
    /// any in-flight fetch, and hides the dropdown. An assignment that
    /// matches a just-accepted suggestion is absorbed without arming a
    /// redundant fetch.
    pub fn input(&mut self, text: &str, now: Instant) {
        self.query = text.to_string();
        self.generation = self.generation.wrapping_add(1);
        self.suggestions.clear();

        if self.suppress_for.take().is_some_and(|accepted| accepted == text) {
            self.phase = SuggestPhase::Idle;
            self.deadline = None;
            return;
        }

        self.phase = SuggestPhase::Debouncing;
        self.deadline = Some(now + self.debounce);
    }

    /// Advances the debounce clock. Emits at most one fetch directive per
    /// armed window; short queries fall straight back to `Idle`.
    pub fn poll(&mut self, now: Instant) -> Option<FetchDirective> {
        if self.phase != SuggestPhase::Debouncing {
            return None;
        }
        if self.deadline.is_some_and(|deadline| now < deadline) {
            return None;
        }
        self.deadline = None;

        if self.query.chars().count() < SUGGEST_MIN_QUERY_CHARS {
            self.phase = SuggestPhase::Idle;
            self.suggestions.clear();
            return None;
        }

        self.generation = self.generation.wrapping_add(1);
        self.phase = SuggestPhase::Fetching;
        Some(FetchDirective {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Completes a fetch. Resolutions for superseded generations are
    /// dropped on the floor; an empty list (which is also how the owner
    /// reports a swallowed fetch error) returns the machine to `Idle`.
    pub fn resolve(&mut self, generation: u64, suggestions: Vec<String>) {
        if self.phase != SuggestPhase::Fetching || generation != self.generation {
            return;
        }
        if suggestions.is_empty() {
            self.phase = SuggestPhase::Idle;
            self.suggestions.clear();
        } else {
            self.phase = SuggestPhase::Suggesting;
            self.suggestions = suggestions;
        }
    }

    /// The user clicked a suggestion: it becomes the query verbatim, the
    /// dropdown closes, and the next assignment of that exact text will
    /// not re-arm a fetch. Returns the text to feed into the filter.
    pub fn accept(&mut self, suggestion: &str) -> String {
        self.query = suggestion.to_string();
        self.suppress_for = Some(suggestion.to_string());
        self.suggestions.clear();
        self.generation = self.generation.wrapping_add(1);
        self.phase = SuggestPhase::Idle;
        self.deadline = None;
        self.query.clone()
    }

    /// Submission or focus loss: hide the dropdown, abandon any pending
    /// window or in-flight fetch.
    pub fn dismiss(&mut self) {
        self.phase = SuggestPhase::Idle;
        self.suggestions.clear();
        self.deadline = None;
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE: Duration = Duration::from_millis(500);

    fn after(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn from_config_applies_the_configured_window() {
        let config = AssistConfig {
            suggest_debounce_ms: 200,
            ..AssistConfig::default()
        };
        let start = Instant::now();
        let mut sbox = SuggestBox::from_config(&config);
        sbox.input("zakat", start);
        assert_eq!(sbox.poll(after(start, 199)), None);
        assert!(sbox.poll(after(start, 200)).is_some());
    }

    #[test]
    fn two_char_query_never_fetches() {
        let start = Instant::now();
        let mut sbox = SuggestBox::new(DEBOUNCE);
        sbox.input("za", start);
        assert_eq!(sbox.phase(), SuggestPhase::Debouncing);
        assert_eq!(sbox.poll(after(start, 1000)), None);
        assert_eq!(sbox.phase(), SuggestPhase::Idle);
        assert!(sbox.suggestions().is_empty());
    }

    #[test]
    fn three_char_query_fetches_once_after_the_window() {
        let start = Instant::now();
        let mut sbox = SuggestBox::new(DEBOUNCE);
        sbox.input("zak", start);

        // Window not elapsed yet.
        assert_eq!(sbox.poll(after(start, 499)), None);

        let directive = sbox.poll(after(start, 500)).expect("fetch directive");
        assert_eq!(directive.query, "zak");
        assert_eq!(sbox.phase(), SuggestPhase::Fetching);

        // Exactly one fetch per window.
        assert_eq!(sbox.poll(after(start, 600)), None);
    }

    #[test]
    fn keystroke_resets_the_debounce_window() {
        let start = Instant::now();
        let mut sbox = SuggestBox::new(DEBOUNCE);
        sbox.input("zak", start);
        sbox.input("zaka", after(start, 400));

        // The first window would have elapsed at 500ms, but the second
        // keystroke pushed the deadline to 900ms.
        assert_eq!(sbox.poll(after(start, 500)), None);
        let directive = sbox.poll(after(start, 900)).expect("fetch directive");
        assert_eq!(directive.query, "zaka");
    }

    #[test]
    fn successful_resolution_shows_suggestions() {
        let start = Instant::now();
        let mut sbox = SuggestBox::new(DEBOUNCE);
        sbox.input("zakat", start);
        let directive = sbox.poll(after(start, 500)).expect("fetch directive");

        sbox.resolve(directive.generation, vec!["zakat on gold".to_string()]);
        assert_eq!(sbox.phase(), SuggestPhase::Suggesting);
        assert_eq!(sbox.suggestions(), ["zakat on gold".to_string()]);
    }

    #[test]
    fn empty_resolution_returns_to_idle() {
        let start = Instant::now();
        let mut sbox = SuggestBox::new(DEBOUNCE);
        sbox.input("zakat", start);
        let directive = sbox.poll(after(start, 500)).expect("fetch directive");

        sbox.resolve(directive.generation, Vec::new());
        assert_eq!(sbox.phase(), SuggestPhase::Idle);
        assert!(sbox.suggestions().is_empty());
    }

    #[test]
    fn stale_resolution_is_discarded() {
        let start = Instant::now();
        let mut sbox = SuggestBox::new(DEBOUNCE);
        sbox.input("zakat", start);
        let stale = sbox.poll(after(start, 500)).expect("first directive");

        // A newer keystroke supersedes the in-flight fetch.
        sbox.input("zakat gold", after(start, 600));
        let fresh = sbox.poll(after(start, 1100)).expect("second directive");

        sbox.resolve(stale.generation, vec!["stale".to_string()]);
        assert_eq!(sbox.phase(), SuggestPhase::Fetching);
        assert!(sbox.suggestions().is_empty());

        sbox.resolve(fresh.generation, vec!["fresh".to_string()]);
        assert_eq!(sbox.suggestions(), ["fresh".to_string()]);
    }

    #[test]
    fn accepting_a_suggestion_suppresses_the_redundant_fetch() {
        let start = Instant::now();
        let mut sbox = SuggestBox::new(DEBOUNCE);
        sbox.input("zakat", start);
        let directive = sbox.poll(after(start, 500)).expect("fetch directive");
        sbox.resolve(directive.generation, vec!["zakat on gold jewelry".to_string()]);

        let assigned = sbox.accept("zakat on gold jewelry");
        assert_eq!(assigned, "zakat on gold jewelry");
        assert_eq!(sbox.phase(), SuggestPhase::Idle);

        // The UI echoes the assignment back as an input event; it must
        // not arm another fetch for the same text.
        sbox.input("zakat on gold jewelry", after(start, 600));
        assert_eq!(sbox.phase(), SuggestPhase::Idle);
        assert_eq!(sbox.poll(after(start, 2000)), None);

        // A genuinely new keystroke afterwards behaves normally.
        sbox.input("zakat on silver", after(start, 700));
        assert!(sbox.poll(after(start, 1200)).is_some());
    }

    #[test]
    fn dismiss_hides_the_dropdown_and_drops_in_flight_fetches() {
        let start = Instant::now();
        let mut sbox = SuggestBox::new(DEBOUNCE);
        sbox.input("zakat", start);
        let directive = sbox.poll(after(start, 500)).expect("fetch directive");

        sbox.dismiss();
        sbox.resolve(directive.generation, vec!["late".to_string()]);
        assert_eq!(sbox.phase(), SuggestPhase::Idle);
        assert!(sbox.suggestions().is_empty());
    }
}
