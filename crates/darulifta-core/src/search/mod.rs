mod filter;
mod rerank;

pub use filter::filter_records;
pub use rerank::apply_ranked_ids;

/// Queries shorter than this never reach the AI rank augmenter; the
/// plain keyword order stands.
pub const RERANK_MIN_QUERY_CHARS: usize = 4;
