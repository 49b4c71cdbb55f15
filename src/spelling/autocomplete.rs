//! Prefix completion capability.

/// Something that can predict completions for a word stem.
pub trait AutoComplete {
    /// Return up to `num_completions` stored words that start with `prefix`,
    /// ordered by non-decreasing length. If `prefix` is itself a word it comes
    /// first. Equal-length words may appear in any order. A prefix with no
    /// path in the store yields an empty list.
    fn predict_completions(&self, prefix: &str, num_completions: usize) -> Vec<String>;
}
