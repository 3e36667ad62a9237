//! How the question catalog reports requests that match nothing.

/// Whether out-of-range pages and empty searches are errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultPolicy {
    /// A page past the last page is an [crate::Error::InvalidPage] and a
    /// search with no matches is an [crate::Error::NoMatchingQuestions].
    #[default]
    Strict,
    /// A page past the last page and a search with no matches both succeed
    /// with an empty list of questions.
    Lenient,
}

impl ResultPolicy {
    /// Choose [ResultPolicy::Lenient] if `lenient` is set, otherwise [ResultPolicy::Strict].
    pub fn from_lenient_flag(lenient: bool) -> Self {
        if lenient {
            ResultPolicy::Lenient
        } else {
            ResultPolicy::Strict
        }
    }
}
