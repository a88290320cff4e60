//! Line predicates.
//!
//! A [`LineFilter`] decides membership only: it never edits a line and never
//! reorders the survivors. The cleaner wraps each filter into one batch-level
//! operation that keeps the lines for which [`LineFilter::keep`] is `true`.
use crate::{
    chars::contains_persian, error::CleanError, transform::contains_single_char,
};

pub trait LineFilter: Send + Sync {
    /// Human-readable name – used in warnings and logs.
    fn name(&self) -> &'static str;

    /// `true` keeps the line.
    fn keep(&self, line: &str) -> bool;
}

/// How line length is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    /// Whitespace-separated tokens.
    #[default]
    Words,
    /// Unicode scalar values.
    Chars,
}

impl LengthUnit {
    #[inline]
    pub fn measure(self, line: &str) -> usize {
        match self {
            LengthUnit::Words => line.split_whitespace().count(),
            LengthUnit::Chars => line.chars().count(),
        }
    }
}

/// Which lengths survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBound {
    AtLeast(usize),
    AtMost(usize),
    Not(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthFilter {
    pub bound: LengthBound,
    pub unit: LengthUnit,
}

impl LengthFilter {
    pub fn new(bound: LengthBound, unit: LengthUnit) -> Self {
        Self { bound, unit }
    }

    /// Drops lines without a single word.
    pub fn non_empty() -> Self {
        Self::new(LengthBound::AtLeast(1), LengthUnit::Words)
    }

    /// Non-mutating view used by the eager accessors.
    pub(crate) fn matches(&self, line: &str) -> bool {
        let len = self.unit.measure(line);
        match self.bound {
            LengthBound::AtLeast(n) => len >= n,
            LengthBound::AtMost(n) => len <= n,
            LengthBound::Not(n) => len != n,
        }
    }
}

impl LineFilter for LengthFilter {
    fn name(&self) -> &'static str {
        match self.bound {
            LengthBound::AtLeast(_) => "remove_lines_below_len",
            LengthBound::AtMost(_) => "remove_lines_above_len",
            LengthBound::Not(_) => "remove_lines_with_len",
        }
    }

    #[inline]
    fn keep(&self, line: &str) -> bool {
        self.matches(line)
    }
}

/// Substring membership test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsFilter {
    pattern: String,
    keep_matching: bool,
}

impl ContainsFilter {
    pub fn new(pattern: impl Into<String>, keep_matching: bool) -> Result<Self, CleanError> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(CleanError::InvalidArgument(
                "line filter pattern must not be empty".into(),
            ));
        }
        Ok(Self {
            pattern,
            keep_matching,
        })
    }
}

impl LineFilter for ContainsFilter {
    fn name(&self) -> &'static str {
        if self.keep_matching {
            "keep_lines_contain"
        } else {
            "remove_lines_contain"
        }
    }

    #[inline]
    fn keep(&self, line: &str) -> bool {
        line.contains(self.pattern.as_str()) == self.keep_matching
    }
}

/// Drops lines holding a lone letter or digit token.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleCharFilter;

impl LineFilter for SingleCharFilter {
    fn name(&self) -> &'static str {
        "remove_lines_contain_single_char"
    }

    #[inline]
    fn keep(&self, line: &str) -> bool {
        !contains_single_char(line)
    }
}

/// Drops lines holding a Persian-only letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersianFilter;

impl LineFilter for PersianFilter {
    fn name(&self) -> &'static str {
        "remove_lines_contain_persian"
    }

    #[inline]
    fn keep(&self, line: &str) -> bool {
        !contains_persian(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lines_are_dropped() {
        let f = LengthFilter::non_empty();
        assert!(!f.keep(""));
        assert!(!f.keep("   \t"));
        assert!(f.keep("نص"));
    }

    #[test]
    fn word_and_char_units_differ() {
        let line = "نص عربي";
        assert_eq!(LengthUnit::Words.measure(line), 2);
        assert_eq!(LengthUnit::Chars.measure(line), 7);
        let f = LengthFilter::new(LengthBound::AtMost(3), LengthUnit::Chars);
        assert!(!f.keep(line));
        let f = LengthFilter::new(LengthBound::AtMost(3), LengthUnit::Words);
        assert!(f.keep(line));
    }

    #[test]
    fn not_bound_removes_exact_length() {
        let f = LengthFilter::new(LengthBound::Not(2), LengthUnit::Words);
        assert!(!f.keep("a b"));
        assert!(f.keep("a b c"));
    }

    #[test]
    fn contains_filter_both_directions() {
        let drop = ContainsFilter::new("http", false).unwrap();
        let keep = ContainsFilter::new("http", true).unwrap();
        assert!(!drop.keep("see http://x"));
        assert!(keep.keep("see http://x"));
        assert!(drop.keep("plain"));
        assert!(ContainsFilter::new("", true).is_err());
    }

    #[test]
    fn script_filters() {
        assert!(!SingleCharFilter.keep("ذهب و عاد"));
        assert!(SingleCharFilter.keep("ذهب وعاد"));
        assert!(!PersianFilter.keep("چه خبر"));
        assert!(PersianFilter.keep("ما الخبر"));
    }
}
