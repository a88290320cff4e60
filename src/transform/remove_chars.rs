//! Character-class removal, replacement and pairwise translation.
use crate::{
    chars::{CharClass, CharSet},
    error::CleanError,
    transform::Transform,
};
use smallvec::SmallVec;
use std::borrow::Cow;

/// Deletes every character that belongs to the set.
#[derive(Debug, Clone)]
pub struct RemoveChars {
    set: CharSet,
}

impl RemoveChars {
    pub fn new(set: impl Into<CharSet>) -> Result<Self, CleanError> {
        Ok(Self {
            set: set.into().require_non_empty("remove_chars")?,
        })
    }

    /// Built-in classes are never empty.
    pub(crate) fn from_class(set: impl Into<CharSet>) -> Self {
        Self { set: set.into() }
    }
}

impl Transform for RemoveChars {
    fn name(&self) -> &'static str {
        "remove_chars"
    }

    #[inline(always)]
    fn needs_apply(&self, line: &str) -> bool {
        line.chars().any(|c| self.set.contains(c))
    }

    fn apply<'a>(&self, line: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&line) {
            return line;
        }
        Cow::Owned(line.chars().filter(|&c| !self.set.contains(c)).collect())
    }
}

/// Replaces every character of the set with a fixed string.
///
/// Used by the normalizers (`ٱ` → `ا`, `ﻻ` → `لا`) and the denormalizers,
/// which widen a letter into a bracketed search class.
#[derive(Debug, Clone)]
pub struct ReplaceChars {
    set: CharSet,
    with: String,
}

impl ReplaceChars {
    pub fn new(set: impl Into<CharSet>, with: impl Into<String>) -> Result<Self, CleanError> {
        Ok(Self {
            set: set.into().require_non_empty("replace_chars")?,
            with: with.into(),
        })
    }

    pub(crate) fn from_class(set: impl Into<CharSet>, with: impl Into<String>) -> Self {
        Self {
            set: set.into(),
            with: with.into(),
        }
    }
}

impl Transform for ReplaceChars {
    fn name(&self) -> &'static str {
        "replace_chars"
    }

    #[inline(always)]
    fn needs_apply(&self, line: &str) -> bool {
        line.chars().any(|c| self.set.contains(c))
    }

    fn apply<'a>(&self, line: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&line) {
            return line;
        }
        let mut out = String::with_capacity(line.len() + self.with.len());
        for c in line.chars() {
            if self.set.contains(c) {
                out.push_str(&self.with);
            } else {
                out.push(c);
            }
        }
        Cow::Owned(out)
    }
}

/// Pairwise one-to-one character translation (`from[i]` → `to[i]`).
#[derive(Debug, Clone)]
pub struct Translate {
    pairs: SmallVec<[(char, char); 16]>,
}

impl Translate {
    /// Both sides must be non-empty and hold the same number of characters.
    pub fn new(from: &str, to: &str) -> Result<Self, CleanError> {
        let pairs: SmallVec<[(char, char); 16]> = from.chars().zip(to.chars()).collect();
        let (n_from, n_to) = (from.chars().count(), to.chars().count());
        if n_from != n_to {
            return Err(CleanError::InvalidArgument(format!(
                "translate: {n_from} source characters but {n_to} replacements"
            )));
        }
        if pairs.is_empty() {
            return Err(CleanError::InvalidArgument(
                "translate: nothing to replace".into(),
            ));
        }
        Ok(Self { pairs })
    }

    /// Arabic-Indic digits → ASCII digits.
    pub fn arabic_to_english_digits() -> Self {
        let pairs = CharClass::ArabicDigits
            .table()
            .iter()
            .map(|&c| (c, digit_to_ascii(c)))
            .collect();
        Self { pairs }
    }

    #[inline(always)]
    fn lookup(&self, c: char) -> Option<char> {
        self.pairs.iter().find(|(from, _)| *from == c).map(|&(_, to)| to)
    }
}

#[inline]
fn digit_to_ascii(c: char) -> char {
    // U+0660..=U+0669 are contiguous, as are '0'..='9'.
    char::from(b'0' + (c as u32 - 0x0660) as u8)
}

impl Transform for Translate {
    fn name(&self) -> &'static str {
        "translate"
    }

    #[inline(always)]
    fn needs_apply(&self, line: &str) -> bool {
        line.chars().any(|c| self.lookup(c).is_some())
    }

    fn apply<'a>(&self, line: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&line) {
            return line;
        }
        Cow::Owned(
            line.chars()
                .map(|c| self.lookup(c).unwrap_or(c))
                .collect(),
        )
    }
}
