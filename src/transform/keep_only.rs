//! Compound keep-only transform.
//!
//! Strips harakat and tatweel first (each optional), then replaces every
//! character outside the kept set with a space, collapses space runs and trims
//! the edges. The three steps are one transform so the stripping always
//! happens before retention, whichever execution mode runs it.
use crate::{
    chars::{CharClass, CharSet, HARAKAT},
    error::CleanError,
    transform::Transform,
};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeepOptions {
    /// Delete harakat before retention.
    pub strip_harakat: bool,
    /// Delete tatweel before retention.
    pub strip_tatweel: bool,
}

impl Default for KeepOptions {
    fn default() -> Self {
        Self {
            strip_harakat: true,
            strip_tatweel: true,
        }
    }
}

/// Keep diacritics (they must then be part of the kept set to survive).
pub const KEEP_HARAKAT: KeepOptions = KeepOptions {
    strip_harakat: false,
    strip_tatweel: true,
};

/// Plain retention with no stripping step.
pub const KEEP_RAW: KeepOptions = KeepOptions {
    strip_harakat: false,
    strip_tatweel: false,
};

#[derive(Debug, Clone)]
pub struct KeepOnly {
    set: CharSet,
    options: KeepOptions,
}

impl KeepOnly {
    pub fn new(set: impl Into<CharSet>, options: KeepOptions) -> Result<Self, CleanError> {
        Ok(Self {
            set: set.into().require_non_empty("keep_only")?,
            options,
        })
    }

    pub(crate) fn from_class(set: impl Into<CharSet>, options: KeepOptions) -> Self {
        Self {
            set: set.into(),
            options,
        }
    }

    #[inline(always)]
    fn is_stripped(&self, c: char) -> bool {
        (self.options.strip_harakat && HARAKAT.iter().any(|class| class.contains(c)))
            || (self.options.strip_tatweel && CharClass::Tatweel.contains(c))
    }
}

impl Transform for KeepOnly {
    fn name(&self) -> &'static str {
        "keep_only"
    }

    fn needs_apply(&self, line: &str) -> bool {
        if line.trim().len() != line.len() {
            return true;
        }
        let mut prev_space = false;
        for c in line.chars() {
            if self.is_stripped(c) || !self.set.contains(c) {
                return true;
            }
            // Kept spaces still collapse.
            let space = c == ' ';
            if space && prev_space {
                return true;
            }
            prev_space = space;
        }
        false
    }

    fn apply<'a>(&self, line: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&line) {
            return line;
        }
        let mut out = String::with_capacity(line.len());
        let mut pending_space = false;
        for c in line.chars() {
            if self.is_stripped(c) {
                continue;
            }
            let c = if self.set.contains(c) { c } else { ' ' };
            if c == ' ' {
                pending_space = true;
                continue;
            }
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        }
        // Kept non-space whitespace (a set containing '\t') still trims.
        let trimmed = out.trim();
        if trimmed.len() != out.len() {
            out = trimmed.to_owned();
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::remove_chars::RemoveChars;

    fn keep(set: impl Into<CharSet>, options: KeepOptions, input: &str) -> String {
        KeepOnly::from_class(set, options)
            .apply(Cow::Borrowed(input))
            .into_owned()
    }

    #[test]
    fn keeps_arabic_only() {
        assert_eq!(
            keep(
                CharClass::ArabicLetters,
                KeepOptions::default(),
                "هذا النص عربي This is an English Text 123456789 !@#$%^&*)(_+ 漢字 ٤٥٦"
            ),
            "هذا النص عربي"
        );
    }

    #[test]
    fn strips_harakat_and_tatweel_before_retention() {
        assert_eq!(
            keep(CharClass::ArabicLetters, KeepOptions::default(), "كَتَبَ بـــ"),
            "كتب ب"
        );
    }

    #[test]
    fn raw_retention_turns_harakat_into_gaps() {
        assert_eq!(
            keep(CharClass::ArabicLetters, KEEP_RAW, "كَتَبَ"),
            "ك ت ب"
        );
    }

    #[test]
    fn keeps_harakat_when_asked() {
        let set = CharSet::from(CharClass::ArabicLetters).with(CharClass::HarakatMain);
        assert_eq!(keep(set, KEEP_HARAKAT, "كَتَبَ abc"), "كَتَبَ");
    }

    #[test]
    fn empty_result_for_foreign_line() {
        assert_eq!(
            keep(CharClass::ArabicLetters, KeepOptions::default(), "Only English Text"),
            ""
        );
    }

    #[test]
    fn zero_copy_on_clean_line() {
        let t = KeepOnly::from_class(CharClass::ArabicLetters, KeepOptions::default());
        assert!(!t.needs_apply("كتاب"));
        assert!(t.needs_apply("كتاب جميل"));
        assert!(matches!(t.apply(Cow::Borrowed("كتاب")), Cow::Borrowed(_)));
    }

    #[test]
    fn compound_matches_explicit_strip_then_keep() {
        let input = "مُحَمَّدٌ رسولُ اللهِ ـ abc";
        let strip = RemoveChars::from_class(HARAKAT).apply(Cow::Borrowed(input));
        let strip = RemoveChars::from_class(CharClass::Tatweel).apply(strip);
        let then_keep = KeepOnly::from_class(CharClass::ArabicLetters, KEEP_RAW).apply(strip);
        assert_eq!(
            then_keep,
            keep(CharClass::ArabicLetters, KeepOptions::default(), input)
        );
    }
}
