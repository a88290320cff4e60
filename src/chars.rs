pub mod data;

pub use data::CharClass;

use crate::error::CleanError;
use smallvec::SmallVec;
use std::ops::BitOr;

/// Union of character classes plus any explicit characters.
///
/// `CharSet` is the only argument shape accepted by the character-level
/// removers and keepers, so a malformed set is rejected once, when the
/// transform is built, and never while lines are being processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    classes: SmallVec<[CharClass; 4]>,
    extra: SmallVec<[char; 8]>,
}

impl CharSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a literal list of characters. Empty input is an error.
    pub fn parse(chars: &str) -> Result<Self, CleanError> {
        if chars.is_empty() {
            return Err(CleanError::InvalidArgument(
                "character set must contain at least one character".into(),
            ));
        }
        Ok(Self::new().with_chars(chars))
    }

    pub fn with(mut self, class: CharClass) -> Self {
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn with_chars(mut self, chars: &str) -> Self {
        for c in chars.chars() {
            if !self.extra.contains(&c) {
                self.extra.push(c);
            }
        }
        self
    }

    #[inline(always)]
    pub fn contains(&self, c: char) -> bool {
        self.classes.iter().any(|class| class.contains(c)) || self.extra.contains(&c)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.extra.is_empty() && self.classes.iter().all(|class| class.table().is_empty())
    }

    /// Reject empty sets with the argument name in the message.
    pub(crate) fn require_non_empty(self, what: &str) -> Result<Self, CleanError> {
        if self.is_empty() {
            return Err(CleanError::InvalidArgument(format!(
                "{what}: character set is empty"
            )));
        }
        Ok(self)
    }
}

impl From<CharClass> for CharSet {
    #[inline]
    fn from(class: CharClass) -> Self {
        CharSet::new().with(class)
    }
}

impl<const N: usize> From<[CharClass; N]> for CharSet {
    fn from(classes: [CharClass; N]) -> Self {
        classes.into_iter().fold(CharSet::new(), CharSet::with)
    }
}

impl BitOr for CharClass {
    type Output = CharSet;

    fn bitor(self, rhs: CharClass) -> CharSet {
        CharSet::from(self).with(rhs)
    }
}

impl BitOr<CharClass> for CharSet {
    type Output = CharSet;

    fn bitor(self, rhs: CharClass) -> CharSet {
        self.with(rhs)
    }
}

/// Every harakah the keep-only family strips before retention.
pub const HARAKAT: [CharClass; 2] = [CharClass::HarakatMain, CharClass::HarakatOther];

/// `true` when the line carries any letter unique to Persian.
#[inline]
pub fn contains_persian(line: &str) -> bool {
    line.chars().any(data::is_persian_letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_cover_expected_members() {
        assert!(CharClass::ArabicLetters.contains('ب'));
        assert!(!CharClass::ArabicLetters.contains('ـ'));
        assert!(CharClass::Tatweel.contains('ـ'));
        assert!(CharClass::EnglishPunctuation.contains('\\'));
        assert!(CharClass::ArabicPunctuation.contains('؟'));
        assert!(CharClass::OtherPunctuation.contains('\u{2026}'));
        assert!(CharClass::HarakatMain.contains('\u{064E}'));
        assert!(CharClass::HarakatOther.contains('\u{0670}'));
    }

    #[test]
    fn union_is_membership_of_any_member() {
        let set = CharClass::ArabicLetters | CharClass::EnglishDigits;
        assert!(set.contains('س'));
        assert!(set.contains('7'));
        assert!(!set.contains('a'));

        let set = set.with_chars("_");
        assert!(set.contains('_'));
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(
            CharSet::parse(""),
            Err(CleanError::InvalidArgument(_))
        ));
        assert!(CharSet::parse("ab").unwrap().contains('b'));
    }

    #[test]
    fn empty_set_detection() {
        assert!(CharSet::new().is_empty());
        assert!(CharSet::new().require_non_empty("remove").is_err());
        assert!(!CharSet::from(CharClass::Tatweel).is_empty());
    }

    #[test]
    fn detects_persian_letters() {
        assert!(contains_persian("گردد"));
        assert!(!contains_persian("نص عربي"));
    }

    #[test]
    fn buckwalter_tables_are_inverse() {
        for (arabic, latin) in data::ARABIC_TO_BUCKWALTER.entries() {
            assert_eq!(data::BUCKWALTER_TO_ARABIC.get(latin), Some(arabic));
        }
    }
}
