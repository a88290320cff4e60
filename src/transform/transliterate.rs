//! Buckwalter transliteration via the static symbol tables.
use crate::{
    chars::data::{ARABIC_TO_BUCKWALTER, BUCKWALTER_TO_ARABIC},
    transform::Transform,
};
use phf::Map;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Arabic script → ASCII symbols.
    ToBuckwalter,
    /// ASCII symbols → Arabic script.
    FromBuckwalter,
}

/// One-to-one character mapping; characters absent from the table pass
/// through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Transliterate {
    pub direction: Direction,
}

impl Transliterate {
    pub const TO_BUCKWALTER: Self = Self {
        direction: Direction::ToBuckwalter,
    };
    pub const FROM_BUCKWALTER: Self = Self {
        direction: Direction::FromBuckwalter,
    };

    #[inline(always)]
    fn table(&self) -> &'static Map<char, char> {
        match self.direction {
            Direction::ToBuckwalter => &ARABIC_TO_BUCKWALTER,
            Direction::FromBuckwalter => &BUCKWALTER_TO_ARABIC,
        }
    }
}

impl Transform for Transliterate {
    fn name(&self) -> &'static str {
        match self.direction {
            Direction::ToBuckwalter => "arabic_to_transliteration",
            Direction::FromBuckwalter => "transliteration_to_arabic",
        }
    }

    #[inline(always)]
    fn needs_apply(&self, line: &str) -> bool {
        let table = self.table();
        line.chars().any(|c| table.contains_key(&c))
    }

    fn apply<'a>(&self, line: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&line) {
            return line;
        }
        let table = self.table();
        Cow::Owned(
            line.chars()
                .map(|c| table.get(&c).copied().unwrap_or(c))
                .collect(),
        )
    }
}
