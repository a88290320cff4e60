//! Fluent cleaning surface shared by every cleaner.
//!
//! Each method wraps one transform, filter or split into a single
//! [`Operation`] and hands it to [`CleanOps::push_operation`]. What happens
//! next is up to the implementor: an eager [`Cleaner`](crate::Cleaner) runs
//! it right away, the stream cleaners only record it. The call chain is the
//! same either way.
//!
//! ```
//! use naqi::{CleanOps, Cleaner};
//!
//! let mut c = Cleaner::from_text("  نص عربي english text  ", "\n");
//! c.remove_english_text().strip();
//! assert_eq!(c.text().unwrap(), "نص عربي");
//! ```
use crate::{
    chars::{CharClass, CharSet, HARAKAT},
    cleaner::Mode,
    error::CleanError,
    filter::{
        ContainsFilter, LengthBound, LengthFilter, LengthUnit, LineFilter, PersianFilter,
        SingleCharFilter,
    },
    operation::{Operation, OperationQueue},
    transform::{
        CollapseSpaces, ConnectSingleChar, KeepOnly, KeepOptions, RemoveChars, RemoveEmoji,
        RemoveHashtags, RemoveLinks, RemoveMentions, RemoveSingleChars, ReplaceChars,
        SqueezeRepeats, Transform, Translate, Transliterate, Trim, keep_only::KEEP_HARAKAT,
        select_columns, split_on,
    },
};
use std::collections::HashSet;

const NORMAL_ALEF: &str = "ا";
const NORMAL_HAMZA: &str = "ء";
const LAM_ALEF: &str = "لا";
const ALEF_CLASS: &str = "[إأٱآا\u{0670}]";
const HAMZA_CLASS: &str = "[ءؤئ\u{0655}\u{0656}]";

pub trait CleanOps {
    /// Fixed for the lifetime of the cleaner.
    fn mode(&self) -> Mode;

    /// Record (and, in eager mode, run) one operation.
    fn push_operation(&mut self, op: Operation) -> &mut Self;

    /// Every operation declared so far, in declaration order.
    fn operations(&self) -> &OperationQueue;

    fn clear_operations(&mut self) -> &mut Self;

    // ---------------------------------------------------------------------
    //  remove
    // ---------------------------------------------------------------------

    fn remove_english_text(&mut self) -> &mut Self {
        remove(self, "remove_english_text", CharClass::EnglishLetters)
    }

    fn remove_arabic_text(&mut self) -> &mut Self {
        remove(self, "remove_arabic_text", CharClass::ArabicLetters)
    }

    fn remove_numbers(&mut self) -> &mut Self {
        remove(
            self,
            "remove_numbers",
            CharClass::ArabicDigits | CharClass::EnglishDigits,
        )
    }

    fn remove_arabic_numbers(&mut self) -> &mut Self {
        remove(self, "remove_arabic_numbers", CharClass::ArabicDigits)
    }

    fn remove_english_numbers(&mut self) -> &mut Self {
        remove(self, "remove_english_numbers", CharClass::EnglishDigits)
    }

    fn remove_arabic_punctuation(&mut self) -> &mut Self {
        remove(self, "remove_arabic_punctuation", CharClass::ArabicPunctuation)
    }

    fn remove_english_punctuation(&mut self) -> &mut Self {
        remove(self, "remove_english_punctuation", CharClass::EnglishPunctuation)
    }

    fn remove_other_punctuation(&mut self) -> &mut Self {
        remove(self, "remove_other_punctuation", CharClass::OtherPunctuation)
    }

    /// Arabic, English and every other punctuation class. Diacritics are
    /// left in place.
    fn remove_punctuation(&mut self) -> &mut Self {
        remove(
            self,
            "remove_punctuation",
            CharClass::ArabicPunctuation
                | CharClass::EnglishPunctuation
                | CharClass::OtherPunctuation,
        )
    }

    fn remove_tashkeel_main(&mut self) -> &mut Self {
        remove(self, "remove_tashkeel_main", CharClass::HarakatMain)
    }

    fn remove_tashkeel_other(&mut self) -> &mut Self {
        remove(self, "remove_tashkeel_other", CharClass::HarakatOther)
    }

    fn remove_tashkeel(&mut self) -> &mut Self {
        remove(self, "remove_tashkeel", HARAKAT)
    }

    fn remove_tatweel(&mut self) -> &mut Self {
        remove(self, "remove_tatweel", CharClass::Tatweel)
    }

    fn remove_quranic_annotations(&mut self) -> &mut Self {
        remove(self, "remove_quranic_annotations", CharClass::QuranicAnnotations)
    }

    fn remove_honorific_signs(&mut self) -> &mut Self {
        remove(self, "remove_honorific_signs", CharClass::HonorificSigns)
    }

    /// Every run of spaces becomes exactly `keep` spaces.
    fn remove_extra_spaces(&mut self, keep: usize) -> &mut Self {
        self.push_operation(Operation::map(CollapseSpaces { keep }))
    }

    fn remove_emojis(&mut self) -> &mut Self {
        self.push_operation(Operation::map(RemoveEmoji))
    }

    fn remove_hashtags(&mut self) -> &mut Self {
        self.push_operation(Operation::map(RemoveHashtags))
    }

    fn remove_links(&mut self) -> &mut Self {
        self.push_operation(Operation::map(RemoveLinks))
    }

    fn remove_mentions(&mut self) -> &mut Self {
        self.push_operation(Operation::map(RemoveMentions))
    }

    fn remove_single_chars(&mut self) -> &mut Self {
        self.push_operation(Operation::map(RemoveSingleChars))
    }

    fn remove_chars(&mut self, set: impl Into<CharSet>) -> Result<&mut Self, CleanError> {
        let t = RemoveChars::new(set)?;
        Ok(self.push_operation(Operation::map(t)))
    }

    // ---------------------------------------------------------------------
    //  replace / normalize
    // ---------------------------------------------------------------------

    fn replace_chars(
        &mut self,
        set: impl Into<CharSet>,
        with: impl Into<String>,
    ) -> Result<&mut Self, CleanError> {
        let t = ReplaceChars::new(set, with)?;
        Ok(self.push_operation(Operation::map(t)))
    }

    /// Pairwise replacement: the i-th char of `from` becomes the i-th of `to`.
    fn translate(&mut self, from: &str, to: &str) -> Result<&mut Self, CleanError> {
        let t = Translate::new(from, to)?;
        Ok(self.push_operation(Operation::map(t)))
    }

    fn replace_arabic_numbers_to_english(&mut self) -> &mut Self {
        map(
            self,
            "replace_arabic_numbers_to_english",
            Translate::arabic_to_english_digits(),
        )
    }

    /// Runs longer than `repeated` shrink to `keep` copies.
    fn replace_repeated_chars(
        &mut self,
        repeated: usize,
        keep: usize,
    ) -> Result<&mut Self, CleanError> {
        let t = SqueezeRepeats::new(repeated, keep)?;
        Ok(self.push_operation(Operation::map(t)))
    }

    fn connect_single_char(&mut self, with_prev: bool) -> &mut Self {
        self.push_operation(Operation::map(ConnectSingleChar { with_prev }))
    }

    fn strip(&mut self) -> &mut Self {
        self.push_operation(Operation::map(Trim))
    }

    fn normalize_lamalef(&mut self) -> &mut Self {
        replace(self, "normalize_lamalef", CharClass::LamAlefLigatures, LAM_ALEF)
    }

    fn normalize_alef(&mut self) -> &mut Self {
        replace(self, "normalize_alef", CharClass::AlefVariants, NORMAL_ALEF)
    }

    fn normalize_hamza(&mut self) -> &mut Self {
        replace(self, "normalize_hamza", CharClass::HamzaVariants, NORMAL_HAMZA)
    }

    /// Lam-alef, then alef, then hamza.
    fn normalize(&mut self) -> &mut Self {
        self.normalize_lamalef().normalize_alef().normalize_hamza()
    }

    /// Widen every alef variant into a bracketed search class.
    fn denormalize_alef(&mut self) -> &mut Self {
        replace(self, "denormalize_alef", CharClass::AlefVariants, ALEF_CLASS)
    }

    fn denormalize_hamza(&mut self) -> &mut Self {
        replace(self, "denormalize_hamza", CharClass::HamzaVariants, HAMZA_CLASS)
    }

    fn denormalize(&mut self) -> &mut Self {
        self.denormalize_alef().denormalize_hamza()
    }

    fn arabic_to_transliteration(&mut self) -> &mut Self {
        self.push_operation(Operation::map(Transliterate::TO_BUCKWALTER))
    }

    fn transliteration_to_arabic(&mut self) -> &mut Self {
        self.push_operation(Operation::map(Transliterate::FROM_BUCKWALTER))
    }

    // ---------------------------------------------------------------------
    //  keep only (one compound operation each)
    // ---------------------------------------------------------------------

    fn keep_arabic_only(&mut self) -> &mut Self {
        keep(
            self,
            "keep_arabic_only",
            CharClass::ArabicLetters.into(),
            KeepOptions::default(),
        )
    }

    fn keep_english_only(&mut self) -> &mut Self {
        keep(
            self,
            "keep_english_only",
            CharClass::EnglishLetters.into(),
            KeepOptions::default(),
        )
    }

    fn keep_numbers_only(&mut self) -> &mut Self {
        keep(
            self,
            "keep_numbers_only",
            CharClass::ArabicDigits | CharClass::EnglishDigits,
            KeepOptions::default(),
        )
    }

    fn keep_arabic_and_numbers_only(&mut self) -> &mut Self {
        keep(
            self,
            "keep_arabic_and_numbers_only",
            CharClass::ArabicLetters | CharClass::ArabicDigits | CharClass::EnglishDigits,
            KeepOptions::default(),
        )
    }

    fn keep_arabic_and_english_numbers_only(&mut self) -> &mut Self {
        keep(
            self,
            "keep_arabic_and_english_numbers_only",
            CharClass::ArabicLetters | CharClass::EnglishDigits,
            KeepOptions::default(),
        )
    }

    /// Main harakat survive; everything else outside the Arabic letters goes.
    fn keep_arabic_with_tashkeel_only(&mut self) -> &mut Self {
        keep(
            self,
            "keep_arabic_with_tashkeel_only",
            CharClass::ArabicLetters | CharClass::HarakatMain,
            KEEP_HARAKAT,
        )
    }

    fn keep_arabic_and_english_only(&mut self) -> &mut Self {
        keep(
            self,
            "keep_arabic_and_english_only",
            CharClass::ArabicLetters | CharClass::EnglishLetters,
            KeepOptions::default(),
        )
    }

    fn keep_english_and_numbers_only(&mut self) -> &mut Self {
        keep(
            self,
            "keep_english_and_numbers_only",
            CharClass::EnglishLetters | CharClass::EnglishDigits,
            KeepOptions::default(),
        )
    }

    fn keep_only(
        &mut self,
        set: impl Into<CharSet>,
        options: KeepOptions,
    ) -> Result<&mut Self, CleanError> {
        let t = KeepOnly::new(set, options)?;
        Ok(self.push_operation(Operation::map(t)))
    }

    // ---------------------------------------------------------------------
    //  line filters
    // ---------------------------------------------------------------------

    /// Drops lines with no word at all (whitespace-only lines included).
    fn remove_empty_lines(&mut self) -> &mut Self {
        filter(self, "remove_empty_lines", LengthFilter::non_empty())
    }

    fn remove_lines_below_len(&mut self, length: usize, unit: LengthUnit) -> &mut Self {
        filter(
            self,
            "remove_lines_below_len",
            LengthFilter::new(LengthBound::AtLeast(length), unit),
        )
    }

    fn remove_lines_above_len(&mut self, length: usize, unit: LengthUnit) -> &mut Self {
        filter(
            self,
            "remove_lines_above_len",
            LengthFilter::new(LengthBound::AtMost(length), unit),
        )
    }

    fn remove_lines_with_len(&mut self, length: usize, unit: LengthUnit) -> &mut Self {
        filter(
            self,
            "remove_lines_with_len",
            LengthFilter::new(LengthBound::Not(length), unit),
        )
    }

    fn remove_lines_contain(&mut self, pattern: &str) -> Result<&mut Self, CleanError> {
        let f = ContainsFilter::new(pattern, false)?;
        Ok(self.push_operation(Operation::filter(f)))
    }

    fn keep_lines_contain(&mut self, pattern: &str) -> Result<&mut Self, CleanError> {
        let f = ContainsFilter::new(pattern, true)?;
        Ok(self.push_operation(Operation::filter(f)))
    }

    fn remove_lines_contain_single_char(&mut self) -> &mut Self {
        self.push_operation(Operation::filter(SingleCharFilter))
    }

    fn remove_lines_contain_persian(&mut self) -> &mut Self {
        self.push_operation(Operation::filter(PersianFilter))
    }

    // ---------------------------------------------------------------------
    //  structural
    // ---------------------------------------------------------------------

    /// Split every line on `sep` and flatten, keeping empty pieces.
    fn split_on(&mut self, sep: &str) -> Result<&mut Self, CleanError> {
        if sep.is_empty() {
            return Err(CleanError::InvalidArgument(
                "split_on: separator must not be empty".into(),
            ));
        }
        let sep = sep.to_owned();
        Ok(self.push_operation(Operation::flat_map("split_on", move |line| {
            split_on(line, &sep)
        })))
    }

    /// Split every line on `delim` and keep only `columns`, flattened in the
    /// order given.
    fn split_columns(&mut self, delim: &str, columns: &[usize]) -> Result<&mut Self, CleanError> {
        if delim.is_empty() || columns.is_empty() {
            return Err(CleanError::InvalidArgument(
                "split_columns: needs a delimiter and at least one column".into(),
            ));
        }
        let delim = delim.to_owned();
        let columns = columns.to_vec();
        Ok(self.push_operation(Operation::flat_map("split_columns", move |line| {
            select_columns(line, &delim, &columns)
        })))
    }

    // ---------------------------------------------------------------------
    //  whole collection
    // ---------------------------------------------------------------------

    /// Keeps the first occurrence of every line. Needs the whole collection,
    /// so it is refused in streaming mode.
    fn remove_duplicates(&mut self) -> Result<&mut Self, CleanError> {
        if self.mode() == Mode::Streaming {
            return Err(CleanError::eager_only("remove_duplicates"));
        }
        Ok(self.push_operation(Operation::collection("remove_duplicates", dedup)))
    }

    // ---------------------------------------------------------------------
    //  presets
    // ---------------------------------------------------------------------

    fn twitter_pipeline(&mut self) -> &mut Self {
        self.strip().remove_hashtags().remove_mentions().remove_links()
    }

    fn twitter_arabic_pipeline(&mut self) -> &mut Self {
        self.twitter_pipeline().keep_arabic_only();
        map(self, "replace_repeated_chars", SqueezeRepeats::fixed(3, 2)).remove_empty_lines()
    }
}

#[inline]
fn map<'c, C, T>(c: &'c mut C, name: &'static str, t: T) -> &'c mut C
where
    C: CleanOps + ?Sized,
    T: Transform + 'static,
{
    c.push_operation(Operation::map(t).named(name))
}

#[inline]
fn remove<'c, C: CleanOps + ?Sized>(
    c: &'c mut C,
    name: &'static str,
    set: impl Into<CharSet>,
) -> &'c mut C {
    map(c, name, RemoveChars::from_class(set))
}

#[inline]
fn replace<'c, C: CleanOps + ?Sized>(
    c: &'c mut C,
    name: &'static str,
    set: CharClass,
    with: &str,
) -> &'c mut C {
    map(c, name, ReplaceChars::from_class(set, with))
}

#[inline]
fn keep<'c, C: CleanOps + ?Sized>(
    c: &'c mut C,
    name: &'static str,
    set: CharSet,
    options: KeepOptions,
) -> &'c mut C {
    map(c, name, KeepOnly::from_class(set, options))
}

#[inline]
fn filter<'c, C, F>(c: &'c mut C, name: &'static str, f: F) -> &'c mut C
where
    C: CleanOps + ?Sized,
    F: LineFilter + 'static,
{
    c.push_operation(Operation::filter(f).named(name))
}

fn dedup(lines: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(lines.len());
    lines
        .into_iter()
        .filter(|line| seen.insert(line.clone()))
        .collect()
}
