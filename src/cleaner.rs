//! The cleaner core.
//!
//! A [`Cleaner`] is created in one [`Mode`] and keeps it for life.
//!
//! * **Eager** – owns the line collection. Every fluent call runs its
//!   operation immediately and replaces the collection with the result.
//! * **Streaming** – owns no lines. Fluent calls only extend the operation
//!   queue, which a [`StreamDriver`](crate::stream::StreamDriver) later
//!   replays batch by batch.
//!
//! Both modes record every declared operation, so an eager session can be
//! reused as a streaming template via [`CleanOps::operations`].
use crate::{
    chars::{CharClass, CharSet},
    error::CleanError,
    executor::{EmptyResultInspector, Warning, execute_one},
    filter::{LengthBound, LengthFilter, LengthUnit},
    operation::{Operation, OperationQueue},
    ops::CleanOps,
    stream::config::FileOptions,
    transform::{KeepOnly, KeepOptions, Transform, keep_only::KEEP_HARAKAT},
};
use rand::{SeedableRng, rngs::StdRng, seq::index};
use std::{
    borrow::Cow,
    collections::{BTreeSet, HashSet},
    fs,
    path::Path,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Eager,
    Streaming,
}

#[derive(Debug, Clone)]
enum State {
    Eager(Vec<String>),
    Streaming,
}

#[derive(Debug, Clone)]
pub struct Cleaner {
    state: State,
    queue: OperationQueue,
    separator: String,
    raw_text: Option<String>,
    warnings: Vec<Warning>,
}

/// Trim `text`, split it on `sep` and trim every piece. Blank text has no
/// lines; an empty separator keeps the text as one line.
pub(crate) fn split_text(text: &str, sep: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    if sep.is_empty() {
        return vec![text.to_owned()];
    }
    text.split(sep).map(|line| line.trim().to_owned()).collect()
}

impl Cleaner {
    /// `lines` is ignored in streaming mode.
    pub fn new(lines: Vec<String>, mode: Mode) -> Self {
        let state = match mode {
            Mode::Eager => State::Eager(lines),
            Mode::Streaming => {
                if !lines.is_empty() {
                    tracing::debug!(
                        dropped = lines.len(),
                        "streaming cleaner does not own lines; initial lines ignored"
                    );
                }
                State::Streaming
            }
        };
        Self {
            state,
            queue: OperationQueue::new(),
            separator: "\n".into(),
            raw_text: None,
            warnings: Vec::new(),
        }
    }

    pub fn eager(lines: Vec<String>) -> Self {
        Self::new(lines, Mode::Eager)
    }

    /// Operation recorder with no lines of its own.
    pub fn streaming() -> Self {
        Self::new(Vec::new(), Mode::Streaming)
    }

    /// Eager cleaner over `text` split on `sep`.
    pub fn from_text(text: &str, sep: &str) -> Self {
        let mut cleaner = Self::eager(split_text(text, sep));
        cleaner.separator = sep.to_owned();
        cleaner.raw_text = Some(text.to_owned());
        cleaner
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CleanError> {
        Self::from_file_with(path, FileOptions::default())
    }

    /// Load a whole file eagerly. Files above `options.max_bytes` are
    /// refused; stream them instead.
    pub fn from_file_with(
        path: impl AsRef<Path>,
        options: FileOptions,
    ) -> Result<Self, CleanError> {
        let path = path.as_ref();
        let meta = fs::metadata(path)
            .ok()
            .filter(|m| m.is_file())
            .ok_or_else(|| CleanError::SourceNotFound(path.to_path_buf()))?;
        if meta.len() > options.max_bytes {
            return Err(CleanError::SourceTooLarge {
                path: path.to_path_buf(),
                size: meta.len(),
                limit: options.max_bytes,
            });
        }
        let text = options.encoding.decode(fs::read(path)?)?;
        Ok(Self::from_text(&text, &options.separator))
    }

    #[inline]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Empty-result warnings raised by eager operations so far.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    fn owned(&self, what: &str) -> Result<&Vec<String>, CleanError> {
        match &self.state {
            State::Eager(lines) => Ok(lines),
            State::Streaming => Err(CleanError::eager_only(what)),
        }
    }

    fn owned_mut(&mut self, what: &str) -> Result<&mut Vec<String>, CleanError> {
        match &mut self.state {
            State::Eager(lines) => Ok(lines),
            State::Streaming => Err(CleanError::eager_only(what)),
        }
    }

    // ---------------------------------------------------------------------
    //  accessors (eager only)
    // ---------------------------------------------------------------------

    pub fn lines(&self) -> Result<&[String], CleanError> {
        self.owned("lines").map(Vec::as_slice)
    }

    /// Lines joined with the separator.
    pub fn text(&self) -> Result<String, CleanError> {
        Ok(self.owned("text")?.join(&self.separator))
    }

    /// The text the cleaner was built from, before any operation.
    pub fn raw_text(&self) -> Result<Option<&str>, CleanError> {
        self.owned("raw_text")?;
        Ok(self.raw_text.as_deref())
    }

    pub fn len(&self) -> Result<usize, CleanError> {
        Ok(self.owned("len")?.len())
    }

    pub fn is_empty(&self) -> Result<bool, CleanError> {
        Ok(self.owned("is_empty")?.is_empty())
    }

    pub fn get(&self, index: usize) -> Result<&str, CleanError> {
        let lines = self.owned("get")?;
        lines
            .get(index)
            .map(String::as_str)
            .ok_or(CleanError::OutOfRange {
                index,
                len: lines.len(),
            })
    }

    pub fn into_lines(self) -> Result<Vec<String>, CleanError> {
        match self.state {
            State::Eager(lines) => Ok(lines),
            State::Streaming => Err(CleanError::eager_only("into_lines")),
        }
    }

    /// First `n` lines (all of them when `n` is larger).
    pub fn head(&self, n: usize) -> Result<&[String], CleanError> {
        let lines = self.owned("head")?;
        Ok(&lines[..n.min(lines.len())])
    }

    /// Last `n` lines (all of them when `n` is larger).
    pub fn tail(&self, n: usize) -> Result<&[String], CleanError> {
        let lines = self.owned("tail")?;
        Ok(&lines[lines.len().saturating_sub(n)..])
    }

    /// `n` distinct lines chosen by a seeded generator, in collection order.
    /// The same seed always picks the same lines.
    pub fn sample(&self, n: usize, seed: u64) -> Result<Vec<String>, CleanError> {
        let lines = self.owned("sample")?;
        if n > lines.len() {
            return Err(CleanError::InvalidArgument(format!(
                "cannot sample {n} lines from {}",
                lines.len()
            )));
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let mut picked = index::sample(&mut rng, lines.len(), n).into_vec();
        picked.sort_unstable();
        Ok(picked.into_iter().map(|i| lines[i].clone()).collect())
    }

    pub fn unique_chars(&self) -> Result<BTreeSet<char>, CleanError> {
        Ok(self
            .owned("unique_chars")?
            .iter()
            .flat_map(|line| line.chars())
            .collect())
    }

    fn lines_where(
        &self,
        what: &str,
        bound: LengthBound,
        unit: LengthUnit,
    ) -> Result<Vec<&str>, CleanError> {
        let filter = LengthFilter::new(bound, unit);
        Ok(self
            .owned(what)?
            .iter()
            .map(String::as_str)
            .filter(|line| filter.matches(line))
            .collect())
    }

    /// Lines strictly shorter than `length`. The collection is not changed.
    pub fn lines_below_len(
        &self,
        length: usize,
        unit: LengthUnit,
    ) -> Result<Vec<&str>, CleanError> {
        if length == 0 {
            self.owned("lines_below_len")?;
            return Ok(Vec::new());
        }
        self.lines_where("lines_below_len", LengthBound::AtMost(length - 1), unit)
    }

    /// Lines strictly longer than `length`.
    pub fn lines_above_len(
        &self,
        length: usize,
        unit: LengthUnit,
    ) -> Result<Vec<&str>, CleanError> {
        let bound = LengthBound::AtLeast(length.saturating_add(1));
        self.lines_where("lines_above_len", bound, unit)
    }

    /// Lines of exactly `length`.
    pub fn lines_with_len(
        &self,
        length: usize,
        unit: LengthUnit,
    ) -> Result<Vec<&str>, CleanError> {
        let filter = LengthFilter::new(LengthBound::Not(length), unit);
        Ok(self
            .owned("lines_with_len")?
            .iter()
            .map(String::as_str)
            .filter(|line| !filter.matches(line))
            .collect())
    }

    // ---------------------------------------------------------------------
    //  extractors (eager only, never change the collection)
    // ---------------------------------------------------------------------

    fn extract(
        &self,
        what: &str,
        set: impl Into<CharSet>,
        options: KeepOptions,
    ) -> Result<String, CleanError> {
        let keep = KeepOnly::from_class(set, options);
        let kept: Vec<Cow<'_, str>> = self
            .owned(what)?
            .iter()
            .map(|line| keep.apply(Cow::Borrowed(line.as_str())))
            .collect();
        Ok(kept.join(&self.separator))
    }

    pub fn arabic_text(&self) -> Result<String, CleanError> {
        self.extract("arabic_text", CharClass::ArabicLetters, KeepOptions::default())
    }

    pub fn english_text(&self) -> Result<String, CleanError> {
        self.extract("english_text", CharClass::EnglishLetters, KeepOptions::default())
    }

    pub fn arabic_with_numbers(&self) -> Result<String, CleanError> {
        self.extract(
            "arabic_with_numbers",
            CharClass::ArabicLetters | CharClass::ArabicDigits | CharClass::EnglishDigits,
            KeepOptions::default(),
        )
    }

    pub fn arabic_with_harakat(&self) -> Result<String, CleanError> {
        self.extract(
            "arabic_with_harakat",
            CharClass::ArabicLetters | CharClass::HarakatMain,
            KEEP_HARAKAT,
        )
    }

    // ---------------------------------------------------------------------
    //  collection algebra (eager only)
    // ---------------------------------------------------------------------

    pub fn reverse(&mut self) -> Result<&mut Self, CleanError> {
        self.owned_mut("reverse")?.reverse();
        Ok(self)
    }

    /// Append `other`'s lines to this cleaner. The raw text is left as it was.
    pub fn extend(&mut self, other: Cleaner) -> Result<&mut Self, CleanError> {
        self.check_separator(&other);
        let theirs = other.into_lines()?;
        self.owned_mut("extend")?.extend(theirs);
        Ok(self)
    }

    /// New eager cleaner holding this cleaner's lines followed by `other`'s.
    pub fn concat(&self, other: &Cleaner) -> Result<Cleaner, CleanError> {
        self.check_separator(other);
        let mut lines = self.owned("concat")?.clone();
        lines.extend_from_slice(other.owned("concat")?);
        Ok(self.derive(lines, other))
    }

    /// Lines found in exactly one of the two cleaners: this cleaner's first,
    /// then `other`'s, each in their original order.
    pub fn symmetric_difference(&self, other: &Cleaner) -> Result<Cleaner, CleanError> {
        self.check_separator(other);
        let (ours, theirs) = (
            self.owned("symmetric_difference")?,
            other.owned("symmetric_difference")?,
        );
        let in_ours: HashSet<&str> = ours.iter().map(String::as_str).collect();
        let in_theirs: HashSet<&str> = theirs.iter().map(String::as_str).collect();
        let lines = ours
            .iter()
            .filter(|l| !in_theirs.contains(l.as_str()))
            .chain(theirs.iter().filter(|l| !in_ours.contains(l.as_str())))
            .cloned()
            .collect();
        Ok(self.derive(lines, other))
    }

    fn check_separator(&self, other: &Cleaner) {
        if self.separator != other.separator {
            tracing::warn!(
                kept = ?self.separator,
                ignored = ?other.separator,
                "unequal separators; keeping the receiver's"
            );
        }
    }

    fn derive(&self, lines: Vec<String>, other: &Cleaner) -> Cleaner {
        let mut out = Cleaner::eager(lines);
        out.separator = self.separator.clone();
        out.raw_text = match (&self.raw_text, &other.raw_text) {
            (None, None) => None,
            (a, b) => Some(format!(
                "{}{}",
                a.as_deref().unwrap_or_default(),
                b.as_deref().unwrap_or_default()
            )),
        };
        out
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::eager(Vec::new())
    }
}

impl CleanOps for Cleaner {
    fn mode(&self) -> Mode {
        match self.state {
            State::Eager(_) => Mode::Eager,
            State::Streaming => Mode::Streaming,
        }
    }

    fn push_operation(&mut self, op: Operation) -> &mut Self {
        if let State::Eager(lines) = &mut self.state {
            let mut inspector = EmptyResultInspector::new();
            *lines = execute_one(&op, std::mem::take(lines), &mut inspector);
            self.warnings.extend(inspector.into_warnings());
        }
        self.queue.append(op);
        self
    }

    fn operations(&self) -> &OperationQueue {
        &self.queue
    }

    fn clear_operations(&mut self) -> &mut Self {
        self.queue.clear();
        self
    }
}
