//! Line-level transform abstraction.
//!
//! A [`Transform`] maps one line to one line. It never sees the rest of the
//! batch and never touches cleaner state: everything it needs (character
//! sets, thresholds, separators) is captured when it is built, and building
//! is where bad arguments are rejected.
//!
//! Like every stage in a normalization pipeline, a transform has two entry
//! points:
//!
//! * `needs_apply(&str) -> bool` – cheap pre-scan. Returning `false` means
//!   the line passes through untouched and unallocated.
//! * `apply(Cow<str>) -> Cow<str>` – the transformation itself. It must be
//!   correct even when called without the pre-check, and should hand back the
//!   input unchanged when there is nothing to do.

pub mod keep_only;
pub mod remove_chars;
pub mod repeated;
pub mod single_char;
pub mod social;
pub mod split;
pub mod transliterate;
pub mod whitespace;

pub use keep_only::{KeepOnly, KeepOptions};
pub use remove_chars::{RemoveChars, ReplaceChars, Translate};
pub use repeated::SqueezeRepeats;
pub use single_char::{ConnectSingleChar, RemoveSingleChars, contains_single_char};
pub use social::{RemoveEmoji, RemoveHashtags, RemoveLinks, RemoveMentions};
pub use split::{join_columns, select_columns, split_on};
pub use transliterate::{Direction, Transliterate};
pub use whitespace::{CollapseSpaces, Trim};

use std::borrow::Cow;

/// A single line → line transformation.
pub trait Transform: Send + Sync {
    /// Human-readable name – used in warnings and logs.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the line.
    fn needs_apply(&self, line: &str) -> bool;

    /// Allocation-aware transformation. Must always be correct.
    fn apply<'a>(&self, line: Cow<'a, str>) -> Cow<'a, str>;
}

/// Run a transform over an owned line, skipping it when the pre-check says
/// nothing would change.
#[inline]
pub(crate) fn run_owned<T: Transform + ?Sized>(transform: &T, line: String) -> String {
    if !transform.needs_apply(&line) {
        return line;
    }
    transform.apply(Cow::Owned(line)).into_owned()
}
