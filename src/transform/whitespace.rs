use crate::transform::Transform;
use memchr::{memchr, memmem};
use std::borrow::Cow;

/// Replaces every run of ASCII spaces with exactly `keep` spaces.
///
/// `keep = 1` is the usual collapse; `keep = 0` deletes spaces altogether.
/// Tabs and other whitespace are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapseSpaces {
    pub keep: usize,
}

impl Default for CollapseSpaces {
    fn default() -> Self {
        Self { keep: 1 }
    }
}

impl Transform for CollapseSpaces {
    fn name(&self) -> &'static str {
        "remove_extra_spaces"
    }

    #[inline(always)]
    fn needs_apply(&self, line: &str) -> bool {
        let bytes = line.as_bytes();
        match self.keep {
            1 => memmem::find(bytes, b"  ").is_some(),
            _ => memchr(b' ', bytes).is_some(),
        }
    }

    fn apply<'a>(&self, line: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&line) {
            return line;
        }
        let mut out = String::with_capacity(line.len() + self.keep);
        let mut in_run = false;
        for c in line.chars() {
            if c == ' ' {
                if !in_run {
                    out.extend(std::iter::repeat_n(' ', self.keep));
                    in_run = true;
                }
                continue;
            }
            in_run = false;
            out.push(c);
        }
        Cow::Owned(out)
    }
}

/// Trims leading and trailing whitespace. Borrowed input stays borrowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trim;

impl Transform for Trim {
    fn name(&self) -> &'static str {
        "strip"
    }

    #[inline(always)]
    fn needs_apply(&self, line: &str) -> bool {
        line.trim().len() != line.len()
    }

    fn apply<'a>(&self, line: Cow<'a, str>) -> Cow<'a, str> {
        match line {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
            Cow::Owned(s) => {
                let trimmed = s.trim();
                if trimmed.len() == s.len() {
                    Cow::Owned(s)
                } else {
                    Cow::Owned(trimmed.to_owned())
                }
            }
        }
    }
}
