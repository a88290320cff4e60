use crate::{error::CleanError, transform::Transform};
use std::borrow::Cow;

/// Shortens character runs.
///
/// A character immediately followed by at least `repeated` copies of itself
/// (a run longer than `repeated`) is rewritten as `keep` copies. Shorter runs
/// are untouched. `SqueezeRepeats::new(3, 2)` turns `"جمييييل"` into
/// `"جمييل"` but leaves `"جميل"` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqueezeRepeats {
    repeated: usize,
    keep: usize,
}

impl SqueezeRepeats {
    pub fn new(repeated: usize, keep: usize) -> Result<Self, CleanError> {
        if repeated == 0 {
            return Err(CleanError::InvalidArgument(
                "replace_repeated_chars: `repeated` must be at least 1".into(),
            ));
        }
        Ok(Self { repeated, keep })
    }

    /// For thresholds known to be non-zero.
    pub(crate) const fn fixed(repeated: usize, keep: usize) -> Self {
        Self { repeated, keep }
    }

    #[inline(always)]
    fn squeezes(&self, run: usize) -> bool {
        run > self.repeated
    }
}

impl Transform for SqueezeRepeats {
    fn name(&self) -> &'static str {
        "replace_repeated_chars"
    }

    fn needs_apply(&self, line: &str) -> bool {
        let mut prev = None;
        let mut run = 0;
        for c in line.chars() {
            if Some(c) == prev {
                run += 1;
            } else {
                prev = Some(c);
                run = 1;
            }
            if self.squeezes(run) {
                return true;
            }
        }
        false
    }

    fn apply<'a>(&self, line: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&line) {
            return line;
        }
        let mut out = String::with_capacity(line.len());
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            let mut run = 1;
            while chars.next_if_eq(&c).is_some() {
                run += 1;
            }
            let emit = if self.squeezes(run) { self.keep } else { run };
            out.extend(std::iter::repeat_n(c, emit));
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squeezes_long_runs_only() {
        let t = SqueezeRepeats::new(3, 2).unwrap();
        assert_eq!(t.apply(Cow::Borrowed("جمييييل")), "جمييل");
        assert_eq!(t.apply(Cow::Borrowed("جمييل")), "جمييل");
        assert!(!t.needs_apply("جميييل"));
    }

    #[test]
    fn default_style_collapses_every_double() {
        let t = SqueezeRepeats::new(1, 1).unwrap();
        assert_eq!(t.apply(Cow::Borrowed("هههه لااا")), "ه لا");
    }

    #[test]
    fn keep_zero_deletes_run() {
        let t = SqueezeRepeats::new(2, 0).unwrap();
        assert_eq!(t.apply(Cow::Borrowed("a!!!b")), "ab");
    }

    #[test]
    fn zero_threshold_is_rejected() {
        assert!(matches!(
            SqueezeRepeats::new(0, 1),
            Err(CleanError::InvalidArgument(_))
        ));
    }
}
