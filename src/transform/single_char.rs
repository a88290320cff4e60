//! One-letter tokens: detection, removal and re-attachment.
//!
//! Tokens are separated by single ASCII spaces; runs of spaces produce empty
//! tokens, which are never "single".
use crate::transform::Transform;
use std::borrow::Cow;

#[inline(always)]
fn is_single_letter(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphanumeric())
}

/// `true` when any whitespace-separated token is a lone letter or digit.
pub fn contains_single_char(line: &str) -> bool {
    line.split_whitespace().any(is_single_letter)
}

/// Drops lone letters/digits and trims the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveSingleChars;

impl Transform for RemoveSingleChars {
    fn name(&self) -> &'static str {
        "remove_single_chars"
    }

    #[inline(always)]
    fn needs_apply(&self, line: &str) -> bool {
        contains_single_char(line)
    }

    fn apply<'a>(&self, line: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&line) {
            return line;
        }
        let kept: Vec<&str> = line.split(' ').filter(|t| !is_single_letter(t)).collect();
        Cow::Owned(kept.join(" ").trim().to_owned())
    }
}

/// Glues a lone letter to its neighbour by deleting the space between them.
///
/// With `with_prev = false` the letter joins the following token
/// (`"و الكتاب"` → `"والكتاب"`); with `with_prev = true` it joins the
/// preceding one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectSingleChar {
    pub with_prev: bool,
}

impl ConnectSingleChar {
    fn joins(&self, left: &str, right: &str) -> bool {
        if self.with_prev {
            !left.is_empty() && is_single_letter(right)
        } else {
            is_single_letter(left) && !right.is_empty()
        }
    }
}

impl Transform for ConnectSingleChar {
    fn name(&self) -> &'static str {
        "connect_single_char"
    }

    fn needs_apply(&self, line: &str) -> bool {
        let tokens: Vec<&str> = line.split(' ').collect();
        tokens.windows(2).any(|w| self.joins(w[0], w[1]))
    }

    fn apply<'a>(&self, line: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&line) {
            return line;
        }
        let tokens: Vec<&str> = line.split(' ').collect();
        let mut out = String::with_capacity(line.len());
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 && !self.joins(tokens[i - 1], token) {
                out.push(' ');
            }
            out.push_str(token);
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_lone_letters() {
        assert!(contains_single_char("على A- و"));
        assert!(contains_single_char("أ"));
        assert!(!contains_single_char("على A-"));
        assert!(!contains_single_char("- ؟"));
    }

    #[test]
    fn removes_lone_letters() {
        assert_eq!(
            RemoveSingleChars.apply(Cow::Borrowed("ذهب و عاد ب سرعة")),
            "ذهب عاد سرعة"
        );
    }

    #[test]
    fn connects_forward() {
        let t = ConnectSingleChar { with_prev: false };
        assert_eq!(t.apply(Cow::Borrowed("و الكتاب جميل")), "والكتاب جميل");
        assert!(!t.needs_apply("الكتاب و"));
    }

    #[test]
    fn connects_backward() {
        let t = ConnectSingleChar { with_prev: true };
        assert_eq!(t.apply(Cow::Borrowed("كتاب ه جميل")), "كتابه جميل");
    }
}
