//! Social-media noise: emoji, hashtags, mentions and links.
use crate::transform::Transform;
use memchr::{memchr, memmem};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// Unlike a lookahead on trailing whitespace, these also take a tag or
// mention that ends the line.
static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\S*").unwrap());
static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\S*").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

// A pictograph or flag letter plus any joiners, variation selectors, skin
// tones and tag characters glued to it; keycaps; stray selectors and tones.
static EMOJI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"[#*0-9]\x{FE0F}?\x{20E3}",
        r"|[\p{Extended_Pictographic}\x{1F1E6}-\x{1F1FF}]",
        r"[\x{200D}\x{FE0E}\x{FE0F}\x{1F3FB}-\x{1F3FF}\x{E0020}-\x{E007F}]*",
        r"|[\x{FE0E}\x{FE0F}\x{1F3FB}-\x{1F3FF}]",
    ))
    .unwrap()
});

#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveEmoji;

impl Transform for RemoveEmoji {
    fn name(&self) -> &'static str {
        "remove_emojis"
    }

    #[inline(always)]
    fn needs_apply(&self, line: &str) -> bool {
        !line.is_ascii() && EMOJI.is_match(line)
    }

    fn apply<'a>(&self, line: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&line) {
            return line;
        }
        Cow::Owned(EMOJI.replace_all(&line, "").into_owned())
    }
}

/// Removes `#tag` tokens up to the next whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveHashtags;

impl Transform for RemoveHashtags {
    fn name(&self) -> &'static str {
        "remove_hashtags"
    }

    #[inline(always)]
    fn needs_apply(&self, line: &str) -> bool {
        memchr(b'#', line.as_bytes()).is_some()
    }

    fn apply<'a>(&self, line: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&line) {
            return line;
        }
        Cow::Owned(HASHTAG.replace_all(&line, "").into_owned())
    }
}

/// Removes `@user` tokens up to the next whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveMentions;

impl Transform for RemoveMentions {
    fn name(&self) -> &'static str {
        "remove_mentions"
    }

    #[inline(always)]
    fn needs_apply(&self, line: &str) -> bool {
        memchr(b'@', line.as_bytes()).is_some()
    }

    fn apply<'a>(&self, line: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&line) {
            return line;
        }
        Cow::Owned(MENTION.replace_all(&line, "").into_owned())
    }
}

/// Removes `http://` and `https://` URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveLinks;

impl Transform for RemoveLinks {
    fn name(&self) -> &'static str {
        "remove_links"
    }

    #[inline(always)]
    fn needs_apply(&self, line: &str) -> bool {
        memmem::find(line.as_bytes(), b"http").is_some() && LINK.is_match(line)
    }

    fn apply<'a>(&self, line: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&line) {
            return line;
        }
        Cow::Owned(LINK.replace_all(&line, "").into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_emoji() {
        assert_eq!(
            RemoveEmoji.apply(Cow::Borrowed("صباح الخير ☕🌹")),
            "صباح الخير "
        );
        assert!(!RemoveEmoji.needs_apply("plain ascii"));
    }

    #[test]
    fn strips_joined_sequences_and_bmp_symbols() {
        assert_eq!(
            RemoveEmoji.apply(Cow::Borrowed("نص 👨\u{200d}👩\u{200d}👧 ⭐ ⌚ © ® ‼ 🪐")),
            "نص       "
        );
        assert_eq!(RemoveEmoji.apply(Cow::Borrowed("👍🏽 1\u{fe0f}\u{20e3} 🇸🇦 ❤\u{fe0f}")), "   ");
    }

    #[test]
    fn keeps_plain_digits_and_arabic() {
        assert!(!RemoveEmoji.needs_apply("عدد ١٢٣ 123 #"));
    }

    #[test]
    fn strips_hashtags_and_mentions() {
        let line = "@نص_عربي #نص_عربي نص عربي";
        assert_eq!(RemoveHashtags.apply(Cow::Borrowed(line)), "@نص_عربي  نص عربي");
        assert_eq!(RemoveMentions.apply(Cow::Borrowed(line)), " #نص_عربي نص عربي");
    }

    #[test]
    fn hashtag_at_end_of_line_is_removed() {
        assert_eq!(RemoveHashtags.apply(Cow::Borrowed("خبر #عاجل")), "خبر ");
    }

    #[test]
    fn strips_links() {
        assert_eq!(
            RemoveLinks.apply(Cow::Borrowed("نص عربيhttps://www.youtube.com/")),
            "نص عربي"
        );
        assert!(!RemoveLinks.needs_apply("http is a protocol"));
    }
}
