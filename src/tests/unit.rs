#[cfg(test)]
mod unit_tests {
    use crate::{
        CharClass, CharSet, CleanError, CleanOps, Cleaner, LengthUnit, Mode, Operation,
        OperationQueue, Transform,
        transform::{
            CollapseSpaces, KeepOnly, KeepOptions, RemoveChars, SqueezeRepeats, Trim,
            keep_only::KEEP_RAW,
        },
    };
    use std::borrow::Cow;

    fn eager(line: &str) -> Cleaner {
        Cleaner::eager(vec![line.to_string()])
    }

    fn text(c: &Cleaner) -> String {
        c.text().unwrap()
    }

    #[test]
    fn remove_english_text_fixtures() {
        let mut c = eager("نص عربي english text");
        c.remove_english_text();
        assert_eq!(text(&c).trim(), "نص عربي");

        let mut c = eager("نص عربي ملتصق بـ English Text");
        c.remove_english_text();
        assert_eq!(text(&c).trim(), "نص عربي ملتصق بـ");
    }

    #[test]
    fn remove_arabic_text_fixture() {
        let mut c = eager("@نص_عربي #نص_عربي نص عربي");
        c.remove_arabic_text();
        assert_eq!(text(&c).trim(), "@_ #_");
    }

    #[test]
    fn remove_arabic_punctuation_fixture() {
        let mut c = eager("نص.عربي؟");
        c.remove_arabic_punctuation();
        assert_eq!(text(&c), "نصعربي");
    }

    #[test]
    fn punctuation_removal_keeps_diacritics() {
        let mut c = eager("كَتَبَ، قالَ!");
        c.remove_punctuation();
        assert_eq!(text(&c), "كَتَبَ قالَ");
    }

    #[test]
    fn punctuation_free_line_is_unchanged() {
        let mut c = eager("نص عربي بدون علامات");
        c.remove_punctuation();
        assert_eq!(text(&c), "نص عربي بدون علامات");
    }

    #[test]
    fn english_then_arabic_removal_leaves_whitespace() {
        let mut c = Cleaner::eager(vec!["hello world".into(), "abc".into()]);
        c.remove_english_text().remove_arabic_text();
        assert!(c.lines().unwrap().iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn tashkeel_and_tatweel() {
        let mut c = eager("مُحَمَّـــد");
        c.remove_tashkeel().remove_tatweel();
        assert_eq!(text(&c), "محمد");

        let mut c = eager("مُحَمَّد");
        c.remove_tashkeel_main();
        assert_eq!(text(&c), "محمد");
    }

    #[test]
    fn numbers() {
        let mut c = eager("عام ١٩٤٨ و 2024");
        c.replace_arabic_numbers_to_english();
        assert_eq!(text(&c), "عام 1948 و 2024");

        let mut c = eager("عام ١٩٤٨ و 2024");
        c.remove_numbers().remove_extra_spaces(1).strip();
        assert_eq!(text(&c), "عام و");
    }

    #[test]
    fn normalize_then_denormalize() {
        let mut c = eager("\u{FEFB}إسلام أؤمن");
        c.normalize();
        assert_eq!(text(&c), "لااسلام اءمن");

        let mut c = eager("أحمد");
        c.denormalize_alef();
        assert_eq!(text(&c), "[إأٱآا\u{0670}]حمد");
    }

    #[test]
    fn transliteration_round_trip_through_cleaner() {
        let mut c = eager("مرحبا بكم");
        c.arabic_to_transliteration();
        assert_eq!(text(&c), "mrHbA bkm");
        c.transliteration_to_arabic();
        assert_eq!(text(&c), "مرحبا بكم");
    }

    #[test]
    fn keep_family() {
        let mut c = eager("عربي English ١٢ 34 !");
        c.keep_arabic_and_numbers_only();
        assert_eq!(text(&c), "عربي ١٢ 34");

        let mut c = eager("عربي English ١٢ 34 !");
        c.keep_english_and_numbers_only();
        assert_eq!(text(&c), "English 34");

        let mut c = eager("كَتَبَ English");
        c.keep_arabic_with_tashkeel_only();
        assert_eq!(text(&c), "كَتَبَ");
    }

    #[test]
    fn compound_keep_equals_explicit_strip_then_keep() {
        let input = "الْعَرَبِيَّةُ لُغَـــةٌ text";
        let mut compound = eager(input);
        compound.keep_arabic_only();

        let mut explicit = eager(input);
        explicit
            .remove_tashkeel()
            .remove_tatweel()
            .keep_only(CharClass::ArabicLetters, KEEP_RAW)
            .unwrap();
        assert_eq!(text(&compound), text(&explicit));
        assert_eq!(compound.operations().len(), 1);
    }

    #[test]
    fn reverse_order_differs_on_diacritics() {
        let mut keep_first = eager("كَتَبَ");
        keep_first
            .keep_only(CharClass::ArabicLetters, KEEP_RAW)
            .unwrap()
            .remove_tashkeel();
        let mut strip_first = eager("كَتَبَ");
        strip_first.keep_arabic_only();
        assert_eq!(text(&keep_first), "ك ت ب");
        assert_eq!(text(&strip_first), "كتب");
    }

    #[test]
    fn filters_never_reorder() {
        let mut c = Cleaner::eager(
            ["واحد", "", "a b c d", "اثنان", "x"]
                .map(String::from)
                .to_vec(),
        );
        c.remove_empty_lines()
            .remove_lines_above_len(3, LengthUnit::Words)
            .remove_lines_with_len(1, LengthUnit::Chars);
        assert_eq!(c.lines().unwrap(), ["واحد", "اثنان"]);
    }

    #[test]
    fn contain_filters() {
        let lines = ["سطر http", "سطر", "http"].map(String::from).to_vec();
        let mut drop = Cleaner::eager(lines.clone());
        drop.remove_lines_contain("http").unwrap();
        assert_eq!(drop.lines().unwrap(), ["سطر"]);

        let mut keep = Cleaner::eager(lines);
        keep.keep_lines_contain("http").unwrap();
        assert_eq!(keep.lines().unwrap(), ["سطر http", "http"]);
    }

    #[test]
    fn single_char_and_persian_filters() {
        let lines = ["ذهب و عاد", "ذهب وعاد", "چه خبر"].map(String::from).to_vec();
        let mut c = Cleaner::eager(lines);
        c.remove_lines_contain_single_char().remove_lines_contain_persian();
        assert_eq!(c.lines().unwrap(), ["ذهب وعاد"]);
    }

    #[test]
    fn split_is_one_flat_map_operation() {
        let mut c = eager("أ.ب..ج");
        c.split_on(".").unwrap();
        assert_eq!(c.lines().unwrap(), ["أ", "ب", "", "ج"]);
        assert_eq!(c.operations().len(), 1);

        let mut c = eager("1\tنص\tx");
        c.split_columns("\t", &[1, 0]).unwrap();
        assert_eq!(c.lines().unwrap(), ["نص", "1"]);
    }

    #[test]
    fn invalid_arguments_are_rejected_before_running() {
        let mut c = eager("abc");
        assert!(matches!(c.translate("ab", "x"), Err(CleanError::InvalidArgument(_))));
        assert!(c.replace_repeated_chars(0, 1).is_err());
        assert!(c.remove_chars(CharSet::new()).is_err());
        assert!(c.remove_lines_contain("").is_err());
        assert!(c.split_on("").is_err());
        assert!(c.split_columns(",", &[]).is_err());
        assert!(c.keep_only(CharSet::new(), KeepOptions::default()).is_err());
        assert!(c.operations().is_empty());
        assert_eq!(text(&c), "abc");
    }

    #[test]
    fn custom_sets() {
        let mut c = eager("a-b_c");
        c.remove_chars(CharSet::parse("-_").unwrap()).unwrap();
        assert_eq!(text(&c), "abc");

        let mut c = eager("a-b");
        c.replace_chars(CharSet::parse("-").unwrap(), " ").unwrap();
        assert_eq!(text(&c), "a b");

        let mut c = eager("abc");
        c.translate("abc", "xyz").unwrap();
        assert_eq!(text(&c), "xyz");
    }

    #[test]
    fn connect_and_remove_single_chars() {
        let mut c = eager("و الكتاب ب القلم");
        c.connect_single_char(false);
        assert_eq!(text(&c), "والكتاب بالقلم");

        let mut c = eager("و الكتاب ب القلم");
        c.remove_single_chars();
        assert_eq!(text(&c), "الكتاب القلم");
    }

    #[test]
    fn queue_is_cleared_without_touching_lines() {
        let mut c = eager(" x ");
        c.strip();
        c.clear_operations();
        assert!(c.operations().is_empty());
        assert_eq!(text(&c), "x");
    }

    #[test]
    fn queue_index_out_of_range() {
        let q = OperationQueue::new().with(Operation::map(Trim));
        assert!(q.get(0).is_ok());
        assert!(matches!(q.get(5), Err(CleanError::OutOfRange { index: 5, len: 1 })));
    }

    #[test]
    fn transforms_are_idempotent_on_fixtures() {
        let samples = ["  نص   عربي  ", "جمييييل جدااا", "English نص ١٢٣", ""];
        let transforms: Vec<Box<dyn Transform>> = vec![
            Box::new(RemoveChars::from_class(CharClass::EnglishPunctuation)),
            Box::new(CollapseSpaces::default()),
            Box::new(Trim),
            Box::new(SqueezeRepeats::new(2, 2).unwrap()),
            Box::new(KeepOnly::from_class(
                CharClass::ArabicLetters,
                KeepOptions::default(),
            )),
        ];
        for t in &transforms {
            for s in samples {
                let once = t.apply(Cow::Borrowed(s)).into_owned();
                let twice = t.apply(Cow::Borrowed(once.as_str())).into_owned();
                assert_eq!(once, twice, "{} on {s:?}", t.name());
            }
        }
    }

    #[test]
    fn needs_apply_predicts_change() {
        let t = RemoveChars::from_class(CharClass::ArabicPunctuation);
        for s in ["نص.عربي؟", "نص عربي", ""] {
            let changed = t.apply(Cow::Borrowed(s)) != s;
            assert_eq!(t.needs_apply(s), changed, "{s:?}");
        }
    }

    #[test]
    fn mode_is_fixed_at_construction() {
        assert_eq!(Cleaner::streaming().mode(), Mode::Streaming);
        assert_eq!(Cleaner::default().mode(), Mode::Eager);
    }
}
