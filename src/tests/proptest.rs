#[cfg(test)]
mod prop_tests {
    use crate::{
        CharClass, CleanOps, Cleaner, StreamDriver, execute, stream::VecSource,
    };
    use proptest::prelude::*;

    fn arabic_mix() -> impl Strategy<Value = String> {
        "[ا-ي ًٌٍَُِّْـa-zA-Z0-9٠-٩.,!?؟،؛#@ ]{0,60}"
    }

    proptest! {
        #[test]
        fn remove_punctuation_idempotent(s in arabic_mix()) {
            let mut once = Cleaner::eager(vec![s]);
            once.remove_punctuation();
            let first = once.text().unwrap();
            once.remove_punctuation();
            prop_assert_eq!(first, once.text().unwrap());
        }

        #[test]
        fn keep_arabic_output_alphabet(s in arabic_mix()) {
            let mut c = Cleaner::eager(vec![s]);
            c.keep_arabic_only();
            let out = c.text().unwrap();
            prop_assert!(out.chars().all(|ch| ch == ' ' || CharClass::ArabicLetters.contains(ch)));
            prop_assert!(!out.contains("  "));
            prop_assert_eq!(out.trim(), out.as_str());
        }

        #[test]
        fn streaming_equals_eager_for_any_batch_size(
            lines in prop::collection::vec(arabic_mix(), 0..40),
            batch in 1usize..16,
        ) {
            let mut eager = Cleaner::eager(lines.clone());
            eager
                .remove_hashtags()
                .remove_english_text()
                .keep_arabic_and_numbers_only()
                .split_on(" ")
                .unwrap()
                .remove_empty_lines();

            let mut streamed: Vec<String> = Vec::new();
            StreamDriver::new(eager.operations(), VecSource::new(lines.clone()), &mut streamed)
                .run(batch)
                .unwrap();
            prop_assert_eq!(&streamed, &eager.lines().unwrap().to_vec());

            let chunked: Vec<String> = lines
                .chunks(batch)
                .flat_map(|chunk| execute(eager.operations(), chunk.to_vec()))
                .collect();
            prop_assert_eq!(chunked, streamed);
        }

        #[test]
        fn filters_return_ordered_subsequence(lines in prop::collection::vec(arabic_mix(), 0..30)) {
            let mut c = Cleaner::eager(lines.clone());
            c.remove_lines_contain_single_char().remove_empty_lines();
            let kept = c.lines().unwrap();
            let mut rest = lines.iter();
            for line in kept {
                prop_assert!(rest.any(|l| l == line));
            }
        }

        #[test]
        fn transliteration_round_trips_arabic(s in "[ا-ي ًٌٍَُِّْ]{0,40}") {
            let mut c = Cleaner::eager(vec![s.clone()]);
            c.arabic_to_transliteration().transliteration_to_arabic();
            prop_assert_eq!(c.text().unwrap(), s);
        }
    }
}
