use std::error::Error;

use naqi::{CleanOps, Cleaner, LengthUnit};

fn main() -> Result<(), Box<dyn Error>> {
    // ────────────────────────────────────────────────────────────────
    // Eager cleaning – every step runs as soon as it is declared
    // ────────────────────────────────────────────────────────────────
    let text = "مُحَمَّدٌ رسولُ اللهِ ـــ صلى الله عليه وسلم\n\
                @user #عاجل جداااا https://example.com 🌹\n\
                Only English Text\n\
                هذا النص عربي This is an English Text 123";

    let mut cleaner = Cleaner::from_text(text, "\n");
    cleaner
        .remove_links()
        .remove_mentions()
        .remove_hashtags()
        .remove_emojis()
        .replace_repeated_chars(2, 1)?
        .keep_arabic_only()
        .remove_empty_lines();

    for line in cleaner.lines()? {
        println!("{line}");
    }
    // → محمد رسول الله صلى الله عليه وسلم
    // → جدا
    // → هذا النص عربي

    for warning in cleaner.warnings() {
        println!("warning: {warning}");
    }

    // ────────────────────────────────────────────────────────────────
    // Normalization + Buckwalter transliteration
    // ────────────────────────────────────────────────────────────────
    let mut words = Cleaner::eager(vec!["إِنَّ الْكِتَابَ آيَةٌ".to_owned()]);
    words.remove_tashkeel().normalize_alef();
    println!("normalized   : {}", words.text()?);
    words.arabic_to_transliteration();
    println!("buckwalter   : {}", words.text()?);
    // → An AlktAb Ayp

    // ────────────────────────────────────────────────────────────────
    // Inspection helpers (non-mutating)
    // ────────────────────────────────────────────────────────────────
    let mixed = Cleaner::from_text("كتاب جميل\nقلم\nbook 42 كتاب", "\n");
    println!("arabic only  : {}", mixed.arabic_text()?);
    println!("english only : {}", mixed.english_text()?);
    println!("short lines  : {:?}", mixed.lines_below_len(2, LengthUnit::Words)?);
    println!("unique chars : {}", mixed.unique_chars()?.len());

    Ok(())
}
