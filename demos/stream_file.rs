use std::{error::Error, fs};

use naqi::{CleanOps, FileStreamCleaner, LengthUnit, StreamConfig};

fn main() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("tweets.txt");

    let corpus: Vec<&str> = [
        "@user #عاجل خبر مهم جداااا 🌹",
        "السلام    عليكم https://example.com",
        "Only English Text",
        "كَتَبَ الطالبُ الدرسَ",
    ]
    .into_iter()
    .cycle()
    .take(10_000)
    .collect();
    fs::write(&input, corpus.join("\n"))?;

    // ────────────────────────────────────────────────────────────────
    // Declare once, replay over the file in batches of 500 lines
    // ────────────────────────────────────────────────────────────────
    let mut cleaner = FileStreamCleaner::new(&input, StreamConfig::new().batch_size(500))?;
    cleaner
        .twitter_arabic_pipeline()
        .remove_lines_below_len(2, LengthUnit::Words)
        .remove_empty_lines();

    // A sample run writes at most `sample_size` lines, enough to eyeball the result.
    let sample = cleaner.clean_sample()?;
    println!("sample : {sample:?}");
    fs::remove_file(cleaner.output_path())?;

    let report = cleaner.clean()?;
    println!("full   : {report:?}");
    println!("output : {}", cleaner.output_path().display());

    let cleaned = fs::read_to_string(cleaner.output_path())?;
    for line in cleaned.lines().take(4) {
        println!("  {line}");
    }

    Ok(())
}
