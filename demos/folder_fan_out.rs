use std::{error::Error, fs};

use naqi::{CleanOps, FolderStreamCleaner, StreamConfig};

fn main() -> Result<(), Box<dyn Error>> {
    let root = tempfile::tempdir()?;
    let out = tempfile::tempdir()?;
    fs::create_dir(root.path().join("nested"))?;

    fs::write(root.path().join("a.txt"), "مرحبا بكم 123\nhello")?;
    fs::write(root.path().join("b.txt"), "السلامُ عليكم!!\n")?;
    fs::write(root.path().join("nested/c.txt"), "كتاب ـــ جميل 🌹")?;
    fs::write(root.path().join(".hidden"), "skipped")?;

    // ────────────────────────────────────────────────────────────────
    // One queue, every file, two worker threads
    // ────────────────────────────────────────────────────────────────
    let mut folder = FolderStreamCleaner::new(
        root.path(),
        Some(out.path().to_path_buf()),
        true,
        StreamConfig::new().workers(2),
    )?;
    folder.keep_arabic_only().remove_empty_lines();

    for report in folder.clean_files(false)? {
        println!(
            "{} → {} ({} lines)",
            report.input.display(),
            report.output.display(),
            report.report.lines_written
        );
        print!("{}", fs::read_to_string(&report.output)?);
    }

    Ok(())
}
