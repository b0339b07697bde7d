use crate::error::SplitError;
use crate::partition::{plan_parts, Part};
use crate::pdf::PdfDocument;
use anyhow::{Context, Result};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

/// Split `input` into parts of at most `pages_per_file` pages, written to
/// `output_dir` (or next to the input when `None`).
pub fn run(input: &Path, pages_per_file: NonZeroU32, output_dir: Option<&Path>) -> Result<()> {
    if !input.exists() {
        return Err(SplitError::NotFound(input.to_path_buf()).into());
    }

    let is_pdf = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if !is_pdf {
        return Err(SplitError::InvalidFormat(input.to_path_buf()).into());
    }

    let output_dir = resolve_output_dir(input, output_dir);
    std::fs::create_dir_all(&output_dir).with_context(|| {
        format!(
            "Ausgabeverzeichnis konnte nicht erstellt werden: {}",
            output_dir.display()
        )
    })?;

    println!(
        "[INFO] Lese PDF ein: {}",
        input.file_name().unwrap_or(input.as_os_str()).to_string_lossy()
    );
    let doc = PdfDocument::open(input)?;
    let total_pages = doc.page_count();
    println!("[INFO] Gesamtseiten: {}", total_pages);

    let parts = plan_parts(total_pages, pages_per_file);
    println!("[INFO] Wird aufgeteilt in: {} Datei(en)", parts.len());

    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("dokument");

    for part in &parts {
        write_part(&doc, part, stem, &output_dir)?;
    }

    println!();
    println!(
        "[SUCCESS] Fertig! Alle Dateien wurden in '{}' gespeichert.",
        output_dir.display()
    );
    Ok(())
}

fn resolve_output_dir(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => {
            let parent = input.parent().unwrap_or(Path::new("."));
            if parent.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                parent.to_path_buf()
            }
        }
    }
}

fn write_part(doc: &PdfDocument, part: &Part, stem: &str, output_dir: &Path) -> Result<()> {
    let file_name = part.file_name(stem);
    let output_path = output_dir.join(&file_name);

    let mut part_doc = doc.extract_range(part.first_page, part.last_page)?;
    PdfDocument::save(&mut part_doc, &output_path)?;

    println!(
        "[OK] Teil {}: {} ({} Seiten)",
        part.number,
        file_name,
        part.page_count()
    );
    Ok(())
}
