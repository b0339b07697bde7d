use anyhow::{Context, Result};
use lopdf::Document;
use std::path::Path;

/// A PDF opened read-only and held in memory while its parts are written.
pub struct PdfDocument {
    pub doc: Document,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let doc = Document::load(&path).with_context(|| {
            format!(
                "PDF-Datei konnte nicht gelesen werden: {}",
                path.as_ref().display()
            )
        })?;
        Ok(PdfDocument { doc })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Copy pages `first..=last` (1-indexed, inclusive) into a new document,
    /// preserving their order.
    pub fn extract_range(&self, first: u32, last: u32) -> Result<Document> {
        let total = self.page_count();
        if first == 0 || first > last || last > total {
            anyhow::bail!(
                "Seitenbereich {}-{} liegt außerhalb von 1-{}",
                first,
                last,
                total
            );
        }

        let mut new_doc = self.doc.clone();

        let pages_to_delete: Vec<u32> =
            (1..=total).filter(|p| *p < first || *p > last).collect();
        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
        }

        // Drop objects only referenced by the deleted pages.
        new_doc.prune_objects();
        new_doc.compress();

        Ok(new_doc)
    }

    /// Save to a file, overwriting any existing file at `path`.
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        doc.save(&path).with_context(|| {
            format!(
                "Teil-PDF konnte nicht geschrieben werden: {}",
                path.as_ref().display()
            )
        })?;
        Ok(())
    }
}
