use std::num::NonZeroU32;

/// A contiguous run of pages destined for one output file.
///
/// Page numbers are 1-based and inclusive, matching how they appear in the
/// output file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub number: u32,
    pub first_page: u32,
    pub last_page: u32,
}

impl Part {
    pub fn page_count(&self) -> u32 {
        self.last_page - self.first_page + 1
    }

    /// Output file name for this part, derived from the input file's stem.
    pub fn file_name(&self, stem: &str) -> String {
        format!(
            "{}_Teil_{}_Seiten_{}-{}.pdf",
            stem, self.number, self.first_page, self.last_page
        )
    }
}

/// Partition `1..=total_pages` into contiguous chunks of at most
/// `pages_per_file` pages.
///
/// Every chunk except possibly the last is full. A document with zero pages
/// yields an empty plan.
pub fn plan_parts(total_pages: u32, pages_per_file: NonZeroU32) -> Vec<Part> {
    let per_file = pages_per_file.get();
    let num_files = total_pages.div_ceil(per_file);

    (0..num_files)
        .map(|i| {
            let start = i * per_file;
            let end = (start + per_file).min(total_pages);
            Part {
                number: i + 1,
                first_page: start + 1,
                last_page: end,
            }
        })
        .collect()
}
