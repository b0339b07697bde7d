use clap::Parser;
use std::num::NonZeroU32;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfsplit")]
#[command(about = "Split a PDF into parts with a fixed maximum number of pages")]
#[command(version)]
#[command(after_help = "Beispiele:
  pdfsplit Prospekt.pdf
  pdfsplit Prospekt.pdf 10
  pdfsplit Prospekt.pdf 8 ./output")]
pub struct Cli {
    /// PDF file to split
    pub input: PathBuf,

    /// Maximum number of pages per output file
    #[arg(default_value = "8")]
    pub pages_per_file: NonZeroU32,

    /// Output directory (defaults to the input file's directory)
    pub output_dir: Option<PathBuf>,
}
