use std::fmt;
use std::path::{Path, PathBuf};

/// Text of one page, as decoded by the structured tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// 1-based page number
    pub number: u32,
    pub text: String,
}

/// A page that has been written to disk.
#[derive(Debug, Clone)]
pub struct PageSummary {
    pub number: u32,
    /// Number of pages in the document
    pub total: usize,
    /// Single-line excerpt from the start of the page
    pub preview: String,
    pub path: PathBuf,
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Extracted page {}/{}: {}...",
            self.number, self.total, self.preview
        )
    }
}

/// Result of a successful run, tagged by the tier that produced it.
#[derive(Debug, Clone)]
pub enum Extraction {
    /// One `page_<N>.txt` per page, in page order.
    Structured {
        output_dir: PathBuf,
        pages: Vec<PageSummary>,
    },
    /// A single dump of the raw scanner's output.
    Raw {
        output_dir: PathBuf,
        path: PathBuf,
        bytes_written: u64,
    },
}

impl Extraction {
    pub fn output_dir(&self) -> &Path {
        match self {
            Extraction::Structured { output_dir, .. } | Extraction::Raw { output_dir, .. } => {
                output_dir
            }
        }
    }

    /// Every file written by this run.
    pub fn files(&self) -> Vec<&Path> {
        match self {
            Extraction::Structured { pages, .. } => pages.iter().map(|p| p.path.as_path()).collect(),
            Extraction::Raw { path, .. } => vec![path.as_path()],
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Extraction::Structured { .. })
    }
}

impl fmt::Display for Extraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extraction::Structured { output_dir, .. } => {
                write!(f, "Text extracted to {}", output_dir.display())
            }
            Extraction::Raw { path, .. } => {
                write!(f, "Raw text extracted to {}", path.display())
            }
        }
    }
}
