//! PDF to plain-text dumping
//!
//! This library writes the text of a PDF file into a `<name>_text` directory next to it.
//! When the `structured` feature is compiled in, pages are decoded with `lopdf` and each one
//! lands in its own `page_<N>.txt`. Otherwise, or when the document can't be decoded, the
//! whole file is handed to a printable-strings scanner and its output is kept as a single
//! `extracted_text.txt`.

mod capability;
mod error;
mod extract;
mod output;
mod paths;
mod preview;
mod raw;
#[cfg(feature = "structured")]
mod structured;
mod types;

// Re-export error type
pub use error::ExtractError;

// Re-export extraction API
pub use capability::Capabilities;
pub use extract::{DEFAULT_PREVIEW_CHARS, TextExtractor, TextExtractorBuilder, run};
pub use output::OutputWriter;
pub use raw::{DEFAULT_RAW_PROGRAM, RawExtractor};

// Re-export naming helpers and public types
pub use paths::{
    OUTPUT_DIR_SUFFIX, RAW_OUTPUT_FILE_NAME, output_dir_for, page_file_name, validate_input,
};
pub use preview::preview;
pub use types::{Extraction, PageSummary, PageText};
