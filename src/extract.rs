use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::capability::Capabilities;
use crate::error::ExtractError;
use crate::output::OutputWriter;
use crate::paths::{output_dir_for, validate_input};
#[cfg(feature = "structured")]
use crate::preview::preview;
use crate::raw::{DEFAULT_RAW_PROGRAM, RawExtractor};
use crate::types::Extraction;
#[cfg(feature = "structured")]
use crate::types::PageSummary;

/// Characters of each page shown in its [`PageSummary`].
pub const DEFAULT_PREVIEW_CHARS: usize = 100;

/// Builder for configuring extraction options.
///
/// # Examples
///
/// ```no_run
/// use pdf_to_text::{Capabilities, TextExtractor};
///
/// // Skip lopdf and scan the raw bytes with a different tool
/// let extraction = TextExtractor::builder()
///     .capabilities(Capabilities::raw_only())
///     .raw_program("gstrings")
///     .raw_args(["-n", "6"])
///     .build()
///     .run("report.pdf")?;
/// println!("{}", extraction);
/// # Ok::<(), pdf_to_text::ExtractError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextExtractorBuilder {
    capabilities: Option<Capabilities>,
    raw_program: Option<OsString>,
    raw_args: Vec<OsString>,
    preview_chars: Option<usize>,
}

impl TextExtractorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the detected capabilities.
    pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    /// Program used for the raw tier. Defaults to `strings`.
    pub fn raw_program(mut self, program: impl Into<OsString>) -> Self {
        self.raw_program = Some(program.into());
        self
    }

    /// Extra arguments for the raw program, placed before the input path.
    pub fn raw_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.raw_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Length of page previews, in characters.
    pub fn preview_chars(mut self, chars: usize) -> Self {
        self.preview_chars = Some(chars);
        self
    }

    /// Build the extractor, detecting capabilities unless they were set explicitly.
    pub fn build(self) -> TextExtractor {
        let program = self
            .raw_program
            .unwrap_or_else(|| OsString::from(DEFAULT_RAW_PROGRAM));
        TextExtractor {
            capabilities: self.capabilities.unwrap_or_else(Capabilities::detect),
            raw: RawExtractor::new(program).args(self.raw_args),
            preview_chars: self.preview_chars.unwrap_or(DEFAULT_PREVIEW_CHARS),
        }
    }
}

/// Two-tier PDF text extractor.
///
/// Structured extraction runs first when available; the raw scan is the last resort.
///
/// # Examples
///
/// ```no_run
/// use pdf_to_text::{Extraction, TextExtractor};
///
/// match TextExtractor::default().run("report.pdf")? {
///     Extraction::Structured { pages, .. } => {
///         for page in &pages {
///             println!("{}", page);
///         }
///     }
///     raw @ Extraction::Raw { .. } => println!("{}", raw),
/// }
/// # Ok::<(), pdf_to_text::ExtractError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TextExtractor {
    capabilities: Capabilities,
    raw: RawExtractor,
    preview_chars: usize,
}

impl Default for TextExtractor {
    fn default() -> Self {
        TextExtractorBuilder::new().build()
    }
}

impl TextExtractor {
    /// Create a builder for configuring extraction options.
    pub fn builder() -> TextExtractorBuilder {
        TextExtractorBuilder::new()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn raw_extractor(&self) -> &RawExtractor {
        &self.raw
    }

    /// Extract `input` into its derived `<stem>_text` directory.
    ///
    /// A missing input fails before anything is created on disk.
    pub fn run<P: AsRef<Path>>(&self, input: P) -> Result<Extraction, ExtractError> {
        let input = input.as_ref();
        validate_input(input)?;
        self.extract_to_dir(input, output_dir_for(input))
    }

    /// Extract `input` into `output_dir`, creating the directory first.
    pub fn extract_to_dir<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output_dir: Q,
    ) -> Result<Extraction, ExtractError> {
        let input = input.as_ref();
        let writer = OutputWriter::create(output_dir.as_ref())?;

        if let Some(extraction) = self.try_structured(input, &writer)? {
            return Ok(extraction);
        }

        self.extract_raw(input, &writer)
    }

    #[cfg(feature = "structured")]
    fn try_structured(
        &self,
        input: &Path,
        writer: &OutputWriter,
    ) -> Result<Option<Extraction>, ExtractError> {
        if !self.capabilities.has_structured() {
            info!("structured extraction disabled, using raw extraction");
            return Ok(None);
        }

        info!(input = %input.display(), "extracting text with lopdf");
        let pages = match crate::structured::extract_pages(input) {
            Ok(pages) => pages,
            Err(e) => {
                warn!(
                    input = %input.display(),
                    error = %e,
                    "structured extraction failed, using raw extraction"
                );
                return Ok(None);
            }
        };

        let paths = writer.write_pages(&pages)?;
        let total = pages.len();
        let summaries = pages
            .iter()
            .zip(paths)
            .map(|(page, path)| PageSummary {
                number: page.number,
                total,
                preview: preview(&page.text, self.preview_chars),
                path,
            })
            .collect();

        Ok(Some(Extraction::Structured {
            output_dir: writer.dir().to_path_buf(),
            pages: summaries,
        }))
    }

    #[cfg(not(feature = "structured"))]
    fn try_structured(
        &self,
        _input: &Path,
        _writer: &OutputWriter,
    ) -> Result<Option<Extraction>, ExtractError> {
        info!("built without structured extraction, using raw extraction");
        Ok(None)
    }

    fn extract_raw(&self, input: &Path, writer: &OutputWriter) -> Result<Extraction, ExtractError> {
        let (file, path) = writer.create_raw_file()?;
        self.raw.extract_into(input, file)?;

        let bytes_written = fs::metadata(&path)?.len();
        if bytes_written == 0 {
            warn!(input = %input.display(), "raw extraction produced no output");
        }

        Ok(Extraction::Raw {
            output_dir: writer.dir().to_path_buf(),
            path,
            bytes_written,
        })
    }
}

/// Extract `input` into its `<stem>_text` directory using default settings.
///
/// This is a convenience function equivalent to `TextExtractor::default().run(input)`.
pub fn run<P: AsRef<Path>>(input: P) -> Result<Extraction, ExtractError> {
    TextExtractor::default().run(input)
}
