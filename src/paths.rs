use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::ExtractError;

/// Appended to the input's file stem to name the output directory.
pub const OUTPUT_DIR_SUFFIX: &str = "_text";

/// File written by the raw extraction tier.
pub const RAW_OUTPUT_FILE_NAME: &str = "extracted_text.txt";

/// File name for a 1-based page number, e.g. `page_3.txt`.
pub fn page_file_name(number: u32) -> String {
    format!("page_{}.txt", number)
}

pub(crate) fn parse_page_file_name(name: &str) -> Option<u32> {
    name.strip_prefix("page_")?
        .strip_suffix(".txt")?
        .parse()
        .ok()
}

/// Fail with [`ExtractError::MissingInput`] unless `path` exists.
pub fn validate_input(path: &Path) -> Result<(), ExtractError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ExtractError::MissingInput(path.to_path_buf()))
    }
}

/// Output directory for an input file: its path with only the final extension removed,
/// followed by [`OUTPUT_DIR_SUFFIX`].
///
/// ```
/// use std::path::Path;
///
/// let dir = pdf_to_text::output_dir_for("reports/q3.final.pdf");
/// assert_eq!(dir, Path::new("reports/q3.final_text"));
/// ```
pub fn output_dir_for<P: AsRef<Path>>(input: P) -> PathBuf {
    let input = input.as_ref();
    let mut name = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push(OUTPUT_DIR_SUFFIX);
    input.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_extension() {
        assert_eq!(output_dir_for("report.pdf"), Path::new("report_text"));
    }

    #[test]
    fn only_last_extension_is_stripped() {
        assert_eq!(
            output_dir_for("archive.v2.final.pdf"),
            Path::new("archive.v2.final_text")
        );
    }

    #[test]
    fn keeps_parent_directories() {
        assert_eq!(
            output_dir_for("/tmp/in.box/report.pdf"),
            Path::new("/tmp/in.box/report_text")
        );
    }

    #[test]
    fn dots_in_parent_are_left_alone() {
        assert_eq!(
            output_dir_for("scans.d/report"),
            Path::new("scans.d/report_text")
        );
    }

    #[test]
    fn no_extension() {
        assert_eq!(output_dir_for("report"), Path::new("report_text"));
        assert_eq!(output_dir_for(".hidden"), Path::new(".hidden_text"));
    }

    #[test]
    fn page_names() {
        assert_eq!(page_file_name(1), "page_1.txt");
        assert_eq!(parse_page_file_name("page_12.txt"), Some(12));
        assert_eq!(parse_page_file_name("page_.txt"), None);
        assert_eq!(parse_page_file_name("page_1.txt.bak"), None);
        assert_eq!(parse_page_file_name(RAW_OUTPUT_FILE_NAME), None);
    }

    #[test]
    fn missing_input() {
        let err = validate_input(Path::new("definitely/not/here.pdf")).unwrap_err();
        assert!(matches!(err, ExtractError::MissingInput(_)));
        assert_eq!(err.to_string(), "File definitely/not/here.pdf doesn't exist");
    }
}
