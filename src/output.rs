use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ExtractError;
use crate::paths::{RAW_OUTPUT_FILE_NAME, page_file_name, parse_page_file_name};
use crate::types::PageText;

/// Owns the output directory of a run.
///
/// Every run leaves exactly one tier's output behind: writing page files removes an old
/// `extracted_text.txt`, and creating `extracted_text.txt` removes old page files. Other
/// files in the directory are left alone. Text goes out as UTF-8.
#[derive(Debug)]
pub struct OutputWriter {
    dir: PathBuf,
}

impl OutputWriter {
    /// Create `dir` and any missing parents. An existing directory is fine.
    pub fn create<P: Into<PathBuf>>(dir: P) -> Result<OutputWriter, ExtractError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "output directory ready");
        Ok(OutputWriter { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Replace any output from an earlier run with `pages`.
    ///
    /// Returns the written paths in the same order as `pages`.
    pub fn write_pages(&self, pages: &[PageText]) -> Result<Vec<PathBuf>, ExtractError> {
        self.remove_stale_pages()?;
        self.remove_stale_raw()?;

        let mut paths = Vec::with_capacity(pages.len());
        for page in pages {
            let path = self.dir.join(page_file_name(page.number));
            fs::write(&path, page.text.as_bytes())?;
            paths.push(path);
        }
        Ok(paths)
    }

    /// Create (or truncate) the raw output file, dropping page files from an earlier run.
    pub fn create_raw_file(&self) -> Result<(File, PathBuf), ExtractError> {
        self.remove_stale_pages()?;
        let path = self.dir.join(RAW_OUTPUT_FILE_NAME);
        let file = File::create(&path)?;
        Ok((file, path))
    }

    fn remove_stale_raw(&self) -> Result<(), ExtractError> {
        let path = self.dir.join(RAW_OUTPUT_FILE_NAME);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "removed stale raw output");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn remove_stale_pages(&self) -> Result<usize, ExtractError> {
        let mut removed = 0;
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let is_page = entry
                .file_name()
                .to_str()
                .and_then(parse_page_file_name)
                .is_some();
            if is_page && entry.file_type()?.is_file() {
                fs::remove_file(entry.path())?;
                removed += 1;
            }
        }
        if removed > 0 {
            debug!(removed, dir = %self.dir.display(), "removed stale page files");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: u32, text: &str) -> PageText {
        PageText {
            number,
            text: text.to_string(),
        }
    }

    #[test]
    fn create_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a/b/report_text");
        OutputWriter::create(&dir).unwrap();
        OutputWriter::create(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn stale_pages_are_replaced() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = OutputWriter::create(tmp.path()).unwrap();
        writer
            .write_pages(&[page(1, "one"), page(2, "two"), page(3, "three")])
            .unwrap();
        fs::write(tmp.path().join("notes.txt"), "keep me").unwrap();

        let paths = writer.write_pages(&[page(1, "uno")]).unwrap();

        assert_eq!(paths, vec![tmp.path().join("page_1.txt")]);
        assert_eq!(fs::read_to_string(&paths[0]).unwrap(), "uno");
        assert!(!tmp.path().join("page_2.txt").exists());
        assert!(!tmp.path().join("page_3.txt").exists());
        assert!(tmp.path().join("notes.txt").exists());
    }

    #[test]
    fn raw_file_is_truncated() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = OutputWriter::create(tmp.path()).unwrap();
        fs::write(tmp.path().join(RAW_OUTPUT_FILE_NAME), "old contents").unwrap();

        let (_file, path) = writer.create_raw_file().unwrap();

        assert_eq!(fs::metadata(path).unwrap().len(), 0);
    }

    #[test]
    fn page_files_replace_raw_output() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = OutputWriter::create(tmp.path()).unwrap();
        drop(writer.create_raw_file().unwrap());

        writer.write_pages(&[page(1, "one")]).unwrap();

        assert!(!tmp.path().join(RAW_OUTPUT_FILE_NAME).exists());
        assert!(tmp.path().join("page_1.txt").exists());
    }

    #[test]
    fn raw_output_replaces_page_files() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = OutputWriter::create(tmp.path()).unwrap();
        writer.write_pages(&[page(1, "one"), page(2, "two")]).unwrap();
        fs::write(tmp.path().join("notes.txt"), "keep me").unwrap();

        let (_file, path) = writer.create_raw_file().unwrap();

        assert_eq!(path, tmp.path().join(RAW_OUTPUT_FILE_NAME));
        assert!(!tmp.path().join("page_1.txt").exists());
        assert!(!tmp.path().join("page_2.txt").exists());
        assert!(tmp.path().join("notes.txt").exists());
    }

    #[test]
    fn writes_utf8() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = OutputWriter::create(tmp.path()).unwrap();
        let paths = writer.write_pages(&[page(1, "naïve café ﬁ")]).unwrap();
        assert_eq!(fs::read_to_string(&paths[0]).unwrap(), "naïve café ﬁ");
    }
}
