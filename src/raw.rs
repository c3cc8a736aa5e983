use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::ExtractError;

/// Program used for raw extraction unless configured otherwise.
pub const DEFAULT_RAW_PROGRAM: &str = "strings";

/// Runs an external printable-strings scanner over a file.
///
/// The input path is passed as the last argument and the program's standard output is
/// connected straight to the destination file. The scanner knows nothing about PDF, so
/// metadata and other binary noise end up in the output too.
#[derive(Debug, Clone)]
pub struct RawExtractor {
    program: OsString,
    args: Vec<OsString>,
}

impl Default for RawExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_RAW_PROGRAM)
    }
}

impl RawExtractor {
    pub fn new(program: impl Into<OsString>) -> Self {
        RawExtractor {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add an argument placed before the input path.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Run the scanner on `input`, writing its standard output to `output`.
    ///
    /// Blocks until the child exits. There is no timeout.
    pub fn extract_into(&self, input: &Path, output: File) -> Result<(), ExtractError> {
        let program = self.program.to_string_lossy().into_owned();
        debug!(program = %program, input = %input.display(), "running raw extractor");

        // The Command (and its copy of `output`) is dropped once the child is spawned.
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(input)
            .stdin(Stdio::null())
            .stdout(Stdio::from(output))
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ExtractError::SpawnError {
                program: program.clone(),
                source,
            })?;

        let status = child.wait()?;
        if !status.success() {
            return Err(ExtractError::RawExitError { program, status });
        }

        debug!(program = %program, "raw extractor finished");
        Ok(())
    }
}
