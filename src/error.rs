use std::fmt::Formatter;
use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug)]
pub enum ExtractError {
    MissingInput(PathBuf),
    IoError(std::io::Error),
    #[cfg(feature = "structured")]
    PdfError(lopdf::Error),
    SpawnError {
        program: String,
        source: std::io::Error,
    },
    RawExitError {
        program: String,
        status: ExitStatus,
    },
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            ExtractError::MissingInput(path) => {
                write!(f, "File {} doesn't exist", path.display())
            }
            ExtractError::IoError(e) => write!(f, "IO error: {}", e),
            #[cfg(feature = "structured")]
            ExtractError::PdfError(e) => write!(f, "PDF error: {}", e),
            ExtractError::SpawnError { program, source } => {
                write!(f, "Could not run '{}': {}", program, source)
            }
            ExtractError::RawExitError { program, status } => {
                write!(f, "'{}' failed: {}", program, status)
            }
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::IoError(e) => Some(e),
            #[cfg(feature = "structured")]
            ExtractError::PdfError(e) => Some(e),
            ExtractError::SpawnError { source, .. } => Some(source),
            ExtractError::MissingInput(_) | ExtractError::RawExitError { .. } => None,
        }
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(e: std::io::Error) -> Self {
        ExtractError::IoError(e)
    }
}

#[cfg(feature = "structured")]
impl From<lopdf::Error> for ExtractError {
    fn from(e: lopdf::Error) -> Self {
        ExtractError::PdfError(e)
    }
}
