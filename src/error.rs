//! Application error type.
//!
//! Every failure in the pipeline is detected synchronously at the validator
//! or predictor boundary and carries:
//!
//! - a [`ErrorKind`] so callers (CLI today, an HTTP responder tomorrow) can
//!   map the failure to an exit code or status without parsing messages
//! - a human-readable reason

/// Failure category for the validate/fit/predict pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input could not be read as tabular data at all.
    Parse,
    /// A required column is absent.
    Schema,
    /// A null/blank cell is present somewhere in the dataset.
    MissingData,
    /// Fewer than two distinct day values to fit.
    InsufficientData,
    /// The prediction-days input is not a well-formed integer list.
    InvalidInput,
    /// Filesystem problem (missing file, unreadable directory, write failure).
    Io,
}

impl ErrorKind {
    /// Process exit code for the binary.
    ///
    /// 2 = bad input/usage, 3 = data unusable for fitting.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Parse | ErrorKind::Schema | ErrorKind::InvalidInput | ErrorKind::Io => 2,
            ErrorKind::MissingData | ErrorKind::InsufficientData => 3,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
