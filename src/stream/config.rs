//! Plain-struct configuration with consuming setters.
use crate::error::CleanError;
use std::io;

/// Text decoding applied to every raw line read from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Invalid UTF-8 is an `InvalidData` I/O error.
    #[default]
    Utf8,
    /// Invalid sequences become U+FFFD.
    Utf8Lossy,
}

impl Encoding {
    pub(crate) fn decode(self, bytes: Vec<u8>) -> Result<String, CleanError> {
        match self {
            Encoding::Utf8 => decode_strict(bytes),
            Encoding::Utf8Lossy => Ok(match String::from_utf8(bytes) {
                Ok(s) => s,
                Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
            }),
        }
    }
}

#[cfg(feature = "simd")]
fn decode_strict(bytes: Vec<u8>) -> Result<String, CleanError> {
    simdutf8::basic::from_utf8(&bytes)
        .map(str::to_owned)
        .map_err(invalid_utf8)
}

#[cfg(not(feature = "simd"))]
fn decode_strict(bytes: Vec<u8>) -> Result<String, CleanError> {
    String::from_utf8(bytes).map_err(|e| invalid_utf8(e.utf8_error()))
}

fn invalid_utf8(e: impl std::fmt::Display) -> CleanError {
    CleanError::Io(io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
}

/// Settings shared by the file and folder stream cleaners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    pub encoding: Encoding,
    /// Terminator written after every output line.
    pub line_separator: String,
    /// Column mode is active when this is set and `columns` is non-empty.
    pub column_delimiter: Option<String>,
    pub columns: Vec<usize>,
    /// The first line is copied to the output untouched.
    pub header: bool,
    pub batch_size: usize,
    pub sample_size: usize,
    /// Threads used for folder fan-out.
    pub workers: usize,
    /// Replace existing output files.
    pub overwrite: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            encoding: Encoding::Utf8,
            line_separator: "\n".into(),
            column_delimiter: None,
            columns: Vec::new(),
            header: false,
            batch_size: 10,
            sample_size: 1000,
            workers: 4,
            overwrite: false,
        }
    }
}

impl StreamConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn line_separator(mut self, sep: impl Into<String>) -> Self {
        self.line_separator = sep.into();
        self
    }

    /// Select `columns` (zero-based, in output order) from each line split on
    /// `delimiter`.
    pub fn columns(mut self, delimiter: impl Into<String>, columns: Vec<usize>) -> Self {
        self.column_delimiter = Some(delimiter.into());
        self.columns = columns;
        self
    }

    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn batch_size(mut self, n: usize) -> Self {
        self.batch_size = n;
        self
    }

    pub fn sample_size(mut self, n: usize) -> Self {
        self.sample_size = n;
        self
    }

    pub fn workers(mut self, n: usize) -> Self {
        self.workers = n;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// `(delimiter, columns)` when column mode is active.
    pub fn column_mode(&self) -> Option<(&str, &[usize])> {
        match &self.column_delimiter {
            Some(delim) if !self.columns.is_empty() => Some((delim.as_str(), self.columns.as_slice())),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), CleanError> {
        let positive = [
            ("batch_size", self.batch_size),
            ("sample_size", self.sample_size),
            ("workers", self.workers),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(CleanError::InvalidArgument(format!(
                    "{name} must be at least 1"
                )));
            }
        }
        match &self.column_delimiter {
            Some(d) if d.is_empty() => Err(CleanError::InvalidArgument(
                "column delimiter must not be empty".into(),
            )),
            None if !self.columns.is_empty() => Err(CleanError::InvalidArgument(
                "columns were selected without a column delimiter".into(),
            )),
            _ => Ok(()),
        }
    }
}

/// Default ceiling for loading a file eagerly.
pub const DEFAULT_MAX_EAGER_BYTES: u64 = 256 * 1024 * 1024;

/// Options for [`Cleaner::from_file_with`](crate::Cleaner::from_file_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOptions {
    /// Splits the file content into lines.
    pub separator: String,
    pub encoding: Encoding,
    /// Larger files are refused with `SourceTooLarge`.
    pub max_bytes: u64,
}

impl Default for FileOptions {
    fn default() -> Self {
        Self {
            separator: "\n".into(),
            encoding: Encoding::Utf8,
            max_bytes: DEFAULT_MAX_EAGER_BYTES,
        }
    }
}

impl FileOptions {
    pub fn separator(mut self, sep: impl Into<String>) -> Self {
        self.separator = sep.into();
        self
    }

    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn max_bytes(mut self, max: u64) -> Self {
        self.max_bytes = max;
        self
    }
}
