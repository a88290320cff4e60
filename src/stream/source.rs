//! Line sources.
//!
//! A source yields records one at a time. A record is a single trimmed line,
//! or, in column mode, the selected fields of one line in the requested
//! order.
use crate::{
    error::CleanError,
    stream::config::{Encoding, StreamConfig},
};
use smallvec::{SmallVec, smallvec};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Fields of one record. Exactly one unless column mode is active.
pub type Fields = SmallVec<[String; 2]>;

/// Bytes consumed so far, and the total when it is known up front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub bytes_read: u64,
    pub total_bytes: Option<u64>,
}

pub trait LineSource {
    /// Next record, or `None` once the source is exhausted.
    fn next_record(&mut self) -> Result<Option<Fields>, CleanError>;

    /// The header line, when the source has one. Only the first call returns
    /// it; after that the header is never yielded as a record.
    fn take_header(&mut self) -> Result<Option<String>, CleanError> {
        Ok(None)
    }

    fn progress(&self) -> Progress {
        Progress::default()
    }
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    #[inline]
    fn next_record(&mut self) -> Result<Option<Fields>, CleanError> {
        (**self).next_record()
    }

    #[inline]
    fn take_header(&mut self) -> Result<Option<String>, CleanError> {
        (**self).take_header()
    }

    #[inline]
    fn progress(&self) -> Progress {
        (**self).progress()
    }
}

/// In-memory source over already materialized lines.
#[derive(Debug, Clone, Default)]
pub struct VecSource {
    lines: std::vec::IntoIter<String>,
    bytes_read: u64,
    total_bytes: u64,
}

impl VecSource {
    pub fn new(lines: Vec<String>) -> Self {
        let total_bytes = lines.iter().map(|l| l.len() as u64).sum();
        Self {
            lines: lines.into_iter(),
            bytes_read: 0,
            total_bytes,
        }
    }

    /// Split `text` on `sep` the same way the eager text constructor does.
    pub fn from_text(text: &str, sep: &str) -> Self {
        Self::new(crate::cleaner::split_text(text, sep))
    }
}

impl LineSource for VecSource {
    fn next_record(&mut self) -> Result<Option<Fields>, CleanError> {
        Ok(self.lines.next().map(|line| {
            self.bytes_read += line.len() as u64;
            smallvec![line]
        }))
    }

    fn progress(&self) -> Progress {
        Progress {
            bytes_read: self.bytes_read,
            total_bytes: Some(self.total_bytes),
        }
    }
}

/// Buffered, line-at-a-time file reader.
///
/// Lines are split on `\n`, decoded, then trimmed. With a header configured
/// the first line is held back for [`LineSource::take_header`]. Blank lines
/// before the first and after the last non-blank record are dropped, as the
/// eager text constructor does; blank lines in between come through as `""`.
#[derive(Debug)]
pub struct FileSource {
    reader: BufReader<File>,
    buf: Vec<u8>,
    encoding: Encoding,
    columns: Option<(String, Vec<usize>)>,
    header_pending: bool,
    header: Option<String>,
    /// A non-blank line read ahead while counting the blanks before it.
    held: Option<String>,
    blanks: usize,
    started: bool,
    line_no: u64,
    bytes_read: u64,
    total_bytes: u64,
}

impl FileSource {
    pub fn open(path: &Path, config: &StreamConfig) -> Result<Self, CleanError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CleanError::SourceNotFound(path.to_path_buf()),
            _ => CleanError::Io(e),
        })?;
        let total_bytes = file.metadata()?.len();
        Ok(Self {
            reader: BufReader::new(file),
            buf: Vec::with_capacity(256),
            encoding: config.encoding,
            columns: config
                .column_mode()
                .map(|(delim, cols)| (delim.to_owned(), cols.to_vec())),
            header_pending: config.header,
            header: None,
            held: None,
            blanks: 0,
            started: false,
            line_no: 0,
            bytes_read: 0,
            total_bytes,
        })
    }

    fn read_line(&mut self) -> Result<Option<String>, CleanError> {
        self.buf.clear();
        let n = self.reader.read_until(b'\n', &mut self.buf)?;
        if n == 0 {
            return Ok(None);
        }
        self.bytes_read += n as u64;
        self.line_no += 1;
        let line = self.encoding.decode(std::mem::take(&mut self.buf))?;
        let trimmed = line.trim();
        Ok(Some(if trimmed.len() == line.len() {
            line
        } else {
            trimmed.to_owned()
        }))
    }

    fn next_line(&mut self) -> Result<Option<String>, CleanError> {
        if self.held.is_none() {
            loop {
                match self.read_line()? {
                    None => return Ok(None),
                    Some(line) if line.is_empty() => {
                        if self.started {
                            self.blanks += 1;
                        }
                    }
                    Some(line) => {
                        self.started = true;
                        self.held = Some(line);
                        break;
                    }
                }
            }
        }
        if self.blanks > 0 {
            self.blanks -= 1;
            return Ok(Some(String::new()));
        }
        Ok(self.held.take())
    }

    fn consume_header(&mut self) -> Result<(), CleanError> {
        if self.header_pending {
            self.header_pending = false;
            self.header = self.read_line()?;
        }
        Ok(())
    }

    fn split_record(&self, line: String) -> Result<Fields, CleanError> {
        let Some((delim, cols)) = &self.columns else {
            return Ok(smallvec![line]);
        };
        let fields: SmallVec<[&str; 8]> = line.split(delim.as_str()).collect();
        cols.iter()
            .map(|&i| {
                fields.get(i).map(|f| (*f).to_owned()).ok_or_else(|| {
                    tracing::debug!(line = self.line_no, column = i, "column missing");
                    CleanError::OutOfRange {
                        index: i,
                        len: fields.len(),
                    }
                })
            })
            .collect()
    }
}

impl LineSource for FileSource {
    fn next_record(&mut self) -> Result<Option<Fields>, CleanError> {
        self.consume_header()?;
        match self.next_line()? {
            Some(line) => self.split_record(line).map(Some),
            None => Ok(None),
        }
    }

    fn take_header(&mut self) -> Result<Option<String>, CleanError> {
        self.consume_header()?;
        Ok(self.header.take())
    }

    fn progress(&self) -> Progress {
        Progress {
            bytes_read: self.bytes_read,
            total_bytes: Some(self.total_bytes),
        }
    }
}
