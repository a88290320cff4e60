//! Line sinks.
use crate::{error::CleanError, stream::config::StreamConfig, transform::join_columns};
use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

pub trait LineSink {
    /// Written once, before any batch.
    fn write_header(&mut self, _header: &str) -> Result<(), CleanError> {
        Ok(())
    }

    /// Append one finished batch, in order.
    fn write_batch(&mut self, lines: &[String]) -> Result<(), CleanError>;

    /// Flush everything still buffered.
    fn finish(&mut self) -> Result<(), CleanError> {
        Ok(())
    }
}

impl<K: LineSink + ?Sized> LineSink for &mut K {
    #[inline]
    fn write_header(&mut self, header: &str) -> Result<(), CleanError> {
        (**self).write_header(header)
    }

    #[inline]
    fn write_batch(&mut self, lines: &[String]) -> Result<(), CleanError> {
        (**self).write_batch(lines)
    }

    #[inline]
    fn finish(&mut self) -> Result<(), CleanError> {
        (**self).finish()
    }
}

/// Collects everything in memory; the header becomes the first element.
impl LineSink for Vec<String> {
    fn write_header(&mut self, header: &str) -> Result<(), CleanError> {
        self.push(header.to_owned());
        Ok(())
    }

    fn write_batch(&mut self, lines: &[String]) -> Result<(), CleanError> {
        self.extend_from_slice(lines);
        Ok(())
    }
}

/// Buffered file writer.
///
/// In column mode every `columns.len()` consecutive lines of a batch form one
/// record and are rejoined with the column delimiter.
#[derive(Debug)]
pub struct FileSink {
    writer: BufWriter<File>,
    path: PathBuf,
    terminator: String,
    group: Option<(String, usize)>,
}

impl FileSink {
    pub fn create(path: &Path, config: &StreamConfig) -> Result<Self, CleanError> {
        let mut options = OpenOptions::new();
        options.write(true);
        if config.overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }
        let file = options.open(path).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => CleanError::SinkAlreadyExists(path.to_path_buf()),
            _ => CleanError::Io(e),
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            terminator: config.line_separator.clone(),
            group: config
                .column_mode()
                .map(|(delim, cols)| (delim.to_owned(), cols.len())),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&mut self, line: &str) -> Result<(), CleanError> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(self.terminator.as_bytes())?;
        Ok(())
    }
}

impl LineSink for FileSink {
    fn write_header(&mut self, header: &str) -> Result<(), CleanError> {
        self.write_line(header)
    }

    fn write_batch(&mut self, lines: &[String]) -> Result<(), CleanError> {
        let Some((delim, width)) = self.group.clone() else {
            for line in lines {
                self.write_line(line)?;
            }
            return Ok(());
        };
        if lines.len() % width != 0 {
            return Err(CleanError::InvalidState(format!(
                "{} fields cannot be regrouped into records of {width} columns",
                lines.len()
            )));
        }
        for record in lines.chunks(width) {
            self.write_line(&join_columns(record, &delim))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), CleanError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn vec_sink_keeps_order_across_batches() {
        let mut sink: Vec<String> = Vec::new();
        sink.write_header("h").unwrap();
        sink.write_batch(&lines(&["a", "b"])).unwrap();
        sink.write_batch(&lines(&["c"])).unwrap();
        assert_eq!(sink, lines(&["h", "a", "b", "c"]));
    }

    #[test]
    fn file_sink_refuses_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old").unwrap();
        let err = FileSink::create(&path, &StreamConfig::default());
        assert!(matches!(err, Err(CleanError::SinkAlreadyExists(_))));

        let mut sink = FileSink::create(&path, &StreamConfig::new().overwrite(true)).unwrap();
        sink.write_batch(&lines(&["new"])).unwrap();
        sink.finish().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn file_sink_rejoins_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cols.tsv");
        let config = StreamConfig::new().columns("\t", vec![0, 2]);
        let mut sink = FileSink::create(&path, &config).unwrap();
        sink.write_batch(&lines(&["1", "نص", "2", "سطر"])).unwrap();
        assert!(matches!(
            sink.write_batch(&lines(&["dangling"])),
            Err(CleanError::InvalidState(_))
        ));
        sink.finish().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1\tنص\n2\tسطر\n");
    }

    #[test]
    fn custom_terminator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crlf.txt");
        let mut sink =
            FileSink::create(&path, &StreamConfig::new().line_separator("\r\n")).unwrap();
        sink.write_batch(&lines(&["a", "b"])).unwrap();
        sink.finish().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\r\nb\r\n");
    }
}
