//! Streaming cleaner bound to one input file.
//!
//! Operations are declared with the [`CleanOps`] methods, then
//! [`FileStreamCleaner::clean`] replays them over the file in batches and
//! writes the result next to it (or to an explicit output path).
use crate::{
    cleaner::Mode,
    error::CleanError,
    operation::{Operation, OperationQueue},
    ops::CleanOps,
    stream::{
        config::StreamConfig,
        driver::{CancelToken, RunReport, StreamDriver},
        sink::FileSink,
        source::{FileSource, LineSource},
    },
};
use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone)]
pub struct FileStreamCleaner {
    queue: OperationQueue,
    input: PathBuf,
    output: PathBuf,
    config: StreamConfig,
    cancel: Option<CancelToken>,
}

/// `<dir>/<stem>_cleaned<.ext>` for `<dir>/<stem><.ext>`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let name = match input.extension() {
        Some(ext) => format!("{stem}_cleaned.{}", ext.to_string_lossy()),
        None => format!("{stem}_cleaned"),
    };
    input.with_file_name(name)
}

impl FileStreamCleaner {
    /// Output goes to [`default_output_path`].
    pub fn new(input: impl Into<PathBuf>, config: StreamConfig) -> Result<Self, CleanError> {
        let input = input.into();
        let output = default_output_path(&input);
        Self::with_output(input, output, config)
    }

    pub fn with_output(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        config: StreamConfig,
    ) -> Result<Self, CleanError> {
        let (input, output) = (input.into(), output.into());
        config.validate()?;
        check_paths(&input, &output, &config)?;
        Ok(Self {
            queue: OperationQueue::new(),
            input,
            output,
            config,
            cancel: None,
        })
    }

    /// Stop a running [`clean`](Self::clean) from another thread.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn input_path(&self) -> &Path {
        &self.input
    }

    pub fn output_path(&self) -> &Path {
        &self.output
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Full pass, `config.batch_size` records per batch.
    pub fn clean(&self) -> Result<RunReport, CleanError> {
        stream_file(
            &self.queue,
            &self.input,
            &self.output,
            &self.config,
            false,
            self.cancel.as_ref(),
        )
    }

    /// Only the first `config.sample_size` records.
    pub fn clean_sample(&self) -> Result<RunReport, CleanError> {
        stream_file(
            &self.queue,
            &self.input,
            &self.output,
            &self.config,
            true,
            self.cancel.as_ref(),
        )
    }

    /// Every character of the input (selected columns only, header
    /// excluded), read in one pass.
    pub fn unique_chars(&self) -> Result<BTreeSet<char>, CleanError> {
        let mut source = FileSource::open(&self.input, &self.config)?;
        source.take_header()?;
        let mut chars = BTreeSet::new();
        while let Some(fields) = source.next_record()? {
            chars.extend(fields.iter().flat_map(|f| f.chars()));
        }
        Ok(chars)
    }
}

pub(crate) fn check_paths(
    input: &Path,
    output: &Path,
    config: &StreamConfig,
) -> Result<(), CleanError> {
    if !input.is_file() {
        return Err(CleanError::SourceNotFound(input.to_path_buf()));
    }
    if output.exists() && !config.overwrite {
        return Err(CleanError::SinkAlreadyExists(output.to_path_buf()));
    }
    Ok(())
}

/// One complete run over one file with its own source, sink and driver.
pub(crate) fn stream_file(
    queue: &OperationQueue,
    input: &Path,
    output: &Path,
    config: &StreamConfig,
    sample: bool,
    cancel: Option<&CancelToken>,
) -> Result<RunReport, CleanError> {
    if queue.is_empty() {
        return Err(CleanError::EmptyPipeline);
    }
    if config.column_mode().is_some() && !queue.is_map_only() {
        return Err(CleanError::InvalidArgument(
            "column mode needs line-preserving operations only (no filters or splits)".into(),
        ));
    }
    let source = FileSource::open(input, config)?;
    let sink = FileSink::create(output, config)?;
    let mut driver = StreamDriver::new(queue, source, sink);
    if let Some(token) = cancel {
        driver = driver.with_cancel(token.clone());
    }
    let report = if sample {
        driver.run_sample(config.sample_size)?
    } else {
        driver.run(config.batch_size)?
    };
    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        lines = report.lines_written,
        "file cleaned"
    );
    Ok(report)
}

impl CleanOps for FileStreamCleaner {
    fn mode(&self) -> Mode {
        Mode::Streaming
    }

    fn push_operation(&mut self, op: Operation) -> &mut Self {
        self.queue.append(op);
        self
    }

    fn operations(&self) -> &OperationQueue {
        &self.queue
    }

    fn clear_operations(&mut self) -> &mut Self {
        self.queue.clear();
        self
    }
}
