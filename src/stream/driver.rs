//! Batch-at-a-time replay of an operation queue over a source.
//!
//! At most one batch is in memory at any time. Batch N is executed and
//! written before batch N+1 is read; a partial batch left at exhaustion is
//! flushed exactly once.
use crate::{
    error::CleanError,
    executor::{EmptyResultInspector, execute_inspected},
    operation::OperationQueue,
    stream::{sink::LineSink, source::LineSource},
};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tracing::{debug, info};

/// Cooperative stop signal. A cancelled run flushes the batch it is
/// accumulating, then stops reading.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Outcome of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Source records consumed (the header is not counted).
    pub records_read: usize,
    pub lines_written: usize,
    pub batches: usize,
    /// Empty-result warnings raised while executing batches.
    pub warnings: usize,
    pub cancelled: bool,
}

/// Owns one source and one sink for the duration of a run. Both are dropped
/// when the run returns, on success or error.
pub struct StreamDriver<'q, S, K> {
    queue: &'q OperationQueue,
    source: S,
    sink: K,
    cancel: Option<CancelToken>,
}

impl<'q, S: LineSource, K: LineSink> StreamDriver<'q, S, K> {
    pub fn new(queue: &'q OperationQueue, source: S, sink: K) -> Self {
        Self {
            queue,
            source,
            sink,
            cancel: None,
        }
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Process the whole source, `batch_size` records at a time.
    pub fn run(self, batch_size: usize) -> Result<RunReport, CleanError> {
        self.drive(batch_size, false)
    }

    /// Process only the first `max_lines` records as a single batch.
    pub fn run_sample(self, max_lines: usize) -> Result<RunReport, CleanError> {
        self.drive(max_lines, true)
    }

    fn check(&self, size: usize) -> Result<(), CleanError> {
        if self.queue.is_empty() {
            return Err(CleanError::EmptyPipeline);
        }
        if size == 0 {
            return Err(CleanError::InvalidArgument(
                "batch size must be at least 1".into(),
            ));
        }
        if let Some(op) = self.queue.first_collection_op() {
            return Err(CleanError::InvalidState(format!(
                "`{}` needs the whole collection and cannot run per batch",
                op.name()
            )));
        }
        Ok(())
    }

    fn drive(mut self, batch_size: usize, single_batch: bool) -> Result<RunReport, CleanError> {
        self.check(batch_size)?;

        let mut report = RunReport::default();
        let mut inspector = EmptyResultInspector::new();

        if let Some(header) = self.source.take_header()? {
            self.sink.write_header(&header)?;
        }

        let mut batch: Vec<String> = Vec::with_capacity(batch_size);
        let mut pending = 0usize;
        loop {
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                report.cancelled = true;
                break;
            }
            let Some(fields) = self.source.next_record()? else {
                break;
            };
            batch.extend(fields);
            pending += 1;
            report.records_read += 1;
            if pending == batch_size {
                self.flush(&mut batch, pending, &mut inspector, &mut report)?;
                pending = 0;
                if single_batch {
                    break;
                }
            }
        }
        if pending > 0 {
            self.flush(&mut batch, pending, &mut inspector, &mut report)?;
        }
        self.sink.finish()?;

        report.warnings = inspector.warnings().len();
        info!(
            records = report.records_read,
            lines = report.lines_written,
            batches = report.batches,
            warnings = report.warnings,
            cancelled = report.cancelled,
            "stream run finished"
        );
        Ok(report)
    }

    fn flush(
        &mut self,
        batch: &mut Vec<String>,
        records: usize,
        inspector: &mut EmptyResultInspector,
        report: &mut RunReport,
    ) -> Result<(), CleanError> {
        let out = execute_inspected(self.queue, std::mem::take(batch), inspector);
        self.sink.write_batch(&out)?;
        report.batches += 1;
        report.lines_written += out.len();
        let progress = self.source.progress();
        debug!(
            batch = report.batches,
            records,
            lines = out.len(),
            bytes_read = progress.bytes_read,
            total_bytes = ?progress.total_bytes,
            "batch flushed"
        );
        Ok(())
    }
}
