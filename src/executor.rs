//! Batch executor.
//!
//! `execute` folds a batch through every queued operation in declaration
//! order. Eager cleaners call it with a one-operation queue; the stream driver
//! calls it once per batch with the full queue. Either way the only state is
//! the batch itself.
use crate::operation::{Operation, OperationQueue};
use std::fmt;

/// Non-fatal condition raised while a batch runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The operation turned a batch with content into one with none.
    EmptyResult { operation: &'static str },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::EmptyResult { operation } => {
                write!(f, "`{operation}` produced an empty result")
            }
        }
    }
}

/// Hook called after every operation.
pub trait Inspector {
    fn inspect(&mut self, op: &Operation, input_had_content: bool, output: &[String]);
}

/// Inspector that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInspector;

impl Inspector for NoInspector {
    #[inline(always)]
    fn inspect(&mut self, _: &Operation, _: bool, _: &[String]) {}
}

/// Collects an [`Warning::EmptyResult`] whenever a batch that had text comes
/// out empty, and reports it through `tracing`.
#[derive(Debug, Default, Clone)]
pub struct EmptyResultInspector {
    warnings: Vec<Warning>,
}

impl EmptyResultInspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

impl Inspector for EmptyResultInspector {
    fn inspect(&mut self, op: &Operation, input_had_content: bool, output: &[String]) {
        if input_had_content && !has_content(output) {
            let warning = Warning::EmptyResult {
                operation: op.name(),
            };
            tracing::warn!(operation = op.name(), "{warning}");
            self.warnings.push(warning);
        }
    }
}

/// `true` when the joined text of the batch is non-empty.
#[inline]
pub(crate) fn has_content(batch: &[String]) -> bool {
    batch.iter().any(|line| !line.is_empty())
}

/// Apply every operation in order. Identity for an empty queue.
pub fn execute(queue: &OperationQueue, batch: Vec<String>) -> Vec<String> {
    execute_inspected(queue, batch, &mut NoInspector)
}

/// [`execute`] with an inspector called after each operation.
pub fn execute_inspected(
    queue: &OperationQueue,
    mut batch: Vec<String>,
    inspector: &mut dyn Inspector,
) -> Vec<String> {
    for op in queue {
        batch = execute_one(op, batch, inspector);
    }
    batch
}

#[inline]
pub(crate) fn execute_one(
    op: &Operation,
    batch: Vec<String>,
    inspector: &mut dyn Inspector,
) -> Vec<String> {
    let had_content = has_content(&batch);
    let out = op.apply(batch);
    inspector.inspect(op, had_content, &out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        chars::CharClass,
        filter::LengthFilter,
        transform::{KeepOnly, KeepOptions, Trim, split_on},
    };

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_queue_is_identity() {
        let input = lines(&["a", " b "]);
        assert_eq!(execute(&OperationQueue::new(), input.clone()), input);
    }

    #[test]
    fn empty_batch_stays_empty() {
        let q = OperationQueue::new().with(Operation::map(Trim));
        assert!(execute(&q, Vec::new()).is_empty());
    }

    #[test]
    fn later_ops_see_new_length() {
        let q = OperationQueue::new()
            .with(Operation::flat_map("split_on", |l| split_on(l, "|")))
            .with(Operation::map(Trim))
            .with(Operation::filter(LengthFilter::non_empty()));
        let out = execute(&q, lines(&[" a | | b ", "c"]));
        assert_eq!(out, lines(&["a", "b", "c"]));
    }

    #[test]
    fn empty_result_is_reported_once_per_op() {
        let q = OperationQueue::new()
            .with(Operation::map(KeepOnly::from_class(
                CharClass::ArabicLetters,
                KeepOptions::default(),
            )))
            .with(Operation::map(Trim));
        let mut inspector = EmptyResultInspector::new();
        let out = execute_inspected(&q, lines(&["English only"]), &mut inspector);
        assert_eq!(out, lines(&[""]));
        assert_eq!(
            inspector.warnings(),
            &[Warning::EmptyResult {
                operation: "keep_only"
            }]
        );
    }

    #[test]
    fn no_warning_when_input_was_already_empty() {
        let q = OperationQueue::new().with(Operation::map(Trim));
        let mut inspector = EmptyResultInspector::new();
        execute_inspected(&q, lines(&[""]), &mut inspector);
        assert!(inspector.warnings().is_empty());
    }
}
