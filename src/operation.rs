//! Operation abstraction.
//!
//! Every declared cleaning step becomes one [`Operation`]: a function from a
//! batch of lines to a new batch of lines. Maps, filters, splits and
//! whole-collection steps all share that single shape, so the executor and
//! the stream driver never branch on where an operation came from.
use crate::{
    error::CleanError,
    filter::LineFilter,
    transform::{Transform, run_owned},
};
use smallvec::SmallVec;
use std::{fmt, slice, sync::Arc};

type BatchFn = dyn Fn(Vec<String>) -> Vec<String> + Send + Sync;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// One line in, one line out. Batch length is preserved.
    Map,
    /// Keeps a subset of the lines, in order.
    Filter,
    /// One line in, zero or more lines out.
    FlatMap,
    /// Needs the whole collection at once; never valid per batch.
    Collection,
}

impl OperationKind {
    /// Whether running the operation batch by batch gives the same result as
    /// running it once over everything.
    #[inline]
    pub fn is_batch_local(self) -> bool {
        !matches!(self, OperationKind::Collection)
    }
}

/// Immutable, cheaply clonable batch function.
#[derive(Clone)]
pub struct Operation {
    name: &'static str,
    kind: OperationKind,
    run: Arc<BatchFn>,
}

impl Operation {
    /// Line → line transform applied to every line of the batch.
    pub fn map<T: Transform + 'static>(transform: T) -> Self {
        Self {
            name: transform.name(),
            kind: OperationKind::Map,
            run: Arc::new(move |batch: Vec<String>| {
                batch
                    .into_iter()
                    .map(|line| run_owned(&transform, line))
                    .collect()
            }),
        }
    }

    /// Keeps the lines accepted by the filter.
    pub fn filter<F: LineFilter + 'static>(filter: F) -> Self {
        Self {
            name: filter.name(),
            kind: OperationKind::Filter,
            run: Arc::new(move |batch: Vec<String>| {
                batch.into_iter().filter(|line| filter.keep(line)).collect()
            }),
        }
    }

    /// Splits every line and flattens the pieces in order.
    pub fn flat_map<F>(name: &'static str, split: F) -> Self
    where
        F: Fn(&str) -> Vec<String> + Send + Sync + 'static,
    {
        Self {
            name,
            kind: OperationKind::FlatMap,
            run: Arc::new(move |batch: Vec<String>| {
                batch.iter().flat_map(|line| split(line.as_str())).collect()
            }),
        }
    }

    /// A step over the whole collection (deduplication, for instance).
    pub fn collection<F>(name: &'static str, run: F) -> Self
    where
        F: Fn(Vec<String>) -> Vec<String> + Send + Sync + 'static,
    {
        Self {
            name,
            kind: OperationKind::Collection,
            run: Arc::new(run),
        }
    }

    /// Rename, keeping the function.
    #[inline]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    #[inline(always)]
    pub fn apply(&self, batch: Vec<String>) -> Vec<String> {
        (self.run)(batch)
    }

    #[inline(always)]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub fn kind(&self) -> OperationKind {
        self.kind
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Append-only (until cleared) ordered list of operations.
///
/// No reordering, deduplication or fusion ever happens: iteration order is
/// append order. Cloning copies `Arc`s only.
#[derive(Debug, Clone, Default)]
pub struct OperationQueue {
    ops: SmallVec<[Operation; 12]>,
}

impl OperationQueue {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn append(&mut self, op: Operation) {
        self.ops.push(op);
    }

    /// Builder-style append.
    #[inline]
    pub fn with(mut self, op: Operation) -> Self {
        self.append(op);
        self
    }

    #[inline]
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Operation, CleanError> {
        self.ops.get(index).ok_or(CleanError::OutOfRange {
            index,
            len: self.ops.len(),
        })
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Operation> {
        self.ops.iter()
    }

    /// First operation that cannot run batch by batch.
    pub fn first_collection_op(&self) -> Option<&Operation> {
        self.ops.iter().find(|op| !op.kind().is_batch_local())
    }

    /// `true` when every operation keeps one output line per input line.
    pub fn is_map_only(&self) -> bool {
        self.ops.iter().all(|op| op.kind() == OperationKind::Map)
    }
}

impl Extend<Operation> for OperationQueue {
    fn extend<I: IntoIterator<Item = Operation>>(&mut self, iter: I) {
        self.ops.extend(iter);
    }
}

impl FromIterator<Operation> for OperationQueue {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OperationQueue {
    type Item = &'a Operation;
    type IntoIter = slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        chars::CharClass,
        filter::LengthFilter,
        transform::{RemoveChars, Trim, split_on},
    };

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn map_preserves_length_and_order() {
        let op = Operation::map(RemoveChars::from_class(CharClass::EnglishLetters));
        assert_eq!(op.kind(), OperationKind::Map);
        assert_eq!(op.name(), "remove_chars");
        let out = op.apply(lines(&["a نص", "", "b"]));
        assert_eq!(out, lines(&[" نص", "", ""]));
    }

    #[test]
    fn filter_keeps_subset_in_order() {
        let op = Operation::filter(LengthFilter::non_empty());
        let out = op.apply(lines(&["x", "", "y", " "]));
        assert_eq!(out, lines(&["x", "y"]));
    }

    #[test]
    fn flat_map_flattens_in_order() {
        let op = Operation::flat_map("split_on", |l| split_on(l, ","));
        let out = op.apply(lines(&["a,b", "c"]));
        assert_eq!(out, lines(&["a", "b", "c"]));
        assert!(op.kind().is_batch_local());
    }

    #[test]
    fn input_vector_is_untouched_by_clone_apply() {
        let op = Operation::map(Trim);
        let input = lines(&[" a "]);
        let out = op.apply(input.clone());
        assert_eq!(input, lines(&[" a "]));
        assert_eq!(out, lines(&["a"]));
    }

    #[test]
    fn queue_append_get_clear() {
        let mut q = OperationQueue::new();
        assert!(q.is_empty());
        q.append(Operation::map(Trim).named("strip"));
        q.append(Operation::filter(LengthFilter::non_empty()));
        assert_eq!(q.len(), 2);
        assert_eq!(q.get(0).unwrap().name(), "strip");
        assert!(matches!(
            q.get(2),
            Err(CleanError::OutOfRange { index: 2, len: 2 })
        ));
        let names: Vec<_> = q.iter().map(Operation::name).collect();
        assert_eq!(names, ["strip", "remove_lines_below_len"]);
        assert!(!q.is_map_only());
        q.clear();
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn collection_ops_are_flagged() {
        let q = OperationQueue::new()
            .with(Operation::map(Trim))
            .with(Operation::collection("reverse", |mut v| {
                v.reverse();
                v
            }));
        assert_eq!(q.first_collection_op().map(Operation::name), Some("reverse"));
    }
}
