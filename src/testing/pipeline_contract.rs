//! Reusable assertions every operation queue must satisfy.
//!
//! Only operations that are batch-local can be checked here; a queue holding
//! a whole-collection step is rejected up front.
use crate::{
    cleaner::{Cleaner, Mode},
    executor::execute,
    operation::OperationQueue,
    ops::CleanOps,
    stream::{driver::StreamDriver, source::VecSource},
};

/// Running `queue` over all of `lines` at once must equal running it over
/// every contiguous partition and concatenating, for every batch size from 1
/// to `lines.len() + 1`. The driver path is checked too.
pub(crate) fn assert_batch_invariant(queue: &OperationQueue, lines: &[String]) {
    assert!(
        queue.first_collection_op().is_none(),
        "batch invariance does not hold for whole-collection operations"
    );
    let whole = execute(queue, lines.to_vec());
    for size in 1..=lines.len() + 1 {
        let chunked: Vec<String> = lines
            .chunks(size)
            .flat_map(|chunk| execute(queue, chunk.to_vec()))
            .collect();
        assert_eq!(chunked, whole, "manual partition, batch size {size}");

        if queue.is_empty() {
            continue;
        }
        let mut streamed: Vec<String> = Vec::new();
        StreamDriver::new(queue, VecSource::new(lines.to_vec()), &mut streamed)
            .run(size)
            .unwrap_or_else(|e| panic!("driver failed at batch size {size}: {e}"));
        assert_eq!(streamed, whole, "stream driver, batch size {size}");
    }
}

/// Building the same chain in both modes records identical queues, and the
/// eager result equals replaying the recorded queue.
pub(crate) fn assert_modes_agree<F>(build: F, lines: &[String])
where
    F: Fn(&mut Cleaner),
{
    let mut eager = Cleaner::new(lines.to_vec(), Mode::Eager);
    build(&mut eager);
    let mut streaming = Cleaner::new(Vec::new(), Mode::Streaming);
    build(&mut streaming);

    let eager_names: Vec<_> = eager.operations().iter().map(|op| op.name()).collect();
    let stream_names: Vec<_> = streaming.operations().iter().map(|op| op.name()).collect();
    assert_eq!(eager_names, stream_names, "both modes record the same chain");

    let replayed = execute(streaming.operations(), lines.to_vec());
    assert_eq!(
        eager.lines().expect("eager cleaner owns lines"),
        replayed.as_slice(),
        "eager result equals replay of the recorded queue"
    );
    assert_batch_invariant(streaming.operations(), lines);
}
