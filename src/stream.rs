//! Streaming execution: sources, sinks, configuration and the driver that
//! replays an operation queue batch by batch.
pub mod config;
pub mod driver;
pub mod sink;
pub mod source;

pub use config::{Encoding, FileOptions, StreamConfig};
pub use driver::{CancelToken, RunReport, StreamDriver};
pub use sink::{FileSink, LineSink};
pub use source::{Fields, FileSource, LineSource, Progress, VecSource};
