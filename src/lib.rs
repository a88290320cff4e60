//! Arabic text cleaning pipelines.
//!
//! Declare a chain of cleaning steps once with the [`CleanOps`] methods and
//! run it either eagerly over lines held in memory ([`Cleaner`]) or batch by
//! batch over files too large to load ([`FileStreamCleaner`],
//! [`FolderStreamCleaner`]). Both paths execute the same [`OperationQueue`]
//! and produce the same lines.
pub mod chars;
pub mod cleaner;
pub mod error;
pub mod executor;
pub mod file;
pub mod filter;
pub mod folder;
pub mod operation;
pub mod ops;
pub mod stream;
pub mod transform;

pub use chars::{CharClass, CharSet};
pub use cleaner::{Cleaner, Mode};
pub use error::CleanError;
pub use executor::{EmptyResultInspector, Inspector, Warning, execute, execute_inspected};
pub use file::FileStreamCleaner;
pub use filter::{LengthUnit, LineFilter};
pub use folder::{FileReport, FolderStreamCleaner};
pub use operation::{Operation, OperationKind, OperationQueue};
pub use ops::CleanOps;
pub use stream::{
    CancelToken, Encoding, FileOptions, LineSink, LineSource, RunReport, StreamConfig,
    StreamDriver,
};
pub use transform::{KeepOptions, Transform};

#[cfg(test)]
pub(crate) mod testing {
    pub(crate) mod pipeline_contract;
}

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
