//! Parallel cleaning of every file in a folder.
//!
//! The declared queue is snapshotted into an `Arc` before fan-out. Each
//! worker then builds its own source, sink and driver for one file, and
//! nothing shared is mutated until every file is done.
use crate::{
    cleaner::Mode,
    error::CleanError,
    file::{check_paths, default_output_path, stream_file},
    operation::{Operation, OperationQueue},
    ops::CleanOps,
    stream::{config::StreamConfig, driver::RunReport},
};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::info;
use walkdir::WalkDir;

/// Result of cleaning one file of the folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: RunReport,
}

#[derive(Debug, Clone)]
pub struct FolderStreamCleaner {
    queue: OperationQueue,
    root: PathBuf,
    output_dir: Option<PathBuf>,
    files: Vec<PathBuf>,
    config: StreamConfig,
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

fn collect_files(root: &Path, recursive: bool) -> Result<Vec<PathBuf>, CleanError> {
    let walker = WalkDir::new(root)
        .follow_links(true)
        .max_depth(if recursive { usize::MAX } else { 1 })
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()));
    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

impl FolderStreamCleaner {
    /// Non-hidden files directly under `root` (or anywhere below it with
    /// `include_subdirs`), in sorted order.
    ///
    /// With `output_dir` every output mirrors its input's path relative to
    /// `root`; without it each file gets the default `_cleaned` sibling.
    pub fn new(
        root: impl Into<PathBuf>,
        output_dir: Option<PathBuf>,
        include_subdirs: bool,
        config: StreamConfig,
    ) -> Result<Self, CleanError> {
        let root = root.into();
        config.validate()?;
        if !root.is_dir() {
            return Err(CleanError::SourceNotFound(root));
        }
        let mut files = collect_files(&root, include_subdirs)?;
        if files.is_empty() {
            return Err(CleanError::SourceNotFound(root));
        }
        files.sort();
        Ok(Self {
            queue: OperationQueue::new(),
            root,
            output_dir,
            files,
            config,
        })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn output_for(&self, file: &Path) -> PathBuf {
        match (&self.output_dir, file.strip_prefix(&self.root)) {
            (Some(dir), Ok(relative)) => dir.join(relative),
            _ => default_output_path(file),
        }
    }

    /// Clean every file on a pool of `config.workers` threads. Reports come
    /// back in file order; the first failing file aborts the call.
    pub fn clean_files(&self, sample: bool) -> Result<Vec<FileReport>, CleanError> {
        if self.queue.is_empty() {
            return Err(CleanError::EmptyPipeline);
        }
        let jobs: Vec<(PathBuf, PathBuf)> = self
            .files
            .iter()
            .map(|file| (file.clone(), self.output_for(file)))
            .collect();
        for (input, output) in &jobs {
            check_paths(input, output, &self.config)?;
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)?;
            }
        }

        let template = Arc::new(self.queue.clone());
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.workers)
            .build()?;
        let total = jobs.len();
        let config = &self.config;

        pool.install(|| {
            jobs.into_par_iter()
                .enumerate()
                .map(|(i, (input, output))| {
                    let queue = Arc::clone(&template);
                    let report = stream_file(&queue, &input, &output, config, sample, None)?;
                    info!(
                        file = %input.display(),
                        file_no = i + 1,
                        total,
                        lines = report.lines_written,
                        "file cleaned"
                    );
                    Ok(FileReport {
                        input,
                        output,
                        report,
                    })
                })
                .collect::<Result<Vec<_>, CleanError>>()
        })
    }
}

impl CleanOps for FolderStreamCleaner {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("b.txt"), "نص b\n").unwrap();
        fs::write(root.join("a.txt"), "نص a\n").unwrap();
        fs::write(root.join(".hidden"), "skip\n").unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub").join("c.txt"), "نص c\n").unwrap();
        fs::create_dir(root.join(".git")).unwrap();
        fs::write(root.join(".git").join("d.txt"), "skip\n").unwrap();
        dir
    }

    #[test]
    fn collects_sorted_visible_files() {
        let dir = tree();
        let flat = FolderStreamCleaner::new(dir.path(), None, false, StreamConfig::default())
            .unwrap();
        let names: Vec<_> = flat
            .files()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.txt", "b.txt"]);

        let deep = FolderStreamCleaner::new(dir.path(), None, true, StreamConfig::default())
            .unwrap();
        assert_eq!(deep.len(), 3);
        assert!(deep.files().iter().all(|p| !p.starts_with(dir.path().join(".git"))));
    }

    #[test]
    fn hidden_root_is_still_walked() {
        let parent = tempfile::tempdir().unwrap();
        let root = parent.path().join(".corpus");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("a.txt"), "نص\n").unwrap();
        let c = FolderStreamCleaner::new(&root, None, true, StreamConfig::default()).unwrap();
        assert_eq!(c.files(), [root.join("a.txt")]);
    }

    #[test]
    fn empty_folder_is_source_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = FolderStreamCleaner::new(dir.path(), None, true, StreamConfig::default());
        assert!(matches!(err, Err(CleanError::SourceNotFound(_))));
    }

    #[test]
    fn mirrors_layout_under_output_dir() {
        let dir = tree();
        let out = tempfile::tempdir().unwrap();
        let mut c = FolderStreamCleaner::new(
            dir.path(),
            Some(out.path().to_path_buf()),
            true,
            StreamConfig::new().workers(2),
        )
        .unwrap();
        c.remove_english_text().strip();
        let reports = c.clean_files(false).unwrap();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].input, c.files()[0]);
        for r in &reports {
            assert_eq!(fs::read_to_string(&r.output).unwrap(), "نص\n");
        }
        assert!(out.path().join("sub").join("c.txt").is_file());
    }

    #[test]
    fn default_outputs_sit_next_to_inputs() {
        let dir = tree();
        let mut c =
            FolderStreamCleaner::new(dir.path(), None, false, StreamConfig::default()).unwrap();
        c.strip();
        c.clean_files(true).unwrap();
        assert!(dir.path().join("a_cleaned.txt").is_file());
        assert!(dir.path().join("b_cleaned.txt").is_file());
    }

    #[test]
    fn refuses_to_start_without_operations() {
        let dir = tree();
        let c = FolderStreamCleaner::new(dir.path(), None, false, StreamConfig::default())
            .unwrap();
        assert!(matches!(c.clean_files(false), Err(CleanError::EmptyPipeline)));
    }
}
