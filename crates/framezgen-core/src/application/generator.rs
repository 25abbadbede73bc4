//! Scaffold generator - the application orchestrator.
//!
//! One run is a trivial linear pipeline:
//!
//! ```text
//! Idle ──▶ CreatingDirectories ──▶ CreatingFiles ──▶ Done
//!              │                        │
//!              └───── any I/O error ────┴──▶ Aborted (error return)
//! ```
//!
//! Every operation is a blocking filesystem call executed strictly in
//! sequence. The first error aborts the remaining sequence; already-written
//! entries are left in place (no rollback).

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, Reporter},
    domain::Manifest,
    error::FramezResult,
};

/// Counts from a completed generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub directories: usize,
    pub files: usize,
}

/// Materializes a [`Manifest`] on the filesystem behind the injected ports.
///
/// Re-runnable: idempotent in structure, last-writer-wins on file content.
pub struct ScaffoldGenerator {
    filesystem: Box<dyn Filesystem>,
    reporter: Box<dyn Reporter>,
}

impl ScaffoldGenerator {
    /// Create a new generator with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, reporter: Box<dyn Reporter>) -> Self {
        Self {
            filesystem,
            reporter,
        }
    }

    /// Run one full generation pass over `manifest`.
    ///
    /// Directories are created in listed order, then files in listed order.
    /// Order only affects the order of reported confirmations, not
    /// correctness: [`Self::create_file`] independently ensures its own
    /// parent path.
    #[instrument(
        skip_all,
        fields(
            directories = manifest.directory_count(),
            files = manifest.file_count(),
        )
    )]
    pub fn run(&self, manifest: &Manifest) -> FramezResult<RunSummary> {
        manifest.validate()?;

        debug!("entering directory-creation phase");
        self.reporter.begin_directories(manifest.directory_count());
        for dir in manifest.directories() {
            self.ensure_directory(&dir.path)?;
        }

        debug!("entering file-creation phase");
        self.reporter.begin_files(manifest.file_count());
        for file in manifest.files() {
            self.create_file(&file.path, &file.content)?;
        }

        let summary = RunSummary {
            directories: manifest.directory_count(),
            files: manifest.file_count(),
        };
        info!(
            directories = summary.directories,
            files = summary.files,
            "generation run completed"
        );
        Ok(summary)
    }

    /// Create `path` and any missing ancestors; no error if it exists.
    fn ensure_directory(&self, path: &Path) -> FramezResult<()> {
        self.filesystem.create_dir_all(path)?;
        self.reporter.directory_created(path);
        Ok(())
    }

    /// Write `content` to `path`, creating the parent directory first.
    ///
    /// On successful return the file exists with exactly `content` as its
    /// bytes. A crash mid-write leaves a partial file; no recovery is
    /// provided.
    fn create_file(&self, path: &Path, content: &str) -> FramezResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.filesystem.create_dir_all(parent)?;
            }
        }
        self.filesystem.write_file(path, content)?;
        self.reporter.file_created(path);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::ports::{MockFilesystem, MockReporter},
        application::ApplicationError,
        domain::{DomainError, Manifest},
        error::FramezError,
    };
    use mockall::Sequence;
    use std::path::PathBuf;

    fn fs_err(path: &str) -> FramezError {
        ApplicationError::FilesystemError {
            path: PathBuf::from(path),
            reason: "permission denied".into(),
        }
        .into()
    }

    /// A reporter that accepts anything; used when the test only cares about
    /// filesystem interactions.
    fn permissive_reporter() -> MockReporter {
        let mut reporter = MockReporter::new();
        reporter.expect_begin_directories().return_const(());
        reporter.expect_directory_created().return_const(());
        reporter.expect_begin_files().return_const(());
        reporter.expect_file_created().return_const(());
        reporter
    }

    #[test]
    fn run_sequences_directories_before_files() {
        let manifest = Manifest::new()
            .with_directory("src/components")
            .with_file("README.md", "# Framez\n");

        let mut seq = Sequence::new();
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("src/components"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        // README.md has no parent component, so the next call is the write.
        fs.expect_write_file()
            .withf(|p, c| p == Path::new("README.md") && c == "# Framez\n")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let generator = ScaffoldGenerator::new(Box::new(fs), Box::new(permissive_reporter()));
        let summary = generator.run(&manifest).unwrap();
        assert_eq!(
            summary,
            RunSummary {
                directories: 1,
                files: 1
            }
        );
    }

    #[test]
    fn create_file_ensures_parent_first() {
        let manifest = Manifest::new().with_placeholder("src/lib/.gitkeep");

        let mut seq = Sequence::new();
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("src/lib"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, c| p == Path::new("src/lib/.gitkeep") && c.is_empty())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let generator = ScaffoldGenerator::new(Box::new(fs), Box::new(permissive_reporter()));
        generator.run(&manifest).unwrap();
    }

    #[test]
    fn directory_failure_aborts_before_file_phase() {
        let manifest = Manifest::new()
            .with_directory("src/components")
            .with_directory("src/contexts")
            .with_file("README.md", "doc");

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("src/components"))
            .times(1)
            .returning(|p| Err(fs_err(p.to_str().unwrap())));
        // Neither the second directory nor any file may be attempted.
        fs.expect_write_file().times(0);

        let mut reporter = MockReporter::new();
        reporter.expect_begin_directories().times(1).return_const(());
        reporter.expect_directory_created().times(0);
        reporter.expect_begin_files().times(0);
        reporter.expect_file_created().times(0);

        let generator = ScaffoldGenerator::new(Box::new(fs), Box::new(reporter));
        let err = generator.run(&manifest).unwrap_err();
        assert!(matches!(
            err,
            FramezError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn file_failure_stops_remaining_files() {
        let manifest = Manifest::new()
            .with_file("first.txt", "one")
            .with_file("second.txt", "two");

        let mut fs = MockFilesystem::new();
        fs.expect_write_file()
            .withf(|p, _| p == Path::new("first.txt"))
            .times(1)
            .returning(|p, _| Err(fs_err(p.to_str().unwrap())));

        let mut reporter = MockReporter::new();
        reporter.expect_begin_directories().return_const(());
        reporter.expect_begin_files().return_const(());
        // No confirmation is reported for a failed write, and second.txt is
        // never reached.
        reporter.expect_file_created().times(0);

        let generator = ScaffoldGenerator::new(Box::new(fs), Box::new(reporter));
        assert!(generator.run(&manifest).is_err());
    }

    #[test]
    fn reporter_receives_one_event_per_action() {
        let manifest = Manifest::new()
            .with_directory("assets/images")
            .with_file("app.json", "{}")
            .with_placeholder("src/types/.gitkeep");

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let mut reporter = MockReporter::new();
        reporter
            .expect_begin_directories()
            .withf(|total| *total == 1)
            .times(1)
            .return_const(());
        reporter
            .expect_directory_created()
            .withf(|p| p == Path::new("assets/images"))
            .times(1)
            .return_const(());
        reporter
            .expect_begin_files()
            .withf(|total| *total == 2)
            .times(1)
            .return_const(());
        reporter.expect_file_created().times(2).return_const(());

        let generator = ScaffoldGenerator::new(Box::new(fs), Box::new(reporter));
        generator.run(&manifest).unwrap();
    }

    #[test]
    fn invalid_manifest_is_rejected_before_any_io() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().times(0);
        fs.expect_write_file().times(0);

        let mut reporter = MockReporter::new();
        reporter.expect_begin_directories().times(0);

        let generator = ScaffoldGenerator::new(Box::new(fs), Box::new(reporter));
        let err = generator.run(&Manifest::new()).unwrap_err();
        assert!(matches!(
            err,
            FramezError::Domain(DomainError::EmptyManifest)
        ));
    }
}
