use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info};

use crate::engine::{OutputFormat, ValidationConfig};
use crate::quality::validate_text;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid file encoding: {0}")]
    InvalidEncoding(PathBuf),

    #[error("A CoNLL-U file must have '_u' in its file name: {0}")]
    ConlluName(PathBuf),
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> LoadError + '_ {
    move |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads a UTF-8 text file, dropping a leading byte-order mark.
pub fn load_text(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(io_error(path))?;
    let text =
        String::from_utf8(bytes).map_err(|_| LoadError::InvalidEncoding(path.to_path_buf()))?;

    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Writes `content` in one go; callers render the complete output first.
pub fn write_text(path: &Path, content: &str) -> Result<(), LoadError> {
    fs::write(path, content).map_err(io_error(path))?;
    info!(path = %path.display(), bytes = content.len(), "wrote output");
    Ok(())
}

/// CoNLL-U output files are told apart from CoNLL-X ones by `_u` in the file stem.
pub fn check_output_name(path: &Path, format: OutputFormat) -> Result<(), LoadError> {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    if format == OutputFormat::Conllu && !stem.contains("_u") {
        return Err(LoadError::ConlluName(path.to_path_buf()));
    }
    Ok(())
}

/// Files found by [`collect_corpus_files`], plus the paths that could not be expanded.
#[derive(Debug, Default)]
pub struct CorpusFiles {
    pub files: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, LoadError)>,
}

fn directory_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, LoadError> {
    let mut found: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(io_error(dir))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|file| file.is_file() && file.extension().is_some_and(|ext| ext == extension))
        .collect();
    found.sort();
    Ok(found)
}

/// Expands directories into their files with `extension`, sorted by name.
/// Plain files are kept regardless of extension.
///
/// A missing path or an unreadable directory is logged and recorded; the other paths
/// are still collected.
pub fn collect_corpus_files(paths: &[PathBuf], extension: &str) -> CorpusFiles {
    let mut collected = CorpusFiles::default();
    for path in paths {
        let expanded = if path.is_dir() {
            directory_files(path, extension)
        } else if path.exists() {
            Ok(vec![path.clone()])
        } else {
            Err(LoadError::FileNotFound(path.clone()))
        };

        match expanded {
            Ok(files) => collected.files.extend(files),
            Err(err) => {
                error!(path = %path.display(), %err, "skipping path");
                collected.failed.push((path.clone(), err));
            }
        }
    }
    collected
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub files: usize,
    pub reports: usize,
    pub failed: Vec<(PathBuf, LoadError)>,
}

/// Validates every file and writes the reports to `out`.
///
/// A file that cannot be read is logged and recorded in the summary; the others still run.
pub fn validate_files(
    files: &[PathBuf],
    config: &ValidationConfig,
    out: &mut impl Write,
) -> io::Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for path in files {
        let text = match load_text(path) {
            Ok(text) => text,
            Err(err) => {
                error!(path = %path.display(), %err, "skipping file");
                summary.failed.push((path.clone(), err));
                continue;
            }
        };

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let reports = validate_text(&name, &text, config);
        for report in &reports {
            write!(out, "{}", report)?;
        }

        info!(file = %name, sentences_with_findings = reports.len(), "validated");
        summary.files += 1;
        summary.reports += reports.len();
    }

    Ok(summary)
}

/// Collects and validates files and directories. Paths that fail to expand are counted
/// in [`BatchSummary::failed`] next to the files that fail to load.
pub fn validate_paths(
    paths: &[PathBuf],
    config: &ValidationConfig,
    out: &mut impl Write,
) -> io::Result<BatchSummary> {
    let collected = collect_corpus_files(paths, &config.extension);
    let mut summary = validate_files(&collected.files, config, out)?;

    let mut failed = collected.failed;
    failed.append(&mut summary.failed);
    summary.failed = failed;
    Ok(summary)
}
