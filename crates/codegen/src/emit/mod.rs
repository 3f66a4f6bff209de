//! Source emission for the supported targets.
//!
//! Emission is a pure function of the ordered records and the method list;
//! nothing touches the filesystem until both files are rendered.

mod python;
mod rust;
mod stubs;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::config::OutputFiles;
use crate::error::{CodegenError, CodegenResult};
use crate::ir::{MethodDescriptor, OrderedRecord};

pub use python::{PythonDialect, python_type};
pub use rust::{RustDialect, rust_type};
pub use stubs::{documentation, ordered_params};

/// Per-target rendering of the two generated files.
pub trait Dialect {
    /// Render record declarations, already in emission order.
    fn render_records(&self, records: &[OrderedRecord<'_>]) -> String;

    /// Render the method stub file.
    fn render_methods(&self, methods: &[MethodDescriptor]) -> String;
}

/// Generation target language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Python,
    Rust,
}

impl Target {
    /// `(records, methods)` file names.
    pub fn default_file_names(self) -> (&'static str, &'static str) {
        match self {
            Target::Python => ("classes.py", "api.py"),
            Target::Rust => ("types.rs", "api.rs"),
        }
    }

    /// Dialect for this target; `files` decides the Python records module name.
    pub fn dialect(self, files: &OutputFiles) -> Box<dyn Dialect> {
        match self {
            Target::Python => {
                let module = files
                    .records
                    .strip_suffix(".py")
                    .unwrap_or(&files.records);
                Box::new(PythonDialect::new(module))
            }
            Target::Rust => Box::new(RustDialect),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Target::Python => "python",
            Target::Rust => "rust",
        })
    }
}

/// Both generated files, fully rendered in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSources {
    pub records: String,
    pub methods: String,
}

/// Paths written by [`GeneratedSources::write_to`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub records: PathBuf,
    pub methods: PathBuf,
}

impl GeneratedSources {
    /// Write both files into `dir`.
    ///
    /// Contents go to temporary siblings first and are renamed into place
    /// only once both writes succeeded.
    pub fn write_to(&self, dir: &Path, files: &OutputFiles) -> CodegenResult<WrittenFiles> {
        std::fs::create_dir_all(dir).map_err(|err| CodegenError::io(dir, err))?;

        let targets = [
            (dir.join(&files.records), &self.records),
            (dir.join(&files.methods), &self.methods),
        ];

        let mut staged: Vec<(PathBuf, &PathBuf)> = Vec::with_capacity(targets.len());
        for (path, contents) in &targets {
            let tmp = staging_path(path);
            if let Err(err) = std::fs::write(&tmp, contents.as_bytes()) {
                discard(staged.iter().map(|(tmp, _)| tmp.as_path()));
                return Err(CodegenError::io(tmp, err));
            }
            staged.push((tmp, path));
        }

        let mut placed: Vec<&Path> = Vec::with_capacity(staged.len());
        for (tmp, path) in &staged {
            if let Err(err) = std::fs::rename(tmp, path) {
                discard(staged.iter().map(|(tmp, _)| tmp.as_path()));
                discard(placed.iter().copied());
                return Err(CodegenError::io(path.as_path(), err));
            }
            placed.push(path.as_path());
        }

        let [(records, _), (methods, _)] = targets;
        info!(
            records = %records.display(),
            methods = %methods.display(),
            "Wrote generated sources."
        );
        Ok(WrittenFiles { records, methods })
    }
}

/// `api.py` stages as `api.py.tmp`, so outputs sharing a stem never collide.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Best-effort removal after a failed write.
fn discard<'a>(paths: impl Iterator<Item = &'a Path>) {
    for path in paths {
        let _ = std::fs::remove_file(path);
    }
}
