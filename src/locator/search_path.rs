use log::debug;
use std::path::{Path, PathBuf};

use super::{SearchResult, ToolLocator};
use crate::platform::Host;
use crate::runtime::Runtime;
use crate::tool::ToolKind;

/// Searches an ordered list of directories for tool executables.
///
/// When no directories have been configured, the host's `PATH` is searched
/// instead.
pub struct ToolSearchPath<R: Runtime> {
    runtime: R,
    host: Host,
    path: Vec<PathBuf>,
}

impl<R: Runtime> ToolSearchPath<R> {
    pub fn new(runtime: R, host: Host) -> Self {
        Self {
            runtime,
            host,
            path: Vec::new(),
        }
    }

    fn system_path(&self) -> Vec<PathBuf> {
        match self.runtime.env_var("PATH") {
            Ok(value) => value
                .split(self.host.path_separator())
                .filter(|entry| !entry.is_empty())
                .map(PathBuf::from)
                .collect(),
            Err(e) => {
                debug!("PATH is not available: {}", e);
                Vec::new()
            }
        }
    }

    fn is_executable_file(&self, candidate: &Path) -> bool {
        self.runtime.exists(candidate) && !self.runtime.is_dir(candidate)
    }

    fn locate_absolute(&self, kind: ToolKind, executable: &Path) -> SearchResult {
        if self.is_executable_file(executable) {
            SearchResult::Found(executable.to_path_buf())
        } else {
            SearchResult::NotFound(format!(
                "{} '{}' does not exist.",
                kind.display_name(),
                executable.display()
            ))
        }
    }
}

impl<R: Runtime> ToolLocator for ToolSearchPath<R> {
    #[tracing::instrument(skip(self))]
    fn locate(&self, kind: ToolKind, executable: &str) -> SearchResult {
        let file_name = self.host.executable_name(executable);
        let as_path = Path::new(&file_name);
        if as_path.is_absolute() {
            return self.locate_absolute(kind, as_path);
        }

        let use_system_path = self.path.is_empty();
        let dirs = if use_system_path {
            self.system_path()
        } else {
            self.path.clone()
        };

        for dir in &dirs {
            let candidate = dir.join(&file_name);
            if self.is_executable_file(&candidate) {
                debug!("Found {} at {}", kind, candidate.display());
                return SearchResult::Found(candidate);
            }
        }

        debug!("{} '{}' not found in {} directories", kind, file_name, dirs.len());

        if use_system_path {
            SearchResult::NotFound(format!(
                "Could not find {} '{}' in system path.",
                kind.display_name(),
                executable
            ))
        } else {
            let searched: String = dirs
                .iter()
                .map(|dir| format!("\n  - {}", dir.display()))
                .collect();
            SearchResult::NotFound(format!(
                "Could not find {} '{}'. Searched in:{}",
                kind.display_name(),
                executable,
                searched
            ))
        }
    }

    fn add_path(&mut self, dir: PathBuf) {
        if !self.path.contains(&dir) {
            self.path.push(dir);
        }
    }

    fn path(&self) -> Vec<PathBuf> {
        self.path.clone()
    }
}
