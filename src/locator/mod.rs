//! Tool lookup
//!
//! A [`ToolLocator`] answers whether a tool executable can be found on this
//! host. [`ToolSearchPath`] is the file system backed implementation.

mod search_path;

use std::path::{Path, PathBuf};

use crate::tool::ToolKind;

pub use search_path::ToolSearchPath;

/// Outcome of looking up a single tool executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Found(PathBuf),
    /// Human readable explanation naming the tool and executable searched for.
    NotFound(String),
}

impl SearchResult {
    pub fn is_available(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchResult::Found(path) => Some(path),
            SearchResult::NotFound(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            SearchResult::Found(_) => None,
            SearchResult::NotFound(reason) => Some(reason),
        }
    }
}

/// Finds tool executables for a tool chain.
#[cfg_attr(test, mockall::automock)]
pub trait ToolLocator: Send + Sync {
    /// Look up `executable` for the given tool kind. A negative result is final.
    fn locate(&self, kind: ToolKind, executable: &str) -> SearchResult;

    /// Append a directory to search.
    fn add_path(&mut self, dir: PathBuf);

    /// Directories searched, in order.
    fn path(&self) -> Vec<PathBuf>;
}
