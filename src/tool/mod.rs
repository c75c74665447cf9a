//! Tool sets
//!
//! This module holds the per-selection [`ToolSet`] (tool kind to executable
//! and arguments), the tool chain families that seed it, and the argument
//! configurators that append platform specific flags.

mod args;
mod family;
mod kind;
mod set;

pub use args::{ArchitectureFlags, ArgumentConfigurator, ToolArguments};
pub use family::ToolChainFamily;
pub use kind::ToolKind;
pub use set::{ToolConfiguration, ToolSet};
