pub mod availability;
pub mod commands;
pub mod config;
pub mod locator;
pub mod platform;
pub mod provider;
pub mod registry;
pub mod runtime;
pub mod strategy;
pub mod tool;
pub mod toolchain;

pub use config::ToolChainConfig;
pub use locator::{SearchResult, ToolLocator, ToolSearchPath};
pub use platform::{Architecture, Host, OperatingSystemFamily, Platform};
pub use provider::{PlatformToolProvider, ToolProvider};
pub use strategy::PlatformStrategy;
pub use tool::{ToolChainFamily, ToolKind, ToolSet};
pub use toolchain::GccCompatibleToolChain;
