use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating system family of a build target or of the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OperatingSystemFamily {
    Windows,
    MacOs,
    Linux,
    FreeBsd,
    Solaris,
    Other(String),
}

impl OperatingSystemFamily {
    pub fn is_windows(&self) -> bool {
        matches!(self, OperatingSystemFamily::Windows)
    }

    pub fn is_macos(&self) -> bool {
        matches!(self, OperatingSystemFamily::MacOs)
    }

    /// Family of the operating system this binary was compiled for.
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            OperatingSystemFamily::MacOs
        }
        #[cfg(target_os = "linux")]
        {
            OperatingSystemFamily::Linux
        }
        #[cfg(target_os = "windows")]
        {
            OperatingSystemFamily::Windows
        }
        #[cfg(target_os = "freebsd")]
        {
            OperatingSystemFamily::FreeBsd
        }
        #[cfg(target_os = "solaris")]
        {
            OperatingSystemFamily::Solaris
        }
        #[cfg(not(any(
            target_os = "macos",
            target_os = "linux",
            target_os = "windows",
            target_os = "freebsd",
            target_os = "solaris"
        )))]
        {
            OperatingSystemFamily::Other(std::env::consts::OS.to_string())
        }
    }
}

impl fmt::Display for OperatingSystemFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatingSystemFamily::Windows => write!(f, "windows"),
            OperatingSystemFamily::MacOs => write!(f, "macos"),
            OperatingSystemFamily::Linux => write!(f, "linux"),
            OperatingSystemFamily::FreeBsd => write!(f, "freebsd"),
            OperatingSystemFamily::Solaris => write!(f, "solaris"),
            OperatingSystemFamily::Other(name) => write!(f, "{}", name),
        }
    }
}

impl FromStr for OperatingSystemFamily {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized.is_empty() {
            anyhow::bail!("Operating system name must not be empty.");
        }
        Ok(match normalized.as_str() {
            "macos" | "mac os x" | "osx" | "darwin" => OperatingSystemFamily::MacOs,
            "linux" => OperatingSystemFamily::Linux,
            "freebsd" => OperatingSystemFamily::FreeBsd,
            "solaris" | "sunos" => OperatingSystemFamily::Solaris,
            name if name.starts_with("win") => OperatingSystemFamily::Windows,
            _ => OperatingSystemFamily::Other(normalized),
        })
    }
}

impl TryFrom<String> for OperatingSystemFamily {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OperatingSystemFamily> for String {
    fn from(value: OperatingSystemFamily) -> Self {
        value.to_string()
    }
}
