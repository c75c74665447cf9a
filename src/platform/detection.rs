use std::path::Path;

use super::OperatingSystemFamily;

/// Extensions Windows runs without a `.exe` suffix.
const WINDOWS_EXECUTABLE_EXTENSIONS: [&str; 4] = ["exe", "com", "bat", "cmd"];

/// The machine the tool chain is being selected on.
///
/// Built-in platform strategies only match targets of the host's own
/// operating system family, and pick assembler flags based on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub os: OperatingSystemFamily,
}

impl Host {
    pub fn new(os: OperatingSystemFamily) -> Self {
        Self { os }
    }

    /// Detect the current host
    pub fn detect() -> Self {
        Self {
            os: OperatingSystemFamily::current(),
        }
    }

    pub fn is_windows(&self) -> bool {
        self.os.is_windows()
    }

    pub fn is_macos(&self) -> bool {
        self.os.is_macos()
    }

    /// File name of an executable as it appears on disk on this host.
    ///
    /// A dot in the name is not an extension unless it names a Windows
    /// executable type, so versioned tools like `gcc-4.8` still get `.exe`.
    pub fn executable_name(&self, name: &str) -> String {
        let runnable = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                WINDOWS_EXECUTABLE_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            });
        if self.is_windows() && !runnable {
            format!("{}.exe", name)
        } else {
            name.to_string()
        }
    }

    /// Separator used by the `PATH` environment variable on this host.
    pub fn path_separator(&self) -> char {
        if self.is_windows() { ';' } else { ':' }
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::detect()
    }
}
