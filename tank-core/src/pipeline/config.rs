use std::path::{Path, PathBuf};

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "output.png";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Threading controls for the per-row darken and merge passes.
pub struct Threading {
    /// Run row passes on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count (parallel mode only).
    pub threads: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Everything one composite run needs, built once by the caller.
pub struct MakeConfig {
    /// Image shown in front, lightened toward white.
    pub top: PathBuf,
    /// Image shown behind, darkened toward black.
    pub bottom: PathBuf,
    /// Destination PNG; always ends in `.png`.
    pub output: PathBuf,
    /// Row-pass threading.
    pub threading: Threading,
}

impl MakeConfig {
    /// Build a sequential config, appending `.png` to `output` when missing.
    pub fn new(
        top: impl Into<PathBuf>,
        bottom: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            top: top.into(),
            bottom: bottom.into(),
            output: normalize_output_path(output.into()),
            threading: Threading::default(),
        }
    }

    /// Replace the threading controls.
    pub fn with_threading(mut self, threading: Threading) -> Self {
        self.threading = threading;
        self
    }
}

/// Append `.png` unless the path already ends with it (case-sensitive).
pub fn normalize_output_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.as_os_str().to_string_lossy().ends_with(".png") {
        return path.to_path_buf();
    }
    let mut s = path.as_os_str().to_os_string();
    s.push(".png");
    PathBuf::from(s)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod tests;
