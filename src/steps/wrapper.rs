//! CESAR wrapper script generation.
//!
//! Downstream tools always call `./cesar`; the wrapper resolves its own
//! directory at runtime and forwards every argument to the binary built
//! inside the CESAR checkout. Rendering and permission setting are separate
//! so each can be tested alone.

use std::fs;
use std::path::Path;

use crate::config::layout::CESAR_BINARY_NAME;
use crate::error::{Result, SetupError};

/// Render the four-line wrapper for a checkout directory named `cesar_dir`.
pub fn render_wrapper(cesar_dir: &str) -> String {
    format!(
        concat!(
            "#!/usr/bin/env bash\n",
            "DIR=\"$( cd \"$( dirname \"${{BASH_SOURCE[0]}}\" )\" >/dev/null 2>&1 && pwd )\"\n",
            "CESAR_BINARY=\"${{DIR}}/{}/{}\"\n",
            "$CESAR_BINARY \"$@\"\n",
        ),
        cesar_dir, CESAR_BINARY_NAME
    )
}

/// Write wrapper content to `path`, replacing any existing file.
pub fn write_wrapper(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| SetupError::WrapperWriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Mark `path` executable (`0o755`).
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|source| {
        SetupError::WrapperWriteFailed {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Mark `path` executable. Windows has no execute bit; only existence is checked.
#[cfg(not(unix))]
pub fn make_executable(path: &Path) -> Result<()> {
    fs::metadata(path)
        .map(|_| ())
        .map_err(|source| SetupError::WrapperWriteFailed {
            path: path.to_path_buf(),
            source,
        })
}
