use std::path::Path;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, creating parent directories as needed.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Creates an empty file if it does not exist yet.
pub fn touch<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if !dest_path.exists() {
        std::fs::write(dest_path, "").map_err(Error::IoError)?;
    }
    Ok(())
}

/// Marks a file as executable. No-op on non-unix platforms.
#[cfg(unix)]
pub fn make_executable<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let dest_path = dest_path.as_ref();
    let mut perms = std::fs::metadata(dest_path)?.permissions();
    perms.set_mode(perms.mode() | 0o755);
    std::fs::set_permissions(dest_path, perms).map_err(Error::IoError)
}

#[cfg(not(unix))]
pub fn make_executable<P: AsRef<Path>>(_dest_path: P) -> Result<()> {
    Ok(())
}
