use crate::error::DeployError;
use crate::traits::FileSystem;
use std::ffi::OsStr;
use std::path::PathBuf;

#[cfg(windows)]
const AZ_FILE_NAMES: &[&str] = &["az.cmd", "az.exe", "az.bat"];

#[cfg(not(windows))]
const AZ_FILE_NAMES: &[&str] = &["az"];

/// Find the `az` executable in the directories of a PATH-style search path
pub fn locate_az(fs: &dyn FileSystem, search_path: Option<&OsStr>) -> Result<PathBuf, DeployError> {
    locate_executable(fs, search_path, AZ_FILE_NAMES).ok_or(DeployError::AzNotFound)
}

fn locate_executable(
    fs: &dyn FileSystem,
    search_path: Option<&OsStr>,
    file_names: &[&str],
) -> Option<PathBuf> {
    let paths = search_path?;

    std::env::split_paths(paths)
        .filter(|dir| !dir.as_os_str().is_empty())
        .find_map(|dir| {
            file_names
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| fs.is_executable(candidate))
        })
}
