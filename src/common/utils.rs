use crate::common::finite;
use crate::error::JsonMapError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    fs,
    path::{Path, PathBuf},
};

const TEMP_SUFFIX: &str = ".tmp";

/// Reads the file as UTF-8 text. `None` when nothing exists at the path.
pub(crate) fn restore(path: impl AsRef<Path>) -> Result<Option<String>, JsonMapError> {
    if !path.as_ref().exists() {
        return Ok(None);
    }
    let json = fs::read_to_string(path.as_ref())?;
    Ok(Some(json))
}

/// Parent directory of `path` when it is named but not yet on disk.
pub(crate) fn missing_parent_dir(path: &Path) -> Option<&Path> {
    let parent = path.parent()?;
    if parent.as_os_str().is_empty() || parent.exists() {
        return None;
    }
    Some(parent)
}

pub(crate) fn create_dir(path: impl AsRef<Path>) -> Result<(), JsonMapError> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

pub(crate) fn to_json_pretty<T: Serialize + ?Sized>(
    value: &T,
    indent: usize,
) -> Result<Vec<u8>, serde_json::Error> {
    finite::check(value)?;

    let indent_bytes = vec![b' '; indent];
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(buffer)
}

pub(crate) fn persist(bytes: &[u8], path: impl AsRef<Path>) -> Result<(), JsonMapError> {
    fs::write(path.as_ref(), bytes)?;
    Ok(())
}

pub(crate) fn persist_atomic(bytes: &[u8], path: impl AsRef<Path>) -> Result<(), JsonMapError> {
    let temp_path = temp_path_for(path.as_ref())?;
    if let Err(error) = fs::write(&temp_path, bytes) {
        let _ = fs::remove_file(&temp_path);
        return Err(error.into());
    }
    if let Err(error) = fs::rename(&temp_path, path.as_ref()) {
        let _ = fs::remove_file(&temp_path);
        return Err(error.into());
    }
    Ok(())
}

/// Returns whether a file was actually removed.
pub(crate) fn remove_if_exists(path: impl AsRef<Path>) -> Result<bool, JsonMapError> {
    if !path.as_ref().is_file() {
        return Ok(false);
    }
    fs::remove_file(path.as_ref())?;
    Ok(true)
}

pub(crate) fn temp_path_for(path: &Path) -> Result<PathBuf, JsonMapError> {
    let Some(file_name) = path.file_name() else {
        return Err(JsonMapError::Simple(format!(
            "Path {} has no file name",
            path.display()
        )));
    };
    let mut temp_name = file_name.to_os_string();
    temp_name.push(TEMP_SUFFIX);
    Ok(path.with_file_name(temp_name))
}
