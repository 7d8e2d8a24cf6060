use serde::{de::DeserializeOwned, Serialize};
use std::{
    fmt,
    marker::PhantomData,
    path::{Path, PathBuf},
};
use tracing::{debug, error, info, warn};

use super::builder::FileBackedMapBuilder;
use crate::common::{
    types::{Payload, StoreOptions},
    utils,
};
use crate::error::JsonMapError;

/// A string-keyed map persisted as a single pretty-printed JSON object.
///
/// Every call does fresh I/O against the target path; nothing is cached.
/// `read` and `write` never fail: missing files and malformed JSON read back
/// as an empty map, and a payload that cannot be serialized leaves no file
/// behind. `try_read` and `try_write` have the same effects but hand the
/// failure back to the caller.
pub struct FileBackedMap<T> {
    path: PathBuf,
    options: StoreOptions,
    _payload: PhantomData<fn() -> T>,
}

impl<T> FileBackedMap<T> {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_options(path, StoreOptions::default())
    }

    pub fn with_options(path: impl AsRef<Path>, options: StoreOptions) -> Self {
        FileBackedMap {
            path: path.as_ref().to_path_buf(),
            options,
            _payload: PhantomData,
        }
    }

    pub fn builder() -> FileBackedMapBuilder<T> {
        FileBackedMapBuilder::new()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }
}

impl<T: DeserializeOwned> FileBackedMap<T> {
    /// Any failure other than a missing file is logged and read as empty.
    pub fn read(&self) -> Payload<T> {
        match self.try_read() {
            Ok(payload) => payload,
            Err(JsonMapError::SerdesJson(error)) => {
                warn!(
                    "JSON decoding error occurred at path {} - {}",
                    self.path.display(),
                    error
                );
                Payload::new()
            }
            Err(error) => {
                error!(
                    "Error reading JSON from path {} - {}",
                    self.path.display(),
                    error
                );
                Payload::new()
            }
        }
    }

    pub fn try_read(&self) -> Result<Payload<T>, JsonMapError> {
        let Some(json) = utils::restore(&self.path)? else {
            info!("File not found at path {}", self.path.display());
            return Ok(Payload::new());
        };
        let payload = serde_json::from_str(&json)?;
        Ok(payload)
    }
}

impl<T: Serialize> FileBackedMap<T> {
    pub fn write(&self, data: &Payload<T>) {
        if let Some(error) = self.try_write(data).err() {
            debug!(
                "Write to path {} abandoned - {}",
                self.path.display(),
                error
            );
        }
    }

    pub fn try_write(&self, data: &Payload<T>) -> Result<(), JsonMapError> {
        match self.store(data) {
            Ok(()) => Ok(()),
            Err(error) if error.is_serialization() => {
                error!("Serialization error occurred - {}", error);
                error!("Removing file at path {}", self.path.display());
                if let Some(remove_error) = utils::remove_if_exists(&self.path).err() {
                    error!(
                        "Error removing file at path {} - {}",
                        self.path.display(),
                        remove_error
                    );
                }
                Err(error)
            }
            Err(error) => {
                error!(
                    "File operation error occurred at path {} - {}",
                    self.path.display(),
                    error
                );
                Err(error)
            }
        }
    }

    fn store(&self, data: &Payload<T>) -> Result<(), JsonMapError> {
        if let Some(directory) = utils::missing_parent_dir(&self.path) {
            info!(
                "Creating directory {} for file at {}",
                directory.display(),
                self.path.display()
            );
            utils::create_dir(directory)?;
        }

        let json = utils::to_json_pretty(data, self.options.indent)?;
        if self.options.atomic {
            utils::persist_atomic(&json, &self.path)?;
        } else {
            utils::persist(&json, &self.path)?;
        }

        debug!(
            "Persisted {} entries to path {}",
            data.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl<T> Clone for FileBackedMap<T> {
    fn clone(&self) -> Self {
        Self::with_options(&self.path, self.options.clone())
    }
}

impl<T> fmt::Debug for FileBackedMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FileBackedMap")
            .field("path", &self.path)
            .field("options", &self.options)
            .finish()
    }
}
