use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Persistence for the all-time record: the greatest snake length ever
/// achieved, stored on disk as a single JSON object of the form
/// `{"record": <integer>}`.
///
/// The file is read once at startup and rewritten whenever a session ends
/// with a new maximum.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct RecordStore {
    path: PathBuf,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
struct RecordData {
    record: u32,
}

impl RecordStore {
    pub(crate) fn new(path: PathBuf) -> RecordStore {
        RecordStore { path }
    }

    /// Read the persisted record.  A missing file is a fresh install and
    /// yields zero; any other failure is fatal to startup.
    pub(crate) fn load(&self) -> Result<u32, LoadError> {
        let src = match fs_err::read(&self.path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(LoadError::read(e)),
        };
        serde_json::from_slice::<RecordData>(&src)
            .map(|data| data.record)
            .map_err(LoadError::deserialize)
    }

    /// Overwrite the persisted record with `record`
    pub(crate) fn save(&self, record: u32) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src =
            serde_json::to_string(&RecordData { record }).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(&self.path, &src).map_err(SaveError::write)?;
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save record to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize record")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write record to disk")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read record from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read record file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize record")]
    Deserialize(#[source] serde_json::Error),
}
