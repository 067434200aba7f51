use crate::dataset::DatasetSummary;
use crate::domain::{GeoPoint, LocationImport, OutputFormat};
use crate::extensions::path_ext::FileName;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tracing::{debug, instrument};

/// Writes `points` to `path` as JSON in the given layout, replacing any existing file.
///
/// Missing parent directories are created. Encoding runs on the blocking pool and is awaited before the file is
/// written, so at most one encoded batch is held at a time.
#[instrument(skip(points), fields(points = points.len()))]
pub async fn write_dataset(points: Vec<GeoPoint>, path: &Path, format: OutputFormat) -> Result<DatasetSummary, DatasetError> {
    debug!("📁 Writing '{}'...", path.string_file_name());
    let summary = DatasetSummary::of(&points);

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|e| DatasetError::Io {
            source: e,
            path: parent.to_path_buf(),
        })?;
    }

    let json = task::spawn_blocking(move || encode(&points, format))
        .await?
        .map_err(|e| DatasetError::Serialize {
            source: e,
            path: path.to_path_buf(),
        })?;

    fs::write(path, &json).await.map_err(|e| DatasetError::Io {
        source: e,
        path: path.to_path_buf(),
    })?;

    let summary = summary.with_bytes(json.len());
    debug!("📁 Writing '{}'... OK, {}", path.string_file_name(), summary);
    Ok(summary)
}

/// Reads a dataset written by [`write_dataset`] in either layout.
#[instrument]
pub async fn read_dataset(path: &Path) -> Result<Vec<GeoPoint>, DatasetError> {
    let content = fs::read(path).await.map_err(|e| DatasetError::Io {
        source: e,
        path: path.to_path_buf(),
    })?;

    task::spawn_blocking(move || decode(&content)).await?.map_err(|e| DatasetError::Deserialize {
        source: e,
        path: path.to_path_buf(),
    })
}

fn encode(points: &[GeoPoint], format: OutputFormat) -> Result<Vec<u8>, serde_json::Error> {
    match format {
        OutputFormat::Flat => serde_json::to_vec(points),
        OutputFormat::Envelope => serde_json::to_vec(&LocationImport::new(points)),
    }
}

fn decode(content: &[u8]) -> Result<Vec<GeoPoint>, serde_json::Error> {
    match content.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => serde_json::from_slice::<LocationImport>(content).map(LocationImport::into_locations),
        _ => serde_json::from_slice(content),
    }
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("unable to access '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("unable to encode '{}': {}", path.display(), source)]
    Serialize { source: serde_json::Error, path: PathBuf },
    #[error("unable to parse '{}': {}", path.display(), source)]
    Deserialize { source: serde_json::Error, path: PathBuf },
    #[error("'{}' holds {} point(s), expected {}", path.display(), found, expected)]
    Mismatch { path: PathBuf, expected: usize, found: usize },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}
