use anyhow::Result;
use std::path::Path;
use tracing::{error, trace};

/// Reads a `.json` file from `path`.
///
/// ```ignore
/// let output: DesiredType = stockdash_util::read_json("./watchlist.json")?;
/// ```
pub fn read_json<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    trace!("reading file at path: {}", path.display());
    let file = std::fs::read(path)?;
    let data: T = serde_json::from_slice(&file)?;
    Ok(data)
}

/// Writes `data` as pretty-printed JSON to `path`, overwriting whatever was there.
///
/// Parent directories are created, as necessary, before the write.
pub fn write_json<T: serde::Serialize>(path: impl AsRef<Path>, data: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    let bytes = serde_json::to_vec_pretty(data)?;
    std::fs::write(path, bytes).map_err(|e| {
        error!("failed to write json file at {}, {}", path.display(), e);
        e
    })?;

    trace!("json written to {}", path.display());
    Ok(())
}
