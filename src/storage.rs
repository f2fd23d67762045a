use crate::errors::ClientError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::error;

pub const FIRST_NAME_KEY: &str = "first_name";

/// Persisted key-value state, the console's counterpart of browser local storage.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl Store {
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load_values(&path).await;
        Self { path, values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The in-memory value only changes once the file write succeeded.
    pub async fn set(&mut self, key: &str, value: &str) -> Result<(), ClientError> {
        let mut candidate = self.values.clone();
        candidate.insert(key.to_string(), value.to_string());
        persist_values(&self.path, &candidate).await?;
        self.values = candidate;
        Ok(())
    }
}

async fn load_values(path: &Path) -> BTreeMap<String, String> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(values) => values,
            Err(err) => {
                error!("failed to parse state file: {err}");
                BTreeMap::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
        Err(err) => {
            error!("failed to read state file: {err}");
            BTreeMap::new()
        }
    }
}

async fn persist_values(path: &Path, values: &BTreeMap<String, String>) -> Result<(), ClientError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    let payload = serde_json::to_vec_pretty(values).map_err(ClientError::storage)?;
    fs::write(path, payload).await?;
    Ok(())
}
