use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Local durable storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory received payloads are persisted into. Defaults to the
    /// platform data directory when unset.
    #[serde(default)]
    pub payload_dir: Option<PathBuf>,
}
