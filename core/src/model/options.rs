use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File formats a mapping can be declared over. Only formats carrying an
/// embedded schema can have their columns resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFileType {
    Avro,
}

/// Identifies the files backing a mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileOptions {
    pub format: SourceFileType,
    /// Directory holding the files. Not searched recursively.
    pub path: PathBuf,
    #[serde(default = "default_glob")]
    pub glob: String,
    #[serde(default)]
    pub ignore_file_not_found: bool,
}

pub(crate) fn default_glob() -> String {
    "*".to_string()
}
