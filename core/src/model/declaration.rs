use serde::{Deserialize, Serialize};

use super::{fields::MappingField, options::FileOptions};

/// Declarative form of `CREATE MAPPING <name> TYPE File OPTIONS (...)`. When
/// `fields` is empty the columns are resolved from a sample file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingDeclaration {
    pub name: String,
    pub options: FileOptions,
    #[serde(default)]
    pub fields: Vec<MappingField>,
}

/// A [MappingDeclaration] with its final column list, ready to be turned into
/// catalog column definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMapping {
    pub name: String,
    pub options: FileOptions,
    pub fields: Vec<MappingField>,
}
