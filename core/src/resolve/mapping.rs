use itertools::Itertools;
use tracing::{info, warn};

use crate::{
    error::{MappingError, Result},
    model::{
        declaration::{MappingDeclaration, ResolvedMapping},
        fields::{LogicalType, MappingField},
        options::{FileOptions, SourceFileType},
    },
    source::{find_sample_file, read_schema},
};

use super::resolve_fields;

/// Produces the final column list of a mapping. Columns declared by the user
/// are kept as-is, otherwise they are resolved from the schema of the first
/// file matching the mapping's options.
pub fn resolve_mapping(declaration: MappingDeclaration) -> Result<ResolvedMapping> {
    let MappingDeclaration {
        name,
        options,
        fields,
    } = declaration;

    let fields = if fields.is_empty() {
        resolve_from_sample(&name, &options)?
    } else {
        validate_user_fields(fields)?
    };

    Ok(ResolvedMapping {
        name,
        options,
        fields,
    })
}

fn validate_user_fields(fields: Vec<MappingField>) -> Result<Vec<MappingField>> {
    match fields.iter().map(|f| f.name.as_str()).duplicates().next() {
        Some(dup) => Err(MappingError::DuplicateField(dup.to_string())),
        None => Ok(fields),
    }
}

fn resolve_from_sample(name: &str, options: &FileOptions) -> Result<Vec<MappingField>> {
    let sample = match find_sample_file(options)? {
        Some(path) => path,
        None if options.ignore_file_not_found => {
            warn!(
                "No file matching {} found in {} for mapping {name}, resolved no columns",
                options.glob,
                options.path.display()
            );
            return Ok(vec![]);
        }
        None => {
            return Err(MappingError::FileNotFound(format!(
                "no file matching {} in {}",
                options.glob,
                options.path.display()
            )))
        }
    };

    info!("Resolving columns of mapping {name} from {}", sample.display());
    let fields = match options.format {
        SourceFileType::Avro => resolve_fields(&read_schema(&sample)?),
    };

    let degraded = fields
        .iter()
        .filter(|f| f.data_type == LogicalType::Object)
        .map(|f| f.name.as_str())
        .join(", ");
    if !degraded.is_empty() {
        warn!("Columns of mapping {name} resolved as OBJECT: {degraded}");
    }
    Ok(fields)
}
