use std::iter;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use filemap::conf::{EnvConfigSettings, OutputFormat};
use filemap::error::Result;
use filemap::model::declaration::{MappingDeclaration, ResolvedMapping};
use filemap::resolve::mapping::resolve_mapping;
use filemap::resolve::resolve_fields;
use filemap::source::read_schema;

/// Resolves every mapping declared under `path` and renders the results.
/// Files or declarations which fail are logged and skipped.
pub(crate) fn process_mapping_configs(
    path: std::path::PathBuf,
    conf: &EnvConfigSettings,
) -> Result<Vec<String>> {
    resolve_directory(path, conf)
        .into_iter()
        .map(|(_, mapping)| render(&mapping, conf.output))
        .collect()
}

pub(crate) fn process_schema_file(path: &std::path::Path, output: OutputFormat) -> Result<String> {
    let fields = resolve_fields(&read_schema(path)?);
    render(&fields, output)
}

fn resolve_directory(
    path: std::path::PathBuf,
    conf: &EnvConfigSettings,
) -> Vec<(String, ResolvedMapping)> {
    walk_directory(path)
        .filter_map(|filepath| match try_read_as_declarations(&filepath) {
            Ok(decls) => Some(
                iter::repeat(filepath.to_string_lossy().to_string())
                    .zip(decls)
                    .collect_vec(),
            ),
            Err(e) => {
                error!(
                    "Unable to parse file at {} with error {e}",
                    filepath.to_string_lossy()
                );
                None
            }
        })
        .flatten()
        .filter_map(|(filepath, mut decl)| {
            decl.options.ignore_file_not_found |= conf.ignore_file_not_found;
            let name = decl.name.clone();
            match resolve_mapping(decl) {
                Ok(resolved) => {
                    info!("Mapping {name} from {filepath} resolved!");
                    Some((filepath, resolved))
                }
                Err(e) => {
                    error!("Unable to resolve mapping {name} from {filepath} with error {e}");
                    None
                }
            }
        })
        .collect()
}

fn render<T: Serialize>(value: &T, output: OutputFormat) -> Result<String> {
    Ok(match output {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
    })
}

fn try_read_as_declarations(
    path: &std::path::Path,
) -> Result<impl Iterator<Item = MappingDeclaration>> {
    let f = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(f);
    let filename = path.to_string_lossy().to_string();
    let mut obj = vec![];
    for document in serde_yaml::Deserializer::from_reader(reader) {
        match MappingDeclaration::deserialize(document) {
            Ok(decl) => obj.push(decl),
            Err(e) => {
                error!(
                    "Unable to deserialize object as YAML from file {} with error {}",
                    filename, e,
                );
            }
        }
    }
    Ok(obj.into_iter())
}

fn walk_directory(dir: std::path::PathBuf) -> impl Iterator<Item = std::path::PathBuf> {
    walkdir::WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|r| match r {
            Err(e) => {
                error!("Error walking directory: {}", e);
                None
            }
            Ok(entry) if entry.file_type().is_dir() => None,
            Ok(entry) => Some(entry.into_path()),
        })
}
