use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use regex::Regex;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::{
    error::{MappingError, Result},
    model::{avro::SchemaDescriptor, options::FileOptions},
};

pub mod container;
pub mod schema_json;

/// Reads the Avro schema stored in `path`, either an object container file
/// (detected by its magic bytes) or plain JSON schema text such as an `.avsc`
/// file.
pub fn read_schema(path: &Path) -> Result<SchemaDescriptor> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut buf = Vec::with_capacity(container::MAGIC.len());
    reader
        .by_ref()
        .take(container::MAGIC.len() as u64)
        .read_to_end(&mut buf)?;

    let text = if buf.as_slice() == container::MAGIC {
        debug!("Reading schema from container header of {}", path.display());
        container::read_header_schema(buf.as_slice().chain(reader))?
    } else {
        debug!("Reading schema text from {}", path.display());
        reader.read_to_end(&mut buf)?;
        String::from_utf8(buf)?
    };
    schema_json::parse_schema(&text)
}

/// Returns the first file, in path order, directly inside the options' path
/// whose name matches the glob.
pub fn find_sample_file(options: &FileOptions) -> Result<Option<PathBuf>> {
    if !options.path.is_dir() {
        if options.ignore_file_not_found {
            warn!("Directory {} does not exist", options.path.display());
            return Ok(None);
        }
        return Err(MappingError::FileNotFound(format!(
            "directory {} does not exist",
            options.path.display()
        )));
    }

    let pattern = glob_to_regex(&options.glob)?;
    for entry in WalkDir::new(&options.path)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() && pattern.is_match(&entry.file_name().to_string_lossy())
        {
            return Ok(Some(entry.into_path()));
        }
    }
    Ok(None)
}

/// `*` matches any run of characters and `?` any single character, except
/// the path separator. Everything else is literal.
fn glob_to_regex(glob: &str) -> Result<Regex> {
    let mut pattern = String::from("^");
    for c in glob.chars() {
        match c {
            '*' => pattern.push_str("[^/]*"),
            '?' => pattern.push_str("[^/]"),
            c => pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    pattern.push('$');
    Ok(Regex::new(&pattern)?)
}
