use crate::error::{MappingError, Result};
use std::env;

/// Format resolved mappings are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}

impl TryFrom<String> for OutputFormat {
    type Error = MappingError;
    fn try_from(value: String) -> Result<Self, MappingError> {
        match value.to_ascii_lowercase().as_str() {
            "yaml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(MappingError::SerDe(format!(
                "Invalid output format specified: {value}. Valid values are yaml or json"
            ))),
        }
    }
}

/// Initializes and Holds envrionment variable settings which
/// control mapping resolution. Every setting is optional.
#[derive(Debug, PartialEq)]
pub struct EnvConfigSettings {
    pub output: OutputFormat,
    pub ignore_file_not_found: bool,
}

impl EnvConfigSettings {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let output = match lookup("MAPPINGCTL_OUTPUT") {
            Some(v) => v.try_into()?,
            None => OutputFormat::Yaml,
        };

        let ignore_file_not_found = lookup("MAPPINGCTL_IGNORE_FILE_NOT_FOUND")
            .unwrap_or("false".to_string())
            .parse::<bool>()
            .map_err(|e| {
                MappingError::SerDe(format!(
                    "Unable to parse MAPPINGCTL_IGNORE_FILE_NOT_FOUND as boolean: {e}"
                ))
            })?;

        Ok(Self {
            output,
            ignore_file_not_found,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::error::Result;

    use super::{EnvConfigSettings, OutputFormat};

    fn settings(vars: &[(&str, &str)]) -> Result<EnvConfigSettings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfigSettings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() -> Result<()> {
        assert_eq!(
            settings(&[])?,
            EnvConfigSettings {
                output: OutputFormat::Yaml,
                ignore_file_not_found: false,
            }
        );
        Ok(())
    }

    #[test]
    fn test_overrides() -> Result<()> {
        let conf = settings(&[
            ("MAPPINGCTL_OUTPUT", "JSON"),
            ("MAPPINGCTL_IGNORE_FILE_NOT_FOUND", "true"),
        ])?;
        assert_eq!(conf.output, OutputFormat::Json);
        assert!(conf.ignore_file_not_found);
        Ok(())
    }

    #[test]
    fn test_invalid_values() {
        assert!(settings(&[("MAPPINGCTL_OUTPUT", "xml")]).is_err());
        assert!(settings(&[("MAPPINGCTL_IGNORE_FILE_NOT_FOUND", "yes")]).is_err());
    }
}
