use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::MappingError;

/// The closed set of column types understood by the SQL engine consuming a
/// mapping. Every column is implicitly nullable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalType {
    Boolean,
    Int,
    Bigint,
    Real,
    Double,
    Varchar,
    /// Catch-all for any value the other types cannot represent.
    Object,
}

impl LogicalType {
    pub fn sql_name(&self) -> &'static str {
        match self {
            LogicalType::Boolean => "BOOLEAN",
            LogicalType::Int => "INT",
            LogicalType::Bigint => "BIGINT",
            LogicalType::Real => "REAL",
            LogicalType::Double => "DOUBLE",
            LogicalType::Varchar => "VARCHAR",
            LogicalType::Object => "OBJECT",
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.sql_name())
    }
}

impl FromStr for LogicalType {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, MappingError> {
        match s.to_ascii_uppercase().as_str() {
            "BOOLEAN" => Ok(Self::Boolean),
            "INT" => Ok(Self::Int),
            "BIGINT" => Ok(Self::Bigint),
            "REAL" => Ok(Self::Real),
            "DOUBLE" => Ok(Self::Double),
            "VARCHAR" => Ok(Self::Varchar),
            "OBJECT" => Ok(Self::Object),
            _ => Err(MappingError::SerDe(format!(
                "Invalid logical type specified: {s}. \
            Valid values are BOOLEAN, INT, BIGINT, REAL, DOUBLE, VARCHAR or OBJECT"
            ))),
        }
    }
}

/// A single column of a mapping as presented to the catalog: the field name
/// found in the source data and the [LogicalType] it is queried as.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MappingField {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: LogicalType,
}

impl MappingField {
    pub fn new(name: impl Into<String>, data_type: LogicalType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Result;

    use super::{LogicalType, MappingField};

    #[test]
    fn test_logical_type_names() -> Result<()> {
        assert_eq!("bigint".parse::<LogicalType>()?, LogicalType::Bigint);
        assert_eq!("VarChar".parse::<LogicalType>()?, LogicalType::Varchar);
        assert_eq!(LogicalType::Real.to_string(), "REAL");
        assert!("TIMESTAMP".parse::<LogicalType>().is_err());
        Ok(())
    }

    #[test]
    fn test_mapping_field_serde() -> Result<()> {
        let field = MappingField::new("id", LogicalType::Bigint);
        let json = serde_json::to_string(&field)?;
        assert_eq!(json, r#"{"name":"id","type":"BIGINT"}"#);

        let parsed: MappingField = serde_yaml::from_str("name: flag\ntype: BOOLEAN\n")?;
        assert_eq!(parsed, MappingField::new("flag", LogicalType::Boolean));
        Ok(())
    }
}
