use std::{error::Error, fmt, result};

pub type Result<T, E = MappingError> = result::Result<T, E>;

#[derive(Debug)]
pub enum MappingError {
    Internal(String),
    SerDe(String),
    InvalidSchema(String),
    FileNotFound(String),
    DuplicateField(String),
}

impl Error for MappingError {}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MappingError::Internal(s) => write!(f, "Unexpected internal error: {}", s),
            MappingError::SerDe(s) => write!(f, "SerDe related error: {}", s),
            MappingError::InvalidSchema(s) => write!(f, "Invalid schema: {}", s),
            MappingError::FileNotFound(s) => write!(f, "No file found: {}", s),
            MappingError::DuplicateField(s) => {
                write!(f, "Column '{}' specified more than once", s)
            }
        }
    }
}

impl From<serde_json::Error> for MappingError {
    fn from(e: serde_json::Error) -> Self {
        MappingError::SerDe(e.to_string())
    }
}

impl From<serde_yaml::Error> for MappingError {
    fn from(e: serde_yaml::Error) -> Self {
        MappingError::SerDe(e.to_string())
    }
}

impl From<std::io::Error> for MappingError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => MappingError::FileNotFound(e.to_string()),
            _ => MappingError::Internal(e.to_string()),
        }
    }
}

impl From<std::string::FromUtf8Error> for MappingError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        MappingError::InvalidSchema(e.to_string())
    }
}

impl From<apache_avro::Error> for MappingError {
    fn from(e: apache_avro::Error) -> Self {
        MappingError::InvalidSchema(e.to_string())
    }
}

impl From<regex::Error> for MappingError {
    fn from(e: regex::Error) -> Self {
        MappingError::Internal(e.to_string())
    }
}

impl From<walkdir::Error> for MappingError {
    fn from(e: walkdir::Error) -> Self {
        match e.io_error().map(|io| io.kind()) {
            Some(std::io::ErrorKind::NotFound) => MappingError::FileNotFound(e.to_string()),
            _ => MappingError::Internal(e.to_string()),
        }
    }
}
