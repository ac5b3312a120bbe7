use serde_json::{Map, Value};

use crate::{
    error::{MappingError, Result},
    model::avro::{FieldDescriptor, FieldShape, SchemaDescriptor},
};

/// Parses Avro JSON schema text into a [SchemaDescriptor]. The top level
/// schema must be a record.
pub fn parse_schema(text: &str) -> Result<SchemaDescriptor> {
    let avro: Value = serde_json::from_str(text)?;

    let record = avro
        .as_object()
        .filter(|obj| obj.get("type").and_then(Value::as_str) == Some("record"))
        .ok_or_else(|| {
            MappingError::InvalidSchema("top level Avro schema is not a record".to_string())
        })?;

    let fields = record
        .get("fields")
        .and_then(Value::as_array)
        .ok_or_else(|| MappingError::InvalidSchema("record has no 'fields' array".to_string()))?
        .iter()
        .map(parse_field)
        .collect::<Result<Vec<_>>>()?;

    Ok(SchemaDescriptor {
        name: full_name(record),
        fields,
    })
}

fn parse_field(field: &Value) -> Result<FieldDescriptor> {
    let name = field
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| MappingError::InvalidSchema("field missing 'name'".to_string()))?;

    let avro_type = field
        .get("type")
        .ok_or_else(|| MappingError::InvalidSchema(format!("field '{name}' missing 'type'")))?;

    Ok(FieldDescriptor::new(name, parse_shape(avro_type)?))
}

fn parse_shape(avro_type: &Value) -> Result<FieldShape> {
    match avro_type {
        Value::String(s) => Ok(named_shape(s)),
        Value::Array(branches) => Ok(FieldShape::Union(
            branches.iter().map(parse_shape).collect::<Result<Vec<_>>>()?,
        )),
        Value::Object(obj) => parse_complex(obj),
        _ => Err(MappingError::InvalidSchema(format!(
            "unexpected Avro type: {avro_type}"
        ))),
    }
}

fn named_shape(type_name: &str) -> FieldShape {
    match type_name {
        "null" => FieldShape::Null,
        "boolean" => FieldShape::Boolean,
        "int" => FieldShape::Int,
        "long" => FieldShape::Long,
        "float" => FieldShape::Float,
        "double" => FieldShape::Double,
        "bytes" => FieldShape::Bytes,
        "string" => FieldShape::String,
        other => FieldShape::Reference(other.to_string()),
    }
}

/// Object form, e.g. `{"type": "array", "items": "int"}`. Any `logicalType`
/// annotation is ignored in favour of the underlying type.
fn parse_complex(obj: &Map<String, Value>) -> Result<FieldShape> {
    let type_name = match obj.get("type") {
        Some(Value::String(s)) => s.as_str(),
        Some(other) => return parse_shape(other),
        None => {
            return Err(MappingError::InvalidSchema(
                "Avro type object missing 'type'".to_string(),
            ))
        }
    };

    match type_name {
        "record" | "error" => Ok(FieldShape::Record {
            name: required_name(obj, type_name)?,
        }),
        "enum" => Ok(FieldShape::Enum {
            name: required_name(obj, type_name)?,
        }),
        "fixed" => {
            let size = obj
                .get("size")
                .and_then(Value::as_u64)
                .and_then(|s| usize::try_from(s).ok())
                .ok_or_else(|| {
                    MappingError::InvalidSchema("Avro fixed missing 'size'".to_string())
                })?;
            Ok(FieldShape::Fixed {
                name: required_name(obj, type_name)?,
                size,
            })
        }
        "array" => {
            let items = obj.get("items").ok_or_else(|| {
                MappingError::InvalidSchema("Avro array missing 'items'".to_string())
            })?;
            Ok(FieldShape::Array(Box::new(parse_shape(items)?)))
        }
        "map" => {
            let values = obj.get("values").ok_or_else(|| {
                MappingError::InvalidSchema("Avro map missing 'values'".to_string())
            })?;
            Ok(FieldShape::Map(Box::new(parse_shape(values)?)))
        }
        other => Ok(named_shape(other)),
    }
}

fn required_name(obj: &Map<String, Value>, type_name: &str) -> Result<String> {
    full_name(obj)
        .ok_or_else(|| MappingError::InvalidSchema(format!("Avro {type_name} missing 'name'")))
}

/// Qualifies `name` with `namespace` unless the name is already dotted.
fn full_name(obj: &Map<String, Value>) -> Option<String> {
    let name = obj.get("name").and_then(Value::as_str)?;
    match obj.get("namespace").and_then(Value::as_str) {
        Some(ns) if !ns.is_empty() && !name.contains('.') => Some(format!("{ns}.{name}")),
        _ => Some(name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{MappingError, Result};
    use crate::model::avro::{FieldDescriptor, FieldShape};

    use super::parse_schema;

    #[test]
    fn test_parse_record() -> Result<()> {
        let schema = parse_schema(
            r#"{
                "type": "record",
                "name": "User",
                "namespace": "com.acme",
                "fields": [
                    {"name": "id", "type": "long"},
                    {"name": "email", "type": ["null", "string"], "default": null},
                    {"name": "born", "type": {"type": "int", "logicalType": "date"}},
                    {"name": "tags", "type": {"type": "array", "items": "string"}},
                    {"name": "attrs", "type": {"type": "map", "values": "long"}},
                    {"name": "hash", "type": {"type": "fixed", "name": "md5", "size": 16}},
                    {"name": "suit", "type": {"type": "enum", "name": "Suit", "symbols": ["SPADES"]}},
                    {"name": "home", "type": {
                        "type": "record",
                        "name": "Address",
                        "fields": [{"name": "city", "type": "string"}]
                    }},
                    {"name": "work", "type": "com.acme.Address"}
                ]
            }"#,
        )?;

        assert_eq!(schema.name.as_deref(), Some("com.acme.User"));
        assert_eq!(
            schema.fields,
            vec![
                FieldDescriptor::new("id", FieldShape::Long),
                FieldDescriptor::new(
                    "email",
                    FieldShape::Union(vec![FieldShape::Null, FieldShape::String])
                ),
                FieldDescriptor::new("born", FieldShape::Int),
                FieldDescriptor::new("tags", FieldShape::Array(Box::new(FieldShape::String))),
                FieldDescriptor::new("attrs", FieldShape::Map(Box::new(FieldShape::Long))),
                FieldDescriptor::new(
                    "hash",
                    FieldShape::Fixed {
                        name: "md5".to_string(),
                        size: 16
                    }
                ),
                FieldDescriptor::new(
                    "suit",
                    FieldShape::Enum {
                        name: "Suit".to_string()
                    }
                ),
                FieldDescriptor::new(
                    "home",
                    FieldShape::Record {
                        name: "Address".to_string()
                    }
                ),
                FieldDescriptor::new("work", FieldShape::Reference("com.acme.Address".to_string())),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_nested_type_object() -> Result<()> {
        let schema = parse_schema(
            r#"{
                "type": "record",
                "name": "R",
                "fields": [
                    {"name": "a", "type": {"type": ["null", "int"]}},
                    {"name": "b", "type": {"type": {"type": "array", "items": "string"}}}
                ]
            }"#,
        )?;
        assert_eq!(
            schema.fields,
            vec![
                FieldDescriptor::new(
                    "a",
                    FieldShape::Union(vec![FieldShape::Null, FieldShape::Int])
                ),
                FieldDescriptor::new("b", FieldShape::Array(Box::new(FieldShape::String))),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_non_record_rejected() {
        for text in [r#""string""#, r#"["null", "int"]"#, r#"{"type": "enum", "name": "E", "symbols": []}"#] {
            match parse_schema(text) {
                Err(MappingError::InvalidSchema(_)) => (),
                other => panic!("expected InvalidSchema for {text}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_malformed_fields_rejected() {
        assert!(parse_schema(r#"{"type": "record", "name": "R"}"#).is_err());
        assert!(parse_schema(r#"{"type": "record", "name": "R", "fields": [{"type": "int"}]}"#).is_err());
        assert!(parse_schema(r#"{"type": "record", "name": "R", "fields": [{"name": "a"}]}"#).is_err());
        assert!(parse_schema(r#"{"type": "record", "name": "R", "fields": [{"name": "a", "type": 5}]}"#).is_err());
        assert!(parse_schema("not json").is_err());
    }
}
