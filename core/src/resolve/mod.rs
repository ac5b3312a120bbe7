use std::collections::HashSet;

use tracing::debug;

use crate::model::{
    avro::{FieldShape, SchemaDescriptor},
    fields::{LogicalType, MappingField},
};

pub mod mapping;

/// Resolves the columns of a mapping from the top level fields of an Avro
/// record schema.
///
/// Nullable unions (`["null", T]` or `[T, "null"]`) are unwrapped to `T`
/// since every column is nullable anyway. Shapes with no [LogicalType]
/// counterpart become [LogicalType::Object]. If a name occurs more than once
/// only its first occurrence is kept, and the declaration order of first
/// occurrences is preserved.
pub fn resolve_fields(schema: &SchemaDescriptor) -> Vec<MappingField> {
    let mut seen = HashSet::with_capacity(schema.fields.len());
    let mut fields = Vec::with_capacity(schema.fields.len());
    for avro_field in &schema.fields {
        let shape = unwrap_nullable(&avro_field.shape);
        let data_type = resolve_type(shape);

        if seen.insert(avro_field.name.as_str()) {
            if data_type == LogicalType::Object {
                debug!("field {} of shape {shape:?} resolved as OBJECT", avro_field.name);
            }
            fields.push(MappingField::new(avro_field.name.clone(), data_type));
        } else {
            debug!("dropping duplicate field {}", avro_field.name);
        }
    }
    fields
}

/// Translates a single shape. Unions are not unwrapped here and resolve as
/// [LogicalType::Object].
pub fn resolve_type(shape: &FieldShape) -> LogicalType {
    match shape {
        FieldShape::Boolean => LogicalType::Boolean,
        FieldShape::Int => LogicalType::Int,
        FieldShape::Long => LogicalType::Bigint,
        FieldShape::Float => LogicalType::Real,
        FieldShape::Double => LogicalType::Double,
        FieldShape::String => LogicalType::Varchar,
        _ => LogicalType::Object,
    }
}

/// Returns the non-null branch of a two branch union with exactly one null
/// branch, otherwise the shape itself.
fn unwrap_nullable(shape: &FieldShape) -> &FieldShape {
    match shape {
        FieldShape::Union(branches) => match branches.as_slice() {
            [FieldShape::Null, other] | [other, FieldShape::Null] if !other.is_null() => other,
            _ => shape,
        },
        _ => shape,
    }
}
