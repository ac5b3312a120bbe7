/// Parsed, in-memory form of a record schema: the ordered list of top level
/// fields of an Avro record.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDescriptor {
    /// Full name of the record, if it declared one.
    pub name: Option<String>,
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub shape: FieldShape,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, shape: FieldShape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}

/// The declared shape of a field. Logical type annotations such as `date` or
/// `decimal` are not kept, only the underlying Avro type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldShape {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
    Record { name: String },
    Enum { name: String },
    Fixed { name: String, size: usize },
    Array(Box<FieldShape>),
    Map(Box<FieldShape>),
    Union(Vec<FieldShape>),
    /// Use of a named type defined elsewhere in the schema.
    Reference(String),
}

impl FieldShape {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldShape::Null)
    }
}
