pub mod avro;
pub mod declaration;
pub mod fields;
pub mod options;
