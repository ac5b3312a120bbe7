//! Reads the writer schema out of the header of an Avro object container
//! file. Only the header is consumed, the data blocks are never read.

use std::io::Read;

use crate::error::Result;

pub const MAGIC: &[u8; 4] = b"Obj\x01";

/// Returns the writer schema of a container file as Avro JSON schema text.
/// The reader must be positioned at the magic bytes.
pub fn read_header_schema<R: Read>(reader: R) -> Result<String> {
    let reader = apache_avro::Reader::new(reader)?;
    Ok(serde_json::to_string(reader.writer_schema())?)
}
