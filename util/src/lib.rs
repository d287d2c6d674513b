use std::{error::Error, fmt};

/// Byte order of the simulated machine. All multi-byte memory traffic and
/// emitted machine code goes through this alias.
pub type Endian = byteorder::BigEndian;

/// Returned when a string does not name a variant of an instruction-set enum.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseEnumError {
    pub value: String,
    pub enum_name: &'static str,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Failed to parse \"{}\" as {}.",
            &self.value, &self.enum_name
        )
    }
}

impl Error for ParseEnumError {}
