use std::{error::Error, fmt};

/// Byte order of the LC-3 object image format.
pub type Endian = byteorder::BigEndian;

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

pub trait EnumFromStr: Sized {
    fn from_str(s: &str) -> Result<Self, ParseEnumError>;
}

/// Implements [`EnumFromStr`] and `std::str::FromStr` for a fieldless enum
/// by matching variant names verbatim.
#[macro_export]
macro_rules! impl_enum_from_str {
    ($e:ty { $( $variant:ident ),+ $(,)? }) => {
        impl $crate::EnumFromStr for $e {
            fn from_str(s: &str) -> Result<Self, $crate::ParseEnumError> {
                match s {
                    $( stringify!($variant) => Ok(<$e>::$variant), )+
                    _ => Err($crate::ParseEnumError {
                        value: s.to_string(),
                        enum_name: stringify!($e),
                    }),
                }
            }
        }

        impl ::core::str::FromStr for $e {
            type Err = $crate::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::EnumFromStr::from_str(s)
            }
        }
    };
}
