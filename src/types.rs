//! Typed model of UDF arguments.

use crate::abi::SphUdfArgType;

/// The kind of value an argument holds, decoded from its host type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgType {
  /// Unsigned 32-bit integer.
  Uint32,
  /// Sorted set of unsigned 32-bit integers.
  Uint32Set,
  /// Signed 64-bit integer.
  Int64,
  /// Single-precision float.
  Float,
  /// Byte string with a separately stored length.
  String,
  /// Sorted set of signed 64-bit integers.
  Int64Set,
  /// Packed ranking factors.
  Factors,
  /// JSON document or field.
  Json,
  /// Vector of floats.
  FloatVec,
  /// A tag this crate does not know about.
  Unknown(i32),
}

impl ArgType {
  /// Decodes a raw host tag.
  pub fn from_raw(raw: SphUdfArgType) -> Self {
    match raw {
      SphUdfArgType::UINT32 => Self::Uint32,
      SphUdfArgType::UINT32SET => Self::Uint32Set,
      SphUdfArgType::INT64 => Self::Int64,
      SphUdfArgType::FLOAT => Self::Float,
      SphUdfArgType::STRING => Self::String,
      SphUdfArgType::INT64SET => Self::Int64Set,
      SphUdfArgType::FACTORS => Self::Factors,
      SphUdfArgType::JSON => Self::Json,
      SphUdfArgType::FLOAT_VEC => Self::FloatVec,
      SphUdfArgType(other) => Self::Unknown(other),
    }
  }

  /// Returns the numeric host tag.
  pub fn tag(self) -> i32 {
    self.to_raw().0
  }

  /// Encodes back into the host representation.
  pub fn to_raw(self) -> SphUdfArgType {
    match self {
      Self::Uint32 => SphUdfArgType::UINT32,
      Self::Uint32Set => SphUdfArgType::UINT32SET,
      Self::Int64 => SphUdfArgType::INT64,
      Self::Float => SphUdfArgType::FLOAT,
      Self::String => SphUdfArgType::STRING,
      Self::Int64Set => SphUdfArgType::INT64SET,
      Self::Factors => SphUdfArgType::FACTORS,
      Self::Json => SphUdfArgType::JSON,
      Self::FloatVec => SphUdfArgType::FLOAT_VEC,
      Self::Unknown(tag) => SphUdfArgType(tag),
    }
  }

  /// Whether values of this type are scalar integers.
  pub fn is_integer(self) -> bool {
    matches!(self, Self::Uint32 | Self::Int64)
  }
}

impl From<SphUdfArgType> for ArgType {
  fn from(raw: SphUdfArgType) -> Self {
    Self::from_raw(raw)
  }
}

/// An integer argument value.
///
/// Besides the value widened to `i64`, this keeps the first four bytes of the
/// host buffer read as a native `i32`, which is what a 32-bit comparison of the
/// raw buffers sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntValue {
  /// The value at the width its tag declares.
  pub value: i64,
  /// The leading 32-bit word of the raw buffer.
  pub leading_word: i32,
}

impl IntValue {
  /// Builds the value of an unsigned 32-bit argument.
  pub fn from_u32(value: u32) -> Self {
    Self {
      value: i64::from(value),
      leading_word: i32::from_ne_bytes(value.to_ne_bytes()),
    }
  }

  /// Builds the value of a signed 64-bit argument.
  pub fn from_i64(value: i64) -> Self {
    let bytes = value.to_ne_bytes();
    Self {
      value,
      leading_word: i32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
    }
  }
}

/// A decoded argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgValue<'a> {
  /// A `UINT32` or `INT64` argument.
  Integer(IntValue),
  /// A `STRING` argument, borrowed from the host buffer.
  Text(&'a [u8]),
  /// Any other argument type. The value is not decoded.
  Unsupported(ArgType),
}

impl<'a> ArgValue<'a> {
  /// Convenience constructor for an unsigned 32-bit integer.
  pub fn uint32(value: u32) -> Self {
    Self::Integer(IntValue::from_u32(value))
  }

  /// Convenience constructor for a signed 64-bit integer.
  pub fn int64(value: i64) -> Self {
    Self::Integer(IntValue::from_i64(value))
  }

  /// Convenience constructor for a string.
  pub fn text(bytes: &'a (impl AsRef<[u8]> + ?Sized)) -> Self {
    Self::Text(bytes.as_ref())
  }
}
