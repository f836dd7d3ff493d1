//! Comparison options for matching arguments.
//!
//! The defaults compare every value at the width and length the host declares
//! for it. The `narrow-int` and `nul-strings` features switch the defaults to
//! the legacy rules, for deployments whose stored results depend on them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::IntValue;

/// How integer arguments are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IntegerWidth {
  /// Compare the values at their declared width, widened to `i64`.
  ///
  /// A `UINT32` key equals an `INT64` candidate holding the same number.
  Full,
  /// Compare only the first four bytes of each raw buffer as a native `i32`.
  ///
  /// On little-endian hosts two `INT64` values that differ only in their upper
  /// 32 bits compare equal.
  Narrow,
}

impl IntegerWidth {
  /// Whether two integers are equal under this rule.
  pub fn equal(self, a: IntValue, b: IntValue) -> bool {
    match self {
      IntegerWidth::Full => a.value == b.value,
      IntegerWidth::Narrow => a.leading_word == b.leading_word,
    }
  }
}

impl Default for IntegerWidth {
  fn default() -> Self {
    if cfg!(feature = "narrow-int") {
      IntegerWidth::Narrow
    } else {
      IntegerWidth::Full
    }
  }
}

/// How string arguments are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StringComparison {
  /// Compare all bytes the host declares, embedded NULs included.
  Length,
  /// Compare up to the first NUL byte of each value, like `strcmp`.
  NulTerminated,
}

impl StringComparison {
  /// Whether two strings are equal under this rule.
  pub fn equal(self, a: &[u8], b: &[u8]) -> bool {
    self.effective(a) == self.effective(b)
  }

  /// The bytes that take part in the comparison.
  pub fn effective(self, bytes: &[u8]) -> &[u8] {
    match self {
      StringComparison::Length => bytes,
      StringComparison::NulTerminated => match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
      },
    }
  }
}

impl Default for StringComparison {
  fn default() -> Self {
    if cfg!(feature = "nul-strings") {
      StringComparison::NulTerminated
    } else {
      StringComparison::Length
    }
  }
}

/// Options that control how arguments are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchOptions {
  /// Integer comparison rule.
  #[cfg_attr(feature = "serde", serde(default))]
  pub integers: IntegerWidth,
  /// String comparison rule.
  #[cfg_attr(feature = "serde", serde(default))]
  pub strings: StringComparison,
}

impl MatchOptions {
  /// Legacy rules: 32-bit integer comparison and NUL-terminated strings.
  pub fn legacy() -> Self {
    Self {
      integers: IntegerWidth::Narrow,
      strings: StringComparison::NulTerminated,
    }
  }

  /// Sets the integer comparison rule.
  pub fn integers(mut self, width: IntegerWidth) -> Self {
    self.integers = width;
    self
  }

  /// Sets the string comparison rule.
  pub fn strings(mut self, comparison: StringComparison) -> Self {
    self.strings = comparison;
    self
  }
}
