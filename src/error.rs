//! Errors reported to the host from a UDF's `_init()` call.

use std::ffi::c_int;

/// A failed capability check.
///
/// The `Display` output is the exact message written into the host's error
/// buffer, and [`code`](Self::code) is the status returned from `_init()`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UdfError {
  /// Too few arguments were declared.
  #[error("{function}() takes at least {min} arguments")]
  ArgumentCount {
    function: &'static str,
    min: usize,
    count: usize,
  },

  /// An argument has a type the function cannot compare.
  #[error("{function}() only supports int or string as arguments (num bad arg: {index}, type: {tag})")]
  UnsupportedType {
    function: &'static str,
    /// 0-based position of the first offending argument.
    index: usize,
    /// Its numeric host type tag.
    tag: i32,
  },

  /// The function panicked.
  #[error("{function}() failed internally")]
  Internal { function: &'static str },
}

impl UdfError {
  /// The non-zero status returned to the host.
  pub fn code(&self) -> c_int {
    match self {
      UdfError::ArgumentCount { .. } => 1,
      UdfError::UnsupportedType { .. } => 2,
      UdfError::Internal { .. } => 3,
    }
  }
}

/// Result type alias using `UdfError`.
pub type Result<T> = std::result::Result<T, UdfError>;
