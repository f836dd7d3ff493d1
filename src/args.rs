//! A safe, borrowed view over the host's `SPH_UDF_ARGS`.

use std::ffi::{c_char, c_int, CStr};
use std::slice;

use crate::abi::{SphUdfArgType, SphUdfArgs};
use crate::types::{ArgType, ArgValue, IntValue};

/// The argument list of one UDF invocation.
///
/// Index 0 is the first argument as written in the query. The list borrows
/// everything from the host and never copies or mutates a value.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentList<'a> {
  types: &'a [SphUdfArgType],
  values: Option<&'a [*mut c_char]>,
  lengths: Option<&'a [c_int]>,
}

impl<'a> ArgumentList<'a> {
  /// An argument list with no arguments.
  pub fn empty() -> Self {
    Self {
      types: &[],
      values: None,
      lengths: None,
    }
  }

  /// A list that only knows the declared types, as seen before any row is
  /// evaluated. Every [`value`](Self::value) lookup returns `None`.
  pub fn from_types(types: &'a [SphUdfArgType]) -> Self {
    Self {
      types,
      values: None,
      lengths: None,
    }
  }

  /// Wraps the host structure.
  ///
  /// A negative `arg_count` or a null `arg_types` yields an empty list. Null
  /// `arg_values` or `str_lengths` arrays are tolerated.
  ///
  /// # Safety
  ///
  /// Every non-null array in `args` must hold at least `arg_count` entries and
  /// stay valid for `'a`. Each non-null value pointer must reference a buffer
  /// laid out as its type tag declares: 4 bytes for `UINT32`, 8 bytes for
  /// `INT64`, and for `STRING` either `str_lengths[i]` bytes or, when the
  /// host passes no length array, a NUL-terminated string.
  pub unsafe fn from_raw(args: &'a SphUdfArgs) -> Self {
    let count = usize::try_from(args.arg_count).unwrap_or(0);
    if count == 0 || args.arg_types.is_null() {
      return Self::empty();
    }

    Self {
      types: slice::from_raw_parts(args.arg_types, count),
      values: (!args.arg_values.is_null()).then(|| slice::from_raw_parts(args.arg_values, count)),
      lengths: (!args.str_lengths.is_null()).then(|| slice::from_raw_parts(args.str_lengths, count)),
    }
  }

  /// Number of arguments.
  pub fn len(&self) -> usize {
    self.types.len()
  }

  /// Whether the list has no arguments.
  pub fn is_empty(&self) -> bool {
    self.types.is_empty()
  }

  /// The declared type of the argument at `index`.
  pub fn arg_type(&self, index: usize) -> Option<ArgType> {
    self.types.get(index).copied().map(ArgType::from_raw)
  }

  /// The declared types of all arguments, in order.
  pub fn types(&self) -> impl ExactSizeIterator<Item = ArgType> + 'a {
    self.types.iter().copied().map(ArgType::from_raw)
  }

  /// Decodes the value at `index`.
  ///
  /// Returns `None` when the index is out of range or the host supplied no
  /// value for it.
  pub fn value(&self, index: usize) -> Option<ArgValue<'a>> {
    let ty = self.arg_type(index)?;
    let ptr = *self.values?.get(index)?;
    if ptr.is_null() {
      return None;
    }

    // SAFETY: `from_raw` requires each value buffer to match its type tag.
    let value = unsafe {
      match ty {
        ArgType::Uint32 => ArgValue::Integer(IntValue::from_u32(ptr.cast::<u32>().read_unaligned())),
        ArgType::Int64 => ArgValue::Integer(IntValue::from_i64(ptr.cast::<i64>().read_unaligned())),
        ArgType::String => ArgValue::Text(self.text(index, ptr)),
        other => ArgValue::Unsupported(other),
      }
    };
    Some(value)
  }

  /// Decoded values of the arguments after the first one.
  pub fn candidates(&self) -> impl Iterator<Item = Option<ArgValue<'a>>> + '_ {
    (1..self.len()).map(move |index| self.value(index))
  }

  unsafe fn text(&self, index: usize, ptr: *const c_char) -> &'a [u8] {
    match self.lengths.and_then(|lengths| lengths.get(index)) {
      Some(&len) => slice::from_raw_parts(ptr.cast::<u8>(), usize::try_from(len).unwrap_or(0)),
      None => CStr::from_ptr(ptr).to_bytes(),
    }
  }
}

impl Default for ArgumentList<'_> {
  fn default() -> Self {
    Self::empty()
  }
}
