//! `#[repr(C)]` mirrors of the UDF structures in the host's `sphinxudf.h`.
//!
//! The host owns these layouts. Field order, sizes and alignment must stay
//! identical to the C header, so nothing in this module should be reordered
//! or "tidied up".

use std::ffi::{c_char, c_int, c_void};

/// Plugin ABI revision this crate is built against.
///
/// The host refuses to load a plugin whose `_ver()` export returns a revision
/// it does not understand.
pub const SPH_UDF_VERSION: c_int = 23;

/// Size of the error buffer the host passes to `_init()`, including the
/// terminating NUL.
pub const SPH_UDF_ERROR_LEN: usize = 256;

/// A UDF argument type tag (`enum sphinx_udf_argtype`).
///
/// Kept as a transparent integer rather than a Rust enum: the host may hand
/// over a value outside the known set, and such a value must be readable
/// without undefined behaviour.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SphUdfArgType(pub c_int);

impl SphUdfArgType {
  /// Unsigned 32-bit integer.
  pub const UINT32: Self = Self(1);
  /// Sorted set of unsigned 32-bit integers.
  pub const UINT32SET: Self = Self(2);
  /// Signed 64-bit integer.
  pub const INT64: Self = Self(3);
  /// Single-precision IEEE 754 float.
  pub const FLOAT: Self = Self(4);
  /// Non-ASCIIZ string with a separately stored length.
  pub const STRING: Self = Self(5);
  /// Sorted set of signed 64-bit integers.
  pub const INT64SET: Self = Self(6);
  /// Packed ranking factors.
  pub const FACTORS: Self = Self(7);
  /// Whole JSON or a particular field, as a string.
  pub const JSON: Self = Self(8);
  /// Vector of floats with a separately stored length.
  pub const FLOAT_VEC: Self = Self(9);
}

/// The host's `malloc()` replacement. Values returned to the host by reference
/// must be allocated with it.
pub type SphinxMallocFn = unsafe extern "C" fn(c_int) -> *mut c_void;

/// UDF call arguments (`SPH_UDF_ARGS`).
#[repr(C)]
#[derive(Debug)]
pub struct SphUdfArgs {
  /// Number of arguments.
  pub arg_count: c_int,
  /// Argument types, `arg_count` entries.
  pub arg_types: *mut SphUdfArgType,
  /// Argument values. Strings are not NUL-terminated, see `str_lengths`.
  pub arg_values: *mut *mut c_char,
  /// Argument names (`expr AS argname`), or null entries.
  pub arg_names: *mut *mut c_char,
  /// String argument lengths.
  pub str_lengths: *mut c_int,
  /// Allocator for returned values.
  pub fn_malloc: Option<SphinxMallocFn>,
}

/// UDF initialization data (`SPH_UDF_INIT`).
#[repr(C)]
#[derive(Debug)]
pub struct SphUdfInit {
  /// Per-query function data, passed back to every call and to `_deinit()`.
  pub func_data: *mut c_void,
  /// Whether the function returns a constant.
  pub is_const: c_char,
}
