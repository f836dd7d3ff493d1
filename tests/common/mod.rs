#![allow(dead_code)]

use std::ffi::{c_char, c_int};
use std::ptr;

use bk_field::abi::{SphUdfArgType, SphUdfArgs, SPH_UDF_ERROR_LEN};
use bk_field::args::ArgumentList;

/// An argument as the host would pass it.
#[derive(Debug, Clone)]
pub enum Arg {
  Uint32(u32),
  Int64(i64),
  Str(Vec<u8>),
  Float(f32),
  /// A declared type with the raw bytes of `u32` value behind it.
  Tagged(SphUdfArgType, u32),
}

pub fn int(value: i64) -> Arg {
  Arg::Int64(value)
}

pub fn uint(value: u32) -> Arg {
  Arg::Uint32(value)
}

pub fn text(value: impl AsRef<[u8]>) -> Arg {
  Arg::Str(value.as_ref().to_vec())
}

/// Host-side argument storage.
///
/// Owns every buffer the raw `SphUdfArgs` points into. The buffers live on the
/// heap, so moving an `OwnedArgs` keeps the pointers valid.
pub struct OwnedArgs {
  types: Vec<SphUdfArgType>,
  buffers: Vec<Vec<u8>>,
  values: Vec<*mut c_char>,
  lengths: Vec<c_int>,
  raw: SphUdfArgs,
}

impl OwnedArgs {
  pub fn new(args: Vec<Arg>) -> Self {
    let mut types = Vec::with_capacity(args.len());
    let mut buffers = Vec::with_capacity(args.len());
    let mut lengths = Vec::with_capacity(args.len());

    for arg in args {
      let (ty, bytes, len) = match arg {
        Arg::Uint32(v) => (SphUdfArgType::UINT32, v.to_ne_bytes().to_vec(), 0),
        Arg::Int64(v) => (SphUdfArgType::INT64, v.to_ne_bytes().to_vec(), 0),
        Arg::Float(v) => (SphUdfArgType::FLOAT, v.to_ne_bytes().to_vec(), 0),
        Arg::Tagged(ty, v) => (ty, v.to_ne_bytes().to_vec(), 0),
        Arg::Str(mut bytes) => {
          let len = bytes.len() as c_int;
          // Hosts NUL-terminate in practice; the length array is authoritative.
          bytes.push(0);
          (SphUdfArgType::STRING, bytes, len)
        }
      };
      types.push(ty);
      buffers.push(bytes);
      lengths.push(len);
    }

    let mut values: Vec<*mut c_char> = buffers
      .iter_mut()
      .map(|buf| buf.as_mut_ptr().cast::<c_char>())
      .collect();

    let raw = SphUdfArgs {
      arg_count: types.len() as c_int,
      arg_types: types.as_mut_ptr(),
      arg_values: values.as_mut_ptr(),
      arg_names: ptr::null_mut(),
      str_lengths: lengths.as_mut_ptr(),
      fn_malloc: None,
    };

    Self {
      types,
      buffers,
      values,
      lengths,
      raw,
    }
  }

  /// Drops the string length array, as an older host would.
  pub fn without_lengths(mut self) -> Self {
    self.raw.str_lengths = ptr::null_mut();
    self
  }

  /// Declares the types only, as the host does before the first row.
  pub fn without_values(mut self) -> Self {
    self.raw.arg_values = ptr::null_mut();
    self
  }

  pub fn raw(&mut self) -> *mut SphUdfArgs {
    &mut self.raw
  }

  pub fn view(&self) -> ArgumentList<'_> {
    unsafe { ArgumentList::from_raw(&self.raw) }
  }
}

/// A host error buffer.
pub struct ErrorBuffer([c_char; SPH_UDF_ERROR_LEN]);

impl ErrorBuffer {
  pub fn new() -> Self {
    Self([0; SPH_UDF_ERROR_LEN])
  }

  pub fn as_mut_ptr(&mut self) -> *mut c_char {
    self.0.as_mut_ptr()
  }

  pub fn message(&self) -> String {
    let bytes: Vec<u8> = self.0.iter().take_while(|&&c| c != 0).map(|&c| c as u8).collect();
    String::from_utf8_lossy(&bytes).into_owned()
  }
}

pub fn init_logging() {
  let _ = env_logger::builder().is_test(true).try_init();
}
