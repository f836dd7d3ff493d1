//! The exported C entry points the search daemon loads.
//!
//! The daemon resolves `bk_field_ver`, `bk_field_init`, `bk_field_reinit`,
//! `bk_field_deinit` and `bk_field` by name from the shared library. The
//! generic `run_*` helpers do the work for any [`UserFunction`]; the exports
//! only pick the function.
//!
//! No panic unwinds into the host. A panicking check reports
//! [`UdfError::Internal`], a panicking row evaluation returns 0.

use std::ffi::{c_char, c_int};
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

use crate::abi::{SphUdfArgs, SphUdfInit, SPH_UDF_ERROR_LEN, SPH_UDF_VERSION};
use crate::args::ArgumentList;
use crate::error::UdfError;
use crate::function::UserFunction;
use crate::matcher::FieldMatcher;

/// Runs a function's capability check and reports a failure to the host.
///
/// Returns 0 on success. On failure the message is written into
/// `error_message` and the error code is returned.
///
/// # Safety
///
/// `args` must be null or satisfy [`ArgumentList::from_raw`]. `error_message`
/// must be null or point to at least [`SPH_UDF_ERROR_LEN`] writable bytes.
pub unsafe fn run_init<F: UserFunction>(
  function: &F,
  args: *const SphUdfArgs,
  error_message: *mut c_char,
) -> c_int {
  let args = args.as_ref();
  let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
    let list = match args {
      Some(args) => unsafe { ArgumentList::from_raw(args) },
      None => ArgumentList::empty(),
    };
    function.check(&list)
  }));

  let err = match outcome {
    Ok(Ok(())) => return 0,
    Ok(Err(err)) => err,
    Err(_) => UdfError::Internal { function: F::NAME },
  };

  log::debug!("{}() rejected its arguments: {}", F::NAME, err);
  write_error_message(error_message, &err.to_string());
  err.code()
}

/// Evaluates a function for one row.
///
/// # Safety
///
/// `args` must be null or satisfy [`ArgumentList::from_raw`].
pub unsafe fn run_call<F: UserFunction>(function: &F, args: *const SphUdfArgs) -> c_int {
  let Some(args) = args.as_ref() else {
    return 0;
  };

  panic::catch_unwind(AssertUnwindSafe(|| {
    let list = unsafe { ArgumentList::from_raw(args) };
    function.evaluate(&list)
  }))
  .unwrap_or(0)
}

/// Forwards a configuration reload to a function.
pub fn run_reinit<F: UserFunction>(function: &F) {
  log::trace!("{}() reinit", F::NAME);
  let _ = panic::catch_unwind(AssertUnwindSafe(|| function.reinit()));
}

/// Forwards the end of a query to a function.
pub fn run_deinit<F: UserFunction>(function: &F) {
  log::trace!("{}() deinit", F::NAME);
  let _ = panic::catch_unwind(AssertUnwindSafe(|| function.release()));
}

/// Copies `message` into a host error buffer, truncated to fit and always
/// NUL-terminated.
///
/// # Safety
///
/// `buf` must be null or point to at least [`SPH_UDF_ERROR_LEN`] writable bytes.
pub unsafe fn write_error_message(buf: *mut c_char, message: &str) {
  if buf.is_null() {
    return;
  }
  let bytes = message.as_bytes();
  let len = bytes.len().min(SPH_UDF_ERROR_LEN - 1);
  ptr::copy_nonoverlapping(bytes.as_ptr().cast::<c_char>(), buf, len);
  *buf.add(len) = 0;
}

/// UDF version control. Called once when the library is loaded.
#[no_mangle]
pub extern "C" fn bk_field_ver() -> c_int {
  SPH_UDF_VERSION
}

/// UDF initialization. Called once per query before any row.
///
/// # Safety
///
/// Called by the host with pointers that follow the `sphinxudf.h` contract.
#[no_mangle]
pub unsafe extern "C" fn bk_field_init(
  _init: *mut SphUdfInit,
  args: *mut SphUdfArgs,
  error_message: *mut c_char,
) -> c_int {
  run_init(&FieldMatcher::default(), args, error_message)
}

/// UDF re-initialization. Called on SIGHUP in prefork workers.
#[no_mangle]
pub extern "C" fn bk_field_reinit() {
  run_reinit(&FieldMatcher::default());
}

/// UDF deinitialization. Called when a query ends.
///
/// # Safety
///
/// Called by the host with the init structure of the finished query.
#[no_mangle]
pub unsafe extern "C" fn bk_field_deinit(_init: *mut SphUdfInit) {
  run_deinit(&FieldMatcher::default());
}

/// UDF implementation. Called for every row, unless optimized away.
///
/// # Safety
///
/// Called by the host with pointers that follow the `sphinxudf.h` contract,
/// after `bk_field_init` accepted the same argument types.
#[no_mangle]
pub unsafe extern "C" fn bk_field(
  _init: *mut SphUdfInit,
  args: *mut SphUdfArgs,
  _error_flag: *mut c_char,
) -> c_int {
  run_call(&FieldMatcher::default(), args)
}
