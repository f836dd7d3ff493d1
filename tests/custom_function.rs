mod common;

use bk_field::ffi::{run_call, run_deinit, run_init, run_reinit};
use bk_field::prelude::*;
use common::{int, text, uint, ErrorBuffer, OwnedArgs};
use std::ffi::c_int;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Sums its integer arguments, ignoring strings.
#[derive(Default)]
struct IntSum {
  reloads: AtomicUsize,
  releases: AtomicUsize,
}

impl UserFunction for IntSum {
  const NAME: &'static str = "int_sum";

  fn check(&self, args: &ArgumentList<'_>) -> bk_field::Result<()> {
    if args.is_empty() {
      return Err(UdfError::ArgumentCount {
        function: Self::NAME,
        min: 1,
        count: 0,
      });
    }
    Ok(())
  }

  fn evaluate(&self, args: &ArgumentList<'_>) -> c_int {
    (0..args.len())
      .filter_map(|index| match args.value(index) {
        Some(ArgValue::Integer(v)) => Some(v.value),
        _ => None,
      })
      .sum::<i64>() as c_int
  }

  fn reinit(&self) {
    self.reloads.fetch_add(1, Ordering::SeqCst);
  }

  fn release(&self) {
    self.releases.fetch_add(1, Ordering::SeqCst);
  }
}

/// Panics on every call.
struct Broken;

impl UserFunction for Broken {
  const NAME: &'static str = "broken";

  fn check(&self, _args: &ArgumentList<'_>) -> bk_field::Result<()> {
    panic!("check failed");
  }

  fn evaluate(&self, _args: &ArgumentList<'_>) -> c_int {
    panic!("evaluate failed");
  }
}

#[test]
fn test_custom_function_lifecycle() {
  common::init_logging();

  let function = IntSum::default();
  let mut args = OwnedArgs::new(vec![int(40), text("skip"), uint(2)]);
  let mut error = ErrorBuffer::new();

  assert_eq!(unsafe { run_init(&function, args.raw(), error.as_mut_ptr()) }, 0);
  assert_eq!(unsafe { run_call(&function, args.raw()) }, 42);

  run_reinit(&function);
  run_deinit(&function);
  run_deinit(&function);
  assert_eq!(function.reloads.load(Ordering::SeqCst), 1);
  assert_eq!(function.releases.load(Ordering::SeqCst), 2);
}

#[test]
fn test_custom_function_error_uses_its_name() {
  let function = IntSum::default();
  let mut args = OwnedArgs::new(vec![]);
  let mut error = ErrorBuffer::new();

  assert_eq!(unsafe { run_init(&function, args.raw(), error.as_mut_ptr()) }, 1);
  assert_eq!(error.message(), "int_sum() takes at least 1 arguments");
}

#[test]
fn test_panics_do_not_escape() {
  let mut args = OwnedArgs::new(vec![int(1), int(1)]);
  let mut error = ErrorBuffer::new();

  assert_eq!(unsafe { run_init(&Broken, args.raw(), error.as_mut_ptr()) }, 3);
  assert_eq!(error.message(), "broken() failed internally");
  assert_eq!(unsafe { run_call(&Broken, args.raw()) }, 0);
}
