//! bk_field - a user-defined function plugin for the Sphinx search daemon.
//!
//! `bk_field(key, c1, c2, ..., cN)` returns the 1-based position of the first
//! candidate equal to `key`, or 0 when there is none. Arguments may be strings
//! or integers (`UINT32`, `INT64`).
//!
//! The crate builds as a `cdylib` exporting the entry points the daemon
//! expects (see [`ffi`]), and as an `rlib` exposing the safe core. Install the
//! shared library as `bk_field.so` in the daemon's `plugin_dir` and register
//! it with:
//!
//! ```sql
//! CREATE FUNCTION bk_field RETURNS INT SONAME 'bk_field.so';
//! ```

pub mod abi;
pub mod types;
pub mod args;
pub mod error;
pub mod options;
pub mod function;
pub mod matcher;
pub mod ffi;

pub use error::{Result, UdfError};

pub mod prelude {
  //! Convenient re-exports for common types and traits.

  pub use crate::args::*;
  pub use crate::error::UdfError;
  pub use crate::function::*;
  pub use crate::matcher::*;
  pub use crate::options::*;
  pub use crate::types::*;
}
