//! The `UserFunction` trait, which defines the lifecycle of a UDF.

use std::ffi::c_int;

use crate::args::ArgumentList;
use crate::error::Result;

/// A user-defined function as the search daemon drives it.
///
/// The host calls [`check`](Self::check) once per query with the declared
/// argument types, then [`evaluate`](Self::evaluate) once for every matched
/// row, and finally [`release`](Self::release) when the query ends.
/// [`reinit`](Self::reinit) is called on a configuration reload in workers
/// that survive it.
///
/// Implementations are shared by every host worker, hence `Send + Sync`.
pub trait UserFunction: Send + Sync {
  /// The function name as registered with `CREATE FUNCTION`.
  const NAME: &'static str;

  /// Validates the declared argument list.
  ///
  /// Only the argument types are meaningful here. Values are not populated
  /// until the first row is evaluated.
  fn check(&self, args: &ArgumentList<'_>) -> Result<()>;

  /// Computes the result for one row.
  ///
  /// The host guarantees the argument types are those accepted by `check`.
  fn evaluate(&self, args: &ArgumentList<'_>) -> c_int;

  /// Refreshes any state after a configuration reload.
  fn reinit(&self) {}

  /// Frees per-query state at the end of a query.
  fn release(&self) {}
}
