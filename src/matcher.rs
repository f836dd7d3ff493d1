//! `bk_field()`: the position of the first argument equal to a key.

use std::ffi::c_int;

use crate::args::ArgumentList;
use crate::error::{Result, UdfError};
use crate::function::UserFunction;
use crate::options::MatchOptions;
use crate::types::{ArgType, ArgValue};

/// The fewest arguments `bk_field()` accepts: a key and one candidate.
pub const MIN_ARGUMENTS: usize = 2;

/// Finds which argument equals the first one.
///
/// `bk_field(key, c1, c2, ..., cN)` returns `i` for the first candidate `ci`
/// equal to `key`, or 0 when none is. Integers compare with integers and
/// strings with strings; a candidate of any other kind never matches.
///
/// # Examples
///
/// ```rust
/// use bk_field::prelude::*;
///
/// let matcher = FieldMatcher::new();
/// let key = ArgValue::int64(42);
/// let candidates = [ArgValue::int64(7), ArgValue::uint32(42), ArgValue::int64(99)];
///
/// assert_eq!(matcher.position(key, candidates.into_iter().map(Some)), Some(2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldMatcher {
  options: MatchOptions,
}

impl FieldMatcher {
  /// Creates a matcher with the default [`MatchOptions`].
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a matcher with the given options.
  pub fn with_options(options: MatchOptions) -> Self {
    Self { options }
  }

  /// The comparison options in use.
  pub fn options(&self) -> MatchOptions {
    self.options
  }

  /// Whether `bk_field()` accepts arguments of this type.
  pub fn supports(ty: ArgType) -> bool {
    matches!(ty, ArgType::String | ArgType::Int64 | ArgType::Uint32)
  }

  /// Validates the declared argument types.
  ///
  /// Fails with [`UdfError::ArgumentCount`] for fewer than two arguments and
  /// with [`UdfError::UnsupportedType`] naming the first argument whose type
  /// is not a string or an integer.
  pub fn validate<I>(&self, types: I) -> Result<()>
  where
    I: IntoIterator<Item = ArgType>,
    I::IntoIter: ExactSizeIterator,
  {
    let types = types.into_iter();
    if types.len() < MIN_ARGUMENTS {
      return Err(UdfError::ArgumentCount {
        function: Self::NAME,
        min: MIN_ARGUMENTS,
        count: types.len(),
      });
    }

    for (index, ty) in types.enumerate() {
      if !Self::supports(ty) {
        return Err(UdfError::UnsupportedType {
          function: Self::NAME,
          index,
          tag: ty.tag(),
        });
      }
    }

    Ok(())
  }

  /// Scans the candidates of `args` and returns the 1-based position of the
  /// first one equal to the key, or `None`.
  pub fn find(&self, args: &ArgumentList<'_>) -> Option<usize> {
    let key = args.value(0)?;
    self.position(key, args.candidates())
  }

  /// Returns the 1-based position of the first candidate equal to `key`.
  ///
  /// A `None` candidate (a missing value) is skipped like an unsupported one.
  pub fn position<'v, I>(&self, key: ArgValue<'v>, candidates: I) -> Option<usize>
  where
    I: IntoIterator<Item = Option<ArgValue<'v>>>,
  {
    candidates
      .into_iter()
      .position(|candidate| candidate.is_some_and(|candidate| self.matches(&key, &candidate)))
      .map(|index| index + 1)
  }

  /// Whether `candidate` equals `key` under the configured options.
  pub fn matches(&self, key: &ArgValue<'_>, candidate: &ArgValue<'_>) -> bool {
    match (key, candidate) {
      (ArgValue::Integer(a), ArgValue::Integer(b)) => self.options.integers.equal(*a, *b),
      (ArgValue::Text(a), ArgValue::Text(b)) => self.options.strings.equal(a, b),
      _ => false,
    }
  }
}

impl UserFunction for FieldMatcher {
  const NAME: &'static str = "bk_field";

  fn check(&self, args: &ArgumentList<'_>) -> Result<()> {
    self.validate(args.types())
  }

  fn evaluate(&self, args: &ArgumentList<'_>) -> c_int {
    self
      .find(args)
      .and_then(|position| c_int::try_from(position).ok())
      .unwrap_or(0)
  }
}
