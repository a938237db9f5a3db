// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::supply::supplier::Supply;
use crate::value::iter::{IntoIter, Iter};

/// A possibly non-existent value of type `T`.
///
/// A `Maybe<T>` is in exactly one of two states: *definitely known*, holding
/// a value, or *unknown*, holding nothing. The state tags are never exposed;
/// callers interact exclusively through combinators that are safe to call in
/// either state, so the absent case cannot be forgotten the way a null
/// reference can.
///
/// The container is immutable once constructed. Transformations consume it
/// and produce new instances; `as_ref` provides a borrowing view when the
/// original must be kept.
///
/// # Equality and ordering
///
/// Two known values are equal iff their wrapped values are equal, all
/// unknown instances of the same element type are equal to each other, and
/// mixed comparisons are unequal. Hashing is consistent with this equality.
/// An unknown value orders before any known value.
///
/// # Examples
///
/// ```rust
/// # use knowable_core::value::maybe::Maybe;
///
/// fn lookup(key: &str) -> Maybe<i32> {
///     if key == "answer" {
///         Maybe::definitely(42)
///     } else {
///         Maybe::unknown()
///     }
/// }
///
/// assert_eq!(lookup("answer").map(|v| v + 1).otherwise(0), 43);
/// assert_eq!(lookup("question").map(|v| v + 1).otherwise(0), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Maybe<T> {
    inner: Option<T>,
}

impl<T> Maybe<T> {
    /// Wraps a value that is known to exist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use knowable_core::value::maybe::Maybe;
    ///
    /// let value = Maybe::definitely(5);
    /// assert!(value.is_known());
    /// ```
    #[inline]
    pub const fn definitely(value: T) -> Self {
        Self { inner: Some(value) }
    }

    /// Constructs an explicit absent instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use knowable_core::value::maybe::Maybe;
    ///
    /// let value: Maybe<i32> = Maybe::unknown();
    /// assert!(value.is_empty());
    /// ```
    #[inline]
    pub const fn unknown() -> Self {
        Self { inner: None }
    }

    /// Synonymous with [`Maybe::unknown`].
    #[inline]
    pub const fn nothing() -> Self {
        Self::unknown()
    }

    /// Wraps a possibly-absent external value, mapping `None` to the
    /// unknown state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use knowable_core::value::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some("x")), Maybe::definitely("x"));
    /// assert_eq!(Maybe::<&str>::from_option(None), Maybe::unknown());
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        Self { inner: value }
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_known(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns `true` if no value is present. Logical negation of
    /// [`Maybe::is_known`].
    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.is_known()
    }

    /// Returns the wrapped value if known, or `default_value` unchanged if
    /// unknown.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use knowable_core::value::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::definitely(5).otherwise(10), 5);
    /// assert_eq!(Maybe::unknown().otherwise(10), 10);
    /// ```
    #[inline]
    pub fn otherwise(self, default_value: T) -> T {
        match self.inner {
            Some(value) => value,
            None => default_value,
        }
    }

    /// Returns `self` if known, or `default` if unknown. Enables chaining
    /// of fallback sources.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use knowable_core::value::maybe::Maybe;
    ///
    /// let primary: Maybe<i32> = Maybe::unknown();
    /// let fallback = Maybe::definitely(10);
    /// assert_eq!(primary.otherwise_maybe(fallback), Maybe::definitely(10));
    ///
    /// assert_eq!(
    ///     Maybe::definitely(5).otherwise_maybe(fallback),
    ///     Maybe::definitely(5)
    /// );
    /// ```
    #[inline]
    pub fn otherwise_maybe(self, default: Maybe<T>) -> Maybe<T> {
        if self.is_known() { self } else { default }
    }

    /// Applies `transform` to the wrapped value and wraps the result; when
    /// unknown, returns unknown without invoking `transform`.
    ///
    /// Not invoking `transform` in the unknown state is a correctness
    /// contract, not an optimization: the transform may be partial and only
    /// valid when a value exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use knowable_core::value::maybe::Maybe;
    ///
    /// assert_eq!(
    ///     Maybe::definitely("5").map(|s| s.len()),
    ///     Maybe::definitely(1)
    /// );
    /// assert_eq!(Maybe::<&str>::unknown().map(|s| s.len()), Maybe::unknown());
    /// ```
    #[inline]
    pub fn map<U, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.inner {
            Some(value) => Maybe::definitely(transform(value)),
            None => Maybe::unknown(),
        }
    }

    /// Tests the wrapped value with `predicate`, wrapping the verdict; when
    /// unknown, returns unknown without invoking `predicate`.
    ///
    /// This keeps "no value to test" distinguishable from "tested false".
    /// Unlike [`Maybe::map`], querying does not consume the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use knowable_core::value::maybe::Maybe;
    ///
    /// let value = Maybe::definitely(5);
    /// assert_eq!(value.query(|v| *v > 3), Maybe::definitely(true));
    /// assert_eq!(value.query(|v| *v > 7), Maybe::definitely(false));
    ///
    /// let absent: Maybe<i32> = Maybe::unknown();
    /// assert_eq!(absent.query(|v| *v > 3), Maybe::unknown());
    /// ```
    #[inline]
    pub fn query<F>(&self, predicate: F) -> Maybe<bool>
    where
        F: FnOnce(&T) -> bool,
    {
        match &self.inner {
            Some(value) => Maybe::definitely(predicate(value)),
            None => Maybe::unknown(),
        }
    }

    /// Returns a borrowing view of the container, leaving the original
    /// intact.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use knowable_core::value::maybe::Maybe;
    ///
    /// let text = Maybe::definitely(String::from("hello"));
    /// let length = text.as_ref().map(|s| s.len());
    /// assert_eq!(length, Maybe::definitely(5));
    /// assert!(text.is_known());
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        Maybe {
            inner: self.inner.as_ref(),
        }
    }

    /// Returns the wrapped value if known; when unknown, fails with the
    /// error produced by `supply`.
    ///
    /// The supplier is never invoked in the known case, so the present path
    /// pays no construction cost and triggers no side effects. Any
    /// `Fn() -> E` closure is a supplier; see [`Supply`] for reusable
    /// factories.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use knowable_core::value::maybe::Maybe;
    ///
    /// let known = Maybe::definitely(5);
    /// assert_eq!(known.otherwise_err(|| "missing"), Ok(5));
    ///
    /// let absent: Maybe<i32> = Maybe::unknown();
    /// assert_eq!(absent.otherwise_err(|| "missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn otherwise_err<E, S>(self, supply: S) -> Result<T, E>
    where
        S: Supply<E>,
    {
        match self.inner {
            Some(value) => Ok(value),
            None => Err(supply.supply()),
        }
    }

    /// Returns the wrapped value if known; when unknown, fails with the
    /// error kind `E` constructed through its no-argument path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use knowable_core::value::maybe::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::unknown();
    /// let result: Result<i32, String> = absent.otherwise_err_default();
    /// assert_eq!(result, Err(String::new()));
    /// ```
    #[inline]
    pub fn otherwise_err_default<E>(self) -> Result<T, E>
    where
        E: Default,
    {
        match self.inner {
            Some(value) => Ok(value),
            None => Err(E::default()),
        }
    }

    /// Returns the wrapped value if known; when unknown, fails with the
    /// error kind `E` constructed from `message`.
    ///
    /// The message is turned into an error only in the unknown case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use knowable_core::value::maybe::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::unknown();
    /// let result: Result<i32, String> = absent.otherwise_err_message("missing username");
    /// assert_eq!(result, Err(String::from("missing username")));
    /// ```
    #[inline]
    pub fn otherwise_err_message<E, M>(self, message: M) -> Result<T, E>
    where
        E: From<String>,
        M: Into<String>,
    {
        match self.inner {
            Some(value) => Ok(value),
            None => Err(E::from(message.into())),
        }
    }

    /// Creates a borrowing iterator yielding the wrapped value, or nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use knowable_core::value::maybe::Maybe;
    ///
    /// let known = Maybe::definitely(5);
    /// assert_eq!(known.iter().collect::<Vec<_>>(), vec![&5]);
    ///
    /// let absent: Maybe<i32> = Maybe::unknown();
    /// assert_eq!(absent.iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.inner.as_ref())
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::unknown()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.inner
    }
}

impl<T> std::fmt::Debug for Maybe<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Some(value) => f.debug_tuple("Definitely").field(value).finish(),
            None => f.write_str("Unknown"),
        }
    }
}

impl<T> std::fmt::Display for Maybe<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Some(value) => write!(f, "definitely {}", value),
            None => write!(f, "unknown"),
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.inner)
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    struct EmptyInput;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_definitely_is_known() {
        let value = Maybe::definitely(5);
        assert!(value.is_known());
        assert!(!value.is_empty());
    }

    #[test]
    fn test_unknown_is_empty() {
        let value: Maybe<i32> = Maybe::unknown();
        assert!(!value.is_known());
        assert!(value.is_empty());
    }

    #[test]
    fn test_nothing_is_synonym_for_unknown() {
        assert_eq!(Maybe::<i32>::nothing(), Maybe::<i32>::unknown());
        assert!(Maybe::<i32>::nothing().is_empty());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Maybe::from_option(Some("x")), Maybe::definitely("x"));
        assert_eq!(Maybe::<&str>::from_option(None), Maybe::unknown());

        // From impls mirror from_option in both directions.
        let via_from: Maybe<i32> = Some(3).into();
        assert_eq!(via_from, Maybe::definitely(3));
        assert_eq!(Option::<i32>::from(Maybe::unknown()), None);
        assert_eq!(Option::from(Maybe::definitely(3)), Some(3));
    }

    #[test]
    fn test_otherwise_known_ignores_default() {
        assert_eq!(Maybe::definitely(5).otherwise(10), 5);
    }

    #[test]
    fn test_otherwise_unknown_returns_default() {
        assert_eq!(Maybe::unknown().otherwise(10), 10);
    }

    #[test]
    fn test_otherwise_maybe() {
        assert_eq!(
            Maybe::definitely(5).otherwise_maybe(Maybe::definitely(10)),
            Maybe::definitely(5)
        );
        assert_eq!(
            Maybe::unknown().otherwise_maybe(Maybe::definitely(10)),
            Maybe::definitely(10)
        );

        // Fallback chains keep the first known value.
        let chained = Maybe::<i32>::unknown()
            .otherwise_maybe(Maybe::unknown())
            .otherwise_maybe(Maybe::definitely(1))
            .otherwise_maybe(Maybe::definitely(2));
        assert_eq!(chained, Maybe::definitely(1));
    }

    #[test]
    fn test_map_known() {
        assert_eq!(Maybe::definitely(5).map(|v| v * 2), Maybe::definitely(10));
    }

    #[test]
    fn test_map_unknown_never_invokes_transform() {
        let mut called = false;
        let result = Maybe::<i32>::unknown().map(|v| {
            called = true;
            v * 2
        });
        assert_eq!(result, Maybe::unknown());
        assert!(!called);
    }

    #[test]
    fn test_map_changes_element_type() {
        let result = Maybe::definitely(5).map(|v| format!("{v}"));
        assert_eq!(result, Maybe::definitely(String::from("5")));
    }

    #[test]
    fn test_query_known() {
        let value = Maybe::definitely(5);
        assert_eq!(value.query(|v| *v > 3), Maybe::definitely(true));
        assert_eq!(value.query(|v| *v > 7), Maybe::definitely(false));
    }

    #[test]
    fn test_query_unknown_never_invokes_predicate() {
        let mut called = false;
        let absent: Maybe<i32> = Maybe::unknown();
        let result = absent.query(|_| {
            called = true;
            true
        });
        assert_eq!(result, Maybe::unknown());
        assert!(!called);
    }

    #[test]
    fn test_as_ref_preserves_original() {
        let text = Maybe::definitely(String::from("hello"));
        assert_eq!(text.as_ref().map(|s| s.len()), Maybe::definitely(5));
        assert_eq!(text.otherwise(String::new()), "hello");
    }

    #[test]
    fn test_otherwise_err_known_never_invokes_supplier() {
        let called = Cell::new(false);
        let supplier = || {
            called.set(true);
            "boom"
        };

        assert_eq!(Maybe::definitely(5).otherwise_err(supplier), Ok(5));
        assert!(!called.get());
    }

    #[test]
    fn test_otherwise_err_unknown_fails_with_supplied_error() {
        let absent: Maybe<i32> = Maybe::unknown();
        assert_eq!(absent.otherwise_err(|| "boom"), Err("boom"));
    }

    #[test]
    fn test_otherwise_err_default() {
        let known: Result<i32, EmptyInput> = Maybe::definitely(5).otherwise_err_default();
        assert_eq!(known, Ok(5));

        let absent: Result<i32, EmptyInput> = Maybe::unknown().otherwise_err_default();
        assert_eq!(absent, Err(EmptyInput));
    }

    #[test]
    fn test_otherwise_err_message() {
        let known: Result<i32, String> = Maybe::definitely(5).otherwise_err_message("missing");
        assert_eq!(known, Ok(5));

        let absent: Result<i32, String> = Maybe::unknown().otherwise_err_message("missing");
        assert_eq!(absent, Err(String::from("missing")));
    }

    #[test]
    fn test_error_propagates_with_question_mark() {
        fn extract(value: Maybe<i32>) -> Result<i32, String> {
            let inner = value.otherwise_err_message::<String, _>("value was absent")?;
            Ok(inner * 2)
        }

        assert_eq!(extract(Maybe::definitely(5)), Ok(10));
        assert_eq!(
            extract(Maybe::unknown()),
            Err(String::from("value was absent"))
        );
    }

    #[test]
    fn test_equality() {
        assert_eq!(Maybe::definitely(1), Maybe::definitely(1));
        assert_ne!(Maybe::definitely(1), Maybe::definitely(2));
        // All unknown instances of the same element type are equal.
        assert_eq!(Maybe::<i32>::unknown(), Maybe::<i32>::unknown());
        assert_ne!(Maybe::definitely(1), Maybe::unknown());
        assert_ne!(Maybe::unknown(), Maybe::definitely(1));
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        assert_eq!(
            hash_of(&Maybe::definitely(1)),
            hash_of(&Maybe::definitely(1))
        );
        assert_eq!(
            hash_of(&Maybe::<i32>::unknown()),
            hash_of(&Maybe::<i32>::unknown())
        );
    }

    #[test]
    fn test_ordering() {
        assert!(Maybe::<i32>::unknown() < Maybe::definitely(i32::MIN));
        assert!(Maybe::definitely(1) < Maybe::definitely(2));
    }

    #[test]
    fn test_default_is_unknown() {
        let value: Maybe<i32> = Default::default();
        assert!(value.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Maybe::definitely(5)), "definitely 5");
        assert_eq!(format!("{}", Maybe::<i32>::unknown()), "unknown");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Maybe::definitely(5)), "Definitely(5)");
        assert_eq!(format!("{:?}", Maybe::<i32>::unknown()), "Unknown");
    }

    #[test]
    fn test_iteration_yields_zero_or_one_elements() {
        let known = Maybe::definitely(5);
        assert_eq!(known.into_iter().collect::<Vec<_>>(), vec![5]);

        let absent: Maybe<i32> = Maybe::unknown();
        assert_eq!(absent.into_iter().collect::<Vec<_>>(), Vec::<i32>::new());
    }

    #[test]
    fn test_borrowing_iteration() {
        let known = Maybe::definitely(5);
        let mut total = 0;
        for value in &known {
            total += *value;
        }
        assert_eq!(total, 5);
        // The container is still usable after borrowing iteration.
        assert!(known.is_known());
    }

    #[test]
    fn test_usable_where_a_sequence_is_accepted() {
        let sources = [Maybe::definitely(1), Maybe::unknown(), Maybe::definitely(3)];
        let present: Vec<i32> = sources.into_iter().flatten().collect();
        assert_eq!(present, vec![1, 3]);
    }
}
