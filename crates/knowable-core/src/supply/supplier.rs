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

use std::marker::PhantomData;

/// A deferred factory for error values of type `E`.
///
/// Suppliers are invoked lazily and potentially repeatedly: a single
/// supplier may back many extraction calls, and each invocation must
/// independently produce a valid instance. Stateless suppliers may return
/// behaviorally-equivalent instances on every call without being required to
/// return the identical one.
///
/// Every `Fn() -> E` closure is a supplier through the blanket
/// implementation, so ad-hoc call sites need no ceremony:
///
/// ```rust
/// use knowable_core::value::maybe::Maybe;
///
/// let absent: Maybe<i32> = Maybe::unknown();
/// let result = absent.otherwise_err(|| String::from("no value"));
/// assert_eq!(result, Err(String::from("no value")));
/// ```
pub trait Supply<E> {
    /// Produces a fresh error instance.
    fn supply(&self) -> E;
}

impl<E, F> Supply<E> for F
where
    F: Fn() -> E,
{
    #[inline]
    fn supply(&self) -> E {
        self()
    }
}

/// A reusable supplier for error kinds that need no contextual message.
///
/// Zero-sized: the error kind is the type parameter, and each `supply` call
/// constructs a fresh instance through the kind's no-argument path. This is
/// the generic descriptor-only factory.
///
/// # Examples
///
/// ```rust
/// use knowable_core::supply::supplier::{DefaultSupply, Supply};
///
/// let supplier: DefaultSupply<String> = DefaultSupply::new();
/// assert_eq!(supplier.supply(), String::new());
/// ```
pub struct DefaultSupply<E> {
    _marker: PhantomData<fn() -> E>,
}

impl<E> DefaultSupply<E> {
    /// Creates a new `DefaultSupply`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<E> Supply<E> for DefaultSupply<E>
where
    E: Default,
{
    #[inline]
    fn supply(&self) -> E {
        E::default()
    }
}

impl<E> Clone for DefaultSupply<E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for DefaultSupply<E> {}

impl<E> Default for DefaultSupply<E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for DefaultSupply<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DefaultSupply")
    }
}

/// A supplier that closes over a message captured at creation time.
///
/// The message is captured when the supplier is created, not when it is
/// invoked; each `supply` call reifies a fresh error carrying that message
/// through the kind's message-accepting path. This is the generic
/// descriptor-plus-message factory.
///
/// # Examples
///
/// ```rust
/// use knowable_core::supply::supplier::{MessageSupply, Supply};
///
/// let supplier: MessageSupply<String> = MessageSupply::new("missing username");
/// assert_eq!(supplier.supply(), String::from("missing username"));
/// assert_eq!(supplier.supply(), String::from("missing username"));
/// ```
pub struct MessageSupply<E> {
    message: String,
    _marker: PhantomData<fn() -> E>,
}

impl<E> MessageSupply<E> {
    /// Creates a new `MessageSupply` capturing `message`.
    #[inline]
    pub fn new<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            message: message.into(),
            _marker: PhantomData,
        }
    }

    /// Returns the captured message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<E> Supply<E> for MessageSupply<E>
where
    E: From<String>,
{
    #[inline]
    fn supply(&self) -> E {
        E::from(self.message.clone())
    }
}

impl<E> Clone for MessageSupply<E> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            message: self.message.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E> PartialEq for MessageSupply<E> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl<E> Eq for MessageSupply<E> {}

impl<E> std::fmt::Debug for MessageSupply<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageSupply")
            .field("message", &self.message)
            .finish()
    }
}
