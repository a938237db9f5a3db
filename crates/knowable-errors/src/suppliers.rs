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

//! Ready-made supplier constructors.
//!
//! Message-less forms return the shared zero-sized supplier for their kind;
//! message forms capture the message when the supplier is created, not when
//! it is invoked. Used with fail-fast extraction, the call site reads as a
//! sentence:
//!
//! ```rust
//! use knowable_core::value::maybe::Maybe;
//! use knowable_errors::suppliers::invalid_argument_message;
//!
//! let username: Maybe<&str> = Maybe::unknown();
//! let result = username.otherwise_err(invalid_argument_message("missing username"));
//! assert!(result.is_err());
//! ```

use crate::kinds::{InvalidArgument, InvalidState, MissingValue};
use knowable_core::supply::supplier::{DefaultSupply, MessageSupply};

/// A supplier of [`InvalidArgument`] without a message.
#[inline]
pub const fn invalid_argument() -> DefaultSupply<InvalidArgument> {
    DefaultSupply::new()
}

/// A supplier of [`InvalidArgument`] carrying `message`.
#[inline]
pub fn invalid_argument_message<M>(message: M) -> MessageSupply<InvalidArgument>
where
    M: Into<String>,
{
    MessageSupply::new(message)
}

/// A supplier of [`InvalidState`] without a message.
#[inline]
pub const fn invalid_state() -> DefaultSupply<InvalidState> {
    DefaultSupply::new()
}

/// A supplier of [`InvalidState`] carrying `message`.
#[inline]
pub fn invalid_state_message<M>(message: M) -> MessageSupply<InvalidState>
where
    M: Into<String>,
{
    MessageSupply::new(message)
}

/// A supplier of [`MissingValue`] without a message.
#[inline]
pub const fn missing_value() -> DefaultSupply<MissingValue> {
    DefaultSupply::new()
}

/// A supplier of [`MissingValue`] carrying `message`.
#[inline]
pub fn missing_value_message<M>(message: M) -> MessageSupply<MissingValue>
where
    M: Into<String>,
{
    MessageSupply::new(message)
}
