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

//! # Optional Values
//!
//! The `Maybe<T>` container and its iteration support. A `Maybe<T>` is in
//! exactly one of two states, definitely known or unknown, and exposes
//! only combinators, never the state tags, so every caller is forced to
//! handle the absent case explicitly.
//!
//! ## Submodules
//!
//! - `maybe`: The container itself with construction entry points,
//!   predicates, combinators, and fail-fast extraction.
//! - `iter`: Zero-or-one-element iterators (`IntoIter`, `Iter`) backing the
//!   container's `IntoIterator` implementations.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod iter;
pub mod maybe;
