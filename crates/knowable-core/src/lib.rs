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

//! # Knowable Core
//!
//! Explicit optional values for code that refuses to traffic in null-like
//! sentinels. This crate provides the `Maybe<T>` container, which represents
//! a possibly non-existent value of type `T` and makes it impossible
//! (without deliberate effort to circumvent the API) to use the value when
//! it does not exist.
//!
//! ## Modules
//!
//! - `value`: The `Maybe<T>` container with safe combinators (`otherwise`,
//!   `map`, `query`, fail-fast extraction returning `Result`), equality and
//!   ordering consistent across both states, and zero-or-one-element
//!   iteration (`Iterator`, `DoubleEndedIterator`, `ExactSizeIterator`,
//!   `FusedIterator`).
//! - `supply`: The deferred error supply seam: the `Supply<E>` trait for
//!   factories that construct an error only when the absent case actually
//!   occurs, with a blanket implementation for closures and generic
//!   `DefaultSupply`/`MessageSupply` factories.
//!
//! ## Purpose
//!
//! Lookup and parse results need a way to express "a value that might not
//! exist". Wrapping that possibility in a dedicated type keeps the absent
//! case visible at every call site and lets callers decide explicitly
//! whether to substitute a default, fall back to another source, or fail
//! with a caller-chosen error. The error is constructed lazily, so the
//! present path pays nothing.
//!
//! Refer to each module for detailed APIs and examples.

pub mod supply;
pub mod value;
