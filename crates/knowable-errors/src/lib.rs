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

//! # Knowable Errors
//!
//! Ready-made error kinds and deferred suppliers for the fail-fast
//! extraction of `knowable-core`'s `Maybe<T>`. Where the core crate defines
//! the supply seam, this crate provides the errors most call sites actually
//! want to fail with, so extraction reads as a single expression:
//!
//! ```rust
//! use knowable_core::value::maybe::Maybe;
//! use knowable_errors::suppliers::invalid_argument_message;
//!
//! fn greet(username: Maybe<String>) -> Result<String, knowable_errors::kinds::InvalidArgument> {
//!     let name = username.otherwise_err(invalid_argument_message("missing username"))?;
//!     Ok(format!("hello, {name}"))
//! }
//!
//! assert!(greet(Maybe::unknown()).is_err());
//! ```
//!
//! ## Modules
//!
//! - `kinds`: The error kinds (`InvalidArgument`, `InvalidState`,
//!   `MissingValue`), each with an optional message and the construction
//!   paths the generic suppliers require.
//! - `suppliers`: Supplier constructors pairing each kind with the core
//!   crate's `DefaultSupply`/`MessageSupply` factories.

pub mod kinds;
pub mod suppliers;
