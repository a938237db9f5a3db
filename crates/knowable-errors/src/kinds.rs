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

//! Error kinds for absence-triggered failures.
//!
//! Each kind carries an optional message and provides both construction
//! paths the generic suppliers rely on: `Default` (no message) and
//! `From<String>` (message). All kinds implement `std::error::Error`, so
//! they compose with `?` and error-reporting stacks like any other error.

macro_rules! error_kind {
    ($(#[$docs:meta])* $name:ident, $text:literal) => {
        $(#[$docs])*
        #[derive(Debug, Clone, PartialEq, Eq, Default)]
        pub struct $name {
            message: Option<String>,
        }

        impl $name {
            /// Creates an instance without a message.
            #[inline]
            pub const fn new() -> Self {
                Self { message: None }
            }

            /// Creates an instance carrying `message`.
            #[inline]
            pub fn with_message<M>(message: M) -> Self
            where
                M: Into<String>,
            {
                Self {
                    message: Some(message.into()),
                }
            }

            /// Returns the carried message, if any.
            #[inline]
            pub fn message(&self) -> Option<&str> {
                self.message.as_deref()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match &self.message {
                    Some(message) => write!(f, concat!($text, ": {}"), message),
                    None => f.write_str($text),
                }
            }
        }

        impl std::error::Error for $name {}

        impl From<String> for $name {
            #[inline]
            fn from(message: String) -> Self {
                Self {
                    message: Some(message),
                }
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(message: &str) -> Self {
                Self {
                    message: Some(message.to_owned()),
                }
            }
        }
    };
}

error_kind!(
    /// The failure raised when a supplied argument is rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use knowable_errors::kinds::InvalidArgument;
    ///
    /// let plain = InvalidArgument::new();
    /// assert_eq!(format!("{}", plain), "invalid argument");
    ///
    /// let detailed = InvalidArgument::with_message("missing username");
    /// assert_eq!(format!("{}", detailed), "invalid argument: missing username");
    /// ```
    InvalidArgument,
    "invalid argument"
);

error_kind!(
    /// The failure raised when an operation is attempted in a state that
    /// does not admit it.
    InvalidState,
    "invalid state"
);

error_kind!(
    /// The failure raised when a value expected to be present is absent.
    ///
    /// This is the closest native analog of dereferencing a null sentinel,
    /// for call sites that want to name the absence itself.
    MissingValue,
    "missing value"
);
