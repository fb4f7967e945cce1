// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use core::fmt;

/// Error type returned from [`Lcg64Xsh32::bounded_u32`].
///
/// Seeding and unbounded generation cannot fail; the only rejected input is
/// an empty sampling range.
///
/// [`Lcg64Xsh32::bounded_u32`]: crate::Lcg64Xsh32::bounded_u32
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `bound == 0`: the range `0..bound` is empty.
    ZeroBound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::ZeroBound => "bound must be non-zero in bounded sampling",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
