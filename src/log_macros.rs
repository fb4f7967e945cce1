// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Logging shims: forward to `log` when the feature is enabled, otherwise
//! type-check the arguments and emit nothing.

#![allow(unused)]

macro_rules! trace { ($($x:tt)*) => (
    #[cfg(feature = "log")]
    log::trace!($($x)*);

    #[cfg(not(feature = "log"))]
    let _ = || { let _ = format_args!($($x)*); };
) }

macro_rules! debug { ($($x:tt)*) => (
    #[cfg(feature = "log")]
    log::debug!($($x)*);

    #[cfg(not(feature = "log"))]
    let _ = || { let _ = format_args!($($x)*); };
) }
