// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The minimal PCG32 random number generator.
//!
//! This is a native Rust implementation of the "basic" [PCG] generator:
//! 64 bits of state, a selectable odd increment (the stream), and 32 bits of
//! output per step via the XSH-RR permutation. It is officially known as
//! `pcg32` and is provided here as [`Pcg32`] aka [`Lcg64Xsh32`].
//!
//! The goal of this crate is small, exact, well-tested code that reproduces
//! the published PCG reference vectors bit for bit. It is *not* a
//! cryptographically secure generator.
//!
//! ## Seeding
//!
//! A generator is seeded from two 64-bit numbers: the initial state and the
//! stream selector. The same pair always yields the same sequence, and
//! distinct selectors yield distinct streams (2<sup>63</sup> of them).
//! ```
//! use pcg_basic::Pcg32;
//!
//! let mut rng = Pcg32::new(42, 54);
//! assert_eq!(rng.next_u32(), 0xa15c02b7);
//! ```
//!
//! The generator also implements [`SeedableRng`], so all the usual
//! constructors (`from_seed`, `seed_from_u64`, `from_rng`) are available.
//!
//! ## Bounded values
//!
//! [`Lcg64Xsh32::bounded_u32`] returns a value in `0..bound` without modulo
//! bias, by rejecting the few outputs that would skew the distribution.
//! ```
//! use pcg_basic::{Error, Pcg32};
//!
//! let mut rng = Pcg32::new(42, 54);
//! let die = rng.bounded_u32(6).unwrap() + 1;
//! assert!((1..=6).contains(&die));
//! assert_eq!(rng.bounded_u32(0), Err(Error::ZeroBound));
//! ```
//!
//! ## The global generator
//!
//! With the `std` feature a process-wide generator, starting from
//! [`Lcg64Xsh32::INITIALIZER`], is available through [`seed_global`],
//! [`next_u32_global`] and [`GlobalRng`]. It sits behind a mutex; for
//! contention-free use give each thread its own generator on its own stream.
//!
//! [PCG]: https://www.pcg-random.org/
//! [`SeedableRng`]: rand_core::SeedableRng

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico"
)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![no_std]

#[cfg(feature = "std")] extern crate std;

#[macro_use]
mod log_macros;

mod error;
#[cfg(feature = "std")] mod global;
mod pcg32;

pub use rand_core;

pub use self::error::Error;
#[cfg(feature = "std")]
pub use self::global::{bounded_u32_global, global_snapshot, next_u32_global, seed_global, GlobalRng};
pub use self::pcg32::{Lcg64Xsh32, Pcg32};
