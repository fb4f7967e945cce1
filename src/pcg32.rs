// Copyright 2018-2023 Developers of the Rand project.
// Copyright 2014-2017 Melissa O'Neill and PCG Project contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! PCG random number generator (XSH RR 64/32 variant)

use core::fmt;
use core::num::NonZeroU32;

use rand_core::{impls, le, Error as RngError, RngCore, SeedableRng};
#[cfg(feature = "serde1")] use serde::{Deserialize, Serialize};

use crate::Error;

// This is the default multiplier used by PCG for 64-bit state.
const MULTIPLIER: u64 = 6364136223846793005;

/// A PCG random number generator (XSH RR 64/32 (LCG) variant).
///
/// Permuted Congruential Generator with 64-bit state, internal Linear
/// Congruential Generator, and 32-bit output via "xorshift high (bits),
/// random rotation" output function.
///
/// This is a 64-bit LCG with explicitly chosen stream, officially known as
/// `pcg32` and matching `pcg32_random_r` from the minimal C implementation.
///
/// The generator uses 16 bytes: 64 bits of state and a 64-bit increment.
/// The increment selects the stream and is always odd; this is upheld by
/// every constructor and by [`seed`](Self::seed), which is what guarantees
/// the full 2<sup>64</sup> period of each stream.
///
/// Generators are not synchronized: share one between threads only behind a
/// lock, or better give each thread its own stream.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Lcg64Xsh32 {
    state: u64,
    increment: u64,
}

/// [`Lcg64Xsh32`] is also officially known as `pcg32`.
pub type Pcg32 = Lcg64Xsh32;

impl Lcg64Xsh32 {
    /// The canonical static initializer of the reference implementation.
    ///
    /// A generator holding this value is usable without seeding; it is also
    /// what [`Default`] returns and where the global generator starts.
    pub const INITIALIZER: Self = Lcg64Xsh32 {
        state: 0x853c_49e6_748f_ea9b,
        increment: 0xda3e_39cb_94b9_5bdb,
    };

    /// Construct an instance seeded with the given state and stream.
    ///
    /// Equivalent to seeding [`INITIALIZER`](Self::INITIALIZER) with
    /// [`seed`](Self::seed).
    pub fn new(initstate: u64, initseq: u64) -> Self {
        let mut pcg = Self::INITIALIZER;
        pcg.seed(initstate, initseq);
        pcg
    }

    /// Re-seed in place from a state initializer and a sequence selection
    /// constant (a.k.a. stream id).
    ///
    /// Note that the highest bit of `initseq` is discarded to keep the
    /// increment odd, so `initseq` and `initseq ^ (1 << 63)` select the same
    /// stream.
    pub fn seed(&mut self, initstate: u64, initseq: u64) {
        // The increment must be odd, hence we discard one bit:
        self.increment = (initseq << 1) | 1;
        self.state = 0;
        self.step();
        self.state = self.state.wrapping_add(initstate);
        self.step();
    }

    /// Generate a uniformly distributed 32-bit number and advance the state
    /// by one step.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let state = self.state;
        self.step();
        output_xsh_rr(state)
    }

    /// Generate a uniformly distributed number `r` with `0 <= r < bound`.
    ///
    /// There is no modulo bias: outputs below `2^32 mod bound` are rejected
    /// and redrawn, so every residue is backed by the same number of raw
    /// outputs. At most half of the output space is rejected (for
    /// `bound = 2^31 + 1`); for small bounds a redraw is rare.
    ///
    /// Returns [`Error::ZeroBound`] without advancing the generator if
    /// `bound == 0`.
    #[inline]
    pub fn bounded_u32(&mut self, bound: u32) -> Result<u32, Error> {
        match NonZeroU32::new(bound) {
            Some(bound) => Ok(self.bounded_nonzero_u32(bound)),
            None => {
                debug!("pcg32: rejected bounded sample with zero bound");
                Err(Error::ZeroBound)
            }
        }
    }

    /// Like [`bounded_u32`](Self::bounded_u32), with the bound checked by
    /// the type system instead.
    pub fn bounded_nonzero_u32(&mut self, bound: NonZeroU32) -> u32 {
        let bound = bound.get();
        // The threshold is 2^32 mod bound, computed in 32-bit arithmetic:
        // (2^32 - bound) mod bound has the same value.
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let r = self.next_u32();
            if r >= threshold {
                return r % bound;
            }
        }
    }

    /// The current internal LCG state.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// The stream increment (always odd).
    #[inline]
    pub fn increment(&self) -> u64 {
        self.increment
    }

    #[inline(always)]
    fn step(&mut self) {
        // prepare the LCG for the next round
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.increment);
    }
}

impl Default for Lcg64Xsh32 {
    #[inline]
    fn default() -> Self {
        Self::INITIALIZER
    }
}

// Custom Debug implementation that does not expose the internal state
impl fmt::Debug for Lcg64Xsh32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Lcg64Xsh32 {{}}")
    }
}

impl SeedableRng for Lcg64Xsh32 {
    type Seed = [u8; 16];

    /// We use a single 127-bit seed to initialise the state and select a
    /// stream. One `seed` bit (the highest bit of `seed[15]`) is ignored.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut seed_u64 = [0u64; 2];
        le::read_u64_into(&seed, &mut seed_u64);

        Self::new(seed_u64[0], seed_u64[1])
    }
}

impl RngCore for Lcg64Xsh32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Lcg64Xsh32::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RngError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[inline(always)]
fn output_xsh_rr(state: u64) -> u32 {
    let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
    // The top five bits pick the rotation; `-rot & 31` keeps the left shift
    // in range when `rot == 0`.
    let rot = (state >> 59) as u32;
    (xorshifted >> rot) | (xorshifted << (rot.wrapping_neg() & 31))
}
