// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The process-wide generator

use std::sync::{Mutex, MutexGuard, PoisonError};

use rand_core::{Error as RngError, RngCore};

use crate::{Error, Lcg64Xsh32};

// Lives until process exit. Starts from the static initializer, so it is
// usable before anyone seeds it.
static GLOBAL_RNG: Mutex<Lcg64Xsh32> = Mutex::new(Lcg64Xsh32::INITIALIZER);

// A panic while holding the lock cannot leave the generator half-updated
// (every operation is a plain assignment of whole words), so poisoning is
// ignored.
fn lock() -> MutexGuard<'static, Lcg64Xsh32> {
    GLOBAL_RNG.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Seed the global generator. See [`Lcg64Xsh32::seed`].
pub fn seed_global(initstate: u64, initseq: u64) {
    trace!("pcg32: seeding global generator on stream {:#x}", initseq);
    lock().seed(initstate, initseq);
}

/// Generate a uniformly distributed 32-bit number from the global generator.
pub fn next_u32_global() -> u32 {
    lock().next_u32()
}

/// Generate a number in `0..bound` from the global generator.
/// See [`Lcg64Xsh32::bounded_u32`].
pub fn bounded_u32_global(bound: u32) -> Result<u32, Error> {
    lock().bounded_u32(bound)
}

/// A copy of the global generator as it is right now.
///
/// Drawing from the copy does not advance the global generator.
pub fn global_snapshot() -> Lcg64Xsh32 {
    lock().clone()
}

/// A handle to the global generator, usable wherever an [`RngCore`] is
/// expected.
///
/// Every method takes the global lock for the duration of the call, so a
/// sequence of calls may interleave with draws from other threads. Use
/// [`GlobalRng::with`] to hold the lock across several draws.
///
/// ```
/// use pcg_basic::GlobalRng;
/// use pcg_basic::rand_core::RngCore;
///
/// let mut buf = [0u8; 8];
/// GlobalRng.fill_bytes(&mut buf);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalRng;

impl GlobalRng {
    /// Run `f` with exclusive access to the global generator.
    pub fn with<T, F: FnOnce(&mut Lcg64Xsh32) -> T>(f: F) -> T {
        f(&mut lock())
    }
}

impl RngCore for GlobalRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        lock().next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        RngCore::next_u64(&mut *lock())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        lock().fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RngError> {
        self.fill_bytes(dest);
        Ok(())
    }
}
