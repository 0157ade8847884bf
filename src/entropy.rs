/*!
 * Secure random capability and the bounded-integer reduction built on top of it.
 *
 * Sources only have to deliver raw bytes (`fill`); `uniform_below` turns them into
 * a uniformly distributed integer with masked rejection sampling:
 * just enough bits to cover `bound - 1` are drawn and values `>= bound` are discarded.
 */

use std::fmt;
use std::num::NonZeroU64;

use thiserror::Error;
use tracing::debug;

/// The secure random provider could not supply randomness
/// (device missing, permission denied, kernel interface failure, ...).
#[derive(Debug, Error)]
#[error("secure random source unavailable: {0}")]
pub struct EntropySourceError(String);

impl EntropySourceError {
    #[allow(dead_code)]
    pub fn new(reason: impl Into<String>) -> Self {
        EntropySourceError(reason.into())
    }
}

impl From<rand::Error> for EntropySourceError {
    fn from(e: rand::Error) -> Self {
        EntropySourceError(e.to_string())
    }
}

/// Exclusive, always positive, upper limit of a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound(NonZeroU64);

impl Bound {
    /// Returns `None` for 0.
    pub const fn new(n: u64) -> Option<Self> {
        match NonZeroU64::new(n) {
            Some(n) => Some(Bound(n)),
            None => None,
        }
    }

    /// Panics for 0: a zero bound is a programming error, not a runtime condition.
    pub const fn of(n: u64) -> Self {
        match Self::new(n) {
            Some(b) => b,
            None => panic!("bound must be a positive integer"),
        }
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cryptographically secure source of random bytes.
pub trait SecureRandomSource {
    /// Fills whole `dest` with random bytes or fails; partial fills are not reported as success.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropySourceError>;

    /// Returns integer uniformly distributed in `[0, bound)`.
    ///
    /// Bytes are read as big-endian number with unused high bits of the first byte cleared,
    /// so every attempt yields a value in `[0, 2^bits)` where `2^bits` is the smallest power of two
    /// not less than `bound`. Out of range values are thrown away, at most half of attempts on average.
    fn uniform_below(&mut self, bound: Bound) -> Result<u64, EntropySourceError> {
        let max = bound.get() - 1;
        if max == 0 {
            return Ok(0);
        }
        let bits = u64::BITS - max.leading_zeros();
        let len = ((bits + 7) / 8) as usize;
        let top_mask = match bits % 8 {
            0 => 0xff,
            r => (1u8 << r) - 1,
        };

        let mut buf = [0u8; 8];
        let mut attempt = 1u32;
        loop {
            {
                let bytes = &mut buf[8 - len..];
                self.fill(bytes)?;
                bytes[0] &= top_mask;
            }
            let n = u64::from_be_bytes(buf);
            if n < bound.get() {
                return Ok(n);
            }
            debug!(attempt, value = n, bound = %bound, "Draw outside bound rejected");
            attempt += 1;
        }
    }
}
