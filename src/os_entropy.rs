/*!
 * Production source: operating system CSPRNG (`getrandom(2)` on Linux, platform equivalents elsewhere).
 */

use rand::rngs::OsRng;
use rand::RngCore;

use crate::entropy::{EntropySourceError, SecureRandomSource};

/// Handle to the OS random source. Zero sized, nothing to open or release.
/// The first read may block until the kernel entropy pool is seeded.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl SecureRandomSource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropySourceError> {
        OsRng.try_fill_bytes(dest).map_err(EntropySourceError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_whole_buffer() {
        // 64 zero bytes in a row from a working CSPRNG is practically impossible
        let mut buf = [0u8; 64];
        OsEntropy.fill(&mut buf).unwrap();
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn separate_handles_are_independent() {
        let (mut a, mut b) = ([0u8; 32], [0u8; 32]);
        OsEntropy.fill(&mut a).unwrap();
        OsEntropy.fill(&mut b).unwrap();
        assert_ne!(a, b);
    }

    fn source() -> OsEntropy {
        OsEntropy
    }

    include!("test_common_sampling.inc.rs");
}
