    // Test doubles for crate::entropy::SecureRandomSource

    /// Hands out pre-recorded bytes in order; fails once the script runs out.
    struct ScriptedSource {
        bytes: std::collections::VecDeque<u8>,
        consumed: usize,
    }

    impl ScriptedSource {
        fn new(bytes: &[u8]) -> Self {
            ScriptedSource { bytes: bytes.iter().copied().collect(), consumed: 0 }
        }

        #[allow(dead_code)]
        fn consumed(&self) -> usize {
            self.consumed
        }
    }

    impl crate::entropy::SecureRandomSource for ScriptedSource {
        fn fill(&mut self, dest: &mut [u8]) -> Result<(), crate::entropy::EntropySourceError> {
            if self.bytes.len() < dest.len() {
                return Err(crate::entropy::EntropySourceError::new("script exhausted"));
            }
            for b in dest.iter_mut() {
                *b = self.bytes.pop_front().unwrap();
            }
            self.consumed += dest.len();
            Ok(())
        }
    }

    /// Entropy device that is never available.
    struct FailingSource;

    impl crate::entropy::SecureRandomSource for FailingSource {
        fn fill(&mut self, _dest: &mut [u8]) -> Result<(), crate::entropy::EntropySourceError> {
            Err(crate::entropy::EntropySourceError::new("/dev/urandom: permission denied"))
        }
    }

    /// Reproducible stream for statistical checks.
    struct SeededSource(rand::rngs::StdRng);

    impl SeededSource {
        fn new(seed: u64) -> Self {
            use rand::SeedableRng;
            SeededSource(rand::rngs::StdRng::seed_from_u64(seed))
        }
    }

    impl crate::entropy::SecureRandomSource for SeededSource {
        fn fill(&mut self, dest: &mut [u8]) -> Result<(), crate::entropy::EntropySourceError> {
            use rand::RngCore;
            self.0.fill_bytes(dest);
            Ok(())
        }
    }
