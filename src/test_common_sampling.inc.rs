    // Sampling properties every source must satisfy.
    // Including module provides `fn source() -> impl crate::entropy::SecureRandomSource`.

    const SAMPLES: usize = 100_000;
    // 999 degrees of freedom: 99.99th percentile is about 1165
    const CHI_SQUARED_LIMIT: f64 = 1200.0;

    fn draw_all(n: usize, bound: u64) -> Vec<u64> {
        use crate::entropy::SecureRandomSource;
        let mut src = source();
        let bound = crate::entropy::Bound::of(bound);
        (0..n).map(|_| src.uniform_below(bound).unwrap()).collect()
    }

    #[test]
    fn values_stay_below_bound() {
        for &bound in [1, 2, 3, 7, 255, 256, 257, 1000, 65_537, u64::MAX].iter() {
            for v in draw_all(2_000, bound) {
                assert!(v < bound, "{} drawn for bound {}", v, bound);
            }
        }
    }

    #[test]
    fn distribution_is_uniform() {
        let mut counts = vec![0u64; 1000];
        for v in draw_all(SAMPLES, 1000) {
            counts[v as usize] += 1;
        }
        let expected = SAMPLES as f64 / 1000.0;
        let chi2: f64 = counts.iter().map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        }).sum();
        assert!(chi2 < CHI_SQUARED_LIMIT, "chi-squared {} exceeds {}", chi2, CHI_SQUARED_LIMIT);
    }

    #[test]
    fn every_value_is_reachable() {
        let mut seen = vec![false; 1000];
        for v in draw_all(SAMPLES, 1000) {
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing {:?}", seen.iter().position(|&s| !s));
    }

    #[test]
    fn consecutive_draws_are_independent() {
        // Expected number of equal neighbours is 10 in 10_000 pairs
        let values = draw_all(10_001, 1000);
        let repeats = values.windows(2).filter(|w| w[0] == w[1]).count();
        assert!(repeats < 40, "{} equal consecutive pairs", repeats);
    }
