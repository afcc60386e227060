use proptest::prelude::*;

use release_schedule::{mul_div_floor, LinearSchedule};

fn schedule() -> impl Strategy<Value = LinearSchedule> {
    (
        1i128..=1_000_000_000_000_000_000_000_000_000i128,
        0u64..1_000_000_000,
        0u64..200_000_000,
        1u64..400_000_000,
    )
        .prop_map(|(total, start, cliff, duration)| {
            LinearSchedule::new(total, start, cliff, duration)
        })
}

proptest! {
    /// Vested amount stays within [0, total] at every instant.
    #[test]
    fn vested_is_bounded(s in schedule(), now in 0u64..2_000_000_000) {
        let vested = s.vested_amount(now);
        prop_assert!(vested >= 0);
        prop_assert!(vested <= s.total_amount);
    }

    /// Vesting never goes backwards in time.
    #[test]
    fn vested_is_monotonic(s in schedule(), a in 0u64..2_000_000_000, b in 0u64..2_000_000_000) {
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(s.vested_amount(early) <= s.vested_amount(late));
    }

    /// Releasing everything releasable keeps released <= vested <= total.
    #[test]
    fn release_sequence_respects_invariant(
        s in schedule(),
        times in prop::collection::vec(0u64..2_000_000_000, 1..16),
    ) {
        let mut times = times;
        times.sort_unstable();
        let mut released = 0i128;
        for now in times {
            let step = s.releasable_amount(released, now);
            prop_assert!(step >= 0);
            released += step;
            prop_assert!(released <= s.vested_amount(now));
            prop_assert!(s.vested_amount(now) <= s.total_amount);
        }
    }

    /// The halfway point vests half the total within one unit of rounding.
    #[test]
    fn halfway_vests_half(
        total in 1i128..1_000_000_000_000_000_000i128,
        half in 1u64..100_000_000,
    ) {
        let s = LinearSchedule::new(total, 0, half, 2 * half);
        let vested = s.vested_amount(half);
        prop_assert!((total / 2 - vested).abs() <= 1);
    }

    /// The overflow-free path agrees with plain arithmetic where the latter fits.
    #[test]
    fn mul_div_matches_naive(
        amount in 0i128..1_000_000_000_000_000_000_000i128,
        d in 1u64..u32::MAX as u64,
        n_seed in any::<u64>(),
    ) {
        let n = n_seed % (d + 1);
        let naive = amount * n as i128 / d as i128;
        prop_assert_eq!(mul_div_floor(amount, n, d), Some(naive));
    }
}
