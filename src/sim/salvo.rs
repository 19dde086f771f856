use rand::{Rng, RngCore};

/// Ticks over which salvo size ramps toward the tier ceiling.
const RAMP: f64 = 6.0;

/// Asymptotic salvo ceiling per power tier.
fn tier_cap(power_tier: u8) -> f64 {
    match power_tier {
        5 => 25.0,
        4 => 15.0,
        3 => 8.0,
        2 => 4.0,
        1 => 2.0,
        _ => 3.0,
    }
}

/// How many weapons one strike expends.
///
/// Reads nothing from run state beyond the passed arguments. Size ramps
/// up over time toward the tier ceiling, gains a small random jitter that
/// unlocks as the conflict ages, and is clamped to `[1, remaining stock]`.
/// Callers guard with `can_launch`, so `remaining > 0` is assumed; a
/// remaining stock of 1 always yields exactly 1.
pub fn salvo_size(time: u64, power_tier: u8, remaining: f64, rng: &mut dyn RngCore) -> u32 {
    let cap = tier_cap(power_tier);
    let t = time as f64;
    let base = 1.0 + (cap - 1.0) * (1.0 - (-t / RAMP).exp());
    let jitter = (rng.random_range(0.0..1.0) * (t / 3.0 + 1.0).min(2.0)).floor();
    let size = base.round() + jitter;
    let max = remaining.floor().max(1.0);
    size.clamp(1.0, max) as u32
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn at_least_one_and_within_cap_at_time_zero() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..100 {
            let size = salvo_size(0, 5, 1000.0, &mut rng);
            assert!(size >= 1);
            // cap 25 plus jitter ceiling of 2
            assert!(size <= 27, "size {size} exceeds cap-derived bound");
        }
    }

    #[test]
    fn stock_of_one_always_yields_one() {
        let mut rng = SmallRng::seed_from_u64(2);
        for time in [0, 5, 50, 500] {
            for tier in 1..=5 {
                assert_eq!(salvo_size(time, tier, 1.0, &mut rng), 1);
            }
        }
    }

    #[test]
    fn ramps_toward_tier_ceiling() {
        let mut rng = SmallRng::seed_from_u64(3);
        // Far past the ramp the base sits at the cap; jitter adds at most 2.
        for _ in 0..100 {
            let size = salvo_size(1000, 5, 10_000.0, &mut rng);
            assert!((25..=27).contains(&size), "late-war size {size}");
        }
    }

    #[test]
    fn small_tier_stays_small() {
        let mut rng = SmallRng::seed_from_u64(4);
        for _ in 0..100 {
            let size = salvo_size(1000, 1, 10_000.0, &mut rng);
            assert!(size <= 4, "tier-1 size {size}");
        }
    }

    #[test]
    fn clamped_to_remaining_stock() {
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..100 {
            assert!(salvo_size(1000, 5, 3.9, &mut rng) <= 3);
        }
    }

    #[test]
    fn unknown_tier_uses_default_cap() {
        let mut rng = SmallRng::seed_from_u64(6);
        for _ in 0..100 {
            let size = salvo_size(1000, 7, 1000.0, &mut rng);
            assert!(size <= 5, "default-cap size {size}");
        }
    }
}
