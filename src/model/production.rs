// src/model/production.rs

use tracing::warn;

/// Effective ramp-up length once clamped to the simulated timeframe.
///
/// A ramp longer than the timeframe leaves no steady-state weeks.
pub fn clamp_ramp_weeks(requested_ramp_weeks: usize, total_weeks: usize) -> usize {
    if requested_ramp_weeks > total_weeks {
        warn!(
            requested_ramp_weeks,
            total_weeks, "ramp-up exceeds timeframe; truncating ramp"
        );
        total_weeks
    } else {
        requested_ramp_weeks
    }
}

/// `count` evenly spaced points from 0 to `max` inclusive, rounded half to even.
///
/// A single point is just 0.
pub fn linear_ramp(max: u32, count: usize) -> Vec<u32> {
    ramp_prefix(max, count, count)
}

/// The first `take` points of `linear_ramp(max, count)`.
fn ramp_prefix(max: u32, count: usize, take: usize) -> Vec<u32> {
    let take = take.min(count);
    if count < 2 {
        return vec![0; take];
    }
    let step = max as f64 / (count - 1) as f64;
    (0..take)
        .map(|i| {
            if i == count - 1 {
                // endpoint is exact
                max
            } else {
                (i as f64 * step).round_ties_even() as u32
            }
        })
        .collect()
}

/// Builds the baseline (pre-variability) production schedule.
///
/// The first weeks follow a linear ramp from 0 to `max_per_week` spanning
/// `requested_ramp_weeks`; every later week runs at `max_per_week`. When the
/// ramp is longer than `total_weeks`, the schedule is the leading
/// `total_weeks` points of that same ramp, so the slope does not change.
pub fn baseline_schedule(
    max_per_week: u32,
    requested_ramp_weeks: usize,
    total_weeks: usize,
) -> Vec<u32> {
    let ramp_weeks = clamp_ramp_weeks(requested_ramp_weeks, total_weeks);

    let mut schedule = ramp_prefix(max_per_week, requested_ramp_weeks, ramp_weeks);
    schedule.resize(total_weeks, max_per_week);
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_hits_both_endpoints() {
        let ramp = linear_ramp(9, 48);
        assert_eq!(ramp.len(), 48);
        assert_eq!(ramp[0], 0);
        assert_eq!(ramp[47], 9);
        assert!(ramp.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn ramp_rounds_half_to_even() {
        // Points are 0, 0.5, 1, 1.5, 2
        assert_eq!(linear_ramp(2, 5), vec![0, 0, 1, 2, 2]);
    }

    #[test]
    fn degenerate_ramps() {
        assert!(linear_ramp(9, 0).is_empty());
        assert_eq!(linear_ramp(9, 1), vec![0]);
        assert_eq!(linear_ramp(9, 2), vec![0, 9]);
    }

    #[test]
    fn ramp_followed_by_steady_state() {
        let schedule = baseline_schedule(9, 48, 52);
        assert_eq!(schedule.len(), 52);
        assert_eq!(&schedule[..48], linear_ramp(9, 48).as_slice());
        assert_eq!(&schedule[48..], &[9, 9, 9, 9]);
    }

    #[test]
    fn ramp_equal_to_timeframe_has_no_steady_state() {
        let schedule = baseline_schedule(9, 52, 52);
        assert_eq!(schedule, linear_ramp(9, 52));
    }

    #[test]
    fn overlong_ramp_is_truncated_not_compressed() {
        // 42 months of ramp over a single year
        let schedule = baseline_schedule(9, 168, 52);
        assert_eq!(schedule.len(), 52);
        assert_eq!(schedule, linear_ramp(9, 168)[..52].to_vec());
        assert!(schedule.iter().all(|&g| g < 9));
    }

    #[test]
    fn clamp_only_applies_past_timeframe() {
        assert_eq!(clamp_ramp_weeks(48, 52), 48);
        assert_eq!(clamp_ramp_weeks(52, 52), 52);
        assert_eq!(clamp_ramp_weeks(240, 52), 52);
    }
}
