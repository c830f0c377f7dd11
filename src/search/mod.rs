//! Binary search for the highest JPEG quality that fits a size target.

pub mod select;
pub mod state;

pub use select::{resolve_output_path, select, Outcome};
pub use state::{Candidate, SearchState};

use crate::error::ReduceError;

/// Search the quality domain for the largest output at or under
/// `target_bytes`.
///
/// `build` produces one complete rebuilt document per quality probe. Probes
/// are data-dependent (each bound update needs the previous probe's measured
/// size), so the loop is strictly sequential; `max_iterations` caps the
/// number of builder invocations because every one is a full page-by-page
/// re-render.
///
/// Builder errors propagate immediately. Infeasibility is never an error:
/// a run where no probe fits the target still returns the final state, and
/// [`select`] decides what to do with it.
pub fn search<F>(
    mut build: F,
    target_bytes: u64,
    max_iterations: u32,
) -> Result<SearchState, ReduceError>
where
    F: FnMut(u8) -> Result<Candidate, ReduceError>,
{
    if target_bytes == 0 {
        return Err(ReduceError::InvalidTarget);
    }
    if max_iterations == 0 {
        return Err(ReduceError::InvalidIterationCap);
    }

    let mut state = SearchState::new();

    while state.iterations < max_iterations {
        let Some(quality) = state.next_probe() else {
            break;
        };
        let candidate = build(quality)?;
        log::info!(
            "quality {} -> {:.1} KB",
            quality,
            candidate.size as f64 / 1024.0
        );
        state.observe(candidate, target_bytes);
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{QUALITY_MAX, QUALITY_MIN};

    /// Builder with size(q) = 100*q, deterministic and strictly monotone.
    fn linear(quality: u8) -> Result<Candidate, ReduceError> {
        Ok(Candidate::new(
            vec![0u8; 100 * quality as usize],
            quality,
        ))
    }

    #[test]
    fn test_converges_to_largest_feasible_quality() {
        let state = search(linear, 5000, 20).unwrap();

        let best = state.best_under.expect("target is reachable");
        assert_eq!(best.quality, 50);
        assert_eq!(best.size, 5000);
    }

    #[test]
    fn test_best_over_is_smallest_infeasible() {
        let state = search(linear, 5000, 20).unwrap();

        // Probes above 50 overshoot; the closest overshoot wins.
        let over = state.best_over.expect("some probes overshoot");
        assert_eq!(over.quality, 51);
        assert_eq!(over.size, 5100);
    }

    #[test]
    fn test_feasibility_partition() {
        let target = 4321;
        let state = search(linear, target, 8).unwrap();

        if let Some(under) = &state.best_under {
            assert!(under.size <= target);
        }
        if let Some(over) = &state.best_over {
            assert!(over.size > target);
        }
    }

    #[test]
    fn test_iteration_cap_is_exact() {
        let mut calls = 0u32;
        let state = search(
            |q| {
                calls += 1;
                linear(q)
            },
            5000,
            3,
        )
        .unwrap();

        assert_eq!(calls, 3);
        assert_eq!(state.iterations, 3);
    }

    #[test]
    fn test_probes_stay_in_domain_and_never_repeat() {
        let mut probed = Vec::new();
        search(
            |q| {
                probed.push(q);
                linear(q)
            },
            5000,
            20,
        )
        .unwrap();

        for &q in &probed {
            assert!((QUALITY_MIN..=QUALITY_MAX).contains(&q));
        }
        let mut unique = probed.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), probed.len(), "probed {probed:?}");
    }

    #[test]
    fn test_bounds_move_monotonically() {
        let mut state = SearchState::new();
        let target = 5000;
        while let Some(q) = state.next_probe() {
            let (low, high) = (state.low, state.high);
            state.observe(linear(q).unwrap(), target);
            assert!(state.low >= low);
            assert!(state.high <= high);
        }
    }

    #[test]
    fn test_all_infeasible_keeps_globally_smallest() {
        // Every quality overshoots a 5000-byte target.
        let state = search(
            |q| Ok(Candidate::new(vec![0u8; 10_000 + q as usize], q)),
            5000,
            20,
        )
        .unwrap();

        assert!(state.best_under.is_none());
        let over = state.best_over.expect("every probe overshoots");
        assert_eq!(over.quality, QUALITY_MIN);
        assert_eq!(over.size, 10_010);
    }

    #[test]
    fn test_non_monotone_builder_keeps_comparator_best() {
        // Quality 50 unexpectedly encodes smaller than quality 49. The best
        // slot must keep the larger feasible size seen earlier rather than
        // the most recent probe.
        let state = search(
            |q| {
                let size = if q == 50 { 4000 } else { 100 * q as usize };
                Ok(Candidate::new(vec![0u8; size], q))
            },
            5000,
            20,
        )
        .unwrap();

        let best = state.best_under.expect("plenty of feasible probes");
        assert_eq!(best.quality, 49);
        assert_eq!(best.size, 4900);
    }

    #[test]
    fn test_zero_target_is_contract_violation() {
        assert!(matches!(
            search(linear, 0, 8),
            Err(ReduceError::InvalidTarget)
        ));
    }

    #[test]
    fn test_zero_iteration_cap_is_contract_violation() {
        assert!(matches!(
            search(linear, 5000, 0),
            Err(ReduceError::InvalidIterationCap)
        ));
    }

    #[test]
    fn test_builder_error_propagates() {
        let result = search(
            |_| {
                Err(ReduceError::PageRender {
                    page: 0,
                    message: "boom".into(),
                })
            },
            5000,
            8,
        );
        assert!(matches!(result, Err(ReduceError::PageRender { .. })));
    }
}
