use crate::config::defaults::{QUALITY_MAX, QUALITY_MIN};

/// One fully rebuilt output produced at a specific quality, with its
/// measured byte size.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub bytes: Vec<u8>,
    pub size: u64,
    pub quality: u8,
}

impl Candidate {
    pub fn new(bytes: Vec<u8>, quality: u8) -> Self {
        let size = bytes.len() as u64;
        Self {
            bytes,
            size,
            quality,
        }
    }
}

/// State of one quality search, advanced one probe at a time.
///
/// Mutation is monotonic: `low` only increases, `high` only decreases,
/// `iterations` only increases, and each best slot is replaced only by a
/// strictly better candidate per its comparator. Keeping the transitions
/// explicit here lets the loop in [`super::search`] be driven by any
/// builder, including the deterministic synthetic ones in the tests.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub low: u8,
    pub high: u8,
    pub iterations: u32,
    /// Largest candidate at or under the target (ties keep the earliest)
    pub best_under: Option<Candidate>,
    /// Smallest candidate over the target (ties keep the earliest)
    pub best_over: Option<Candidate>,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            low: QUALITY_MIN,
            high: QUALITY_MAX,
            iterations: 0,
            best_under: None,
            best_over: None,
        }
    }

    /// The next quality to probe, or `None` once the bounds have crossed.
    pub fn next_probe(&self) -> Option<u8> {
        (self.low <= self.high).then(|| (self.low + self.high) / 2)
    }

    /// Fold one measured candidate into the state.
    ///
    /// A feasible candidate narrows the search upward (higher quality is
    /// strictly preferable once the budget is met); an infeasible one
    /// narrows downward. Encoders are not assumed monotone in quality, so
    /// the best slots are decided by the size comparators alone, never by
    /// probe order.
    pub fn observe(&mut self, candidate: Candidate, target_bytes: u64) {
        let quality = candidate.quality;
        self.iterations += 1;

        if candidate.size <= target_bytes {
            if self
                .best_under
                .as_ref()
                .map_or(true, |best| candidate.size > best.size)
            {
                self.best_under = Some(candidate);
            }
            self.low = quality + 1;
        } else {
            if self
                .best_over
                .as_ref()
                .map_or(true, |best| candidate.size < best.size)
            {
                self.best_over = Some(candidate);
            }
            self.high = quality - 1;
        }
    }
}
