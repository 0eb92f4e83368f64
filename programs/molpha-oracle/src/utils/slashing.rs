use super::aggregation::deviation_bps;
use crate::state::Submission;
use anchor_lang::prelude::*;

/// Outcome of checking one submission against the round median.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub reporter: Pubkey,
    pub value: u64,
    pub deviation_bps: u64,
    pub slashed: bool,
}

impl Verdict {
    pub fn is_honest(&self) -> bool {
        !self.slashed
    }
}

/// Classifies every submission of a round. The policy is binary: anything
/// strictly beyond `threshold_bps` is slashed by the same percentage,
/// whatever its magnitude.
pub fn assess(submissions: &[Submission], median: u64, threshold_bps: u16) -> Vec<Verdict> {
    submissions
        .iter()
        .map(|s| {
            let deviation_bps = deviation_bps(s.value, median);
            Verdict {
                reporter: s.reporter,
                value: s.value,
                deviation_bps,
                slashed: deviation_bps > u64::from(threshold_bps),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(n: u8, value: u64) -> Submission {
        Submission {
            reporter: Pubkey::new_from_array([n; 32]),
            value,
            slot: 0,
        }
    }

    #[test]
    fn only_submissions_beyond_threshold_are_slashed() {
        let subs = [submission(1, 100), submission(2, 102), submission(3, 150)];
        let verdicts = assess(&subs, 102, 500);

        assert_eq!(
            verdicts.iter().map(|v| v.slashed).collect::<Vec<_>>(),
            vec![false, false, true]
        );
        assert_eq!(verdicts[1].deviation_bps, 0);
    }

    #[test]
    fn threshold_is_inclusive_for_honest_reporters() {
        // 105 is exactly 500 bps away from 100.
        let subs = [submission(1, 105), submission(2, 95), submission(3, 106)];
        let verdicts = assess(&subs, 100, 500);

        assert!(verdicts[0].is_honest());
        assert!(verdicts[1].is_honest());
        assert!(verdicts[2].slashed);
    }

    #[test]
    fn zero_median_slashes_every_nonzero_value() {
        let subs = [submission(1, 0), submission(2, 0), submission(3, 1)];
        let verdicts = assess(&subs, 0, 9_999);

        assert!(verdicts[0].is_honest());
        assert!(verdicts[1].is_honest());
        assert!(verdicts[2].slashed);

        // A full-range threshold tolerates anything at a zero median.
        assert!(assess(&subs, 0, 10_000).iter().all(Verdict::is_honest));
    }
}
