//! Reduction of a round's samples to the network height

use serde::Serialize;

use super::types::{HeightSample, SampleOutcome};

/// Highest height among successful samples, or `None` when none succeeded.
/// Order-independent: `max` is commutative and associative.
pub fn aggregate(samples: &[HeightSample]) -> Option<u64> {
    samples
        .iter()
        .filter(|s| s.is_success())
        .filter_map(HeightSample::height)
        .max()
}

/// Outcome counts for one sampling round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub polled: usize,
    pub succeeded: usize,
    pub timed_out: usize,
    pub transport_errors: usize,
    pub parse_errors: usize,
}

impl RoundSummary {
    pub fn from_samples(samples: &[HeightSample]) -> Self {
        samples.iter().fold(
            Self {
                polled: samples.len(),
                ..Self::default()
            },
            |mut summary, sample| {
                match sample.outcome() {
                    SampleOutcome::Success => summary.succeeded += 1,
                    SampleOutcome::Timeout => summary.timed_out += 1,
                    SampleOutcome::TransportError => summary.transport_errors += 1,
                    SampleOutcome::ParseError => summary.parse_errors += 1,
                }
                summary
            },
        )
    }
}
