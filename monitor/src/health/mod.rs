//! Health evaluation module
//!
//! This module turns a round of height samples into the published
//! GOOD/BAD signal.

pub mod consensus;
pub mod evaluator;
pub mod status;
pub mod types;

pub use consensus::{aggregate, RoundSummary};
pub use evaluator::{assess, evaluate, Assessment};
pub use status::{SharedStatus, StatusSnapshot};
pub use types::{HealthStatus, HeightSample, NodeAddress, Observation, PeerSet, SampleOutcome};
