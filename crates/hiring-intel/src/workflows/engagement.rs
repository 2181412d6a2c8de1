//! Post-offer engagement and drop-off risk.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::validation::ValidationError;

/// Upper bound of the interaction counter (emails, calls, replies).
pub const MAX_INTERACTIONS: u8 = 5;
/// Fewer interactions than this flag a high drop-off risk.
pub const HEALTHY_INTERACTION_FLOOR: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropOffRisk {
    High,
    Healthy,
}

impl DropOffRisk {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Drop-Off Risk Detected",
            Self::Healthy => "Candidate Engagement is Healthy",
        }
    }

    pub const fn recommended_action(self) -> Option<&'static str> {
        match self {
            Self::High => Some("Immediate recruiter follow-up"),
            Self::Healthy => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementOutcome {
    pub interactions: u8,
    pub risk: DropOffRisk,
}

/// Narrow an untrusted count (e.g. from a JSON body) into the slider range.
pub fn interactions_from(raw: i64) -> Result<u8, ValidationError> {
    u8::try_from(raw)
        .ok()
        .filter(|count| *count <= MAX_INTERACTIONS)
        .ok_or(ValidationError::OutOfRange {
            field: "interactions",
            min: 0,
            max: i64::from(MAX_INTERACTIONS),
            actual: raw,
        })
}

pub fn assess_engagement(interactions: u8) -> Result<EngagementOutcome, ValidationError> {
    let interactions = interactions_from(i64::from(interactions))?;

    let risk = if interactions < HEALTHY_INTERACTION_FLOOR {
        DropOffRisk::High
    } else {
        DropOffRisk::Healthy
    };

    debug!(interactions, risk = risk.label(), "assessed candidate engagement");

    Ok(EngagementOutcome { interactions, risk })
}
