use serde::{Deserialize, Serialize};

/// Qualitative hiring-fit bucket derived from a 0-100 match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitTier {
    HighFit,
    ModerateFit,
    LowFit,
}

impl FitTier {
    /// Scores strictly above this are a high fit.
    pub const HIGH_FIT_ABOVE: f64 = 75.0;
    /// Scores strictly above this (and not high) are a moderate fit.
    pub const MODERATE_FIT_ABOVE: f64 = 50.0;

    /// Boundaries belong to the lower tier: 75.00 is moderate, 50.00 is low.
    pub fn from_score(score: f64) -> Self {
        if score > Self::HIGH_FIT_ABOVE {
            Self::HighFit
        } else if score > Self::MODERATE_FIT_ABOVE {
            Self::ModerateFit
        } else {
            Self::LowFit
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HighFit => "High Fit Candidate",
            Self::ModerateFit => "Moderate Fit Candidate",
            Self::LowFit => "Low Fit Candidate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_fall_into_lower_tier() {
        assert_eq!(FitTier::from_score(75.0), FitTier::ModerateFit);
        assert_eq!(FitTier::from_score(75.01), FitTier::HighFit);
        assert_eq!(FitTier::from_score(50.0), FitTier::LowFit);
        assert_eq!(FitTier::from_score(50.01), FitTier::ModerateFit);
    }

    #[test]
    fn extremes_map_to_outer_tiers() {
        assert_eq!(FitTier::from_score(100.0), FitTier::HighFit);
        assert_eq!(FitTier::from_score(0.0), FitTier::LowFit);
    }

    #[test]
    fn labels_are_user_facing() {
        assert_eq!(FitTier::HighFit.label(), "High Fit Candidate");
        assert_eq!(FitTier::LowFit.label(), "Low Fit Candidate");
    }
}
