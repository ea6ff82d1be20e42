//! Health score domain models.
//!
//! The composite score is the sum of four independently clamped sub-scores
//! (savings, debt, emergency fund, diversification). Each sub-score and
//! the composite carry a qualitative band derived from fixed thresholds.

use serde::{Deserialize, Serialize};

// =============================================================================
// Bands
// =============================================================================

/// Qualitative band for a single sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreBand {
    Good,
    Moderate,
    NeedsAttention,
}

impl ScoreBand {
    /// Returns the string representation of this band.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Good => "GOOD",
            ScoreBand::Moderate => "MODERATE",
            ScoreBand::NeedsAttention => "NEEDS_ATTENTION",
        }
    }

    /// Derives a band from a score against inclusive lower thresholds.
    pub fn from_thresholds(score: i32, good_min: i32, moderate_min: i32) -> Self {
        if score >= good_min {
            ScoreBand::Good
        } else if score >= moderate_min {
            ScoreBand::Moderate
        } else {
            ScoreBand::NeedsAttention
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Qualitative band for the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallBand {
    GoodStanding,
    Fair,
    NeedsImprovement,
}

impl OverallBand {
    /// Returns a human-friendly label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            OverallBand::GoodStanding => "Good Standing",
            OverallBand::Fair => "Fair",
            OverallBand::NeedsImprovement => "Needs Improvement",
        }
    }
}

// =============================================================================
// Scores
// =============================================================================

/// One scored factor of financial health.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscore {
    /// Factor name, e.g. "Savings"
    pub label: String,
    /// Points awarded, always within [0, max]
    pub score: i32,
    /// Ceiling for this factor
    pub max: i32,
    pub band: ScoreBand,
}

/// Composite health score with its factor breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthScore {
    /// Sum of sub-scores, within [0, max]
    pub total: i32,
    pub max: i32,
    pub band: OverallBand,
    pub subscores: Vec<Subscore>,
}

/// Result of a health-score computation.
///
/// `NoData` is reported when no accounts were supplied: an absent input
/// must not masquerade as a zero score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", content = "score", rename_all = "camelCase")]
pub enum HealthReport {
    NoData,
    Scored(HealthScore),
}

impl HealthReport {
    /// Convenience accessor for the scored variant.
    pub fn score(&self) -> Option<&HealthScore> {
        match self {
            HealthReport::Scored(score) => Some(score),
            HealthReport::NoData => None,
        }
    }
}
