use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a preference or destination record fails domain validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("malformed budget range '{0}': expected \"min-max\"")]
    MalformedBudget(String),

    #[error("invalid budget range: lower bound {min} exceeds upper bound {max}")]
    InvertedBudget { min: u32, max: u32 },

    #[error("budget range upper bound must be positive")]
    EmptyBudget,

    #[error("{field} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("destination name must not be empty")]
    EmptyName,
}

/// Acceptable monthly cost range, e.g. "2000-3000"
///
/// The wire format is a single "min-max" string (en dash also accepted);
/// parsing rejects malformed and inverted ranges at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
}

impl BudgetRange {
    pub fn new(min: u32, max: u32) -> Result<Self, ValidationError> {
        if max == 0 {
            return Err(ValidationError::EmptyBudget);
        }
        if min > max {
            return Err(ValidationError::InvertedBudget { min, max });
        }
        Ok(Self { min, max })
    }
}

impl FromStr for BudgetRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lo, hi) = s
            .split_once(['-', '\u{2013}'])
            .ok_or_else(|| ValidationError::MalformedBudget(s.to_string()))?;

        let min = lo
            .trim()
            .parse()
            .map_err(|_| ValidationError::MalformedBudget(s.to_string()))?;
        let max = hi
            .trim()
            .parse()
            .map_err(|_| ValidationError::MalformedBudget(s.to_string()))?;

        Self::new(min, max)
    }
}

impl TryFrom<String> for BudgetRange {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<BudgetRange> for String {
    fn from(range: BudgetRange) -> Self {
        range.to_string()
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Climate vocabulary shared by preferences and destinations
///
/// Labels outside the vocabulary deserialize to `Unknown`, which never
/// matches anything (including itself) but is not a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Climate {
    Mediterranean,
    Tropical,
    Temperate,
    Continental,
    Arid,
    Oceanic,
    #[serde(other)]
    Unknown,
}

impl Climate {
    /// Whether two labels count as a climate match
    pub fn matches(self, other: Climate) -> bool {
        self != Climate::Unknown && self == other
    }
}

/// User relocation preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    pub budget: BudgetRange,
    #[serde(rename = "climatePreference")]
    pub climate_preference: Climate,
    #[serde(rename = "healthcareImportance")]
    pub healthcare_importance: u8,
    #[serde(rename = "lgbtqFriendly")]
    pub lgbtq_friendly: bool,
    #[serde(rename = "safetyImportance")]
    pub safety_importance: u8,
}

impl Preferences {
    /// Check every field against its declared domain
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range("healthcareImportance", self.healthcare_importance, 0, 10)?;
        check_range("safetyImportance", self.safety_importance, 0, 10)?;
        BudgetRange::new(self.budget.min, self.budget.max)?;
        Ok(())
    }
}

/// Destination healthcare attributes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Healthcare {
    pub quality: u8,
    pub cost: u8,
}

/// Candidate destination with measurable attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    #[serde(rename = "costOfLiving")]
    pub cost_of_living: u8,
    pub climate: Climate,
    pub healthcare: Healthcare,
    pub safety: u8,
    #[serde(rename = "lgbtqFriendly")]
    pub lgbtq_friendly: u8,
}

impl Destination {
    /// Check every field against its declared domain
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        check_range("costOfLiving", self.cost_of_living, 1, 5)?;
        check_range("healthcare.quality", self.healthcare.quality, 0, 10)?;
        check_range("healthcare.cost", self.healthcare.cost, 1, 5)?;
        check_range("safety", self.safety, 0, 10)?;
        check_range("lgbtqFriendly", self.lgbtq_friendly, 0, 10)?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: u8, min: u8, max: u8) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value: u32::from(value),
            min: u32::from(min),
            max: u32::from(max),
        });
    }
    Ok(())
}

/// Per-criterion sub-scores (each 0.0-1.0) behind a match score
///
/// `lgbtq` is absent when the preference flag is unset: the criterion is
/// excluded from aggregation rather than scored at zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub budget: f64,
    pub climate: f64,
    pub healthcare: f64,
    pub safety: f64,
    pub lgbtq: Option<f64>,
}

/// Scored ranking entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredDestination {
    pub name: String,
    #[serde(rename = "costOfLiving")]
    pub cost_of_living: u8,
    pub climate: Climate,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Base criterion weights
///
/// Budget and climate are fixed-weight criteria. Healthcare and safety carry
/// a user-supplied 0-10 importance that scales their base weight before
/// aggregation, and lgbtq participates only when the preference flag is set.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub budget: f64,
    pub climate: f64,
    pub healthcare: f64,
    pub safety: f64,
    pub lgbtq: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            budget: 0.25,
            climate: 0.25,
            healthcare: 0.25,
            safety: 0.25,
            lgbtq: 0.15,
        }
    }
}
