// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BudgetRange, Climate, Destination, Healthcare, Preferences, ScoreBreakdown, ScoredDestination,
    ScoringWeights, ValidationError,
};
pub use requests::{RankRequest, ScoreRequest};
pub use responses::{ErrorResponse, HealthResponse, RankResponse, ScoreResponse};
