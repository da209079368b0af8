use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Destination, Preferences};

/// Request to score a single destination against a user's preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub preferences: Preferences,
    pub destination: Destination,
}

/// Request to rank a list of candidate destinations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    pub preferences: Preferences,
    #[validate(length(min = 1, message = "at least one destination is required"))]
    pub destinations: Vec<Destination>,
}
