use crate::models::BudgetRange;

/// Monthly cost bands for cost-of-living tiers 1-5, in dollars
///
/// Band i covers [lower, upper); the top band is open-ended.
const TIER_COST_BANDS: [(u32, u32); 5] = [
    (0, 1500),
    (1500, 2500),
    (2500, 3500),
    (3500, 5000),
    (5000, u32::MAX),
];

/// Decay constant for budgets outside the affordable tier range
const BUDGET_DECAY: f64 = 1.5;

/// Map a monthly dollar amount to its cost-of-living tier (1-5)
#[inline]
pub fn tier_for_amount(amount: u32) -> u8 {
    for (i, (lower, upper)) in TIER_COST_BANDS.iter().enumerate() {
        if amount >= *lower && amount < *upper {
            return (i + 1) as u8;
        }
    }
    TIER_COST_BANDS.len() as u8
}

/// Map a budget range to the (lowest, highest) tier it can afford
pub fn affordable_tiers(budget: &BudgetRange) -> (u8, u8) {
    (tier_for_amount(budget.min), tier_for_amount(budget.max))
}

/// Calculate budget fit (0-1)
///
/// Full credit when the destination's cost tier falls inside the affordable
/// range, exponentially decaying credit per tier of gap outside it. The decay
/// keeps near-miss destinations competitive instead of dropping off a cliff.
#[inline]
pub fn budget_fit_score(cost_tier: u8, budget: &BudgetRange) -> f64 {
    let (min_tier, max_tier) = affordable_tiers(budget);

    if cost_tier >= min_tier && cost_tier <= max_tier {
        return 1.0;
    }

    let gap = if cost_tier < min_tier {
        min_tier - cost_tier
    } else {
        cost_tier - max_tier
    };

    (-f64::from(gap) / BUDGET_DECAY).exp()
}
