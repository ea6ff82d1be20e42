/// Decimal precision for display values
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Budget utilization percentage at or above which a budget is flagged
pub const OVER_BUDGET_THRESHOLD_PCT: u32 = 90;

/// Number of weekly cash-flow buckets retained by default
pub const DEFAULT_CASH_FLOW_WEEKS: usize = 7;

/// Sentinel classification marking a holding as untracked
pub const CLASSIFICATION_NONE: &str = "none";

/// Case-insensitive keyword identifying the emergency-fund goal
pub const EMERGENCY_GOAL_KEYWORD: &str = "emergency";

/// Ceiling of the savings sub-score
pub const SAVINGS_SCORE_MAX: i32 = 30;

/// Ceiling of the debt sub-score
pub const DEBT_SCORE_MAX: i32 = 25;

/// Ceiling of the emergency-fund sub-score
pub const EMERGENCY_SCORE_MAX: i32 = 25;

/// Ceiling of the investment-diversification sub-score
pub const DIVERSIFICATION_SCORE_MAX: i32 = 20;

/// Ceiling of the composite health score
pub const HEALTH_SCORE_MAX: i32 = 100;
