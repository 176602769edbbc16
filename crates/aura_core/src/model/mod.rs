mod costs;
mod dimensions;
mod industry;
mod maturity;
mod results;
mod risk;
mod task;

pub use costs::CostStructure;
pub use dimensions::{LatencyConfig, OptionalityConfig, ThroughputConfig};
pub use industry::Industry;
pub use maturity::{MAX_MATURITY_MULTIPLIER, MaturityConfig, MaturityStage};
pub use results::{AuraResults, MonthlyProjection, ResultSummary, ValueBreakdown};
pub use risk::RiskProfile;
pub use task::{Task, WEEKS_PER_MONTH};
