//! Domain types shared by the engine, validation, and output layers.

pub mod assessment;
pub mod reference;
pub mod results;

pub use assessment::{
    Assessment, BusinessPriority, FinancialInputs, MaturityScore, Pillar, PriorityRanking,
    TimeUnit, MAX_MATURITY, MIN_MATURITY,
};
pub use reference::{
    find_benchmark, Benchmark, PillarField, ReferenceData, Technology, TechnologyId,
    DOWNTIME_CATEGORY, ENERGY_CATEGORY, SCRAP_CATEGORY,
};
pub use results::{
    HeadlineBenefits, ImprovementPercentages, MonetaryBenefits, Phase, Roadmap, RoiResult,
};
