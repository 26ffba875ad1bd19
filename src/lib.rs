// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod effects;
pub mod engine;
pub mod errors;
pub mod io;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    Assessment, Benchmark, BusinessPriority, FinancialInputs, HeadlineBenefits, MaturityScore,
    Phase, Pillar, PriorityRanking, ReferenceData, Roadmap, RoiResult, Technology, TechnologyId,
    TimeUnit,
};

pub use crate::config::{RoiConfig, TechmapConfig};

pub use crate::engine::{calculate_roi, explain_ranking, plan, RankedPillar};

pub use crate::errors::{Error, ErrorCode, Result};

pub use crate::io::input::AssessmentRecord;
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, PlanReport};

pub use crate::validation::{check_completeness, parse_assessment, validate_assessment};
