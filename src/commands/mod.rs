//! CLI command implementations.
//!
//! - **plan**: build the roadmap and ROI estimate and write a report
//! - **validate**: report every problem in an assessment without computing
//! - **init**: write a default `.techmap.toml`

pub mod init;
pub mod plan;
pub mod validate;

pub use init::init_config;
pub use plan::{handle_plan, PlanConfig};
pub use validate::{validate_file, ValidateConfig, ValidationDetails};
