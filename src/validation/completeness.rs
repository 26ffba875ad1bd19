//! Completeness of an otherwise valid assessment.
//!
//! The intake form refuses to submit until every pillar is rated and a
//! ranking exists. The engine copes with partial input, so this is only
//! reported, never enforced, unless the caller asks for strict mode.

use crate::core::{Assessment, Pillar};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssessmentCompleteness {
    pub missing_pillars: Vec<Pillar>,
    pub ranking_empty: bool,
}

impl AssessmentCompleteness {
    pub fn is_complete(&self) -> bool {
        self.missing_pillars.is_empty() && !self.ranking_empty
    }

    /// One line per gap, suitable for printing as warnings.
    pub fn describe(&self) -> Vec<String> {
        let mut notes: Vec<String> = self
            .missing_pillars
            .iter()
            .map(|p| format!("maturity.{p}: pillar '{}' has not been rated", p.title()))
            .collect();
        if self.ranking_empty {
            notes.push("priorities.ranking: no business priorities were ranked".to_string());
        }
        notes
    }
}

pub fn check_completeness(assessment: &Assessment) -> AssessmentCompleteness {
    AssessmentCompleteness {
        missing_pillars: assessment.maturity.missing_pillars(),
        ranking_empty: assessment.priorities.is_empty(),
    }
}
