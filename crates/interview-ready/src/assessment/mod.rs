//! Interview readiness scoring.
//!
//! Four category rubrics (technical, resume, communication, portfolio) turn a
//! set of [`Answers`] into category scores, which are combined into a
//! weighted overall score, a readiness tier, and a four-week plan built from
//! the recommended actions.

mod aggregate;
mod answers;
pub mod catalog;
mod domain;
mod plan;
mod rules;

#[cfg(test)]
mod tests;

pub use aggregate::{calculate_results, time_to_ready, HIGHLIGHT_LIMIT};
pub use answers::{AnswerEdit, AnswerError, Answers, ProjectCount, Rating};
pub use catalog::SkillCatalog;
pub use domain::{
    ActionItem, AssessmentResult, Category, CategoryScore, Priority, ReadinessTier, ScoreLevel,
    WeeklyPlan, MAX_SCORE,
};
