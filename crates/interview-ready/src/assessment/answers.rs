use serde::{Deserialize, Serialize};

use super::catalog::{is_known_framework, is_known_language};
use super::domain::Category;

/// Input validation failures raised at the answer boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("rating {value} is outside the {min}-{max} scale", min = Rating::MIN, max = Rating::MAX)]
    RatingOutOfRange { value: u8 },
    #[error("project count {value} is outside 0-{max}", max = ProjectCount::MAX)]
    ProjectCountOutOfRange { value: u8 },
    #[error("unknown programming language '{0}'")]
    UnknownLanguage(String),
    #[error("unknown framework '{0}'")]
    UnknownFramework(String),
    #[error("'{0}' is selected more than once")]
    DuplicateSelection(String),
}

/// Self-rating on the fixed 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, AnswerError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AnswerError::RatingOutOfRange { value })
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = AnswerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// Number of showcase projects; 5 stands for "5 or more".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ProjectCount(u8);

impl ProjectCount {
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, AnswerError> {
        if value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(AnswerError::ProjectCountOutOfRange { value })
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ProjectCount {
    type Error = AnswerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectCount> for u8 {
    fn from(value: ProjectCount) -> Self {
        value.0
    }
}

/// Questionnaire answers. Missing fields deserialize to the wizard defaults;
/// unrecognised keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Answers {
    pub programming_languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub dsa_level: Rating,
    pub system_design: Rating,

    pub has_resume: bool,
    pub resume_quality: Rating,
    pub has_quantified_achievements: bool,
    pub has_relevant_experience: bool,
    pub is_one_page: bool,

    pub communication_confidence: Rating,
    pub can_explain_projects: bool,
    pub has_prepped_stories: bool,
    pub behavioral_ready: bool,

    pub has_portfolio: bool,
    pub has_github: bool,
    pub github_activity: Rating,
    pub project_count: ProjectCount,
    pub has_linkedin: bool,
}

impl Default for Answers {
    fn default() -> Self {
        Self {
            programming_languages: Vec::new(),
            frameworks: Vec::new(),
            dsa_level: Rating(3),
            system_design: Rating(2),
            has_resume: true,
            resume_quality: Rating(3),
            has_quantified_achievements: false,
            has_relevant_experience: false,
            is_one_page: true,
            communication_confidence: Rating(3),
            can_explain_projects: false,
            has_prepped_stories: false,
            behavioral_ready: false,
            has_portfolio: false,
            has_github: true,
            github_activity: Rating(2),
            project_count: ProjectCount(2),
            has_linkedin: true,
        }
    }
}

impl Answers {
    /// Checks the selections against the skill catalog. Ratings are already
    /// range-checked by their types.
    pub fn validate(&self) -> Result<(), AnswerError> {
        check_selection(&self.programming_languages, is_known_language, |name| {
            AnswerError::UnknownLanguage(name.to_string())
        })?;
        check_selection(&self.frameworks, is_known_framework, |name| {
            AnswerError::UnknownFramework(name.to_string())
        })
    }

    /// Applies a single field edit, rejecting values outside the field's domain.
    pub fn apply(&mut self, edit: &AnswerEdit) -> Result<(), AnswerError> {
        match edit {
            AnswerEdit::ToggleLanguage(name) => {
                if !is_known_language(name) {
                    return Err(AnswerError::UnknownLanguage(name.clone()));
                }
                toggle(&mut self.programming_languages, name);
            }
            AnswerEdit::ToggleFramework(name) => {
                if !is_known_framework(name) {
                    return Err(AnswerError::UnknownFramework(name.clone()));
                }
                toggle(&mut self.frameworks, name);
            }
            AnswerEdit::DsaLevel(value) => self.dsa_level = Rating::new(*value)?,
            AnswerEdit::SystemDesign(value) => self.system_design = Rating::new(*value)?,
            AnswerEdit::HasResume(value) => self.has_resume = *value,
            AnswerEdit::ResumeQuality(value) => self.resume_quality = Rating::new(*value)?,
            AnswerEdit::QuantifiedAchievements(value) => self.has_quantified_achievements = *value,
            AnswerEdit::RelevantExperience(value) => self.has_relevant_experience = *value,
            AnswerEdit::OnePage(value) => self.is_one_page = *value,
            AnswerEdit::CommunicationConfidence(value) => {
                self.communication_confidence = Rating::new(*value)?
            }
            AnswerEdit::CanExplainProjects(value) => self.can_explain_projects = *value,
            AnswerEdit::PreppedStories(value) => self.has_prepped_stories = *value,
            AnswerEdit::BehavioralReady(value) => self.behavioral_ready = *value,
            AnswerEdit::HasPortfolio(value) => self.has_portfolio = *value,
            AnswerEdit::HasGithub(value) => self.has_github = *value,
            AnswerEdit::GithubActivity(value) => self.github_activity = Rating::new(*value)?,
            AnswerEdit::ProjectCount(value) => self.project_count = ProjectCount::new(*value)?,
            AnswerEdit::HasLinkedIn(value) => self.has_linkedin = *value,
        }
        Ok(())
    }
}

fn check_selection(
    selected: &[String],
    known: fn(&str) -> bool,
    unknown: impl Fn(&str) -> AnswerError,
) -> Result<(), AnswerError> {
    for (index, name) in selected.iter().enumerate() {
        if !known(name) {
            return Err(unknown(name));
        }
        if selected[..index].contains(name) {
            return Err(AnswerError::DuplicateSelection(name.clone()));
        }
    }
    Ok(())
}

fn toggle(selected: &mut Vec<String>, name: &str) {
    if let Some(position) = selected.iter().position(|item| item == name) {
        selected.remove(position);
    } else {
        selected.push(name.to_string());
    }
}

/// Field-level edit issued by a questionnaire screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerEdit {
    ToggleLanguage(String),
    ToggleFramework(String),
    DsaLevel(u8),
    SystemDesign(u8),
    HasResume(bool),
    ResumeQuality(u8),
    QuantifiedAchievements(bool),
    RelevantExperience(bool),
    OnePage(bool),
    CommunicationConfidence(u8),
    CanExplainProjects(bool),
    PreppedStories(bool),
    BehavioralReady(bool),
    HasPortfolio(bool),
    HasGithub(bool),
    GithubActivity(u8),
    ProjectCount(u8),
    HasLinkedIn(bool),
}

impl AnswerEdit {
    /// Category whose screen owns the edited field.
    pub const fn category(&self) -> Category {
        match self {
            Self::ToggleLanguage(_)
            | Self::ToggleFramework(_)
            | Self::DsaLevel(_)
            | Self::SystemDesign(_) => Category::Technical,
            Self::HasResume(_)
            | Self::ResumeQuality(_)
            | Self::QuantifiedAchievements(_)
            | Self::RelevantExperience(_)
            | Self::OnePage(_) => Category::Resume,
            Self::CommunicationConfidence(_)
            | Self::CanExplainProjects(_)
            | Self::PreppedStories(_)
            | Self::BehavioralReady(_) => Category::Communication,
            Self::HasPortfolio(_)
            | Self::HasGithub(_)
            | Self::GithubActivity(_)
            | Self::ProjectCount(_)
            | Self::HasLinkedIn(_) => Category::Portfolio,
        }
    }

    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::ToggleLanguage(_) => "programming_languages",
            Self::ToggleFramework(_) => "frameworks",
            Self::DsaLevel(_) => "dsa_level",
            Self::SystemDesign(_) => "system_design",
            Self::HasResume(_) => "has_resume",
            Self::ResumeQuality(_) => "resume_quality",
            Self::QuantifiedAchievements(_) => "has_quantified_achievements",
            Self::RelevantExperience(_) => "has_relevant_experience",
            Self::OnePage(_) => "is_one_page",
            Self::CommunicationConfidence(_) => "communication_confidence",
            Self::CanExplainProjects(_) => "can_explain_projects",
            Self::PreppedStories(_) => "has_prepped_stories",
            Self::BehavioralReady(_) => "behavioral_ready",
            Self::HasPortfolio(_) => "has_portfolio",
            Self::HasGithub(_) => "has_github",
            Self::GithubActivity(_) => "github_activity",
            Self::ProjectCount(_) => "project_count",
            Self::HasLinkedIn(_) => "has_linkedin",
        }
    }
}
