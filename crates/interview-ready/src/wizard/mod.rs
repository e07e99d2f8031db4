//! Linear questionnaire flow.
//!
//! `welcome → technical → resume → communication → portfolio → results`,
//! moving one screen at a time. Each transition produces a new
//! [`WizardState`]; the [`WizardController`] owns the current one.

mod controller;

pub use controller::{format_elapsed, WizardController};

use crate::assessment::{calculate_results, AnswerEdit, AnswerError, Answers, AssessmentResult, Category};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Welcome,
    Technical,
    Resume,
    Communication,
    Portfolio,
    Results,
}

impl Step {
    /// Question screens in the order they are visited.
    pub const QUESTIONS: [Self; 4] = [
        Self::Technical,
        Self::Resume,
        Self::Communication,
        Self::Portfolio,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Technical => "Technical Skills",
            Self::Resume => "Resume",
            Self::Communication => "Communication",
            Self::Portfolio => "Portfolio",
            Self::Results => "Results",
        }
    }

    /// Category whose answers this screen collects.
    pub const fn category(self) -> Option<Category> {
        match self {
            Self::Technical => Some(Category::Technical),
            Self::Resume => Some(Category::Resume),
            Self::Communication => Some(Category::Communication),
            Self::Portfolio => Some(Category::Portfolio),
            Self::Welcome | Self::Results => None,
        }
    }

    /// Zero-based position among the question screens.
    pub fn question_index(self) -> Option<usize> {
        Self::QUESTIONS.iter().position(|step| *step == self)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Start,
    Next,
    Back,
    Restart,
    Edit(AnswerEdit),
}

impl WizardEvent {
    const fn action(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Next => "advance",
            Self::Back => "go back",
            Self::Restart => "restart",
            Self::Edit(_) => "edit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("cannot {action} from the {step} step")]
    InvalidTransition { step: Step, action: &'static str },
    #[error("{field} is not editable on the {step} step")]
    FieldNotOnScreen { field: &'static str, step: Step },
    #[error(transparent)]
    Answer(#[from] AnswerError),
}

/// Snapshot of the wizard: the active screen, the answers so far, and the
/// scoring output once the last screen has been submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardState {
    step: Step,
    answers: Answers,
    results: Option<AssessmentResult>,
}

impl WizardState {
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn results(&self) -> Option<&AssessmentResult> {
        self.results.as_ref()
    }

    /// Computes the state that follows `event`, leaving `self` untouched.
    pub fn apply(&self, event: WizardEvent) -> Result<Self, WizardError> {
        let invalid = |event: &WizardEvent| WizardError::InvalidTransition {
            step: self.step,
            action: event.action(),
        };

        match (&event, self.step) {
            (WizardEvent::Restart, _) => Ok(Self::default()),
            (WizardEvent::Start, Step::Welcome) => Ok(self.moved_to(Step::Technical)),
            (WizardEvent::Next, Step::Technical) => Ok(self.moved_to(Step::Resume)),
            (WizardEvent::Next, Step::Resume) => Ok(self.moved_to(Step::Communication)),
            (WizardEvent::Next, Step::Communication) => Ok(self.moved_to(Step::Portfolio)),
            (WizardEvent::Next, Step::Portfolio) => Ok(Self {
                step: Step::Results,
                answers: self.answers.clone(),
                results: Some(calculate_results(&self.answers)),
            }),
            (WizardEvent::Back, Step::Technical) => Ok(self.clone()),
            (WizardEvent::Back, Step::Resume) => Ok(self.moved_to(Step::Technical)),
            (WizardEvent::Back, Step::Communication) => Ok(self.moved_to(Step::Resume)),
            (WizardEvent::Back, Step::Portfolio) => Ok(self.moved_to(Step::Communication)),
            (WizardEvent::Edit(edit), step) => {
                if step.category() != Some(edit.category()) {
                    return Err(WizardError::FieldNotOnScreen {
                        field: edit.field_name(),
                        step,
                    });
                }
                let mut answers = self.answers.clone();
                answers.apply(edit)?;
                Ok(Self {
                    step,
                    answers,
                    results: None,
                })
            }
            (event, _) => Err(invalid(event)),
        }
    }

    fn moved_to(&self, step: Step) -> Self {
        Self {
            step,
            answers: self.answers.clone(),
            results: None,
        }
    }
}
