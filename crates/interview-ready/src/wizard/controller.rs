use super::{Step, WizardError, WizardEvent, WizardState};
use crate::config::WizardConfig;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

/// Owns the live [`WizardState`] plus the cosmetic pace timer.
#[derive(Debug, Clone)]
pub struct WizardController {
    state: WizardState,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    pace_warning_secs: i64,
}

impl WizardController {
    pub fn new(config: &WizardConfig) -> Self {
        Self {
            state: WizardState::default(),
            started_at: None,
            finished_at: None,
            pace_warning_secs: i64::try_from(config.pace_warning_secs).unwrap_or(i64::MAX),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Applies `event` at instant `now`. On error the current state is kept.
    pub fn dispatch(
        &mut self,
        event: WizardEvent,
        now: DateTime<Utc>,
    ) -> Result<&WizardState, WizardError> {
        let from = self.state.step();
        let next = match self.state.apply(event.clone()) {
            Ok(next) => next,
            Err(err) => {
                debug!(step = %from, error = %err, "wizard event rejected");
                return Err(err);
            }
        };

        match event {
            WizardEvent::Start => {
                self.started_at = Some(now);
                self.finished_at = None;
            }
            WizardEvent::Restart => {
                self.started_at = None;
                self.finished_at = None;
            }
            _ => {}
        }

        let to = next.step();
        if from != to {
            debug!(from = %from, to = %to, "wizard transition");
        }
        if to == Step::Results && from != Step::Results {
            self.finished_at = Some(now);
            if let Some(result) = next.results() {
                info!(
                    overall_score = result.overall_score,
                    readiness = result.readiness_level.label(),
                    elapsed_secs = self.elapsed(now).num_seconds(),
                    "assessment scored"
                );
            }
        }

        self.state = next;
        Ok(&self.state)
    }

    /// Time spent on the questions; frozen once results are shown.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        match self.started_at {
            Some(started) => {
                let end = self.finished_at.unwrap_or(now);
                (end - started).max(Duration::zero())
            }
            None => Duration::zero(),
        }
    }

    pub fn pace_warning(&self, now: DateTime<Utc>) -> bool {
        self.elapsed(now).num_seconds() > self.pace_warning_secs
    }
}

/// Formats a duration as `m:ss`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.num_seconds().max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
