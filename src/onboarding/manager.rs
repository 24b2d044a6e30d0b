//! OnboardingFlow — drives navigation, validation gating, and commits.
//!
//! Owns the form, the wizard position, and the backend handle. Backend
//! failures are never fatal: they become notices and leave both the
//! position and the form untouched, so the user can retry or go back.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::FlowError;

use super::controller::{FlowPhase, FlowPosition, Step, StepAction};
use super::form::FormState;
use super::gateway::{CampaignBackend, CampaignRequest, ProfileRequest};
use super::validate;

/// Where the browser is sent after the campaign is created.
pub const DASHBOARD_REDIRECT: &str = "/dashboard";

/// Severity of a user-visible notice (the toast analog).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A user-visible notification raised by the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// The stateful onboarding wizard.
pub struct OnboardingFlow {
    id: Uuid,
    backend: Arc<dyn CampaignBackend>,
    form: FormState,
    position: FlowPosition,
    submitting: bool,
    completed: bool,
    redirect: Option<String>,
    notices: Vec<Notice>,
    viewport_reset: bool,
    profile_committed_at: Option<DateTime<Utc>>,
    campaign_committed_at: Option<DateTime<Utc>>,
}

impl OnboardingFlow {
    pub fn new(backend: Arc<dyn CampaignBackend>) -> Self {
        Self {
            id: Uuid::new_v4(),
            backend,
            form: FormState::new(),
            position: FlowPosition::START,
            submitting: false,
            completed: false,
            redirect: None,
            notices: Vec::new(),
            viewport_reset: true,
            profile_committed_at: None,
            campaign_committed_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Mutable access for the active step's input handlers. Each step
    /// writes only to its own field subset.
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn position(&self) -> FlowPosition {
        self.position
    }

    pub fn current_step(&self) -> Step {
        self.position.current_step()
    }

    /// The "can advance" gate: the active step's validity predicate,
    /// recomputed from the form on every call.
    pub fn can_advance(&self) -> bool {
        validate::step_valid(self.current_step(), &self.form)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Redirect target, set once the campaign commit succeeds.
    pub fn redirect(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    pub fn profile_committed_at(&self) -> Option<DateTime<Utc>> {
        self.profile_committed_at
    }

    pub fn campaign_committed_at(&self) -> Option<DateTime<Utc>> {
        self.campaign_committed_at
    }

    /// Notices raised since the last drain.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Take all pending notices, leaving the log empty.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// True once after every step entry; the renderer uses it to reset
    /// its viewport to the top.
    pub fn take_viewport_reset(&mut self) -> bool {
        std::mem::take(&mut self.viewport_reset)
    }

    /// Advance to the next step. Returns whether the position moved.
    ///
    /// Refused while the current step is invalid, on the phase-terminal
    /// steps (their affordance is a submit action), and after completion.
    pub fn next(&mut self) -> bool {
        if self.completed || self.submitting {
            return false;
        }
        if self.current_step().action() != StepAction::Next {
            return false;
        }
        if !self.can_advance() {
            return false;
        }
        self.enter(self.position.next())
    }

    /// Go back one step. Returns whether the position moved.
    pub fn back(&mut self) -> bool {
        if self.completed || self.submitting {
            return false;
        }
        self.enter(self.position.back())
    }

    fn enter(&mut self, target: FlowPosition) -> bool {
        if target == self.position {
            return false;
        }
        self.position = target;
        self.viewport_reset = true;
        true
    }

    /// Commit the profile slice. On success the flow crosses into the
    /// campaign phase; on failure it stays put with an error notice.
    ///
    /// Returns `Ok(true)` if the profile was created, `Ok(false)` if the
    /// backend refused and a notice was raised. `Err` only for misuse.
    pub async fn submit_profile(&mut self) -> Result<bool, FlowError> {
        self.check_submittable(StepAction::CreateProfile, "Create Profile")?;

        let request = ProfileRequest::from_form(&self.form);
        self.submitting = true;
        let outcome = self.backend.commit_profile(&request).await;
        self.submitting = false;

        match outcome {
            Ok(()) => {
                self.profile_committed_at = Some(Utc::now());
                self.notices.push(Notice::success("Profile created"));
                self.enter(self.position.next());
                debug_assert_eq!(self.position.phase, FlowPhase::Campaign);
                tracing::info!(flow = %self.id, "profile committed");
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(flow = %self.id, error = %e, "profile commit failed");
                self.notices
                    .push(Notice::error("Could not create your profile. Please try again."));
                Ok(false)
            }
        }
    }

    /// Commit the campaign. On success the flow completes and records
    /// the dashboard redirect; on failure it stays on the terminal step
    /// with an error notice, ready for another attempt.
    pub async fn submit_campaign(&mut self) -> Result<bool, FlowError> {
        self.check_submittable(StepAction::CreateCampaign, "Create Campaign")?;

        let request = CampaignRequest::from_form(&self.form);
        self.submitting = true;
        let outcome = self.backend.commit_campaign(&request).await;
        self.submitting = false;

        match outcome {
            Ok(()) => {
                self.campaign_committed_at = Some(Utc::now());
                self.completed = true;
                self.redirect = Some(DASHBOARD_REDIRECT.to_string());
                self.notices.push(Notice::success("Campaign created"));
                tracing::info!(flow = %self.id, "campaign committed");
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(flow = %self.id, error = %e, "campaign commit failed");
                self.notices
                    .push(Notice::error("Could not create your campaign. Please try again."));
                Ok(false)
            }
        }
    }

    fn check_submittable(
        &self,
        action: StepAction,
        name: &'static str,
    ) -> Result<(), FlowError> {
        if self.completed {
            return Err(FlowError::Completed);
        }
        if self.submitting {
            return Err(FlowError::SubmissionPending);
        }
        if self.current_step().action() != action {
            return Err(FlowError::WrongStep {
                action: name,
                step: self.current_step().id(),
            });
        }
        Ok(())
    }
}
