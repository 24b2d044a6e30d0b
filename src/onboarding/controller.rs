//! Flow controller — the two-phase wizard state machine.
//!
//! The wizard position is the tagged pair `(phase, step index)`. The
//! transition functions here are pure; gating on validity and the
//! submission side effects live in the manager.

use serde::{Deserialize, Serialize};

/// The two top-level sub-flows of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowPhase {
    Profile,
    Campaign,
}

impl std::fmt::Display for FlowPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowPhase::Profile => f.write_str("profile"),
            FlowPhase::Campaign => f.write_str("campaign"),
        }
    }
}

/// One screen within a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    RoleSelection,
    ProfileDetails,
    ProfileComplete,
    CampaignGoals,
    TargetAudience,
    ProductCategory,
    CampaignComplete,
}

/// What the primary affordance on a step does.
///
/// `Next` steps render a navigation button; the two `Create*` steps
/// render an asynchronous submit action instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    Next,
    CreateProfile,
    CreateCampaign,
}

/// Static descriptor for a step, looked up from the tagged position.
#[derive(Debug, Clone, Copy)]
pub struct StepDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub action: StepAction,
}

impl Step {
    /// Descriptor lookup table.
    pub fn descriptor(self) -> StepDescriptor {
        match self {
            Step::RoleSelection => StepDescriptor {
                id: "role-selection",
                title: "Select Your Role",
                action: StepAction::Next,
            },
            Step::ProfileDetails => StepDescriptor {
                id: "profile-details",
                title: "Profile Details",
                action: StepAction::Next,
            },
            Step::ProfileComplete => StepDescriptor {
                id: "profile-complete",
                title: "Create Your Profile",
                action: StepAction::CreateProfile,
            },
            Step::CampaignGoals => StepDescriptor {
                id: "campaign-goals",
                title: "Campaign Goals",
                action: StepAction::Next,
            },
            Step::TargetAudience => StepDescriptor {
                id: "target-audience",
                title: "Target Audience",
                action: StepAction::Next,
            },
            Step::ProductCategory => StepDescriptor {
                id: "product-category",
                title: "Product Category",
                action: StepAction::Next,
            },
            Step::CampaignComplete => StepDescriptor {
                id: "campaign-complete",
                title: "Create Your Campaign",
                action: StepAction::CreateCampaign,
            },
        }
    }

    pub fn id(self) -> &'static str {
        self.descriptor().id
    }

    pub fn title(self) -> &'static str {
        self.descriptor().title
    }

    pub fn action(self) -> StepAction {
        self.descriptor().action
    }
}

/// Ordered step list of the profile phase.
pub const PROFILE_STEPS: &[Step] = &[
    Step::RoleSelection,
    Step::ProfileDetails,
    Step::ProfileComplete,
];

/// Ordered step list of the campaign phase.
pub const CAMPAIGN_STEPS: &[Step] = &[
    Step::CampaignGoals,
    Step::TargetAudience,
    Step::ProductCategory,
    Step::CampaignComplete,
];

/// Total number of steps across both phases.
pub const TOTAL_STEPS: usize = 7;

/// Position within the wizard: `(phase, zero-based step index)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowPosition {
    pub phase: FlowPhase,
    pub step: usize,
}

impl FlowPosition {
    /// Initial state of the wizard.
    pub const START: FlowPosition = FlowPosition {
        phase: FlowPhase::Profile,
        step: 0,
    };

    /// The step list of a phase.
    pub fn steps(phase: FlowPhase) -> &'static [Step] {
        match phase {
            FlowPhase::Profile => PROFILE_STEPS,
            FlowPhase::Campaign => CAMPAIGN_STEPS,
        }
    }

    /// The step this position points at.
    pub fn current_step(&self) -> Step {
        Self::steps(self.phase)[self.step]
    }

    /// Whether this is the last index of the current phase.
    pub fn is_last_in_phase(&self) -> bool {
        self.step + 1 == Self::steps(self.phase).len()
    }

    /// Advance one step.
    ///
    /// At the last profile step this crosses into `(campaign, 0)`; at
    /// the last campaign step it is a no-op — that step's affordance is
    /// a submit action, not navigation.
    pub fn next(self) -> FlowPosition {
        if !self.is_last_in_phase() {
            return FlowPosition {
                phase: self.phase,
                step: self.step + 1,
            };
        }
        match self.phase {
            FlowPhase::Profile => FlowPosition {
                phase: FlowPhase::Campaign,
                step: 0,
            },
            FlowPhase::Campaign => self,
        }
    }

    /// Go back one step.
    ///
    /// At `(campaign, 0)` this returns to the last profile step; at
    /// `(profile, 0)` it is a no-op.
    pub fn back(self) -> FlowPosition {
        if self.step > 0 {
            return FlowPosition {
                phase: self.phase,
                step: self.step - 1,
            };
        }
        match self.phase {
            FlowPhase::Campaign => FlowPosition {
                phase: FlowPhase::Profile,
                step: PROFILE_STEPS.len() - 1,
            },
            FlowPhase::Profile => self,
        }
    }

    /// Whether `back` would move anywhere from here.
    pub fn can_go_back(&self) -> bool {
        self.back() != *self
    }

    /// Zero-based index across both phases, for progress display.
    pub fn overall_index(&self) -> usize {
        match self.phase {
            FlowPhase::Profile => self.step,
            FlowPhase::Campaign => PROFILE_STEPS.len() + self.step,
        }
    }

    /// Progress through the wizard as a percentage.
    pub fn progress_percent(&self) -> f32 {
        (self.overall_index() as f32 / (TOTAL_STEPS - 1) as f32) * 100.0
    }
}
