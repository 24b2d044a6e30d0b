//! Onboarding wizard — two-phase marketer flow.
//!
//! The wizard walks a new marketer through the profile phase (role,
//! details, profile commit) and the campaign phase (goals, audience,
//! product, campaign commit). Form data accumulates in a single
//! [`form::FormState`]; each step gates forward navigation with its own
//! validity predicate, and the two commits go through the
//! [`gateway::CampaignBackend`] seam.

pub mod controller;
pub mod form;
pub mod gateway;
pub mod labels;
pub mod manager;
pub mod validate;

pub use controller::{FlowPhase, FlowPosition, Step, StepAction};
pub use form::FormState;
pub use gateway::{CampaignBackend, CampaignRequest, HttpBackend, ProfileRequest};
pub use manager::{Notice, NoticeLevel, OnboardingFlow};
