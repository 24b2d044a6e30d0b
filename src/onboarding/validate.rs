//! Per-step validity predicates.
//!
//! Each data-entry step owns one pure predicate over its slice of the
//! form. The manager recomputes the active predicate whenever the form
//! changes; the result is the sole driver of the "can advance" gate.

use super::controller::Step;
use super::form::FormState;

/// Minimum length of the product description, in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Validity of the step's slice of the form.
pub fn step_valid(step: Step, form: &FormState) -> bool {
    match step {
        Step::RoleSelection => role_selection(form),
        Step::ProfileDetails => profile_details(form),
        Step::CampaignGoals => campaign_goals(form),
        Step::TargetAudience => target_audience(form),
        Step::ProductCategory => product_category(form),
        // The phase-terminal steps render a submit action, not a gated
        // navigation button.
        Step::ProfileComplete | Step::CampaignComplete => true,
    }
}

/// A role is chosen and it is one the product currently enables.
pub fn role_selection(form: &FormState) -> bool {
    form.role.is_some_and(|role| role.is_enabled())
}

/// Name, email, and company are filled in; the email contains an `@`.
pub fn profile_details(form: &FormState) -> bool {
    !form.full_name.is_empty()
        && !form.company.is_empty()
        && !form.email.is_empty()
        && form.email.contains('@')
}

/// At least one goal, a budget bucket, and a timeline. Platform
/// selection never gates this step.
pub fn campaign_goals(form: &FormState) -> bool {
    !form.campaign_goals.is_empty() && form.budget_range.is_some() && form.timeline.is_some()
}

/// At least one age bracket and one gender tag. Locations, interests,
/// and preferred platforms are optional.
pub fn target_audience(form: &FormState) -> bool {
    !form.target_age_range.is_empty() && !form.target_gender.is_empty()
}

/// A category is chosen and the description is long enough.
pub fn product_category(form: &FormState) -> bool {
    form.product_category.is_some()
        && form.product_description.chars().count() >= MIN_DESCRIPTION_CHARS
}
