//! Form state store — the single record accumulated across the wizard.
//!
//! Every enumerated field is a closed enum whose serde form is the stable
//! wire code the product uses (kebab-case ids). Each step of the wizard
//! writes only its own slice of [`FormState`] through the methods here;
//! fields validated on an earlier step are never touched by a later one.

use serde::{Deserialize, Serialize};

/// Account role chosen on the first step.
///
/// Only the marketer role is currently enabled; the creator/influencer
/// side of the product has not launched, so the variant exists but is
/// rejected by [`Role::is_enabled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Marketer,
    Influencer,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Marketer, Role::Influencer];

    /// Stable wire code.
    pub fn code(self) -> &'static str {
        match self {
            Role::Marketer => "marketer",
            Role::Influencer => "influencer",
        }
    }

    /// Whether this role can currently be selected.
    pub fn is_enabled(self) -> bool {
        matches!(self, Role::Marketer)
    }
}

/// Campaign goal tags (multi-select).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CampaignGoal {
    BrandAwareness,
    ProductLaunch,
    ContentCreation,
    SalesConversion,
    SocialEngagement,
    LeadGeneration,
}

impl CampaignGoal {
    pub const ALL: [CampaignGoal; 6] = [
        CampaignGoal::BrandAwareness,
        CampaignGoal::ProductLaunch,
        CampaignGoal::ContentCreation,
        CampaignGoal::SalesConversion,
        CampaignGoal::SocialEngagement,
        CampaignGoal::LeadGeneration,
    ];

    pub fn code(self) -> &'static str {
        match self {
            CampaignGoal::BrandAwareness => "brand-awareness",
            CampaignGoal::ProductLaunch => "product-launch",
            CampaignGoal::ContentCreation => "content-creation",
            CampaignGoal::SalesConversion => "sales-conversion",
            CampaignGoal::SocialEngagement => "social-engagement",
            CampaignGoal::LeadGeneration => "lead-generation",
        }
    }
}

/// Campaign budget bucket (single-select).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "under-5k")]
    Under5k,
    #[serde(rename = "5k-10k")]
    From5kTo10k,
    #[serde(rename = "10k-25k")]
    From10kTo25k,
    #[serde(rename = "25k-50k")]
    From25kTo50k,
    #[serde(rename = "over-50k")]
    Over50k,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 5] = [
        BudgetRange::Under5k,
        BudgetRange::From5kTo10k,
        BudgetRange::From10kTo25k,
        BudgetRange::From25kTo50k,
        BudgetRange::Over50k,
    ];

    pub fn code(self) -> &'static str {
        match self {
            BudgetRange::Under5k => "under-5k",
            BudgetRange::From5kTo10k => "5k-10k",
            BudgetRange::From10kTo25k => "10k-25k",
            BudgetRange::From25kTo50k => "25k-50k",
            BudgetRange::Over50k => "over-50k",
        }
    }
}

/// Campaign timeline bucket (single-select).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "less-than-1-month")]
    LessThanOneMonth,
    #[serde(rename = "1-3-months")]
    OneToThreeMonths,
    #[serde(rename = "3-6-months")]
    ThreeToSixMonths,
    #[serde(rename = "6-12-months")]
    SixToTwelveMonths,
    #[serde(rename = "more-than-12-months")]
    MoreThanTwelveMonths,
}

impl Timeline {
    pub const ALL: [Timeline; 5] = [
        Timeline::LessThanOneMonth,
        Timeline::OneToThreeMonths,
        Timeline::ThreeToSixMonths,
        Timeline::SixToTwelveMonths,
        Timeline::MoreThanTwelveMonths,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Timeline::LessThanOneMonth => "less-than-1-month",
            Timeline::OneToThreeMonths => "1-3-months",
            Timeline::ThreeToSixMonths => "3-6-months",
            Timeline::SixToTwelveMonths => "6-12-months",
            Timeline::MoreThanTwelveMonths => "more-than-12-months",
        }
    }
}

/// Social media platform tags. Used for both the campaign-goals step's
/// target platforms and the audience step's preferred platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    Youtube,
    Twitter,
    Facebook,
    Tiktok,
    Twitch,
    Linkedin,
    Blog,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 8] = [
        SocialPlatform::Instagram,
        SocialPlatform::Youtube,
        SocialPlatform::Twitter,
        SocialPlatform::Facebook,
        SocialPlatform::Tiktok,
        SocialPlatform::Twitch,
        SocialPlatform::Linkedin,
        SocialPlatform::Blog,
    ];

    pub fn code(self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Tiktok => "tiktok",
            SocialPlatform::Twitch => "twitch",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Blog => "blog",
        }
    }
}

/// Audience age bracket tags (multi-select).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "13-17")]
    From13To17,
    #[serde(rename = "18-24")]
    From18To24,
    #[serde(rename = "25-34")]
    From25To34,
    #[serde(rename = "35-44")]
    From35To44,
    #[serde(rename = "45-54")]
    From45To54,
    #[serde(rename = "55+")]
    Over55,
}

impl AgeRange {
    pub const ALL: [AgeRange; 6] = [
        AgeRange::From13To17,
        AgeRange::From18To24,
        AgeRange::From25To34,
        AgeRange::From35To44,
        AgeRange::From45To54,
        AgeRange::Over55,
    ];

    pub fn code(self) -> &'static str {
        match self {
            AgeRange::From13To17 => "13-17",
            AgeRange::From18To24 => "18-24",
            AgeRange::From25To34 => "25-34",
            AgeRange::From35To44 => "35-44",
            AgeRange::From45To54 => "45-54",
            AgeRange::Over55 => "55+",
        }
    }
}

/// Audience gender tags (multi-select with the "all genders" exclusivity
/// rule, see [`FormState::toggle_gender`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    All,
}

impl Gender {
    pub const ALL_OPTIONS: [Gender; 4] = [Gender::Male, Gender::Female, Gender::NonBinary, Gender::All];

    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::NonBinary => "non-binary",
            Gender::All => "all",
        }
    }
}

/// Product category (single-select).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Fashion,
    Beauty,
    Tech,
    Food,
    Health,
    Travel,
    Home,
    Games,
    Finance,
    Education,
    Sports,
    Other,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 12] = [
        ProductCategory::Fashion,
        ProductCategory::Beauty,
        ProductCategory::Tech,
        ProductCategory::Food,
        ProductCategory::Health,
        ProductCategory::Travel,
        ProductCategory::Home,
        ProductCategory::Games,
        ProductCategory::Finance,
        ProductCategory::Education,
        ProductCategory::Sports,
        ProductCategory::Other,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ProductCategory::Fashion => "fashion",
            ProductCategory::Beauty => "beauty",
            ProductCategory::Tech => "tech",
            ProductCategory::Food => "food",
            ProductCategory::Health => "health",
            ProductCategory::Travel => "travel",
            ProductCategory::Home => "home",
            ProductCategory::Games => "games",
            ProductCategory::Finance => "finance",
            ProductCategory::Education => "education",
            ProductCategory::Sports => "sports",
            ProductCategory::Other => "other",
        }
    }
}

macro_rules! display_via_code {
    ($($ty:ty),+ $(,)?) => {
        $(impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        })+
    };
}

display_via_code!(
    Role,
    CampaignGoal,
    BudgetRange,
    Timeline,
    SocialPlatform,
    AgeRange,
    Gender,
    ProductCategory,
);

/// The single accumulated record of all user-entered data.
///
/// Created empty when the flow mounts, mutated in place by the active
/// step, read in full at the two commit points, discarded afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub role: Option<Role>,
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub position: String,
    pub campaign_goals: Vec<CampaignGoal>,
    pub social_platforms: Vec<SocialPlatform>,
    pub budget_range: Option<BudgetRange>,
    pub timeline: Option<Timeline>,
    pub target_age_range: Vec<AgeRange>,
    pub target_gender: Vec<Gender>,
    pub target_locations: Vec<String>,
    pub target_interests: Vec<String>,
    pub preferred_platforms: Vec<SocialPlatform>,
    pub product_category: Option<ProductCategory>,
    pub product_description: String,
    /// Optional campaign title; sent only when the user supplies one.
    pub campaign_title: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a role. Disabled roles are ignored.
    pub fn select_role(&mut self, role: Role) {
        if role.is_enabled() {
            self.role = Some(role);
        }
    }

    /// Toggle membership of a campaign goal tag.
    pub fn toggle_goal(&mut self, goal: CampaignGoal) {
        toggle(&mut self.campaign_goals, goal);
    }

    /// Toggle membership of a target social platform tag.
    pub fn toggle_social_platform(&mut self, platform: SocialPlatform) {
        toggle(&mut self.social_platforms, platform);
    }

    /// Toggle membership of an audience age bracket tag.
    pub fn toggle_age_range(&mut self, range: AgeRange) {
        toggle(&mut self.target_age_range, range);
    }

    /// Toggle an audience gender tag.
    ///
    /// Selecting `All` clears every other tag; selecting a specific
    /// gender removes `All` if present. Deselecting is a plain removal.
    pub fn toggle_gender(&mut self, gender: Gender) {
        if self.target_gender.contains(&gender) {
            self.target_gender.retain(|g| *g != gender);
            return;
        }
        match gender {
            Gender::All => {
                self.target_gender.clear();
                self.target_gender.push(Gender::All);
            }
            specific => {
                self.target_gender.retain(|g| *g != Gender::All);
                self.target_gender.push(specific);
            }
        }
    }

    /// Toggle membership of a preferred platform tag.
    pub fn toggle_preferred_platform(&mut self, platform: SocialPlatform) {
        toggle(&mut self.preferred_platforms, platform);
    }

    /// Add a free-text location tag. Trimmed; empty and duplicate
    /// entries are ignored.
    pub fn add_location(&mut self, location: &str) {
        add_tag(&mut self.target_locations, location);
    }

    pub fn remove_location(&mut self, location: &str) {
        self.target_locations.retain(|l| l != location);
    }

    /// Add a free-text interest tag. Trimmed; empty and duplicate
    /// entries are ignored.
    pub fn add_interest(&mut self, interest: &str) {
        add_tag(&mut self.target_interests, interest);
    }

    pub fn remove_interest(&mut self, interest: &str) {
        self.target_interests.retain(|i| i != interest);
    }
}

fn toggle<T: Copy + PartialEq>(tags: &mut Vec<T>, tag: T) {
    if tags.contains(&tag) {
        tags.retain(|t| *t != tag);
    } else {
        tags.push(tag);
    }
}

fn add_tag(tags: &mut Vec<String>, raw: &str) {
    let tag = raw.trim();
    if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde() {
        fn check<T: std::fmt::Display + Serialize>(values: &[T]) {
            for value in values {
                let display = format!("{value}");
                let json = serde_json::to_string(value).unwrap();
                assert_eq!(format!("\"{display}\""), json);
            }
        }
        check(&Role::ALL);
        check(&CampaignGoal::ALL);
        check(&BudgetRange::ALL);
        check(&Timeline::ALL);
        check(&SocialPlatform::ALL);
        check(&AgeRange::ALL);
        check(&Gender::ALL_OPTIONS);
        check(&ProductCategory::ALL);
    }

    #[test]
    fn only_marketer_role_is_enabled() {
        assert!(Role::Marketer.is_enabled());
        assert!(!Role::Influencer.is_enabled());

        let mut form = FormState::new();
        form.select_role(Role::Influencer);
        assert_eq!(form.role, None);
        form.select_role(Role::Marketer);
        assert_eq!(form.role, Some(Role::Marketer));
    }

    #[test]
    fn goal_toggle_adds_and_removes() {
        let mut form = FormState::new();
        form.toggle_goal(CampaignGoal::ProductLaunch);
        form.toggle_goal(CampaignGoal::LeadGeneration);
        assert_eq!(
            form.campaign_goals,
            vec![CampaignGoal::ProductLaunch, CampaignGoal::LeadGeneration]
        );
        form.toggle_goal(CampaignGoal::ProductLaunch);
        assert_eq!(form.campaign_goals, vec![CampaignGoal::LeadGeneration]);
    }

    #[test]
    fn selecting_all_genders_clears_specific_tags() {
        let mut form = FormState::new();
        form.toggle_gender(Gender::Male);
        form.toggle_gender(Gender::NonBinary);
        form.toggle_gender(Gender::All);
        assert_eq!(form.target_gender, vec![Gender::All]);
    }

    #[test]
    fn selecting_specific_gender_removes_all() {
        let mut form = FormState::new();
        form.toggle_gender(Gender::All);
        form.toggle_gender(Gender::Female);
        assert_eq!(form.target_gender, vec![Gender::Female]);
    }

    #[test]
    fn deselecting_gender_is_plain_removal() {
        let mut form = FormState::new();
        form.toggle_gender(Gender::Male);
        form.toggle_gender(Gender::Female);
        form.toggle_gender(Gender::Male);
        assert_eq!(form.target_gender, vec![Gender::Female]);
    }

    #[test]
    fn location_tags_trim_and_dedupe() {
        let mut form = FormState::new();
        form.add_location("  USA ");
        form.add_location("USA");
        form.add_location("");
        form.add_location("   ");
        form.add_location("France");
        assert_eq!(form.target_locations, vec!["USA", "France"]);

        form.remove_location("USA");
        assert_eq!(form.target_locations, vec!["France"]);
    }

    #[test]
    fn interest_tags_trim_and_dedupe() {
        let mut form = FormState::new();
        form.add_interest("Fitness");
        form.add_interest(" Fitness");
        form.add_interest("Technology");
        assert_eq!(form.target_interests, vec!["Fitness", "Technology"]);
    }

    #[test]
    fn empty_form_has_no_selections() {
        let form = FormState::new();
        assert_eq!(form.role, None);
        assert!(form.campaign_goals.is_empty());
        assert!(form.target_gender.is_empty());
        assert_eq!(form.budget_range, None);
        assert_eq!(form.campaign_title, None);
    }
}
