//! Submission-time label tables.
//!
//! The backend's campaign endpoint takes human-readable labels rather
//! than the wizard's wire codes, so every enum crosses one of these
//! finite tables on its way out. The same tables back the profile
//! summary shown on the completion screens.

use super::form::{AgeRange, BudgetRange, CampaignGoal, Gender, ProductCategory, SocialPlatform};

/// Human label for a campaign goal, as shown in the goal checklist.
pub fn goal_label(goal: CampaignGoal) -> &'static str {
    match goal {
        CampaignGoal::BrandAwareness => "Increase Brand Awareness",
        CampaignGoal::ProductLaunch => "Product Launch",
        CampaignGoal::ContentCreation => "Content Creation",
        CampaignGoal::SalesConversion => "Sales Conversion",
        CampaignGoal::SocialEngagement => "Social Media Engagement",
        CampaignGoal::LeadGeneration => "Lead Generation",
    }
}

/// The form a goal takes in the campaign payload: the human label,
/// lower-cased.
pub fn goal_submission_label(goal: CampaignGoal) -> String {
    goal_label(goal).to_lowercase()
}

/// Currency-range string for a budget bucket.
pub fn budget_label(budget: BudgetRange) -> &'static str {
    match budget {
        BudgetRange::Under5k => "Under $5,000",
        BudgetRange::From5kTo10k => "$5,000 - $10,000",
        BudgetRange::From10kTo25k => "$10,000 - $25,000",
        BudgetRange::From25kTo50k => "$25,000 - $50,000",
        BudgetRange::Over50k => "Over $50,000",
    }
}

/// Human label for a product category.
pub fn category_label(category: ProductCategory) -> &'static str {
    match category {
        ProductCategory::Fashion => "Fashion & Apparel",
        ProductCategory::Beauty => "Beauty & Cosmetics",
        ProductCategory::Tech => "Technology & Electronics",
        ProductCategory::Food => "Food & Beverage",
        ProductCategory::Health => "Health & Wellness",
        ProductCategory::Travel => "Travel & Hospitality",
        ProductCategory::Home => "Home & Lifestyle",
        ProductCategory::Games => "Gaming & Entertainment",
        ProductCategory::Finance => "Finance & Business",
        ProductCategory::Education => "Education & Learning",
        ProductCategory::Sports => "Sports & Fitness",
        ProductCategory::Other => "Other",
    }
}

/// Demographic label for an age bracket. The bracket string itself is
/// the label the backend expects.
pub fn age_label(range: AgeRange) -> &'static str {
    range.code()
}

/// Label for a gender tag.
pub fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "Male",
        Gender::Female => "Female",
        Gender::NonBinary => "Non-binary",
        Gender::All => "All genders",
    }
}

/// Descriptive channel string for a platform tag.
pub fn platform_label(platform: SocialPlatform) -> &'static str {
    match platform {
        SocialPlatform::Instagram => "Instagram",
        SocialPlatform::Youtube => "YouTube",
        SocialPlatform::Twitter => "Twitter",
        SocialPlatform::Facebook => "Facebook",
        SocialPlatform::Tiktok => "TikTok",
        SocialPlatform::Twitch => "Twitch",
        SocialPlatform::Linkedin => "LinkedIn",
        SocialPlatform::Blog => "Blogs",
    }
}
