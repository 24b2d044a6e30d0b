//! Submission gateway — commits accumulated form state to the backend.
//!
//! Two independent operations: a profile update (PUT) and a campaign
//! creation (POST). Neither retries on its own; a failed commit leaves
//! the form untouched and the user free to press the button again.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::error::GatewayError;

use super::form::FormState;
use super::labels;

/// Profile update payload (`PUT {base}/profile/`).
#[derive(Debug, Clone, Serialize)]
pub struct ProfileRequest {
    pub role: String,
    pub fullname: String,
    pub email: String,
    pub company: String,
    pub position_title: String,
}

impl ProfileRequest {
    /// Lift the profile slice out of the form.
    pub fn from_form(form: &FormState) -> Self {
        Self {
            role: form.role.map(|r| r.code().to_string()).unwrap_or_default(),
            fullname: form.full_name.clone(),
            email: form.email.clone(),
            company: form.company.clone(),
            position_title: form.position.clone(),
        }
    }
}

/// Campaign creation payload (`POST {base}/campaigns/`).
///
/// Enumerated fields cross the label tables on the way out: goals are
/// lower-cased human labels, the budget becomes a currency range, ages
/// become demographic labels, platforms become channel strings.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub campaign_goals: Vec<String>,
    pub social_platforms: Vec<String>,
    pub budget_range: String,
    pub timeline: String,
    pub target_age_range: Vec<String>,
    pub target_gender: Vec<String>,
    pub target_locations: Vec<String>,
    pub target_interests: Vec<String>,
    pub preferred_platforms: Vec<String>,
    pub product_category: String,
    pub product_description: String,
}

impl CampaignRequest {
    /// Apply the label tables to the raw form codes.
    pub fn from_form(form: &FormState) -> Self {
        Self {
            title: form.campaign_title.clone(),
            campaign_goals: form
                .campaign_goals
                .iter()
                .map(|g| labels::goal_submission_label(*g))
                .collect(),
            social_platforms: form
                .social_platforms
                .iter()
                .map(|p| labels::platform_label(*p).to_string())
                .collect(),
            budget_range: form
                .budget_range
                .map(|b| labels::budget_label(b).to_string())
                .unwrap_or_default(),
            timeline: form.timeline.map(|t| t.code().to_string()).unwrap_or_default(),
            target_age_range: form
                .target_age_range
                .iter()
                .map(|a| labels::age_label(*a).to_string())
                .collect(),
            target_gender: form
                .target_gender
                .iter()
                .map(|g| labels::gender_label(*g).to_string())
                .collect(),
            target_locations: form.target_locations.clone(),
            target_interests: form.target_interests.clone(),
            preferred_platforms: form
                .preferred_platforms
                .iter()
                .map(|p| labels::platform_label(*p).to_string())
                .collect(),
            product_category: form
                .product_category
                .map(|c| labels::category_label(c).to_string())
                .unwrap_or_default(),
            product_description: form.product_description.clone(),
        }
    }
}

/// Backend seam for the two commit operations.
#[async_trait]
pub trait CampaignBackend: Send + Sync {
    /// Update the marketer profile in place.
    async fn commit_profile(&self, request: &ProfileRequest) -> Result<(), GatewayError>;

    /// Create the campaign.
    async fn commit_campaign(&self, request: &CampaignRequest) -> Result<(), GatewayError>;
}

/// HTTP implementation over `reqwest`.
///
/// The bearer token comes from the cached `access_token` cookie. A
/// missing token is not handled here — the request goes out without the
/// header and the backend rejects it into the normal error path.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    access_token: Option<SecretString>,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, access_token: Option<SecretString>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            access_token,
        }
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.access_token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    async fn send<T: Serialize + ?Sized>(
        &self,
        builder: reqwest::RequestBuilder,
        endpoint: String,
        body: &T,
    ) -> Result<(), GatewayError> {
        let response = self
            .authorized(builder)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport {
                endpoint: endpoint.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%endpoint, status = status.as_u16(), "backend rejected request");
            return Err(GatewayError::Rejected {
                endpoint,
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CampaignBackend for HttpBackend {
    async fn commit_profile(&self, request: &ProfileRequest) -> Result<(), GatewayError> {
        let endpoint = format!("{}/profile/", self.base_url);
        self.send(self.client.put(&endpoint), endpoint.clone(), request)
            .await?;
        tracing::info!("profile updated for {}", request.email);
        Ok(())
    }

    async fn commit_campaign(&self, request: &CampaignRequest) -> Result<(), GatewayError> {
        let endpoint = format!("{}/campaigns/", self.base_url);
        self.send(self.client.post(&endpoint), endpoint.clone(), request)
            .await?;
        tracing::info!(
            goals = request.campaign_goals.len(),
            "campaign created"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::form::{
        AgeRange, BudgetRange, CampaignGoal, Gender, ProductCategory, Role, SocialPlatform,
        Timeline,
    };

    fn filled_form() -> FormState {
        let mut form = FormState::new();
        form.select_role(Role::Marketer);
        form.full_name = "Jane Doe".to_string();
        form.email = "jane@x.com".to_string();
        form.company = "Acme".to_string();
        form.position = "CMO".to_string();
        form.toggle_goal(CampaignGoal::BrandAwareness);
        form.toggle_goal(CampaignGoal::ProductLaunch);
        form.toggle_social_platform(SocialPlatform::Instagram);
        form.budget_range = Some(BudgetRange::From5kTo10k);
        form.timeline = Some(Timeline::OneToThreeMonths);
        form.toggle_age_range(AgeRange::From18To24);
        form.toggle_gender(Gender::All);
        form.add_location("USA");
        form.add_interest("Fitness");
        form.toggle_preferred_platform(SocialPlatform::Tiktok);
        form.toggle_preferred_platform(SocialPlatform::Blog);
        form.product_category = Some(ProductCategory::Beauty);
        form.product_description = "A skincare line for athletes".to_string();
        form
    }

    #[test]
    fn profile_request_uses_backend_field_names() {
        let request = ProfileRequest::from_form(&filled_form());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["role"], "marketer");
        assert_eq!(json["fullname"], "Jane Doe");
        assert_eq!(json["position_title"], "CMO");
        assert_eq!(json["company"], "Acme");
    }

    #[test]
    fn campaign_request_translates_codes_to_labels() {
        let request = CampaignRequest::from_form(&filled_form());
        assert_eq!(
            request.campaign_goals,
            vec!["increase brand awareness", "product launch"]
        );
        assert_eq!(request.budget_range, "$5,000 - $10,000");
        assert_eq!(request.timeline, "1-3-months");
        assert_eq!(request.target_age_range, vec!["18-24"]);
        assert_eq!(request.target_gender, vec!["All genders"]);
        assert_eq!(request.social_platforms, vec!["Instagram"]);
        assert_eq!(request.preferred_platforms, vec!["TikTok", "Blogs"]);
        assert_eq!(request.product_category, "Beauty & Cosmetics");
        assert_eq!(request.product_description, "A skincare line for athletes");
    }

    #[test]
    fn absent_title_is_not_serialized() {
        let request = CampaignRequest::from_form(&filled_form());
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("title").is_none());

        let mut titled = filled_form();
        titled.campaign_title = Some("Spring launch".to_string());
        let json = serde_json::to_value(CampaignRequest::from_form(&titled)).unwrap();
        assert_eq!(json["title"], "Spring launch");
    }
}
