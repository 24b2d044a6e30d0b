//! Integration tests for the submission gateway and flow driver.
//!
//! Each test spins up an Axum server on a random port as the stub
//! backend and exercises the real HTTP contract: request bodies, the
//! bearer header, and how the flow reacts to 2xx and non-2xx outcomes.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{post, put};
use axum::{Json, Router};
use secrecy::SecretString;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::time::timeout;

use kolab_onboarding::auth;
use kolab_onboarding::onboarding::controller::{FlowPhase, FlowPosition, Step};
use kolab_onboarding::onboarding::form::{
    AgeRange, BudgetRange, CampaignGoal, Gender, ProductCategory, Role, SocialPlatform, Timeline,
};
use kolab_onboarding::onboarding::gateway::HttpBackend;
use kolab_onboarding::onboarding::manager::{NoticeLevel, OnboardingFlow};

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// One recorded request: the Authorization header (if any) and the body.
type Recorded = (Option<String>, Value);

#[derive(Default)]
struct Received {
    profiles: Mutex<Vec<Recorded>>,
    campaigns: Mutex<Vec<Recorded>>,
}

#[derive(Clone)]
struct AppState {
    profile_status: StatusCode,
    campaign_status: StatusCode,
    received: Arc<Received>,
}

fn record(headers: &HeaderMap, body: Value) -> Recorded {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    (auth, body)
}

async fn put_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    state.received.profiles.lock().unwrap().push(record(&headers, body));
    state.profile_status
}

async fn post_campaign(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    state
        .received
        .campaigns
        .lock()
        .unwrap()
        .push(record(&headers, body));
    state.campaign_status
}

async fn post_login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "jane@x.com" && body["password"] == "hunter22" {
        (
            StatusCode::OK,
            Json(json!({ "tokens": { "access": "test-token", "refresh": "r" } })),
        )
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "error": "bad credentials" })))
    }
}

/// Start the stub backend, return its base URL and the recorded requests.
async fn start_server(
    profile_status: StatusCode,
    campaign_status: StatusCode,
) -> (String, Arc<Received>) {
    let received = Arc::new(Received::default());
    let state = AppState {
        profile_status,
        campaign_status,
        received: Arc::clone(&received),
    };
    let app = Router::new()
        .route("/profile/", put(put_profile))
        .route("/campaigns/", post(post_campaign))
        .route("/login/", post(post_login))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    (format!("http://127.0.0.1:{port}"), received)
}

fn flow_against(base_url: &str, token: Option<&str>) -> OnboardingFlow {
    let token = token.map(|t| SecretString::from(t.to_string()));
    OnboardingFlow::new(Arc::new(HttpBackend::new(base_url.to_string(), token)))
}

fn fill_profile(flow: &mut OnboardingFlow) {
    flow.form_mut().select_role(Role::Marketer);
    assert!(flow.next());
    let form = flow.form_mut();
    form.full_name = "Jane Doe".to_string();
    form.email = "jane@x.com".to_string();
    form.company = "Acme".to_string();
    form.position = "Growth Lead".to_string();
    assert!(flow.next());
    assert_eq!(flow.current_step(), Step::ProfileComplete);
}

fn fill_campaign(flow: &mut OnboardingFlow) {
    let form = flow.form_mut();
    form.toggle_goal(CampaignGoal::BrandAwareness);
    form.toggle_social_platform(SocialPlatform::Instagram);
    form.budget_range = Some(BudgetRange::From10kTo25k);
    form.timeline = Some(Timeline::SixToTwelveMonths);
    assert!(flow.next());
    let form = flow.form_mut();
    form.toggle_age_range(AgeRange::From18To24);
    form.toggle_age_range(AgeRange::From25To34);
    form.toggle_gender(Gender::All);
    form.add_location("USA");
    form.add_interest("Fitness");
    form.toggle_preferred_platform(SocialPlatform::Tiktok);
    assert!(flow.next());
    let form = flow.form_mut();
    form.product_category = Some(ProductCategory::Health);
    form.product_description = "Electrolyte drink mix for runners".to_string();
    assert!(flow.next());
    assert_eq!(flow.current_step(), Step::CampaignComplete);
}

#[tokio::test]
async fn profile_commit_sends_bearer_and_advances() {
    let (base, received) = start_server(StatusCode::OK, StatusCode::OK).await;
    let mut flow = flow_against(&base, Some("test-token"));
    fill_profile(&mut flow);

    let committed = timeout(TEST_TIMEOUT, flow.submit_profile())
        .await
        .unwrap()
        .unwrap();
    assert!(committed);
    assert_eq!(
        flow.position(),
        FlowPosition {
            phase: FlowPhase::Campaign,
            step: 0
        }
    );

    let profiles = received.profiles.lock().unwrap();
    assert_eq!(profiles.len(), 1);
    let (auth_header, body) = &profiles[0];
    assert_eq!(auth_header.as_deref(), Some("Bearer test-token"));
    assert_eq!(body["role"], "marketer");
    assert_eq!(body["fullname"], "Jane Doe");
    assert_eq!(body["email"], "jane@x.com");
    assert_eq!(body["company"], "Acme");
    assert_eq!(body["position_title"], "Growth Lead");
}

#[tokio::test]
async fn campaign_payload_crosses_the_label_tables() {
    let (base, received) = start_server(StatusCode::OK, StatusCode::CREATED).await;
    let mut flow = flow_against(&base, Some("test-token"));
    fill_profile(&mut flow);
    timeout(TEST_TIMEOUT, flow.submit_profile()).await.unwrap().unwrap();
    fill_campaign(&mut flow);

    let committed = timeout(TEST_TIMEOUT, flow.submit_campaign())
        .await
        .unwrap()
        .unwrap();
    assert!(committed);
    assert!(flow.is_complete());
    assert_eq!(flow.redirect(), Some("/dashboard"));

    let campaigns = received.campaigns.lock().unwrap();
    assert_eq!(campaigns.len(), 1);
    let (_, body) = &campaigns[0];
    assert_eq!(body["campaign_goals"], json!(["increase brand awareness"]));
    assert_eq!(body["social_platforms"], json!(["Instagram"]));
    assert_eq!(body["budget_range"], "$10,000 - $25,000");
    assert_eq!(body["timeline"], "6-12-months");
    assert_eq!(body["target_age_range"], json!(["18-24", "25-34"]));
    assert_eq!(body["target_gender"], json!(["All genders"]));
    assert_eq!(body["target_locations"], json!(["USA"]));
    assert_eq!(body["target_interests"], json!(["Fitness"]));
    assert_eq!(body["preferred_platforms"], json!(["TikTok"]));
    assert_eq!(body["product_category"], "Health & Wellness");
    assert_eq!(body["product_description"], "Electrolyte drink mix for runners");
    assert!(body.get("title").is_none());
}

#[tokio::test]
async fn rejected_campaign_leaves_flow_and_form_untouched() {
    let (base, received) = start_server(StatusCode::OK, StatusCode::INTERNAL_SERVER_ERROR).await;
    let mut flow = flow_against(&base, Some("test-token"));
    fill_profile(&mut flow);
    timeout(TEST_TIMEOUT, flow.submit_profile()).await.unwrap().unwrap();
    fill_campaign(&mut flow);
    flow.drain_notices();

    let position = flow.position();
    let form = flow.form().clone();

    let committed = timeout(TEST_TIMEOUT, flow.submit_campaign())
        .await
        .unwrap()
        .unwrap();
    assert!(!committed);
    assert_eq!(flow.position(), position);
    assert_eq!(*flow.form(), form);
    assert!(!flow.is_complete());

    let notices = flow.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);

    // The backend did see the attempt; nothing was retried automatically.
    assert_eq!(received.campaigns.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_token_is_sent_without_header_and_fails_server_side() {
    let (base, received) = start_server(StatusCode::UNAUTHORIZED, StatusCode::OK).await;
    let mut flow = flow_against(&base, None);
    fill_profile(&mut flow);

    let committed = timeout(TEST_TIMEOUT, flow.submit_profile())
        .await
        .unwrap()
        .unwrap();
    assert!(!committed);
    assert_eq!(flow.position().phase, FlowPhase::Profile);

    let profiles = received.profiles.lock().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].0, None, "no Authorization header expected");
}

#[tokio::test]
async fn login_returns_tokens_and_caches_them() {
    let (base, _received) = start_server(StatusCode::OK, StatusCode::OK).await;
    let client = reqwest::Client::new();

    let tokens = timeout(
        TEST_TIMEOUT,
        auth::login(&client, &base, "jane@x.com", "hunter22"),
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(tokens.access, "test-token");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("access_token");
    auth::store_token(&path, &SecretString::from(tokens.access)).unwrap();
    let loaded = auth::load_cached_token(&path).unwrap();
    assert!(loaded.is_some());

    let rejected = timeout(
        TEST_TIMEOUT,
        auth::login(&client, &base, "jane@x.com", "wrong"),
    )
    .await
    .unwrap();
    assert!(rejected.is_err());
}
