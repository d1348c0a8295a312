use nutrisense_client::http_client::ReqwestNutrisenseClient;
use nutrisense_client::{NutrisenseClient, NutrisenseError, PredictRequest, WellnessEntry};
use secrecy::SecretString;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_entry() -> WellnessEntry {
    WellnessEntry {
        age: 60,
        height_cm: 110.0,
        disease: "none".into(),
        breakfast: "oats, milk".into(),
        lunch: "dal, roti".into(),
        dinner: "khichdi".into(),
        snacks: "fruit salad".into(),
        sleep_hours: 8.0,
        exercise_hours: 1.0,
        water_intake_liters: 1.5,
        mood: "happy".into(),
        date: Some("2025-01-01".into()),
    }
}

#[tokio::test]
async fn login_parses_session_and_sends_bearer_afterwards() {
    let server = MockServer::start().await;

    let login_body = serde_json::json!({
        "access_token": "tok-123",
        "token_type": "bearer",
        "user": {"id": "u1", "name": "Alice", "email": "alice@example.com"}
    });
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_partial_json(
            serde_json::json!({"email": "alice@example.com"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(&login_body))
        .mount(&server)
        .await;

    let me_body = serde_json::json!({"id": "u1", "name": "Alice", "email": "alice@example.com"});
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&me_body))
        .mount(&server)
        .await;

    let client = ReqwestNutrisenseClient::new(&server.uri());
    let session = client
        .login("alice@example.com", "pw")
        .await
        .expect("login");
    assert_eq!(session.user.name, "Alice");

    let profile = client.me().await.expect("me");
    assert_eq!(profile.id, "u1");

    // The /auth/me request must carry the bearer token from the login.
    let received = server.received_requests().await.unwrap();
    let me_req = received
        .iter()
        .find(|r| r.url.path() == "/auth/me")
        .expect("me request");
    let auth = me_req
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(auth, "Bearer tok-123");
}

#[tokio::test]
async fn wellness_history_parses_items_object() {
    let server = MockServer::start().await;
    let body = serde_json::json!({"items": [
        {"id": "w1", "wellness_score": 80.0, "prediction": "Healthy",
         "created_at": "2025-01-01T08:00:00Z",
         "input": {"date": "2025-01-01", "sleep_hours": 8, "mood": "happy"}},
        {"id": "w2", "score": 40.0, "category": "Poor"}
    ]});
    Mock::given(method("GET"))
        .and(path("/api/wellness/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client =
        ReqwestNutrisenseClient::with_token(&server.uri(), SecretString::new("tok".into()));
    let items = client.wellness_history().await.expect("history");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].score, Some(80.0));
    assert_eq!(
        items[0].input.as_ref().and_then(|i| i.date.as_deref()),
        Some("2025-01-01")
    );
    assert_eq!(items[1].category.as_deref(), Some("Poor"));
}

#[tokio::test]
async fn wellness_history_parses_bare_array() {
    let server = MockServer::start().await;
    let body = serde_json::json!([{"id": "w1"}, {"id": "w2"}, {"id": "w3"}]);
    Mock::given(method("GET"))
        .and(path("/api/wellness/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client =
        ReqwestNutrisenseClient::with_token(&server.uri(), SecretString::new("tok".into()));
    let items = client.wellness_history().await.expect("history");
    assert_eq!(items.len(), 3);
}

#[tokio::test]
async fn submit_wellness_posts_entry_and_parses_outcome() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "wellness_score": 74.2,
        "prediction": "Healthy",
        "recommendations": ["Maintain balanced meals and drink more water."],
        "created_at": "2025-01-01T09:00:00Z"
    });
    Mock::given(method("POST"))
        .and(path("/api/wellness"))
        .and(body_partial_json(serde_json::json!({"mood": "happy"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client =
        ReqwestNutrisenseClient::with_token(&server.uri(), SecretString::new("tok".into()));
    let outcome = client
        .submit_wellness(&sample_entry())
        .await
        .expect("outcome");
    assert_eq!(outcome.prediction, "Healthy");
    assert_eq!(outcome.recommendations.len(), 1);
}

#[tokio::test]
async fn predict_posts_request_and_parses_outcome() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "nutrition_status": "normal",
        "food_category": "balanced",
        "recommendation": "Good diet. Add more fiber (fruits/vegetables) for long-term health."
    });
    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client =
        ReqwestNutrisenseClient::with_token(&server.uri(), SecretString::new("tok".into()));
    let outcome = client
        .predict(&PredictRequest {
            age: 48,
            gender: "female".into(),
            height: 102.0,
            food_text: "rice, dal, milk".into(),
        })
        .await
        .expect("predict");
    assert_eq!(outcome.nutrition_status, "normal");
}

#[tokio::test]
async fn auth_errors_surface_fastapi_detail() {
    let server = MockServer::start().await;
    let body = serde_json::json!({"detail": "Invalid email or password"});
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(&body))
        .mount(&server)
        .await;

    let client = ReqwestNutrisenseClient::new(&server.uri());
    let err = client.login("x@example.com", "bad").await.unwrap_err();
    match err {
        NutrisenseError::Auth(msg) => assert_eq!(msg, "Invalid email or password"),
        other => panic!("expected Auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_map_to_transient_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/wellness/history"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client =
        ReqwestNutrisenseClient::with_token(&server.uri(), SecretString::new("tok".into()));
    let err = client.wellness_history().await.unwrap_err();
    assert!(err.is_transient());
}
