//! HTTP API integration tests
//!
//! Spins up the real axum server on an ephemeral port and exercises the
//! classification boundary end to end with stub model capabilities.

use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;

use spamfilter_rs::api::ApiServer;
use spamfilter_rs::config::FilterConfig;
use spamfilter_rs::filter::{SpamFilter, TrustedDomains};
use spamfilter_rs::model::{Classifier, ModelBundle, Vectorizer};

struct StubVectorizer;

impl Vectorizer for StubVectorizer {
    fn transform(&self, _text: &str) -> Vec<f64> {
        vec![0.0]
    }
}

/// Classifier that always answers with fixed probabilities.
struct StubClassifier {
    p_ham: f64,
    p_spam: f64,
}

impl Classifier for StubClassifier {
    fn predict_probabilities(&self, _features: &[f64]) -> (f64, f64) {
        (self.p_ham, self.p_spam)
    }
}

fn stub_model(p_ham: f64, p_spam: f64) -> ModelBundle {
    ModelBundle::from_parts(
        Arc::new(StubVectorizer),
        Arc::new(StubClassifier { p_ham, p_spam }),
        "stub-model",
    )
}

/// Start a server on an ephemeral port and return its base URL.
async fn spawn_server(filter: SpamFilter) -> String {
    let server = ApiServer::new(filter, "unused".to_string());
    let router = server.router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

fn default_filter(model: Option<ModelBundle>) -> SpamFilter {
    SpamFilter::new(
        FilterConfig { spam_threshold: 0.5 },
        TrustedDomains::new(["mycompany.com"]),
        model,
    )
}

async fn predict(base: &str, body: Value) -> (u16, Value) {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/predict", base))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    let body: Value = response.json().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn test_health_reports_model_state() {
    let base = spawn_server(default_filter(Some(stub_model(0.9, 0.1)))).await;

    let response = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model_loaded"], true);
    assert_eq!(body["model_version"], "stub-model");
    assert_eq!(body["trusted_domains"], 1);
}

#[tokio::test]
async fn test_whitelisted_sender() {
    // Model leaning spam: the whitelist must still win.
    let base = spawn_server(default_filter(Some(stub_model(0.01, 0.99)))).await;

    let (status, body) = predict(
        &base,
        json!({
            "sender": "ceo@mycompany.com",
            "subject": "WINNER!!",
            "body": "free money, claim now"
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["label"], "whitelisted");
    assert_eq!(body["confidence"], 1.0);
    assert_eq!(body["reason"], "Sender is in the whitelist");
}

#[tokio::test]
async fn test_known_service_sender() {
    let base = spawn_server(default_filter(Some(stub_model(0.5, 0.5)))).await;

    let (status, body) = predict(
        &base,
        json!({
            "sender": "noreply@paypal.com",
            "subject": "Receipt",
            "body": "Your payment was sent."
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["label"], "Not Spam");
    assert_eq!(body["confidence"], 0.95);
}

#[tokio::test]
async fn test_obvious_spam_keywords() {
    // Model leaning ham: two strong indicators must override it.
    let base = spawn_server(default_filter(Some(stub_model(0.99, 0.01)))).await;

    let (status, body) = predict(
        &base,
        json!({
            "sender": "offers@randomsite.biz",
            "subject": "WINNER!!",
            "body": "You have won a million dollars, claim now!"
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["label"], "Spam");
    assert_eq!(body["confidence"], 0.95);
    assert_eq!(body["reason"], "Contains multiple spam indicators");
}

#[tokio::test]
async fn test_model_layer_ham() {
    let base = spawn_server(default_filter(Some(stub_model(0.95, 0.05)))).await;

    let (status, body) = predict(
        &base,
        json!({
            "sender": "friend@example.com",
            "subject": "Lunch?",
            "body": "Are we still on for lunch today?"
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["label"], "Not Spam");
    assert_eq!(body["confidence"], 0.95);
    assert_eq!(body["reason"], "Appears to be legitimate");
    assert_eq!(body["model_version"], "stub-model");
    assert!(body["analysis"].as_str().unwrap().contains("legitimate"));
}

#[tokio::test]
async fn test_model_layer_spam() {
    let base = spawn_server(default_filter(Some(stub_model(0.03, 0.97)))).await;

    let (status, body) = predict(
        &base,
        json!({
            "sender": "someone@unknown.net",
            "subject": "hello",
            "body": "a perfectly normal looking text"
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["label"], "Spam");
    assert_eq!(body["confidence"], 0.97);
    assert_eq!(body["reason"], "Contains suspicious keywords and patterns");
}

#[tokio::test]
async fn test_model_unavailable_is_server_error() {
    let base = spawn_server(default_filter(None)).await;

    let (status, body) = predict(
        &base,
        json!({
            "sender": "friend@example.com",
            "subject": "Lunch?",
            "body": "Are we still on for lunch today?"
        }),
    )
    .await;

    assert_eq!(status, 500);
    assert_eq!(body["error"], "Model not loaded");
}

#[tokio::test]
async fn test_missing_model_fails_even_whitelisted_senders() {
    // With no model loaded, every request is a server error, including
    // ones the override layers could have answered.
    let base = spawn_server(default_filter(None)).await;

    for sender in ["ceo@mycompany.com", "billing@netflix.com", "offers@randomsite.biz"] {
        let (status, body) = predict(
            &base,
            json!({
                "sender": sender,
                "subject": "Invoice",
                "body": "Your subscription renewed."
            }),
        )
        .await;

        assert_eq!(status, 500, "sender {}", sender);
        assert_eq!(body["error"], "Model not loaded");
    }
}

#[tokio::test]
async fn test_missing_fields_default_to_empty() {
    let base = spawn_server(default_filter(Some(stub_model(0.8, 0.2)))).await;

    let (status, body) = predict(&base, json!({ "sender": "x@y.z" })).await;

    assert_eq!(status, 200);
    assert_eq!(body["label"], "Not Spam");
}
