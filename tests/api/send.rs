use crate::helpers::spawn_app;

use wiremock::{
    matchers::{any, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn valid_lead_returns_200_and_sends_alert_then_welcome() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_send(&serde_json::json!({ "email": "lead@example.com" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "success": true }));

    let sends = app.received_send_bodies().await;
    assert_eq!(sends.len(), 2);

    // First the operator alert, then the welcome email
    assert_eq!(sends[0]["to"], app.notify_email.as_str());
    assert_eq!(sends[0]["subject"], "New Lead");
    assert!(sends[0]["html"]
        .as_str()
        .unwrap()
        .contains("lead@example.com"));
    assert_eq!(sends[1]["to"], "lead@example.com");
}

#[tokio::test]
async fn invalid_bodies_are_rejected_400_with_no_sends() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (serde_json::json!({}), "missing email"),
        (serde_json::json!({ "email": 123 }), "non-string email"),
        (serde_json::json!({ "email": null }), "null email"),
        (
            serde_json::json!({ "email": "not-an-email" }),
            "malformed email",
        ),
        (serde_json::json!({ "email": "" }), "empty email"),
    ];

    for (invalid_body, description) in test_cases {
        let response = app.post_send(&invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload had {}",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Invalid email" }));
    }
}

#[tokio::test]
async fn failed_alert_returns_500_but_welcome_is_still_attempted() {
    let app = spawn_app().await;

    // First provider call fails, second succeeds
    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.email_server)
        .await;
    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_send(&serde_json::json!({ "email": "lead@example.com" }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(!body["error"].as_str().unwrap().is_empty());

    let sends = app.received_send_bodies().await;
    assert_eq!(sends.len(), 2);
    assert_eq!(sends[1]["to"], "lead@example.com");
}

#[tokio::test]
async fn failed_welcome_email_does_not_fail_the_request() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.email_server)
        .await;
    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_send(&serde_json::json!({ "email": "lead@example.com" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn repeated_submissions_send_two_pairs_of_emails() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(4)
        .mount(&app.email_server)
        .await;

    for _ in 0..2 {
        let response = app
            .post_send(&serde_json::json!({ "email": "lead@example.com" }))
            .await;
        assert_eq!(response.status().as_u16(), 200);
    }
}
