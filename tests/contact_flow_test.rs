use fingard_checkout::adapters::contact_api::ContactApi;
use fingard_checkout::domain::model::ContactFields;
use fingard_checkout::utils::error::ContactFormError;
use fingard_checkout::{CheckoutError, ContactForm};
use httpmock::prelude::*;

fn contact_fields() -> ContactFields {
    ContactFields {
        name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        phone: "+91 9876543210".to_string(),
        message: "Need help with my ITR filing this year.".to_string(),
    }
}

#[tokio::test]
async fn test_contact_submission_success() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/contact")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body_contains("email=asha%40example.com");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "success": true,
                "message": "Thank you for reaching out!"
            }));
    });

    let form = ContactForm::new(ContactApi::new(server.url("/api/contact")));
    let ack = form.submit(&contact_fields()).await.unwrap();

    api_mock.assert();
    assert_eq!(ack.message, "Thank you for reaching out!");
}

#[tokio::test]
async fn test_contact_submission_success_without_message_uses_default_copy() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "success": true }));
    });

    let form = ContactForm::new(ContactApi::new(server.url("/api/contact")));
    let ack = form.submit(&contact_fields()).await.unwrap();

    assert_eq!(
        ack.message,
        "Thank you for your message! We'll get back to you soon."
    );
}

#[tokio::test]
async fn test_contact_submission_rejected_by_endpoint() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "success": false,
                "message": "Message flagged as spam."
            }));
    });

    let form = ContactForm::new(ContactApi::new(server.url("/api/contact")));
    let error = form.submit(&contact_fields()).await.unwrap_err();

    match error {
        ContactFormError::Submission(CheckoutError::ContactRejected { message }) => {
            assert_eq!(message, "Message flagged as spam.");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_contact_transport_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(500);
    });

    let form = ContactForm::new(ContactApi::new(server.url("/api/contact")));
    let error = form.submit(&contact_fields()).await.unwrap_err();

    match error {
        ContactFormError::Submission(e) => {
            assert_eq!(
                e.user_friendly_message(),
                "There was a problem connecting to the server. Please try again."
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_fields_never_reach_the_endpoint() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "success": true }));
    });

    let form = ContactForm::new(ContactApi::new(server.url("/api/contact")));
    let fields = ContactFields {
        name: "A".to_string(),
        email: "a@b".to_string(),
        phone: "12345".to_string(),
        message: "hi".to_string(),
    };

    let error = form.submit(&fields).await.unwrap_err();
    match error {
        ContactFormError::Invalid(errors) => {
            assert_eq!(errors.len(), 4);
            let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, vec!["name", "email", "phone", "message"]);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    api_mock.assert_hits(0);
}
