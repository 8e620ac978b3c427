use fingard_checkout::adapters::razorpay::RazorpayGateway;
use fingard_checkout::domain::model::{CustomerPrefill, PaymentNotes, PaymentRequest};
use fingard_checkout::domain::ports::PaymentGateway;
use fingard_checkout::CheckoutError;
use httpmock::prelude::*;

fn payment_request() -> PaymentRequest {
    PaymentRequest {
        amount_minor: 89910,
        currency: "INR".to_string(),
        business_name: "Fingard Partners".to_string(),
        logo_url: None,
        description: "Payment for itr-standard".to_string(),
        prefill: CustomerPrefill {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            contact: "+91 9876543210".to_string(),
        },
        notes: PaymentNotes {
            service_type: "itr-standard".to_string(),
            description: "FY 2025-26 filing".to_string(),
            coupon_code: "FINGARD10".to_string(),
            original_amount: 999.0,
            discount_applied: "10%".to_string(),
        },
        theme_color: "#002147".to_string(),
    }
}

fn gateway(server: &MockServer) -> RazorpayGateway {
    RazorpayGateway::new("rzp_test_abc123", Some("secret".to_string()))
        .with_api_base(server.base_url())
}

#[tokio::test]
async fn test_order_created() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/orders")
            .header_exists("authorization")
            .json_body_partial(
                r#"{
                    "amount": 89910,
                    "currency": "INR",
                    "notes": { "coupon_code": "FINGARD10", "discount_applied": "10%" }
                }"#,
            );
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": "order_LkNP5M7ffpLZrv",
                "amount": 89910,
                "currency": "INR",
                "status": "created"
            }));
    });

    let receipt = gateway(&server).collect(&payment_request()).await.unwrap();

    api_mock.assert();
    assert_eq!(receipt.payment_id, "order_LkNP5M7ffpLZrv");
}

#[tokio::test]
async fn test_declined_order_carries_description() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/orders");
        then.status(400)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "error": {
                    "code": "BAD_REQUEST_ERROR",
                    "description": "Order amount less than minimum amount allowed"
                }
            }));
    });

    let error = gateway(&server).collect(&payment_request()).await.unwrap_err();

    match error {
        CheckoutError::PaymentDeclined { description } => {
            assert_eq!(description, "Order amount less than minimum amount allowed");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_declined_order_without_body_falls_back() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/orders");
        then.status(502);
    });

    let error = gateway(&server).collect(&payment_request()).await.unwrap_err();

    match error {
        CheckoutError::PaymentDeclined { description } => {
            assert_eq!(description, "Unknown error");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
