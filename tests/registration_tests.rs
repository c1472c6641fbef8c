mod common;

use axum::http::StatusCode;
use common::{TestApp, fill_draft_with, fill_valid_draft, unreachable_config};
use registration_form::form::state_machine::SubmissionState;
use registration_form::{Field, SubmitOutcome, http_controller};

#[tokio::test]
async fn test_valid_submission_posts_json_and_navigates() {
    let app = TestApp::new(StatusCode::CREATED).await;
    let mut controller = app.controller();
    fill_valid_draft(&mut controller);

    let outcome = controller.submit().await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Created);

    let requests = app.requests();
    assert_eq!(requests.len(), 1, "exactly one request per valid submission");

    let request = &requests[0];
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        request.body,
        serde_json::json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "cin": "AB123456",
            "gender": "F",
            "address": "12 Main Street, Block: C",
            "country": "Morocco",
            "email": "jane.doe@example.com",
            "phoneNumber": "0612345678",
            "password": "s3cretpass",
            "Cpassword": "s3cretpass"
        })
    );

    assert_eq!(controller.state().submission, SubmissionState::Succeeded);
    assert_eq!(controller.navigator().history(), vec!["/Authentification"]);
    assert_eq!(
        controller.view().success_message(),
        Some("Account created successfully!")
    );
    assert!(controller.state().draft.is_empty());
    assert!(controller.view().submit_button().enabled);
}

#[tokio::test]
async fn test_non_ok_status_shows_general_error() {
    let app = TestApp::new(StatusCode::BAD_REQUEST).await;
    let mut controller = app.controller();
    fill_valid_draft(&mut controller);

    let outcome = controller.submit().await.unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            reason: "Error creating account".to_string()
        }
    );
    assert_eq!(app.requests().len(), 1);
    assert_eq!(controller.view().general_error(), Some("Error creating account"));
    assert!(controller.state().errors.fields.is_empty());
    assert!(controller.state().draft.is_empty(), "draft is discarded on failure");
    assert!(controller.view().submit_button().enabled);
    assert!(controller.navigator().history().is_empty(), "no navigation on failure");
    assert!(controller.view().success_message().is_none());
}

#[tokio::test]
async fn test_server_error_is_not_distinguished() {
    let app = TestApp::new(StatusCode::INTERNAL_SERVER_ERROR).await;
    let mut controller = app.controller();
    fill_valid_draft(&mut controller);

    controller.submit().await.unwrap();

    assert_eq!(controller.view().general_error(), Some("Error creating account"));
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_the_server() {
    let app = TestApp::new(StatusCode::OK).await;
    let mut controller = app.controller();
    fill_draft_with(&mut controller, Field::PhoneNumber, "12345");

    let outcome = controller.submit().await.unwrap();

    match outcome {
        SubmitOutcome::Rejected(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.get(Field::PhoneNumber),
                Some("Phone Number must be 10 digits")
            );
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert!(app.requests().is_empty());
    assert_eq!(controller.state().draft.get(Field::FirstName), "Jane");
    assert_eq!(
        controller.view().field_error(Field::PhoneNumber),
        Some("Phone Number must be 10 digits")
    );
}

#[tokio::test]
async fn test_password_mismatch_blocks_submission() {
    let app = TestApp::new(StatusCode::OK).await;
    let mut controller = app.controller();
    fill_draft_with(&mut controller, Field::PasswordConfirmation, "xbcdefgh");

    let outcome = controller.submit().await.unwrap();

    assert!(matches!(
        outcome,
        SubmitOutcome::Rejected(ref errors)
            if errors.get(Field::PasswordConfirmation) == Some("Passwords do not match")
    ));
    assert!(app.requests().is_empty());
}

#[tokio::test]
async fn test_unreachable_endpoint_surfaces_transport_error() {
    let config = unreachable_config().await;
    let mut controller = http_controller(&config).unwrap();
    common::fill_valid_draft(&mut controller);

    let outcome = controller.submit().await.unwrap();

    let SubmitOutcome::Failed { reason } = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert!(!reason.is_empty());
    assert_eq!(controller.view().general_error(), Some(reason.as_str()));
    assert!(controller.state().draft.is_empty());
    assert!(controller.navigator().history().is_empty());
}

#[tokio::test]
async fn test_second_attempt_after_failure() {
    let app = TestApp::new(StatusCode::CONFLICT).await;
    let mut controller = app.controller();

    fill_valid_draft(&mut controller);
    controller.submit().await.unwrap();

    // Operator re-types the form after the failed attempt emptied it.
    fill_valid_draft(&mut controller);
    let outcome = controller.submit().await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
    assert_eq!(app.requests().len(), 2);
}

#[tokio::test]
async fn test_errors_are_recomputed_on_each_submit() {
    let app = TestApp::new(StatusCode::OK).await;
    let mut controller = app.controller();

    controller.submit().await.unwrap();
    assert!(controller.view().field_error(Field::Email).is_some());

    fill_draft_with(&mut controller, Field::Email, "not-an-email");
    controller.submit().await.unwrap();

    let errors = &controller.state().errors.fields;
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::Email), Some("Email address is invalid"));
    assert!(controller.view().field_error(Field::FirstName).is_none());
}
