//! E2E tests for backend failures and ignored input.

mod helpers;

use helpers::TestHarness;
use wx_console::ConsoleError;

/// Blank input never reaches the backend or the history.
#[tokio::test]
async fn e2e_blank_question_ignored() {
    let mut h = TestHarness::start().await;
    h.mount_reply("", "It is 30°C in Pune today.").await;

    assert!(h.console.submit("").await.unwrap().is_none());
    assert!(h.console.submit(" \t ").await.unwrap().is_none());

    assert_eq!(h.request_count().await, 0);
    assert!(h.console.history().is_empty());
}

/// Non-2xx status surfaces as an error and records nothing.
#[tokio::test]
async fn e2e_http_error_not_recorded() {
    let mut h = TestHarness::start().await;
    h.mount_status(500).await;

    let err = h.console.submit("weather in Pune today?").await.unwrap_err();
    assert!(matches!(err, ConsoleError::Status(500)));
    assert!(h.console.history().is_empty());
}

/// A failed question does not disturb earlier records.
#[tokio::test]
async fn e2e_failure_after_success_keeps_history() {
    let mut h = TestHarness::start().await;
    h.mount_reply("weather in Pune today?", "It is 30°C in Pune today.")
        .await;

    h.console.submit("weather in Pune today?").await.unwrap();
    let before = h.console.history().all();

    // No route matches this body → wiremock answers 404.
    let err = h.console.submit("unrouted question").await.unwrap_err();
    assert!(matches!(err, ConsoleError::Status(404)));
    assert_eq!(h.console.history().all(), before);
}
