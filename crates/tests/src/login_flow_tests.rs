use crate::common;
use gate::{KeyValueStorage, LoginRequest};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Notice, Page, Role, DEFAULT_STORAGE_KEY};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_each_demo_login_lands_on_its_dashboard() {
    let cases = [
        ("funcionario@aura.com", Role::Employee, "/employee"),
        ("gerente@aura.com", Role::Manager, "/manager"),
        ("estoque@aura.com", Role::Inventory, "/inventory"),
    ];
    for (email, role, path) in cases {
        let (flow, _) = common::memory_gate();
        let session = common::login(&flow, email, "123456").await.unwrap();
        assert_eq!(session.role, role, "role for {email}");
        assert_eq!(session.role.home().path(), path, "home for {email}");
        assert_eq!(flow.store().load(), Some(session));
    }
}

#[tokio::test]
async fn test_wrong_password_reports_invalid_credentials() {
    let (flow, storage) = common::memory_gate();
    let err = common::login(&flow, "funcionario@aura.com", "wrongpass")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::InvalidCredentials);
    assert_eq!(err.message, "Incorrect email or password");
    assert_eq!(
        storage.get_item(DEFAULT_STORAGE_KEY).unwrap(),
        None,
        "No session should be written"
    );
}

#[tokio::test]
async fn test_email_match_is_case_sensitive() {
    let (flow, _) = common::memory_gate();
    let err = common::login(&flow, "Gerente@aura.com", "123456")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InvalidCredentials);
    assert_eq!(flow.store().load(), None);
}

#[tokio::test]
async fn test_email_is_not_trimmed() {
    let (flow, _) = common::memory_gate();
    let err = common::login(&flow, " gerente@aura.com", "123456")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("email"));
    assert_eq!(flow.store().load(), None);
}

#[tokio::test]
async fn test_password_is_not_trimmed() {
    let (flow, _) = common::memory_gate();
    let err = common::login(&flow, "gerente@aura.com", "123456 ")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InvalidCredentials);
    assert_eq!(flow.store().load(), None);
}

#[tokio::test]
async fn test_second_login_replaces_first_session() {
    let (flow, _) = common::memory_gate();
    let first = common::login(&flow, "funcionario@aura.com", "123456").await.unwrap();
    let second = common::login(&flow, "estoque@aura.com", "123456").await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(flow.store().load(), Some(second));
}

#[tokio::test]
async fn test_blank_form_is_rejected_before_verification() {
    let (flow, _) = common::memory_gate();
    let err = common::login(&flow, "", "").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("email"));
    assert!(err.field_errors.contains_key("password"));
}

#[tokio::test(start_paused = true)]
async fn test_submit_waits_for_delay_before_writing() {
    let (flow, _) = common::memory_gate();
    let attempt = {
        let flow = Arc::clone(&flow);
        tokio::spawn(async move {
            flow.submit(
                LoginRequest::new("gerente@aura.com", "123456"),
                tokio::time::sleep(Duration::from_millis(1000)),
            )
            .await
        })
    };

    tokio::task::yield_now().await;
    assert!(flow.is_pending(), "Submission should be pending during the delay");
    assert_eq!(flow.store().load(), None, "Nothing written before the delay ends");

    let session = attempt.await.unwrap().unwrap();
    assert_eq!(session.role.home(), Page::Manager);
    assert!(!flow.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_submit_is_rejected_and_first_wins() {
    let (flow, _) = common::memory_gate();
    let first = {
        let flow = Arc::clone(&flow);
        tokio::spawn(async move {
            flow.submit(
                LoginRequest::new("funcionario@aura.com", "123456"),
                tokio::time::sleep(Duration::from_millis(1000)),
            )
            .await
        })
    };
    tokio::task::yield_now().await;

    let err = common::login(&flow, "gerente@aura.com", "123456")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::LoginInProgress);

    first.await.unwrap().unwrap();
    assert_eq!(flow.store().load().map(|s| s.role), Some(Role::Employee));
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_submit_writes_nothing_and_frees_the_flow() {
    let (flow, _) = common::memory_gate();
    let attempt = {
        let flow = Arc::clone(&flow);
        tokio::spawn(async move {
            flow.submit(
                LoginRequest::new("gerente@aura.com", "123456"),
                tokio::time::sleep(Duration::from_secs(30)),
            )
            .await
        })
    };
    tokio::task::yield_now().await;
    flow.cancel();

    let err = attempt.await.unwrap().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Cancelled);
    assert!(err.is_silent());
    assert_eq!(flow.store().load(), None);

    let session = common::login(&flow, "estoque@aura.com", "123456").await.unwrap();
    assert_eq!(session.role, Role::Inventory);
}

#[tokio::test]
async fn test_sign_in_notice_names_the_landing_dashboard() {
    let (flow, _) = common::memory_gate();
    let session = common::login(&flow, "gerente@aura.com", "123456").await.unwrap();
    let notice = Notice::signed_in(session.role);
    assert_eq!(notice.title, "Signed in successfully!");
    assert_eq!(notice.description, "Welcome to the Manager dashboard");
}
