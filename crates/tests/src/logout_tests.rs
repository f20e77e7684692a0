use crate::common;
use gate::{check_page, logout, Decision, DenyReason, PageAccess};
use pretty_assertions::assert_eq;
use shared_types::Page;

#[tokio::test]
async fn test_logout_then_dashboard_redirects_to_login() {
    let (flow, _) = common::memory_gate();
    common::login(&flow, "estoque@aura.com", "123456").await.unwrap();
    let store = flow.store().as_ref();

    assert_eq!(logout(store), Page::Login);
    assert_eq!(store.load(), None);
    assert_eq!(
        check_page(store, Page::Inventory),
        PageAccess::Guarded(Decision::RedirectToLogin(DenyReason::MissingOrMalformedSession))
    );
}

#[test]
fn test_logout_without_session_still_returns_login() {
    let (flow, _) = common::memory_gate();
    assert_eq!(logout(flow.store().as_ref()), Page::Login);
    assert_eq!(logout(flow.store().as_ref()), Page::Login);
}

#[tokio::test]
async fn test_login_after_logout_issues_new_session() {
    let (flow, _) = common::memory_gate();
    let before = common::login(&flow, "gerente@aura.com", "123456").await.unwrap();
    logout(flow.store().as_ref());
    let after = common::login(&flow, "gerente@aura.com", "123456").await.unwrap();

    assert_ne!(before.id, after.id);
    assert_eq!(flow.store().load(), Some(after));
}
