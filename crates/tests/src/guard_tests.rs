use crate::common;
use gate::{check_page, Decision, DenyReason, KeyValueStorage, PageAccess};
use pretty_assertions::assert_eq;
use shared_types::{Page, Role, DEFAULT_STORAGE_KEY};

fn is_allowed(access: &PageAccess) -> bool {
    matches!(access, PageAccess::Guarded(Decision::Allow(_)))
}

#[tokio::test]
async fn test_manager_sees_only_manager_dashboard() {
    let (flow, _) = common::memory_gate();
    common::login(&flow, "gerente@aura.com", "123456").await.unwrap();
    let store = flow.store().as_ref();

    assert!(is_allowed(&check_page(store, Page::Manager)));
    for page in [Page::Employee, Page::Inventory] {
        let access = check_page(store, page);
        let PageAccess::Guarded(decision) = access else {
            panic!("{page:?} should be guarded");
        };
        assert_eq!(decision.redirect_target(), Some(Page::Login), "{page:?}");
    }
}

#[tokio::test]
async fn test_allowed_admission_carries_the_stored_session() {
    let (flow, _) = common::memory_gate();
    let session = common::login(&flow, "estoque@aura.com", "123456").await.unwrap();

    let PageAccess::Guarded(Decision::Allow(admission)) =
        check_page(flow.store().as_ref(), Page::Inventory)
    else {
        panic!("Inventory should be allowed");
    };
    assert_eq!(admission.role(), Role::Inventory);
    assert_eq!(admission.into_session(), session);
}

#[test]
fn test_every_dashboard_redirects_without_session() {
    let (flow, _) = common::memory_gate();
    for page in [Page::Employee, Page::Manager, Page::Inventory] {
        assert_eq!(
            check_page(flow.store().as_ref(), page),
            PageAccess::Guarded(Decision::RedirectToLogin(DenyReason::MissingOrMalformedSession)),
            "{page:?}"
        );
    }
}

#[test]
fn test_login_page_never_redirects() {
    let (flow, _) = common::memory_gate();
    assert_eq!(check_page(flow.store().as_ref(), Page::Login), PageAccess::Public);
}

#[test]
fn test_corrupted_session_redirects_everywhere() {
    let (flow, storage) = common::memory_gate();
    for raw in ["not json", r#"{"role":"admin","email":"x@aura.com"}"#, "[]"] {
        storage.set_item(DEFAULT_STORAGE_KEY, raw).unwrap();
        for page in [Page::Employee, Page::Manager, Page::Inventory] {
            assert_eq!(
                check_page(flow.store().as_ref(), page),
                PageAccess::Guarded(Decision::RedirectToLogin(
                    DenyReason::MissingOrMalformedSession
                )),
                "{raw} on {page:?}"
            );
        }
    }
}

#[test]
fn test_legacy_stored_user_is_still_admitted() {
    let (flow, storage) = common::memory_gate();
    storage
        .set_item(
            DEFAULT_STORAGE_KEY,
            r#"{"email":"funcionario@aura.com","password":"123456","role":"employee"}"#,
        )
        .unwrap();

    assert!(is_allowed(&check_page(flow.store().as_ref(), Page::Employee)));
    assert!(!is_allowed(&check_page(flow.store().as_ref(), Page::Manager)));
}

#[test]
fn test_hand_edited_role_grants_that_dashboard() {
    // The stored role claim is trusted as-is.
    let (flow, storage) = common::memory_gate();
    storage
        .set_item(DEFAULT_STORAGE_KEY, r#"{"role":"manager","email":"anyone@aura.com"}"#)
        .unwrap();
    assert!(is_allowed(&check_page(flow.store().as_ref(), Page::Manager)));
}

#[test]
fn test_routes_resolve_to_pages() {
    assert_eq!(Page::from_path("/"), Some(Page::Login));
    assert_eq!(Page::from_path("/manager"), Some(Page::Manager));
    assert_eq!(Page::from_path("/manager/"), Some(Page::Manager));
    assert_eq!(Page::from_path("/admin"), None);
}
