use crate::common;
use gate::{check_page, logout, Decision, PageAccess};
use pretty_assertions::assert_eq;
use shared_types::{Page, Role, DEFAULT_STORAGE_KEY};

#[tokio::test]
async fn test_session_survives_restart() {
    let dir = common::scratch_dir("aura_restart");
    let session = {
        let flow = common::file_gate(&dir);
        common::login(&flow, "funcionario@aura.com", "123456").await.unwrap()
    };

    let reopened = common::file_gate(&dir);
    assert_eq!(reopened.store().load(), Some(session));
    assert!(matches!(
        check_page(reopened.store().as_ref(), Page::Employee),
        PageAccess::Guarded(Decision::Allow(_))
    ));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_logout_removes_session_file() {
    let dir = common::scratch_dir("aura_logout");
    let flow = common::file_gate(&dir);
    common::login(&flow, "gerente@aura.com", "123456").await.unwrap();

    let file = dir.join(format!("{DEFAULT_STORAGE_KEY}.json"));
    assert!(file.exists(), "Session file should exist after login");

    logout(flow.store().as_ref());
    assert!(!file.exists(), "Session file should be gone after logout");
    assert_eq!(common::file_gate(&dir).store().load(), None);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_stored_file_holds_role_but_no_password() {
    let dir = common::scratch_dir("aura_contents");
    let flow = common::file_gate(&dir);
    flow.store()
        .save_role(Role::Inventory, "estoque@aura.com")
        .unwrap();

    let raw = std::fs::read_to_string(dir.join(format!("{DEFAULT_STORAGE_KEY}.json"))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["role"], "inventory");
    assert_eq!(value["email"], "estoque@aura.com");
    assert!(value.get("password").is_none());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_garbage_file_reads_as_signed_out() {
    let dir = common::scratch_dir("aura_garbage");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(format!("{DEFAULT_STORAGE_KEY}.json")), "\u{0}\u{1}garbage").unwrap();

    let flow = common::file_gate(&dir);
    assert_eq!(flow.store().load(), None);

    std::fs::remove_dir_all(&dir).unwrap();
}
