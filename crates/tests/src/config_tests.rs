use gate::config::{apply_login_delay_override, parse_config};
use gate::{CredentialVerifier, KeyedSessionStore, LoginFlow, LoginRequest, MemoryStorage, SessionStore};
use pretty_assertions::assert_eq;
use shared_types::{AppConfig, AppErrorKind, Role};
use std::sync::Arc;
use std::time::Duration;

fn flow_from(config: &AppConfig) -> LoginFlow {
    let store: Arc<dyn SessionStore> = Arc::new(KeyedSessionStore::new(
        MemoryStorage::new(),
        config.session.storage_key.clone(),
    ));
    LoginFlow::new(CredentialVerifier::from_config(config), store)
}

#[test]
fn test_defaults_ship_demo_logins() {
    let config = AppConfig::default();
    assert_eq!(config.session.storage_key, "aura.session");
    assert_eq!(config.session.login_delay(), Duration::from_millis(1000));
    assert!(config.features.credential_hint);

    let verifier = CredentialVerifier::from_config(&config);
    assert_eq!(verifier.verify("funcionario@aura.com", "123456"), Some(Role::Employee));
    assert_eq!(verifier.verify("gerente@aura.com", "123456"), Some(Role::Manager));
    assert_eq!(verifier.verify("estoque@aura.com", "123456"), Some(Role::Inventory));
}

#[tokio::test]
async fn test_configured_credentials_replace_demo_set() {
    let config = parse_config(
        r#"
        [session]
        storage_key = "aura.custom"
        login_delay_ms = 0

        [features]
        credential_hint = false

        [[credentials]]
        email = "chefe@aura.com"
        password = "s3cret"
        role = "manager"
        "#,
    )
    .unwrap();
    assert!(!config.features.credential_hint);

    let flow = flow_from(&config);
    let session = flow
        .submit(LoginRequest::new("chefe@aura.com", "s3cret"), std::future::ready(()))
        .await
        .unwrap();
    assert_eq!(session.role, Role::Manager);

    let err = flow
        .submit(LoginRequest::new("gerente@aura.com", "123456"), std::future::ready(()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InvalidCredentials);
}

#[test]
fn test_unknown_role_in_config_is_rejected() {
    let err = parse_config(
        r#"
        [[credentials]]
        email = "root@aura.com"
        password = "x"
        role = "admin"
        "#,
    )
    .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ConfigError);
}

#[test]
fn test_malformed_credential_email_is_rejected() {
    // A login the form could never submit must not load.
    let err = parse_config(
        r#"
        [[credentials]]
        email = "admin"
        password = "pw"
        role = "manager"
        "#,
    )
    .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ConfigError);
    assert!(err.message.contains("admin"));
}

#[test]
fn test_blank_storage_key_is_rejected() {
    let err = parse_config("[session]\nstorage_key = \"  \"\n").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ConfigError);
}

#[test]
fn test_env_delay_override() {
    let mut config = AppConfig::default();
    apply_login_delay_override(&mut config, Some("250"));
    assert_eq!(config.session.login_delay(), Duration::from_millis(250));
}
