use crate::auth::use_auth;
use crate::routes::{NoticeBanner, Route};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLock, LdShield};
use dioxus_free_icons::Icon;
use gate::LoginRequest;
use shared_types::Notice;
use std::collections::HashMap;

/// Login page. A visitor who already holds a session goes straight to their
/// own dashboard.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let auth_for_redirect = auth.clone();
    use_effect(move || {
        if let Some(session) = auth_for_redirect.current_session() {
            navigator().replace(Route::from_page(session.role.home()));
        }
    });

    // Leaving the page abandons any sign-in still waiting.
    let flow_for_drop = auth.flow.clone();
    use_drop(move || flow_for_drop.cancel());

    let auth_for_submit = auth.clone();
    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let mut auth = auth_for_submit.clone();
        async move {
            if loading() {
                return;
            }
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let request = LoginRequest::new(email(), password());
            let delay = crate::latency::pause(auth.login_delay);
            match auth.flow.submit(request, delay).await {
                Ok(session) => {
                    password.set(String::new());
                    auth.announce(Notice::signed_in(session.role));
                    navigator().push(Route::from_page(session.role.home()));
                }
                Err(e) if e.is_silent() => {}
                Err(e) if !e.field_errors.is_empty() => field_errors.set(e.field_errors),
                Err(e) => error_msg.set(Some(e.message)),
            }
            loading.set(false);
        }
    };

    let hint = if auth.features.credential_hint {
        auth.flow
            .verifier()
            .credentials()
            .iter()
            .map(|c| (c.role.display_name(), c.email.clone(), c.password.clone()))
            .collect::<Vec<_>>()
    } else {
        Vec::new()
    };

    rsx! {
        div { class: "auth-page",
            NoticeBanner {}
            div { class: "auth-card",
                div { class: "auth-header",
                    div { class: "auth-brand",
                        Icon::<LdShield> { icon: LdShield, width: 28, height: 28 }
                        span { class: "auth-brand-name", "Aura" }
                    }
                    h2 { class: "auth-title", "Management System" }
                    p { class: "auth-description", "Sign in to access your dashboard" }
                }

                form { class: "auth-form", onsubmit: handle_login,
                    div { class: "auth-field",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "you@email.com",
                            value: "{email}",
                            oninput: move |e: FormEvent| email.set(e.value()),
                        }
                        if let Some(err) = field_errors.read().get("email") {
                            p { class: "field-error", "{err}" }
                        }
                    }

                    div { class: "auth-field",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: "{password}",
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                        if let Some(err) = field_errors.read().get("password") {
                            p { class: "field-error", "{err}" }
                        }
                    }

                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    button {
                        class: "button button-primary auth-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() {
                            "Signing in..."
                        } else {
                            Icon::<LdLock> { icon: LdLock, width: 16, height: 16 }
                            "Sign in"
                        }
                    }
                }

                if !hint.is_empty() {
                    div { class: "auth-hint",
                        p { "Test credentials:" }
                        for (role, email, password) in hint {
                            p { key: "{email}", "{role}: {email} / {password}" }
                        }
                    }
                }
            }
        }
    }
}
