pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod products;

use crate::auth::use_auth;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdLock, LdSettings, LdShield, LdUsers};
use dioxus_free_icons::Icon;
use gate::{Admission, Decision, PageAccess};
use shared_types::Page;

use dashboard::{EmployeeDashboard, InventoryDashboard, ManagerDashboard};
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Login {},
    #[layout(RoleGuard)]
    #[layout(DashboardLayout)]
    #[route("/employee")]
    Employee {},
    #[route("/manager")]
    Manager {},
    #[route("/inventory")]
    Inventory {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// The page this route renders, or `None` for unknown paths.
    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Login {} => Some(Page::Login),
            Route::Employee {} => Some(Page::Employee),
            Route::Manager {} => Some(Page::Manager),
            Route::Inventory {} => Some(Page::Inventory),
            Route::NotFound { .. } => None,
        }
    }

    pub fn from_page(page: Page) -> Self {
        match page {
            Page::Login => Route::Login {},
            Page::Employee => Route::Employee {},
            Page::Manager => Route::Manager {},
            Page::Inventory => Route::Inventory {},
        }
    }
}

/// Role guard layout. Re-runs on every navigation and sends anyone without a
/// session for this page's role back to the login page.
#[component]
fn RoleGuard() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();

    let access = match route.page() {
        Some(page) => auth.check(page),
        None => PageAccess::Public,
    };

    match access {
        PageAccess::Public => rsx! { Outlet::<Route> {} },
        PageAccess::Guarded(Decision::Allow(admission)) => {
            auth.admit(admission);
            rsx! { Outlet::<Route> {} }
        }
        PageAccess::Guarded(Decision::RedirectToLogin(_)) => {
            auth.forget();
            navigator().replace(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
    }
}

/// Dashboard shell: sidebar with the signed-in role and a top bar.
#[component]
fn DashboardLayout() -> Element {
    let route: Route = use_route();
    let auth = use_auth();
    let mut sidebar_open = use_signal(|| false);

    let Some(admission) = auth.admission.read().clone() else {
        return rsx! {};
    };
    let role = admission.role();

    let page_title = match &route {
        Route::Employee {} => "Employee Dashboard",
        Route::Manager {} => "Manager Dashboard",
        Route::Inventory {} => "Inventory Dashboard",
        _ => "",
    };

    let mut auth_for_logout = auth.clone();
    let handle_logout = move |_| {
        let next = auth_for_logout.sign_out();
        navigator().replace(Route::from_page(next));
    };

    rsx! {
        if sidebar_open() {
            div {
                class: "sidebar-overlay",
                onclick: move |_| sidebar_open.set(false),
            }
        }

        aside { class: if sidebar_open() { "sidebar sidebar-open" } else { "sidebar" },
            div { class: "sidebar-brand",
                Icon::<LdShield> { icon: LdShield, width: 22, height: 22 }
                span { class: "sidebar-brand-name", "Aura" }
            }

            div { class: "sidebar-profile",
                div { class: "avatar", "{role.initials()}" }
                div {
                    p { class: "sidebar-profile-role", "{role.display_name()}" }
                    p { class: "sidebar-profile-email", "{admission.session().email}" }
                }
            }

            nav { class: "sidebar-nav",
                button { class: "sidebar-nav-item", r#type: "button",
                    Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
                    "Profile"
                }
                button { class: "sidebar-nav-item", r#type: "button",
                    Icon::<LdSettings> { icon: LdSettings, width: 16, height: 16 }
                    "Settings"
                }
            }

            div { class: "sidebar-footer",
                button {
                    class: "button button-outline sidebar-logout",
                    r#type: "button",
                    onclick: handle_logout,
                    Icon::<LdLock> { icon: LdLock, width: 16, height: 16 }
                    "Sign out"
                }
            }
        }

        div { class: "dashboard-main",
            header { class: "topbar",
                button {
                    class: "topbar-menu",
                    r#type: "button",
                    onclick: move |_| sidebar_open.set(true),
                    "☰"
                }
                h1 { class: "topbar-title", "{page_title}" }
                div { class: "topbar-actions",
                    Icon::<LdBell> { icon: LdBell, width: 16, height: 16 }
                    div { class: "avatar avatar-sm", "{role.initials()}" }
                }
            }
            main { class: "dashboard-content",
                NoticeBanner {}
                Outlet::<Route> {}
            }
        }
    }
}

/// Shows the pending sign-in or sign-out message until dismissed.
#[component]
pub fn NoticeBanner() -> Element {
    let mut auth = use_auth();
    let Some(notice) = auth.notice.read().clone() else {
        return rsx! {};
    };

    rsx! {
        div { class: "notice notice-banner", role: "status",
            div {
                p { class: "notice-title", "{notice.title}" }
                p { class: "notice-description", "{notice.description}" }
            }
            button {
                class: "button button-ghost",
                r#type: "button",
                onclick: move |_| auth.dismiss_notice(),
                "×"
            }
        }
    }
}

fn current_admission() -> Option<Admission> {
    use_auth().admission.read().clone()
}

#[component]
fn Employee() -> Element {
    match current_admission() {
        Some(admission) => rsx! { EmployeeDashboard { admission } },
        None => rsx! {},
    }
}

#[component]
fn Manager() -> Element {
    match current_admission() {
        Some(admission) => rsx! { ManagerDashboard { admission } },
        None => rsx! {},
    }
}

#[component]
fn Inventory() -> Element {
    match current_admission() {
        Some(admission) => rsx! { InventoryDashboard { admission } },
        None => rsx! {},
    }
}
