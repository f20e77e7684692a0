use super::StatGrid;
use crate::routes::products::ProductManager;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdClock, LdFileText, LdFolder, LdPackage, LdSearch,
};
use dioxus_free_icons::Icon;
use gate::Admission;
use shared_types::dashboard::{
    inventory_stats, low_stock_alerts, net_movement, recent_movements, AlertLevel,
    MovementKind,
};

fn alert_classes(level: AlertLevel) -> (&'static str, &'static str) {
    match level {
        AlertLevel::Critical => ("stock-critical", "badge badge-danger"),
        AlertLevel::Low => ("stock-low", "badge badge-warning"),
    }
}

fn movement_class(kind: MovementKind) -> &'static str {
    match kind {
        MovementKind::Inbound => "movement-inbound",
        MovementKind::Outbound => "movement-outbound",
    }
}

#[component]
pub fn InventoryDashboard(admission: Admission) -> Element {
    let alerts = low_stock_alerts();
    let movements = recent_movements();
    let net = net_movement(&movements);

    rsx! {
        div { class: "dashboard",
            p { class: "dashboard-welcome", "Welcome back, {admission.session().email}" }
            StatGrid { stats: inventory_stats() }

            div { class: "dashboard-columns",
                section { class: "panel",
                    div { class: "panel-header",
                        h3 { class: "panel-title",
                            Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                            "Low stock"
                        }
                        span { class: "panel-description", "Products that need restocking" }
                        button { class: "button button-outline", r#type: "button", "Request purchase" }
                    }
                    ul { class: "alert-list",
                        for alert in alerts {
                            {
                                let (stock_class, badge_class) = alert_classes(alert.level);
                                rsx! {
                                    li { class: "alert-item", key: "{alert.name}",
                                        div {
                                            p { "{alert.name}" }
                                            p { class: "alert-meta",
                                                "{alert.category} · Stock: "
                                                span { class: stock_class, "{alert.stock}" }
                                                " · Min: {alert.minimum} · Short {alert.shortfall()}"
                                            }
                                        }
                                        div {
                                            span { class: badge_class, "{alert.level.label()}" }
                                            button { class: "button button-ghost", r#type: "button", "Restock" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                section { class: "panel",
                    h3 { class: "panel-title", "Quick actions" }
                    div { class: "quick-actions",
                        button { class: "button button-outline", r#type: "button",
                            Icon::<LdPackage> { icon: LdPackage, width: 16, height: 16 }
                            "Add product"
                        }
                        button { class: "button button-outline", r#type: "button",
                            Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                            "Find item"
                        }
                        button { class: "button button-outline", r#type: "button",
                            Icon::<LdFolder> { icon: LdFolder, width: 16, height: 16 }
                            "New inbound"
                        }
                        button { class: "button button-outline", r#type: "button",
                            Icon::<LdFolder> { icon: LdFolder, width: 16, height: 16 }
                            "New outbound"
                        }
                        button { class: "button button-outline", r#type: "button",
                            Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                            "Report"
                        }
                        button { class: "button button-outline", r#type: "button",
                            Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                            "Stock count"
                        }
                    }
                }
            }

            section { class: "panel",
                div { class: "panel-header",
                    h3 { class: "panel-title", "Recent movements" }
                    span { class: "panel-description", "Net {net:+} units" }
                }
                ul { class: "movement-list",
                    for (index, movement) in movements.into_iter().enumerate() {
                        {
                            let tone = movement_class(movement.kind);
                            rsx! {
                                li { class: "movement-item", key: "{index}",
                                    span { class: "movement-arrow {tone}", "{movement.kind.arrow()}" }
                                    div { style: "flex: 1",
                                        p { "{movement.item}" }
                                        p { class: "movement-meta", "by {movement.user} · {movement.time}" }
                                    }
                                    div { class: "movement-quantity",
                                        p { class: tone, "{movement.kind.sign()}{movement.quantity}" }
                                        p { class: "movement-meta", "{movement.kind.label()}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            ProductManager {}
        }
    }
}
