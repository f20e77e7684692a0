mod employee;
mod inventory;
mod manager;

pub use employee::EmployeeDashboard;
pub use inventory::InventoryDashboard;
pub use manager::ManagerDashboard;

use dioxus::prelude::*;
use shared_types::dashboard::StatCard;

/// Row of headline numbers shown at the top of every dashboard.
#[component]
fn StatGrid(stats: Vec<StatCard>) -> Element {
    rsx! {
        div { class: "stat-grid",
            for stat in stats {
                div { class: "stat-card", key: "{stat.title}",
                    p { class: "stat-title", "{stat.title}" }
                    p { class: "stat-value", "{stat.value}" }
                    p { class: "stat-description", "{stat.description}" }
                    span {
                        class: if stat.trend_is_positive() { "stat-trend trend-up" } else { "stat-trend trend-down" },
                        "{stat.trend:+}%"
                    }
                }
            }
        }
    }
}
