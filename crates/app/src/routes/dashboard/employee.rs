use super::StatGrid;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdClock, LdFileText};
use dioxus_free_icons::Icon;
use gate::Admission;
use shared_types::dashboard::{employee_stats, employee_tasks};

#[component]
pub fn EmployeeDashboard(admission: Admission) -> Element {
    let tasks = employee_tasks();
    let open = tasks.iter().filter(|t| !t.done).count();

    rsx! {
        div { class: "dashboard",
            p { class: "dashboard-welcome", "Welcome back, {admission.session().email}" }

            StatGrid { stats: employee_stats() }

            div { class: "dashboard-columns",
                section { class: "panel",
                    h3 { class: "panel-title", "My tasks" }
                    p { class: "panel-description", "{open} open" }
                    ul { class: "task-list",
                        for task in tasks {
                            li {
                                key: "{task.title}",
                                class: if task.done { "task task-done" } else { "task" },
                                span { class: "task-title", "{task.title}" }
                                span { class: "task-due",
                                    Icon::<LdClock> { icon: LdClock, width: 14, height: 14 }
                                    "{task.due}"
                                }
                                span { class: "badge badge-{task.priority.as_str().to_lowercase()}",
                                    "{task.priority.as_str()}"
                                }
                            }
                        }
                    }
                }

                section { class: "panel",
                    h3 { class: "panel-title", "Quick actions" }
                    div { class: "quick-actions",
                        button { class: "button button-outline", r#type: "button",
                            Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 }
                            "View schedule"
                        }
                        button { class: "button button-outline", r#type: "button",
                            Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                            "Submit report"
                        }
                    }
                }
            }
        }
    }
}
