use super::StatGrid;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdCalendar, LdFolder, LdUsers};
use dioxus_free_icons::Icon;
use gate::Admission;
use shared_types::dashboard::{
    distribution_percentages, manager_stats, project_distribution, team_members, weekly_performance,
    Presence,
};

#[component]
pub fn ManagerDashboard(admission: Admission) -> Element {
    let team = team_members();
    let online = team.iter().filter(|m| m.presence == Presence::Online).count();
    let week = weekly_performance();
    let distribution = distribution_percentages(&project_distribution());

    rsx! {
        div { class: "dashboard",
            p { class: "dashboard-welcome", "Welcome back, {admission.session().email}" }

            StatGrid { stats: manager_stats() }

            section { class: "panel",
                div { class: "panel-header",
                    h3 { class: "panel-title",
                        Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                        "Team"
                    }
                    span { class: "panel-description", "{online} of {team.len()} online" }
                }
                table { class: "table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Position" }
                            th { "Status" }
                            th { "Open tasks" }
                        }
                    }
                    tbody {
                        for member in team {
                            tr { key: "{member.name}",
                                td { "{member.name}" }
                                td { "{member.position}" }
                                td {
                                    span { class: "presence presence-{member.presence.as_str()}",
                                        "{member.presence.as_str()}"
                                    }
                                }
                                td { "{member.open_tasks}" }
                            }
                        }
                    }
                }
            }

            section { class: "panel",
                h3 { class: "panel-title", "Quick actions" }
                div { class: "quick-actions",
                    button { class: "button button-outline", r#type: "button",
                        Icon::<LdBriefcase> { icon: LdBriefcase, width: 16, height: 16 }
                        "Assign task"
                    }
                    button { class: "button button-outline", r#type: "button",
                        Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
                        "Schedule meeting"
                    }
                }
            }

            div { class: "dashboard-halves",
                section { class: "panel",
                    div { class: "panel-header",
                        h3 { class: "panel-title",
                            Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                            "Weekly performance"
                        }
                        span { class: "panel-description", "Tasks completed over the last 7 days" }
                    }
                    ul { class: "bar-chart",
                        for day in week {
                            li { class: "bar-row", key: "{day.day}",
                                span { "{day.day}" }
                                div { class: "bar-track",
                                    div { class: "bar-fill", style: "width: {day.percent()}%" }
                                }
                                span { "{day.percent()}%" }
                            }
                        }
                    }
                }

                section { class: "panel",
                    div { class: "panel-header",
                        h3 { class: "panel-title",
                            Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 }
                            "Project distribution"
                        }
                        span { class: "panel-description", "Status of active projects" }
                    }
                    ul { class: "bar-chart",
                        for (status, pct) in distribution {
                            li { class: "bar-row", key: "{status.as_str()}",
                                span { "{status.label()}" }
                                div { class: "bar-track",
                                    div { class: "bar-fill bar-fill-{status.as_str()}", style: "width: {pct}%" }
                                }
                                span { "{pct}%" }
                            }
                        }
                    }
                }
            }
        }
    }
}
