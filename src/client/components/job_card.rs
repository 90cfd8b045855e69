use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBuilding, FaLocationDot};
use dioxus_free_icons::Icon;

use crate::client::router::Route;
use crate::client::store::session::use_session;
use crate::model::auth::Role;
use crate::model::job::JobDto;

/// Formats a salary with thousands separators, e.g. `₹ 75,000`.
pub(crate) fn format_salary(salary: f64) -> String {
    let whole = salary.round() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::new();
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if whole < 0 {
        format!("₹ -{}", grouped)
    } else {
        format!("₹ {}", grouped)
    }
}

#[component]
pub fn JobCard(job: JobDto) -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let mut expanded = use_signal(|| false);

    let role = session.role();
    let role_label = role.map(Role::label);
    let salary = format_salary(job.salary);
    let job_id = job.id;

    // One action per viewer kind; admins moderate elsewhere and get none.
    let action = match role {
        None => rsx! {
            button {
                class: "btn btn-secondary card-action",
                onclick: move |_| {
                    navigator.push(Route::Login {});
                },
                "Login to apply"
            }
        },
        Some(Role::JobSeeker) => rsx! {
            button {
                class: "btn btn-primary card-action",
                onclick: move |_| {
                    navigator.push(Route::Apply { job_id });
                },
                "Apply now"
            }
        },
        Some(Role::Employer) => rsx! {
            button {
                class: "btn btn-primary card-action",
                onclick: move |_| {
                    navigator.push(Route::CreateJob {});
                },
                "Post a job"
            }
        },
        Some(Role::Admin) => rsx! {},
    };

    let description_class = if expanded() {
        "card-description expanded"
    } else {
        "card-description"
    };
    let expand_hint = if expanded() {
        "Click to show less"
    } else {
        "Click to read more"
    };

    rsx!(
        div {
            class: "card job-card",
            if job.is_new {
                span { class: "badge badge-new", "NEW" }
            }
            div {
                class: "card-body",
                div { class: "card-header",
                    h2 { class: "card-title",
                        "{job.title}"
                    }
                    if let Some(label) = role_label {
                        span { class: "badge badge-role", "{label}" }
                    }
                }
                div { class: "card-detail",
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaLocationDot
                    }
                    span { "{job.location}" }
                }
                p { class: "card-salary",
                    "{salary}"
                }
                if !job.description.is_empty() {
                    div {
                        onclick: move |_| {
                            let current = expanded();
                            expanded.set(!current);
                        },
                        p { class: "{description_class}",
                            "{job.description}"
                        }
                        p { class: "expand-hint",
                            "{expand_hint}"
                        }
                    }
                }
                if let Some(company) = &job.company {
                    span { class: "badge badge-company",
                        Icon {
                            width: 14,
                            height: 14,
                            icon: FaBuilding
                        }
                        "{company}"
                    }
                }
                div { class: "card-actions",
                    {action}
                }
            }
        }
    )
}
