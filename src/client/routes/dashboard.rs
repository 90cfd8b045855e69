use chrono::{Local, Timelike};
use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::session::use_session;
use crate::client::util::jobs::fetch_jobs;
use crate::model::auth::Role;

fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();

    let jobs = use_resource(|| async move { fetch_jobs().await });

    let total_jobs = match &*jobs.read_unchecked() {
        Some(Ok(jobs)) => jobs.len().to_string(),
        Some(Err(err)) => {
            tracing::error!("failed to load job count: {err}");
            "0".to_string()
        }
        None => "0".to_string(),
    };

    // The API exposes no per-user stats yet; only the job count is live.
    let stats = [
        ("Total Jobs", total_jobs),
        ("Applications", "0".to_string()),
        ("Interviews", "0".to_string()),
        ("Messages", "0".to_string()),
    ];

    let hello = greeting(Local::now().hour());

    let identity = session.current().map(|s| (s.email, s.role.label()));

    let quick_links = match session.role() {
        None => rsx! {},
        Some(Role::JobSeeker) => rsx! {
            Link { to: Route::Jobs {}, class: "btn btn-outline", "Browse jobs" }
        },
        Some(Role::Employer) => rsx! {
            Link { to: Route::CreateJob {}, class: "btn btn-outline", "Post a job" }
            Link { to: Route::Jobs {}, class: "btn btn-outline", "View listings" }
        },
        Some(Role::Admin) => rsx! {
            Link { to: Route::Jobs {}, class: "btn btn-outline", "Review listings" }
        },
    };

    rsx!(
        Title { "Dashboard | JobPortal" }
        Meta {
            name: "description",
            content: "Your job-board activity at a glance."
        }
        Page { class: "dashboard-page",
            h1 { class: "page-title",
                "{hello}"
            }
            if let Some((email, role_label)) = &identity {
                p { class: "dashboard-identity",
                    "Signed in as {email} "
                    span { class: "badge badge-role", "{role_label}" }
                }
            }
            div { class: "stat-grid",
                {stats.iter().map(|(label, value)| rsx! {
                    div { class: "card stat-card",
                        p { class: "stat-value", "{value}" }
                        p { class: "stat-label", "{label}" }
                    }
                })}
            }
            div { class: "quick-links",
                {quick_links}
            }
        }
    )
}
