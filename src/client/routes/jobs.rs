use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::{JobCard, Page};
use crate::client::util::jobs::fetch_jobs;
use crate::model::job::{filter_jobs, JobFilter};

#[component]
pub fn Jobs() -> Element {
    let mut search_term = use_signal(String::new);
    let mut filter = use_signal(JobFilter::default);

    // Retrieve the job collection on screen load
    let jobs = use_resource(|| async move { fetch_jobs().await });

    let listing = match &*jobs.read_unchecked() {
        Some(Ok(all)) => {
            let visible = filter_jobs(all, &search_term.read(), filter());

            if visible.is_empty() {
                rsx!(
                    div { class: "empty-state",
                        p { "No jobs match your search." }
                    }
                )
            } else {
                rsx!(
                    div { class: "job-grid",
                        {visible.iter().map(|job| rsx! {
                            JobCard {
                                key: "{job.id}",
                                job: (*job).clone()
                            }
                        })}
                    }
                )
            }
        }
        Some(Err(err)) => {
            tracing::error!("failed to load job listings: {err}");

            rsx!(
                div { class: "empty-state",
                    p { "No jobs are available right now." }
                }
            )
        }
        None => rsx!(
            div { class: "job-grid",
                div { class: "skeleton card-skeleton" }
                div { class: "skeleton card-skeleton" }
                div { class: "skeleton card-skeleton" }
            }
        ),
    };

    rsx!(
        Title { "Jobs | JobPortal" }
        Meta {
            name: "description",
            content: "Browse open roles, search by keyword, and filter for remote or high-salary positions."
        }
        Page { class: "listing-page",
            h1 { class: "page-title",
                "Find Your Dream Job"
            }
            div { class: "search-box",
                Icon {
                    width: 18,
                    height: 18,
                    icon: FaMagnifyingGlass
                }
                input {
                    class: "input search-input",
                    r#type: "text",
                    placeholder: "Search by title, description, or location",
                    value: "{search_term}",
                    oninput: move |evt| search_term.set(evt.value()),
                }
            }
            div { class: "filter-row",
                {JobFilter::ALL.iter().map(|&option| {
                    let class = if filter() == option {
                        "btn btn-filter active"
                    } else {
                        "btn btn-filter"
                    };

                    rsx! {
                        button {
                            class: "{class}",
                            onclick: move |_| filter.set(option),
                            {option.label()}
                        }
                    }
                })}
            }
            {listing}
        }
    )
}
