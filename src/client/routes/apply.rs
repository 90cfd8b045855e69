use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowLeft, FaArrowRight, FaFileArrowUp, FaPaperPlane,
};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use gloo_timers::future::TimeoutFuture;

use crate::client::components::job_card::format_salary;
use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::util::applications;
use crate::client::util::jobs::fetch_job;
use crate::model::application::{ApplicationDraft, ApplyStep, DraftErrors};

/// Pause on the success overlay before returning to the listing.
const SUCCESS_REDIRECT_MS: u32 = 3_000;

#[component]
pub fn Apply(job_id: i64) -> Element {
    let navigator = use_navigator();

    let mut draft = use_signal(ApplicationDraft::default);
    let mut errors = use_signal(DraftErrors::default);
    let mut step = use_signal(|| ApplyStep::Identity);
    let mut submitting = use_signal(|| false);
    let mut show_success = use_signal(|| false);

    // Retrieve the job being applied to for the summary header
    let job = use_resource(move || async move { fetch_job(job_id).await });

    let advance = move |_evt: Event<MouseData>| {
        let current = *step.peek();

        let validation = draft.peek().validate_step(current);
        if !validation.is_empty() {
            errors.set(validation);
            return;
        }

        if let Some(next) = current.next() {
            errors.set(DraftErrors::default());
            step.set(next);
        }
    };

    let retreat = move |_evt: Event<MouseData>| {
        let current = *step.peek();
        if let Some(previous) = current.previous() {
            errors.set(DraftErrors::default());
            step.set(previous);
        }
    };

    let submit = move |_evt: Event<MouseData>| {
        let validation = draft.peek().validate();
        if !validation.is_empty() {
            errors.set(validation);
            return;
        }

        submitting.set(true);
        errors.set(DraftErrors::default());

        spawn(async move {
            let request = draft.peek().to_request(job_id);

            match applications::submit_application(&request).await {
                Ok(()) => {
                    show_success.set(true);

                    TimeoutFuture::new(SUCCESS_REDIRECT_MS).await;
                    navigator.push(Route::Jobs {});
                }
                Err(err) => {
                    tracing::error!("failed to submit application: {err}");
                    errors.with_mut(|e| {
                        e.submit =
                            Some("Failed to submit application. Please try again.".to_string());
                    });
                }
            }

            submitting.set(false);
        });
    };

    let summary = match &*job.read_unchecked() {
        Some(Ok(job)) => {
            let salary = format_salary(job.salary);

            rsx!(
                div { class: "card job-summary",
                    h2 { class: "card-title",
                        "{job.title}"
                    }
                    if let Some(company) = &job.company {
                        p { class: "summary-company", "{company}" }
                    }
                    p { class: "summary-detail",
                        "{job.location} · {salary}"
                    }
                }
            )
        }
        Some(Err(err)) => {
            tracing::error!("failed to load job {job_id}: {err}");

            rsx!(
                div { class: "alert alert-warning",
                    "Could not load the job details. You can still submit your application."
                }
            )
        }
        None => rsx!(
            div { class: "skeleton summary-skeleton" }
        ),
    };

    let active = step();
    let current_draft = draft.read().clone();
    let field_errors = errors.read().clone();
    let resume_name = current_draft
        .resume_file_name
        .clone()
        .unwrap_or_else(|| "No file selected".to_string());

    let field_class = |broken: bool| if broken { "input input-error" } else { "input" };
    let name_class = field_class(field_errors.name.is_some());
    let email_class = field_class(field_errors.email.is_some());
    let phone_class = field_class(field_errors.phone.is_some());
    let cover_letter_class = field_class(field_errors.cover_letter.is_some());

    let step_form = match active {
        ApplyStep::Identity => rsx!(
            div { class: "wizard-step",
                label { class: "field-label", "Full Name" }
                input {
                    class: "{name_class}",
                    r#type: "text",
                    placeholder: "Your full name",
                    value: "{current_draft.name}",
                    oninput: move |evt| {
                        draft.with_mut(|d| d.name = evt.value());
                        errors.with_mut(|e| e.name = None);
                    },
                }
                if let Some(message) = &field_errors.name {
                    p { class: "field-error", "{message}" }
                }
                label { class: "field-label", "Email" }
                input {
                    class: "{email_class}",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: "{current_draft.email}",
                    oninput: move |evt| {
                        draft.with_mut(|d| d.email = evt.value());
                        errors.with_mut(|e| e.email = None);
                    },
                }
                if let Some(message) = &field_errors.email {
                    p { class: "field-error", "{message}" }
                }
                label { class: "field-label", "Phone" }
                input {
                    class: "{phone_class}",
                    r#type: "tel",
                    placeholder: "Your phone number",
                    value: "{current_draft.phone}",
                    oninput: move |evt| {
                        draft.with_mut(|d| d.phone = evt.value());
                        errors.with_mut(|e| e.phone = None);
                    },
                }
                if let Some(message) = &field_errors.phone {
                    p { class: "field-error", "{message}" }
                }
            }
        ),
        ApplyStep::CoverLetter => rsx!(
            div { class: "wizard-step",
                label { class: "field-label", "Cover Letter" }
                textarea {
                    class: "{cover_letter_class}",
                    rows: 8,
                    placeholder: "Tell the employer why you are a great fit",
                    value: "{current_draft.cover_letter}",
                    oninput: move |evt| {
                        draft.with_mut(|d| d.cover_letter = evt.value());
                        errors.with_mut(|e| e.cover_letter = None);
                    },
                }
                if let Some(message) = &field_errors.cover_letter {
                    p { class: "field-error", "{message}" }
                }
            }
        ),
        ApplyStep::Resume => rsx!(
            div { class: "wizard-step",
                label { class: "upload-box",
                    Icon {
                        width: 28,
                        height: 28,
                        icon: FaFileArrowUp
                    }
                    span { "Upload your resume (.pdf, .doc, .docx)" }
                    input {
                        class: "file-input",
                        r#type: "file",
                        accept: ".pdf,.doc,.docx",
                        onchange: move |evt| {
                            if let Some(file) = evt.files().first() {
                                let name = file.name();
                                draft.with_mut(|d| d.resume_file_name = Some(name));
                                errors.with_mut(|e| e.resume = None);
                            }
                        },
                    }
                }
                p { class: "file-name",
                    "{resume_name}"
                }
                if let Some(message) = &field_errors.resume {
                    p { class: "field-error", "{message}" }
                }
            }
        ),
    };

    let on_first = active.previous().is_none();
    let on_last = active.is_last();

    rsx!(
        Title { "Apply | JobPortal" }
        Meta {
            name: "description",
            content: "Submit your application in three short steps."
        }
        Page { class: "centered",
            div { class: "card form-card wizard-card",
                {summary}
                div { class: "step-indicator",
                    {ApplyStep::ALL.iter().map(|&indicator_step| {
                        let number = indicator_step.number();
                        let title = indicator_step.title();
                        let dot_class = if number <= active.number() {
                            "step-dot reached"
                        } else {
                            "step-dot"
                        };
                        let title_class = if indicator_step == active {
                            "step-title current"
                        } else {
                            "step-title"
                        };

                        rsx! {
                            div { class: "step",
                                span { class: "{dot_class}", "{number}" }
                                span { class: "{title_class}", "{title}" }
                            }
                        }
                    })}
                }
                {step_form}
                if let Some(message) = &field_errors.submit {
                    div { class: "alert alert-error",
                        "{message}"
                    }
                }
                div { class: "wizard-actions",
                    if !on_first {
                        button {
                            class: "btn btn-outline",
                            onclick: retreat,
                            Icon {
                                width: 14,
                                height: 14,
                                icon: FaArrowLeft
                            }
                            "Previous"
                        }
                    }
                    if on_last {
                        button {
                            class: "btn btn-primary",
                            disabled: submitting(),
                            onclick: submit,
                            Icon {
                                width: 14,
                                height: 14,
                                icon: FaPaperPlane
                            }
                            if submitting() {
                                "Submitting..."
                            } else {
                                "Submit Application"
                            }
                        }
                    } else {
                        button {
                            class: "btn btn-primary",
                            onclick: advance,
                            "Next"
                            Icon {
                                width: 14,
                                height: 14,
                                icon: FaArrowRight
                            }
                        }
                    }
                }
            }
        }
        if show_success() {
            div { class: "overlay",
                div { class: "card notice-card",
                    span { class: "notice-icon notice-icon-success",
                        Icon {
                            width: 32,
                            height: 32,
                            icon: FaPaperPlane
                        }
                    }
                    h2 { class: "notice-title",
                        "Application Submitted!"
                    }
                    p {
                        "Good luck! Returning to the job board..."
                    }
                }
            }
        }
    )
}
