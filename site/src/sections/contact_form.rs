use bird_contact::{
    CompanySize, ContactConfig, ContactDraft, Country, Field, FieldErrors, FormPhase, PhaseCell,
    SubmitOutcome, submit_contact,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{BRAND, ToastHandle};
use crate::fetch::FetchTransport;

/// Form phase kept in a signal so the view follows every transition.
#[derive(Clone, Copy)]
struct PhaseSignal(RwSignal<FormPhase>);

impl PhaseCell for PhaseSignal {
    fn phase(&self) -> FormPhase {
        self.0.get_untracked()
    }

    fn set_phase(&self, phase: FormPhase) {
        self.0.set(phase);
    }
}

/// Store an edit and, once errors are on screen, re-check the draft so
/// messages clear as soon as the field is fixed.
fn edit(
    draft: RwSignal<ContactDraft>,
    errors: RwSignal<Option<FieldErrors>>,
    field: Field,
    value: String,
) {
    draft.update(|d| d.set(field, value));
    if errors.with_untracked(Option::is_some) {
        errors.set(draft.with_untracked(|d| d.validate().err()));
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = use_context::<ContactConfig>().unwrap_or_default();
    let toaster = use_context::<ToastHandle>();
    let toast_duration = config.toast_duration_ms;
    let transport = FetchTransport::new(config.endpoint);

    let phase = PhaseSignal(RwSignal::new(FormPhase::Editing));
    let draft = RwSignal::new(ContactDraft::default());
    let errors = RwSignal::new(None::<FieldErrors>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let snapshot = draft.get_untracked();
        let transport = transport.clone();
        spawn_local(async move {
            let outcome = submit_contact(&phase, &transport, &snapshot).await;
            match &outcome {
                SubmitOutcome::Invalid(field_errors) => errors.set(Some(field_errors.clone())),
                SubmitOutcome::Sent | SubmitOutcome::Failed(_) => errors.set(None),
                SubmitOutcome::Busy | SubmitOutcome::AlreadySubmitted => {}
            }
            if let Some(notice) = outcome.failure_notice(toast_duration) {
                match toaster {
                    Some(toaster) => {
                        toaster.show(notice);
                    }
                    None => tracing::warn!("no toast host mounted, failure notice dropped"),
                }
            }
        });
    };

    let country_options = Country::ALL.map(|c| (c.as_str(), c.label())).to_vec();
    let size_options = CompanySize::ALL.map(|s| (s.as_str(), s.as_str())).to_vec();

    view! {
        <section class="contact">
            <Show
                when=move || !phase.0.get().is_submitted()
                fallback=|| view! { <Confirmation /> }
            >
                <div class="contact-header">
                    <h1 class="contact-title">"Talk with our sales team"</h1>
                    <p class="contact-subtitle">
                        "Fill out your information and a " {BRAND}
                        " sales representative will contact you shortly."
                    </p>
                </div>
                <form class="contact-form" novalidate=true on:submit=on_submit.clone()>
                    <TextField field=Field::FirstName placeholder="First Name" draft=draft errors=errors />
                    <TextField field=Field::LastName placeholder="Last Name" draft=draft errors=errors />
                    <TextField
                        field=Field::Email
                        placeholder="Email"
                        input_type="email"
                        draft=draft
                        errors=errors
                    />
                    <TextField
                        field=Field::PhoneNumber
                        placeholder="Phone Number"
                        input_type="tel"
                        draft=draft
                        errors=errors
                    />
                    <SelectField field=Field::Country options=country_options.clone() draft=draft errors=errors />
                    <SelectField field=Field::CompanySize options=size_options.clone() draft=draft errors=errors />
                    <MessageField field=Field::Info placeholder="Enter your message..." draft=draft errors=errors />
                    <div class="contact-actions">
                        <button
                            type="submit"
                            class="btn btn-primary contact-submit"
                            disabled=move || phase.0.get().is_loading()
                        >
                            {move || if phase.0.get().is_loading() { "Sending..." } else { "Submit" }}
                        </button>
                    </div>
                </form>
            </Show>
        </section>
    }
}

#[component]
fn Confirmation() -> impl IntoView {
    view! {
        <div class="contact-thanks">
            "Thank you for contacting us. We will be in contact with you shortly."
        </div>
        <div class="contact-success">
            <img class="contact-success-image" src="/videos/check.gif" alt="success image" />
        </div>
    }
}

#[component]
fn TextField(
    field: Field,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    draft: RwSignal<ContactDraft>,
    errors: RwSignal<Option<FieldErrors>>,
) -> impl IntoView {
    let id = format!("contact-{}", field.name());
    view! {
        <div class="form-item">
            <label class="form-label" for=id.clone()>{field.label()}</label>
            <input
                id=id
                class="form-input"
                type=input_type
                name=field.name()
                placeholder=placeholder
                aria-invalid=move || has_error(errors, field).then_some("true")
                prop:value=move || draft.with(|d| d.get(field).to_string())
                on:input=move |ev| edit(draft, errors, field, event_target_value(&ev))
            />
            <FieldMessage field=field errors=errors />
        </div>
    }
}

#[component]
fn MessageField(
    field: Field,
    placeholder: &'static str,
    draft: RwSignal<ContactDraft>,
    errors: RwSignal<Option<FieldErrors>>,
) -> impl IntoView {
    let id = format!("contact-{}", field.name());
    view! {
        <div class="form-item">
            <label class="form-label" for=id.clone()>{field.label()}</label>
            <textarea
                id=id
                class="form-textarea"
                name=field.name()
                placeholder=placeholder
                prop:value=move || draft.with(|d| d.get(field).to_string())
                on:input=move |ev| edit(draft, errors, field, event_target_value(&ev))
            ></textarea>
            <FieldMessage field=field errors=errors />
        </div>
    }
}

#[component]
fn SelectField(
    field: Field,
    /// `(value, label)` pairs
    options: Vec<(&'static str, &'static str)>,
    draft: RwSignal<ContactDraft>,
    errors: RwSignal<Option<FieldErrors>>,
) -> impl IntoView {
    let id = format!("contact-{}", field.name());
    view! {
        <div class="form-item">
            <label class="form-label" for=id.clone()>{field.label()}</label>
            <select
                id=id
                class="form-select"
                name=field.name()
                on:change=move |ev| edit(draft, errors, field, event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <option
                                value=value
                                selected=move || draft.with(|d| d.get(field) == value)
                            >
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <FieldMessage field=field errors=errors />
        </div>
    }
}

fn has_error(errors: RwSignal<Option<FieldErrors>>, field: Field) -> bool {
    errors.with(|e| e.as_ref().is_some_and(|e| e.get(field).is_some()))
}

#[component]
fn FieldMessage(field: Field, errors: RwSignal<Option<FieldErrors>>) -> impl IntoView {
    move || {
        errors
            .with(|e| e.as_ref().and_then(|e| e.get(field)))
            .map(|err| view! { <p class="form-message">{err.to_string()}</p> })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bird_contact::FieldError;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn confirmation_shows_thanks_and_success_image() {
        let html = view! { <Confirmation /> }.to_html();

        assert!(html.contains("Thank you for contacting us. We will be in contact with you shortly."));
        assert!(html.contains("src=\"/videos/check.gif\""));
        assert!(html.contains("alt=\"success image\""));
    }

    #[test]
    fn edits_before_first_submit_do_not_show_errors() {
        Owner::new().with(|| {
            let draft = RwSignal::new(ContactDraft::default());
            let errors = RwSignal::new(None::<FieldErrors>);

            edit(draft, errors, Field::Email, "not-an-email".into());

            assert_eq!(draft.get_untracked().email, "not-an-email");
            assert!(errors.get_untracked().is_none());
        });
    }

    #[test]
    fn edits_after_failed_submit_revalidate() {
        Owner::new().with(|| {
            let draft = RwSignal::new(ContactDraft::default());
            let errors = RwSignal::new(draft.get_untracked().validate().err());
            assert_eq!(
                errors.get_untracked().and_then(|e| e.get(Field::FirstName)),
                Some(FieldError::Required)
            );

            edit(draft, errors, Field::FirstName, "Ada".into());

            let remaining = errors.get_untracked().expect("other fields still empty");
            assert_eq!(remaining.get(Field::FirstName), None);
            assert_eq!(remaining.get(Field::LastName), Some(FieldError::Required));
        });
    }

    #[test]
    fn phase_signal_round_trips() {
        Owner::new().with(|| {
            let phase = PhaseSignal(RwSignal::new(FormPhase::Editing));
            phase.set_phase(FormPhase::Sending);
            assert_eq!(phase.phase(), FormPhase::Sending);
            assert!(!phase.phase().accepts_submit());
        });
    }
}
