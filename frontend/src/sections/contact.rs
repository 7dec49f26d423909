use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::{AnimatedElement, AnimationVariant};
use crate::config;
use crate::contact::{error_for, ContactForm, Field, FieldError, LicenseType};

const CONTACT_CSS: &str = r#"
    .contact-card {
        max-width: 40rem;
        margin: 3rem auto 0;
        padding: 2rem;
        border-radius: 0.75rem;
        border: 1px solid var(--border);
        background: var(--card);
    }
    .form-row {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
        gap: 1rem;
    }
    .form-field { display: flex; flex-direction: column; gap: 0.375rem; margin-bottom: 1rem; }
    .form-field label { font-weight: 500; font-size: 0.875rem; }
    .form-field input, .form-field select, .form-field textarea {
        font: inherit;
        padding: 0.625rem 0.75rem;
        border-radius: 0.375rem;
        border: 1px solid var(--border);
        background: var(--background);
        color: inherit;
    }
    .form-field textarea { min-height: 8rem; resize: vertical; }
    .form-field.invalid input, .form-field.invalid select, .form-field.invalid textarea {
        border-color: var(--destructive);
    }
    .field-error { color: var(--destructive); font-size: 0.8rem; margin: 0; }
    .contact-card .cta-button { width: 100%; }
    .toast {
        position: fixed;
        bottom: 1.5rem;
        left: 50%;
        transform: translateX(-50%);
        z-index: 60;
        padding: 1rem 1.5rem;
        border-radius: 0.5rem;
        background: var(--card);
        border: 1px solid var(--border);
        box-shadow: 0 12px 24px rgba(0, 0, 0, 0.15);
        animation: toast-in 0.3s ease-out;
    }
    .toast strong { display: block; }
    @keyframes toast-in { from { opacity: 0; transform: translate(-50%, 1rem); } to { opacity: 1; transform: translate(-50%, 0); } }
"#;

/// Value of whichever text control fired the event.
fn control_value(e: &InputEvent) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = target.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

fn on_text(form: &UseStateHandle<ContactForm>, apply: fn(&mut ContactForm, String)) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let mut next = (*form).clone();
        apply(&mut next, control_value(&e));
        form.set(next);
    })
}

fn field_error(error: Option<&FieldError>) -> Html {
    match error {
        Some(error) => html! { <p class="field-error">{error.to_string()}</p> },
        None => html! {},
    }
}

#[function_component]
pub fn ContactSection() -> Html {
    let form = use_state(ContactForm::default);
    // Errors only show once a submit has been attempted
    let attempted = use_state(|| false);
    let toast_visible = use_state(|| false);
    let toast_timer = use_mut_ref(|| None::<Timeout>);

    {
        let toast_timer = toast_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    toast_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let errors = if *attempted {
        form.validate().err().unwrap_or_default()
    } else {
        Vec::new()
    };

    let onsubmit = {
        let form = form.clone();
        let attempted = attempted.clone();
        let toast_visible = toast_visible.clone();
        let toast_timer = toast_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(submission) => {
                    match serde_json::to_string(&submission) {
                        Ok(payload) => log::info!("Contact form submitted: {}", payload),
                        Err(err) => log::error!("Failed to serialize contact form: {}", err),
                    }
                    form.set(ContactForm::default());
                    attempted.set(false);
                    toast_visible.set(true);

                    let toast_visible = toast_visible.clone();
                    let timeout = Timeout::new(config::get_toast_duration_ms(), move || {
                        toast_visible.set(false);
                    });
                    // Replacing the handle cancels an older toast timer
                    *toast_timer.borrow_mut() = Some(timeout);
                }
                Err(errors) => {
                    log::debug!("Contact form rejected with {} field errors", errors.len());
                    attempted.set(true);
                }
            }
        })
    };

    let onchange_license = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.license_type = LicenseType::from_value(&select.value());
            form.set(next);
        })
    };

    let field_class = |field: Field| classes!("form-field", error_for(&errors, field).map(|_| "invalid"));
    let selected = form.license_type.map(LicenseType::value).unwrap_or_default();

    html! {
        <section id="contact" class="section">
            <style>{CONTACT_CSS}</style>
            <div class="section-inner">
                <AnimatedElement variant={AnimationVariant::SlideUp}>
                    <div class="section-heading">
                        <h2>{"Get In Touch"}</h2>
                        <p>{"Ready to sell your unused software licenses? Fill out the form below and our team will get back to you within 24 hours."}</p>
                    </div>
                </AnimatedElement>
                <AnimatedElement variant={AnimationVariant::FadeIn} delay={0.2}>
                    <form class="contact-card" onsubmit={onsubmit} novalidate={true}>
                        <div class="form-row">
                            <div class={field_class(Field::Name)}>
                                <label for="name">{"Name"}</label>
                                <input id="name" type="text" placeholder="John Doe"
                                    value={form.name.clone()}
                                    oninput={on_text(&form, |f, v| f.name = v)} />
                                { field_error(error_for(&errors, Field::Name)) }
                            </div>
                            <div class={field_class(Field::Email)}>
                                <label for="email">{"Email"}</label>
                                <input id="email" type="email" placeholder="john@company.com"
                                    value={form.email.clone()}
                                    oninput={on_text(&form, |f, v| f.email = v)} />
                                { field_error(error_for(&errors, Field::Email)) }
                            </div>
                        </div>
                        <div class="form-row">
                            <div class={field_class(Field::Company)}>
                                <label for="company">{"Company"}</label>
                                <input id="company" type="text" placeholder="Acme Inc."
                                    value={form.company.clone()}
                                    oninput={on_text(&form, |f, v| f.company = v)} />
                                { field_error(error_for(&errors, Field::Company)) }
                            </div>
                            <div class={field_class(Field::LicenseType)}>
                                <label for="license-type">{"License Type"}</label>
                                <select id="license-type" onchange={onchange_license}>
                                    <option value="" selected={selected.is_empty()} disabled={true}>
                                        {"Select license type"}
                                    </option>
                                    { for LicenseType::ALL.into_iter().map(|license| html! {
                                        <option value={license.value()} selected={selected == license.value()}>
                                            {license.label()}
                                        </option>
                                    }) }
                                </select>
                                { field_error(error_for(&errors, Field::LicenseType)) }
                            </div>
                        </div>
                        <div class={field_class(Field::Message)}>
                            <label for="message">{"Message"}</label>
                            <textarea id="message" placeholder="Tell us about the licenses you want to sell..."
                                value={form.message.clone()}
                                oninput={on_text(&form, |f, v| f.message = v)} />
                            { field_error(error_for(&errors, Field::Message)) }
                        </div>
                        <button type="submit" class="cta-button">{"Submit Request"}</button>
                    </form>
                </AnimatedElement>
            </div>
            if *toast_visible {
                <div class="toast" role="status">
                    <strong>{"Form submitted successfully!"}</strong>
                    {"We'll get back to you within 24 hours."}
                </div>
            }
        </section>
    }
}
