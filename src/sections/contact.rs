use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::content_wrapper::ContentWrapper;
use crate::config::{CONTACT_EMAIL, CONTACT_PHONE};
use crate::controllers::contact_form::{ContactField, ContactForm};

#[derive(Clone, PartialEq)]
enum SubmitStatus {
    Idle,
    Invalid(String),
    Received,
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_state(ContactForm::default);
    let status = use_state(|| SubmitStatus::Idle);

    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let (name, value) = if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                (input.name(), input.value())
            } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                (area.name(), area.value())
            } else {
                return;
            };
            match ContactField::from_input_name(&name) {
                Some(field) => {
                    let mut next = (*form).clone();
                    next.set(field, value);
                    form.set(next);
                }
                None => warn!("Input '{}' is not a contact form field", name),
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(()) => {
                    // Nothing is sent anywhere yet; the enquiry only reaches the console.
                    match serde_json::to_string(&*form) {
                        Ok(payload) => gloo_console::log!("Form submitted:", payload),
                        Err(err) => warn!("Could not serialize contact form: {}", err),
                    }
                    info!("Contact enquiry accepted");
                    form.set(ContactForm::default());
                    status.set(SubmitStatus::Received);
                }
                Err(err) => status.set(SubmitStatus::Invalid(err.to_string())),
            }
        })
    };

    let field = |kind: ContactField, input_type: &'static str, value: &str, placeholder: &'static str, required: bool| {
        let id = kind.input_name();
        html! {
            <div class="form-field">
                <label for={id}>{kind.label()}</label>
                <input
                    type={input_type}
                    id={id}
                    name={id}
                    value={value.to_string()}
                    oninput={on_input.clone()}
                    required={required}
                    placeholder={placeholder}
                />
            </div>
        }
    };

    html! {
        <section id="contact" class="snap-section contact">
            <div class="contact__layout">
                <div class="contact__image">
                    <img src="/assets/common/about.webp" alt="Contact Binghatti" />
                    <div class="contact__image-overlay"></div>
                </div>

                <div class="contact__form-side">
                    <ContentWrapper class="contact__wrapper">
                        <div class="contact__heading">
                            <h2>{"Get in Touch"}</h2>
                            <div class="divider divider--left"></div>
                            <p>{"Ready to explore investment opportunities? Contact our team today"}</p>
                        </div>

                        <form class="contact__form" onsubmit={on_submit} novalidate=true>
                            { field(ContactField::Name, "text", &form.name, "John Doe", true) }
                            { field(ContactField::Email, "email", &form.email, "john@example.com", true) }
                            { field(ContactField::Phone, "tel", &form.phone, "+971 50 123 4567", false) }
                            <div class="form-field">
                                <label for={ContactField::Message.input_name()}>{ContactField::Message.label()}</label>
                                <textarea
                                    id={ContactField::Message.input_name()}
                                    name={ContactField::Message.input_name()}
                                    rows="4"
                                    value={form.message.clone()}
                                    oninput={on_input.clone()}
                                    placeholder="Tell us what you are looking for"
                                />
                            </div>
                            {
                                match &*status {
                                    SubmitStatus::Idle => html! {},
                                    SubmitStatus::Invalid(message) => html! {
                                        <p class="form-status form-status--error">{message}</p>
                                    },
                                    SubmitStatus::Received => html! {
                                        <p class="form-status">{"Thank you. Our team will be in touch shortly."}</p>
                                    },
                                }
                            }
                            <div class="form-field">
                                <button type="submit" class="primary-button primary-button--full">
                                    {"Send Message"}
                                    <span class="arrow">{"→"}</span>
                                </button>
                            </div>
                        </form>

                        <div class="contact__info">
                            <div>
                                <p class="contact__info-label">{"Email"}</p>
                                <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                            </div>
                            <div>
                                <p class="contact__info-label">{"Phone"}</p>
                                <p>{CONTACT_PHONE}</p>
                            </div>
                        </div>
                    </ContentWrapper>
                </div>
            </div>
            <style>
                {r#"
                .contact {
                    position: relative;
                    height: 100dvh;
                    overflow: hidden;
                    background: #000;
                }
                .contact__layout {
                    position: relative;
                    height: 100%;
                    display: flex;
                }
                .contact__image {
                    position: relative;
                    width: 50%;
                    height: 100%;
                    overflow: hidden;
                }
                .contact__image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .contact__image-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, rgba(0,0,0,0.2), rgba(0,0,0,0.4), rgba(0,0,0,0.8));
                }
                .contact__form-side {
                    flex: 1;
                    overflow-y: auto;
                }
                .contact__wrapper {
                    max-width: 42rem;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }
                .contact__heading h2 {
                    color: #fff;
                    font-size: 56px;
                    font-weight: 300;
                    margin-bottom: 1rem;
                }
                .contact__heading p {
                    color: rgba(255,255,255,0.7);
                    font-size: 1.125rem;
                    font-weight: 200;
                }
                .contact__form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    margin-top: 3rem;
                }
                .form-field label {
                    display: block;
                    color: rgba(255,255,255,0.8);
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    margin-bottom: 0.5rem;
                    font-weight: 300;
                }
                .form-field input,
                .form-field textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 1rem 1.5rem;
                    background: rgba(255,255,255,0.05);
                    border: 1px solid rgba(255,255,255,0.2);
                    color: #fff;
                    font-size: 1rem;
                    border-radius: 2px;
                    transition: border-color 0.3s;
                }
                .form-field input:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: rgba(255,255,255,0.6);
                }
                .form-status {
                    color: rgba(255,255,255,0.8);
                    font-size: 0.875rem;
                }
                .form-status--error {
                    color: #f87171;
                }
                .primary-button--full {
                    width: 100%;
                    justify-content: center;
                }
                .contact__info {
                    margin-top: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255,255,255,0.1);
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    color: rgba(255,255,255,0.6);
                    font-size: 0.875rem;
                }
                .contact__info a {
                    color: inherit;
                }
                .contact__info-label {
                    color: rgba(255,255,255,0.4);
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    font-size: 0.75rem;
                    margin-bottom: 0.5rem;
                }
                @media (max-width: 768px) {
                    .contact { height: auto; }
                    .contact__image { display: none; }
                    .contact__heading h2 { font-size: 42px; }
                }
                "#}
            </style>
        </section>
    }
}
