use std::rc::Rc;

use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::IconSvg;
use crate::components::notification::Notice;
use crate::components::reveal::reveal_classes;
use crate::config::DEFAULT_REVEAL_THRESHOLD;
use crate::content::SiteContent;
use crate::interaction::contact::{Acknowledgment, ContactField, ContactForm};
use crate::interaction::hooks::use_scroll_reveal;
use crate::interaction::navbar::Anchor;

#[function_component(Contact)]
pub fn contact() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let (grid_ref, visible) = use_scroll_reveal(DEFAULT_REVEAL_THRESHOLD);
    let form = use_state(ContactForm::default);
    let acknowledgment = use_state(|| None::<Acknowledgment>);
    let submissions = use_state(|| 0u32);

    let on_field = |field: ContactField| {
        let form = form.clone();
        move |value: String| form.set((*form).clone().with(field, value))
    };

    let on_name = {
        let update = on_field(ContactField::Name);
        Callback::from(move |e: InputEvent| update(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let update = on_field(ContactField::Email);
        Callback::from(move |e: InputEvent| update(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_message = {
        let update = on_field(ContactField::Message);
        Callback::from(move |e: InputEvent| update(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let on_submit = {
        let form = form.clone();
        let acknowledgment = acknowledgment.clone();
        let submissions = submissions.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut submitted = (*form).clone();
            let ack = submitted.submit();
            info!("Contact form submitted, acknowledging locally");
            form.set(submitted);
            acknowledgment.set(Some(ack));
            submissions.set(*submissions + 1);
        })
    };

    let on_dismiss = {
        let acknowledgment = acknowledgment.clone();
        Callback::from(move |_: ()| acknowledgment.set(None))
    };

    html! {
        <section id={Anchor::Contact.id()} class="contact">
            <style>
                {r#"
                .contact {
                    padding: 6rem 0;
                    background: var(--bg-secondary);
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1.3fr 1fr;
                    gap: 3rem;
                }
                .contact-form h2 {
                    margin-bottom: 2rem;
                }
                .form-group {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    margin-bottom: 1.25rem;
                }
                .form-group input,
                .form-group textarea {
                    padding: 0.9rem 1rem;
                    background: var(--bg-card);
                    border: 1px solid var(--border);
                    border-radius: 10px;
                    color: var(--text-primary);
                    font: inherit;
                }
                .form-group textarea {
                    min-height: 140px;
                    resize: vertical;
                }
                .form-group input:focus,
                .form-group textarea:focus {
                    outline: none;
                    border-color: var(--accent-primary);
                }
                .contact-info {
                    background: var(--bg-card);
                    border: 1px solid var(--border);
                    border-radius: 16px;
                    padding: 2rem;
                }
                .contact-details {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                    margin: 1.5rem 0 2rem;
                }
                .contact-item {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                }
                .contact-item-icon {
                    color: var(--accent-primary);
                }
                .contact-item-text p {
                    color: var(--text-secondary);
                }
                @media (max-width: 900px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="container">
                <div class="contact-grid" ref={grid_ref}>
                    <div class={classes!("contact-form", reveal_classes("reveal-left", visible))}>
                        <h2>{ &content.contact.heading }</h2>
                        <form onsubmit={on_submit}>
                            <div class="form-group">
                                <label>{"Your Name"}</label>
                                <input
                                    type="text"
                                    placeholder="Enter your name"
                                    value={form.name.clone()}
                                    oninput={on_name}
                                    required=true
                                />
                            </div>
                            <div class="form-group">
                                <label>{"Your Email"}</label>
                                <input
                                    type="email"
                                    placeholder="Enter your email"
                                    value={form.email.clone()}
                                    oninput={on_email}
                                    required=true
                                />
                            </div>
                            <div class="form-group">
                                <label>{"Your Message"}</label>
                                <textarea
                                    placeholder="How can I help you?"
                                    value={form.message.clone()}
                                    oninput={on_message}
                                    required=true
                                />
                            </div>
                            <div class="form-submit">
                                <button type="submit" class="btn btn-primary">{"Send Message →"}</button>
                            </div>
                        </form>
                    </div>
                    <div class={classes!("contact-info", reveal_classes("reveal-right", visible))}>
                        <h3>{"Get in Touch"}</h3>
                        <div class="contact-details">
                            {
                                content.contact.details.iter().map(|detail| html! {
                                    <div class="contact-item">
                                        <div class="contact-item-icon"><IconSvg icon={detail.icon} /></div>
                                        <div class="contact-item-text">
                                            <h4>{ &detail.label }</h4>
                                            <p>
                                                {
                                                    match &detail.href {
                                                        Some(href) => html! { <a href={href.clone()}>{ &detail.value }</a> },
                                                        None => html! { { &detail.value } },
                                                    }
                                                }
                                            </p>
                                        </div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                        <div class="contact-social">
                            <h4>{"Follow Me"}</h4>
                            <div class="social-links">
                                {
                                    content.links.social.iter().map(|link| html! {
                                        <a href={link.url.clone()} target="_blank" rel="noopener noreferrer" class="social-link">
                                            <IconSvg icon={link.icon} size={20} />
                                        </a>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            {
                if let Some(ack) = *acknowledgment {
                    html! { <Notice key={*submissions} message={ack.message} on_dismiss={on_dismiss} /> }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
