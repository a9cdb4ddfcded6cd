use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::components::reveal::{reveal_classes, stagger_style};
use crate::config::DEFAULT_REVEAL_THRESHOLD;
use crate::content::{Faq, SiteContent};
use crate::interaction::faq::FaqAccordion;
use crate::interaction::hooks::use_scroll_reveal;
use crate::interaction::navbar::Anchor;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    faq: Faq,
    index: usize,
    is_active: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let (item_ref, visible) = use_scroll_reveal(DEFAULT_REVEAL_THRESHOLD);

    let toggle = {
        let index = props.index;
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div
            class={classes!("faq-item", props.is_active.then_some("active"), reveal_classes("reveal", visible))}
            ref={item_ref}
            style={stagger_style(props.index, 0.05)}
        >
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_active.to_string()}>
                <span>{ &props.faq.question }</span>
                <span class="faq-icon">{"+"}</span>
            </button>
            <div class="faq-answer">
                <div class="faq-answer-content">{ &props.faq.answer }</div>
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let accordion = use_state(|| FaqAccordion::new(content.faqs.len()));
    let (header_ref, visible) = use_scroll_reveal(DEFAULT_REVEAL_THRESHOLD);

    let on_toggle = {
        let accordion = accordion.clone();
        Callback::from(move |index: usize| {
            let next = accordion.toggled(index);
            debug!("FAQ entry {} clicked, open entry now {:?}", index, next.active());
            accordion.set(next);
        })
    };

    html! {
        <section id={Anchor::Faq.id()} class="faq">
            <style>
                {r#"
                .faq {
                    padding: 6rem 0;
                }
                .faq-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .faq-item {
                    background: var(--bg-card);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    overflow: hidden;
                }
                .faq-item.active {
                    border-color: var(--accent-primary);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: var(--text-primary);
                    font-size: 1.05rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-icon {
                    font-size: 1.5rem;
                    transition: transform 0.3s ease;
                }
                .faq-item.active .faq-icon {
                    transform: rotate(45deg);
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.35s ease;
                }
                .faq-item.active .faq-answer {
                    max-height: 400px;
                }
                .faq-answer-content {
                    padding: 0 1.5rem 1.5rem;
                    color: var(--text-secondary);
                }
                "#}
            </style>
            <div class="container">
                <div class={classes!("faq-header", reveal_classes("reveal", visible))} ref={header_ref}>
                    <span class="section-label">{"FAQ"}</span>
                    <h2 class="section-title">{"Everything You Need to Know"}</h2>
                </div>
                <div class="faq-list">
                    {
                        content.faqs.iter().enumerate().map(|(index, faq)| html! {
                            <FaqItem
                                key={index}
                                faq={faq.clone()}
                                index={index}
                                is_active={accordion.is_open(index)}
                                on_toggle={on_toggle.clone()}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
