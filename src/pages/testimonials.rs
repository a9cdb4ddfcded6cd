use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::{reveal_classes, stagger_style};
use crate::config::DEFAULT_REVEAL_THRESHOLD;
use crate::content::{SiteContent, Testimonial};
use crate::interaction::hooks::use_scroll_reveal;

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
    index: usize,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let (card_ref, visible) = use_scroll_reveal(DEFAULT_REVEAL_THRESHOLD);
    let testimonial = &props.testimonial;

    html! {
        <div
            class={classes!("testimonial-card", reveal_classes("reveal", visible))}
            ref={card_ref}
            style={stagger_style(props.index, 0.1)}
        >
            <div class="testimonial-quote-icon">{"\u{201c}"}</div>
            <p class="testimonial-text">{ &testimonial.text }</p>
            <div class="testimonial-divider"></div>
            <div class="testimonial-author">
                <div class="testimonial-avatar">{ testimonial.initial() }</div>
                <div class="testimonial-info">
                    <h4>{ &testimonial.name }</h4>
                    <p>{ format!("{} · {}", testimonial.title, testimonial.website) }</p>
                </div>
            </div>
            <div class="testimonial-stars">{"★★★★★"}</div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let (header_ref, visible) = use_scroll_reveal(DEFAULT_REVEAL_THRESHOLD);

    html! {
        <section id="testimonials" class="testimonials">
            <style>
                {r#"
                .testimonials {
                    padding: 6rem 0;
                    background: var(--bg-secondary);
                }
                .testimonials-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .testimonials-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }
                .testimonial-card {
                    background: var(--bg-card);
                    border: 1px solid var(--border);
                    border-radius: 16px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                }
                .testimonial-quote-icon {
                    font-size: 3rem;
                    line-height: 1;
                    color: var(--accent-primary);
                }
                .testimonial-text {
                    color: var(--text-secondary);
                    flex: 1;
                }
                .testimonial-divider {
                    height: 1px;
                    background: var(--border);
                    margin: 1.5rem 0;
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .testimonial-avatar {
                    width: 44px;
                    height: 44px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--accent-primary);
                    color: #0b0b0f;
                    font-weight: 700;
                }
                .testimonial-info p {
                    color: var(--text-secondary);
                    font-size: 0.85rem;
                }
                .testimonial-stars {
                    margin-top: 1rem;
                    color: #fbbf24;
                }
                "#}
            </style>
            <div class="container">
                <div class={classes!("testimonials-header", reveal_classes("reveal", visible))} ref={header_ref}>
                    <span class="section-label">{"What Clients Say"}</span>
                    <h2 class="section-title">{"Trusted by Businesses"}</h2>
                </div>
                <div class="testimonials-grid">
                    {
                        content.testimonials.iter().enumerate().map(|(index, testimonial)| html! {
                            <TestimonialCard key={index} testimonial={testimonial.clone()} index={index} />
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
