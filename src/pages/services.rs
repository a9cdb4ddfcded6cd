use std::rc::Rc;

use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::icons::IconSvg;
use crate::components::reveal::{reveal_classes, stagger_style};
use crate::config::DEFAULT_REVEAL_THRESHOLD;
use crate::content::{Service, SiteContent};
use crate::interaction::hooks::use_scroll_reveal;
use crate::interaction::navbar::Anchor;

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Service,
    index: usize,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let (card_ref, visible) = use_scroll_reveal(DEFAULT_REVEAL_THRESHOLD);

    html! {
        <div
            class={classes!("service-card", reveal_classes("reveal", visible))}
            ref={card_ref}
            style={stagger_style(props.index, 0.1)}
        >
            <div class="service-icon"><IconSvg icon={props.service.icon} size={32} /></div>
            <h3>{ &props.service.title }</h3>
            <p>{ &props.service.description }</p>
            <AnchorLink to={Anchor::Contact} classes={classes!("service-link")}>
                {"Learn More →"}
            </AnchorLink>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let (header_ref, visible) = use_scroll_reveal(DEFAULT_REVEAL_THRESHOLD);

    html! {
        <section id={Anchor::Services.id()} class="services">
            <style>
                {r#"
                .services {
                    padding: 6rem 0;
                    background: var(--bg-secondary);
                }
                .services-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .services-header p {
                    color: var(--text-secondary);
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                }
                .service-card {
                    background: var(--bg-card);
                    border: 1px solid var(--border);
                    border-radius: 16px;
                    padding: 2rem;
                }
                .service-card:hover {
                    border-color: var(--accent-primary);
                }
                .service-icon {
                    color: var(--accent-primary);
                    margin-bottom: 1rem;
                }
                .service-card p {
                    color: var(--text-secondary);
                    margin: 0.75rem 0 1.25rem;
                }
                .service-link {
                    color: var(--accent-primary);
                    font-weight: 600;
                }
                "#}
            </style>
            <div class="container">
                <div class={classes!("services-header", reveal_classes("reveal", visible))} ref={header_ref}>
                    <span class="section-label">{"What I Do"}</span>
                    <h2 class="section-title">{"Comprehensive Digital Marketing Solutions"}</h2>
                    <p>{"Tailored strategies for your business growth"}</p>
                </div>
                <div class="services-grid">
                    {
                        content.services.iter().enumerate().map(|(index, service)| html! {
                            <ServiceCard key={index} service={service.clone()} index={index} />
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
