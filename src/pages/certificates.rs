use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::{reveal_classes, stagger_style};
use crate::config::DEFAULT_REVEAL_THRESHOLD;
use crate::content::{Certificate, SiteContent};
use crate::interaction::hooks::use_scroll_reveal;

#[derive(Properties, PartialEq)]
struct CertificateCardProps {
    cert: Certificate,
    index: usize,
}

#[function_component(CertificateCard)]
fn certificate_card(props: &CertificateCardProps) -> Html {
    let (card_ref, visible) = use_scroll_reveal(DEFAULT_REVEAL_THRESHOLD);
    let cert = &props.cert;

    html! {
        <div
            class={classes!("certificate-card", reveal_classes("reveal", visible))}
            ref={card_ref}
            style={stagger_style(props.index, 0.15)}
        >
            <div class="certificate-image">
                <img src={cert.image.clone()} alt={cert.title.clone()} />
            </div>
            <div class="certificate-info">
                <h3>{ &cert.title }</h3>
                <p>{ &cert.issuer }</p>
            </div>
        </div>
    }
}

#[function_component(Certificates)]
pub fn certificates() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let (header_ref, visible) = use_scroll_reveal(DEFAULT_REVEAL_THRESHOLD);

    html! {
        <section id="certificates" class="certificates">
            <style>
                {r#"
                .certificates {
                    padding: 6rem 0;
                }
                .certificates-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .certificates-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }
                .certificate-card {
                    background: var(--bg-card);
                    border: 1px solid var(--border);
                    border-radius: 16px;
                    overflow: hidden;
                }
                .certificate-image img {
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                }
                .certificate-info {
                    padding: 1.25rem 1.5rem;
                }
                .certificate-info p {
                    color: var(--text-secondary);
                }
                "#}
            </style>
            <div class="container">
                <div class={classes!("certificates-header", reveal_classes("reveal", visible))} ref={header_ref}>
                    <span class="section-label">{"Accreditations"}</span>
                    <h2 class="section-title">{"Certifications & Achievements"}</h2>
                </div>
                <div class="certificates-grid">
                    {
                        content.certificates.iter().enumerate().map(|(index, cert)| html! {
                            <CertificateCard key={index} cert={cert.clone()} index={index} />
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
