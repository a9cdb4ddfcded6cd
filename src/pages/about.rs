use std::rc::Rc;

use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::icons::IconSvg;
use crate::components::reveal::reveal_classes;
use crate::content::{Icon, Paragraph, SiteContent};
use crate::interaction::hooks::use_scroll_reveal;
use crate::interaction::navbar::Anchor;

fn render_paragraph(paragraph: &Paragraph) -> Html {
    match paragraph.split_link() {
        Some((before, link, after)) => html! {
            <p>
                { before }
                <a href={link.url.clone()} target="_blank" rel="noopener noreferrer" class="inline-link">
                    { &link.text }
                </a>
                { after }
            </p>
        },
        None => html! { <p>{ &paragraph.text }</p> },
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let (grid_ref, visible) = use_scroll_reveal(0.2);
    let about = &content.about;

    html! {
        <section id={Anchor::About.id()} class="about">
            <style>
                {r#"
                .about {
                    padding: 6rem 0;
                }
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1.3fr;
                    gap: 4rem;
                    align-items: center;
                }
                .about-image-photo {
                    width: 100%;
                    border-radius: 24px;
                }
                .about-content h3 {
                    margin: 0.5rem 0 1.5rem;
                    color: var(--text-secondary);
                }
                .about-content p {
                    color: var(--text-secondary);
                    margin-bottom: 1rem;
                }
                .inline-link {
                    color: var(--accent-secondary);
                }
                .about-skills {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 0.75rem;
                    margin: 2rem 0;
                }
                .skill-item {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .skill-item svg {
                    color: var(--accent-primary);
                }
                .about-buttons {
                    display: flex;
                    gap: 1rem;
                }
                @media (max-width: 900px) {
                    .about-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="container">
                <div class="about-grid" ref={grid_ref}>
                    <div class={classes!("about-image", reveal_classes("reveal-left", visible))}>
                        <div class="about-image-wrapper">
                            <img src={about.image.clone()} alt={about.image_alt.clone()} class="about-image-photo" />
                        </div>
                    </div>
                    <div class={classes!("about-content", reveal_classes("reveal-right", visible))}>
                        <span class="section-label">{ &about.label }</span>
                        <h2 class="section-title">{ &about.title }</h2>
                        <h3>{ &about.subtitle }</h3>
                        { for about.paragraphs.iter().map(render_paragraph) }
                        <div class="about-skills">
                            {
                                about.skills.iter().map(|skill| html! {
                                    <div class="skill-item">
                                        <IconSvg icon={Icon::Check} size={20} />
                                        { skill }
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                        <div class="about-buttons">
                            <AnchorLink to={Anchor::Contact} classes={classes!("btn", "btn-outline")}>
                                {"Download Resume"}
                            </AnchorLink>
                            <AnchorLink to={Anchor::Contact} classes={classes!("btn", "btn-primary")}>
                                {"Connect →"}
                            </AnchorLink>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
