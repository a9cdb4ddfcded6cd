use std::rc::Rc;

use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::stat_counter::StatCounter;
use crate::content::SiteContent;
use crate::interaction::hooks::use_scroll_reveal;
use crate::interaction::navbar::Anchor;

#[function_component(Hero)]
pub fn hero() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let (stats_ref, stats_visible) = use_scroll_reveal(0.3);
    let hero = &content.hero;

    html! {
        <section id={Anchor::Home.id()} class="hero">
            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 8rem 0 4rem;
                }
                .hero-grid {
                    display: grid;
                    grid-template-columns: 1.2fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .hero-title {
                    display: flex;
                    flex-direction: column;
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    line-height: 1.05;
                    margin-bottom: 1.5rem;
                }
                .hero-title .accent {
                    color: var(--accent-primary);
                }
                .hero-subtitle {
                    color: var(--text-secondary);
                    font-size: 1.1rem;
                    max-width: 560px;
                    margin-bottom: 2rem;
                }
                .hero-buttons {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    margin-bottom: 3rem;
                }
                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                .stat-number {
                    font-size: 2rem;
                    font-weight: 700;
                    color: var(--accent-primary);
                }
                .stat-label {
                    color: var(--text-secondary);
                    font-size: 0.9rem;
                }
                .hero-image-wrapper img {
                    width: 100%;
                    border-radius: 24px;
                }
                @media (max-width: 900px) {
                    .hero-grid { grid-template-columns: 1fr; }
                    .hero-stats { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <h1 class="hero-title">
                            {
                                hero.title.iter().enumerate().map(|(i, line)| html! {
                                    <span class={classes!((i == 0).then_some("accent"))}>{ line }</span>
                                }).collect::<Html>()
                            }
                        </h1>
                        <p class="hero-subtitle">{ &hero.subtitle }</p>
                        <div class="hero-buttons">
                            <a href={content.links.whatsapp.clone()} target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                                {"Let's Talk →"}
                            </a>
                            <AnchorLink to={Anchor::Services} classes={classes!("btn", "btn-outline")}>
                                {"View My Work"}
                            </AnchorLink>
                        </div>
                        <div class="hero-stats" ref={stats_ref}>
                            {
                                hero.stats.iter().map(|stat| html! {
                                    <StatCounter
                                        stat={stat.clone()}
                                        start={stats_visible}
                                        class="stat-item"
                                        number_class="stat-number"
                                        label_class="stat-label"
                                    />
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                    <div class="hero-image">
                        <div class="hero-image-wrapper">
                            <img src={hero.image.clone()} alt={hero.image_alt.clone()} />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
