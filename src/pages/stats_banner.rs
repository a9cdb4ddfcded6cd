use std::rc::Rc;

use yew::prelude::*;

use crate::components::stat_counter::StatCounter;
use crate::content::SiteContent;
use crate::interaction::hooks::use_scroll_reveal;

#[function_component(StatsBanner)]
pub fn stats_banner() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let (banner_ref, visible) = use_scroll_reveal(0.3);

    html! {
        <section class="stats-banner" ref={banner_ref}>
            <style>
                {r#"
                .stats-banner {
                    padding: 4rem 0;
                    background: linear-gradient(135deg, var(--accent-primary), var(--accent-secondary));
                }
                .stats-banner-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    text-align: center;
                }
                .stats-banner-item .number {
                    font-size: 2.75rem;
                    font-weight: 800;
                    color: #0b0b0f;
                }
                .stats-banner-item .label {
                    color: rgba(11, 11, 15, 0.75);
                    font-weight: 600;
                }
                @media (max-width: 768px) {
                    .stats-banner-grid { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
            <div class="container">
                <div class="stats-banner-grid">
                    {
                        content.stats_banner.iter().map(|stat| html! {
                            <StatCounter
                                stat={stat.clone()}
                                start={visible}
                                class="stats-banner-item"
                                number_class="number"
                                label_class="label"
                            />
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
