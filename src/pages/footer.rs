use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::icons::IconSvg;
use crate::content::SiteContent;
use crate::interaction::navbar::Anchor;

#[function_component(Footer)]
pub fn footer() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <style>
                {r#"
                .footer {
                    padding: 4rem 0 2rem;
                    border-top: 1px solid var(--border);
                    text-align: center;
                }
                .footer-logo {
                    font-size: 1.75rem;
                    font-weight: 800;
                    letter-spacing: 0.1em;
                }
                .footer-tagline {
                    color: var(--text-secondary);
                    margin: 0.5rem 0 2rem;
                }
                .footer-links {
                    list-style: none;
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }
                .footer-links a {
                    color: var(--text-secondary);
                }
                .footer-links a:hover {
                    color: var(--accent-primary);
                }
                .footer-social {
                    display: flex;
                    justify-content: center;
                    margin-bottom: 2rem;
                }
                .footer-copyright {
                    color: var(--text-secondary);
                    font-size: 0.85rem;
                }
                "#}
            </style>
            <div class="container">
                <div class="footer-content">
                    <div class="footer-logo">{ &content.brand }</div>
                    <p class="footer-tagline">{ &content.footer.tagline }</p>
                    <ul class="footer-links">
                        <li><AnchorLink to={Anchor::Home}>{"Home"}</AnchorLink></li>
                        <li><AnchorLink to={Anchor::About}>{"About"}</AnchorLink></li>
                        <li><AnchorLink to={Anchor::Services}>{"Services"}</AnchorLink></li>
                        <li><a href={content.links.blog.clone()} target="_blank" rel="noopener noreferrer">{"Blog"}</a></li>
                        <li><AnchorLink to={Anchor::Faq}>{"FAQ"}</AnchorLink></li>
                        <li><AnchorLink to={Anchor::Contact}>{"Contact"}</AnchorLink></li>
                    </ul>
                    <div class="footer-social social-links">
                        {
                            content.links.social.iter().map(|link| html! {
                                <a href={link.url.clone()} target="_blank" rel="noopener noreferrer" class="social-link">
                                    <IconSvg icon={link.icon} size={20} />
                                </a>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="footer-copyright">
                        { format!("© {} {}. All rights reserved.", year, content.footer.owner) }
                    </div>
                </div>
            </div>
        </footer>
    }
}
