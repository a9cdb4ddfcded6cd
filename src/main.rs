use std::rc::Rc;

use log::{error, info};
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod content;
mod interaction {
    pub mod contact;
    pub mod counter;
    pub mod dom;
    pub mod faq;
    pub mod hooks;
    pub mod navbar;
    pub mod reveal;
}
mod components {
    pub mod anchor_link;
    pub mod icons;
    pub mod notification;
    pub mod reveal;
    pub mod stat_counter;
}
mod pages {
    pub mod about;
    pub mod certificates;
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod services;
    pub mod stats_banner;
    pub mod testimonials;
}

use components::anchor_link::AnchorLink;
use content::SiteContent;
use interaction::dom::scroll_to_section;
use interaction::hooks::use_scrolled;
use interaction::navbar::Anchor;
use pages::{
    about::About,
    certificates::Certificates,
    contact::Contact,
    faq::FaqSection,
    footer::Footer,
    hero::Hero,
    services::Services,
    stats_banner::StatsBanner,
    testimonials::Testimonials,
};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let is_scrolled = use_scrolled(config::NAVBAR_SCROLL_THRESHOLD);
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let nav_link = |anchor: Anchor, label: &'static str| {
        html! {
            <li>
                <AnchorLink to={anchor} on_navigate={close_menu.clone()}>{ label }</AnchorLink>
            </li>
        }
    };

    html! {
        <nav class={classes!("navbar", is_scrolled.then_some("scrolled"), (*menu_open).then_some("menu-open"))}>
            <div class="container">
                <AnchorLink to={Anchor::Home} classes={classes!("navbar-logo")}>
                    { &content.brand }
                </AnchorLink>
                <ul class="navbar-links">
                    { nav_link(Anchor::Home, "Home") }
                    { nav_link(Anchor::About, "About me") }
                    { nav_link(Anchor::Services, "Services") }
                    <li>
                        <a href={content.links.blog.clone()} target="_blank" rel="noopener noreferrer">{"Blog"}</a>
                    </li>
                    { nav_link(Anchor::Faq, "FAQ") }
                    { nav_link(Anchor::Contact, "Contact") }
                </ul>
                <div class="navbar-cta">
                    <a href={content.links.whatsapp.clone()} target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                        {"Let's Talk →"}
                    </a>
                </div>
                <button class="mobile-menu-btn" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    // Honour deep links like /#faq once every section is in the DOM
    use_effect_with_deps(
        |_| {
            let anchor = web_sys::window()
                .and_then(|window| window.location().hash().ok())
                .and_then(|hash| Anchor::from_id(hash.trim_start_matches('#')));
            if let Some(anchor) = anchor {
                info!("Opening at section '{}'", anchor.id());
                scroll_to_section(anchor.id());
            }
            || ()
        },
        (),
    );

    html! {
        <ContextProvider<Rc<SiteContent>> context={props.content.clone()}>
            <style>
                {r#"
                :root {
                    --bg-primary: #0b0b0f;
                    --bg-secondary: #111118;
                    --bg-card: #17171f;
                    --border: rgba(255, 255, 255, 0.08);
                    --text-primary: #f5f5f7;
                    --text-secondary: #a1a1aa;
                    --accent-primary: #a3e635;
                    --accent-secondary: #22d3ee;
                }
                * {
                    box-sizing: border-box;
                    margin: 0;
                    padding: 0;
                }
                html {
                    scroll-behavior: smooth;
                }
                body {
                    background: var(--bg-primary);
                    color: var(--text-primary);
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    line-height: 1.6;
                }
                a {
                    color: inherit;
                    text-decoration: none;
                }
                .container {
                    width: 100%;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .section-label {
                    display: inline-block;
                    color: var(--accent-primary);
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    font-size: 0.8rem;
                    margin-bottom: 0.75rem;
                }
                .section-title {
                    font-size: clamp(1.8rem, 4vw, 2.75rem);
                    line-height: 1.2;
                    margin-bottom: 1rem;
                }
                .btn {
                    display: inline-block;
                    padding: 0.85rem 1.75rem;
                    border-radius: 999px;
                    font-weight: 600;
                    cursor: pointer;
                    border: 1px solid transparent;
                    transition: transform 0.2s ease, background 0.2s ease;
                }
                .btn:hover {
                    transform: translateY(-2px);
                }
                .btn-primary {
                    background: var(--accent-primary);
                    color: var(--bg-primary);
                }
                .btn-outline {
                    border-color: var(--text-primary);
                    color: var(--text-primary);
                }
                .reveal, .reveal-left, .reveal-right {
                    opacity: 0;
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .reveal { transform: translateY(40px); }
                .reveal-left { transform: translateX(-60px); }
                .reveal-right { transform: translateX(60px); }
                .reveal.visible, .reveal-left.visible, .reveal-right.visible {
                    opacity: 1;
                    transform: none;
                }
                .social-links {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 1rem;
                }
                .social-link {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: 1px solid var(--border);
                }
                .social-link:hover {
                    border-color: var(--accent-primary);
                    color: var(--accent-primary);
                }

                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1.25rem 0;
                    transition: background 0.3s ease, padding 0.3s ease;
                }
                .navbar.scrolled {
                    background: rgba(11, 11, 15, 0.9);
                    backdrop-filter: blur(10px);
                    padding: 0.75rem 0;
                    border-bottom: 1px solid var(--border);
                }
                .navbar .container {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                }
                .navbar-logo {
                    font-size: 1.5rem;
                    font-weight: 800;
                    letter-spacing: 0.1em;
                }
                .navbar-links {
                    list-style: none;
                    display: flex;
                    gap: 2rem;
                }
                .navbar-links a:hover {
                    color: var(--accent-primary);
                }
                .mobile-menu-btn {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .mobile-menu-btn span {
                    width: 24px;
                    height: 2px;
                    background: var(--text-primary);
                }
                @media (max-width: 900px) {
                    .navbar-links, .navbar-cta {
                        display: none;
                    }
                    .mobile-menu-btn {
                        display: flex;
                    }
                    .navbar.menu-open .navbar-links {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        background: var(--bg-secondary);
                    }
                }
                "#}
            </style>
            <Navbar />
            <Hero />
            <About />
            <Services />
            <StatsBanner />
            <Certificates />
            <Testimonials />
            <FaqSection />
            <Contact />
            <Footer />
        </ContextProvider<Rc<SiteContent>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let content = match content::load() {
        Ok(content) => content,
        Err(err) => {
            error!("Failed to parse site content: {}", err);
            SiteContent::default()
        }
    };

    info!("Starting site");
    yew::Renderer::<App>::with_props(AppProps {
        content: Rc::new(content),
    })
    .render();
}
