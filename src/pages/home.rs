use yew::prelude::*;
use yew_hooks::use_mount;

use crate::sections::{
    about::AboutSection, awards::AwardSection, contact::ContactSection, hero::HeroSection,
    projects::ProjectList, why_invest::WhyInvestSection,
};

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_mount(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <main class="home">
            <HeroSection />
            <AboutSection />
            <ProjectList />
            <AwardSection />
            <WhyInvestSection />
            <ContactSection />
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #000;
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .snap-section {
                    scroll-snap-align: start;
                }
                .section-intro {
                    max-width: 64rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .section-intro h2 {
                    color: #fff;
                    font-size: 56px;
                    font-weight: 300;
                    letter-spacing: -0.01em;
                    line-height: 1.2;
                    margin: 0;
                }
                .section-intro p {
                    color: rgba(255,255,255,0.8);
                    font-size: 1.125rem;
                    font-weight: 200;
                    line-height: 1.7;
                }
                .divider {
                    width: 6rem;
                    height: 1px;
                    margin: 1.5rem auto;
                    background: linear-gradient(to right, transparent, rgba(255,255,255,0.6), transparent);
                }
                .divider--left {
                    margin-left: 0;
                    background: linear-gradient(to right, rgba(255,255,255,0.6), transparent);
                }
                .primary-button,
                .outline-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    width: fit-content;
                    padding: 1.25rem 3rem;
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    text-decoration: none;
                    cursor: pointer;
                    transition: all 0.5s;
                }
                .primary-button {
                    background: #fff;
                    color: #000;
                    border: none;
                }
                .primary-button:hover {
                    box-shadow: 0 0 40px rgba(255,255,255,0.4);
                    transform: scale(1.02);
                }
                .primary-button:hover .arrow {
                    transform: translateX(0.5rem);
                }
                .arrow {
                    transition: transform 0.5s;
                }
                .outline-button {
                    background: transparent;
                    color: #fff;
                    border: 1px solid rgba(255,255,255,0.4);
                }
                .outline-button:hover {
                    background: #fff;
                    color: #000;
                }
                @media (max-width: 1024px) {
                    .section-intro h2 { font-size: 42px; }
                }
                @media (max-width: 768px) {
                    .section-intro h2 { font-size: 32px; }
                    .primary-button, .outline-button { padding: 0.75rem 2rem; }
                }
                "#}
            </style>
        </main>
    }
}
