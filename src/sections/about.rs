use yew::prelude::*;

use crate::components::content_wrapper::ContentWrapper;
use crate::content::{Stat, ABOUT_STATS};

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section class="snap-section about">
            <div class="about__background">
                <img src="/assets/common/about.webp" alt="Luxury architecture in Dubai" width="1800" height="900" />
            </div>
            <div class="about__overlay"></div>

            <ContentWrapper class="wrapper--wide about__wrapper">
                <div class="section-intro">
                    <h2>{"About Binghatti"}</h2>
                    <div class="divider"></div>
                    <p>
                        {"We craft architectural icons across Dubai, blending timeless elegance with modern innovation to deliver truly extraordinary living experiences."}
                    </p>
                </div>

                <div class="about__stats">
                    { for ABOUT_STATS.iter().map(stat_card) }
                </div>
            </ContentWrapper>
            <style>
                {r#"
                .about {
                    position: relative;
                    height: 100vh;
                    overflow: hidden;
                }
                .about__background {
                    position: absolute;
                    inset: 0;
                    z-index: -10;
                }
                .about__background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .about__overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0,0,0,0.1), rgba(0,0,0,0.3), rgba(0,0,0,0.1));
                }
                .about__wrapper {
                    position: relative;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }
                .about__stats {
                    margin: 3rem auto 0;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    max-width: 72rem;
                    width: 100%;
                }
                .about-card {
                    padding: 1.5rem;
                    border: 1px solid rgba(255,255,255,0.2);
                    background: rgba(255,255,255,0.05);
                    backdrop-filter: blur(12px);
                    color: #fff;
                    transition: all 0.5s;
                }
                .about-card:hover {
                    background: rgba(255,255,255,0.1);
                    border-color: rgba(255,255,255,0.4);
                }
                .stat-number {
                    font-size: 2.25rem;
                    font-weight: 200;
                    margin-bottom: 0.5rem;
                }
                .stat-label {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    color: rgba(255,255,255,0.6);
                }
                @media (max-width: 1024px) {
                    .about__stats { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 640px) {
                    .about__stats { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}

fn stat_card(stat: &Stat) -> Html {
    html! {
        <div class="about-card" key={stat.label}>
            <div class="stat-number">{stat.value}</div>
            <div class="stat-label">{stat.label}</div>
        </div>
    }
}
