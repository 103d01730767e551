use yew::prelude::*;

use crate::components::content_wrapper::ContentWrapper;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    html! {
        <div class="snap-section hero">
            <ContentWrapper class="wrapper--wide hero__wrapper">
                <video class="hero__video" muted=true autoplay=true loop=true playsinline=true preload="auto">
                    <source src="/assets/common/hero.mp4" type="video/mp4" />
                </video>
                <div class="hero__overlay"></div>
                <div class="hero__vignette"></div>

                <div class="hero__content">
                    <h1 class="hero__title">
                        <span class="hero__line">{"Luxury Real Estate"}</span>
                        <span class="hero__line hero__line--glow">{"Redefined"}</span>
                    </h1>
                    <div class="divider"></div>
                    <p class="hero__subtitle">
                        {"Architectural masterpieces crafting Dubai's iconic skyline"}
                    </p>
                    <div class="hero__ctas">
                        <a href="#projects" class="outline-button">{"Explore Projects"}</a>
                        <a href="#contact" class="primary-button">
                            {"Contact Us"}
                            <span class="arrow">{"→"}</span>
                        </a>
                    </div>
                </div>
            </ContentWrapper>
            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100dvh;
                    overflow: hidden;
                }
                .hero__wrapper {
                    height: 100%;
                }
                .hero__video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero__overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0,0,0,0.8), rgba(0,0,0,0.6), rgba(0,0,0,0.9));
                }
                .hero__vignette {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(ellipse at center, transparent 0%, rgba(0,0,0,0.4) 100%);
                }
                .hero__content {
                    position: relative;
                    z-index: 10;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2.5rem;
                    padding: 0 1.5rem;
                }
                .hero__title {
                    text-align: center;
                    margin: 0;
                }
                .hero__line {
                    display: block;
                    font-size: 100px;
                    font-weight: 300;
                    line-height: 1;
                    letter-spacing: -0.02em;
                    color: rgba(255,255,255,0.95);
                    animation: riseIn 1s ease-out both;
                }
                .hero__line--glow {
                    font-weight: 200;
                    margin-top: 1rem;
                    text-shadow: 0 0 80px rgba(255,255,255,0.3);
                    animation-delay: 0.15s;
                }
                .hero__subtitle {
                    color: rgba(255,255,255,0.8);
                    font-size: 1.25rem;
                    font-weight: 200;
                    text-align: center;
                    max-width: 42rem;
                }
                .hero__ctas {
                    display: flex;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                    justify-content: center;
                }
                @keyframes riseIn {
                    from { transform: translateY(60px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                @media (max-width: 1280px) { .hero__line { font-size: 80px; } }
                @media (max-width: 1024px) { .hero__line { font-size: 60px; } }
                @media (max-width: 768px) { .hero__line { font-size: 36px; } }
                "#}
            </style>
        </div>
    }
}
