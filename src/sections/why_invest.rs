use yew::prelude::*;

use crate::components::content_wrapper::ContentWrapper;
use crate::content::INVESTMENT_REASONS;

#[function_component(WhyInvestSection)]
pub fn why_invest_section() -> Html {
    html! {
        <section class="snap-section why-invest">
            <ContentWrapper class="why-invest__wrapper">
                <div class="section-intro">
                    <h2>{"Why Invest in Binghatti"}</h2>
                    <div class="divider"></div>
                    <p>{"Discover the compelling reasons to invest in Binghatti's exceptional real estate portfolio"}</p>
                </div>

                <div class="why-invest__grid">
                    { for INVESTMENT_REASONS.iter().map(|reason| html! {
                        <div class="feature-card" key={reason.title}>
                            <div class="feature-card__icon">{reason.icon}</div>
                            <h3>{reason.title}</h3>
                            <p>{reason.description}</p>
                            <div class="feature-card__accent"></div>
                        </div>
                    }) }
                </div>

                <div class="why-invest__cta">
                    <h3>{"Ready to Invest?"}</h3>
                    <a href="#contact" class="primary-button">
                        {"Schedule Consultation"}
                        <span class="arrow">{"→"}</span>
                    </a>
                </div>
            </ContentWrapper>
            <style>
                {r#"
                .why-invest {
                    position: relative;
                    min-height: 100vh;
                    overflow: hidden;
                    background: #0a0a0a;
                    display: flex;
                    align-items: center;
                }
                .why-invest__wrapper {
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                }
                .why-invest__grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .feature-card {
                    position: relative;
                    padding: 2rem;
                    border: 1px solid rgba(255,255,255,0.1);
                    background: rgba(255,255,255,0.03);
                    transition: all 0.5s;
                }
                .feature-card:hover {
                    border-color: rgba(255,255,255,0.3);
                }
                .feature-card__icon {
                    font-size: 2.25rem;
                    margin-bottom: 1.5rem;
                }
                .feature-card h3 {
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 300;
                    margin-bottom: 1rem;
                }
                .feature-card p {
                    color: rgba(255,255,255,0.6);
                    font-size: 0.875rem;
                    font-weight: 200;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }
                .feature-card__accent {
                    height: 1px;
                    width: 0;
                    background: rgba(255,255,255,0.6);
                    transition: width 0.5s;
                }
                .feature-card:hover .feature-card__accent {
                    width: 100%;
                }
                .why-invest__cta {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }
                .why-invest__cta h3 {
                    color: #fff;
                    font-size: 1.875rem;
                    font-weight: 300;
                }
                @media (max-width: 1024px) {
                    .why-invest__grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 768px) {
                    .why-invest__grid { grid-template-columns: 1fr; gap: 20px 0; }
                }
                "#}
            </style>
        </section>
    }
}
