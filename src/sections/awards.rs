use yew::prelude::*;

use crate::components::content_wrapper::ContentWrapper;
use crate::content::AWARDS;

#[function_component(AwardSection)]
pub fn award_section() -> Html {
    html! {
        <section class="snap-section awards">
            <video class="awards__video" muted=true autoplay=true loop=true playsinline=true preload="auto">
                <source src="/assets/common/awards.mp4" type="video/mp4" />
            </video>
            <div class="awards__overlay"></div>

            <ContentWrapper class="awards__wrapper">
                <div class="section-intro">
                    <h2>{"Awards & Recognition"}</h2>
                    <div class="divider"></div>
                    <p>{"Recognized globally for excellence in design, sustainability, and customer satisfaction"}</p>
                </div>

                <div class="awards__grid">
                    { for AWARDS.iter().map(|award| html! {
                        <div class="award-card" key={award.img}>
                            <img src={award.img} alt={award.title} width="300" height="200" loading="lazy" />
                        </div>
                    }) }
                </div>
            </ContentWrapper>
            <style>
                {r#"
                .awards {
                    position: relative;
                    min-height: 100vh;
                    overflow: hidden;
                    background: #000;
                    display: flex;
                    align-items: center;
                }
                .awards__video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .awards__overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0,0,0,0.7);
                }
                .awards__wrapper {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    gap: 5rem;
                }
                .awards__grid {
                    display: grid;
                    grid-template-columns: repeat(5, 1fr);
                    gap: 1.5rem;
                }
                .award-card {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    border: 1px solid rgba(255,255,255,0.1);
                    background: rgba(255,255,255,0.05);
                }
                .award-card img {
                    max-width: 100%;
                    height: auto;
                }
                @media (max-width: 1024px) {
                    .awards__grid { grid-template-columns: repeat(3, 1fr); }
                }
                @media (max-width: 640px) {
                    .awards__grid { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
