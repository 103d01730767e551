use yew::prelude::*;
use yew_router::prelude::*;

use crate::controllers::scroll_header::HeaderThresholds;
use crate::hooks::use_scroll_header;
use crate::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let scroll = use_scroll_header(HeaderThresholds::default());

    let logo_class = if scroll.is_scrolled { "logo logo--dark" } else { "logo" };

    html! {
        <header class={classes!("site-header", scroll.header_classes())}>
            <div class="site-header__inner">
                <Link<Route> to={Route::Home} classes={logo_class}>
                    {"BINGHATTI"}
                </Link<Route>>
                <nav class="site-header__links">
                    <a href="#projects">{"Projects"}</a>
                    <a href="#contact">{"Contact"}</a>
                </nav>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    display: flex;
                    justify-content: center;
                    background: transparent;
                    transition: transform 0.3s ease, background 0.3s ease;
                }
                .site-header.scrolled {
                    background: rgba(3, 7, 18, 0.2);
                    backdrop-filter: blur(3px);
                }
                .site-header.header-hidden {
                    transform: translateY(-100%);
                }
                .site-header__inner {
                    width: 100%;
                    padding: 40px 100px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    box-sizing: border-box;
                }
                .site-header .logo {
                    color: #fff;
                    font-size: 1.4rem;
                    letter-spacing: 0.4em;
                    text-decoration: none;
                }
                .site-header .logo--dark {
                    color: #000;
                }
                .site-header__links a {
                    color: rgba(255, 255, 255, 0.8);
                    margin-left: 2rem;
                    text-transform: uppercase;
                    font-size: 0.8rem;
                    letter-spacing: 0.2em;
                    text-decoration: none;
                }
                @media (max-width: 1280px) {
                    .site-header__inner { padding: 30px 60px; }
                }
                @media (max-width: 768px) {
                    .site-header__inner { padding: 20px; }
                }
                "#}
            </style>
        </header>
    }
}
