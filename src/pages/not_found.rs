use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="outline-button">
                {"Back to home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    background: #0a0a0a;
                    color: #fff;
                }
                .not-found h1 {
                    font-weight: 200;
                    letter-spacing: 0.1em;
                }
                .not-found .outline-button {
                    padding: 1rem 2.5rem;
                    color: #fff;
                    border: 1px solid rgba(255,255,255,0.4);
                    text-decoration: none;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                "#}
            </style>
        </div>
    }
}
