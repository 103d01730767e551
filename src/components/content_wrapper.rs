use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContentWrapperProps {
    #[prop_or_default]
    pub children: Children,
    /// Extra classes, e.g. `wrapper--wide` to drop the max-width.
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

/// Shared horizontal padding and max-width for page sections.
#[function_component(ContentWrapper)]
pub fn content_wrapper(props: &ContentWrapperProps) -> Html {
    html! {
        <div class={classes!("content-wrapper", props.class.clone())} style={props.style.clone()}>
            { for props.children.iter() }
            <style>
                {r#"
                .content-wrapper {
                    padding: 100px;
                    max-width: 1200px;
                    margin: 0 auto;
                    box-sizing: border-box;
                }
                .content-wrapper.wrapper--wide {
                    max-width: 100%;
                }
                @media (max-width: 1280px) {
                    .content-wrapper { padding: 80px 60px; }
                }
                @media (max-width: 1024px) {
                    .content-wrapper { padding: 60px 20px; }
                }
                "#}
            </style>
        </div>
    }
}
