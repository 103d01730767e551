use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, error};
use yew::prelude::*;

use crate::components::content_wrapper::ContentWrapper;
use crate::config::CAROUSEL_AUTOPLAY_MS;
use crate::content::{Project, PROJECTS};
use crate::controllers::carousel::{Autoplay, CarouselController, CarouselError};

pub enum CarouselAction {
    Next,
    Previous,
    JumpTo(usize),
}

#[derive(PartialEq)]
struct ProjectCarousel(Result<CarouselController<Project>, CarouselError>);

impl Reducible for ProjectCarousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let Ok(controller) = &self.0 else {
            return self;
        };
        let mut next = controller.clone();
        match action {
            CarouselAction::Next => {
                next.next();
            }
            CarouselAction::Previous => {
                next.previous();
            }
            CarouselAction::JumpTo(index) => {
                if let Err(err) = next.jump_to(index) {
                    error!("Ignoring project jump: {}", err);
                    return self;
                }
            }
        }
        debug!("Project carousel at {}", next.position_label());
        Rc::new(Self(Ok(next)))
    }
}

/// Autoplay only runs while there is a carousel to advance.
fn autoplay_interval(autoplay: Autoplay, carousel: &ProjectCarousel) -> Option<u32> {
    autoplay.interval_ms().filter(|_| carousel.0.is_ok())
}

#[derive(Properties, PartialEq)]
pub struct ProjectListProps {
    #[prop_or(PROJECTS)]
    pub projects: &'static [Project],
    #[prop_or(Autoplay::every(CAROUSEL_AUTOPLAY_MS))]
    pub autoplay: Autoplay,
}

#[function_component(ProjectList)]
pub fn project_list(props: &ProjectListProps) -> Html {
    let projects = props.projects;
    let carousel = use_reducer(move || ProjectCarousel(CarouselController::new(projects.to_vec())));

    let active_index = carousel.0.as_ref().map(|c| c.active_index()).unwrap_or(0);

    // Restarting on every index change means a manual click resets the countdown.
    {
        let dispatcher = carousel.dispatcher();
        let interval_ms = autoplay_interval(props.autoplay, &carousel);
        use_effect_with_deps(
            move |_| {
                let interval = interval_ms.map(|ms| {
                    Interval::new(ms, move || dispatcher.dispatch(CarouselAction::Next))
                });
                move || drop(interval)
            },
            (active_index, interval_ms),
        );
    }

    let state = match &carousel.0 {
        Ok(state) => state,
        Err(err) => {
            error!("Project showcase unavailable: {}", err);
            return html! {};
        }
    };
    let current = state.current();

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Previous))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };

    let dots = (0..state.len()).map(|index| {
        let carousel = carousel.clone();
        let onclick = Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::JumpTo(index)));
        html! {
            <button
                key={index}
                class={classes!("dot", state.is_active(index).then(|| "dot--active"))}
                aria-label={format!("Go to project {}", index + 1)}
                onclick={onclick}
            />
        }
    });

    html! {
        <section
            id="projects"
            class="snap-section projects"
            style={format!("background-image: url({});", current.image)}
        >
            <div class="projects__overlay"></div>
            <ContentWrapper class="wrapper--wide projects__wrapper">
                <div class="projects__content">
                    // Keyed on the index so the fade-in replays for every slide.
                    <div class="projects__heading" key={active_index}>
                        <h2>{current.title}</h2>
                        <div class="projects__subtitle">{current.span_title}</div>
                    </div>

                    <div class="projects__bottom">
                        <button class="primary-button">
                            {"Discover More"}
                            <span class="arrow">{"→"}</span>
                        </button>

                        <div class="projects__nav">
                            <div class="projects__arrows">
                                <button class="arrow-button" aria-label="Previous project" onclick={on_prev}>{"‹"}</button>
                                <button class="arrow-button" aria-label="Next project" onclick={on_next}>{"›"}</button>
                            </div>
                            <div class="projects__pagination">
                                <div class="dots">{ for dots }</div>
                                <span class="counter">{state.position_label()}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </ContentWrapper>
            <style>
                {r#"
                .projects {
                    position: relative;
                    height: 100vh;
                    overflow: hidden;
                    background-color: #000;
                    background-size: cover;
                    background-position: center;
                    transition: background-image 0.6s ease;
                }
                .projects__overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0,0,0,0.4), rgba(0,0,0,0.5), rgba(0,0,0,0.6));
                }
                .projects__wrapper {
                    position: relative;
                    height: 100%;
                    display: flex;
                    align-items: center;
                }
                .projects__content {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    width: 100%;
                    height: 100%;
                }
                .projects__heading {
                    max-width: 64rem;
                    animation: slideFade 0.6s ease-out;
                }
                .projects__heading h2 {
                    color: #fff;
                    text-transform: uppercase;
                    font-size: 64px;
                    font-weight: 300;
                    margin: 0;
                }
                .projects__subtitle {
                    margin-top: 1rem;
                    text-transform: uppercase;
                    color: rgba(255,255,255,0.8);
                    font-size: 1.5rem;
                    font-weight: 200;
                }
                .projects__bottom {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                .projects__nav {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 2rem;
                }
                .projects__arrows {
                    display: flex;
                    gap: 1rem;
                }
                .arrow-button {
                    width: 56px;
                    height: 56px;
                    border: 1px solid rgba(255,255,255,0.4);
                    background: transparent;
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .arrow-button:hover {
                    background: #fff;
                    color: #000;
                }
                .projects__pagination {
                    display: flex;
                    gap: 0.75rem;
                    align-items: center;
                }
                .dots {
                    display: flex;
                    gap: 0.5rem;
                }
                .dot {
                    height: 4px;
                    width: 32px;
                    border: none;
                    padding: 0;
                    background: rgba(255,255,255,0.4);
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .dot--active {
                    width: 80px;
                    background: #fff;
                    cursor: default;
                }
                .counter {
                    color: rgba(255,255,255,0.6);
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                }
                @keyframes slideFade {
                    from { transform: translateY(20px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                @media (max-width: 1024px) {
                    .projects__heading h2 { font-size: 48px; }
                }
                @media (max-width: 768px) {
                    .projects__heading h2 { font-size: 36px; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects() -> Rc<ProjectCarousel> {
        Rc::new(ProjectCarousel(CarouselController::new(PROJECTS.to_vec())))
    }

    fn index_of(carousel: &ProjectCarousel) -> usize {
        carousel.0.as_ref().unwrap().active_index()
    }

    #[test]
    fn next_and_previous_move_the_slide() {
        let carousel = projects().reduce(CarouselAction::Next);
        assert_eq!(index_of(&carousel), 1);
        let carousel = carousel.reduce(CarouselAction::Previous);
        assert_eq!(index_of(&carousel), 0);
        let carousel = carousel.reduce(CarouselAction::Previous);
        assert_eq!(index_of(&carousel), PROJECTS.len() - 1);
    }

    #[test]
    fn jump_selects_project() {
        let carousel = projects().reduce(CarouselAction::JumpTo(2));
        assert_eq!(index_of(&carousel), 2);
        assert_eq!(carousel.0.as_ref().unwrap().current(), &PROJECTS[2]);
    }

    #[test]
    fn out_of_range_jump_keeps_same_state() {
        let before = projects().reduce(CarouselAction::JumpTo(1));
        let after = before.clone().reduce(CarouselAction::JumpTo(PROJECTS.len()));
        assert!(Rc::ptr_eq(&before, &after));
        assert_eq!(index_of(&after), 1);
    }

    #[test]
    fn empty_carousel_ignores_actions() {
        let empty = Rc::new(ProjectCarousel(CarouselController::new(Vec::new())));
        for action in [
            CarouselAction::Next,
            CarouselAction::Previous,
            CarouselAction::JumpTo(0),
        ] {
            let after = empty.clone().reduce(action);
            assert!(Rc::ptr_eq(&empty, &after));
            assert!(matches!(after.0, Err(CarouselError::EmptyCollection)));
        }
    }

    #[test]
    fn autoplay_tick_advances_and_wraps() {
        let mut carousel = projects();
        for expected in [1, 2, 3, 0] {
            carousel = carousel.reduce(CarouselAction::Next);
            assert_eq!(index_of(&carousel), expected);
        }
    }

    #[test]
    fn autoplay_needs_interval_and_items() {
        let ready = projects();
        let empty = ProjectCarousel(CarouselController::new(Vec::new()));
        assert_eq!(autoplay_interval(Autoplay::every(6_000), &ready), Some(6_000));
        assert_eq!(autoplay_interval(Autoplay::every(0), &ready), None);
        assert_eq!(autoplay_interval(Autoplay::every(6_000), &empty), None);
    }
}
