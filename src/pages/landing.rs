use log::warn;
use web_sys::{KeyboardEvent, TouchEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::topic_card::TopicCard;
use crate::gestures::{detect_swipe, NudgeAction, SwipeNudge};
use crate::modal::{ModalAction, ModalPhase, NavigationModal};
use crate::schedule::use_scheduled_transition;
use crate::styles::{self, StyleSheet};
use crate::topics::TOPICS;

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal = use_reducer(ModalPhase::default);
    let nudge = use_reducer(SwipeNudge::default);
    let touch_start_y = use_mut_ref(|| 0i32);

    // Scroll to top and add the entrance keyframes only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            if let Err(e) = styles::inject_once(StyleSheet::EntranceAnimation) {
                warn!("Could not add entrance animation styles: {}", e);
            }
            || ()
        },
        (),
    );

    {
        let pending = nudge.pending_transition();
        let nudge = nudge.clone();
        let revert = Callback::from(move |action: NudgeAction| nudge.dispatch(action));
        use_scheduled_transition(pending, revert);
    }

    {
        let modal = modal.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                modal.dispatch(ModalAction::Close);
            }
        });
    }

    {
        let touch_start_y = touch_start_y.clone();
        use_event_with_window("touchstart", move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                *touch_start_y.borrow_mut() = touch.client_y();
            }
        });
    }

    {
        let nudge = nudge.clone();
        use_event_with_window("touchend", move |e: TouchEvent| {
            let Some(touch) = e.changed_touches().get(0) else {
                return;
            };
            let start_y = *touch_start_y.borrow();
            if let Some(direction) = detect_swipe(start_y, touch.client_y()) {
                nudge.dispatch(NudgeAction::Swipe(direction));
            }
        });
    }

    let on_navigate = {
        let modal = modal.clone();
        Callback::from(move |path: String| modal.dispatch(ModalAction::Request(path)))
    };

    html! {
        <div class={classes!("landing-page", modal.is_visible().then(|| "modal-open"))}>
            <header class="hero">
                <h1>{"Interview Prep"}</h1>
                <p class="hero-subtitle">
                    {"Front-end interview questions, grouped by topic. Open a category to skim it, then jump into the full question bank."}
                </p>
            </header>

            <main class="topics-grid">
                { for TOPICS.iter().enumerate().map(|(index, topic)| html! {
                    <TopicCard
                        key={topic.path}
                        {topic}
                        {index}
                        nudge={nudge.offset}
                        on_navigate={on_navigate.clone()}
                    />
                }) }
            </main>

            <NavigationModal phase={modal.clone()} />

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #1a1a1a;
                    color: #ffffff;
                    padding: 0 2rem 4rem;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .landing-page.modal-open {
                    height: 100vh;
                    overflow: hidden;
                }

                .hero {
                    text-align: center;
                    padding: 6rem 2rem 4rem;
                }

                .hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.2rem;
                    color: #999;
                    max-width: 640px;
                    margin: 0 auto;
                    line-height: 1.6;
                }

                .topics-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .topic-card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }

                .topic-card:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                }

                .card-header {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .card-icon {
                    font-size: 2rem;
                }

                .card-summary {
                    color: #999;
                    line-height: 1.6;
                }

                .accordion-item {
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                }

                .accordion-header {
                    width: 100%;
                    padding: 1rem 0;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .accordion-header:hover,
                .accordion-header.active {
                    color: #7EB2FF;
                }

                .accordion-icon {
                    font-size: 1.4rem;
                    color: #7EB2FF;
                }

                .accordion-content {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }

                .accordion-content ul {
                    margin: 0 0 1rem;
                    padding-left: 1.2rem;
                    color: #bbb;
                    line-height: 1.7;
                }

                .btn-primary {
                    padding: 0.9rem 1.8rem;
                    background: linear-gradient(45deg, #1E90FF, #4169E1);
                    color: white;
                    border: none;
                    border-radius: 8px;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .btn-primary:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 4px 20px rgba(30, 144, 255, 0.3);
                }

                .btn-secondary {
                    padding: 0.9rem 1.8rem;
                    background: transparent;
                    color: #ddd;
                    border: 1px solid #555;
                    border-radius: 8px;
                    font-size: 1rem;
                    cursor: pointer;
                }

                .card-cta {
                    margin-top: auto;
                }

                .modal {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.7);
                    backdrop-filter: blur(4px);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 1000;
                }

                .modal-content {
                    position: relative;
                    background: #222;
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    border-radius: 16px;
                    padding: 2rem;
                    max-width: 520px;
                    width: calc(100% - 2rem);
                    text-align: center;
                }

                .close {
                    position: absolute;
                    top: 0.8rem;
                    right: 1.2rem;
                    font-size: 1.8rem;
                    color: #999;
                    cursor: pointer;
                }

                .modal-buttons {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    margin-top: 1.5rem;
                }

                .modal-loading {
                    padding: 40px;
                }

                .spinner {
                    display: inline-block;
                    width: 40px;
                    height: 40px;
                    border: 4px solid #f3f3f3;
                    border-radius: 50%;
                    border-top: 4px solid #667eea;
                    animation: spin 1s linear infinite;
                    margin-bottom: 20px;
                }

                .result-check {
                    font-size: 4rem;
                    color: #28a745;
                    margin-bottom: 20px;
                }

                .result-destination {
                    background: #f8f9fa;
                    padding: 15px;
                    border-radius: 10px;
                    margin: 20px 0;
                    font-family: monospace;
                    color: #333;
                }

                .result-note {
                    color: #999;
                    font-size: 0.9rem;
                }

                @media (max-width: 768px) {
                    .landing-page {
                        padding: 0 1rem 2rem;
                    }

                    .hero {
                        padding: 4rem 1rem 2rem;
                    }

                    .hero h1 {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
