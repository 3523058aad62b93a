//! Navigation confirmation modal.
//!
//! The modal walks `Hidden -> ConfirmPending -> Loading -> Result -> Hidden`.
//! The requested path travels inside the phase, so confirming always acts on
//! the path the user is looking at.

use std::borrow::Cow;
use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::LOADING_DELAY_MS;
use crate::schedule::{use_scheduled_transition, Scheduled};
use crate::styles::{self, StyleSheet};
use crate::topics::{destination, loading_heading, topic_label};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Hidden,
    ConfirmPending {
        path: String,
    },
    Loading {
        path: String,
    },
    Result {
        path: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// A card asked to navigate to `path`. Valid from any phase.
    Request(String),
    /// User accepted the confirmation prompt.
    Confirm,
    /// The simulated round trip elapsed.
    LoadingFinished,
    /// Cancel, dismiss, outside click or Escape.
    Close,
}

impl ModalPhase {
    pub fn is_visible(&self) -> bool {
        !matches!(self, ModalPhase::Hidden)
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            ModalPhase::Hidden => None,
            ModalPhase::ConfirmPending { path }
            | ModalPhase::Loading { path }
            | ModalPhase::Result { path } => Some(path),
        }
    }

    pub fn label(&self) -> Option<Cow<'static, str>> {
        self.path().map(topic_label)
    }

    /// The transition this phase applies to itself without user input.
    pub fn pending_transition(&self) -> Option<Scheduled<ModalAction>> {
        match self {
            ModalPhase::Loading { .. } => {
                Some(Scheduled::after(LOADING_DELAY_MS, ModalAction::LoadingFinished))
            }
            _ => None,
        }
    }

    /// Pure transition function. `None` means the action does not apply to
    /// the current phase.
    pub fn next(&self, action: ModalAction) -> Option<ModalPhase> {
        match (self, action) {
            (_, ModalAction::Request(path)) => Some(ModalPhase::ConfirmPending { path }),
            (ModalPhase::ConfirmPending { path }, ModalAction::Confirm) => {
                Some(ModalPhase::Loading { path: path.clone() })
            }
            (ModalPhase::Loading { path }, ModalAction::LoadingFinished) => {
                Some(ModalPhase::Result { path: path.clone() })
            }
            (ModalPhase::Hidden, ModalAction::Close) => None,
            (_, ModalAction::Close) => Some(ModalPhase::Hidden),
            _ => None,
        }
    }
}

impl Reducible for ModalPhase {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.next(action.clone()) {
            Some(next) => {
                debug!("Modal {:?} -> {:?}", self, next);
                Rc::new(next)
            }
            None => {
                debug!("Ignoring {:?} while modal is {:?}", action, self);
                self
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationModalProps {
    pub phase: UseReducerHandle<ModalPhase>,
}

#[function_component(NavigationModal)]
pub fn navigation_modal(props: &NavigationModalProps) -> Html {
    let phase = props.phase.clone();

    let dispatch = {
        let phase = phase.clone();
        Callback::from(move |action: ModalAction| phase.dispatch(action))
    };

    use_scheduled_transition(phase.pending_transition(), dispatch.clone());

    let is_loading = matches!(*phase, ModalPhase::Loading { .. });
    use_effect_with_deps(
        move |is_loading| {
            if *is_loading {
                if let Err(e) = styles::inject_once(StyleSheet::Spinner) {
                    warn!("Could not add spinner styles: {}", e);
                }
            }
            || ()
        },
        is_loading,
    );

    let close = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatch.emit(ModalAction::Close);
        })
    };

    let confirm = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Navigation confirmed");
            dispatch.emit(ModalAction::Confirm);
        })
    };

    // Clicks inside the dialog must not reach the overlay's close handler.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let body = match &*phase {
        ModalPhase::Hidden => return html! {},
        ModalPhase::ConfirmPending { .. } => html! {
            <>
                <span class="close" onclick={close.clone()}>{"×"}</span>
                <div class="modal-body">
                    <h2>{"Ready to explore "}<span id="topic-name">{phase.label().unwrap_or_default().into_owned()}</span>{"?"}</h2>
                    <p>{"You're about to open the question bank for this topic."}</p>
                    <div class="modal-buttons">
                        <button class="btn-primary" onclick={confirm}>{"Let's Go!"}</button>
                        <button class="btn-secondary" onclick={close.clone()}>{"Maybe Later"}</button>
                    </div>
                </div>
            </>
        },
        ModalPhase::Loading { path } => html! {
            <div class="modal-loading">
                <div class="spinner"></div>
                <h3>{loading_heading(path)}</h3>
                <p>{"Preparing comprehensive interview questions for you."}</p>
            </div>
        },
        ModalPhase::Result { path } => html! {
            <>
                <span class="close" onclick={close.clone()}>{"×"}</span>
                <div class="modal-result">
                    <div class="result-check">{"✓"}</div>
                    <h2>{"Navigation Successful!"}</h2>
                    <p>{"In a real application, you would now be redirected to:"}</p>
                    <div class="result-destination">{destination(path)}</div>
                    <p class="result-note">
                        {"This demo shows the navigation concept. The actual implementation would involve routing to dedicated question pages."}
                    </p>
                    <button class="btn-primary" onclick={close.clone()}>{"Got it!"}</button>
                </div>
            </>
        },
    };

    html! {
        <div id="navigation-modal" class="modal" onclick={close}>
            <div class="modal-content" onclick={keep_open}>
                { body }
            </div>
        </div>
    }
}
