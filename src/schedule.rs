use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// An action a piece of state wants applied to itself after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled<A> {
    pub delay_ms: u32,
    pub action: A,
}

impl<A> Scheduled<A> {
    pub fn after(delay_ms: u32, action: A) -> Self {
        Self { delay_ms, action }
    }
}

/// Arms a one-shot timer for `task` and hands its action to `on_fire` when it
/// elapses. The timer is dropped, and with it cancelled, as soon as `task`
/// changes or the component unmounts, so a transition scheduled for a state
/// that no longer exists never fires.
#[hook]
pub fn use_scheduled_transition<A>(task: Option<Scheduled<A>>, on_fire: Callback<A>)
where
    A: Clone + PartialEq + 'static,
{
    use_effect_with_deps(
        move |task| {
            let timeout = task.clone().map(|Scheduled { delay_ms, action }| {
                Timeout::new(delay_ms, move || on_fire.emit(action))
            });
            move || drop(timeout)
        },
        task,
    );
}
