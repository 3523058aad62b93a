use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::accordion::Accordion;
use crate::animation::{entrance_style, ENTRANCE_CLASS};
use crate::gestures::{card_transform, SwipeDirection};
use crate::topics::Topic;

#[derive(Properties, PartialEq)]
pub struct TopicCardProps {
    pub topic: &'static Topic,
    pub index: usize,
    #[prop_or_default]
    pub nudge: Option<SwipeDirection>,
    pub on_navigate: Callback<String>,
}

/// Inline style for the card at `index`. While the entrance animation is
/// still playing a resting card carries no inline transform, otherwise it
/// would override the class's starting offset and the card would not slide.
pub fn card_style(
    index: usize,
    entered: bool,
    hovered: bool,
    nudge: Option<SwipeDirection>,
) -> String {
    let resting = !hovered && nudge.is_none();
    match (entered, resting) {
        (false, true) => entrance_style(index),
        (false, false) => format!(
            "{} transform: {};",
            entrance_style(index),
            card_transform(hovered, nudge)
        ),
        (true, _) => format!("transform: {};", card_transform(hovered, nudge)),
    }
}

#[function_component(TopicCard)]
pub fn topic_card(props: &TopicCardProps) -> Html {
    let hovered = use_state(|| false);
    let entered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    // A finished `forwards` animation would keep overriding the inline
    // transform, so the entrance class goes away once it has played.
    let onanimationend = {
        let entered = entered.clone();
        Callback::from(move |_: AnimationEvent| entered.set(true))
    };

    let navigate = {
        let on_navigate = props.on_navigate.clone();
        let path = props.topic.path;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Navigation requested: {}", path);
            on_navigate.emit(path.to_string());
        })
    };

    let style = card_style(props.index, *entered, *hovered, props.nudge);

    html! {
        <div
            class={classes!("topic-card", (!*entered).then(|| ENTRANCE_CLASS))}
            {style}
            {onmouseenter}
            {onmouseleave}
            {onanimationend}
        >
            <div class="card-header">
                <span class="card-icon">{props.topic.icon}</span>
                <h2>{props.topic.label}</h2>
            </div>
            <p class="card-summary">{props.topic.summary}</p>
            <Accordion sections={props.topic.sections} />
            <button class="btn-primary card-cta" onclick={navigate}>
                {"Start Practicing →"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gestures::{HOVER_TRANSFORM, REST_TRANSFORM};

    #[test]
    fn test_resting_card_during_entrance_has_no_transform() {
        let style = card_style(2, false, false, None);
        assert_eq!(style, "animation-delay: 0.4s;");
        assert!(!style.contains("transform:"));
    }

    #[test]
    fn test_hover_during_entrance_keeps_delay_and_transform() {
        let style = card_style(1, false, true, None);
        assert_eq!(
            style,
            format!("animation-delay: 0.2s; transform: {};", HOVER_TRANSFORM)
        );
    }

    #[test]
    fn test_swipe_during_entrance_applies_nudge() {
        let style = card_style(0, false, false, Some(SwipeDirection::Up));
        assert!(style.ends_with("transform: translateY(-5px);"));
    }

    #[test]
    fn test_entered_card_drops_delay() {
        assert_eq!(
            card_style(3, true, false, None),
            format!("transform: {};", REST_TRANSFORM)
        );
        assert_eq!(
            card_style(3, true, true, None),
            format!("transform: {};", HOVER_TRANSFORM)
        );
    }
}
