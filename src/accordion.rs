use std::rc::Rc;

use log::debug;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::topics::Section;

pub const COLLAPSED_GLYPH: &str = "+";
pub const EXPANDED_GLYPH: &str = "−";

/// A set of mutually exclusive panels. Holding a single optional index makes
/// "at most one expanded" impossible to violate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionGroup {
    panels: Vec<String>,
    expanded: Option<usize>,
}

impl AccordionGroup {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            panels: ids.into_iter().map(Into::into).collect(),
            expanded: None,
        }
    }

    /// Flips the panel `id`, collapsing whichever sibling was open. Returns
    /// whether `id` is expanded afterwards. Unknown ids change nothing.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(index) = self.panels.iter().position(|p| p == id) else {
            return false;
        };
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        self.expanded.is_some()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_id() == Some(id)
    }

    pub fn expanded_id(&self) -> Option<&str> {
        self.expanded.map(|index| self.panels[index].as_str())
    }

    pub fn glyph(&self, id: &str) -> &'static str {
        if self.is_expanded(id) {
            EXPANDED_GLYPH
        } else {
            COLLAPSED_GLYPH
        }
    }
}

pub enum AccordionAction {
    Toggle(String),
}

impl Reducible for AccordionGroup {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AccordionAction::Toggle(id) => {
                let mut next = (*self).clone();
                let open = next.toggle(&id);
                debug!("Accordion panel {} {}", id, if open { "expanded" } else { "collapsed" });
                Rc::new(next)
            }
        }
    }
}

/// Inline `max-height` for a panel body. Expanded panels grow to their
/// natural height so the CSS transition has a concrete target.
pub fn content_max_height(expanded: bool, natural_height: Option<i32>) -> String {
    match (expanded, natural_height) {
        (false, _) => "0px".to_string(),
        (true, Some(height)) => format!("{}px", height),
        (true, None) => "none".to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub sections: &'static [Section],
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let group = use_reducer({
        let sections = props.sections;
        move || AccordionGroup::new(sections.iter().map(|s| s.id))
    });

    html! {
        <div class="accordion">
            { for props.sections.iter().map(|section| html! {
                <AccordionPanel
                    key={section.id}
                    section={*section}
                    expanded={group.is_expanded(section.id)}
                    glyph={group.glyph(section.id)}
                    on_toggle={{
                        let group = group.clone();
                        Callback::from(move |id: String| group.dispatch(AccordionAction::Toggle(id)))
                    }}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AccordionPanelProps {
    section: Section,
    expanded: bool,
    glyph: &'static str,
    on_toggle: Callback<String>,
}

#[function_component(AccordionPanel)]
fn accordion_panel(props: &AccordionPanelProps) -> Html {
    let content_ref = use_node_ref();

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let id = props.section.id;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id.to_string());
        })
    };

    // The body is always in the DOM, so its scroll height is its full height
    // even while collapsed.
    let natural_height = content_ref
        .cast::<HtmlElement>()
        .map(|el| el.scroll_height());
    let max_height = content_max_height(props.expanded, natural_height);

    html! {
        <div class="accordion-item">
            <button
                class={classes!("accordion-header", props.expanded.then(|| "active"))}
                data-target={props.section.id}
                {onclick}
            >
                <span class="accordion-title">{props.section.heading}</span>
                <span class="accordion-icon">{props.glyph}</span>
            </button>
            <div
                id={props.section.id}
                ref={content_ref}
                class={classes!("accordion-content", props.expanded.then(|| "active"))}
                style={format!("max-height: {};", max_height)}
            >
                <ul>
                    { for props.section.questions.iter().map(|q| html! { <li>{*q}</li> }) }
                </ul>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const IDS: [&str; 3] = ["basics", "forms", "perf"];

    fn group() -> AccordionGroup {
        AccordionGroup::new(IDS)
    }

    #[test]
    fn test_new_group_is_fully_collapsed() {
        let group = group();
        assert_eq!(group.expanded_id(), None);
        assert!(IDS.iter().all(|id| group.glyph(id) == COLLAPSED_GLYPH));
    }

    #[test]
    fn test_toggle_expands_panel() {
        let mut group = group();
        assert!(group.toggle("forms"));
        assert!(group.is_expanded("forms"));
        assert_eq!(group.glyph("forms"), EXPANDED_GLYPH);
    }

    #[test]
    fn test_opening_sibling_collapses_previous() {
        let mut group = group();
        group.toggle("basics");
        group.toggle("perf");
        assert!(!group.is_expanded("basics"));
        assert_eq!(group.glyph("basics"), COLLAPSED_GLYPH);
        assert_eq!(group.expanded_id(), Some("perf"));
    }

    #[test]
    fn test_toggle_open_panel_collapses_it() {
        let mut group = group();
        group.toggle("basics");
        assert!(!group.toggle("basics"));
        assert_eq!(group.expanded_id(), None);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut group = group();
        group.toggle("forms");
        assert!(!group.toggle("missing"));
        assert_eq!(group.expanded_id(), Some("forms"));
    }

    #[test]
    fn test_reducer_leaves_previous_state_untouched() {
        let before = Rc::new(group());
        let after = before.clone().reduce(AccordionAction::Toggle("perf".into()));
        assert_eq!(before.expanded_id(), None);
        assert_eq!(after.expanded_id(), Some("perf"));
    }

    #[test]
    fn test_content_max_height() {
        assert_eq!(content_max_height(false, Some(240)), "0px");
        assert_eq!(content_max_height(true, Some(240)), "240px");
        assert_eq!(content_max_height(true, None), "none");
    }

    proptest! {
        #[test]
        fn test_at_most_one_panel_expanded(clicks in prop::collection::vec(0usize..4, 0..64)) {
            let ids = ["basics", "forms", "perf", "missing"];
            let mut group = group();
            for click in clicks {
                group.toggle(ids[click]);
                let open = IDS.iter().filter(|id| group.is_expanded(id)).count();
                prop_assert!(open <= 1);
            }
        }
    }
}
