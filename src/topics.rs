use std::borrow::Cow;

/// One collapsible block of sample questions inside a topic card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub heading: &'static str,
    pub questions: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Topic {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub summary: &'static str,
    pub sections: &'static [Section],
}

pub const TOPICS: &[Topic] = &[
    Topic {
        path: "html-deep-dive",
        label: "HTML",
        icon: "📄",
        summary: "Semantics, document structure and the parts of the platform everyone forgets.",
        sections: &[
            Section {
                id: "html-basics",
                heading: "Fundamentals",
                questions: &[
                    "What does the doctype declaration do?",
                    "Block versus inline elements: what is the difference?",
                    "When would you reach for a <section> over a <div>?",
                ],
            },
            Section {
                id: "html-forms",
                heading: "Forms & Validation",
                questions: &[
                    "How does native constraint validation work?",
                    "Why should every input have an associated <label>?",
                    "GET versus POST form submission",
                ],
            },
            Section {
                id: "html-perf",
                heading: "Loading & Performance",
                questions: &[
                    "async versus defer on <script> tags",
                    "What does loading=\"lazy\" change for images?",
                    "How do preload and prefetch hints differ?",
                ],
            },
        ],
    },
    Topic {
        path: "css-deep-dive",
        label: "CSS",
        icon: "🎨",
        summary: "Cascade, layout engines and the box model, explained out loud.",
        sections: &[
            Section {
                id: "css-cascade",
                heading: "Cascade & Specificity",
                questions: &[
                    "How is specificity calculated?",
                    "What do cascade layers solve?",
                    "inherit, initial, unset and revert",
                ],
            },
            Section {
                id: "css-layout",
                heading: "Layout",
                questions: &[
                    "Flexbox or grid for a card gallery?",
                    "What creates a new stacking context?",
                    "How does margin collapsing work?",
                ],
            },
            Section {
                id: "css-motion",
                heading: "Animation",
                questions: &[
                    "Transitions versus keyframe animations",
                    "Why animate transform instead of top/left?",
                    "What does prefers-reduced-motion let you do?",
                ],
            },
        ],
    },
    Topic {
        path: "js-deep-dive",
        label: "JavaScript",
        icon: "⚡",
        summary: "Closures, the event loop and everything asked in the second round.",
        sections: &[
            Section {
                id: "js-core",
                heading: "Language Core",
                questions: &[
                    "Explain closures with an example",
                    "How does `this` get bound?",
                    "var, let and const: scoping rules",
                ],
            },
            Section {
                id: "js-async",
                heading: "Async & Event Loop",
                questions: &[
                    "Microtasks versus macrotasks",
                    "What does await actually do?",
                    "Promise.all versus Promise.allSettled",
                ],
            },
            Section {
                id: "js-dom",
                heading: "DOM & Events",
                questions: &[
                    "Event bubbling, capturing and delegation",
                    "preventDefault versus stopPropagation",
                    "How would you debounce a scroll handler?",
                ],
            },
        ],
    },
];

pub fn find_topic(path: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|topic| topic.path == path)
}

/// Human readable label for a navigation path.
///
/// Known paths use the catalog label; anything else falls back to the first
/// hyphen-delimited segment, upper-cased (`"rust-basics"` -> `"RUST"`).
pub fn topic_label(path: &str) -> Cow<'static, str> {
    match find_topic(path) {
        Some(topic) => Cow::Borrowed(topic.label),
        None => Cow::Owned(path.split('-').next().unwrap_or_default().to_uppercase()),
    }
}

/// Heading shown while the simulated navigation is in flight. Only the first
/// hyphen becomes a space.
pub fn loading_heading(path: &str) -> String {
    format!("Loading {} questions...", path.replacen('-', " ", 1).to_uppercase())
}

/// Where a real router would have taken the user.
pub fn destination(path: &str) -> String {
    format!("/{}/", path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_use_catalog_labels() {
        assert_eq!(topic_label("html-deep-dive"), "HTML");
        assert_eq!(topic_label("css-deep-dive"), "CSS");
        assert_eq!(topic_label("js-deep-dive"), "JavaScript");
    }

    #[test]
    fn test_unknown_path_uses_first_segment() {
        assert_eq!(topic_label("unknown-path-x"), "UNKNOWN");
        assert_eq!(topic_label("rust"), "RUST");
    }

    #[test]
    fn test_empty_path_yields_empty_label() {
        assert_eq!(topic_label(""), "");
        assert_eq!(topic_label("-leading"), "");
    }

    #[test]
    fn test_loading_heading_replaces_only_first_hyphen() {
        assert_eq!(
            loading_heading("html-deep-dive"),
            "Loading HTML DEEP-DIVE questions..."
        );
        assert_eq!(loading_heading("sql"), "Loading SQL questions...");
    }

    #[test]
    fn test_destination_wraps_path_in_slashes() {
        assert_eq!(destination("css-deep-dive"), "/css-deep-dive/");
    }

    #[test]
    fn test_section_ids_are_unique() {
        let mut ids: Vec<&str> = TOPICS
            .iter()
            .flat_map(|topic| topic.sections.iter().map(|s| s.id))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "accordion targets must not collide");
    }
}
