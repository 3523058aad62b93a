use std::cell::RefCell;
use std::collections::HashSet;

use log::debug;
use thiserror::Error;

/// Rule sets that are inserted into `<head>` at runtime rather than shipped
/// with the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleSheet {
    EntranceAnimation,
    Spinner,
}

impl StyleSheet {
    pub fn element_id(self) -> &'static str {
        match self {
            StyleSheet::EntranceAnimation => "fade-in-up-keyframes",
            StyleSheet::Spinner => "spin-keyframes",
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            StyleSheet::EntranceAnimation => {
                r#"
                .fade-in-up {
                    animation: fadeInUp 0.6s ease forwards;
                    opacity: 0;
                    transform: translateY(30px);
                }

                @keyframes fadeInUp {
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }
                "#
            }
            StyleSheet::Spinner => {
                r#"
                @keyframes spin {
                    0% { transform: rotate(0deg); }
                    100% { transform: rotate(360deg); }
                }
                "#
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("no document available")]
    NoDocument,
    #[error("document has no <head>")]
    NoHead,
    #[error("DOM call failed: {0}")]
    Dom(String),
}

thread_local! {
    static INJECTED: RefCell<HashSet<StyleSheet>> = RefCell::new(HashSet::new());
}

/// Records `sheet` as injected. Returns false if it already was.
fn claim(sheet: StyleSheet) -> bool {
    INJECTED.with(|injected| injected.borrow_mut().insert(sheet))
}

fn release(sheet: StyleSheet) {
    INJECTED.with(|injected| {
        injected.borrow_mut().remove(&sheet);
    });
}

/// Appends the `<style>` element for `sheet` unless this page already has it.
/// Returns whether anything was inserted.
pub fn inject_once(sheet: StyleSheet) -> Result<bool, StyleError> {
    if !claim(sheet) {
        return Ok(false);
    }
    let inserted = append_style(sheet).map_err(|e| {
        // Let a later call retry.
        release(sheet);
        e
    })?;
    if inserted {
        debug!("Injected {:?} styles", sheet);
    } else {
        debug!("{:?} styles already present", sheet);
    }
    Ok(inserted)
}

/// Appends the `<style>` element unless the document already carries one with
/// the sheet's id. Returns whether an element was appended.
fn append_style(sheet: StyleSheet) -> Result<bool, StyleError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(StyleError::NoDocument)?;

    if document.get_element_by_id(sheet.element_id()).is_some() {
        return Ok(false);
    }

    let head = document.head().ok_or(StyleError::NoHead)?;
    let style = document
        .create_element("style")
        .map_err(|e| StyleError::Dom(format!("{:?}", e)))?;
    style.set_id(sheet.element_id());
    style.set_text_content(Some(sheet.css()));
    head.append_child(&style)
        .map_err(|e| StyleError::Dom(format!("{:?}", e)))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_claimed_sheet_reports_nothing_inserted() {
        assert!(claim(StyleSheet::Spinner));
        // Returns before touching the DOM, so this runs on the host target.
        assert!(!inject_once(StyleSheet::Spinner).unwrap());
    }

    #[test]
    fn test_claim_succeeds_once_per_sheet() {
        assert!(claim(StyleSheet::Spinner));
        assert!(!claim(StyleSheet::Spinner));
        assert!(!claim(StyleSheet::Spinner));
    }

    #[test]
    fn test_sheets_are_tracked_independently() {
        assert!(claim(StyleSheet::EntranceAnimation));
        assert!(claim(StyleSheet::Spinner));
    }

    #[test]
    fn test_release_allows_reclaim() {
        assert!(claim(StyleSheet::EntranceAnimation));
        release(StyleSheet::EntranceAnimation);
        assert!(claim(StyleSheet::EntranceAnimation));
    }

    #[test]
    fn test_css_defines_expected_keyframes() {
        assert!(StyleSheet::EntranceAnimation.css().contains("@keyframes fadeInUp"));
        assert!(StyleSheet::Spinner.css().contains("@keyframes spin"));
    }
}
