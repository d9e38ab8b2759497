//! Site navigation: active link marking, the mobile menu, page navigation and
//! form validation, plus binding of the inline handlers authored in markup.

use std::sync::LazyLock;

use regex::Regex;

use crate::dom;
use crate::page::{Action, Effect, EventKind, Feature, Page};

pub const INVALID_BORDER: &str = "#ef4444";

const DETAIL_ALIASES: [(&str, &str); 3] = [
    ("services-detail.html", "services.html"),
    ("courses-detail.html", "courses.html"),
    ("docs-detail.html", "docs.html"),
];

static NAVIGATE_TO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*navigateTo\(\s*'([^']*)'\s*\)\s*;?\s*$").expect("navigateTo"));
static TOGGLE_MENU: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*toggleMobileMenu\(\s*\)\s*;?\s*$").expect("toggleMobileMenu"));
static VALIDATE_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*return\s+validateForm\(\s*'([^']*)'\s*\)\s*;?\s*$").expect("validateForm")
});

/// File name of the current page, `index.html` for a directory URL.
pub fn current_page(location: &url::Url) -> String {
    location
        .path_segments()
        .and_then(|mut segs| segs.next_back())
        .filter(|name| !name.is_empty())
        .unwrap_or("index.html")
        .to_string()
}

/// Page whose nav link is highlighted; detail pages highlight their listing.
pub fn nav_page(current: &str) -> &str {
    DETAIL_ALIASES
        .iter()
        .find(|(detail, _)| *detail == current)
        .map(|(_, listing)| *listing)
        .unwrap_or(current)
}

/// Href a navigation to `page` ends up at, before resolving against the page URL.
pub fn navigation_target(page: &str) -> Option<String> {
    if page.is_empty() {
        return None;
    }
    if matches!(page, "index.html" | "home" | "./") {
        return Some("/".to_string());
    }
    if page.starts_with("http") || page.starts_with("mailto:") || page.starts_with('/') {
        return Some(page.to_string());
    }
    Some(format!("/{page}"))
}

pub(crate) fn init_active_nav(page: &mut Page) -> Option<Feature> {
    let links = dom::select_all(&page.document, ".nav-link, .mobile-nav-link");
    if links.is_empty() {
        return None;
    }
    let current = current_page(&page.location);
    let effective = nav_page(&current);
    for link in &links {
        let active = dom::attr(link, "href").as_deref() == Some(effective);
        dom::toggle_class(link, "active", Some(active));
    }
    Some(Feature::ActiveNav)
}

pub(crate) fn init_inline_handlers(page: &mut Page) -> Option<Feature> {
    let mut bound = 0;
    for node in dom::select_all(&page.document, "[onclick]") {
        let handler = dom::attr(&node, "onclick").unwrap_or_default();
        let action = if let Some(caps) = NAVIGATE_TO.captures(&handler) {
            Action::Navigate {
                page: caps[1].to_string(),
            }
        } else if TOGGLE_MENU.is_match(&handler) {
            Action::ToggleMobileMenu
        } else {
            tracing::debug!(handler = %handler, "unrecognized onclick handler");
            continue;
        };
        page.bind(&node, EventKind::Click, action);
        bound += 1;
    }
    for form in dom::select_all(&page.document, "form[onsubmit]") {
        let handler = dom::attr(&form, "onsubmit").unwrap_or_default();
        let Some(caps) = VALIDATE_FORM.captures(&handler) else {
            tracing::debug!(handler = %handler, "unrecognized onsubmit handler");
            continue;
        };
        page.bind(
            &form,
            EventKind::Submit,
            Action::ValidateForm {
                form: caps[1].to_string(),
            },
        );
        bound += 1;
    }
    (bound > 0).then_some(Feature::InlineHandlers)
}

impl Page {
    /// Records a navigation to `page`. Empty targets are ignored.
    pub fn navigate_to(&mut self, page: &str) {
        let Some(target) = navigation_target(page) else {
            return;
        };
        match self.location.join(&target) {
            Ok(url) => {
                tracing::debug!(%url, "navigate");
                self.effects.push(Effect::Navigate {
                    url: url.to_string(),
                });
            }
            Err(err) => tracing::warn!(href = %target, error = %err, "unresolvable navigation target"),
        }
    }

    pub fn toggle_mobile_menu(&mut self) {
        if let Some(menu) = self.element("mobile-menu") {
            dom::toggle_class(&menu, "hidden", None);
        }
    }

    /// Marks blank required fields of form `form_id` and returns whether all
    /// were filled. A missing form counts as valid.
    pub fn validate_form(&mut self, form_id: &str) -> bool {
        let Some(form) = self.element(form_id) else {
            return true;
        };
        let mut valid = true;
        for field in dom::select_all(&form, "input[required], textarea[required]") {
            if dom::control_value(&field).trim().is_empty() {
                valid = false;
                dom::set_style(&field, "border-color", INVALID_BORDER);
            } else {
                dom::set_style(&field, "border-color", "");
            }
        }
        valid
    }
}
