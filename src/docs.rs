//! Documentation layout: sidebar, topic search, table of contents, breadcrumb,
//! section navigation and the last-updated stamp. Everything here is gated on
//! a `.docs-layout` container.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use kuchiki::NodeRef;
use maud::html;

use crate::dom;
use crate::filter::FilterEngine;
use crate::page::{Action, Effect, EventKind, Feature, Page};

pub(crate) fn init(page: &mut Page) -> Option<Feature> {
    dom::select_first(&page.document, ".docs-layout")?;

    let steps: [fn(&mut Page) -> Option<Feature>; 6] = [
        setup_sidebar,
        setup_doc_search,
        build_table_of_contents,
        setup_breadcrumb,
        setup_section_navigation,
        setup_last_updated,
    ];
    for step in steps {
        if let Some(feature) = step(page) {
            page.push_feature(feature);
        }
    }
    Some(Feature::DocsLayout)
}

fn setup_sidebar(page: &mut Page) -> Option<Feature> {
    let sidebar = dom::by_id(&page.document, "docs-sidebar")?;

    if let Some(toggle) = dom::by_id(&page.document, "sidebar-toggle") {
        page.bind(&toggle, EventKind::Click, Action::Sidebar { open: true });
    }
    for id in ["sidebar-close", "sidebar-overlay"] {
        if let Some(node) = dom::by_id(&page.document, id) {
            page.bind(&node, EventKind::Click, Action::Sidebar { open: false });
        }
    }
    for button in dom::select_all(&sidebar, ".sidebar-section-toggle") {
        page.bind(
            &button,
            EventKind::Click,
            Action::ToggleSection {
                button: button.clone(),
            },
        );
    }
    Some(Feature::Sidebar)
}

impl Page {
    /// Opens or closes the sidebar; panel, overlay and body always agree.
    pub fn set_sidebar_open(&mut self, open: bool) {
        let Some(sidebar) = dom::by_id(&self.document, "docs-sidebar") else {
            return;
        };
        dom::toggle_class(&sidebar, "open", Some(open));
        if let Some(overlay) = dom::by_id(&self.document, "sidebar-overlay") {
            dom::toggle_class(&overlay, "visible", Some(open));
        }
        if let Some(body) = dom::body(&self.document) {
            dom::toggle_class(&body, "sidebar-open", Some(open));
        }
    }

    pub fn scroll_to(&mut self, id: &str) {
        if dom::by_id(&self.document, id).is_some() {
            self.effects.push(Effect::ScrollIntoView {
                id: id.to_string(),
                smooth: true,
            });
        }
    }

    /// Re-runs the topic search; returns how many topics match.
    pub fn run_doc_search(&mut self) -> usize {
        self.doc_search
            .as_ref()
            .map(|engine| engine.apply().into_iter().filter(|v| *v).count())
            .unwrap_or(0)
    }
}

/// Collapses or expands the list a section button targets and mirrors the
/// state into `aria-expanded`.
pub(crate) fn toggle_section(document: &NodeRef, button: &NodeRef) {
    let Some(target) = dom::attr(button, "data-target") else {
        return;
    };
    let Some(list) = dom::by_id(document, &target) else {
        return;
    };
    let collapsed = dom::toggle_class(&list, "collapsed", None);
    dom::set_attr(button, "aria-expanded", (!collapsed).to_string());
}

fn topic_fields(topic: &NodeRef) -> Vec<String> {
    vec![
        dom::attr(topic, "data-keywords").unwrap_or_default(),
        dom::lower_text_of(topic, "h3"),
        dom::lower_text_of(topic, ".doc-topic-body"),
    ]
}

fn setup_doc_search(page: &mut Page) -> Option<Feature> {
    let input = dom::by_id(&page.document, "docs-search")?;
    let engine = FilterEngine::new(dom::select_all(&page.document, ".doc-topic"), topic_fields)
        .query(Some(input.clone()), true)
        .show_as("block", false)
        .empty_state(dom::by_id(&page.document, "docs-empty-state"), "flex");

    page.bind(&input, EventKind::Input, Action::DocSearch);
    page.doc_search = Some(engine);
    page.run_doc_search();
    Some(Feature::DocSearch)
}

struct TocEntry {
    id: String,
    label: String,
}

fn build_table_of_contents(page: &mut Page) -> Option<Feature> {
    let toc = dom::by_id(&page.document, "table-of-contents")?;
    let article = dom::select_first(&page.document, ".docs-article")?;

    let headings = dom::select_all(&article, "h3");
    if headings.is_empty() {
        return None;
    }

    let mut entries = Vec::with_capacity(headings.len());
    for (index, heading) in headings.iter().enumerate() {
        if dom::closest(heading, |n| dom::has_class(n, "toc-wrapper")).is_some() {
            continue;
        }
        let id = match dom::attr(heading, "id").filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => {
                let id = format!("doc-heading-{}", index + 1);
                dom::set_attr(heading, "id", id.clone());
                id
            }
        };
        entries.push(TocEntry {
            id,
            label: dom::text(heading),
        });
    }

    let markup = html! {
        ol class="toc-list" {
            @for entry in &entries {
                li { a href=(format!("#{}", entry.id)) { (entry.label) } }
            }
        }
    };
    dom::set_inner_html(&toc, &markup.into_string());
    tracing::debug!(entries = entries.len(), "table of contents built");
    Some(Feature::TableOfContents)
}

/// A breadcrumb segment; only segments before the last carry a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub url: Option<String>,
}

/// Splits `Label::url|Label::url|Current` into crumbs.
pub fn parse_trail(trail: &str) -> Vec<Crumb> {
    if trail.is_empty() {
        return Vec::new();
    }
    let segments: Vec<&str> = trail.split('|').collect();
    let last = segments.len() - 1;
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let mut parts = segment.split("::");
            let label = parts.next().unwrap_or_default().to_string();
            let url = parts
                .next()
                .filter(|u| !u.is_empty() && index != last)
                .map(str::to_string);
            Crumb { label, url }
        })
        .collect()
}

fn setup_breadcrumb(page: &mut Page) -> Option<Feature> {
    let breadcrumb = dom::by_id(&page.document, "docs-breadcrumb")?;
    let crumbs = parse_trail(&dom::attr(&breadcrumb, "data-trail").unwrap_or_default());
    if crumbs.is_empty() {
        return None;
    }

    let markup = html! {
        ul class="breadcrumb-list" {
            @for crumb in &crumbs {
                li {
                    @if let Some(url) = &crumb.url {
                        a href=(url) { (crumb.label) }
                    } @else {
                        span { (crumb.label) }
                    }
                }
            }
        }
    };
    dom::set_inner_html(&breadcrumb, &markup.into_string());
    Some(Feature::Breadcrumb)
}

fn setup_section_navigation(page: &mut Page) -> Option<Feature> {
    let nav = dom::by_id(&page.document, "docs-section-nav")?;
    for button in dom::select_all(&nav, "[data-nav-target]") {
        let target = dom::attr(&button, "data-nav-target").unwrap_or_default();
        page.bind(&button, EventKind::Click, Action::ScrollTo { target });
    }
    Some(Feature::SectionNav)
}

/// Accepts a plain date or an RFC 3339 timestamp.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

/// Long-form date, e.g. `May 1, 2024`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn setup_last_updated(page: &mut Page) -> Option<Feature> {
    let stamp = dom::select_first(&page.document, "[data-last-updated]")?;
    let label = dom::by_id(&page.document, "docs-last-updated")?;

    let iso = dom::attr(&stamp, "data-last-updated").filter(|s| !s.is_empty())?;
    let Some(date) = parse_iso_date(&iso) else {
        tracing::debug!(value = %iso, "unparseable last-updated date");
        return None;
    };
    dom::set_text(&label, &long_date(date));
    Some(Feature::LastUpdated)
}
