//! Detail page hydration from the `slug` query parameter.
//!
//! Without a slug the authored page is left alone. A known slug fills every
//! slot from its record; an unknown slug fills the same slots from a fixed
//! not-found record. Pages never end up half-filled: service and course pages
//! need title, summary and content (meta is optional), doc pages need all six
//! of their slots or nothing happens.

use maud::html;
use serde::Serialize;

use crate::dom;
use crate::page::{Action, EventKind, Feature, Page};
use crate::registry::{self, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailKind {
    Service,
    Course,
    Doc,
}

impl DetailKind {
    pub fn from_page(name: &str) -> Option<Self> {
        match name {
            "services-detail.html" => Some(DetailKind::Service),
            "courses-detail.html" => Some(DetailKind::Course),
            "docs-detail.html" => Some(DetailKind::Doc),
            _ => None,
        }
    }

    fn lookup(self, slug: &str) -> Option<Record> {
        match self {
            DetailKind::Service => registry::service(slug).map(Record::Service),
            DetailKind::Course => registry::course(slug).map(Record::Course),
            DetailKind::Doc => registry::doc(slug).map(Record::Doc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum Hydration {
    /// Not a detail page, or no slug given.
    None,
    /// Slots filled from the record titled `title`.
    Found {
        kind: DetailKind,
        slug: String,
        title: String,
    },
    NotFound { kind: DetailKind, slug: String },
    /// Slug given but the page lacks required slots.
    MissingSlots { kind: DetailKind, slug: String },
}

struct Fallback {
    title: &'static str,
    summary: &'static str,
}

const SERVICE_NOT_FOUND: Fallback = Fallback {
    title: "Service not found",
    summary: "The requested service is unavailable. Please return to the services page.",
};

const COURSE_NOT_FOUND: Fallback = Fallback {
    title: "Course not found",
    summary: "The requested course could not be located. Please return to the courses page.",
};

const DOC_NOT_FOUND: Fallback = Fallback {
    title: "Document not found",
    summary: "The requested document is unavailable. Please return to the documentation library.",
};

fn bullets_html(bullets: &[&str]) -> String {
    if bullets.is_empty() {
        return String::new();
    }
    html! {
        ul {
            @for item in bullets {
                li { (item) }
            }
        }
    }
    .into_string()
}

pub(crate) fn init(page: &mut Page) -> Option<Feature> {
    let name = page
        .location
        .path_segments()
        .and_then(|mut segs| segs.next_back())
        .unwrap_or_default()
        .to_string();
    let slug = page
        .location
        .query_pairs()
        .find(|(k, _)| k == "slug")
        .map(|(_, v)| v.into_owned())
        .filter(|s| !s.is_empty())?;
    let kind = DetailKind::from_page(&name)?;

    let record = kind.lookup(&slug);
    let hydrated = match kind {
        DetailKind::Service | DetailKind::Course => render_listing_detail(page, kind, record),
        DetailKind::Doc => render_doc_detail(page, record),
    };

    page.hydration = match (hydrated, record) {
        (false, _) => Hydration::MissingSlots { kind, slug },
        (true, Some(record)) => Hydration::Found {
            kind,
            slug,
            title: record.title().to_string(),
        },
        (true, None) => Hydration::NotFound { kind, slug },
    };
    tracing::debug!(hydration = ?page.hydration, "detail page");
    hydrated.then_some(Feature::DetailHydration)
}

fn render_listing_detail(page: &mut Page, kind: DetailKind, record: Option<Record>) -> bool {
    let doc = &page.document;
    let (Some(title), Some(summary), Some(content)) = (
        dom::by_id(doc, "detail-title"),
        dom::by_id(doc, "detail-summary"),
        dom::by_id(doc, "detail-content"),
    ) else {
        return false;
    };

    let (title_text, summary_text, meta, bullets): (&str, &str, &str, &[&str]) = match record {
        Some(Record::Service(r)) => (r.title, r.summary, "", r.bullets),
        Some(Record::Course(r)) => (r.title, r.summary, r.meta, r.bullets),
        _ => {
            let fallback = match kind {
                DetailKind::Course => &COURSE_NOT_FOUND,
                _ => &SERVICE_NOT_FOUND,
            };
            (fallback.title, fallback.summary, "", &[])
        }
    };

    dom::set_text(&title, title_text);
    dom::set_text(&summary, summary_text);
    if kind == DetailKind::Course {
        if let Some(meta_slot) = dom::by_id(doc, "detail-meta") {
            dom::set_text(&meta_slot, meta);
        }
    }
    dom::set_inner_html(&content, &bullets_html(bullets));
    true
}

fn render_doc_detail(page: &mut Page, record: Option<Record>) -> bool {
    let doc = page.document.clone();
    let slot = |id: &str| dom::by_id(&doc, id);
    let (Some(title), Some(summary), Some(tags), Some(content), Some(primary), Some(copy)) = (
        slot("detail-title"),
        slot("detail-summary"),
        slot("detail-tags"),
        slot("detail-content"),
        slot("detail-primary-action"),
        slot("detail-copy-action"),
    ) else {
        return false;
    };

    let Some(Record::Doc(record)) = record else {
        dom::set_text(&title, DOC_NOT_FOUND.title);
        dom::set_text(&summary, DOC_NOT_FOUND.summary);
        dom::set_text(&tags, "");
        dom::clear_children(&content);
        dom::set_style(&primary, "display", "none");
        dom::set_style(&copy, "display", "none");
        return true;
    };

    dom::set_text(&title, record.title);
    dom::set_text(&summary, record.summary);
    dom::set_text(&tags, &format!("Tags: {}", record.tags.join(", ")));
    dom::set_inner_html(&content, &bullets_html(record.bullets));

    dom::set_text(&primary, record.primary_action.label);
    page.bind_exclusive(
        &primary,
        EventKind::Click,
        Action::OpenWindow {
            url: record.primary_action.url.to_string(),
        },
    );
    dom::set_style(&primary, "display", "inline-flex");

    page.bind_exclusive(
        &copy,
        EventKind::Click,
        Action::CopyText {
            text: record.copy_url.to_string(),
        },
    );
    dom::set_style(&copy, "display", "inline-flex");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::page::{Effect, PageEnv};
    use url::Url;

    const DOC_PAGE: &str = r#"<body>
      <h1 id="detail-title">Static title</h1>
      <p id="detail-summary">Static summary</p>
      <p id="detail-tags"></p>
      <div id="detail-content"><p>authored</p></div>
      <button id="detail-primary-action">Open</button>
      <button id="detail-copy-action">Copy link</button>
    </body>"#;

    fn load(html: &str, url: &str) -> Page {
        Page::load(html, Url::parse(url).unwrap(), PageEnv::default())
    }

    fn text(page: &Page, id: &str) -> String {
        dom::text(&page.element(id).unwrap())
    }

    #[test]
    fn no_slug_leaves_page_as_authored() {
        let page = load(DOC_PAGE, "https://dexterity.it/docs-detail.html");
        assert_eq!(text(&page, "detail-title"), "Static title");
        assert_eq!(page.hydration(), &Hydration::None);

        let page = load(DOC_PAGE, "https://dexterity.it/docs-detail.html?slug=");
        assert_eq!(text(&page, "detail-title"), "Static title");
    }

    #[test]
    fn known_doc_fills_every_slot() {
        let clip = MemoryClipboard::default();
        let env = PageEnv {
            clipboard: Some(Box::new(clip.clone())),
            ..PageEnv::default()
        };
        let mut page = Page::load(
            DOC_PAGE,
            Url::parse("https://dexterity.it/docs-detail.html?slug=sre-runbook").unwrap(),
            env,
        );
        assert_eq!(text(&page, "detail-title"), "SRE On-Call Runbook");
        assert_eq!(text(&page, "detail-tags"), "Tags: Operations, SRE, Observability");
        let content = page.element("detail-content").unwrap();
        assert_eq!(dom::select_all(&content, "li").len(), 3);
        assert!(dom::select_first(&content, "p").is_none());

        page.click_id("detail-primary-action");
        page.click_id("detail-copy-action");
        assert_eq!(
            page.effects(),
            [Effect::OpenWindow {
                url: "files/sre-oncall-runbook.pdf".into(),
                target: "_blank".into()
            }]
        );
        assert_eq!(clip.contents().as_deref(), Some("https://dexterity.it/docs/sre-runbook"));
    }

    #[test]
    fn doc_page_missing_a_slot_is_untouched() {
        let html = DOC_PAGE.replace(r#"<p id="detail-tags"></p>"#, "");
        let page = load(&html, "https://dexterity.it/docs-detail.html?slug=sre-runbook");
        assert_eq!(text(&page, "detail-title"), "Static title");
        assert!(matches!(page.hydration(), Hydration::MissingSlots { .. }));
    }

    #[test]
    fn course_meta_is_optional() {
        let html = r#"<body><h1 id="detail-title"></h1><p id="detail-summary"></p><div id="detail-content"></div></body>"#;
        let page = load(html, "https://dexterity.it/courses-detail.html?slug=routing-switching");
        assert_eq!(text(&page, "detail-title"), "Routing & Switching");

        let with_meta = html.replace("</body>", r#"<p id="detail-meta">x</p></body>"#);
        let page = load(&with_meta, "https://dexterity.it/courses-detail.html?slug=routing-switching");
        assert_eq!(text(&page, "detail-meta"), "Domain: Networking • Format: CLI deep dives");

        let page = load(&with_meta, "https://dexterity.it/courses-detail.html?slug=nope");
        assert_eq!(text(&page, "detail-title"), "Course not found");
        assert_eq!(text(&page, "detail-meta"), "");
        assert_eq!(text(&page, "detail-content"), "");
    }

    #[test]
    fn service_lookup_and_fallback() {
        let html = r#"<body><h1 id="detail-title"></h1><p id="detail-summary"></p><div id="detail-content"></div></body>"#;
        let page = load(html, "https://dexterity.it/services-detail.html?slug=ai-automation");
        assert_eq!(text(&page, "detail-title"), "AI & Automation Programs");
        assert_eq!(
            page.hydration(),
            &Hydration::Found {
                kind: DetailKind::Service,
                slug: "ai-automation".into(),
                title: "AI & Automation Programs".into(),
            }
        );

        let page = load(html, "https://dexterity.it/services-detail.html?slug=ai");
        assert_eq!(text(&page, "detail-title"), "Service not found");
        assert!(matches!(page.hydration(), Hydration::NotFound { .. }));
    }

    #[test]
    fn other_pages_ignore_the_slug() {
        let html = r#"<body><h1 id="detail-title">Keep</h1><p id="detail-summary"></p><div id="detail-content"></div></body>"#;
        let page = load(html, "https://dexterity.it/services.html?slug=ai-automation");
        assert_eq!(text(&page, "detail-title"), "Keep");
    }
}
