//! A loaded page: document, host services, and event bindings.
//!
//! Loading runs every initializer once, in a fixed order. Each initializer looks
//! for its own anchors and does nothing when they are absent, so any page can be
//! loaded. Afterwards the page only changes in response to [`Page::dispatch`] and
//! to the scheduler ([`Page::run_frame`], [`Page::advance`]).

use chrono::NaiveDate;
use kuchiki::NodeRef;
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use serde::Serialize;
use url::Url;

use crate::clipboard::{Clipboard, ClipboardAccess, MemoryClipboard};
use crate::detail::Hydration;
use crate::filter::FilterEngine;
use crate::hub::HubSearch;
use crate::scheduler::Scheduler;
use crate::storage::{MemoryStorage, Storage};
use crate::theme::ThemeStore;
use crate::{code, courses, decorate, detail, docs, dom, hub, nav, theme, toast};

/// Host services a page runs against.
pub struct PageEnv {
    pub storage: Box<dyn Storage>,
    /// Asynchronous platform clipboard; `None` when the host has none.
    pub clipboard: Option<Box<dyn Clipboard>>,
    /// Select-and-copy fallback used when the platform clipboard is absent or fails.
    pub legacy_clipboard: Box<dyn Clipboard>,
    /// Particle RNG seed; derived from the page URL when unset.
    pub seed: Option<u64>,
    pub today: NaiveDate,
}

impl Default for PageEnv {
    fn default() -> Self {
        Self {
            storage: Box::new(MemoryStorage::default()),
            clipboard: Some(Box::new(MemoryClipboard::default())),
            legacy_clipboard: Box::new(MemoryClipboard::default()),
            seed: None,
            today: chrono::Local::now().date_naive(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Input,
    Change,
    Submit,
}

#[derive(Debug, Clone)]
pub(crate) enum Action {
    FilterCourses,
    ResetCourseFilters,
    DocSearch,
    HubSearch,
    Sidebar { open: bool },
    ToggleSection { button: NodeRef },
    ScrollTo { target: String },
    ToggleTheme,
    CopyCode { button: NodeRef, code: NodeRef },
    Feedback { value: String },
    OpenWindow { url: String },
    CopyText { text: String },
    Navigate { page: String },
    ToggleMobileMenu,
    ValidateForm { form: String },
}

#[derive(Debug, Clone)]
pub(crate) struct Binding {
    node: NodeRef,
    kind: EventKind,
    action: Action,
}

/// Outbound side effects, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "kebab-case")]
pub enum Effect {
    Navigate { url: String },
    OpenWindow { url: String, target: String },
    ScrollIntoView { id: String, smooth: bool },
}

/// Behaviors whose anchors were present at load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    Particles,
    YearStamp,
    ActiveNav,
    InlineHandlers,
    DetailHydration,
    CourseFilters,
    ProgressTracker,
    DocsLayout,
    Sidebar,
    DocSearch,
    TableOfContents,
    Breadcrumb,
    SectionNav,
    LastUpdated,
    ThemeToggle,
    CodeBlocks,
    SyntaxHighlighting,
    Feedback,
    HubSearch,
}

pub struct Page {
    pub(crate) document: NodeRef,
    pub(crate) location: Url,
    pub(crate) theme: ThemeStore,
    pub(crate) clipboard: ClipboardAccess,
    pub(crate) scheduler: Scheduler,
    pub(crate) effects: Vec<Effect>,
    pub(crate) bindings: Vec<Binding>,
    pub(crate) features: Vec<Feature>,
    pub(crate) hydration: Hydration,
    pub(crate) course_filter: Option<FilterEngine>,
    pub(crate) doc_search: Option<FilterEngine>,
    pub(crate) hub_search: Option<HubSearch>,
    pub(crate) rng: StdRng,
    pub(crate) today: NaiveDate,
}

type Initializer = fn(&mut Page) -> Option<Feature>;

const INITIALIZERS: [Initializer; 12] = [
    decorate::init_particles,
    decorate::init_year,
    nav::init_active_nav,
    nav::init_inline_handlers,
    detail::init,
    courses::init_filters,
    courses::init_progress,
    docs::init,
    theme::init,
    code::init,
    toast::init_feedback,
    hub::init,
];

impl Page {
    /// Parses `html` without running any page behavior.
    pub fn new(html: &str, location: Url, env: PageEnv) -> Self {
        let seed = env.seed.unwrap_or_else(|| seed_for(&location));
        Self {
            document: dom::parse_document(html),
            location,
            theme: ThemeStore::new(env.storage),
            clipboard: ClipboardAccess::new(env.clipboard, env.legacy_clipboard),
            scheduler: Scheduler::default(),
            effects: Vec::new(),
            bindings: Vec::new(),
            features: Vec::new(),
            hydration: Hydration::None,
            course_filter: None,
            doc_search: None,
            hub_search: None,
            rng: StdRng::seed_from_u64(seed),
            today: env.today,
        }
    }

    /// Parses `html` and runs the load-time pass.
    pub fn load(html: &str, location: Url, env: PageEnv) -> Self {
        let mut page = Self::new(html, location, env);
        page.run_load();
        page
    }

    fn run_load(&mut self) {
        self.apply_theme_preference();
        toast::inject_keyframes(&self.document);
        for init in INITIALIZERS {
            if let Some(feature) = init(self) {
                self.features.push(feature);
            }
        }
        tracing::debug!(
            url = %self.location,
            features = self.features.len(),
            bindings = self.bindings.len(),
            "page loaded"
        );
    }

    pub fn document(&self) -> &NodeRef {
        &self.document
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    pub fn element(&self, id: &str) -> Option<NodeRef> {
        dom::by_id(&self.document, id)
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn hydration(&self) -> &Hydration {
        &self.hydration
    }

    pub fn html(&self) -> anyhow::Result<String> {
        dom::serialize(&self.document)
    }

    pub(crate) fn bind(&mut self, node: &NodeRef, kind: EventKind, action: Action) {
        self.bindings.push(Binding {
            node: node.clone(),
            kind,
            action,
        });
    }

    /// Like [`Page::bind`] but replaces earlier bindings of the same event on `node`.
    pub(crate) fn bind_exclusive(&mut self, node: &NodeRef, kind: EventKind, action: Action) {
        self.bindings
            .retain(|b| !(b.kind == kind && b.node == *node));
        self.bind(node, kind, action);
    }

    pub(crate) fn push_feature(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    /// Fires `kind` at `target`, bubbling through its ancestors. Returns false
    /// when a handler prevented the default action.
    pub fn dispatch(&mut self, kind: EventKind, target: &NodeRef) -> bool {
        let mut actions = Vec::new();
        for node in target.inclusive_ancestors() {
            for binding in &self.bindings {
                if binding.kind == kind && binding.node == node {
                    actions.push(binding.action.clone());
                }
            }
        }

        let mut proceed = true;
        for action in actions {
            proceed &= self.perform(action);
        }
        proceed
    }

    pub fn click(&mut self, target: &NodeRef) -> bool {
        self.dispatch(EventKind::Click, target)
    }

    /// Clicks the element with `id`; false when there is no such element.
    pub fn click_id(&mut self, id: &str) -> bool {
        match self.element(id) {
            Some(node) => {
                self.click(&node);
                true
            }
            None => false,
        }
    }

    /// Sets a control's value the way typing or picking would, firing `input`
    /// and then `change`. False when there is no such element.
    pub fn set_value(&mut self, id: &str, value: &str) -> bool {
        let Some(node) = self.element(id) else {
            return false;
        };
        dom::set_control_value(&node, value);
        self.dispatch(EventKind::Input, &node);
        self.dispatch(EventKind::Change, &node);
        true
    }

    /// Submits the form with `id`; returns whether submission would proceed.
    pub fn submit(&mut self, id: &str) -> bool {
        match self.element(id) {
            Some(form) => self.dispatch(EventKind::Submit, &form),
            None => true,
        }
    }

    fn perform(&mut self, action: Action) -> bool {
        match action {
            Action::FilterCourses => {
                self.filter_courses();
            }
            Action::ResetCourseFilters => self.reset_course_filters(),
            Action::DocSearch => {
                self.run_doc_search();
            }
            Action::HubSearch => {
                self.run_hub_search();
            }
            Action::Sidebar { open } => self.set_sidebar_open(open),
            Action::ToggleSection { button } => docs::toggle_section(&self.document, &button),
            Action::ScrollTo { target } => self.scroll_to(&target),
            Action::ToggleTheme => {
                self.toggle_theme();
            }
            Action::CopyCode { button, code } => code::copy_code(self, &button, &code),
            Action::Feedback { value } => self.give_feedback(&value),
            Action::OpenWindow { url } => self.open_window(&url, "_blank"),
            Action::CopyText { text } => {
                self.copy_to_clipboard(&text);
            }
            Action::Navigate { page } => self.navigate_to(&page),
            Action::ToggleMobileMenu => self.toggle_mobile_menu(),
            Action::ValidateForm { form } => return self.validate_form(&form),
        }
        true
    }

    pub(crate) fn open_window(&mut self, url: &str, target: &str) {
        self.effects.push(Effect::OpenWindow {
            url: url.to_string(),
            target: target.to_string(),
        });
    }
}

fn seed_for(location: &Url) -> u64 {
    let hash = blake3::hash(location.as_str().as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}
