use kuchiki::NodeRef;

use crate::dom;
use crate::filter::FilterEngine;
use crate::page::{Action, EventKind, Feature, Page};
use crate::scheduler::Task;

/// Percentage points added per animation frame.
const PROGRESS_STEP: i64 = 2;

fn card_fields(card: &NodeRef) -> Vec<String> {
    vec![
        dom::lower_text_of(card, ".course-card-title"),
        dom::lower_text_of(card, ".course-card-desc"),
        dom::attr(card, "data-keywords").unwrap_or_default(),
    ]
}

pub(crate) fn init_filters(page: &mut Page) -> Option<Feature> {
    let panel = dom::select_first(&page.document, ".course-filters")?;
    let doc = page.document.clone();

    let engine = FilterEngine::new(dom::select_all(&doc, ".course-card"), card_fields)
        .facet(dom::by_id(&doc, "difficulty-filter"), "data-difficulty")
        .facet(dom::by_id(&doc, "topic-filter"), "data-topic")
        .facet(dom::by_id(&doc, "duration-filter"), "data-duration")
        .query(dom::by_id(&doc, "course-search"), false)
        .show_as("flex", true)
        .empty_state(dom::by_id(&doc, "course-empty-state"), "flex");

    let selects = dom::select_all(&panel, "[data-course-filter]");
    for select in &selects {
        page.bind(select, EventKind::Change, Action::FilterCourses);
    }
    if let Some(search) = dom::by_id(&doc, "course-search") {
        page.bind(&search, EventKind::Input, Action::FilterCourses);
    }
    if let Some(reset) = dom::by_id(&doc, "reset-course-filters") {
        page.bind(&reset, EventKind::Click, Action::ResetCourseFilters);
    }

    tracing::debug!(
        cards = engine.items().len(),
        selects = selects.len(),
        "course filters bound"
    );
    page.course_filter = Some(engine);
    page.filter_courses();
    Some(Feature::CourseFilters)
}

impl Page {
    /// Re-runs the course filter; returns how many cards are visible.
    pub fn filter_courses(&mut self) -> usize {
        match &self.course_filter {
            Some(engine) if !engine.items().is_empty() => {
                engine.apply().into_iter().filter(|v| *v).count()
            }
            _ => 0,
        }
    }

    pub fn reset_course_filters(&mut self) {
        let Some(panel) = dom::select_first(&self.document, ".course-filters") else {
            return;
        };
        for select in dom::select_all(&panel, "[data-course-filter]") {
            dom::set_control_value(&select, crate::filter::ALL);
        }
        if let Some(engine) = &self.course_filter {
            engine.reset_controls();
        }
        self.filter_courses();
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ProgressAnimation {
    bar: NodeRef,
    label: Option<NodeRef>,
    current: i64,
    target: i64,
}

/// `parseInt`-style: optional sign and leading digits; anything else is 0.
fn leading_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|v| sign * v).unwrap_or(0)
}

pub(crate) fn init_progress(page: &mut Page) -> Option<Feature> {
    let items = dom::select_all(&page.document, "[data-progress]");
    if items.is_empty() {
        return None;
    }

    for item in items {
        if dom::attr(&item, "data-animated").as_deref() == Some("true") {
            continue;
        }
        let target = leading_int(&dom::attr(&item, "data-progress").unwrap_or_default()).clamp(0, 100);
        let Some(bar) = dom::select_first(&item, ".progress-bar-fill") else {
            continue;
        };
        let label = dom::select_first(&item, ".progress-value");

        dom::set_attr(&item, "data-animated", "true");
        page.scheduler.request_frame(Task::ProgressStep(ProgressAnimation {
            bar,
            label,
            current: 0,
            target,
        }));
    }
    Some(Feature::ProgressTracker)
}

pub(crate) fn step_progress(page: &mut Page, mut animation: ProgressAnimation) {
    animation.current += PROGRESS_STEP;
    let done = animation.current >= animation.target;
    if done {
        animation.current = animation.target;
    }

    let value = format!("{}%", animation.current);
    dom::set_style(&animation.bar, "width", &value);
    if let Some(label) = &animation.label {
        dom::set_text(label, &value);
    }

    if !done {
        page.scheduler.request_frame(Task::ProgressStep(animation));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageEnv;
    use url::Url;

    const COURSES: &str = r#"<body>
      <div class="course-filters">
        <select id="difficulty-filter" data-course-filter>
          <option value="all">All</option><option value="beginner">Beginner</option><option value="advanced">Advanced</option>
        </select>
        <select id="topic-filter" data-course-filter>
          <option value="all">All</option><option value="networking">Networking</option>
        </select>
        <input id="course-search" value="">
        <button id="reset-course-filters">Reset</button>
      </div>
      <article class="course-card" id="c1" data-difficulty="beginner" data-topic="networking" data-keywords="subnet ipv4">
        <h3 class="course-card-title">Network Fundamentals</h3><p class="course-card-desc">Addressing</p>
      </article>
      <article class="course-card" id="c2" data-difficulty="advanced" data-topic="networking">
        <h3 class="course-card-title">Advanced Networking</h3><p class="course-card-desc">IPv6 and VPN</p>
      </article>
      <article class="course-card" id="c3" data-difficulty="beginner" data-topic="security">
        <h3 class="course-card-title">Cybersecurity Essentials</h3>
      </article>
      <div id="course-empty-state">Nothing</div>
    </body>"#;

    fn load(html: &str) -> Page {
        Page::load(
            html,
            Url::parse("https://dexterity.it/courses.html").unwrap(),
            PageEnv::default(),
        )
    }

    fn visible(page: &Page) -> Vec<String> {
        dom::select_all(page.document(), ".course-card")
            .into_iter()
            .filter(|c| !dom::is_hidden(c))
            .filter_map(|c| dom::attr(&c, "id"))
            .collect()
    }

    #[test]
    fn difficulty_selects_matching_cards() {
        let mut page = load(COURSES);
        assert_eq!(visible(&page), ["c1", "c2", "c3"]);

        page.set_value("difficulty-filter", "beginner");
        assert_eq!(visible(&page), ["c1", "c3"]);
        let c2 = page.element("c2").unwrap();
        assert!(dom::has_class(&c2, "hidden"));
        assert!(dom::is_hidden(&page.element("course-empty-state").unwrap()));
    }

    #[test]
    fn search_covers_title_description_and_keywords() {
        let mut page = load(COURSES);
        page.set_value("course-search", "IPV6");
        assert_eq!(visible(&page), ["c2"]);
        page.set_value("course-search", "subnet");
        assert_eq!(visible(&page), ["c1"]);
        page.set_value("course-search", "kubernetes");
        assert!(visible(&page).is_empty());
        assert_eq!(
            dom::style(&page.element("course-empty-state").unwrap(), "display").as_deref(),
            Some("flex")
        );
    }

    #[test]
    fn reset_shows_everything() {
        let mut page = load(COURSES);
        page.set_value("difficulty-filter", "advanced");
        page.set_value("topic-filter", "networking");
        page.set_value("course-search", "vpn");
        assert_eq!(visible(&page), ["c2"]);

        page.click_id("reset-course-filters");
        assert_eq!(visible(&page), ["c1", "c2", "c3"]);
        assert_eq!(dom::control_value(&page.element("difficulty-filter").unwrap()), "all");
        assert_eq!(dom::control_value(&page.element("course-search").unwrap()), "");
    }

    #[test]
    fn progress_bar_converges_on_target() {
        let mut page = load(
            r#"<body><div data-progress="5%"><div class="progress-bar-fill"></div><span class="progress-value"></span></div></body>"#,
        );
        let bar = dom::select_first(page.document(), ".progress-bar-fill").unwrap();

        assert_eq!(page.run_frame(), 1);
        assert_eq!(dom::style(&bar, "width").as_deref(), Some("2%"));
        page.run_frame();
        page.run_frame();
        assert_eq!(dom::style(&bar, "width").as_deref(), Some("5%"));
        assert_eq!(page.run_frame(), 0);
        let label = dom::select_first(page.document(), ".progress-value").unwrap();
        assert_eq!(dom::text(&label), "5%");
    }

    #[test]
    fn progress_target_is_a_percentage() {
        let mut page = load(
            r#"<body><div data-progress="2000000"><div class="progress-bar-fill"></div></div></body>"#,
        );
        let bar = dom::select_first(page.document(), ".progress-bar-fill").unwrap();
        let mut frames = 0;
        while page.run_frame() > 0 {
            frames += 1;
        }
        assert_eq!(frames, 50);
        assert_eq!(dom::style(&bar, "width").as_deref(), Some("100%"));

        let mut page = load(
            r#"<body><div data-progress="-30"><div class="progress-bar-fill"></div></div></body>"#,
        );
        page.run_frame();
        let bar = dom::select_first(page.document(), ".progress-bar-fill").unwrap();
        assert_eq!(dom::style(&bar, "width").as_deref(), Some("0%"));
    }

    #[test]
    fn animated_items_are_not_restarted() {
        let mut page = load(
            r#"<body><div data-progress="40" data-animated="true"><div class="progress-bar-fill"></div></div></body>"#,
        );
        assert_eq!(page.pending_tasks(), 0);
        assert_eq!(page.run_frame(), 0);
    }

    #[test]
    fn leading_int_parses_like_parse_int() {
        assert_eq!(leading_int("75"), 75);
        assert_eq!(leading_int(" 40%"), 40);
        assert_eq!(leading_int("-3"), -3);
        assert_eq!(leading_int("abc"), 0);
        assert_eq!(leading_int(""), 0);
    }
}
