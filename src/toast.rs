use std::time::Duration;

use kuchiki::NodeRef;
use maud::{PreEscaped, html};

use crate::builtin;
use crate::dom;
use crate::page::{Action, EventKind, Feature, Page};
use crate::scheduler::Task;

pub const VISIBLE_FOR: Duration = Duration::from_millis(2000);
pub const SLIDE_OUT_FOR: Duration = Duration::from_millis(300);

pub const FEEDBACK_YES: &str = "Thanks! We are glad this helped.";
pub const FEEDBACK_OTHER: &str = "Thanks! We will use this to improve the guide.";

pub(crate) fn inject_keyframes(document: &NodeRef) {
    let Some(head) = dom::select_first(document, "head") else {
        return;
    };
    if dom::select_first(&head, "style[data-toast-keyframes]").is_some() {
        return;
    }
    let markup = html! {
        style data-toast-keyframes { (PreEscaped(builtin::TOAST_KEYFRAMES_CSS)) }
    }
    .into_string();
    // A bare <style> parses into <head>, so build it inside a wrapper.
    let doc = dom::parse_document(&format!("<html><head>{markup}</head></html>"));
    if let Some(style) = dom::select_first(&doc, "style") {
        style.detach();
        head.append(style);
    }
}

impl Page {
    /// Appends a transient toast that slides out after two seconds.
    pub fn show_notification(&mut self, message: &str) {
        let Some(body) = dom::body(&self.document) else {
            return;
        };
        let markup = html! {
            div class="toast-notification" style=(builtin::TOAST_STYLE) { (message) }
        }
        .into_string();
        for toast in dom::fragment(&markup) {
            body.append(toast.clone());
            self.scheduler
                .set_timeout(VISIBLE_FOR, Task::ToastSlideOut { toast });
        }
        tracing::debug!(text = message, "notification shown");
    }

    pub fn give_feedback(&mut self, value: &str) {
        let message = if value == "yes" {
            FEEDBACK_YES
        } else {
            FEEDBACK_OTHER
        };
        self.show_notification(message);
    }
}

pub(crate) fn slide_out(page: &mut Page, toast: NodeRef) {
    dom::set_style(&toast, "animation", builtin::TOAST_SLIDE_OUT);
    page.scheduler
        .set_timeout(SLIDE_OUT_FOR, Task::ToastRemove { toast });
}

pub(crate) fn init_feedback(page: &mut Page) -> Option<Feature> {
    let buttons = dom::select_all(&page.document, "[data-feedback]");
    if buttons.is_empty() {
        return None;
    }
    for button in buttons {
        let value = dom::attr(&button, "data-feedback").unwrap_or_default();
        page.bind(&button, EventKind::Click, Action::Feedback { value });
    }
    Some(Feature::Feedback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageEnv;
    use url::Url;

    fn load(html: &str) -> Page {
        Page::load(
            html,
            Url::parse("https://dexterity.it/docs-detail.html").unwrap(),
            PageEnv::default(),
        )
    }

    fn toasts(page: &Page) -> Vec<String> {
        dom::select_all(page.document(), ".toast-notification")
            .iter()
            .map(dom::text)
            .collect()
    }

    #[test]
    fn feedback_messages() {
        let mut page = load(
            r#"<body><button id="y" data-feedback="yes">Yes</button><button id="n" data-feedback="no">No</button></body>"#,
        );
        page.click_id("y");
        page.click_id("n");
        assert_eq!(toasts(&page), vec![FEEDBACK_YES, FEEDBACK_OTHER]);
    }

    #[test]
    fn toast_slides_out_then_disappears() {
        let mut page = load("<body></body>");
        page.show_notification("hello");
        let toast = dom::select_first(page.document(), ".toast-notification").unwrap();

        page.advance(Duration::from_millis(1999));
        assert_eq!(dom::style(&toast, "animation").as_deref(), Some("slideIn 0.3s ease-out"));

        page.advance(Duration::from_millis(1));
        assert_eq!(dom::style(&toast, "animation").as_deref(), Some(builtin::TOAST_SLIDE_OUT));
        assert_eq!(toasts(&page).len(), 1);

        page.advance(SLIDE_OUT_FOR);
        assert!(toasts(&page).is_empty());
        assert_eq!(page.pending_tasks(), 0);
    }

    #[test]
    fn keyframes_injected_once() {
        let page = load("<html><head></head><body></body></html>");
        inject_keyframes(page.document());
        let styles = dom::select_all(page.document(), "head style[data-toast-keyframes]");
        assert_eq!(styles.len(), 1);
        assert!(dom::text(&styles[0]).contains("@keyframes slideOut"));
    }
}
