use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context as _;
use maud::html;

use crate::dom;
use crate::page::Page;

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// In-memory clipboard. Clones share contents, so a caller can keep a handle
/// while the page owns another.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

/// A clipboard that rejects every write, like a denied permission prompt.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeniedClipboard;

impl Clipboard for DeniedClipboard {
    fn write_text(&mut self, _text: &str) -> anyhow::Result<()> {
        anyhow::bail!("clipboard write denied")
    }
}

pub(crate) struct ClipboardAccess {
    platform: Option<Box<dyn Clipboard>>,
    legacy: Box<dyn Clipboard>,
}

impl ClipboardAccess {
    pub(crate) fn new(platform: Option<Box<dyn Clipboard>>, legacy: Box<dyn Clipboard>) -> Self {
        Self { platform, legacy }
    }
}

impl Page {
    /// Copies `text`, trying the platform clipboard first and the hidden
    /// textarea path once after it. Shows a toast on success; failures are
    /// logged and change nothing visible.
    pub fn copy_to_clipboard(&mut self, text: &str) -> bool {
        if let Some(platform) = self.clipboard.platform.as_mut() {
            match platform.write_text(text) {
                Ok(()) => {
                    self.show_notification(COPIED_MESSAGE);
                    return true;
                }
                Err(err) => tracing::error!(error = %err, "failed to copy"),
            }
        }

        match self.legacy_copy(text) {
            Ok(()) => {
                self.show_notification(COPIED_MESSAGE);
                true
            }
            Err(err) => {
                tracing::error!(error = %format!("{err:#}"), "failed to copy");
                false
            }
        }
    }

    fn legacy_copy(&mut self, text: &str) -> anyhow::Result<()> {
        let body = dom::body(&self.document).context("page has no body")?;
        let markup = html! {
            textarea style="position: fixed; opacity: 0;" {}
        }
        .into_string();
        let nodes = dom::fragment(&markup);
        for node in &nodes {
            // Text goes in as a node; the parser would drop a leading newline
            // and fold \r\n.
            dom::set_text(node, text);
            body.append(node.clone());
        }

        let selected = nodes
            .iter()
            .map(dom::text)
            .collect::<String>();
        let result = self
            .clipboard
            .legacy
            .write_text(&selected)
            .context("copy selected textarea");

        for node in nodes {
            node.detach();
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageEnv;
    use url::Url;

    fn page(platform: Option<Box<dyn Clipboard>>, legacy: Box<dyn Clipboard>) -> Page {
        let env = PageEnv {
            clipboard: platform,
            legacy_clipboard: legacy,
            ..PageEnv::default()
        };
        Page::load(
            "<html><body></body></html>",
            Url::parse("https://dexterity.it/docs.html").unwrap(),
            env,
        )
    }

    #[test]
    fn platform_failure_falls_back_once() {
        let legacy = MemoryClipboard::default();
        let mut page = page(Some(Box::new(DeniedClipboard)), Box::new(legacy.clone()));
        assert!(page.copy_to_clipboard("kubectl get pods"));
        assert_eq!(legacy.contents().as_deref(), Some("kubectl get pods"));
        // the temporary textarea is gone again
        assert!(dom::select_first(page.document(), "textarea").is_none());
        assert!(page.html().unwrap().contains(COPIED_MESSAGE));
    }

    #[test]
    fn total_failure_leaves_page_untouched() {
        let mut page = page(Some(Box::new(DeniedClipboard)), Box::new(DeniedClipboard));
        let before = page.html().unwrap();
        assert!(!page.copy_to_clipboard("x"));
        assert_eq!(page.html().unwrap(), before);
    }

    #[test]
    fn fallback_copies_text_verbatim() {
        let legacy = MemoryClipboard::default();
        let mut page = page(None, Box::new(legacy.clone()));
        for text in ["\nline two", "a\r\nb", "  <b>&amp;</b>  "] {
            assert!(page.copy_to_clipboard(text));
            assert_eq!(legacy.contents().as_deref(), Some(text));
        }
    }
}
