use std::sync::LazyLock;
use std::time::Duration;

use kuchiki::NodeRef;
use regex::Regex;

use crate::dom;
use crate::page::{Action, EventKind, Feature, Page};
use crate::scheduler::Task;

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";
pub const LABEL_RESET_AFTER: Duration = Duration::from_millis(1500);

struct Pass {
    pattern: Regex,
    class: &'static str,
}

fn pass(pattern: &str, class: &'static str) -> Pass {
    Pass {
        pattern: Regex::new(pattern).expect("highlight pattern"),
        class,
    }
}

static BASH: LazyLock<Vec<Pass>> = LazyLock::new(|| {
    vec![
        pass(r"(sudo|apt|systemctl|docker|kubectl|git|cd|rm|cp|mv)\b", "keyword"),
        pass(r"(?i)(--[a-z-]+|-[a-z])", "flag"),
    ]
});

static YAML: LazyLock<Vec<Pass>> =
    LazyLock::new(|| vec![pass(r"(?m)^(\s*-?\s*[A-Za-z0-9_]+:)", "keyword")]);

// Keys are matched in escaped form since quotes are entities by now.
static JSON: LazyLock<Vec<Pass>> =
    LazyLock::new(|| vec![pass(r"&quot;[^&<>]+?&quot;:", "keyword")]);

static POWERSHELL: LazyLock<Vec<Pass>> = LazyLock::new(|| {
    vec![
        pass(r"(Get-|Set-|New-|Add-|Remove-)[A-Za-z]+", "keyword"),
        pass(r"\$[A-Za-z0-9_]+", "value"),
    ]
});

static GENERIC: LazyLock<Vec<Pass>> = LazyLock::new(|| {
    vec![pass(
        r"(function|const|let|var|return|if|else)\b",
        "keyword",
    )]
});

fn passes_for(language: &str) -> &'static [Pass] {
    match language {
        "bash" => BASH.as_slice(),
        "yaml" => YAML.as_slice(),
        "json" => JSON.as_slice(),
        "powershell" => POWERSHELL.as_slice(),
        _ => GENERIC.as_slice(),
    }
}

/// Ampersand goes first so later entities are not escaped twice.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wraps matches in `<span class="code-{class}">`, leaving tags from earlier
/// passes alone.
fn wrap_tokens(html: &str, pass: &Pass) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while !rest.is_empty() {
        let (text, tag) = match rest.find('<') {
            Some(start) => {
                let end = rest[start..]
                    .find('>')
                    .map(|e| start + e + 1)
                    .unwrap_or(rest.len());
                (&rest[..start], &rest[start..end])
            }
            None => (rest, ""),
        };
        let replaced = pass.pattern.replace_all(text, |caps: &regex::Captures| {
            format!("<span class=\"code-{}\">{}</span>", pass.class, &caps[0])
        });
        out.push_str(&replaced);
        out.push_str(tag);
        rest = &rest[text.len() + tag.len()..];
    }
    out
}

/// Highlighted markup for `source` in `language`.
pub fn highlight(source: &str, language: &str) -> String {
    passes_for(language)
        .iter()
        .fold(escape_html(source), |html, pass| wrap_tokens(&html, pass))
}

pub(crate) fn init(page: &mut Page) -> Option<Feature> {
    let blocks = dom::select_all(&page.document, ".code-block");
    if blocks.is_empty() {
        return None;
    }

    for block in &blocks {
        let button = dom::select_first(block, ".code-copy-btn");
        let code = dom::select_first(block, "code");
        if let (Some(button), Some(code)) = (button, code) {
            page.bind(
                &button,
                EventKind::Click,
                Action::CopyCode {
                    button: button.clone(),
                    code,
                },
            );
        }
    }

    let highlighted = apply_syntax_highlighting(&page.document);
    if highlighted > 0 {
        page.push_feature(Feature::SyntaxHighlighting);
    }
    tracing::debug!(blocks = blocks.len(), highlighted, "code blocks ready");
    Some(Feature::CodeBlocks)
}

fn apply_syntax_highlighting(document: &NodeRef) -> usize {
    let codes = dom::select_all(document, "code[data-language]");
    for code in &codes {
        let language = dom::attr(code, "data-language").unwrap_or_default();
        let markup = highlight(&dom::text(code), &language);
        dom::set_inner_html(code, &markup);
    }
    codes.len()
}

pub(crate) fn copy_code(page: &mut Page, button: &NodeRef, code: &NodeRef) {
    let text = dom::text(code);
    if page.copy_to_clipboard(text.trim()) {
        dom::set_text(button, COPIED_LABEL);
        page.scheduler.set_timeout(
            LABEL_RESET_AFTER,
            Task::RestoreLabel {
                button: button.clone(),
                label: COPY_LABEL.to_string(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{DeniedClipboard, MemoryClipboard};
    use crate::page::PageEnv;
    use url::Url;

    #[test]
    fn escape_order_avoids_double_escaping() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn bash_flags_do_not_break_keyword_spans() {
        let out = highlight("sudo apt install -y --no-install-recommends curl", "bash");
        assert_eq!(
            out,
            "<span class=\"code-keyword\">sudo</span> <span class=\"code-keyword\">apt</span> install \
             <span class=\"code-flag\">-y</span> <span class=\"code-flag\">--no-install-recommends</span> curl"
        );
    }

    #[test]
    fn language_specific_passes() {
        assert!(highlight("name: web\n  - image: nginx", "yaml")
            .starts_with("<span class=\"code-keyword\">name:</span>"));
        assert_eq!(
            highlight(r#"{"id": 1}"#, "json"),
            "{<span class=\"code-keyword\">&quot;id&quot;:</span> 1}"
        );
        assert_eq!(
            highlight("Get-Service $name", "powershell"),
            "<span class=\"code-keyword\">Get-Service</span> <span class=\"code-value\">$name</span>"
        );
        assert_eq!(
            highlight("const x = a < b;", "javascript"),
            "<span class=\"code-keyword\">const</span> x = a &lt; b;"
        );
    }

    const BLOCK: &str = r#"<body><div class="code-block">
        <button class="code-copy-btn" id="copy">Copy</button>
        <pre><code data-language="bash">  sudo systemctl restart nginx && echo "ok" </code></pre>
    </div></body>"#;

    #[test]
    fn highlighting_keeps_text_for_copy() {
        let clip = MemoryClipboard::default();
        let env = PageEnv {
            clipboard: Some(Box::new(clip.clone())),
            ..PageEnv::default()
        };
        let mut page = Page::load(BLOCK, Url::parse("https://dexterity.it/docs-detail.html").unwrap(), env);
        let code = dom::select_first(page.document(), "code").unwrap();
        assert!(dom::select_first(&code, "span.code-keyword").is_some());

        page.click_id("copy");
        assert_eq!(
            clip.contents().as_deref(),
            Some(r#"sudo systemctl restart nginx && echo "ok""#)
        );
        let button = page.element("copy").unwrap();
        assert_eq!(dom::text(&button), COPIED_LABEL);
        page.advance(LABEL_RESET_AFTER);
        assert_eq!(dom::text(&button), COPY_LABEL);
    }

    #[test]
    fn failed_copy_keeps_label() {
        let env = PageEnv {
            clipboard: None,
            legacy_clipboard: Box::new(DeniedClipboard),
            ..PageEnv::default()
        };
        let mut page = Page::load(BLOCK, Url::parse("https://dexterity.it/").unwrap(), env);
        page.click_id("copy");
        assert_eq!(dom::text(&page.element("copy").unwrap()), COPY_LABEL);
        assert_eq!(page.pending_tasks(), 0);
    }
}
