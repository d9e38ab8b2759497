use anyhow::Context as _;
use kuchiki::NodeRef;
use kuchiki::traits::*;

pub fn parse_document(html: &str) -> NodeRef {
    kuchiki::parse_html().one(html)
}

pub fn serialize(document: &NodeRef) -> anyhow::Result<String> {
    let mut out = Vec::new();
    document.serialize(&mut out).context("serialize page")?;
    String::from_utf8(out).context("page html not utf-8")
}

/// Parses `markup` as body content and returns its top-level nodes, detached.
pub fn fragment(markup: &str) -> Vec<NodeRef> {
    // Open <body> first so leading whitespace survives parsing.
    let doc = kuchiki::parse_html().one(format!("<html><head></head><body>{markup}"));
    let Ok(body) = doc.select_first("body") else {
        return Vec::new();
    };
    let nodes: Vec<NodeRef> = body.as_node().children().collect();
    for node in &nodes {
        node.detach();
    }
    nodes
}

pub fn by_id(root: &NodeRef, id: &str) -> Option<NodeRef> {
    root.descendants()
        .elements()
        .find(|el| el.attributes.borrow().get("id") == Some(id))
        .map(|el| el.as_node().clone())
}

pub fn select_all(root: &NodeRef, selector: &str) -> Vec<NodeRef> {
    match root.select(selector) {
        Ok(nodes) => nodes.map(|n| n.as_node().clone()).collect(),
        Err(()) => {
            tracing::warn!(selector, "invalid selector");
            Vec::new()
        }
    }
}

pub fn select_first(root: &NodeRef, selector: &str) -> Option<NodeRef> {
    root.select_first(selector).ok().map(|n| n.as_node().clone())
}

pub fn body(document: &NodeRef) -> Option<NodeRef> {
    select_first(document, "body")
}

pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.as_element().map(|el| el.name.local.as_ref().to_string())
}

pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    node.as_element()
        .and_then(|el| el.attributes.borrow().get(name).map(|s| s.to_string()))
}

pub fn has_attr(node: &NodeRef, name: &str) -> bool {
    node.as_element()
        .is_some_and(|el| el.attributes.borrow().contains(name))
}

pub fn set_attr(node: &NodeRef, name: &str, value: impl Into<String>) {
    if let Some(el) = node.as_element() {
        el.attributes.borrow_mut().insert(name, value.into());
    }
}

pub fn remove_attr(node: &NodeRef, name: &str) {
    if let Some(el) = node.as_element() {
        el.attributes.borrow_mut().remove(name);
    }
}

pub fn has_class(node: &NodeRef, class: &str) -> bool {
    attr(node, "class").is_some_and(|c| c.split_whitespace().any(|c| c == class))
}

/// Adds or removes `class`; returns whether the class is present afterwards.
pub fn toggle_class(node: &NodeRef, class: &str, force: Option<bool>) -> bool {
    let current = attr(node, "class").unwrap_or_default();
    let mut classes: Vec<&str> = current.split_whitespace().collect();
    let present = classes.contains(&class);
    let want = force.unwrap_or(!present);
    if want && !present {
        classes.push(class);
    } else if !want && present {
        classes.retain(|c| *c != class);
    }
    if classes.is_empty() {
        remove_attr(node, "class");
    } else {
        set_attr(node, "class", classes.join(" "));
    }
    want
}

fn parse_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            let prop = prop.trim();
            if prop.is_empty() {
                return None;
            }
            Some((prop.to_ascii_lowercase(), value.trim().to_string()))
        })
        .collect()
}

pub fn style(node: &NodeRef, prop: &str) -> Option<String> {
    let style = attr(node, "style")?;
    parse_style(&style)
        .into_iter()
        .find(|(p, _)| p == prop)
        .map(|(_, v)| v)
}

/// Sets one inline style property. An empty value removes the property.
pub fn set_style(node: &NodeRef, prop: &str, value: &str) {
    let mut decls = parse_style(&attr(node, "style").unwrap_or_default());
    match decls.iter_mut().find(|(p, _)| p == prop) {
        Some(decl) if !value.is_empty() => decl.1 = value.to_string(),
        Some(_) => decls.retain(|(p, _)| p != prop),
        None if !value.is_empty() => decls.push((prop.to_string(), value.to_string())),
        None => {}
    }
    if decls.is_empty() {
        remove_attr(node, "style");
        return;
    }
    let rendered = decls
        .iter()
        .map(|(p, v)| format!("{p}: {v};"))
        .collect::<Vec<_>>()
        .join(" ");
    set_attr(node, "style", rendered);
}

pub fn is_hidden(node: &NodeRef) -> bool {
    style(node, "display").as_deref() == Some("none")
}

pub fn text(node: &NodeRef) -> String {
    node.text_contents()
}

pub fn clear_children(node: &NodeRef) {
    let children: Vec<NodeRef> = node.children().collect();
    for child in children {
        child.detach();
    }
}

pub fn set_text(node: &NodeRef, text: &str) {
    clear_children(node);
    if !text.is_empty() {
        node.append(NodeRef::new_text(text));
    }
}

pub fn set_inner_html(node: &NodeRef, markup: &str) {
    clear_children(node);
    for child in fragment(markup) {
        node.append(child);
    }
}

/// Nearest inclusive ancestor that satisfies `pred`.
pub fn closest(node: &NodeRef, pred: impl Fn(&NodeRef) -> bool) -> Option<NodeRef> {
    node.inclusive_ancestors()
        .filter(|n| n.as_element().is_some())
        .find(|n| pred(n))
}

/// Current value of a form control.
pub fn control_value(node: &NodeRef) -> String {
    match tag_name(node).as_deref() {
        Some("textarea") => text(node),
        Some("select") => {
            let options = select_all(node, "option");
            options
                .iter()
                .find(|o| has_attr(o, "selected"))
                .or_else(|| options.first())
                .map(option_value)
                .unwrap_or_default()
        }
        _ => attr(node, "value").unwrap_or_default(),
    }
}

pub fn set_control_value(node: &NodeRef, value: &str) {
    match tag_name(node).as_deref() {
        Some("textarea") => set_text(node, value),
        Some("select") => {
            for option in select_all(node, "option") {
                if option_value(&option) == value {
                    set_attr(&option, "selected", "");
                } else {
                    remove_attr(&option, "selected");
                }
            }
        }
        _ => set_attr(node, "value", value),
    }
}

fn option_value(option: &NodeRef) -> String {
    attr(option, "value").unwrap_or_else(|| text(option).trim().to_string())
}

/// Lowercased text of the first match of `selector` under `node`, or empty.
pub fn lower_text_of(node: &NodeRef, selector: &str) -> String {
    select_first(node, selector)
        .map(|n| text(&n).to_lowercase())
        .unwrap_or_default()
}
