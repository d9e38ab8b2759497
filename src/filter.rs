//! One filtering routine shared by every searchable listing.
//!
//! An item matches when every facet is `all` or equals the item's attribute,
//! and the query is empty or a case-insensitive substring of one of the item's
//! searchable fields.

use kuchiki::NodeRef;

use crate::dom;

pub const ALL: &str = "all";

/// A discrete selector bound to one item attribute.
#[derive(Debug, Clone)]
pub struct Facet {
    control: Option<NodeRef>,
    attribute: &'static str,
}

impl Facet {
    /// The control's value; a missing control or an empty value selects `all`.
    fn selected(&self) -> String {
        self.control
            .as_ref()
            .map(dom::control_value)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| ALL.to_string())
    }
}

pub fn is_match(facets: &[(&str, Option<&str>)], query: &str, fields: &[String]) -> bool {
    let facets_ok = facets
        .iter()
        .all(|(selected, value)| *selected == ALL || Some(*selected) == *value);
    if !facets_ok {
        return false;
    }
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

/// Searchable text of an item. Missing fields come back empty.
pub type Fields = fn(&NodeRef) -> Vec<String>;

pub struct FilterEngine {
    items: Vec<NodeRef>,
    fields: Fields,
    facets: Vec<Facet>,
    query: Option<NodeRef>,
    trim_query: bool,
    shown_display: &'static str,
    toggle_hidden_class: bool,
    empty_state: Option<(NodeRef, &'static str)>,
}

impl FilterEngine {
    pub fn new(items: Vec<NodeRef>, fields: Fields) -> Self {
        Self {
            items,
            fields,
            facets: Vec::new(),
            query: None,
            trim_query: false,
            shown_display: "",
            toggle_hidden_class: false,
            empty_state: None,
        }
    }

    pub fn facet(mut self, control: Option<NodeRef>, attribute: &'static str) -> Self {
        self.facets.push(Facet { control, attribute });
        self
    }

    pub fn query(mut self, control: Option<NodeRef>, trim: bool) -> Self {
        self.query = control;
        self.trim_query = trim;
        self
    }

    /// `display` used for matching items; `hidden_class` also mirrors the state
    /// into a `hidden` class.
    pub fn show_as(mut self, display: &'static str, hidden_class: bool) -> Self {
        self.shown_display = display;
        self.toggle_hidden_class = hidden_class;
        self
    }

    pub fn empty_state(mut self, node: Option<NodeRef>, display: &'static str) -> Self {
        self.empty_state = node.map(|n| (n, display));
        self
    }

    pub fn items(&self) -> &[NodeRef] {
        &self.items
    }

    pub fn facet_controls(&self) -> impl Iterator<Item = &NodeRef> {
        self.facets.iter().filter_map(|f| f.control.as_ref())
    }

    fn current_query(&self) -> String {
        let raw = self
            .query
            .as_ref()
            .map(dom::control_value)
            .unwrap_or_default();
        if self.trim_query {
            raw.trim().to_string()
        } else {
            raw
        }
    }

    /// Recomputes visibility for every item; returns it in item order.
    pub fn apply(&self) -> Vec<bool> {
        let selected: Vec<String> = self.facets.iter().map(Facet::selected).collect();
        let query = self.current_query();

        let visible: Vec<bool> = self
            .items
            .iter()
            .map(|item| {
                let values: Vec<Option<String>> = self
                    .facets
                    .iter()
                    .map(|f| dom::attr(item, f.attribute))
                    .collect();
                let checks: Vec<(&str, Option<&str>)> = selected
                    .iter()
                    .zip(&values)
                    .map(|(s, v)| (s.as_str(), v.as_deref()))
                    .collect();
                let shown = is_match(&checks, &query, &(self.fields)(item));
                self.render(item, shown);
                shown
            })
            .collect();

        if let Some((empty, display)) = &self.empty_state {
            let any = visible.iter().any(|v| *v);
            dom::set_style(empty, "display", if any { "none" } else { display });
        }
        visible
    }

    fn render(&self, item: &NodeRef, shown: bool) {
        dom::set_style(item, "display", if shown { self.shown_display } else { "none" });
        if self.toggle_hidden_class {
            dom::toggle_class(item, "hidden", Some(!shown));
        }
    }

    /// Puts every facet back to `all` and clears the query.
    pub fn reset_controls(&self) {
        for control in self.facet_controls() {
            dom::set_control_value(control, ALL);
        }
        if let Some(query) = &self.query {
            dom::set_control_value(query, "");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn facets_are_conjunctive() {
        let f = fields(&["Linux Administration"]);
        assert!(is_match(&[("all", Some("beginner")), ("all", None)], "", &f));
        assert!(is_match(&[("beginner", Some("beginner")), ("all", Some("os"))], "", &f));
        assert!(!is_match(&[("beginner", Some("beginner")), ("security", Some("os"))], "", &f));
        assert!(!is_match(&[("beginner", None)], "", &f));
    }

    #[test]
    fn query_is_case_insensitive_substring_of_any_field() {
        let f = fields(&["Routing & Switching", "", "cisco ospf"]);
        assert!(is_match(&[], "OSPF", &f));
        assert!(is_match(&[], "routing &", &f));
        assert!(!is_match(&[], "bgp", &f));
        assert!(is_match(&[], "", &[]));
        assert!(!is_match(&[], "x", &[]));
    }

    #[test]
    fn engine_renders_and_counts() {
        let doc = dom::parse_document(
            r#"<input id="q" value="net">
               <div class="c" id="a">network</div>
               <div class="c" id="b">linux</div>
               <p id="empty"></p>"#,
        );
        let items = dom::select_all(&doc, ".c");
        let engine = FilterEngine::new(items, |n| vec![dom::text(n)])
            .query(dom::by_id(&doc, "q"), true)
            .show_as("block", false)
            .empty_state(dom::by_id(&doc, "empty"), "flex");

        assert_eq!(engine.apply(), vec![true, false]);
        assert_eq!(dom::style(&dom::by_id(&doc, "a").unwrap(), "display").as_deref(), Some("block"));
        assert!(dom::is_hidden(&dom::by_id(&doc, "b").unwrap()));
        assert!(dom::is_hidden(&dom::by_id(&doc, "empty").unwrap()));

        dom::set_control_value(&dom::by_id(&doc, "q").unwrap(), "zzz");
        assert_eq!(engine.apply(), vec![false, false]);
        assert_eq!(
            dom::style(&dom::by_id(&doc, "empty").unwrap(), "display").as_deref(),
            Some("flex")
        );
    }
}
