//! Documentation hub search. Tiles are filtered by the shared engine, then
//! visibility folds upward: a collection group or tree branch is shown iff one
//! of its tiles is shown, and a shown branch is opened. Branches are never
//! closed here.

use kuchiki::NodeRef;

use crate::dom;
use crate::filter::FilterEngine;
use crate::page::{Action, EventKind, Feature, Page};

#[derive(Debug, Clone, PartialEq, Eq)]
enum AncestorKind {
    Group,
    Branch,
}

#[derive(Debug, Clone)]
struct Ancestor {
    node: NodeRef,
    kind: AncestorKind,
    members: Vec<usize>,
}

pub struct HubSearch {
    engine: FilterEngine,
    ancestors: Vec<Ancestor>,
}

fn tile_fields(tile: &NodeRef) -> Vec<String> {
    vec![
        dom::attr(tile, "data-keywords").unwrap_or_default(),
        dom::text(tile),
    ]
}

fn is_group(node: &NodeRef) -> bool {
    dom::has_attr(node, "data-collection-group")
}

fn is_branch(node: &NodeRef) -> bool {
    dom::has_class(node, "docs-tree-branch")
}

fn add_member(ancestors: &mut Vec<Ancestor>, node: NodeRef, kind: AncestorKind, tile: usize) {
    match ancestors
        .iter_mut()
        .find(|a| a.kind == kind && a.node == node)
    {
        Some(ancestor) => ancestor.members.push(tile),
        None => ancestors.push(Ancestor {
            node,
            kind,
            members: vec![tile],
        }),
    }
}

impl HubSearch {
    fn new(document: &NodeRef, input: NodeRef, empty_state: Option<NodeRef>) -> Self {
        let tiles = dom::select_all(document, "[data-keywords]");

        let mut ancestors = Vec::new();
        for (index, tile) in tiles.iter().enumerate() {
            // Tiles outside any group still filter but feed no ancestor.
            let Some(group) = dom::closest(tile, is_group) else {
                continue;
            };
            add_member(&mut ancestors, group, AncestorKind::Group, index);
            if let Some(branch) = dom::closest(tile, is_branch) {
                add_member(&mut ancestors, branch, AncestorKind::Branch, index);
            }
        }

        let engine = FilterEngine::new(tiles, tile_fields)
            .query(Some(input), true)
            .empty_state(empty_state, "block");
        Self { engine, ancestors }
    }

    fn run(&self) -> usize {
        let visible = self.engine.apply();
        for ancestor in &self.ancestors {
            let any = ancestor.members.iter().any(|&i| visible[i]);
            dom::set_style(&ancestor.node, "display", if any { "" } else { "none" });
            if any && ancestor.kind == AncestorKind::Branch {
                dom::set_attr(&ancestor.node, "open", "");
            }
        }
        visible.into_iter().filter(|v| *v).count()
    }
}

pub(crate) fn init(page: &mut Page) -> Option<Feature> {
    let input = dom::by_id(&page.document, "docs-hub-search")?;
    let empty_state = dom::by_id(&page.document, "docs-hub-empty-state");

    let search = HubSearch::new(&page.document, input.clone(), empty_state);
    tracing::debug!(
        tiles = search.engine.items().len(),
        ancestors = search.ancestors.len(),
        "hub search indexed"
    );
    page.bind(&input, EventKind::Input, Action::HubSearch);
    page.hub_search = Some(search);
    page.run_hub_search();
    Some(Feature::HubSearch)
}

impl Page {
    /// Re-runs the hub search; returns how many tiles are visible.
    pub fn run_hub_search(&mut self) -> usize {
        self.hub_search.as_ref().map(HubSearch::run).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageEnv;
    use url::Url;

    const HUB: &str = r#"<body>
      <input id="docs-hub-search" value="">
      <section id="g-net" data-collection-group="networking">
        <details class="docs-tree-branch" id="b-cisco">
          <summary>Cisco</summary>
          <a id="t-ccna" data-keywords="cisco ios">CCNA Configuration</a>
          <a id="t-frame" data-keywords="wan dlci">Frame Relay Lab</a>
        </details>
        <a id="t-ipv6" data-keywords="ipv6">Advanced Networking</a>
      </section>
      <section id="g-sec" data-collection-group="security">
        <a id="t-zt" data-keywords="incident">Zero Trust Playbook</a>
      </section>
      <a id="t-loose" data-keywords="misc">Loose tile</a>
      <p id="docs-hub-empty-state">No matches</p>
    </body>"#;

    fn load() -> Page {
        Page::load(
            HUB,
            Url::parse("https://dexterity.it/docs.html").unwrap(),
            PageEnv::default(),
        )
    }

    fn shown(page: &Page, id: &str) -> bool {
        !dom::is_hidden(&page.element(id).unwrap())
    }

    #[test]
    fn ancestors_follow_their_tiles() {
        let mut page = load();
        page.set_value("docs-hub-search", "dlci");

        assert!(shown(&page, "t-frame"));
        assert!(!shown(&page, "t-ccna"));
        assert!(shown(&page, "b-cisco"));
        assert!(dom::has_attr(&page.element("b-cisco").unwrap(), "open"));
        assert!(shown(&page, "g-net"));
        assert!(!shown(&page, "g-sec"));
        assert!(!shown(&page, "t-loose"));
        assert!(dom::is_hidden(&page.element("docs-hub-empty-state").unwrap()));
    }

    #[test]
    fn hidden_branch_is_not_closed() {
        let mut page = load();
        dom::set_attr(&page.element("b-cisco").unwrap(), "open", "");
        page.set_value("docs-hub-search", "incident");
        assert!(!shown(&page, "b-cisco"));
        assert!(!shown(&page, "g-net"));
        assert!(dom::has_attr(&page.element("b-cisco").unwrap(), "open"));
        assert!(shown(&page, "g-sec"));
    }

    #[test]
    fn repeated_search_is_idempotent() {
        let mut page = load();
        page.set_value("docs-hub-search", "ipv6");
        let first = page.html().unwrap();
        page.run_hub_search();
        assert_eq!(page.html().unwrap(), first);
    }

    #[test]
    fn ancestor_visibility_tracks_edits() {
        let mut page = load();
        let groups = ["g-net", "g-sec"];
        for query in ["cisco", "", "zzz", "Zero", "  lab ", "misc"] {
            page.set_value("docs-hub-search", query);
            for group in groups {
                let node = page.element(group).unwrap();
                let any_tile = dom::select_all(&node, "[data-keywords]")
                    .iter()
                    .any(|t| !dom::is_hidden(t));
                assert_eq!(shown(&page, group), any_tile, "query {query:?} group {group}");
            }
        }
        page.set_value("docs-hub-search", "zzz");
        assert_eq!(
            dom::style(&page.element("docs-hub-empty-state").unwrap(), "display").as_deref(),
            Some("block")
        );
    }
}
