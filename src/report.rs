use std::path::Path;

use anyhow::Context as _;
use serde::Serialize;

use crate::detail::Hydration;
use crate::page::{Effect, Feature, Page};

/// What happened to one page: which behaviors found their anchors, how the
/// detail slots were filled, and every outbound effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReport {
    pub url: String,
    pub features: Vec<Feature>,
    pub hydration: Hydration,
    pub effects: Vec<Effect>,
}

impl PageReport {
    pub fn from_page(page: &Page) -> Self {
        Self {
            url: page.location().to_string(),
            features: page.features().to_vec(),
            hydration: page.hydration().clone(),
            effects: page.effects().to_vec(),
        }
    }
}

pub fn write_reports(path: &Path, reports: &[PageReport]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(reports).context("serialize page reports")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))
}
