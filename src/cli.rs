use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use url::Url;

use crate::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Every `*.html` file under `--input`, mirrored under `--out`.
    Dir,
    /// The single page at `--input`.
    Single,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProgressMode {
    /// Enable progress UI when stderr is a TTY.
    Auto,
    /// Always enable progress UI (even when piped).
    Always,
    /// Never show progress UI.
    Never,
}

/// A scripted user interaction, applied after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSpec {
    Click { id: String },
    Input { id: String, value: String },
    Submit { id: String },
}

impl FromStr for EventSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, rest) = s
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("event {s:?} is not <kind>:<id>"))?;
        if rest.is_empty() {
            anyhow::bail!("event {s:?} has no element id");
        }
        match kind {
            "click" => Ok(EventSpec::Click { id: rest.to_string() }),
            "submit" => Ok(EventSpec::Submit { id: rest.to_string() }),
            "input" => {
                let (id, value) = rest
                    .split_once('=')
                    .ok_or_else(|| anyhow::anyhow!("input event {s:?} is not input:<id>=<value>"))?;
                Ok(EventSpec::Input {
                    id: id.to_string(),
                    value: value.to_string(),
                })
            }
            other => anyhow::bail!("unknown event kind {other:?} (expected click, input or submit)"),
        }
    }
}

impl EventSpec {
    pub fn id(&self) -> &str {
        match self {
            EventSpec::Click { id } | EventSpec::Input { id, .. } | EventSpec::Submit { id } => id,
        }
    }

    /// Fires the event; false when the page has no such element.
    pub fn apply(&self, page: &mut Page) -> bool {
        match self {
            EventSpec::Click { id } => page.click_id(id),
            EventSpec::Input { id, value } => page.set_value(id, value),
            EventSpec::Submit { id } => {
                if page.element(id).is_none() {
                    return false;
                }
                let proceed = page.submit(id);
                tracing::debug!(form = %id, proceed, "submitted");
                true
            }
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// A page (`single` mode) or a directory of pages (`dir` mode).
    #[arg(long)]
    pub input: PathBuf,

    /// Processing mode: `dir` (every `*.html` below `--input`) or `single`.
    #[arg(long, value_enum, default_value = "dir")]
    pub mode: Mode,

    /// Page URL. In `single` mode this is the page's own URL, query included
    /// (e.g. `https://dexterity.it/docs-detail.html?slug=sre-runbook`). In `dir`
    /// mode each file's relative path is joined onto it.
    #[arg(long, default_value = "https://dexterity.it/")]
    pub url: Url,

    /// Output directory.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// JSON file backing persisted preferences. In-memory when omitted.
    #[arg(long)]
    pub storage: Option<PathBuf>,

    /// Seed for decorative randomness. Derived from each page URL when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Date used for the year stamp (`YYYY-MM-DD`). Defaults to the local date.
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Interaction to replay after load: `click:<id>`, `input:<id>=<value>` or
    /// `submit:<id>`. Repeatable; applied in order.
    #[arg(long = "event")]
    pub events: Vec<EventSpec>,

    /// Write a JSON report of every processed page here.
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Leave pending animations and timers unrun.
    #[arg(long)]
    pub no_settle: bool,

    /// Progress display: `auto`, `always`, or `never`.
    #[arg(long, value_enum, default_value = "auto")]
    pub progress: ProgressMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_event_specs() {
        assert_eq!(
            "click:theme-btn".parse::<EventSpec>().unwrap(),
            EventSpec::Click { id: "theme-btn".into() }
        );
        assert_eq!(
            "input:course-search=zero trust".parse::<EventSpec>().unwrap(),
            EventSpec::Input {
                id: "course-search".into(),
                value: "zero trust".into()
            }
        );
        assert_eq!(
            "input:q=a=b".parse::<EventSpec>().unwrap(),
            EventSpec::Input { id: "q".into(), value: "a=b".into() }
        );
        assert!("hover:x".parse::<EventSpec>().is_err());
        assert!("click:".parse::<EventSpec>().is_err());
        assert!("input:q".parse::<EventSpec>().is_err());
    }

    #[test]
    fn parses_full_command_line() {
        let args = Args::try_parse_from([
            "dexterity-site",
            "--input",
            "site/docs-detail.html",
            "--mode",
            "single",
            "--url",
            "https://dexterity.it/docs-detail.html?slug=sre-runbook",
            "--today",
            "2030-01-02",
            "--event",
            "click:detail-copy-action",
            "--event",
            "submit:contact",
            "--no-settle",
        ])
        .unwrap();
        assert_eq!(args.mode, Mode::Single);
        assert_eq!(args.today, NaiveDate::from_ymd_opt(2030, 1, 2));
        assert_eq!(args.events.len(), 2);
        assert_eq!(args.events[1].id(), "contact");
        assert!(args.no_settle);
        assert!(args.storage.is_none());
    }
}
