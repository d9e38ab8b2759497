mod builtin;
mod cli;
mod clipboard;
mod code;
mod courses;
mod decorate;
mod detail;
mod docs;
pub mod dom;
mod filter;
mod hub;
mod nav;
mod page;
mod progress;
pub mod registry;
mod report;
mod scheduler;
mod storage;
mod theme;
mod toast;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use cli::Args;
use url::Url;
use walkdir::WalkDir;

pub use cli::{Args as CliArgs, EventSpec, Mode, ProgressMode};
pub use clipboard::{COPIED_MESSAGE, Clipboard, DeniedClipboard, MemoryClipboard};
pub use code::{COPIED_LABEL, COPY_LABEL, escape_html, highlight};
pub use decorate::PARTICLE_COUNT;
pub use detail::{DetailKind, Hydration};
pub use docs::{Crumb, long_date, parse_iso_date, parse_trail};
pub use filter::is_match;
pub use nav::{INVALID_BORDER, navigation_target};
pub use page::{Effect, EventKind, Feature, Page, PageEnv};
pub use report::{PageReport, write_reports};
pub use storage::{FileStorage, MemoryStorage, Storage, UnavailableStorage};
pub use theme::{LIGHT_CLASS, STORAGE_KEY, Theme, ThemeStore};
pub use toast::{FEEDBACK_OTHER, FEEDBACK_YES};

/// A page to process: where it is read from, where it lands under the output
/// directory, and the URL it is loaded at.
struct PageJob {
    source: PathBuf,
    relative: PathBuf,
    url: Url,
}

pub fn run(args: Args) -> anyhow::Result<Vec<PageReport>> {
    use std::io::IsTerminal as _;

    let progress_enabled = match args.progress {
        ProgressMode::Always => true,
        ProgressMode::Never => false,
        ProgressMode::Auto => std::io::stderr().is_terminal(),
    };
    let mut progress = progress::Progress::new(progress_enabled);
    let out_dir = args.out.clone().unwrap_or_else(|| PathBuf::from("out"));

    progress.set_stage("collecting pages");
    let jobs = match args.mode {
        Mode::Dir => collect_dir(&args.input, &args.url, &out_dir)?,
        Mode::Single => vec![single_job(&args.input, &args.url)?],
    };
    progress.set_pages_total(jobs.len());
    tracing::info!(pages = jobs.len(), out = %out_dir.display(), "processing pages");

    let mut reports = Vec::with_capacity(jobs.len());
    for job in &jobs {
        progress.set_stage(format!("loading {}", job.relative.display()));
        let report = process_page(job, &args, &out_dir)?;
        progress.page_done(&job.relative.display().to_string(), report.effects.len());
        reports.push(report);
    }

    if let Some(path) = &args.report {
        progress.set_stage("writing report");
        write_reports(path, &reports)?;
        tracing::info!(path = %path.display(), "report written");
    }
    progress.finish();
    Ok(reports)
}

fn single_job(input: &Path, url: &Url) -> anyhow::Result<PageJob> {
    if !input.is_file() {
        anyhow::bail!("{} is not a file; use --mode dir for directories", input.display());
    }
    let name = input
        .file_name()
        .with_context(|| format!("{} has no file name", input.display()))?;
    Ok(PageJob {
        source: input.to_path_buf(),
        relative: PathBuf::from(name),
        url: url.clone(),
    })
}

/// Every `*.html` file below `input`, sorted by path. The output directory is
/// skipped when it sits inside the input.
fn collect_dir(input: &Path, base: &Url, out_dir: &Path) -> anyhow::Result<Vec<PageJob>> {
    if !input.is_dir() {
        anyhow::bail!("{} is not a directory", input.display());
    }
    let out_canonical = out_dir.canonicalize().ok();

    let mut jobs = Vec::new();
    let walker = WalkDir::new(input)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| match &out_canonical {
            Some(out) => e.path().canonicalize().map_or(true, |p| p != *out),
            None => true,
        });
    for entry in walker {
        let entry = entry.with_context(|| format!("walk {}", input.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }
        let relative = path
            .strip_prefix(input)
            .with_context(|| format!("{} outside {}", path.display(), input.display()))?
            .to_path_buf();
        let href = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let url = base
            .join(&href)
            .with_context(|| format!("join {href} onto {base}"))?;
        jobs.push(PageJob {
            source: path.to_path_buf(),
            relative,
            url,
        });
    }
    Ok(jobs)
}

fn page_env(args: &Args) -> PageEnv {
    let storage: Box<dyn Storage> = match &args.storage {
        Some(path) => Box::new(FileStorage::new(path.clone())),
        None => Box::new(MemoryStorage::default()),
    };
    let defaults = PageEnv::default();
    PageEnv {
        storage,
        seed: args.seed,
        today: args.today.unwrap_or(defaults.today),
        ..defaults
    }
}

fn process_page(job: &PageJob, args: &Args, out_dir: &Path) -> anyhow::Result<PageReport> {
    let html = std::fs::read_to_string(&job.source)
        .with_context(|| format!("read {}", job.source.display()))?;

    let mut page = Page::load(&html, job.url.clone(), page_env(args));
    for event in &args.events {
        if !event.apply(&mut page) {
            tracing::warn!(id = event.id(), url = %job.url, "event target not found");
        }
    }
    if !args.no_settle {
        page.run_until_idle();
    }

    let out_path = out_dir.join(&job.relative);
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let rendered = page.html()?;
    std::fs::write(&out_path, rendered).with_context(|| format!("write {}", out_path.display()))?;
    tracing::debug!(url = %job.url, out = %out_path.display(), "page written");

    Ok(PageReport::from_page(&page))
}
