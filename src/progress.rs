use std::time::{Duration, Instant};

use indicatif::{HumanDuration, MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

pub struct Progress {
    enabled: bool,
    start: Instant,

    mp: Option<MultiProgress>,
    stage: ProgressBar,
    pages: ProgressBar,

    pages_done: u64,
    effects: u64,
}

impl Progress {
    pub fn new(enabled: bool) -> Self {
        let start = Instant::now();

        if !enabled {
            return Self {
                enabled: false,
                start,
                mp: None,
                stage: ProgressBar::hidden(),
                pages: ProgressBar::hidden(),
                pages_done: 0,
                effects: 0,
            };
        }

        let mp = MultiProgress::with_draw_target(ProgressDrawTarget::stderr());

        let stage = mp.add(ProgressBar::new_spinner());
        stage.set_style(
            ProgressStyle::with_template("{spinner} {msg}  [{elapsed_precise}]")
                .expect("stage template"),
        );
        stage.enable_steady_tick(Duration::from_millis(80));
        stage.set_message("starting");

        let pages = mp.add(ProgressBar::new(0));
        pages.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                .expect("pages template")
                .progress_chars("##-"),
        );
        pages.set_message("pages");

        Self {
            enabled: true,
            start,
            mp: Some(mp),
            stage,
            pages,
            pages_done: 0,
            effects: 0,
        }
    }

    pub fn set_stage(&self, msg: impl Into<String>) {
        if !self.enabled {
            return;
        }
        self.stage.set_message(msg.into());
    }

    pub fn set_pages_total(&self, total: usize) {
        if self.enabled {
            self.pages.set_length(total as u64);
        }
    }

    pub fn page_done(&mut self, name: &str, effects: usize) {
        self.pages_done += 1;
        self.effects += effects as u64;
        if self.enabled {
            self.pages.inc(1);
            self.pages.set_message(name.to_string());
        }
    }

    pub fn finish(&self) {
        tracing::debug!(pages = self.pages_done, effects = self.effects, "pipeline finished");
        if !self.enabled {
            return;
        }
        self.stage.finish_with_message("done");
        self.pages.finish_and_clear();
        if let Some(mp) = &self.mp {
            let _ = mp.println(format!(
                "Processed {} page(s) in {}",
                self.pages_done,
                HumanDuration(self.start.elapsed())
            ));
        }
    }
}
