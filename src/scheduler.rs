//! Cooperative scheduling on a virtual clock.
//!
//! Frame tasks run on the next [`Page::run_frame`]; a task that wants another
//! frame queues itself again. Timers fire from [`Page::advance`] in due order.
//! Nothing can be cancelled once queued.

use std::time::Duration;

use kuchiki::NodeRef;

use crate::page::Page;
use crate::{courses, dom, toast};

#[derive(Debug, Clone)]
pub(crate) enum Task {
    ProgressStep(courses::ProgressAnimation),
    ToastSlideOut { toast: NodeRef },
    ToastRemove { toast: NodeRef },
    RestoreLabel { button: NodeRef, label: String },
}

#[derive(Debug)]
struct Timer {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Debug, Default)]
pub(crate) struct Scheduler {
    now: Duration,
    next_seq: u64,
    frames: Vec<Task>,
    timers: Vec<Timer>,
}

impl Scheduler {
    pub(crate) fn request_frame(&mut self, task: Task) {
        self.frames.push(task);
    }

    pub(crate) fn set_timeout(&mut self, delay: Duration, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer {
            due: self.now + delay,
            seq,
            task,
        });
    }

    fn next_due(&self) -> Option<Duration> {
        self.timers.iter().map(|t| t.due).min()
    }

    fn pop_due(&mut self, until: Duration) -> Option<Timer> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(idx, _)| idx)?;
        Some(self.timers.swap_remove(idx))
    }
}

impl Page {
    /// Runs one animation frame; returns how many tasks ran.
    pub fn run_frame(&mut self) -> usize {
        let tasks = std::mem::take(&mut self.scheduler.frames);
        let count = tasks.len();
        for task in tasks {
            self.run_task(task);
        }
        count
    }

    /// Moves the clock forward by `by`, firing every timer that falls due.
    pub fn advance(&mut self, by: Duration) {
        let until = self.scheduler.now + by;
        while let Some(timer) = self.scheduler.pop_due(until) {
            self.scheduler.now = timer.due;
            self.run_task(timer.task);
        }
        self.scheduler.now = until;
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.frames.len() + self.scheduler.timers.len()
    }

    /// Drains frames, then timers, until nothing is queued.
    pub fn run_until_idle(&mut self) {
        loop {
            if !self.scheduler.frames.is_empty() {
                self.run_frame();
                continue;
            }
            match self.scheduler.next_due() {
                Some(due) => {
                    let wait = due.saturating_sub(self.scheduler.now);
                    self.advance(wait);
                }
                None => break,
            }
        }
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::ProgressStep(animation) => courses::step_progress(self, animation),
            Task::ToastSlideOut { toast } => toast::slide_out(self, toast),
            Task::ToastRemove { toast } => toast.detach(),
            Task::RestoreLabel { button, label } => dom::set_text(&button, &label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_pop_in_due_then_insertion_order() {
        let doc = dom::parse_document("<p>x</p>");
        let mut scheduler = Scheduler::default();
        scheduler.set_timeout(Duration::from_millis(20), Task::ToastRemove { toast: doc.clone() });
        scheduler.set_timeout(Duration::from_millis(10), Task::ToastRemove { toast: doc.clone() });
        scheduler.set_timeout(Duration::from_millis(10), Task::ToastRemove { toast: doc });

        assert!(scheduler.pop_due(Duration::from_millis(5)).is_none());
        let order: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(Duration::from_millis(30)))
            .map(|t| (t.due.as_millis(), t.seq))
            .collect();
        assert_eq!(order, vec![(10, 1), (10, 2), (20, 0)]);
    }
}
