use std::time::{Duration, Instant};

use crate::config::Button;

/// Fixed delay between showing the redirect message and navigating.
pub const REDIRECT_DELAY_MS: u64 = 700;

/// Source of the current time. The TUI uses [`SystemClock`]; tests inject a
/// fake so the delay can be "elapsed" without sleeping.
pub trait Clock {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// The single shared status display. Last write wins; there is no guard
/// against overlapping writers.
#[derive(Debug, Default)]
pub struct StatusLine {
    text: Option<String>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, text: String) {
        self.text = Some(text);
    }

    pub fn clear(&mut self) {
        self.text = None;
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// A navigation that has been announced but not yet performed.
#[derive(Debug, Clone)]
pub struct PendingNavigation {
    pub url: String,
    pub deadline: Instant,
}

/// Schedules redirects and hands back the ones whose delay has elapsed.
///
/// Each activation schedules exactly one pending navigation. Activating again
/// before an earlier one fires does not cancel it; pendings coexist and fire
/// in scheduling order.
pub struct RedirectQueue {
    delay: Duration,
    pending: Vec<PendingNavigation>,
}

impl Default for RedirectQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl RedirectQueue {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(REDIRECT_DELAY_MS),
            pending: Vec::new(),
        }
    }

    /// Activate a button: announce the redirect on the status line and
    /// schedule the navigation.
    ///
    /// A button without a URL produces `Redirecting to undefined...` and a
    /// pending navigation to the literal `undefined`. That is the inherited
    /// behavior, not a validation gap to fix here.
    pub fn activate(&mut self, button: &Button, status: &mut StatusLine, now: Instant) {
        let target = button.target();
        status.set(format!("Redirecting to {}...", target));
        self.pending.push(PendingNavigation {
            url: target.to_string(),
            deadline: now + self.delay,
        });
    }

    /// Remove and return every pending navigation whose deadline has elapsed,
    /// in the order they were scheduled. URLs come back verbatim.
    pub fn fire_due(&mut self, now: Instant) -> Vec<String> {
        let mut due = Vec::new();
        self.pending.retain(|p| {
            if p.deadline <= now {
                due.push(p.url.clone());
                false
            } else {
                true
            }
        });
        due
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}


#[cfg(test)]
mod tests {
    use super::fakes::FakeClock;
    use super::*;
    use std::time::Duration;

    fn button(url: &str) -> Button {
        Button {
            label: Some("test".to_string()),
            url: Some(url.to_string()),
        }
    }

    #[test]
    fn test_activate_sets_status_message() {
        let mut queue = RedirectQueue::new();
        let mut status = StatusLine::new();
        let clock = FakeClock::new();

        queue.activate(&button("http://localhost:3002/posts"), &mut status, clock.now());

        assert_eq!(
            status.text(),
            Some("Redirecting to http://localhost:3002/posts...")
        );
    }

    #[test]
    fn test_activate_schedules_exactly_one_pending() {
        let mut queue = RedirectQueue::new();
        let mut status = StatusLine::new();
        let clock = FakeClock::new();

        queue.activate(&button("http://localhost:3001/todos"), &mut status, clock.now());

        assert_eq!(queue.pending_count(), 1);
    }

    #[test]
    fn test_nothing_fires_before_the_delay() {
        let mut queue = RedirectQueue::new();
        let mut status = StatusLine::new();
        let clock = FakeClock::new();

        queue.activate(&button("http://localhost:3001/todos"), &mut status, clock.now());
        clock.advance(Duration::from_millis(REDIRECT_DELAY_MS - 1));

        assert!(queue.fire_due(clock.now()).is_empty());
        assert_eq!(queue.pending_count(), 1);
    }

    #[test]
    fn test_fires_verbatim_url_after_delay() {
        let mut queue = RedirectQueue::new();
        let mut status = StatusLine::new();
        let clock = FakeClock::new();

        queue.activate(&button("http://localhost:3003/food"), &mut status, clock.now());
        clock.advance(Duration::from_millis(REDIRECT_DELAY_MS));

        let fired = queue.fire_due(clock.now());
        assert_eq!(fired, vec!["http://localhost:3003/food".to_string()]);
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn test_missing_url_redirects_to_undefined() {
        let mut queue = RedirectQueue::new();
        let mut status = StatusLine::new();
        let clock = FakeClock::new();
        let unset = Button {
            label: Some("broken".to_string()),
            url: None,
        };

        queue.activate(&unset, &mut status, clock.now());
        clock.advance(Duration::from_millis(REDIRECT_DELAY_MS));

        assert_eq!(status.text(), Some("Redirecting to undefined..."));
        assert_eq!(queue.fire_due(clock.now()), vec!["undefined".to_string()]);
    }

    #[test]
    fn test_overlapping_activations_are_independent() {
        let mut queue = RedirectQueue::new();
        let mut status = StatusLine::new();
        let clock = FakeClock::new();

        queue.activate(&button("http://localhost:3002/posts"), &mut status, clock.now());
        clock.advance(Duration::from_millis(100));
        queue.activate(&button("http://localhost:3001/todos"), &mut status, clock.now());

        // Status shows the most recent activation.
        assert_eq!(
            status.text(),
            Some("Redirecting to http://localhost:3001/todos...")
        );
        assert_eq!(queue.pending_count(), 2);

        // Both fire, in scheduling order, each with its own URL.
        clock.advance(Duration::from_millis(REDIRECT_DELAY_MS));
        let fired = queue.fire_due(clock.now());
        assert_eq!(
            fired,
            vec![
                "http://localhost:3002/posts".to_string(),
                "http://localhost:3001/todos".to_string(),
            ]
        );
    }

    #[test]
    fn test_fire_due_only_takes_elapsed_entries() {
        let mut queue = RedirectQueue::new();
        let mut status = StatusLine::new();
        let clock = FakeClock::new();

        queue.activate(&button("http://first.example"), &mut status, clock.now());
        clock.advance(Duration::from_millis(500));
        queue.activate(&button("http://second.example"), &mut status, clock.now());

        // 700ms after the first activation: only the first is due.
        clock.advance(Duration::from_millis(200));
        assert_eq!(
            queue.fire_due(clock.now()),
            vec!["http://first.example".to_string()]
        );
        assert_eq!(queue.pending_count(), 1);
    }
}
