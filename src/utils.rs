use gettextrs::gettext;
use glib::SourceId;
use gtk::glib;
use std::{cell::RefCell, rc::Rc, time::Duration};

/// Like `gettext`, but replaces named variables with the given dictionary.
///
/// The expected format to replace is `{name}`, where `name` is the first string
/// in the dictionary entry tuple.
pub fn gettext_f(msgid: &str, args: &[(&str, &str)]) -> String {
    let s = gettext(msgid);
    freplace(s, args)
}

/// Replace variables in the given string with the given dictionary.
pub fn freplace(s: String, args: &[(&str, &str)]) -> String {
    let mut s = s;

    for (k, v) in args {
        s = s.replace(&format!("{{{k}}}"), v);
    }

    s
}

/// Longest delay a GLib timeout can express, its interval is a `u32` of milliseconds.
pub const MAX_DELAY: Duration = Duration::from_millis(u32::MAX as u64);

pub fn clamp_delay(delay: Duration) -> Duration {
    if delay > MAX_DELAY {
        log::warn!("Delay of {delay:?} is too long, shortened to {MAX_DELAY:?}");
        return MAX_DELAY;
    }
    delay
}

/// A main-loop timeout that fires at most once and can be cancelled before it does.
#[derive(Debug, Default, Clone)]
pub struct OneShotTimer {
    source_id: Rc<RefCell<Option<SourceId>>>,
}

impl OneShotTimer {
    /// Schedules `callback`, replacing any timeout still pending.
    pub fn schedule<F>(&self, delay: Duration, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();

        let source_id = self.source_id.clone();
        let new_id = glib::timeout_add_local_once(clamp_delay(delay), move || {
            // The source is already gone once it fired, it must not be removed again.
            source_id.borrow_mut().take();
            callback();
        });
        self.source_id.replace(Some(new_id));
    }

    /// Returns whether a pending timeout was removed.
    pub fn cancel(&self) -> bool {
        match self.source_id.borrow_mut().take() {
            Some(id) => {
                id.remove();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn freplace_named_arguments() {
        let s = freplace(
            "{app} says {what}".to_owned(),
            &[("app", "Mail"), ("what", "hi")],
        );
        assert_eq!(s, "Mail says hi");
    }

    #[test]
    fn delays_beyond_glib_range_are_clamped() {
        let long = Duration::from_millis(u32::MAX as u64 + 1);
        assert_eq!(clamp_delay(long), MAX_DELAY);
        assert_eq!(clamp_delay(Duration::from_secs(u64::MAX)), MAX_DELAY);
        assert_eq!(clamp_delay(MAX_DELAY), MAX_DELAY);
        assert_eq!(
            clamp_delay(Duration::from_millis(17000)),
            Duration::from_millis(17000)
        );
    }

    #[test]
    fn timer_fires_once_unless_cancelled() {
        let ctx = glib::MainContext::default();
        // another test thread may own the default context
        let Ok(_guard) = ctx.acquire() else {
            return;
        };

        let cancelled = Rc::new(Cell::new(false));
        let count = Rc::new(Cell::new(0));

        let timer = OneShotTimer::default();
        let flag = cancelled.clone();
        timer.schedule(Duration::from_millis(5), move || flag.set(true));
        assert!(timer.cancel());
        assert!(!timer.cancel());

        let counter = count.clone();
        timer.schedule(Duration::from_millis(5), move || {
            counter.set(counter.get() + 1)
        });

        let main_loop = glib::MainLoop::new(Some(&ctx), false);
        let quit = main_loop.clone();
        glib::timeout_add_local_once(Duration::from_millis(50), move || quit.quit());
        main_loop.run();

        assert!(!cancelled.get());
        assert_eq!(count.get(), 1);
        assert!(!timer.cancel());
    }
}
