//! Application state for the interactive timer.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::Config;
use crate::engine::{
    Notice, NoticeQueue, Phase, QueuedNotifier, SessionUpdated, SubscriptionId, SystemClock,
    TimerEngine,
};
use crate::error::PomoError;
use crate::sessions::{SessionRecord, SessionStorage, SqliteSessionLogger};
use crate::tui::event::Ticker;

/// How many recent sessions the side panel shows.
const RECENT_LIMIT: usize = 8;

/// Application state.
pub struct App {
    /// The countdown engine.
    pub engine: TimerEngine,
    /// The one-second tick schedule, armed iff the engine is running.
    pub ticker: Ticker,
    /// Recent sessions panel data.
    pub recent: Vec<SessionRecord>,
    /// Total work minutes logged today.
    pub today_minutes: i64,
    /// Work sessions logged today.
    pub today_count: i64,
    /// Most recent notice for the status line.
    pub status: Option<Notice>,
    /// Whether the app should quit.
    pub should_quit: bool,

    storage: Rc<SessionStorage>,
    updates: Rc<SessionUpdated>,
    subscription: SubscriptionId,
    notices: NoticeQueue,
    panels_stale: Rc<Cell<bool>>,
}

impl App {
    /// Create a new app instance around shared session storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial panel data cannot be loaded.
    pub fn new(config: &Config, storage: Rc<SessionStorage>) -> Result<Self, PomoError> {
        let updates = Rc::new(SessionUpdated::new());
        let notices: NoticeQueue = Rc::new(RefCell::new(VecDeque::new()));

        // The engine announces successful logs on the signal; the panels
        // pick the change up on the next loop iteration.
        let panels_stale = Rc::new(Cell::new(false));
        let stale_flag = Rc::clone(&panels_stale);
        let subscription = updates.subscribe(move || stale_flag.set(true));

        let logger = Rc::new(SqliteSessionLogger::new(Rc::clone(&storage)));
        let engine = TimerEngine::new(
            config.timer.durations(),
            Rc::new(SystemClock),
            logger,
            Rc::new(QueuedNotifier::new(Rc::clone(&notices))),
            Rc::clone(&updates),
        );

        let mut app = Self {
            engine,
            ticker: Ticker::new(),
            recent: Vec::new(),
            today_minutes: 0,
            today_count: 0,
            status: None,
            should_quit: false,
            storage,
            updates,
            subscription,
            notices,
            panels_stale,
        };
        app.refresh_panels()?;
        Ok(app)
    }

    /// Start or pause the countdown.
    pub fn toggle_start(&mut self) {
        self.engine.toggle_start();
        self.sync_ticker();
    }

    /// Reset the current phase.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.sync_ticker();
    }

    /// Switch to another phase.
    pub fn switch_phase(&mut self, phase: Phase) {
        self.engine.switch_phase(phase);
        self.sync_ticker();
    }

    /// Log the running work session immediately.
    pub fn quick_complete(&mut self) {
        self.engine.quick_complete();
        self.sync_ticker();
    }

    /// Advance time-driven state for one loop iteration: deliver due
    /// ticks, surface queued notices, and refresh stale panels.
    ///
    /// # Errors
    ///
    /// Returns an error if panel data cannot be reloaded.
    pub fn advance(&mut self) -> Result<(), PomoError> {
        while self.ticker.due() {
            self.engine.tick();
        }
        // A completed countdown stops the engine; drop the ticker with it
        self.sync_ticker();

        while let Some(notice) = self.notices.borrow_mut().pop_front() {
            self.status = Some(notice);
        }

        if self.panels_stale.get() {
            self.panels_stale.set(false);
            self.refresh_panels()?;
        }

        Ok(())
    }

    /// Release the session-updated subscription.
    pub fn teardown(&self) {
        self.updates.unsubscribe(self.subscription);
    }

    /// Keep the ticker armed exactly while the engine runs.
    fn sync_ticker(&mut self) {
        if self.engine.is_running() {
            self.ticker.arm();
        } else {
            self.ticker.cancel();
        }
    }

    /// Reload the recent-sessions and today panels.
    fn refresh_panels(&mut self) -> Result<(), PomoError> {
        self.recent = self.storage.recent(RECENT_LIMIT)?;
        self.today_minutes = self.storage.today_total_minutes()?;
        self.today_count = self.storage.today_count()?;
        Ok(())
    }
}
