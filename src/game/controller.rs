//! Interaction controller.
//!
//! Every inbound [`Event`] goes through [`Controller::handle`], which mutates
//! the current [`GameSession`] and returns the [`Signal`]s the renderer should
//! apply, in order. Handlers run one at a time and always leave the placement
//! map consistent before returning.
//!
//! Per stage the lifecycle is `Available -> Placed`, per slot `Empty ->
//! Occupied`. Neither ever goes back except through a full reset, which
//! replaces the session wholesale.

use crate::error::{PlacementError, ValidationError};
use crate::game::activity::ActivityLog;
use crate::game::catalog::{find_stage, CATALOG, HINT};
use crate::game::clock::{format_elapsed, Clock, TickCallback, Ticker};
use crate::game::events::{Event, MessageCategory, Signal};
use crate::game::scoring::{self, ScoreReport};
use crate::game::shuffle::shuffle;
use crate::models::{GameSession, Slot, STAGE_COUNT};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use std::sync::Arc;

/// Default delay before a shown message is hidden again
pub const DEFAULT_MESSAGE_TIMEOUT_SECS: i64 = 5;

pub struct Controller {
    session: GameSession,
    log: ActivityLog,
    rng: StdRng,
    clock: Arc<dyn Clock>,
    ticker: Option<(std::time::Duration, TickCallback)>,
    message_timeout: Duration,
    message_shown_at: Option<DateTime<Utc>>,
    dragging: Option<&'static str>,
    last_report: Option<ScoreReport>,
}

impl Controller {
    /// Create a controller. Nothing is logged or shuffled until `start`.
    pub fn new(clock: Arc<dyn Clock>, rng: StdRng) -> Self {
        let session = GameSession::new(clock.now(), CATALOG.to_vec());
        Self {
            session,
            log: ActivityLog::new(),
            rng,
            clock,
            ticker: None,
            message_timeout: Duration::seconds(DEFAULT_MESSAGE_TIMEOUT_SECS),
            message_shown_at: None,
            dragging: None,
            last_report: None,
        }
    }

    /// Run `on_tick` every `period` while a session is live
    pub fn with_ticker(mut self, period: std::time::Duration, on_tick: TickCallback) -> Self {
        self.ticker = Some((period, on_tick));
        self
    }

    pub fn with_message_timeout(mut self, timeout: Duration) -> Self {
        self.message_timeout = timeout;
        self
    }

    /// Initialize the first game
    pub fn start(&mut self) -> Vec<Signal> {
        let mut out = Vec::new();
        self.record(&mut out, "Game Initialization", "Starting IoT Pipeline Game");
        self.begin_session(&mut out);
        self.record(&mut out, "Game Initialization", "Game setup completed successfully");
        out
    }

    /// Dispatch one inbound event
    pub fn handle(&mut self, event: Event) -> Vec<Signal> {
        let mut out = Vec::new();
        match event {
            Event::DragStart(stage_id) => self.drag_start(&stage_id, &mut out),
            Event::DragEnd => self.drag_end(&mut out),
            Event::DropAttempt(stage_id, slot) => {
                // Rejections are already reported through the message channel
                let _ = self.attempt_place(&stage_id, slot, &mut out);
            }
            Event::RequestValidate => {
                let _ = self.validate(&mut out);
            }
            Event::RequestReset => self.reset(&mut out),
            Event::RequestHint => self.hint(&mut out),
            Event::Tick => self.tick(&mut out),
        }
        out
    }

    /// Cancel the session clock; used on teardown
    pub fn shutdown(&mut self) {
        self.session.stop_clock();
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn activity_log(&self) -> &ActivityLog {
        &self.log
    }

    /// Stage currently being dragged, if any
    pub fn dragging(&self) -> Option<&'static str> {
        self.dragging
    }

    pub fn last_report(&self) -> Option<&ScoreReport> {
        self.last_report.as_ref()
    }

    /// Time since the current session started
    pub fn elapsed(&self) -> Duration {
        self.clock.now() - self.session.start_time
    }

    fn begin_session(&mut self, out: &mut Vec<Signal>) {
        self.record(out, "Component Shuffling", "Shuffling component order for new game");
        let order = shuffle(&CATALOG, &mut self.rng);
        let order_ids: Vec<&str> = order.iter().map(|s| s.id).collect();
        self.record(
            out,
            "Component Shuffling",
            &format!("Components shuffled. New order: {}", order_ids.join(", ")),
        );

        self.session.stop_clock();
        self.session = GameSession::new(self.clock.now(), order);
        self.dragging = None;
        self.last_report = None;

        out.push(Signal::ComponentListChanged(self.session.presentation_order.clone()));
        self.record(out, "Component Rendering", "All components rendered in component library");
        self.record(out, "Pipeline Rendering", "Pipeline steps created with drop zones");

        self.start_clock(out);
    }

    fn start_clock(&mut self, out: &mut Vec<Signal>) {
        if let Some((period, on_tick)) = &self.ticker {
            self.session.attach_ticker(Ticker::spawn(*period, Arc::clone(on_tick)));
        }
        let details = format!("Game timer started (session {})", self.session.short_id());
        self.record(out, "Timer Start", &details);
    }

    fn drag_start(&mut self, stage_id: &str, out: &mut Vec<Signal>) {
        match find_stage(stage_id) {
            Some(stage) => {
                self.dragging = Some(stage.id);
                self.record(
                    out,
                    "Drag Start",
                    &format!("Started dragging component: {}", stage.title),
                );
            }
            None => {
                let err = PlacementError::UnknownStage(stage_id.to_string());
                self.record(out, "Drag Rejected", &err.to_string());
                self.show_message(out, err.user_message(), MessageCategory::Error);
            }
        }
    }

    fn drag_end(&mut self, out: &mut Vec<Signal>) {
        self.dragging = None;
        self.record(out, "Drag End", "Drag operation completed");
    }

    /// Try to place a stage into a slot
    fn attempt_place(
        &mut self,
        stage_id: &str,
        slot: Slot,
        out: &mut Vec<Signal>,
    ) -> Result<(), PlacementError> {
        let result = match find_stage(stage_id) {
            Some(stage) => self.session.placements.insert(stage, slot).map(|_| stage),
            None => Err(PlacementError::UnknownStage(stage_id.to_string())),
        };

        let stage = match result {
            Ok(stage) => stage,
            Err(err) => {
                self.record(out, "Drop Rejected", &err.to_string());
                self.show_message(out, err.user_message(), MessageCategory::Error);
                return Err(err);
            }
        };

        self.session.move_count += 1;
        out.push(Signal::SlotFilled(slot, *stage));
        out.push(Signal::MoveCountChanged(self.session.move_count));
        self.record(
            out,
            "Component Placement",
            &format!("Component {} placed at position {}", stage.title, slot),
        );
        self.show_message(
            out,
            format!("Great! {} placed at Step {}", stage.title, slot),
            MessageCategory::Success,
        );

        if self.session.placements.is_full() && !self.session.validation_ready {
            self.record(out, "Game Completion Check", "Checking if all components are placed");
            self.record(out, "Game Completion", "All components placed, ready for validation");
            self.session.validation_ready = true;
            out.push(Signal::ValidationReady(true));
        }
        Ok(())
    }

    /// Score the answer.
    ///
    /// Refused until every slot is filled, and refused again once the session
    /// has been scored.
    fn validate(&mut self, out: &mut Vec<Signal>) -> Result<ScoreReport, ValidationError> {
        self.record(out, "Answer Validation", "Starting answer validation process");

        let refusal = if self.session.completed {
            Some(ValidationError::AlreadyCompleted)
        } else if !self.session.placements.is_full() {
            Some(ValidationError::Incomplete { placed: self.session.placements.len() })
        } else {
            None
        };
        if let Some(err) = refusal {
            self.record(out, "Validation Rejected", &err.to_string());
            self.show_message(out, err.user_message(), MessageCategory::Info);
            return Err(err);
        }

        let report = scoring::score(&CATALOG, &self.session.placements, self.elapsed());
        self.session.score = report.total_score;
        self.session.completed = true;

        out.push(Signal::ScoreChanged(report.total_score));
        out.push(Signal::ValidationReady(false));

        self.show_message(out, report.message(), report.tier.category());
        self.record(
            out,
            "Game Results",
            &format!(
                "Accuracy: {}%, Score: {}, Time Bonus: {}",
                report.accuracy, report.total_score, report.time_bonus
            ),
        );
        self.record(
            out,
            "Answer Validation Complete",
            &format!(
                "Score: {}, Correct: {}/{}, Time Bonus: {}",
                report.total_score, report.correct_count, STAGE_COUNT, report.time_bonus
            ),
        );

        self.last_report = Some(report.clone());
        Ok(report)
    }

    fn hint(&mut self, out: &mut Vec<Signal>) {
        self.record(out, "Hint Requested", "User requested a hint");
        self.show_message(out, HINT.to_string(), MessageCategory::Info);
    }

    fn reset(&mut self, out: &mut Vec<Signal>) {
        self.record(out, "Game Reset", "Resetting game to initial state");

        self.begin_session(out);
        out.push(Signal::MoveCountChanged(0));
        out.push(Signal::ScoreChanged(0));
        out.push(Signal::ValidationReady(false));
        self.hide_message(out);

        self.record(out, "Game Reset", "Game successfully reset and ready for new play");
    }

    /// Clock display refresh. Reads the start time only; never touches
    /// placements or score.
    fn tick(&mut self, out: &mut Vec<Signal>) {
        let now = self.clock.now();
        out.push(Signal::ClockTick(format_elapsed(now - self.session.start_time)));

        if let Some(shown_at) = self.message_shown_at {
            if now - shown_at >= self.message_timeout {
                self.hide_message(out);
            }
        }
    }

    fn show_message(&mut self, out: &mut Vec<Signal>, text: String, category: MessageCategory) {
        self.message_shown_at = Some(self.clock.now());
        self.record(
            out,
            "Message Display",
            &format!("Showing {} message: {}", category.as_str(), text),
        );
        out.push(Signal::Message(text, category));
    }

    fn hide_message(&mut self, out: &mut Vec<Signal>) {
        if self.message_shown_at.take().is_some() {
            self.record(out, "Message Hidden", "Message cleared");
        }
        out.push(Signal::MessageHidden);
    }

    fn record(&mut self, out: &mut Vec<Signal>, action: &str, details: &str) {
        let entry = self.log.append(action, details).clone();
        out.push(Signal::LogAppended(entry));
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.shutdown();
    }
}
