use crate::game::clock::Ticker;
use crate::models::{Placements, StageDefinition};
use chrono::{DateTime, Utc};

/// Game session model
///
/// One live value per game. A reset builds a fresh session instead of
/// clearing fields on the old one; the session owns the only running clock
/// ticker, which is cancelled when the session is stopped or dropped.
#[derive(Debug)]
pub struct GameSession {
    pub id: String,
    pub score: u32,
    pub start_time: DateTime<Utc>,
    pub move_count: u32,
    pub completed: bool,
    pub presentation_order: Vec<StageDefinition>,
    pub placements: Placements,
    /// Set once the completion signal has fired for this session
    pub validation_ready: bool,
    ticker: Option<Ticker>,
}

impl GameSession {
    /// Create a new session starting at `start_time`
    pub fn new(start_time: DateTime<Utc>, presentation_order: Vec<StageDefinition>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            score: 0,
            start_time,
            move_count: 0,
            completed: false,
            presentation_order,
            placements: Placements::new(),
            validation_ready: false,
            ticker: None,
        }
    }

    /// Attach the session's clock ticker, cancelling any previous one
    pub fn attach_ticker(&mut self, ticker: Ticker) {
        self.stop_clock();
        self.ticker = Some(ticker);
    }

    pub fn stop_clock(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    pub fn has_ticker(&self) -> bool {
        self.ticker.is_some()
    }

    /// Short form of the session id for log lines
    pub fn short_id(&self) -> &str {
        &self.id[..8]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog::CATALOG;

    #[test]
    fn test_session_creation() {
        let now = Utc::now();
        let session = GameSession::new(now, CATALOG.to_vec());
        assert_eq!(session.score, 0);
        assert_eq!(session.move_count, 0);
        assert!(!session.completed);
        assert!(!session.validation_ready);
        assert!(session.placements.is_empty());
        assert_eq!(session.start_time, now);
        assert_eq!(session.presentation_order.len(), 7);
        assert!(!session.has_ticker());
        assert_eq!(session.short_id().len(), 8);
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let a = GameSession::new(Utc::now(), Vec::new());
        let b = GameSession::new(Utc::now(), Vec::new());
        assert_ne!(a.id, b.id);
    }
}
