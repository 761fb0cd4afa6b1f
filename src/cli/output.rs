// Terminal rendering of game signals

use crate::game::events::{MessageCategory, Signal};
use crate::models::{LogEntry, Slot, StageDefinition, STAGE_COUNT};
use std::io::{self, IsTerminal, Write};

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_DIM: &str = "\x1b[2m";
const ANSI_RESET: &str = "\x1b[0m";

const ANSI_FG_RED: &str = "\x1b[31m";
const ANSI_FG_GREEN: &str = "\x1b[32m";
const ANSI_FG_CYAN: &str = "\x1b[36m";
const ANSI_FG_BRIGHT_BLACK: &str = "\x1b[90m";

const MAX_RULE_WIDTH: usize = 72;

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate, with fallback to the COLUMNS environment
/// variable and a sensible default.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    80
}

/// Convert a `#rrggbb` color to a 24-bit ANSI foreground sequence
fn hex_to_fg(hex: &str) -> Option<String> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(format!("\x1b[38;2;{};{};{}m", r, g, b))
}

fn category_color(category: MessageCategory) -> &'static str {
    match category {
        MessageCategory::Success => ANSI_FG_GREEN,
        MessageCategory::Error => ANSI_FG_RED,
        MessageCategory::Info => ANSI_FG_CYAN,
    }
}

/// Renderer-side view of the game, kept current by applying signals.
pub struct Renderer {
    color: bool,
    show_ticks: bool,
    echo_log: bool,
    components: Vec<StageDefinition>,
    slots: [Option<StageDefinition>; STAGE_COUNT],
    moves: u32,
    score: u32,
    validation_ready: bool,
    clock: String,
    message: Option<(String, MessageCategory)>,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            show_ticks: false,
            echo_log: false,
            components: Vec::new(),
            slots: [None; STAGE_COUNT],
            moves: 0,
            score: 0,
            validation_ready: false,
            clock: "00:00".to_string(),
            message: None,
        }
    }

    pub fn with_ticks(mut self, show_ticks: bool) -> Self {
        self.show_ticks = show_ticks;
        self
    }

    pub fn with_echo_log(mut self, echo_log: bool) -> Self {
        self.echo_log = echo_log;
        self
    }

    pub fn clock(&self) -> &str {
        &self.clock
    }

    pub fn visible_message(&self) -> Option<&(String, MessageCategory)> {
        self.message.as_ref()
    }

    pub fn validation_ready(&self) -> bool {
        self.validation_ready
    }

    /// Apply signals in order, printing whatever needs immediate attention
    pub fn apply<W: Write>(&mut self, signals: &[Signal], out: &mut W) -> io::Result<()> {
        for signal in signals {
            match signal {
                Signal::ComponentListChanged(list) => {
                    self.components = list.clone();
                    self.slots = [None; STAGE_COUNT];
                }
                Signal::SlotFilled(slot, stage) => {
                    self.slots[slot.index()] = Some(*stage);
                }
                Signal::MoveCountChanged(n) => self.moves = *n,
                Signal::ScoreChanged(score) => self.score = *score,
                Signal::ValidationReady(ready) => {
                    if *ready && !self.validation_ready {
                        writeln!(
                            out,
                            "{}",
                            self.paint(ANSI_BOLD, "All components placed. Type 'check' to validate your answer.")
                        )?;
                    }
                    self.validation_ready = *ready;
                }
                Signal::Message(text, category) => {
                    writeln!(out, "{}", self.paint(category_color(*category), text))?;
                    self.message = Some((text.clone(), *category));
                }
                Signal::MessageHidden => self.message = None,
                Signal::ClockTick(display) => {
                    self.clock = display.clone();
                    if self.show_ticks {
                        writeln!(out, "{}", self.paint(ANSI_FG_BRIGHT_BLACK, &format!("[{}]", display)))?;
                    }
                }
                Signal::LogAppended(entry) => {
                    if self.echo_log {
                        writeln!(out, "{}", self.paint(ANSI_DIM, &entry.format_line()))?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Print the component library and the pipeline steps
    pub fn render_board<W: Write>(&self, is_placed: impl Fn(&str) -> bool, out: &mut W) -> io::Result<()> {
        let rule = "-".repeat(get_terminal_width().clamp(20, MAX_RULE_WIDTH));

        writeln!(out, "{}", self.paint(ANSI_BOLD, "Components"))?;
        writeln!(out, "{}", rule)?;
        for stage in &self.components {
            let line = format!("  {:<14} {}: {}", stage.id, stage.title, stage.description);
            if is_placed(stage.id) {
                writeln!(out, "{}", self.paint(ANSI_DIM, &format!("{} (placed)", line)))?;
            } else {
                writeln!(out, "{}", self.paint_stage(stage, &line))?;
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", self.paint(ANSI_BOLD, "Pipeline"))?;
        writeln!(out, "{}", rule)?;
        for slot in Slot::all() {
            match &self.slots[slot.index()] {
                Some(stage) => {
                    let line = format!("  Step {}: {}", slot, stage.title);
                    writeln!(out, "{}", self.paint_stage(stage, &line))?;
                }
                None => writeln!(out, "  Step {}: {}", slot, self.paint(ANSI_FG_BRIGHT_BLACK, "(empty)"))?,
            }
        }
        Ok(())
    }

    /// Time, moves, score and whether checking is allowed, followed by the
    /// current message while it has not timed out
    pub fn render_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let check = if self.validation_ready { "ready" } else { "locked" };
        writeln!(
            out,
            "Time {} | Moves {} | Score {} | Check {}",
            self.clock, self.moves, self.score, check
        )?;
        if let Some((text, category)) = self.visible_message() {
            writeln!(out, "{}", self.paint(category_color(*category), text))?;
        }
        Ok(())
    }

    pub fn render_log<W: Write>(&self, entries: &[LogEntry], out: &mut W) -> io::Result<()> {
        for entry in entries {
            writeln!(out, "{}", entry.format_line())?;
        }
        Ok(())
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", code, text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }

    fn paint_stage(&self, stage: &StageDefinition, text: &str) -> String {
        match hex_to_fg(stage.color) {
            Some(code) if self.color => format!("{}{}{}", code, text, ANSI_RESET),
            _ => text.to_string(),
        }
    }
}

pub const HELP_TEXT: &str = "\
Commands (any unique prefix works, e.g. 'pl' for place):
  place <component> <step>   drag a component onto a pipeline step (1-7)
  grab <component>           start dragging a component
  drop <step>                drop the dragged component onto a step
  release                    stop dragging without dropping
  check                      validate your answer once all steps are filled
  reset                      start over with a new shuffle
  hint                       show a hint
  board                      show components and pipeline
  status                     show time, moves and score
  log [--json]               show the activity log
  help                       show this help
  quit                       leave the game";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog::{find_stage, CATALOG};
    use crate::models::LogEntry;

    fn render(renderer: &mut Renderer, signals: &[Signal]) -> String {
        let mut buf = Vec::new();
        renderer.apply(signals, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_hex_to_fg() {
        assert_eq!(hex_to_fg("#ffd700").as_deref(), Some("\x1b[38;2;255;215;0m"));
        assert_eq!(hex_to_fg("ffd700"), None);
        assert_eq!(hex_to_fg("#fff"), None);
    }

    #[test]
    fn test_messages_printed_plain_without_color() {
        let mut r = Renderer::new(false);
        let text = render(&mut r, &[Signal::Message("Great!".into(), MessageCategory::Success)]);
        assert_eq!(text, "Great!\n");
        assert!(r.visible_message().is_some());

        render(&mut r, &[Signal::MessageHidden]);
        assert!(r.visible_message().is_none());
    }

    #[test]
    fn test_messages_colored() {
        let mut r = Renderer::new(true);
        let text = render(&mut r, &[Signal::Message("No".into(), MessageCategory::Error)]);
        assert_eq!(text, "\x1b[31mNo\x1b[0m\n");
    }

    #[test]
    fn test_ticks_and_log_are_quiet_by_default() {
        let mut r = Renderer::new(false);
        let entry = LogEntry::new("Drag End", "Drag operation completed");
        let text = render(&mut r, &[Signal::ClockTick("00:07".into()), Signal::LogAppended(entry.clone())]);
        assert!(text.is_empty());
        assert_eq!(r.clock(), "00:07");

        let mut r = Renderer::new(false).with_ticks(true).with_echo_log(true);
        let text = render(&mut r, &[Signal::ClockTick("00:08".into()), Signal::LogAppended(entry)]);
        assert!(text.contains("[00:08]"));
        assert!(text.contains("Drag End: Drag operation completed"));
    }

    #[test]
    fn test_board_and_status() {
        let mut r = Renderer::new(false);
        let gold = *find_stage("gold").unwrap();
        let slot = Slot::new(5).unwrap();
        render(
            &mut r,
            &[
                Signal::ComponentListChanged(CATALOG.to_vec()),
                Signal::SlotFilled(slot, gold),
                Signal::MoveCountChanged(1),
            ],
        );

        let mut buf = Vec::new();
        r.render_board(|id| id == "gold", &mut buf).unwrap();
        let board = String::from_utf8(buf).unwrap();
        assert!(board.contains("Step 5: Gold Layer"));
        assert!(board.contains("Step 1: (empty)"));
        assert!(board.contains("Business-ready aggregated data (placed)"));

        let mut buf = Vec::new();
        r.render_status(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Time 00:00 | Moves 1 | Score 0 | Check locked\n");
    }

    #[test]
    fn test_status_shows_visible_message() {
        let mut r = Renderer::new(false);
        render(&mut r, &[Signal::Message("Place all 7 components first".into(), MessageCategory::Info)]);

        let mut buf = Vec::new();
        r.render_status(&mut buf).unwrap();
        let status = String::from_utf8(buf).unwrap();
        assert!(status.ends_with("Check locked\nPlace all 7 components first\n"));

        render(&mut r, &[Signal::MessageHidden]);
        let mut buf = Vec::new();
        r.render_status(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_ready_announced_once() {
        let mut r = Renderer::new(false);
        let text = render(&mut r, &[Signal::ValidationReady(true), Signal::ValidationReady(true)]);
        assert_eq!(text.matches("Type 'check'").count(), 1);
        assert!(r.validation_ready());
    }

    #[test]
    fn test_component_list_resets_slots() {
        let mut r = Renderer::new(false);
        let gold = *find_stage("gold").unwrap();
        render(&mut r, &[Signal::SlotFilled(Slot::new(1).unwrap(), gold)]);
        render(&mut r, &[Signal::ComponentListChanged(CATALOG.to_vec())]);

        let mut buf = Vec::new();
        r.render_board(|_| false, &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("Step 1: (empty)"));
    }
}
