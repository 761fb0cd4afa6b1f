//! Interactive game loop.
//!
//! Typed lines are parsed into [`PromptCommand`]s and translated into the
//! controller's drag/drop events. Input lines, clock ticks and end of input
//! all arrive on one channel and are handled strictly one at a time, so the
//! reader and ticker threads never touch game state.

use crate::cli::abbrev::expand_command_abbreviations;
use crate::cli::error::{validate_slot, validate_stage, CommandError};
use crate::cli::output::{Renderer, HELP_TEXT};
use crate::game::{Controller, Event};
use crate::models::Slot;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

/// A parsed prompt line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCommand {
    Place(&'static str, Slot),
    Grab(&'static str),
    Drop(Slot),
    Release,
    Check,
    Reset,
    Hint,
    Board,
    Status,
    Log { json: bool },
    Help,
    Quit,
}

/// Parse one prompt line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<PromptCommand>, CommandError> {
    let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    if tokens.is_empty() {
        return Ok(None);
    }
    let tokens = expand_command_abbreviations(tokens).map_err(CommandError::UnknownCommand)?;
    let args = &tokens[1..];

    let command = match tokens[0].as_str() {
        "place" => match args {
            [stage, slot] => PromptCommand::Place(validate_stage(stage)?.id, validate_slot(slot)?),
            _ => return Err(CommandError::Usage("place <component> <step>")),
        },
        "grab" => match args {
            [stage] => PromptCommand::Grab(validate_stage(stage)?.id),
            _ => return Err(CommandError::Usage("grab <component>")),
        },
        "drop" => match args {
            [slot] => PromptCommand::Drop(validate_slot(slot)?),
            _ => return Err(CommandError::Usage("drop <step>")),
        },
        "log" => match args {
            [] => PromptCommand::Log { json: false },
            [flag] if flag == "--json" => PromptCommand::Log { json: true },
            _ => return Err(CommandError::Usage("log [--json]")),
        },
        other => {
            if !args.is_empty() {
                return Err(CommandError::Usage(usage_for(other)));
            }
            match other {
                "release" => PromptCommand::Release,
                "check" => PromptCommand::Check,
                "reset" => PromptCommand::Reset,
                "hint" => PromptCommand::Hint,
                "board" => PromptCommand::Board,
                "status" => PromptCommand::Status,
                "help" => PromptCommand::Help,
                _ => PromptCommand::Quit,
            }
        }
    };
    Ok(Some(command))
}

fn usage_for(command: &str) -> &'static str {
    match command {
        "release" => "release",
        "check" => "check",
        "reset" => "reset",
        "hint" => "hint",
        "board" => "board",
        "status" => "status",
        "help" => "help",
        _ => "quit",
    }
}

/// What the loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything the loop can be woken up by
#[derive(Debug)]
pub enum AppEvent {
    Input(String),
    Tick,
    Eof,
}

/// Controller plus renderer bound to an output stream
pub struct App<W: Write> {
    controller: Controller,
    renderer: Renderer,
    out: W,
}

impl<W: Write> App<W> {
    pub fn new(controller: Controller, renderer: Renderer, out: W) -> Self {
        Self { controller, renderer, out }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Initialize the game and show the opening board
    pub fn start(&mut self) -> Result<()> {
        let signals = self.controller.start();
        self.renderer.apply(&signals, &mut self.out)?;
        writeln!(self.out, "IoT Pipeline Game: put the seven components in pipeline order.")?;
        writeln!(self.out, "Type 'help' for commands.")?;
        writeln!(self.out)?;
        self.show_board()?;
        self.prompt()
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return self.prompt().map(|_| Flow::Continue),
            Err(err) => {
                log::debug!("Rejected prompt line '{}': {}", line.trim(), err);
                writeln!(self.out, "Error: {}", err)?;
                return self.prompt().map(|_| Flow::Continue);
            }
        };

        match command {
            PromptCommand::Place(stage, slot) => {
                self.dispatch(Event::DragStart(stage.to_string()))?;
                self.dispatch(Event::DropAttempt(stage.to_string(), slot))?;
                self.dispatch(Event::DragEnd)?;
            }
            PromptCommand::Grab(stage) => {
                if let Some(held) = self.controller.dragging() {
                    self.dispatch(Event::DragEnd)?;
                    log::debug!("Released {} to grab {}", held, stage);
                }
                self.dispatch(Event::DragStart(stage.to_string()))?;
                writeln!(self.out, "Holding {}. Use 'drop <step>' to place it.", stage)?;
            }
            PromptCommand::Drop(slot) => match self.controller.dragging() {
                Some(stage) => {
                    self.dispatch(Event::DropAttempt(stage.to_string(), slot))?;
                    self.dispatch(Event::DragEnd)?;
                }
                None => writeln!(self.out, "Error: {}", CommandError::NothingHeld)?,
            },
            PromptCommand::Release => self.dispatch(Event::DragEnd)?,
            PromptCommand::Check => self.dispatch(Event::RequestValidate)?,
            PromptCommand::Reset => {
                self.dispatch(Event::RequestReset)?;
                writeln!(self.out, "New game started.")?;
                self.show_board()?;
            }
            PromptCommand::Hint => self.dispatch(Event::RequestHint)?,
            PromptCommand::Board => self.show_board()?,
            PromptCommand::Status => {
                // Refresh the clock from the session start before showing it
                self.dispatch(Event::Tick)?;
                self.renderer.render_status(&mut self.out)?;
            }
            PromptCommand::Log { json } => {
                let entries = self.controller.activity_log().entries();
                if json {
                    let text = serde_json::to_string_pretty(entries)
                        .context("Failed to serialize activity log")?;
                    writeln!(self.out, "{}", text)?;
                } else {
                    self.renderer.render_log(entries, &mut self.out)?;
                }
            }
            PromptCommand::Help => writeln!(self.out, "{}", HELP_TEXT)?,
            PromptCommand::Quit => return Ok(Flow::Quit),
        }

        self.prompt()?;
        Ok(Flow::Continue)
    }

    pub fn handle_tick(&mut self) -> Result<()> {
        self.dispatch(Event::Tick)
    }

    /// Stop the clock and print a goodbye line
    pub fn finish(mut self) -> Result<W> {
        self.controller.shutdown();
        let session = self.controller.session();
        writeln!(
            self.out,
            "Goodbye! Moves: {}, Score: {}, Log entries: {}",
            session.move_count,
            session.score,
            self.controller.activity_log().len()
        )?;
        self.out.flush()?;
        Ok(self.out)
    }

    fn dispatch(&mut self, event: Event) -> Result<()> {
        let signals = self.controller.handle(event);
        self.renderer.apply(&signals, &mut self.out)?;
        Ok(())
    }

    fn show_board(&mut self) -> Result<()> {
        let placements = &self.controller.session().placements;
        self.renderer.render_board(|id| placements.contains_stage(id), &mut self.out)?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Forward input lines to the loop from a background thread
pub fn spawn_reader<R: BufRead + Send + 'static>(input: R, tx: Sender<AppEvent>) {
    thread::spawn(move || {
        for line in input.lines() {
            match line {
                Ok(line) => {
                    if tx.send(AppEvent::Input(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    log::warn!("Failed to read input: {}", err);
                    break;
                }
            }
        }
        let _ = tx.send(AppEvent::Eof);
    });
}

/// Dispatch events until the player quits or input ends
pub fn run_loop<W: Write>(mut app: App<W>, rx: Receiver<AppEvent>) -> Result<W> {
    app.start()?;
    while let Ok(event) = rx.recv() {
        match event {
            AppEvent::Input(line) => {
                if app.handle_line(&line)? == Flow::Quit {
                    break;
                }
            }
            AppEvent::Tick => app.handle_tick()?,
            AppEvent::Eof => {
                writeln!(app.out)?;
                break;
            }
        }
    }
    app.finish()
}
