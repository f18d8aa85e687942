//! Engine state management.
//!
//! Holds the unit catalog and the orchestrator for the current match and
//! turns each host line into zero or one submissions. A match config line
//! (re)starts the match; turn-start frames are played and answered.

use std::io::Write;

use log::{debug, info};

use crate::config::{ConfigError, StrategyConfig, UnitCatalog};
use crate::protocol::{parse_message, FrameError, Message, Submission, TurnFrame};
use crate::strategy::{Orchestrator, TurnReport};

/// Errors that can occur while handling a host line.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("turn frame arrived before the match config")]
    NotConfigured,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write submission: {0}")]
    Io(#[from] std::io::Error),
}

/// Whether the main loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Finished,
}

struct Match {
    catalog: UnitCatalog,
    orchestrator: Orchestrator,
}

/// Holds the mutable state of the engine between lines.
pub struct Engine {
    strategy: StrategyConfig,
    seed: u64,
    current: Option<Match>,
    last_report: Option<TurnReport>,
}

impl Engine {
    /// Creates an engine that seeds every match's randomness from `seed`.
    pub fn new(strategy: StrategyConfig, seed: u64) -> Self {
        Engine {
            strategy,
            seed,
            current: None,
            last_report: None,
        }
    }

    /// Seed shared by every match this engine plays.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// True once a match config has been read.
    pub fn is_configured(&self) -> bool {
        self.current.is_some()
    }

    /// Report of the most recently played turn.
    pub fn last_report(&self) -> Option<&TurnReport> {
        self.last_report.as_ref()
    }

    /// Starts a fresh match from the host's config JSON.
    pub fn start_match(&mut self, json: &str) -> Result<(), ConfigError> {
        let catalog = UnitCatalog::from_match_config(json)?;
        info!("match configured, seed {}", self.seed);
        self.current = Some(Match {
            catalog,
            orchestrator: Orchestrator::new(self.strategy.clone(), self.seed),
        });
        self.last_report = None;
        Ok(())
    }

    /// Plays one turn-start frame and writes the submission.
    pub fn play_frame<W: Write>(
        &mut self,
        frame: &TurnFrame,
        out: &mut W,
    ) -> Result<TurnReport, EngineError> {
        let current = self.current.as_mut().ok_or(EngineError::NotConfigured)?;
        let mut state = frame.to_turn_state(&current.catalog);
        let report = current.orchestrator.play_turn(&mut state);
        Submission::from_state(&state)?.write_to(out)?;
        self.last_report = Some(report);
        Ok(report)
    }

    /// Handles one raw host line.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow, EngineError> {
        let Some(message) = parse_message(line)? else {
            return Ok(Flow::Continue);
        };
        match message {
            Message::MatchConfig { raw } => self.start_match(&raw)?,
            Message::TurnStart(frame) => {
                self.play_frame(&frame, out)?;
            }
            Message::Action => debug!("action frame skipped"),
            Message::EndOfGame => {
                info!("end of game");
                return Ok(Flow::Finished);
            }
        }
        Ok(Flow::Continue)
    }
}
