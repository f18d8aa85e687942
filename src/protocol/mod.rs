//! Host protocol handling.
//!
//! Decodes the host's line-delimited JSON stream (match config, then one
//! frame per line) and encodes each turn's submission as a build stack
//! line followed by a deploy stack line.

pub mod frame;
pub mod parser;
pub mod submit;

pub use frame::{FrameError, FramePhase, ReportedStructure, TurnFrame};
pub use parser::{parse_message, Message};
pub use submit::{encode_stack, Submission};
