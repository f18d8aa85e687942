//! Host message parser.
//!
//! Classifies incoming lines into `Message` variants that the engine main
//! loop can dispatch on. The first line of a match is the config; every
//! later line is a frame.

use super::frame::{FrameError, FramePhase, TurnFrame};

/// Key that marks the match config line.
const CONFIG_MARKER: &str = "unitInformation";

/// A parsed host-to-bot message.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Match config JSON, read once per match.
    MatchConfig { raw: String },

    /// Start of a turn; the bot must answer with a submission.
    TurnStart(TurnFrame),

    /// Mid-turn replay frame. Carries nothing the bot acts on.
    Action,

    /// Match is over.
    EndOfGame,
}

/// Parses a single line into a `Message`.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_message(line: &str) -> Result<Option<Message>, FrameError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.contains(CONFIG_MARKER) {
        return Ok(Some(Message::MatchConfig {
            raw: trimmed.to_string(),
        }));
    }

    let frame = TurnFrame::parse(trimmed)?;
    let message = match frame.phase {
        FramePhase::TurnStart => Message::TurnStart(frame),
        FramePhase::Action => Message::Action,
        FramePhase::EndOfGame => Message::EndOfGame,
    };
    Ok(Some(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_message("").unwrap(), None);
        assert_eq!(parse_message("  \t").unwrap(), None);
    }

    #[test]
    fn config_line_is_kept_raw() {
        let line = r#"{"unitInformation": []}"#;
        assert_eq!(
            parse_message(line).unwrap(),
            Some(Message::MatchConfig {
                raw: line.to_string()
            })
        );
    }

    #[test]
    fn frames_by_phase() {
        let start = parse_message(r#"{"turnInfo": [0, 5, -1, 0], "p1Stats": [30, 8, 3, 0]}"#)
            .unwrap()
            .unwrap();
        let Message::TurnStart(frame) = start else {
            panic!("expected a turn start, got {:?}", start);
        };
        assert_eq!(frame.turn, 5);
        assert_eq!(frame.structure, 8);

        assert_eq!(
            parse_message(r#"{"turnInfo": [1, 5, 3, 0]}"#).unwrap(),
            Some(Message::Action)
        );
        assert_eq!(
            parse_message(r#"{"turnInfo": [2, 5, 0, 0]}"#).unwrap(),
            Some(Message::EndOfGame)
        );
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(parse_message("{not json").is_err());
    }
}
