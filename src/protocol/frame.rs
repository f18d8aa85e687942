//! Turn-frame decoding.
//!
//! The host sends one JSON object per frame. Only our own half is read:
//! `turnInfo` for the phase and turn number, `p1Stats` for the balances,
//! and `p1Units` for the structures we own and which of them are
//! upgraded.

use serde::Deserialize;
use serde_json::Value;

use crate::board::{Cell, Occupant, UnitKind};
use crate::config::UnitCatalog;
use crate::host::TurnState;

/// Index of the upgraded-cells list in `p1Units`.
const UPGRADE_INDEX: usize = 7;

/// Errors that can occur while decoding a frame.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("invalid frame JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("frame is missing {0}")]
    MissingField(&'static str),

    #[error("unknown frame phase {0}")]
    UnknownPhase(i64),

    #[error("malformed unit entry: {0}")]
    MalformedUnit(String),
}

/// Which part of the round a frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePhase {
    TurnStart,
    Action,
    EndOfGame,
}

impl FramePhase {
    fn from_code(code: i64) -> Result<Self, FrameError> {
        match code {
            0 => Ok(FramePhase::TurnStart),
            1 => Ok(FramePhase::Action),
            2 => Ok(FramePhase::EndOfGame),
            other => Err(FrameError::UnknownPhase(other)),
        }
    }
}

/// A structure we own, as reported in a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportedStructure {
    pub kind: UnitKind,
    pub cell: Cell,
    pub health: f32,
}

/// Our view of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnFrame {
    pub phase: FramePhase,
    pub turn: u32,
    pub structure: u32,
    pub mobile: u32,
    pub structures: Vec<ReportedStructure>,
    pub upgraded: Vec<Cell>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFrame {
    turn_info: Vec<f64>,
    #[serde(default)]
    p1_stats: Vec<f64>,
    #[serde(default)]
    p1_units: Vec<Vec<Vec<Value>>>,
}

fn number(entry: &[Value], idx: usize) -> Option<f64> {
    entry.get(idx).and_then(Value::as_f64)
}

fn cell_of(entry: &[Value]) -> Result<Cell, FrameError> {
    match (number(entry, 0), number(entry, 1)) {
        (Some(x), Some(y)) => Ok(Cell::new(x as i32, y as i32)),
        _ => Err(FrameError::MalformedUnit(Value::from(entry.to_vec()).to_string())),
    }
}

/// Balances arrive as floats; fractional points cannot be spent.
fn points(stat: Option<&f64>) -> u32 {
    stat.map_or(0, |v| v.max(0.0).floor() as u32)
}

impl TurnFrame {
    /// Decodes one frame line.
    pub fn parse(json: &str) -> Result<Self, FrameError> {
        let raw: RawFrame = serde_json::from_str(json)?;
        let phase_code = raw
            .turn_info
            .first()
            .copied()
            .ok_or(FrameError::MissingField("turnInfo[0]"))?;
        let phase = FramePhase::from_code(phase_code as i64)?;
        let turn = raw
            .turn_info
            .get(1)
            .copied()
            .ok_or(FrameError::MissingField("turnInfo[1]"))?;
        let turn = turn.max(0.0) as u32;

        let mut structures = Vec::new();
        for (idx, group) in raw.p1_units.iter().enumerate() {
            let Some(kind) = UnitKind::from_index(idx).filter(|k| k.is_structure()) else {
                continue;
            };
            for entry in group {
                structures.push(ReportedStructure {
                    kind,
                    cell: cell_of(entry)?,
                    health: number(entry, 2).unwrap_or(0.0) as f32,
                });
            }
        }

        let upgraded = match raw.p1_units.get(UPGRADE_INDEX) {
            Some(group) => group
                .iter()
                .map(|entry| cell_of(entry))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(TurnFrame {
            phase,
            turn,
            structure: points(raw.p1_stats.get(1)),
            mobile: points(raw.p1_stats.get(2)),
            structures,
            upgraded,
        })
    }

    /// Builds the local turn model this frame describes.
    pub fn to_turn_state(&self, catalog: &UnitCatalog) -> TurnState {
        let mut state = TurnState::new(catalog.clone(), self.turn, self.structure, self.mobile);
        for s in &self.structures {
            state.place(s.cell, Occupant::new(s.kind, s.health));
        }
        for &cell in &self.upgraded {
            state.mark_upgraded(cell);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Currency;
    use crate::host::Host;

    const FRAME: &str = r#"{
        "turnInfo": [0, 4, -1, 0],
        "p1Stats": [30.0, 12.6, 7.9, 1500],
        "p2Stats": [30.0, 5.0, 5.0, 0],
        "p1Units": [
            [[0, 13, 120.0, "11"], [5, 13, 44.0, "12"]],
            [[13, 2, 30.0, "13"]],
            [[5, 12, 75.0, "14"]],
            [], [], [], [],
            [[0, 13, 120.0, "11"]]
        ],
        "p2Units": [[], [], [], [], [], [], [], []]
    }"#;

    #[test]
    fn parses_turn_start() {
        let frame = TurnFrame::parse(FRAME).unwrap();
        assert_eq!(frame.phase, FramePhase::TurnStart);
        assert_eq!(frame.turn, 4);
        assert_eq!(frame.structure, 12);
        assert_eq!(frame.mobile, 7);
        assert_eq!(frame.structures.len(), 4);
        assert_eq!(frame.structures[3].kind, UnitKind::Turret);
        assert_eq!(frame.upgraded, vec![Cell::new(0, 13)]);
    }

    #[test]
    fn builds_turn_state() {
        let frame = TurnFrame::parse(FRAME).unwrap();
        let state = frame.to_turn_state(&UnitCatalog::default());
        assert_eq!(state.turn(), 4);
        assert_eq!(state.balance(Currency::Structure), 12);
        let wall = state.occupant(Cell::new(0, 13)).unwrap();
        assert!(wall.upgraded);
        assert_eq!(wall.health, 120.0);
        let damaged = state.occupant(Cell::new(5, 13)).unwrap();
        assert!(!damaged.upgraded);
        assert_eq!(damaged.health, 44.0);
        assert_eq!(state.occupant(Cell::new(13, 2)).unwrap().kind, UnitKind::Factory);
    }

    #[test]
    fn action_and_end_frames() {
        let action = TurnFrame::parse(r#"{"turnInfo": [1, 4, 12, 0]}"#).unwrap();
        assert_eq!(action.phase, FramePhase::Action);
        assert!(action.structures.is_empty());
        let end = TurnFrame::parse(r#"{"turnInfo": [2, 40, 0, 0]}"#).unwrap();
        assert_eq!(end.phase, FramePhase::EndOfGame);
    }

    #[test]
    fn rejects_bad_frames() {
        assert!(matches!(
            TurnFrame::parse(r#"{"turnInfo": [7, 1]}"#),
            Err(FrameError::UnknownPhase(7))
        ));
        assert!(matches!(
            TurnFrame::parse(r#"{"turnInfo": []}"#),
            Err(FrameError::MissingField("turnInfo[0]"))
        ));
        assert!(matches!(
            TurnFrame::parse(r#"{"turnInfo": [0, 1], "p1Units": [[["a", 1]]]}"#),
            Err(FrameError::MalformedUnit(_))
        ));
        assert!(matches!(TurnFrame::parse("not json"), Err(FrameError::Json(_))));
    }
}
