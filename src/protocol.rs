//! Boundary codec between outer surfaces and the engine
//!
//! Boards arrive as a JSON array, a JSON-encoded string holding an array, or
//! a comma-separated list, always with exactly N² entries from {0, 1, 2}.
//! Everything is validated here; the engine itself never sees malformed
//! input. Responses keep the field names existing clients already read
//! (`ganador`, `movimiento`, `jugador`, `error`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::board::{Board, Stone};
use crate::engine::Engine;
use crate::error::BoardError;
use crate::rules::Outcome;

/// Board as it appears in a request body: either a real array or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BoardInput {
    Cells(Vec<Value>),
    Text(String),
}

impl BoardInput {
    pub fn decode(&self, size: usize) -> Result<Board, BoardError> {
        match self {
            BoardInput::Cells(items) => decode_values(items, size),
            BoardInput::Text(text) => parse_board(text, size),
        }
    }
}

/// Body of a move request. A missing or zero `player` is inferred from the board.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveRequest {
    pub board: BoardInput,
    #[serde(default)]
    pub player: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResponse {
    /// `null` while the game goes on, 0 for a draw, else the winner's code
    #[serde(rename = "ganador")]
    pub winner: Option<u8>,
}

impl CheckResponse {
    pub fn from_outcome(outcome: Option<Outcome>) -> Self {
        Self {
            winner: outcome.map(Outcome::code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Cell index, or -1 when the board is full
    #[serde(rename = "movimiento")]
    pub cell: i64,
}

impl MoveResponse {
    pub fn from_move(best_move: Option<usize>) -> Self {
        Self {
            cell: best_move.map_or(-1, |idx| idx as i64),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResponse {
    #[serde(rename = "jugador")]
    pub player: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&BoardError> for ErrorResponse {
    fn from(err: &BoardError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

fn decode_value(index: usize, value: &Value) -> Result<i64, BoardError> {
    value.as_i64().ok_or_else(|| BoardError::InvalidCell {
        index,
        value: value.to_string(),
    })
}

fn decode_values(items: &[Value], size: usize) -> Result<Board, BoardError> {
    let codes = items
        .iter()
        .enumerate()
        .map(|(i, v)| decode_value(i, v))
        .collect::<Result<Vec<_>, _>>()?;
    Board::from_codes(size, &codes)
}

fn decode_comma_list(text: &str, size: usize) -> Result<Board, BoardError> {
    let codes = text
        .split(',')
        .enumerate()
        .map(|(index, piece)| {
            let piece = piece.trim();
            piece.parse::<i64>().map_err(|_| BoardError::InvalidCell {
                index,
                value: piece.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Board::from_codes(size, &codes)
}

/// Parse a board of side `size` from text.
///
/// JSON is tried first (an array, or a string wrapping one); anything that
/// is not JSON is read as a comma-separated list.
pub fn parse_board(text: &str, size: usize) -> Result<Board, BoardError> {
    let text = text.trim();
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => decode_values(&items, size),
        Ok(Value::String(inner)) => parse_board(&inner, size),
        // A lone number is a one-entry list
        Ok(Value::Number(_)) => decode_comma_list(text, size),
        Ok(other) => Err(BoardError::Malformed(format!(
            "expected an array of {} cells, got {other}",
            size * size
        ))),
        Err(_) => decode_comma_list(text, size),
    }
}

/// Parse an explicit player id: `1` for X, `2` for O.
pub fn parse_player(text: &str) -> Result<Stone, BoardError> {
    match text.trim() {
        "1" => Ok(Stone::X),
        "2" => Ok(Stone::O),
        other => Err(BoardError::InvalidPlayer(other.to_string())),
    }
}

/// Player field of a request body.
///
/// `null`, `0`, `""` and `false` mean "not given". Numbers and numeric
/// strings 1 and 2 select a player; anything else is rejected.
pub fn player_from_value(value: Option<&Value>) -> Result<Option<Stone>, BoardError> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Number(n)) if n.as_i64() == Some(0) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() || s.trim() == "0" => Ok(None),
        Some(Value::Number(n)) => parse_player(&n.to_string()).map(Some),
        Some(Value::String(s)) => parse_player(s).map(Some),
        Some(other) => Err(BoardError::InvalidPlayer(other.to_string())),
    }
}

/// Answer a winner query for a raw board.
pub fn respond_check(engine: &Engine, board_text: &str) -> Result<CheckResponse, BoardError> {
    let board = parse_board(board_text, engine.config().board_size)?;
    Ok(CheckResponse::from_outcome(engine.check_winner(&board)))
}

/// Answer a turn query for a raw board.
pub fn respond_player(engine: &Engine, board_text: &str) -> Result<PlayerResponse, BoardError> {
    let board = parse_board(board_text, engine.config().board_size)?;
    Ok(PlayerResponse {
        player: engine.detect_player(&board).code(),
    })
}

/// Answer a move query; `player` falls back to the inferred turn.
pub fn respond_move(
    engine: &mut Engine,
    board_text: &str,
    player: Option<Stone>,
) -> Result<MoveResponse, BoardError> {
    let board = parse_board(board_text, engine.config().board_size)?;
    let player = player.unwrap_or_else(|| engine.detect_player(&board));
    Ok(MoveResponse::from_move(engine.get_move(&board, player)))
}

/// Answer a JSON move request body.
pub fn respond_move_request(engine: &mut Engine, body: &str) -> Result<MoveResponse, BoardError> {
    let request: MoveRequest =
        serde_json::from_str(body).map_err(|e| BoardError::Malformed(e.to_string()))?;
    let board = request.board.decode(engine.config().board_size)?;
    let player = player_from_value(request.player.as_ref())?
        .unwrap_or_else(|| engine.detect_player(&board));
    Ok(MoveResponse::from_move(engine.get_move(&board, player)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    const NEAR_WIN: &str = "2,1,1,1,2, 1,2,0,1,2, 2,1,0,2,1, 1,1,2,2,2, 2,1,1,2,0";

    #[test]
    fn test_three_encodings_agree() {
        let list = "1,0,0,0,0,0,2,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0";
        let array = "[1,0,0,0,0,0,2,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0]";
        let quoted = "\"[1,0,0,0,0,0,2,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0]\"";

        let a = parse_board(list, 5).unwrap();
        let b = parse_board(array, 5).unwrap();
        let c = parse_board(quoted, 5).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.get_index(0), Stone::X);
        assert_eq!(a.get_index(6), Stone::O);
    }

    #[test]
    fn test_wrong_length_rejected_with_wire_message() {
        let err = parse_board("[0,0,0]", 5).unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidLength {
                expected: 25,
                actual: 3
            }
        );
        assert_eq!(
            ErrorResponse::from(&err).error,
            "El tablero debe tener 25 posiciones."
        );
        assert!(parse_board("1", 5).is_err());
    }

    #[test]
    fn test_bad_cells_rejected() {
        let mut cells = vec!["0"; 25];
        cells[3] = "x";
        let err = parse_board(&cells.join(","), 5).unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidCell {
                index: 3,
                value: "x".to_string()
            }
        );

        cells[3] = "3";
        assert!(matches!(
            parse_board(&cells.join(","), 5),
            Err(BoardError::InvalidCell { index: 3, .. })
        ));

        let with_string = format!("[\"1\"{}]", ",0".repeat(24));
        assert!(matches!(
            parse_board(&with_string, 5),
            Err(BoardError::InvalidCell { index: 0, .. })
        ));

        assert!(matches!(parse_board("{}", 5), Err(BoardError::Malformed(_))));
    }

    #[test]
    fn test_parse_player() {
        assert_eq!(parse_player("1").unwrap(), Stone::X);
        assert_eq!(parse_player(" 2 ").unwrap(), Stone::O);
        assert!(parse_player("0").is_err());
        assert!(parse_player("3").is_err());
    }

    #[test]
    fn test_player_from_value() {
        assert_eq!(player_from_value(None).unwrap(), None);
        assert_eq!(player_from_value(Some(&Value::Null)).unwrap(), None);
        assert_eq!(player_from_value(Some(&serde_json::json!(0))).unwrap(), None);
        assert_eq!(player_from_value(Some(&serde_json::json!(2))).unwrap(), Some(Stone::O));
        assert_eq!(player_from_value(Some(&serde_json::json!("1"))).unwrap(), Some(Stone::X));
        assert!(player_from_value(Some(&serde_json::json!(5))).is_err());
        assert!(player_from_value(Some(&serde_json::json!([1]))).is_err());
    }

    #[test]
    fn test_response_wire_format() {
        let ongoing = serde_json::to_string(&CheckResponse::from_outcome(None)).unwrap();
        assert_eq!(ongoing, r#"{"ganador":null}"#);

        let draw = serde_json::to_string(&CheckResponse::from_outcome(Some(Outcome::Draw))).unwrap();
        assert_eq!(draw, r#"{"ganador":0}"#);

        let win = CheckResponse::from_outcome(Some(Outcome::Win(Stone::O)));
        assert_eq!(serde_json::to_string(&win).unwrap(), r#"{"ganador":2}"#);

        let none = serde_json::to_string(&MoveResponse::from_move(None)).unwrap();
        assert_eq!(none, r#"{"movimiento":-1}"#);

        let player = serde_json::to_string(&PlayerResponse { player: 1 }).unwrap();
        assert_eq!(player, r#"{"jugador":1}"#);
    }

    #[test]
    fn test_respond_check_and_player() {
        let engine = Engine::new();
        let row = "1,1,1,1,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0";
        assert_eq!(respond_check(&engine, row).unwrap().winner, Some(1));

        let start = "[1,2,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0]";
        assert_eq!(respond_player(&engine, start).unwrap().player, 2);
    }

    #[test]
    fn test_respond_move_infers_player() {
        // 11 X and 11 O, so X is inferred
        let mut engine = Engine::new();
        let response = respond_move(&mut engine, NEAR_WIN, None).unwrap();
        assert_eq!(response.cell, 7);
    }

    #[test]
    fn test_respond_move_request_body() {
        let mut engine = Engine::with_config(EngineConfig::default());
        let body = format!(r#"{{"board": "{}", "player": 1}}"#, NEAR_WIN.replace(' ', ""));
        assert_eq!(respond_move_request(&mut engine, &body).unwrap().cell, 7);

        let body = r#"{"board": [1,1,2,2,1,2,2,1,1,2,1,1,2,2,1,2,2,1,1,2,1,1,2,2,1]}"#;
        assert_eq!(respond_move_request(&mut engine, body).unwrap().cell, -1);

        let bad = r#"{"board": [0,0], "player": 1}"#;
        assert!(matches!(
            respond_move_request(&mut engine, bad),
            Err(BoardError::InvalidLength { .. })
        ));

        assert!(matches!(
            respond_move_request(&mut engine, "not json"),
            Err(BoardError::Malformed(_))
        ));
    }
}
