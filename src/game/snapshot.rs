// Copyright 2026 Tobin Edwards
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

//! The serializable boundary between the engine and its collaborators.
//!
//! A `Snapshot` is a piece list plus a turn marker, the whole contract
//! with the persistence layer. The collaborator picks the storage
//! encoding; these types only carry serde derives.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{ChessGame, FinishReason, GameState};
use crate::board::{Board, Color, Material, Piece, Position};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PieceRecord {
    pub color: Color,
    pub piece: Piece,
    pub position: Position,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TurnMarker {
    Black,
    White,
    Finished { reason: FinishReason },
}

impl From<GameState> for TurnMarker {
    fn from(state: GameState) -> Self {
        match state {
            GameState::BlackTurn => Self::Black,
            GameState::WhiteTurn => Self::White,
            GameState::Finished(reason) => Self::Finished { reason },
        }
    }
}

impl From<TurnMarker> for GameState {
    fn from(marker: TurnMarker) -> Self {
        match marker {
            TurnMarker::Black => Self::BlackTurn,
            TurnMarker::White => Self::WhiteTurn,
            TurnMarker::Finished { reason } => Self::Finished(reason),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub pieces: Vec<PieceRecord>,
    pub turn: TurnMarker,
}

impl ChessGame {
    /// Reconstructs a game from a persisted snapshot. Fails if the
    /// piece list places anything off the board or doubles up a
    /// square.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self> {
        let board = Board::from_pieces(
            snapshot
                .pieces
                .iter()
                .map(|r| (r.position, Material::new(r.color, r.piece))),
        )?;
        Ok(Self::from_parts(board, snapshot.turn.into()))
    }

    /// The current game as a snapshot, pieces in board order (a1
    /// through h8) so repeated serializations compare equal.
    pub fn snapshot(&self) -> Snapshot {
        let mut pieces: Vec<_> = self.board().pieces().collect();
        pieces.sort_by_key(|(pos, _)| *pos);
        Snapshot {
            pieces: pieces
                .into_iter()
                .map(|(position, material)| PieceRecord {
                    color: material.color(),
                    piece: material.piece(),
                    position,
                })
                .collect(),
            turn: self.state().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn at(name: &str) -> Position {
        Position::try_from_str(name).unwrap()
    }

    #[test]
    fn test_snapshot_of_fresh_game() {
        let snapshot = ChessGame::new().snapshot();
        assert_eq!(snapshot.pieces.len(), 32);
        assert_eq!(snapshot.turn, TurnMarker::Black);
    }

    #[test]
    fn test_round_trip_preserves_play() {
        let mut game = ChessGame::new();
        game.move_notation("b2", "b4").unwrap();
        game.move_notation("g8", "f6").unwrap();

        let restored = ChessGame::from_snapshot(&game.snapshot()).unwrap();
        assert_eq!(restored.state(), GameState::BlackTurn);
        assert_eq!(restored.board().contents(at("b4")), Some(Material::BP));
        assert_eq!(restored.board().contents(at("f6")), Some(Material::WN));
        assert_eq!(restored.snapshot(), game.snapshot());
    }

    #[test]
    fn test_restored_game_accepts_moves() {
        let mut game = ChessGame::new();
        game.move_notation("b2", "b4").unwrap();

        let mut restored = ChessGame::from_snapshot(&game.snapshot()).unwrap();
        restored.move_notation("e7", "e5").unwrap();
        assert_eq!(restored.state(), GameState::BlackTurn);
    }

    #[test]
    fn test_finished_marker_round_trip() {
        let mut game = ChessGame::new();
        game.end();
        let snapshot = game.snapshot();
        assert_eq!(
            snapshot.turn,
            TurnMarker::Finished {
                reason: FinishReason::Ended
            }
        );
        let restored = ChessGame::from_snapshot(&snapshot).unwrap();
        assert!(restored.state().is_finished());
    }

    #[test]
    fn test_snapshot_rejects_doubled_square() {
        let snapshot = Snapshot {
            pieces: vec![
                PieceRecord {
                    color: Color::Black,
                    piece: Piece::King,
                    position: at("d4"),
                },
                PieceRecord {
                    color: Color::White,
                    piece: Piece::Queen,
                    position: at("d4"),
                },
            ],
            turn: TurnMarker::Black,
        };
        assert!(ChessGame::from_snapshot(&snapshot).is_err());
    }

    #[test]
    fn test_snapshot_order_is_deterministic() {
        let a = ChessGame::new().snapshot();
        let b = ChessGame::new().snapshot();
        assert_eq!(a, b);
    }
}
