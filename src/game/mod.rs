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

//! Turn state machine and game orchestration
//!
//! A `ChessGame` owns one `Board` and one `GameState` for its lifetime.
//! The collaborating room service reconstructs a game from a snapshot,
//! submits exactly one move, and reads the updated snapshot back; no
//! game instance outlives a request. See the `snapshot` module for the
//! boundary types.

use anyhow::Result;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Material, Move, MoveError, Pair, Position};

mod snapshot;

pub use snapshot::*;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinishReason {
    /// The named color delivered checkmate.
    Checkmate(Color),
    /// The named color captured the enemy king outright. Possible
    /// because self-check is not policed (see `ChessGame`).
    KingCaptured(Color),
    /// The game was ended explicitly (resignation or abandonment).
    Ended,
}

/// What a successfully applied move did to the game, fed into the
/// state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Advance,
    KingCaptured,
    Checkmate,
}

/// Exactly one state is active at a time. Black opens the game; the
/// collaborating service stores the board with Black on ranks 1-2.
/// `Finished` is terminal: no transition leaves it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    BlackTurn,
    WhiteTurn,
    Finished(FinishReason),
}

impl GameState {
    pub const fn opening() -> Self {
        Self::BlackTurn
    }

    /// The color to move, or `None` once the game is over.
    pub const fn turn(&self) -> Option<Color> {
        match self {
            Self::BlackTurn => Some(Color::Black),
            Self::WhiteTurn => Some(Color::White),
            Self::Finished(_) => None,
        }
    }

    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }

    /// Pure transition function: `(state, outcome) -> state`. A plain
    /// advance hands the turn to the opponent; a terminal outcome
    /// finishes the game in the mover's favor. `Finished` absorbs
    /// everything.
    pub fn advance(self, outcome: MoveOutcome) -> Self {
        let Some(mover) = self.turn() else {
            return self;
        };
        match outcome {
            MoveOutcome::Advance => match mover {
                Color::Black => Self::WhiteTurn,
                Color::White => Self::BlackTurn,
            },
            MoveOutcome::KingCaptured => Self::Finished(FinishReason::KingCaptured(mover)),
            MoveOutcome::Checkmate => Self::Finished(FinishReason::Checkmate(mover)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    /// The color to move; `None` once finished.
    pub turn: Option<Color>,
    pub finished: bool,
    /// Whether the color to move is currently in check.
    pub check: bool,
}

/// Orchestrates one game: validates a requested move against the
/// active color and the piece's reachability, applies it, and advances
/// the state machine.
///
/// Validation fully precedes mutation, so a rejected move leaves both
/// board and state untouched and the same call will fail identically
/// if retried.
///
/// One deliberate simplification, carried over from the service this
/// engine was extracted from: a move that leaves the mover's own king
/// in check is not rejected. The opponent may answer by capturing the
/// king, which ends the game immediately.
#[derive(Debug, Clone)]
pub struct ChessGame {
    board: Board,
    state: GameState,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// A fresh game on the standard layout, Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            state: GameState::opening(),
        }
    }

    /// Reassembles a game from reconstructed parts, e.g. a persisted
    /// piece list and turn marker.
    pub fn from_parts(board: Board, state: GameState) -> Self {
        Self { board, state }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Submits a deserialized move request.
    pub fn submit_move(&mut self, mv: Move) -> Result<()> {
        self.move_piece(mv.from, mv.to)
    }

    /// Submits a move in chess notation, e.g. `("b2", "b4")`.
    pub fn move_notation(&mut self, from: &str, to: &str) -> Result<()> {
        let from = Position::try_from_str(from).map_err(MoveError::from)?;
        let to = Position::try_from_str(to).map_err(MoveError::from)?;
        self.move_piece(from, to)
    }

    /// Validates and applies one move, then advances the turn.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Result<()> {
        let Some(mover) = self.state.turn() else {
            return Err(MoveError::GameAlreadyFinished.into());
        };
        let material = self
            .board
            .contents(from)
            .ok_or(MoveError::NoSuchPiece(from))?;
        if material.color() != mover {
            return Err(MoveError::NotYourTurn(mover).into());
        }
        if !material.reaches(from, to, &self.board) {
            return Err(MoveError::IllegitimateMove {
                piece: material.piece(),
                from,
                to,
            }
            .into());
        }

        let captured = self.board.move_piece(from, to)?;
        debug!("{mover} moves {} {from} -> {to}", material.piece());
        self.state = self.state.advance(self.classify(mover, captured));
        if let GameState::Finished(reason) = self.state {
            info!("game finished: {reason:?}");
        }
        Ok(())
    }

    fn classify(&self, mover: Color, captured: Option<Material>) -> MoveOutcome {
        if captured.is_some_and(|m| m.piece().is_king()) {
            return MoveOutcome::KingCaptured;
        }
        if self.board.is_checkmate(!mover) {
            return MoveOutcome::Checkmate;
        }
        MoveOutcome::Advance
    }

    /// Forces the game into `Finished` without a move. Idempotent: an
    /// already-finished game keeps its original reason.
    pub fn end(&mut self) {
        if !self.state.is_finished() {
            self.state = GameState::Finished(FinishReason::Ended);
            info!("game ended by request");
        }
    }

    /// Material scores for both sides.
    pub fn scores(&self) -> Pair<u32> {
        self.board.scores()
    }

    pub fn status(&self) -> Status {
        let turn = self.state.turn();
        Status {
            turn,
            finished: self.state.is_finished(),
            check: turn.map(|color| self.board.is_check(color)).unwrap_or(false),
        }
    }
}
