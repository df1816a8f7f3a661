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

//! Chess board representation and spatial queries
//!
//! A _board_ holds the set of pieces in play, unique by square, and
//! answers the occupancy questions the rules engine needs:
//!
//! [x] Occupancy lookups (`contents`, `is_vacant`, `is_hostile`)
//! [x] Path clearance for ray pieces (bishop, rook, queen)
//! [x] Capture-aware piece relocation
//! [x] King location and check detection
//! [x] Material scoring
//! [x] Reconstruction from a persisted piece list
//!
//! Some of the key abstractions include:
//!
//! * A `Position` is a (column, row) coordinate. Columns 0..8 map to
//!   files 'a'..'h' and rows 0..8 map to ranks 1..8. Off-board values
//!   are representable so ray scans can step past the edge; legality
//!   checks reject them. An `Offset` is the axis-wise difference of
//!   two positions.
//!
//! * `Material` is a piece of a specific color. `Piece` has six
//!   variants: `King`, `Queen`, `Rook`, `Bishop`, `Knight` and `Pawn`.
//!   `Color` is either `White` or `Black`. `Material::reaches` is the
//!   single legality predicate: given the board's occupancy, may this
//!   piece travel from one square to another?
//!
//! * The `Board` stores its pieces in a map keyed by square. There is
//!   exactly one mutating method, `move_piece`, which relocates one
//!   piece and returns whatever it captured. Everything else is a
//!   read-only query, so a rejected move can never leave the board
//!   half-changed.

use std::collections::HashMap;
use thiserror::Error;

mod layout;
mod material;
mod moves;
mod position;

pub use layout::*;
pub use material::*;
pub use moves::*;
pub use position::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    #[error("piece placed off the board at {0}")]
    OffBoard(Position),
    #[error("two pieces share {0}")]
    DoubledSquare(Position),
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    squares: HashMap<Position, Material>,
}

impl Board {
    /// A fresh board in the standard starting layout.
    pub fn standard() -> Self {
        Self {
            squares: standard_layout().collect(),
        }
    }

    /// Reconstructs a board from a persisted piece list.
    pub fn from_pieces<I>(pieces: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (Position, Material)>,
    {
        let mut squares = HashMap::new();
        for (pos, material) in pieces {
            if !pos.is_on_board() {
                return Err(LayoutError::OffBoard(pos));
            }
            if squares.insert(pos, material).is_some() {
                return Err(LayoutError::DoubledSquare(pos));
            }
        }
        Ok(Self { squares })
    }

    #[inline]
    pub fn contents(&self, pos: Position) -> Option<Material> {
        self.squares.get(&pos).copied()
    }

    #[inline]
    pub fn is_vacant(&self, pos: Position) -> bool {
        !self.squares.contains_key(&pos)
    }

    #[inline]
    pub fn is_hostile(&self, pos: Position, color: Color) -> bool {
        self.contents(pos).is_some_and(|m| m.color() != color)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Position, Material)> + '_ {
        self.squares.iter().map(|(&pos, &material)| (pos, material))
    }

    /// Whether every square strictly between `from` and `to` is vacant.
    /// Meaningful only along a straight or diagonal line; any other
    /// shape has no squares in between and trivially clears.
    pub fn path_is_clear(&self, from: Position, to: Position) -> bool {
        let Some(step) = (to - from).to_unit() else {
            return true;
        };
        let mut pos = from + step;
        while pos != to {
            if !self.is_vacant(pos) {
                return false;
            }
            pos = pos + step;
        }
        true
    }

    /// Relocates the piece at `from`, removing whatever sat on `to`
    /// first. Returns the captured piece, if any. The destination must
    /// be a different, on-board square; every piece's position stays
    /// on-board. A rejected call leaves the board untouched.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Result<Option<Material>, MoveError> {
        let material = self.contents(from).ok_or(MoveError::NoSuchPiece(from))?;
        if !to.is_on_board() || to == from {
            return Err(MoveError::IllegitimateMove {
                piece: material.piece(),
                from,
                to,
            });
        }
        self.squares.remove(&from);
        Ok(self.squares.insert(to, material))
    }

    /// Locates the active king of a color. `None` once the king has
    /// been captured, which only happens in an already-decided game.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces()
            .find(|(_, m)| m.color() == color && m.piece().is_king())
            .map(|(pos, _)| pos)
    }

    /// A color is in check when some hostile piece reaches its king's
    /// square.
    pub fn is_check(&self, color: Color) -> bool {
        let Some(king) = self.king_position(color) else {
            return false;
        };
        self.pieces()
            .any(|(pos, m)| m.color() != color && m.reaches(pos, king, self))
    }

    /// Whether `color` is checkmated: in check with no move of their
    /// own that lifts it. Escape candidates are simulated under the
    /// same relaxed legality the engine plays by.
    pub fn is_checkmate(&self, color: Color) -> bool {
        if !self.is_check(color) {
            return false;
        }
        let ours: Vec<_> = self.pieces().filter(|(_, m)| m.color() == color).collect();
        for (from, material) in ours {
            for to in Position::all() {
                if !material.reaches(from, to, self) {
                    continue;
                }
                let mut trial = self.clone();
                trial
                    .move_piece(from, to)
                    .expect("escape candidate starts from an occupied square");
                if !trial.is_check(color) {
                    return false;
                }
            }
        }
        true
    }

    /// Sums standard material values over a color's remaining pieces.
    pub fn score(&self, color: Color) -> u32 {
        self.pieces()
            .filter(|(_, m)| m.color() == color)
            .map(|(_, m)| m.value())
            .sum()
    }

    pub fn scores(&self) -> Pair<u32> {
        Pair::new(self.score(Color::White), self.score(Color::Black))
    }
}
