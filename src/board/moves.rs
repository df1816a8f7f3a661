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

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::material::{Color, Material, Piece};
use super::position::{ParsePositionError, Position};
use super::Board;

use Piece::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoveError {
    #[error("not a board square: {0:?}")]
    InvalidPosition(String),
    #[error("no piece at {0}")]
    NoSuchPiece(Position),
    #[error("it is {0}'s turn")]
    NotYourTurn(Color),
    #[error("{piece} cannot move from {from} to {to}")]
    IllegitimateMove {
        piece: Piece,
        from: Position,
        to: Position,
    },
    #[error("the game is already finished")]
    GameAlreadyFinished,
}

impl From<ParsePositionError> for MoveError {
    fn from(err: ParsePositionError) -> Self {
        Self::InvalidPosition(err.0)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl Material {
    /// Whether this piece, standing on `from`, may travel to `to` given
    /// the board's occupancy. Pure with respect to turn order: whose
    /// move it is does not enter into it.
    ///
    /// Never true for `to == from`, for an off-board destination, or
    /// for a destination held by the mover's own color.
    pub fn reaches(&self, from: Position, to: Position, board: &Board) -> bool {
        if to == from || !to.is_on_board() {
            return false;
        }
        if board.contents(to).is_some_and(|m| m.color() == self.color()) {
            return false;
        }
        match self.piece() {
            Pawn => pawn_reaches(self.color(), from, to, board),
            Knight => knight_reaches(from, to),
            Bishop => bishop_reaches(from, to, board),
            Rook => rook_reaches(from, to, board),
            Queen => bishop_reaches(from, to, board) || rook_reaches(from, to, board),
            King => king_reaches(from, to),
        }
    }
}

fn pawn_reaches(color: Color, from: Position, to: Position, board: &Board) -> bool {
    let step = color.forward();
    // single advance onto a vacant square; a pawn never captures
    // straight ahead
    if to == from + step {
        return board.is_vacant(to);
    }
    // double advance from the home row, both squares vacant
    if from.row() == color.pawn_row() && to == from + step + step {
        return board.is_vacant(from + step) && board.is_vacant(to);
    }
    // diagonal one square forward, capture only
    let diff = to - from;
    diff.y == step.y && diff.x.abs() == 1 && board.is_hostile(to, color)
}

fn knight_reaches(from: Position, to: Position) -> bool {
    let (cd, rd) = (from.column_distance(to), from.row_distance(to));
    // never blocked; not a ray move
    (cd == 1 && rd == 2) || (cd == 2 && rd == 1)
}

fn bishop_reaches(from: Position, to: Position, board: &Board) -> bool {
    let (cd, rd) = (from.column_distance(to), from.row_distance(to));
    cd == rd && cd != 0 && board.path_is_clear(from, to)
}

fn rook_reaches(from: Position, to: Position, board: &Board) -> bool {
    let (cd, rd) = (from.column_distance(to), from.row_distance(to));
    (cd == 0) != (rd == 0) && board.path_is_clear(from, to)
}

fn king_reaches(from: Position, to: Position) -> bool {
    from.column_distance(to) <= 1 && from.row_distance(to) <= 1
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn at(name: &str) -> Position {
        Position::try_from_str(name).unwrap()
    }

    fn board(pieces: &[(&str, Material)]) -> Board {
        Board::from_pieces(pieces.iter().map(|&(name, m)| (at(name), m))).unwrap()
    }

    #[test]
    fn test_nothing_reaches_its_own_square() {
        let board = Board::standard();
        for (pos, material) in board.pieces() {
            assert!(!material.reaches(pos, pos, &board));
        }
    }

    #[test]
    fn test_nothing_reaches_off_board() {
        let board = board(&[("h4", Material::BR), ("h6", Material::BK)]);
        assert!(!Material::BR.reaches(at("h4"), Position::new(8, 3), &board));
        assert!(!Material::BK.reaches(at("h6"), Position::new(8, 5), &board));
    }

    #[test]
    fn test_own_color_blocks_destination() {
        let board = board(&[("d4", Material::BQ), ("d6", Material::BP)]);
        assert!(!Material::BQ.reaches(at("d4"), at("d6"), &board));
    }

    #[test]
    fn test_black_pawn_single_advance() {
        let board = Board::standard();
        assert!(Material::BP.reaches(at("b2"), at("b3"), &board));
        assert!(!Material::BP.reaches(at("b2"), at("b1"), &board));
    }

    #[test]
    fn test_white_pawn_single_advance() {
        let board = Board::standard();
        assert!(Material::WP.reaches(at("e7"), at("e6"), &board));
        assert!(!Material::WP.reaches(at("e7"), at("e8"), &board));
    }

    #[test]
    fn test_pawn_double_advance_from_home_row() {
        let board = Board::standard();
        assert!(Material::BP.reaches(at("b2"), at("b4"), &board));
        assert!(Material::WP.reaches(at("e7"), at("e5"), &board));
    }

    #[test]
    fn test_pawn_triple_advance_is_illegal() {
        let board = Board::standard();
        assert!(!Material::BP.reaches(at("a2"), at("a5"), &board));
    }

    #[test]
    fn test_pawn_double_advance_only_from_home_row() {
        let board = board(&[("b3", Material::BP)]);
        assert!(!Material::BP.reaches(at("b3"), at("b5"), &board));
    }

    #[test]
    fn test_pawn_double_advance_blocked() {
        // blocked on the intervening square
        let board = board(&[("b2", Material::BP), ("b3", Material::WN)]);
        assert!(!Material::BP.reaches(at("b2"), at("b4"), &board));
        // blocked on the destination
        let board = self::board(&[("b2", Material::BP), ("b4", Material::WN)]);
        assert!(!Material::BP.reaches(at("b2"), at("b4"), &board));
    }

    #[test]
    fn test_pawn_cannot_capture_straight_ahead() {
        let board = board(&[("b2", Material::BP), ("b3", Material::WN)]);
        assert!(!Material::BP.reaches(at("b2"), at("b3"), &board));
    }

    #[test]
    fn test_pawn_diagonal_capture() {
        let board = board(&[("b2", Material::BP), ("c3", Material::WN)]);
        assert!(Material::BP.reaches(at("b2"), at("c3"), &board));
    }

    #[test]
    fn test_pawn_diagonal_onto_vacant_is_illegal() {
        let board = board(&[("b2", Material::BP)]);
        assert!(!Material::BP.reaches(at("b2"), at("c3"), &board));
        assert!(!Material::BP.reaches(at("b2"), at("a3"), &board));
    }

    #[test]
    fn test_pawn_cannot_capture_backward() {
        let board = board(&[("b4", Material::BP), ("a3", Material::WN)]);
        assert!(!Material::BP.reaches(at("b4"), at("a3"), &board));
    }

    #[test]
    fn test_knight_shape() {
        let board = board(&[("d4", Material::WN)]);
        for name in ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"] {
            assert!(Material::WN.reaches(at("d4"), at(name), &board));
        }
        assert!(!Material::WN.reaches(at("d4"), at("d5"), &board));
        assert!(!Material::WN.reaches(at("d4"), at("f6"), &board));
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let board = Board::standard();
        assert!(Material::BN.reaches(at("b1"), at("c3"), &board));
    }

    #[test]
    fn test_bishop_diagonals_only() {
        let board = board(&[("c1", Material::WB)]);
        assert!(Material::WB.reaches(at("c1"), at("h6"), &board));
        assert!(Material::WB.reaches(at("c1"), at("a3"), &board));
        assert!(!Material::WB.reaches(at("c1"), at("c4"), &board));
    }

    #[test]
    fn test_bishop_blocked_by_intervening_piece() {
        let board = board(&[("c1", Material::WB), ("e3", Material::BP)]);
        assert!(Material::WB.reaches(at("c1"), at("d2"), &board));
        assert!(Material::WB.reaches(at("c1"), at("e3"), &board));
        assert!(!Material::WB.reaches(at("c1"), at("f4"), &board));
        assert!(!Material::WB.reaches(at("c1"), at("h6"), &board));
    }

    #[test]
    fn test_rook_lines_only() {
        let board = board(&[("a1", Material::BR)]);
        assert!(Material::BR.reaches(at("a1"), at("a8"), &board));
        assert!(Material::BR.reaches(at("a1"), at("h1"), &board));
        assert!(!Material::BR.reaches(at("a1"), at("b2"), &board));
    }

    #[test]
    fn test_rook_blocked_by_intervening_piece() {
        let board = board(&[("a1", Material::BR), ("a5", Material::WP)]);
        assert!(Material::BR.reaches(at("a1"), at("a4"), &board));
        assert!(Material::BR.reaches(at("a1"), at("a5"), &board));
        assert!(!Material::BR.reaches(at("a1"), at("a6"), &board));
    }

    #[test]
    fn test_queen_combines_rook_and_bishop() {
        let board = board(&[("d4", Material::WQ)]);
        assert!(Material::WQ.reaches(at("d4"), at("d8"), &board));
        assert!(Material::WQ.reaches(at("d4"), at("h8"), &board));
        assert!(Material::WQ.reaches(at("d4"), at("a4"), &board));
        assert!(!Material::WQ.reaches(at("d4"), at("e6"), &board));
    }

    #[test]
    fn test_queen_blocked_by_intervening_piece() {
        let board = board(&[("d4", Material::WQ), ("d6", Material::BP)]);
        assert!(!Material::WQ.reaches(at("d4"), at("d7"), &board));
    }

    #[test]
    fn test_king_single_step() {
        let board = board(&[("e4", Material::BK)]);
        for name in ["d3", "d4", "d5", "e3", "e5", "f3", "f4", "f5"] {
            assert!(Material::BK.reaches(at("e4"), at(name), &board));
        }
        assert!(!Material::BK.reaches(at("e4"), at("e6"), &board));
        assert!(!Material::BK.reaches(at("e4"), at("g4"), &board));
    }
}
