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

use once_cell::sync::Lazy;
use strum::IntoEnumIterator;

use super::material::{Color, Material, Piece};
use super::position::Position;

const BACK_ROW: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

static STANDARD_LAYOUT: Lazy<Vec<(Position, Material)>> = Lazy::new(|| {
    let mut layout = Vec::with_capacity(32);
    for color in Color::iter() {
        let pawn_step = color.forward();
        for (column, piece) in BACK_ROW.into_iter().enumerate() {
            let back = Position::new(column as i8, color.back_row());
            layout.push((back, Material::new(color, piece)));
            layout.push((back + pawn_step, Material::new(color, Piece::Pawn)));
        }
    }
    layout
});

/// The 32 pieces of a fresh game. Black holds ranks 1 and 2, White
/// holds ranks 7 and 8.
pub fn standard_layout() -> impl Iterator<Item = (Position, Material)> {
    STANDARD_LAYOUT.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_counts() {
        let layout: Vec<_> = standard_layout().collect();
        assert_eq!(layout.len(), 32);
        let pawns = layout.iter().filter(|(_, m)| m.piece().is_pawn()).count();
        assert_eq!(pawns, 16);
        let kings = layout.iter().filter(|(_, m)| m.piece().is_king()).count();
        assert_eq!(kings, 2);
    }

    #[test]
    fn test_black_holds_low_ranks() {
        for (pos, material) in standard_layout() {
            match material.color() {
                Color::Black => assert!(pos.row() <= 1, "{material:?} at {pos}"),
                Color::White => assert!(pos.row() >= 6, "{material:?} at {pos}"),
            }
        }
    }

    #[test]
    fn test_kings_on_e_file() {
        let kings: Vec<_> = standard_layout()
            .filter(|(_, m)| m.piece().is_king())
            .map(|(pos, _)| pos)
            .collect();
        assert!(kings.contains(&Position::try_from_str("e1").unwrap()));
        assert!(kings.contains(&Position::try_from_str("e8").unwrap()));
    }
}
