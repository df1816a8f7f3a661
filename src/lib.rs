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

//! Chess rules engine for a turn-by-turn room service
//!
//! This crate is the rules core of a two-player chess service: the
//! surrounding application stores games, looks up rooms and serves
//! HTTP; this crate decides what is legal on the board. A caller
//! reconstructs a `ChessGame` from a persisted `Snapshot` (piece list
//! plus turn marker), submits one move, and reads the updated snapshot
//! back. The following is supported:
//!
//! [x] Per-piece movement legality (pawn, knight, bishop, rook, queen, king)
//! [x] Path clearance for ray pieces
//! [x] Explicit turn state machine (Black opens; `Finished` is terminal)
//! [x] Check, checkmate and king-capture detection
//! [x] Material scoring for both sides
//! [x] serde snapshot boundary for persistence collaborators
//! [ ] Castling, en passant, promotion
//! [ ] Draw detection (repetition, fifty moves)
//! [ ] Self-check rejection (deliberately omitted, see `ChessGame`)
//!
//! Every rejected move is recoverable and leaves the game untouched;
//! retrying the same illegal move fails identically.

pub mod board;
pub mod game;

pub use board::*;
pub use game::*;
