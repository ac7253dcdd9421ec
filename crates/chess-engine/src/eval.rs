//! Static position evaluation.
//!
//! Returns an integer centipawn score from the side-to-move's perspective.
//! Material and piece-square constants are the widely used "simplified
//! evaluation" set; rook-file, center-control, and space terms are layered
//! on top per the evaluator's design.

use chess_core::{Color, File, Piece, Rank, Square};

use crate::movegen::{bishop_attacks, generate_moves, king_attacks, knight_attacks, pawn_attacks,
    queen_attacks, rook_attacks};
use crate::rules::{RuleSet, StandardChess};
use crate::{Bitboard, Position};

/// Mate score sentinel. Magnitude of a returned score at or above
/// `MATE - MAX_PLY` encodes a forced mate at a known ply distance.
pub const MATE: i32 = 10_000_000;

/// Draw score.
pub const DRAW: i32 = 0;

/// Alpha/beta sentinel, chosen to safely exceed any mate score while
/// leaving signed headroom in `i32` arithmetic.
pub const MAX: i32 = 2 * MATE;

/// Search depth ceiling used to bound mate-distance encoding.
pub const MAX_PLY: i32 = 128;

const PAWN_VALUE: i32 = 100;
const KNIGHT_VALUE: i32 = 320;
const BISHOP_VALUE: i32 = 330;
const ROOK_VALUE: i32 = 500;
const QUEEN_VALUE: i32 = 900;

/// Returns the material value of a piece type (kings are not summed).
#[inline]
pub const fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => 0,
    }
}

#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
      0,  0,  0,  0,  0,  0,  0,  0,
      5, 10, 10, 10, 10, 10, 10,  5,
     -5,  0,  0,  0,  0,  0,  0, -5,
     -5,  0,  0,  0,  0,  0,  0, -5,
     -5,  0,  0,  0,  0,  0,  0, -5,
     -5,  0,  0,  0,  0,  0,  0, -5,
     -5,  0,  0,  0,  0,  0,  0, -5,
      0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_PST: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_PST: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

fn pst(piece: Piece) -> &'static [i32; 64] {
    match piece {
        Piece::Pawn => &PAWN_PST,
        Piece::Knight => &KNIGHT_PST,
        Piece::Bishop => &BISHOP_PST,
        Piece::Rook => &ROOK_PST,
        Piece::Queen => &QUEEN_PST,
        Piece::King => &KING_PST,
    }
}

#[inline]
fn pst_index(sq: Square, color: Color) -> usize {
    match color {
        Color::White => sq.index() as usize,
        Color::Black => 63 - sq.index() as usize,
    }
}

const CENTER_SQUARES: [Square; 4] = [
    Square::new(File::D, Rank::R4),
    Square::new(File::E, Rank::R4),
    Square::new(File::D, Rank::R5),
    Square::new(File::E, Rank::R5),
];

fn attacks_of(position: &Position, sq: Square, piece: Piece, color: Color, occupied: Bitboard) -> Bitboard {
    let raw = match piece {
        Piece::Pawn => pawn_attacks(sq, color),
        Piece::Knight => knight_attacks(sq),
        Piece::Bishop => bishop_attacks(sq, occupied),
        Piece::Rook => rook_attacks(sq, occupied),
        Piece::Queen => queen_attacks(sq, occupied),
        Piece::King => king_attacks(sq),
    };
    raw & !position.colors[color.index()]
}

/// Every square attacked by `color`'s pieces in this position, union over all
/// piece types.
fn attacked_squares(position: &Position, color: Color) -> Bitboard {
    let occupied = position.occupied();
    let mut attacked = Bitboard::EMPTY;
    for piece in Piece::ALL {
        for sq in position.pieces_of(piece, color) {
            attacked |= attacks_of(position, sq, piece, color, occupied);
        }
    }
    attacked
}

/// Squares behind `color`'s own pawn chain (the ranks a pawn has already
/// passed, on its file), used as the space-term denominator.
fn rear_space(position: &Position, color: Color) -> Bitboard {
    position.pieces_of(Piece::Pawn, color).rear_fill(color)
}

fn material_and_placement(position: &Position) -> i32 {
    let mut score = 0i32;
    for color in [Color::White, Color::Black] {
        let sign = if color == Color::White { 1 } else { -1 };
        for piece in Piece::ALL {
            for sq in position.pieces_of(piece, color) {
                let idx = pst_index(sq, color);
                score += sign * (piece_value(piece) + pst(piece)[idx]);
            }
        }
    }
    score
}

fn rook_file_score(position: &Position) -> i32 {
    let mut score = 0i32;
    for color in [Color::White, Color::Black] {
        let sign = if color == Color::White { 1 } else { -1 };
        for sq in position.pieces_of(Piece::Rook, color) {
            let file = sq.file();
            if position.is_file_open(file) {
                score += sign * 70;
            } else {
                // Half-open relative to this rook's own side.
                let own_pawns_on_file =
                    (position.pieces_of(Piece::Pawn, color) & Bitboard::file_mask_of(sq)).is_not_empty();
                if !own_pawns_on_file {
                    score += sign * 30;
                }
            }
        }
    }
    score
}

fn center_control_score(position: &Position) -> i32 {
    let white_attacks = attacked_squares(position, Color::White);
    let black_attacks = attacked_squares(position, Color::Black);
    let mut white_count = 0;
    let mut black_count = 0;
    for sq in CENTER_SQUARES {
        if white_attacks.contains(sq) {
            white_count += 1;
        }
        if black_attacks.contains(sq) {
            black_count += 1;
        }
    }
    white_count - black_count
}

fn space_score(position: &Position) -> i32 {
    let white_rear = rear_space(position, Color::White);
    let black_rear = rear_space(position, Color::Black);
    let white_attacks = attacked_squares(position, Color::White);
    let black_attacks = attacked_squares(position, Color::Black);
    let white_space = (white_attacks & white_rear).count() as i32;
    let black_space = (black_attacks & black_rear).count() as i32;
    2 * (white_space - black_space)
}

/// Returns true if neither side has enough material to deliver checkmate.
pub(crate) fn is_insufficient_material(position: &Position) -> bool {
    StandardChess.is_insufficient_material(position)
}

/// Evaluates `position` from the side-to-move's perspective, in centipawns.
///
/// Draw conditions (repetition, 50-move rule, insufficient material) and
/// terminal positions (checkmate, stalemate) are checked before any
/// material/positional scoring.
pub fn evaluate(position: &Position) -> i32 {
    if position.is_threefold_repetition() || position.is_fifty_move_draw() {
        return DRAW;
    }
    if is_insufficient_material(position) {
        return DRAW;
    }

    let moves = generate_moves(position);
    if moves.is_empty() {
        return if position.is_check() { -MATE } else { DRAW };
    }

    let mut score = material_and_placement(position);
    score += rook_file_score(position);
    score += center_control_score(position);
    score += space_score(position);

    match position.side_to_move {
        Color::White => score,
        Color::Black => -score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::FenParser;

    #[test]
    fn startpos_is_roughly_balanced() {
        let pos = Position::startpos();
        let score = evaluate(&pos);
        assert!(score.abs() <= 50, "startpos score {} not near zero", score);
    }

    #[test]
    fn stalemate_is_draw() {
        let pos = Position::from_fen("7K/5k2/6q1/8/8/8/8/8 w - - 0 1").unwrap();
        assert_eq!(evaluate(&pos), DRAW);
    }

    #[test]
    fn checkmate_is_negative_mate() {
        let pos = Position::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1",
        )
        .unwrap();
        assert_eq!(evaluate(&pos), -MATE);
    }

    #[test]
    fn insufficient_material_k_vs_k_is_draw() {
        let pos = Position::from_fen("8/8/8/8/8/8/8/4K2k w - - 0 1").unwrap();
        assert_eq!(evaluate(&pos), DRAW);
    }

    #[test]
    fn insufficient_material_k_n_vs_k_is_draw() {
        let pos = Position::from_fen("8/8/8/8/8/8/8/4KN1k w - - 0 1").unwrap();
        assert_eq!(evaluate(&pos), DRAW);
    }

    #[test]
    fn insufficient_material_k_b_vs_k_is_draw() {
        let pos = Position::from_fen("8/8/8/8/8/8/8/4KB1k w - - 0 1").unwrap();
        assert_eq!(evaluate(&pos), DRAW);
    }

    #[test]
    fn fifty_move_rule_is_draw() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 100 1").unwrap();
        assert_eq!(evaluate(&pos), DRAW);
    }

    #[test]
    fn material_favors_extra_queen() {
        let base = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let up_queen = Position::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
        assert_eq!(evaluate(&base), DRAW);
        assert!(evaluate(&up_queen) > 800);
    }

    #[test]
    fn evaluation_is_symmetric_for_mirrored_colors() {
        let pos = Position::from_fen(FenParser::STARTPOS).unwrap();
        assert_eq!(evaluate(&pos), evaluate(&pos));
    }
}
