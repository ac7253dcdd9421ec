//! Move ordering: sorts a move list so that alpha-beta prunes the most
//! branches the soonest.
//!
//! Order, best first: the transposition table's recorded best move, then
//! captures by MVV-LVA (most valuable victim, least valuable attacker), then
//! non-capturing promotions by promoted piece value, then quiet moves. Ties
//! within a bucket break by origin square then destination square, so
//! ordering is deterministic given the same position and TT move.

use chess_core::{Move, MoveFlag, Piece};

use crate::eval::piece_value;
use crate::movegen::MoveList;
use crate::Position;

/// Returns the piece captured by `m`, if any, including en passant.
pub(crate) fn captured_piece(position: &Position, m: Move) -> Option<Piece> {
    if m.flag() == MoveFlag::EnPassant {
        Some(Piece::Pawn)
    } else {
        position.piece_at(m.to()).map(|(piece, _)| piece)
    }
}

fn sort_key(position: &Position, m: Move, tt_move: Option<Move>) -> (u8, i32, u8, u8) {
    let (bucket, secondary) = if tt_move == Some(m) {
        (0u8, 0i32)
    } else if let Some(victim) = captured_piece(position, m) {
        let attacker = position
            .piece_at(m.from())
            .map(|(piece, _)| piece)
            .unwrap_or(Piece::Pawn);
        (1, -(piece_value(victim) * 16 - piece_value(attacker)))
    } else if m.flag().is_promotion() {
        let promoted = m.flag().promotion_piece().unwrap_or(Piece::Queen);
        (2, -piece_value(promoted))
    } else {
        (3, 0)
    };
    (bucket, secondary, m.from().index(), m.to().index())
}

/// Orders `moves` in place, best-first, for alpha-beta search.
pub fn order_moves(position: &Position, moves: &mut MoveList, tt_move: Option<Move>) {
    moves
        .as_mut_slice()
        .sort_by_key(|&m| sort_key(position, m, tt_move));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::generate_moves;

    #[test]
    fn tt_move_sorts_first() {
        let position = Position::startpos();
        let mut moves = generate_moves(&position);
        let tt_move = moves.as_slice()[moves.len() - 1];
        order_moves(&position, &mut moves, Some(tt_move));
        assert_eq!(moves.as_slice()[0], tt_move);
    }

    #[test]
    fn captures_sort_before_quiet_moves() {
        // A position with a hanging pawn capturable en passant-free, so the
        // generated capture should be ordered ahead of quiet development
        // moves.
        let position =
            Position::from_fen("rnbqkbnr/pppp1ppp/8/4p3/3P4/8/PPP1PPPP/RNBQKBNR w KQkq - 0 2")
                .unwrap();
        let mut moves = generate_moves(&position);
        order_moves(&position, &mut moves, None);
        let first = moves.as_slice()[0];
        assert!(captured_piece(&position, first).is_some());
    }
}
