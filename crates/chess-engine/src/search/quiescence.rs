//! Quiescence search: extends a leaf node with captures and promotions only,
//! to avoid misjudging positions in the middle of a tactical exchange (the
//! horizon effect).

use chess_core::MoveFlag;

use crate::eval::{evaluate, is_insufficient_material, piece_value, DRAW, MATE};
use crate::movegen::generate_moves;
use crate::search::ordering::captured_piece;
use crate::Position;

use super::negamax::Search;

/// Margin added on top of a captured piece's value when delta-pruning: if
/// even winning the piece back plus this margin can't reach alpha, the
/// capture is hopeless and is skipped without being searched.
const DELTA_MARGIN: i32 = 200;

pub(crate) fn quiescence(
    search: &mut Search,
    position: &Position,
    mut alpha: i32,
    beta: i32,
    ply: u32,
) -> i32 {
    search.count_node();
    if search.should_stop() {
        return DRAW;
    }

    if position.is_threefold_repetition() || position.is_fifty_move_draw() {
        return DRAW;
    }
    if is_insufficient_material(position) {
        return DRAW;
    }

    let moves = generate_moves(position);
    if moves.is_empty() {
        return if position.is_check() { -MATE + ply as i32 } else { DRAW };
    }

    let stand_pat = evaluate(position);
    if stand_pat >= beta {
        return stand_pat;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let mut tactical: Vec<_> = moves
        .as_slice()
        .iter()
        .copied()
        .filter(|m| captured_piece(position, *m).is_some() || m.flag().is_promotion())
        .collect();
    tactical.sort_by_key(|&m| {
        let victim = captured_piece(position, m).map(piece_value).unwrap_or(0);
        -victim
    });

    for m in tactical {
        if let Some(victim) = captured_piece(position, m) {
            if m.flag() != MoveFlag::EnPassant
                && stand_pat + piece_value(victim) + DELTA_MARGIN < alpha
            {
                continue;
            }
        }

        let child = crate::movegen::make_move(position, m);
        let score = -quiescence(search, &child, -beta, -alpha, ply + 1);
        if search.stopped() {
            return alpha;
        }
        if score >= beta {
            return score;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::tt::TranspositionTable;
    use std::sync::atomic::AtomicBool;

    #[test]
    fn quiet_position_returns_stand_pat() {
        let position = Position::startpos();
        let mut tt = TranspositionTable::with_size_mb(1);
        let abort = AtomicBool::new(false);
        let mut search = Search::new(&mut tt, &abort, None, None, false, |_| {});
        let score = quiescence(&mut search, &position, -crate::eval::MAX, crate::eval::MAX, 0);
        assert_eq!(score, evaluate(&position));
    }
}
