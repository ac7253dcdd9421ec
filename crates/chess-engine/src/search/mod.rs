//! Search: transposition-table-backed iterative deepening over the static
//! evaluator, exposed either as a one-shot blocking call ([`find_best_move`])
//! or through a persistent threaded [`SearchContext`] for engines that need
//! to keep searching while still reading the next UCI command.

mod context;
mod negamax;
mod ordering;
mod quiescence;
mod tt;

use std::sync::atomic::AtomicBool;
use std::time::Duration;

use chess_core::Move;

use crate::eval::{MATE, MAX_PLY};
use crate::movegen::generate_moves;
use crate::Position;

pub use context::{SearchContext, SearchState, DEFAULT_HASH_MB};
pub use tt::{Bound, TranspositionTable, TtEntry};

/// Parameters for a single search, assembled from a UCI `go` command (or,
/// for [`find_best_move`], supplied directly).
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Restrict the root search to these moves (UCI `searchmoves`).
    pub root_moves: Option<Vec<Move>>,
    /// White's remaining time, in milliseconds.
    pub wtime: Option<u64>,
    /// Black's remaining time, in milliseconds.
    pub btime: Option<u64>,
    /// White's increment per move, in milliseconds.
    pub winc: Option<u64>,
    /// Black's increment per move, in milliseconds.
    pub binc: Option<u64>,
    /// Moves remaining until the next time control.
    pub moves_to_go: Option<u32>,
    /// Hard depth cap, in plies.
    pub depth: Option<u8>,
    /// Hard node cap.
    pub nodes: Option<u64>,
    /// Search for a mate in this many moves. Parsed and stored, but the
    /// search does not special-case it beyond the ordinary depth/time
    /// budget: a forced mate found within that budget is reported the same
    /// way as any other mate score.
    pub mate: Option<u32>,
    /// Search for this many milliseconds exactly, ignoring the clock.
    pub movetime: Option<u64>,
    /// Search until explicitly told to stop; no time budget is computed.
    pub infinite: bool,
    /// Search is a pondering search (started speculatively on the
    /// opponent's time). Accepted for protocol completeness; it does not
    /// change search behavior beyond what `infinite` already does, since
    /// this engine does not implement ponder-hit time stealing.
    pub ponder: bool,
    /// Emit [`SearchInfo::CurrLine`] events as the search runs (UCI
    /// `UCI_ShowCurrLine`).
    pub show_curr_line: bool,
    /// Emit [`SearchInfo::Refutation`] events after each root move (UCI
    /// `UCI_ShowRefutations`).
    pub show_refutations: bool,
}

/// Optional diagnostic info emitted mid-search, gated behind
/// [`SearchOptions::show_curr_line`]/[`SearchOptions::show_refutations`].
/// Distinct from [`SearchResult`], which only reports completed iterations.
#[derive(Debug, Clone)]
pub enum SearchInfo {
    /// The line currently being explored, root move first.
    CurrLine(Vec<Move>),
    /// `root_move` is met by the continuation `line`, per the transposition
    /// table's recorded best replies.
    Refutation { root_move: Move, line: Vec<Move> },
}

/// The outcome of one completed search, or one completed iteration of an
/// iterative-deepening search in progress.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Centipawn score (or an encoded mate score; see [`classify_score`])
    /// from the side to move's perspective.
    pub score: i32,
    pub depth: u32,
    pub duration: Duration,
    pub nodes: u64,
    pub pv: Vec<Move>,
}

/// A decoded search score, ready for UCI `info score` formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    /// Centipawn evaluation.
    Cp(i32),
    /// Forced mate in this many full moves (negative: being mated).
    Mate(i32),
}

/// Decodes a raw search score into a centipawn value or a mate distance.
#[must_use]
pub fn classify_score(raw: i32) -> Score {
    let magnitude = raw.abs();
    if magnitude >= MATE - MAX_PLY {
        let plies_to_mate = MATE - magnitude;
        let moves_to_mate = (plies_to_mate + 1) / 2;
        Score::Mate(if raw > 0 { moves_to_mate } else { -moves_to_mate })
    } else {
        Score::Cp(raw)
    }
}

/// Errors from a one-shot synchronous search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The position has no legal moves (checkmate or stalemate).
    #[error("position has no legal moves to search")]
    NoLegalMoves,
}

/// Runs a single blocking search to completion, without a persistent worker
/// thread or transposition table reuse across calls. Intended for one-off
/// uses such as `--perft`/bench tooling, not the interactive UCI loop.
pub fn find_best_move(
    position: &Position,
    options: SearchOptions,
) -> Result<SearchResult, SearchError> {
    if generate_moves(position).is_empty() {
        return Err(SearchError::NoLegalMoves);
    }
    let mut tt = TranspositionTable::with_size_mb(DEFAULT_HASH_MB);
    let abort = AtomicBool::new(false);
    Ok(negamax::iterative_deepening(position, &options, &mut tt, &abort, |_| {}, |_| {}))
}
