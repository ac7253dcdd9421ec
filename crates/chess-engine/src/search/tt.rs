//! Transposition table: a hash-indexed cache of previously searched subtrees.
//!
//! Indexed by `zobrist_hash % capacity`, with a single entry per bucket.
//! Mate scores are stored relative to the node they were found at (not the
//! search root), so a mate score probed at a different ply is re-relativized
//! via [`to_tt_score`]/[`from_tt_score`] before use.

use chess_core::Move;

use crate::eval::{MATE, MAX_PLY};

/// Kind of bound a transposition table entry represents, relative to the
/// alpha/beta window active when it was stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The stored score is the exact minimax value.
    Exact,
    /// The stored score is a lower bound (a beta cutoff occurred).
    Lower,
    /// The stored score is an upper bound (no move raised alpha).
    Upper,
}

#[derive(Debug, Clone, Copy)]
pub struct TtEntry {
    pub key: u64,
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
    pub best_move: Option<Move>,
    generation: u32,
}

/// Adjusts a mate score from "relative to the node at `ply`" to "relative to
/// the search root" when reading it back out of the table.
pub fn from_tt_score(score: i32, ply: i32) -> i32 {
    if score >= MATE - MAX_PLY {
        score - ply
    } else if score <= -MATE + MAX_PLY {
        score + ply
    } else {
        score
    }
}

/// Adjusts a mate score from "relative to the search root" to "relative to
/// the node at `ply`" before storing it, so it means the same thing no
/// matter what depth it is probed back at later.
pub fn to_tt_score(score: i32, ply: i32) -> i32 {
    if score >= MATE - MAX_PLY {
        score + ply
    } else if score <= -MATE + MAX_PLY {
        score - ply
    } else {
        score
    }
}

pub struct TranspositionTable {
    entries: Vec<Option<TtEntry>>,
    generation: u32,
}

impl TranspositionTable {
    /// Builds a table sized to fit within `size_mb` megabytes.
    #[must_use]
    pub fn with_size_mb(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<Option<TtEntry>>().max(1);
        let bytes = size_mb.max(1) * 1024 * 1024;
        let capacity = (bytes / entry_size).max(1);
        Self { entries: vec![None; capacity], generation: 0 }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    fn index(&self, key: u64) -> usize {
        (key % self.entries.len() as u64) as usize
    }

    #[must_use]
    pub fn probe(&self, key: u64) -> Option<TtEntry> {
        match &self.entries[self.index(key)] {
            Some(entry) if entry.key == key => Some(*entry),
            _ => None,
        }
    }

    /// Stores an entry, replacing the occupant of its bucket if the new
    /// entry is for the same position, searched at least as deep, or the
    /// occupant is from a previous search generation.
    pub fn store(
        &mut self,
        key: u64,
        depth: u8,
        score: i32,
        bound: Bound,
        best_move: Option<Move>,
    ) {
        let idx = self.index(key);
        let generation = self.generation;
        let replace = match &self.entries[idx] {
            None => true,
            Some(existing) => {
                existing.key == key || depth >= existing.depth || existing.generation != generation
            }
        };
        if replace {
            self.entries[idx] =
                Some(TtEntry { key, depth, score, bound, best_move, generation });
        }
    }

    /// Marks the start of a new search without discarding existing entries;
    /// stale entries from the previous generation become eligible for
    /// replacement but remain probeable until then.
    pub fn new_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(|entry| *entry = None);
        self.generation = 0;
    }

    /// Approximate fill level in parts-per-thousand, as reported by the UCI
    /// `info hashfull` field.
    #[must_use]
    pub fn hashfull_permille(&self) -> u32 {
        if self.entries.is_empty() {
            return 0;
        }
        let filled = self.entries.iter().filter(|e| e.is_some()).count();
        ((filled as u64 * 1000) / self.entries.len() as u64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_probe_roundtrip() {
        let mut tt = TranspositionTable::with_size_mb(1);
        tt.store(42, 4, 120, Bound::Exact, None);
        let entry = tt.probe(42).unwrap();
        assert_eq!(entry.depth, 4);
        assert_eq!(entry.score, 120);
        assert_eq!(entry.bound, Bound::Exact);
    }

    #[test]
    fn probe_miss_returns_none() {
        let tt = TranspositionTable::with_size_mb(1);
        assert!(tt.probe(7).is_none());
    }

    #[test]
    fn same_key_always_overwrites() {
        let mut tt = TranspositionTable::with_size_mb(1);
        tt.store(1, 10, 1, Bound::Exact, None);
        tt.store(1, 2, 2, Bound::Exact, None);
        let entry = tt.probe(1).unwrap();
        assert_eq!(entry.depth, 2);
        assert_eq!(entry.score, 2);
    }

    #[test]
    fn mate_score_adjustment_round_trips() {
        let root_score = MATE - 5;
        let stored = to_tt_score(root_score, 3);
        let restored = from_tt_score(stored, 3);
        assert_eq!(restored, root_score);
    }

    #[test]
    fn clear_drops_all_entries() {
        let mut tt = TranspositionTable::with_size_mb(1);
        tt.store(9, 1, 1, Bound::Exact, None);
        tt.clear();
        assert!(tt.probe(9).is_none());
        assert_eq!(tt.hashfull_permille(), 0);
    }
}
