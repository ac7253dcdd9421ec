//! Core opening types and structures.

use serde::{Deserialize, Serialize};

/// Where an opening entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpeningSource {
    /// Shipped with the engine.
    BuiltIn,
    /// Loaded from a user-supplied file.
    Custom,
}

/// Represents a named chess opening line, with metadata used for catalog
/// browsing (ECO code, free-form tags) as distinct from the move-keyed
/// lookup table used during play (see [`crate::database::MoveDatabase`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opening {
    /// Stable kebab-case identifier (e.g. "italian-game").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// The main line, in UCI notation.
    pub moves: Vec<String>,
    /// FEN reached after playing `moves` from the start position.
    pub fen: String,
    /// ECO classification code, e.g. "C50".
    pub eco: Option<String>,
    /// Free-form category tags (e.g. "open-game", "gambit").
    pub tags: Vec<String>,
    /// Where this entry came from.
    pub source: OpeningSource,
}

/// A single move from an opening book with associated metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningMove {
    /// The move in UCI notation (e.g., "e2e4").
    pub uci: String,
    /// Weight/frequency of this move (higher = more common).
    pub weight: u32,
}

impl Opening {
    /// Creates a new opening with a `BuiltIn` source, no ECO code, and no tags.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        moves: Vec<String>,
        fen: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            moves,
            fen: fen.into(),
            eco: None,
            tags: Vec::new(),
            source: OpeningSource::BuiltIn,
        }
    }

    /// Sets the ECO code.
    #[must_use]
    pub fn with_eco(mut self, eco: impl Into<String>) -> Self {
        self.eco = Some(eco.into());
        self
    }

    /// Sets the category tags.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: OpeningSource) -> Self {
        self.source = source;
        self
    }

    /// Returns true if this opening carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl OpeningMove {
    /// Creates a new opening move with the given UCI notation and weight.
    #[must_use]
    pub fn new(uci: impl Into<String>, weight: u32) -> Self {
        Self {
            uci: uci.into(),
            weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_new() {
        let opening = Opening::new(
            "kings-pawn-game",
            "King's Pawn Game",
            vec!["e2e4".to_string(), "e7e5".to_string()],
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
        )
        .with_eco("C44")
        .with_tags(vec!["open-game".to_string()]);
        assert_eq!(opening.eco.as_deref(), Some("C44"));
        assert_eq!(opening.name, "King's Pawn Game");
        assert_eq!(opening.moves.len(), 2);
        assert!(opening.has_tag("open-game"));
        assert_eq!(opening.source, OpeningSource::BuiltIn);
    }

    #[test]
    fn test_opening_move_new() {
        let mv = OpeningMove::new("e2e4", 100);
        assert_eq!(mv.uci, "e2e4");
        assert_eq!(mv.weight, 100);
    }
}
