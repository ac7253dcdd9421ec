//! UCI chess engine binary.
//!
//! Wires [`chess_engine::search::SearchContext`] to stdin/stdout over the
//! UCI protocol, with an opening book (`chess-openings`) consulted before
//! falling back to search.

use std::io::Write;

use anyhow::Context;
use clap::Parser;

use chess_core::Move;
use chess_engine::movegen::perft::{perft, perft_divide};
use chess_engine::search::{
    classify_score, Score as EngineScore, SearchContext, SearchInfo, SearchOptions, SearchResult,
    DEFAULT_HASH_MB,
};
use chess_engine::{generate_moves, make_move, Position};
use chess_openings::{builtin_database, MoveDatabase};
use uci::{stdio_engine, EngineInfo, EngineMessage, GoOptions, GuiCommand, InfoBuilder, UciOptionKind};

#[derive(Parser, Debug)]
#[command(name = "chess-engine", about = "A UCI chess engine")]
struct Cli {
    /// Transposition table size, in megabytes.
    #[arg(long, default_value_t = DEFAULT_HASH_MB)]
    hash_mb: usize,

    /// Depth cap applied to `go` commands that don't specify their own.
    #[arg(long)]
    depth: Option<u8>,

    /// Run perft from a FEN (or "startpos") to the given depth and exit,
    /// instead of entering the UCI loop.
    #[arg(long, num_args = 2, value_names = ["FEN", "DEPTH"])]
    perft: Option<Vec<String>>,
}

/// Resolves a UCI move string against the legal moves of `position`,
/// matching on origin/destination/promotion so the move's internal flag
/// bits (double-push, en passant, castling) don't need to be guessed.
fn resolve_uci_move(position: &Position, uci_move: &str) -> Option<Move> {
    let candidate = Move::from_uci(uci_move)?;
    generate_moves(position)
        .as_slice()
        .iter()
        .find(|m| {
            m.from() == candidate.from()
                && m.to() == candidate.to()
                && m.flag().promotion_piece() == candidate.flag().promotion_piece()
        })
        .copied()
}

struct EngineState {
    position: Position,
    /// UCI moves played from the starting position, used as the opening
    /// book's lookup key. Cleared (and left empty) whenever the GUI sets up
    /// a position from an explicit FEN, since the book is keyed on
    /// standard game move histories only.
    book_history: Option<Vec<String>>,
    own_book: bool,
    book: MoveDatabase,
    default_depth: Option<u8>,
    /// Mirrors the `UCI_ShowCurrLine` option.
    show_curr_line: bool,
    /// Mirrors the `UCI_ShowRefutations` option.
    show_refutations: bool,
}

impl EngineState {
    fn new(default_depth: Option<u8>) -> Self {
        Self {
            position: Position::startpos(),
            book_history: Some(Vec::new()),
            own_book: true,
            book: builtin_database(),
            default_depth,
            show_curr_line: false,
            show_refutations: false,
        }
    }

    fn set_position(&mut self, fen: Option<String>, moves: Vec<String>) {
        self.position = match &fen {
            Some(f) => Position::from_fen(f).unwrap_or_else(|_| Position::startpos()),
            None => Position::startpos(),
        };
        self.book_history = fen.is_none().then(Vec::new);

        for uci_move in &moves {
            let Some(resolved) = resolve_uci_move(&self.position, uci_move) else { continue };
            self.position = make_move(&self.position, resolved);
            if let Some(history) = &mut self.book_history {
                history.push(resolved.to_uci());
            }
        }
    }

    fn book_move(&self) -> Option<Move> {
        if !self.own_book {
            return None;
        }
        let history = self.book_history.as_ref()?;
        let key = history.join(" ");
        let mut rng = rand::rng();
        let candidate = self.book.select_move(&key, &mut rng)?;
        resolve_uci_move(&self.position, &candidate.uci)
    }
}

fn build_search_options(opts: &GoOptions, position: &Position, state: &EngineState) -> SearchOptions {
    let root_moves = (!opts.searchmoves.is_empty()).then(|| {
        opts.searchmoves
            .iter()
            .filter_map(|mv| resolve_uci_move(position, mv))
            .collect::<Vec<_>>()
    });

    SearchOptions {
        root_moves: root_moves.filter(|moves| !moves.is_empty()),
        wtime: opts.wtime,
        btime: opts.btime,
        winc: opts.winc,
        binc: opts.binc,
        moves_to_go: opts.movestogo,
        depth: opts.depth.map(|d| d.min(u32::from(u8::MAX)) as u8).or(state.default_depth),
        nodes: opts.nodes,
        mate: opts.mate,
        movetime: opts.movetime,
        infinite: opts.infinite,
        ponder: opts.ponder,
        show_curr_line: state.show_curr_line,
        show_refutations: state.show_refutations,
    }
}

fn build_info(result: &SearchResult) -> EngineInfo {
    let nps = (result.duration.as_secs_f64() > 0.0)
        .then(|| (result.nodes as f64 / result.duration.as_secs_f64()) as u64);

    let mut builder = InfoBuilder::new()
        .depth(result.depth)
        .nodes(result.nodes)
        .time(result.duration.as_millis() as u64)
        .pv(result.pv.iter().map(Move::to_uci).collect());

    builder = match classify_score(result.score) {
        EngineScore::Cp(cp) => builder.score_cp(cp),
        EngineScore::Mate(moves) => builder.score_mate(moves),
    };
    if let Some(nps) = nps {
        builder = builder.nps(nps);
    }
    builder.build()
}

/// Renders a [`SearchInfo`] diagnostic event as the `info currline`/`info
/// refutation` line it corresponds to.
fn build_info_event(info: SearchInfo) -> EngineInfo {
    match info {
        SearchInfo::CurrLine(path) => {
            let moves = path.iter().map(Move::to_uci).collect();
            // Single-threaded engine: always CPU 1.
            InfoBuilder::new().currline(1, moves).build()
        }
        SearchInfo::Refutation { root_move, line } => {
            let moves = line.iter().map(Move::to_uci).collect();
            InfoBuilder::new().refutation(&root_move.to_uci(), moves).build()
        }
    }
}

/// Writes an engine-to-GUI message to stdout directly, bypassing
/// [`uci::UciEngine`]'s writer so it can be called from the search
/// worker's callback thread as well as the main command loop.
fn emit(msg: &EngineMessage) {
    println!("{}", msg.to_uci());
    let _ = std::io::stdout().flush();
}

fn declare_options() {
    emit(&EngineMessage::Option {
        name: "Hash".to_string(),
        kind: UciOptionKind::Spin { default: DEFAULT_HASH_MB as i64, min: 1, max: 4096 },
    });
    emit(&EngineMessage::Option {
        name: "OwnBook".to_string(),
        kind: UciOptionKind::Check { default: true },
    });
    emit(&EngineMessage::Option {
        name: "Ponder".to_string(),
        kind: UciOptionKind::Check { default: true },
    });
    emit(&EngineMessage::Option {
        name: "UCI_AnalyseMode".to_string(),
        kind: UciOptionKind::Check { default: false },
    });
    emit(&EngineMessage::Option {
        name: "UCI_ShowCurrLine".to_string(),
        kind: UciOptionKind::Check { default: false },
    });
    emit(&EngineMessage::Option {
        name: "UCI_ShowRefutations".to_string(),
        kind: UciOptionKind::Check { default: false },
    });
}

fn run_perft(fen: &str, depth: u32) -> anyhow::Result<()> {
    let position = if fen.eq_ignore_ascii_case("startpos") {
        Position::startpos()
    } else {
        Position::from_fen(fen).map_err(|e| anyhow::anyhow!("invalid FEN '{fen}': {e}"))?
    };

    for (mv, nodes) in perft_divide(&position, depth) {
        println!("{mv}: {nodes}");
    }
    println!("nodes searched: {}", perft(&position, depth));
    Ok(())
}

fn run_uci_loop(cli: &Cli) -> anyhow::Result<()> {
    let mut engine = stdio_engine();
    let mut state = EngineState::new(cli.depth);
    let mut hash_mb = cli.hash_mb.max(1);
    let mut context = SearchContext::with_hash_size_mb(hash_mb);

    loop {
        let cmd = match engine.read_command() {
            Ok(cmd) => cmd,
            Err(err) => {
                tracing::warn!(%err, "failed to read UCI command");
                continue;
            }
        };

        match cmd {
            GuiCommand::Uci => {
                emit(&EngineMessage::Id {
                    name: Some("chess-engine".to_string()),
                    author: Some("Tom Metten".to_string()),
                });
                declare_options();
                emit(&EngineMessage::UciOk);
            }
            GuiCommand::Extensions => {
                emit(&EngineMessage::ExtensionsOk);
            }
            GuiCommand::IsReady => {
                context.wait();
                emit(&EngineMessage::ReadyOk);
            }
            GuiCommand::UciNewGame => {
                context.abort();
                context.wait();
                context.reset();
                context.wait();
                state = EngineState::new(cli.depth);
            }
            GuiCommand::SetOption { name, value } => match name.as_str() {
                "Hash" => {
                    if let Some(mb) = value.as_deref().and_then(|v| v.parse::<usize>().ok()) {
                        context.abort();
                        context.wait();
                        hash_mb = mb.max(1);
                        context = SearchContext::with_hash_size_mb(hash_mb);
                    }
                }
                "OwnBook" => {
                    if let Some(value) = &value {
                        state.own_book = value.eq_ignore_ascii_case("true");
                    }
                }
                "UCI_ShowCurrLine" => {
                    if let Some(value) = &value {
                        state.show_curr_line = value.eq_ignore_ascii_case("true");
                    }
                }
                "UCI_ShowRefutations" => {
                    if let Some(value) = &value {
                        state.show_refutations = value.eq_ignore_ascii_case("true");
                    }
                }
                other => {
                    tracing::debug!(option = other, "ignoring unknown setoption name");
                }
            },
            GuiCommand::Position { fen, moves } => {
                state.set_position(fen, moves);
            }
            GuiCommand::Go(opts) => {
                if let Some(book_move) = state.book_move() {
                    tracing::debug!(mv = %book_move.to_uci(), "playing opening book move");
                    emit(&EngineMessage::BestMove { mv: book_move.to_uci(), ponder: None });
                    continue;
                }

                let search_options = build_search_options(&opts, &state.position, &state);
                context.search(
                    state.position.clone(),
                    search_options,
                    |partial| {
                        if partial.best_move.is_some() {
                            emit(&EngineMessage::Info(build_info(partial)));
                        }
                    },
                    |info| {
                        emit(&EngineMessage::Info(build_info_event(info)));
                    },
                    |result| {
                        let mv = result.best_move.map(|m| m.to_uci()).unwrap_or_else(|| "0000".to_string());
                        emit(&EngineMessage::BestMove { mv, ponder: None });
                    },
                );
            }
            GuiCommand::Stop => {
                context.abort();
            }
            GuiCommand::Quit => break,
            GuiCommand::Unknown(line) => {
                if !line.is_empty() {
                    tracing::debug!(%line, "ignoring unrecognized UCI command");
                }
            }
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Some(args) = &cli.perft {
        let depth: u32 = args[1].parse().context("invalid perft depth")?;
        return run_perft(&args[0], depth);
    }

    run_uci_loop(&cli)
}
