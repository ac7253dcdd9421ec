//! Threaded search controller.
//!
//! A single long-lived worker thread owns the transposition table and runs
//! searches to completion or abort; the public handle only ever touches an
//! atomic abort flag and a condvar-guarded command slot, so `search`,
//! `abort`, `wait`, and `reset` are all cheap and non-blocking to call from
//! the UCI read loop, regardless of what the worker is doing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::JoinHandle;

use super::negamax::iterative_deepening;
use super::tt::TranspositionTable;
use super::{SearchInfo, SearchOptions, SearchResult};
use crate::Position;

/// Default transposition table size, matching the `Hash` UCI option's
/// documented default.
pub const DEFAULT_HASH_MB: usize = 16;

/// Observable status of a [`SearchContext`]'s worker thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Running,
}

type IterationCallback = Box<dyn Fn(&SearchResult) + Send + 'static>;
type InfoCallback = Box<dyn Fn(SearchInfo) + Send + 'static>;
type CompletionCallback = Box<dyn FnOnce(SearchResult) + Send + 'static>;

struct Job {
    position: Position,
    options: SearchOptions,
    on_iteration: Option<IterationCallback>,
    on_info: Option<InfoCallback>,
    on_complete: Option<CompletionCallback>,
}

enum Command {
    Search(Job),
    Reset,
    Shutdown,
}

struct Shared {
    status: SearchState,
    pending: Option<Command>,
}

struct Inner {
    mutex: Mutex<Shared>,
    idle_cv: Condvar,
    abort: AtomicBool,
}

/// Owns a dedicated search worker thread and the transposition table it
/// searches with.
pub struct SearchContext {
    inner: Arc<Inner>,
    worker: Option<JoinHandle<()>>,
}

impl SearchContext {
    /// Spawns a worker thread with a transposition table of the given size.
    #[must_use]
    pub fn with_hash_size_mb(hash_mb: usize) -> Self {
        let inner = Arc::new(Inner {
            mutex: Mutex::new(Shared { status: SearchState::Idle, pending: None }),
            idle_cv: Condvar::new(),
            abort: AtomicBool::new(false),
        });

        let worker_inner = Arc::clone(&inner);
        let worker = std::thread::Builder::new()
            .name("chess-search".into())
            .spawn(move || worker_loop(worker_inner, hash_mb))
            .expect("failed to spawn search worker thread");

        Self { inner, worker: Some(worker) }
    }

    #[must_use]
    pub fn new() -> Self {
        Self::with_hash_size_mb(DEFAULT_HASH_MB)
    }

    /// Starts a search asynchronously; returns immediately. `on_iteration`
    /// fires after each completed depth, `on_info` fires for optional
    /// mid-search diagnostics (gated by `options.show_curr_line`/
    /// `show_refutations`), and `on_complete` fires exactly once, when the
    /// search ends (by running out of depth/time/nodes or by `abort`).
    pub fn search(
        &self,
        position: Position,
        options: SearchOptions,
        on_iteration: impl Fn(&SearchResult) + Send + 'static,
        on_info: impl Fn(SearchInfo) + Send + 'static,
        on_complete: impl FnOnce(SearchResult) + Send + 'static,
    ) {
        self.inner.abort.store(false, Ordering::Relaxed);
        let job = Job {
            position,
            options,
            on_iteration: Some(Box::new(on_iteration)),
            on_info: Some(Box::new(on_info)),
            on_complete: Some(Box::new(on_complete)),
        };
        self.dispatch(Command::Search(job));
    }

    /// Requests that the in-flight search stop at its next abort check and
    /// return its best move so far. Returns immediately; the search may
    /// still be running briefly after this call returns.
    pub fn abort(&self) {
        self.inner.abort.store(true, Ordering::Relaxed);
    }

    /// Blocks the calling thread until the worker is idle.
    pub fn wait(&self) {
        let guard = self.inner.mutex.lock().unwrap();
        let _guard = self
            .inner
            .idle_cv
            .wait_while(guard, |shared| shared.status != SearchState::Idle)
            .unwrap();
    }

    /// Clears the transposition table. Queued after any in-flight search.
    pub fn reset(&self) {
        self.dispatch(Command::Reset);
    }

    #[must_use]
    pub fn state(&self) -> SearchState {
        self.inner.mutex.lock().unwrap().status
    }

    fn dispatch(&self, command: Command) {
        let mut shared = self.inner.mutex.lock().unwrap();
        shared.pending = Some(command);
        shared.status = SearchState::Running;
        self.inner.idle_cv.notify_all();
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SearchContext {
    fn drop(&mut self) {
        self.inner.abort.store(true, Ordering::Relaxed);
        self.dispatch(Command::Shutdown);
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

fn worker_loop(inner: Arc<Inner>, hash_mb: usize) {
    let mut tt = TranspositionTable::with_size_mb(hash_mb);

    loop {
        let command = {
            let mut shared = inner.mutex.lock().unwrap();
            loop {
                if let Some(command) = shared.pending.take() {
                    break command;
                }
                shared.status = SearchState::Idle;
                inner.idle_cv.notify_all();
                shared = inner.idle_cv.wait(shared).unwrap();
            }
        };

        match command {
            Command::Shutdown => {
                let mut shared = inner.mutex.lock().unwrap();
                shared.status = SearchState::Idle;
                inner.idle_cv.notify_all();
                return;
            }
            Command::Reset => {
                tt.clear();
                let mut shared = inner.mutex.lock().unwrap();
                shared.status = SearchState::Idle;
                inner.idle_cv.notify_all();
            }
            Command::Search(mut job) => {
                let on_iteration = job.on_iteration.take();
                let on_info = job.on_info.take();
                let result = iterative_deepening(
                    &job.position,
                    &job.options,
                    &mut tt,
                    &inner.abort,
                    move |partial| {
                        if let Some(cb) = &on_iteration {
                            cb(partial);
                        }
                    },
                    move |info| {
                        if let Some(cb) = &on_info {
                            cb(info);
                        }
                    },
                );
                if let Some(on_complete) = job.on_complete.take() {
                    on_complete(result);
                }
                let mut shared = inner.mutex.lock().unwrap();
                shared.status = SearchState::Idle;
                inner.idle_cv.notify_all();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn search_reports_completion() {
        let context = SearchContext::with_hash_size_mb(1);
        let (tx, rx) = mpsc::channel();
        let options = SearchOptions { depth: Some(3), ..Default::default() };
        context.search(Position::startpos(), options, |_| {}, |_| {}, move |result| {
            let _ = tx.send(result);
        });
        let result = rx.recv_timeout(Duration::from_secs(5)).expect("search completed");
        assert!(result.best_move.is_some());
        context.wait();
        assert_eq!(context.state(), SearchState::Idle);
    }

    #[test]
    fn abort_stops_an_infinite_search() {
        let context = SearchContext::with_hash_size_mb(1);
        let options = SearchOptions { infinite: true, ..Default::default() };
        context.search(Position::startpos(), options, |_| {}, |_| {}, |_| {});
        std::thread::sleep(Duration::from_millis(20));
        context.abort();
        context.wait();
        assert_eq!(context.state(), SearchState::Idle);
    }

    #[test]
    fn emits_refutations_when_requested() {
        let context = SearchContext::with_hash_size_mb(1);
        let (tx, rx) = mpsc::channel();
        let options = SearchOptions {
            depth: Some(3),
            show_refutations: true,
            ..Default::default()
        };
        context.search(
            Position::startpos(),
            options,
            |_| {},
            move |info| {
                let _ = tx.send(info);
            },
            |_| {},
        );
        let info = rx.recv_timeout(Duration::from_secs(5)).expect("at least one refutation emitted");
        assert!(matches!(info, SearchInfo::Refutation { .. }));
        context.wait();
    }

    #[test]
    fn no_info_emitted_when_not_requested() {
        let context = SearchContext::with_hash_size_mb(1);
        let (tx, rx) = mpsc::channel();
        let options = SearchOptions { depth: Some(3), ..Default::default() };
        context.search(
            Position::startpos(),
            options,
            |_| {},
            move |info| {
                let _ = tx.send(info);
            },
            |_| {},
        );
        context.wait();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn reset_clears_between_searches() {
        let context = SearchContext::with_hash_size_mb(1);
        context.reset();
        context.wait();
        assert_eq!(context.state(), SearchState::Idle);
    }
}
