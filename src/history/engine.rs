//! Position history engine.
//!
//! Owns the canonical current position, a linear branch-truncating history
//! of plies, and a navigation cursor. Every mutating operation is
//! synchronous: it completes, broadcasts its event, and returns before the
//! next call is accepted. Callers own the instance and its lifetime; there
//! is no shared global, so independent sessions and tests can run side by
//! side in one process.

use log::{debug, warn};

use crate::cache::canonical_lru::CanonicalizationCache;
use crate::chess_types::{Color, Move, Position, TerminalStatus};
use crate::errors::TrainerError;
use crate::history::events::{EngineEvent, EventListener, StateUpdate, UpdateSource};
use crate::history::ply::Ply;
use crate::notation::normalizer::{normalize, RawMoveInput};
use crate::oracle::oracle_trait::RulesOracle;

/// Branch-truncating move history with undo/redo navigation.
///
/// Invariants:
/// - `cursor` stays in `[-1, plies.len() - 1]`; `-1` means "at root".
/// - `plies[i].position_before` equals the previous ply's
///   `position_after` (or the root for `i == 0`).
/// - the current position is the root at `cursor == -1`, otherwise
///   `plies[cursor].position_after`.
pub struct HistoryEngine<O: RulesOracle> {
    oracle: O,
    cache: CanonicalizationCache,
    root: Option<Position>,
    plies: Vec<Ply>,
    cursor: isize,
    listeners: Vec<EventListener>,
}

impl<O: RulesOracle> HistoryEngine<O> {
    pub fn new(oracle: O) -> Self {
        Self::with_cache(oracle, CanonicalizationCache::new())
    }

    pub fn with_cache(oracle: O, cache: CanonicalizationCache) -> Self {
        Self {
            oracle,
            cache,
            root: None,
            plies: Vec::new(),
            cursor: -1,
            listeners: Vec::new(),
        }
    }

    /// Subscribe a listener to every event the engine emits. Listeners
    /// receive immutable snapshot payloads and must not assume anything
    /// about the engine's internal representation.
    pub fn subscribe(&mut self, listener: impl FnMut(&EngineEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Start (or restart) a session from `raw` position input. On success
    /// the history is cleared, the root and current position become the
    /// canonical form of `raw`, and a `Load` snapshot is emitted. On
    /// failure the state is left entirely unchanged.
    pub fn initialize(&mut self, raw: &str) -> bool {
        let canonical = match self.cache.get(raw) {
            Some(position) => position,
            None => match self.oracle.canonicalize(raw) {
                Ok(position) => {
                    self.cache.put(raw, position.clone());
                    position
                }
                Err(error) => {
                    warn!("rejected position input {raw:?}: {error}");
                    self.emit_error(error, Some(raw.to_owned()));
                    return false;
                }
            },
        };

        debug!("initializing session at {canonical}");
        self.root = Some(canonical);
        self.plies.clear();
        self.cursor = -1;
        self.emit_state(UpdateSource::Load);
        true
    }

    /// Normalize and apply one move against the current position. Success
    /// discards any forward history beyond the cursor, appends a new ply,
    /// advances the cursor, emits a `Move` snapshot, and returns the ply.
    /// Failure leaves the state unchanged, emits an error event, and
    /// returns `None`.
    pub fn apply_move<I: Into<RawMoveInput>>(&mut self, input: I) -> Option<Ply> {
        let raw = input.into();
        let Some(current) = self.current_position() else {
            self.emit_error(
                TrainerError::InvalidMove(raw.describe()),
                Some(raw.describe()),
            );
            return None;
        };

        let intent = normalize(&raw);
        match self.oracle.apply(&current, &intent) {
            Ok((mv, next)) => {
                let keep = (self.cursor + 1) as usize;
                if keep < self.plies.len() {
                    debug!(
                        "discarding {} forward plies before appending {}",
                        self.plies.len() - keep,
                        mv.notation
                    );
                    self.plies.truncate(keep);
                }

                let ply = Ply {
                    mv,
                    position_before: current,
                    position_after: next,
                    sequence_index: keep,
                };
                self.plies.push(ply.clone());
                self.cursor = self.plies.len() as isize - 1;
                self.emit_state(UpdateSource::Move);
                Some(ply)
            }
            Err(error) => {
                warn!("rejected move input {:?}: {error}", raw.describe());
                self.emit_error(error, Some(raw.describe()));
                None
            }
        }
    }

    /// Step the cursor one ply back. Keeps every recorded ply so a later
    /// `redo` can walk forward again.
    pub fn undo(&mut self) -> bool {
        if self.cursor < 0 {
            self.emit_error(TrainerError::NoHistoryToUndo, None);
            return false;
        }
        self.cursor -= 1;
        self.emit_state(UpdateSource::Undo);
        true
    }

    /// Step the cursor one ply forward over previously undone history.
    pub fn redo(&mut self) -> bool {
        if self.cursor >= self.plies.len() as isize - 1 {
            self.emit_error(TrainerError::NoHistoryToRedo, None);
            return false;
        }
        self.cursor += 1;
        self.emit_state(UpdateSource::Redo);
        true
    }

    /// Jump the cursor directly to `index` (`-1` is the root). Out-of-range
    /// indices fail with an error event and leave the state unchanged.
    pub fn go_to_ply(&mut self, index: isize) -> bool {
        if index < -1 || index >= self.plies.len() as isize {
            self.emit_error(TrainerError::IndexOutOfRange(index), None);
            return false;
        }
        self.cursor = index;
        self.emit_state(UpdateSource::Load);
        true
    }

    /// Restore the root captured at the last `initialize`, discarding all
    /// plies. A no-op before the first successful `initialize`.
    pub fn reset(&mut self) {
        if self.root.is_none() {
            warn!("reset called before initialize; ignoring");
            return;
        }
        self.plies.clear();
        self.cursor = -1;
        self.emit_state(UpdateSource::Reset);
    }

    // --- Queries (no side effects, no events) ---

    pub fn current_position(&self) -> Option<Position> {
        self.root.as_ref()?;
        Some(self.current_position_unchecked())
    }

    /// Plies from the root up to and including the cursor. Plies retained
    /// only for `redo` are not part of this view.
    pub fn visible_history(&self) -> &[Ply] {
        &self.plies[..(self.cursor + 1) as usize]
    }

    #[inline]
    pub fn cursor(&self) -> isize {
        self.cursor
    }

    /// Long-form notation of the visible plies, space-joined.
    pub fn move_log(&self) -> String {
        self.visible_history()
            .iter()
            .map(|ply| ply.mv.notation.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn side_to_move(&self) -> Option<Color> {
        Some(self.oracle.side_to_move(&self.current_position()?))
    }

    pub fn terminal_status(&self) -> Option<TerminalStatus> {
        Some(self.oracle.terminal_status(&self.current_position()?))
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        match self.current_position() {
            Some(position) => self.oracle.legal_moves(&position),
            None => Vec::new(),
        }
    }

    pub fn cache_stats(&self) -> crate::cache::canonical_lru::CacheStats {
        self.cache.stats()
    }

    // --- Internals ---

    fn current_position_unchecked(&self) -> Position {
        debug_assert!(self.cursor >= -1 && self.cursor < self.plies.len() as isize);
        if self.cursor < 0 {
            self.root
                .clone()
                .expect("callers check root before this point")
        } else {
            self.plies[self.cursor as usize].position_after.clone()
        }
    }

    fn emit_state(&mut self, source: UpdateSource) {
        let position = self.current_position_unchecked();
        let status = self.oracle.terminal_status(&position);
        let terminal_result = status.result(self.oracle.side_to_move(&position));
        let update = StateUpdate {
            position,
            move_log: self.move_log(),
            visible_history: self.visible_history().to_vec(),
            cursor: self.cursor,
            is_terminal: status.is_terminal(),
            terminal_result,
            source,
        };
        self.broadcast(&EngineEvent::State(update));
    }

    fn emit_error(&mut self, error: TrainerError, input: Option<String>) {
        self.broadcast(&EngineEvent::Error { error, input });
    }

    fn broadcast(&mut self, event: &EngineEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};
    use std::rc::Rc;

    use super::HistoryEngine;
    use crate::chess_types::{Color, Move, MoveFlags, Position, Square, TerminalStatus};
    use crate::errors::TrainerError;
    use crate::history::events::{EngineEvent, UpdateSource};
    use crate::notation::normalizer::RawMoveInput;
    use crate::oracle::oracle_trait::RulesOracle;

    /// Table-driven oracle double: positions and transitions are scripted
    /// per test, everything else is rejected.
    #[derive(Default)]
    struct ScriptedOracle {
        positions: HashSet<String>,
        // (position, rendered intent) -> (move notation, next position)
        transitions: HashMap<(String, String), (String, String)>,
        terminal: HashMap<String, TerminalStatus>,
    }

    impl ScriptedOracle {
        fn with_position(mut self, position: &str) -> Self {
            self.positions.insert(position.to_owned());
            self
        }

        fn with_transition(mut self, from: &str, intent: &str, to: &str) -> Self {
            self.positions.insert(from.to_owned());
            self.positions.insert(to.to_owned());
            self.transitions.insert(
                (from.to_owned(), intent.to_owned()),
                (intent.to_owned(), to.to_owned()),
            );
            self
        }

        fn with_terminal(mut self, position: &str, status: TerminalStatus) -> Self {
            self.terminal.insert(position.to_owned(), status);
            self
        }
    }

    impl RulesOracle for ScriptedOracle {
        fn canonicalize(&self, raw: &str) -> Result<Position, TrainerError> {
            let trimmed = raw.trim();
            if self.positions.contains(trimmed) {
                Ok(Position::new(trimmed))
            } else {
                Err(TrainerError::InvalidPosition(raw.to_owned()))
            }
        }

        fn apply(
            &self,
            position: &Position,
            intent: &crate::notation::move_intent::MoveIntent,
        ) -> Result<(Move, Position), TrainerError> {
            let key = (position.as_str().to_owned(), intent.to_string());
            match self.transitions.get(&key) {
                Some((notation, next)) => Ok((test_move(notation), Position::new(next))),
                None => Err(TrainerError::InvalidMove(intent.to_string())),
            }
        }

        fn terminal_status(&self, position: &Position) -> TerminalStatus {
            self.terminal
                .get(position.as_str())
                .copied()
                .unwrap_or_default()
        }

        fn side_to_move(&self, _position: &Position) -> Color {
            Color::Light
        }

        fn legal_moves(&self, position: &Position) -> Vec<Move> {
            self.transitions
                .iter()
                .filter(|((from, _), _)| from == position.as_str())
                .map(|(_, (notation, _))| test_move(notation))
                .collect()
        }
    }

    fn test_move(lan: &str) -> Move {
        Move {
            from: Square::from_text(&lan[0..2]).expect("scripted from-square"),
            to: Square::from_text(&lan[2..4]).expect("scripted to-square"),
            promotion: None,
            notation: lan.to_owned(),
            flags: MoveFlags::default(),
        }
    }

    fn three_move_oracle() -> ScriptedOracle {
        ScriptedOracle::default()
            .with_transition("P0", "e2e4", "P1")
            .with_transition("P1", "e7e5", "P2")
            .with_transition("P2", "g1f3", "P3")
            .with_transition("P1", "c7c5", "P4")
    }

    #[test]
    fn undo_redo_round_trip_restores_position_and_history() {
        let mut engine = HistoryEngine::new(three_move_oracle());
        assert!(engine.initialize("P0"));
        for mv in ["e2e4", "e7e5", "g1f3"] {
            engine.apply_move(mv).expect("scripted move applies");
        }
        let full_log = engine.move_log();
        let final_position = engine.current_position().expect("initialized");

        for _ in 0..3 {
            assert!(engine.undo());
        }
        assert_eq!(engine.cursor(), -1);
        assert_eq!(engine.current_position().expect("at root").as_str(), "P0");
        assert!(engine.visible_history().is_empty());

        for _ in 0..3 {
            assert!(engine.redo());
        }
        assert_eq!(engine.current_position().expect("restored"), final_position);
        assert_eq!(engine.move_log(), full_log);
        assert_eq!(engine.visible_history().len(), 3);
    }

    #[test]
    fn applying_after_undo_truncates_the_forward_branch() {
        let mut engine = HistoryEngine::new(three_move_oracle());
        assert!(engine.initialize("P0"));
        engine.apply_move("e2e4").expect("move A");
        engine.apply_move("e7e5").expect("move B");
        assert!(engine.undo());

        let ply_c = engine.apply_move("c7c5").expect("move C replaces B");
        assert_eq!(ply_c.sequence_index, 1);

        // B is unrecoverable.
        assert!(!engine.redo());
        let visible: Vec<&str> = engine
            .visible_history()
            .iter()
            .map(|ply| ply.mv.notation.as_str())
            .collect();
        assert_eq!(visible, vec!["e2e4", "c7c5"]);
        assert_eq!(engine.current_position().expect("after C").as_str(), "P4");
    }

    #[test]
    fn root_fidelity_under_navigation_and_reset() {
        let mut engine = HistoryEngine::new(three_move_oracle());
        assert!(engine.initialize("P0"));
        engine.apply_move("e2e4").expect("move applies");
        engine.apply_move("e7e5").expect("move applies");
        assert!(engine.undo());

        assert!(engine.go_to_ply(-1));
        assert_eq!(engine.current_position().expect("at root").as_str(), "P0");

        assert!(engine.go_to_ply(1));
        engine.reset();
        assert_eq!(engine.current_position().expect("reset root").as_str(), "P0");
        assert_eq!(engine.cursor(), -1);
        assert!(engine.visible_history().is_empty());
    }

    #[test]
    fn reinitialize_replaces_the_root_not_a_default() {
        let mut engine = HistoryEngine::new(three_move_oracle().with_position("Q0"));
        assert!(engine.initialize("P0"));
        engine.apply_move("e2e4").expect("move applies");

        assert!(engine.initialize("Q0"));
        assert_eq!(engine.current_position().expect("new root").as_str(), "Q0");
        assert!(engine.visible_history().is_empty());

        engine.reset();
        assert_eq!(engine.current_position().expect("still Q0").as_str(), "Q0");
    }

    #[test]
    fn failures_emit_error_events_and_leave_state_unchanged() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut engine = HistoryEngine::new(three_move_oracle());
        engine.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        assert!(!engine.initialize("bogus"));
        assert!(engine.current_position().is_none());

        assert!(engine.initialize("P0"));
        engine.apply_move("e2e4").expect("move applies");
        let position_before = engine.current_position().expect("initialized");

        assert!(engine.apply_move("h7h5").is_none());
        assert!(engine.apply_move("not a move").is_none());
        assert!(!engine.redo());
        assert!(!engine.go_to_ply(5));
        assert!(!engine.go_to_ply(-2));
        assert!(engine.undo());
        assert!(!engine.undo());

        assert_eq!(engine.current_position().expect("at root").as_str(), "P0");
        assert_eq!(position_before.as_str(), "P1");

        let recorded = events.borrow();
        let errors: Vec<&TrainerError> = recorded
            .iter()
            .filter_map(|event| match event {
                EngineEvent::Error { error, .. } => Some(error),
                EngineEvent::State(_) => None,
            })
            .collect();
        assert_eq!(
            errors,
            vec![
                &TrainerError::InvalidPosition("bogus".to_owned()),
                &TrainerError::InvalidMove("h7h5".to_owned()),
                &TrainerError::InvalidMove("not a move".to_owned()),
                &TrainerError::NoHistoryToRedo,
                &TrainerError::IndexOutOfRange(5),
                &TrainerError::IndexOutOfRange(-2),
                &TrainerError::NoHistoryToUndo,
            ]
        );
    }

    #[test]
    fn snapshots_carry_source_log_and_terminal_state() {
        let mate = TerminalStatus {
            checkmate: true,
            ..TerminalStatus::default()
        };
        let oracle = three_move_oracle().with_terminal("P2", mate);

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut engine = HistoryEngine::new(oracle);
        engine.subscribe(move |event| {
            if let EngineEvent::State(update) = event {
                sink.borrow_mut().push(update.clone());
            }
        });

        assert!(engine.initialize("P0"));
        engine.apply_move("e2e4").expect("move applies");
        engine.apply_move("e7e5").expect("move applies");
        assert!(engine.undo());
        assert!(engine.redo());
        engine.reset();

        let recorded = events.borrow();
        let sources: Vec<UpdateSource> = recorded.iter().map(|u| u.source).collect();
        assert_eq!(
            sources,
            vec![
                UpdateSource::Load,
                UpdateSource::Move,
                UpdateSource::Move,
                UpdateSource::Undo,
                UpdateSource::Redo,
                UpdateSource::Reset,
            ]
        );

        let after_two = &recorded[2];
        assert_eq!(after_two.move_log, "e2e4 e7e5");
        assert_eq!(after_two.cursor, 1);
        assert!(after_two.is_terminal);
        assert_eq!(
            after_two.terminal_result.expect("mate result").as_str(),
            "0-1"
        );

        let after_undo = &recorded[3];
        assert_eq!(after_undo.move_log, "e2e4");
        assert_eq!(after_undo.visible_history.len(), 1);
        assert!(!after_undo.is_terminal);
    }

    #[test]
    fn repeated_initialize_hits_the_canonicalization_cache() {
        let mut engine = HistoryEngine::new(three_move_oracle());
        assert!(engine.initialize("P0"));
        assert!(engine.initialize("P0"));
        assert!(engine.initialize("P0"));

        let stats = engine.cache_stats();
        assert_eq!(stats.insertions, 1);
        assert_eq!(stats.hits, 2);
    }

    #[test]
    fn parts_input_is_accepted_alongside_text() {
        let mut engine = HistoryEngine::new(three_move_oracle());
        assert!(engine.initialize("P0"));
        let ply = engine
            .apply_move(RawMoveInput::parts("e2", "e4", None))
            .expect("parts input applies");
        assert_eq!(ply.mv.notation, "e2e4");
    }

    #[test]
    fn end_to_end_training_turn_on_a_won_pawn_endgame() {
        use crate::catalog::catalog_types::{CandidateMove, MoveCatalog, OutcomeClass};
        use crate::catalog::provider::MoveCatalogProvider;
        use crate::catalog::session::CatalogSession;
        use crate::strategies::longest_resistance::LongestResistanceStrategy;
        use crate::strategies::objective_best::ObjectiveBestStrategy;
        use crate::strategies::strategy_trait::SelectionStrategy;

        const ROOT: &str = "K7/P7/k7/8/8/8/8/8 w - - 0 1";
        const AFTER: &str = "1K6/P7/k7/8/8/8/8/8 b - - 1 1";

        struct SingleWinProvider;

        impl MoveCatalogProvider for SingleWinProvider {
            fn fetch(&mut self, position: &Position) -> MoveCatalog {
                if position.as_str() == ROOT {
                    MoveCatalog::new(vec![CandidateMove {
                        mv: test_move("a8b8"),
                        outcome: OutcomeClass::Win,
                        dtz: Some(7),
                        dtm: Some(15),
                    }])
                } else {
                    MoveCatalog::unavailable()
                }
            }
        }

        let oracle = ScriptedOracle::default().with_transition(ROOT, "a8b8", AFTER);
        let mut engine = HistoryEngine::new(oracle);
        assert!(engine.initialize(ROOT));

        let position = engine.current_position().expect("initialized");
        let mut provider = SingleWinProvider;
        let mut session = CatalogSession::new();
        let ticket = session.begin(&position);
        let catalog = session
            .accept(&ticket, &position, provider.fetch(&position))
            .expect("fresh response for the current position");

        let best = ObjectiveBestStrategy::new()
            .choose(&catalog)
            .expect("single win candidate");
        let resist = LongestResistanceStrategy::new()
            .choose(&catalog)
            .expect("single win candidate");
        assert_eq!(best, resist);
        assert_eq!(best.notation, "a8b8");

        let ply = engine
            .apply_move(best.notation.as_str())
            .expect("chosen move applies");
        assert_eq!(ply.position_after.as_str(), AFTER);
        assert_eq!(engine.move_log(), "a8b8");
    }

    #[test]
    fn operations_before_initialize_fail_gracefully() {
        let mut engine = HistoryEngine::new(ScriptedOracle::default());
        assert!(engine.apply_move("e2e4").is_none());
        assert!(!engine.undo());
        assert!(!engine.redo());
        assert!(engine.current_position().is_none());
        assert!(engine.legal_moves().is_empty());
        engine.reset();
        assert_eq!(engine.cursor(), -1);
    }
}
