//! Game session: owns board, hand, deck and progress for one game.
//!
//! All mutation happens in response to a single input and runs to
//! completion. A resolved move is held as the one pending move until
//! `commit` applies it; while it is pending every other input is
//! ignored, so a move can never be resolved against stale state.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, instrument, warn};

use super::outcome::{SessionSnapshot, TurnOutcome, TurnReport};
use super::progress::{Counters, Progress};
use crate::board::{Board, TileBehavior};
use crate::cards::{CardId, Deck, Hand, InstanceAllocator, MoveCatalog, StackId};
use crate::core::config::{PenaltySettings, SpawnRule, StageConfig};
use crate::core::coord::Point;
use crate::core::error::ConfigError;
use crate::core::rng::GameRng;
use crate::resolver::{
    available_moves, has_legal_move, resolve_selection, resolve_tap, ForcedSelection, MoveCandidate,
    ResolvedCardMove, SelectionResolution, TapResolution,
};
use crate::scoring::{evaluate, ClearMetrics, Evaluation, StageThresholds};

/// One game on one stage.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    catalog: MoveCatalog,
    hand: Hand,
    deck: Deck,
    rng: GameRng,
    instances: InstanceAllocator,
    penalties: PenaltySettings,
    thresholds: StageThresholds,

    position: Option<Point>,
    progress: Progress,
    counters: Counters,

    /// Choice card waiting for a destination tap.
    selection: Option<ForcedSelection>,
    /// Resolved but not yet applied.
    pending: Option<ResolvedCardMove>,
    history: Vector<ResolvedCardMove>,
}

impl GameSession {
    /// Build a session and deal the opening hand.
    ///
    /// With `SpawnRule::Fixed` the spawn tile is visited and play starts
    /// immediately; otherwise the session waits in `AwaitingSpawn`.
    pub fn new(config: &StageConfig, catalog: MoveCatalog) -> Result<Self, ConfigError> {
        config.validate(&catalog)?;

        let mut rng = GameRng::new(config.seed);
        let mut instances = InstanceAllocator::new();
        let cards = config.deck.iter().map(|&card| instances.deal(card)).collect();
        let deck = Deck::new(cards, config.deck_order, config.recycle_discards, &mut rng);

        let mut session = Self {
            board: Board::new(&config.layout),
            catalog,
            hand: Hand::with_stacks(config.hand_size),
            deck,
            rng,
            instances,
            penalties: config.penalties,
            thresholds: config.thresholds.clone(),
            position: None,
            progress: Progress::AwaitingSpawn,
            counters: Counters::default(),
            selection: None,
            pending: None,
            history: Vector::new(),
        };
        session.deal_hand();

        if let SpawnRule::Fixed(point) = config.spawn {
            session.spawn_at(point);
        }
        Ok(session)
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn catalog(&self) -> &MoveCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    #[must_use]
    pub fn counters(&self) -> Counters {
        self.counters
    }

    #[must_use]
    pub fn penalties(&self) -> PenaltySettings {
        self.penalties
    }

    #[must_use]
    pub fn thresholds(&self) -> &StageThresholds {
        &self.thresholds
    }

    #[must_use]
    pub fn selection(&self) -> Option<&ForcedSelection> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&ResolvedCardMove> {
        self.pending.as_ref()
    }

    /// Every move applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ResolvedCardMove> {
        &self.history
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.deck.draw_count()
    }

    /// Legal candidates from the current position. Empty unless playing.
    #[must_use]
    pub fn available_moves(&self) -> Vec<MoveCandidate> {
        match (self.progress, self.position) {
            (Progress::Playing, Some(origin)) => available_moves(&self.board, origin, &self.hand, &self.catalog),
            _ => Vec::new(),
        }
    }

    /// Tiles the player may spawn on. Empty once spawned.
    #[must_use]
    pub fn spawn_candidates(&self) -> Vec<Point> {
        if self.progress != Progress::AwaitingSpawn {
            return Vec::new();
        }
        self.board.traversable_points().collect()
    }

    /// O(1) copy of everything the presentation layer draws.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board.clone(),
            hand: self.hand.clone(),
            position: self.position,
            progress: self.progress,
            counters: self.counters,
        }
    }

    // === Player input ===

    /// Player tapped a hand stack.
    ///
    /// Tapping the already-selected stack deselects it.
    pub fn select_stack(&mut self, stack: StackId) -> TurnOutcome {
        if self.pending.is_some() || self.progress != Progress::Playing {
            return TurnOutcome::Ignored;
        }
        if self.selection.as_ref().is_some_and(|s| s.stack == stack) {
            self.selection = None;
            return TurnOutcome::SelectionCleared;
        }

        let candidates = self.available_moves();
        match resolve_selection(&candidates, stack) {
            SelectionResolution::Unavailable => {
                self.selection = None;
                TurnOutcome::Ignored
            }
            SelectionResolution::Resolved(played) => {
                self.selection = None;
                self.set_pending(played)
            }
            SelectionResolution::ChooseDestination(forced) => {
                let destinations: SmallVec<[Point; 4]> = forced.destinations().collect();
                debug!(%stack, options = destinations.len(), "choice card selected");
                self.selection = Some(forced);
                TurnOutcome::AwaitingDestination { stack, destinations }
            }
        }
    }

    /// Player tapped a board tile.
    pub fn tap(&mut self, point: Point) -> TurnOutcome {
        if self.pending.is_some() {
            return TurnOutcome::Ignored;
        }

        match self.progress {
            Progress::AwaitingSpawn => {
                if !self.board.is_traversable(point) {
                    return TurnOutcome::Ignored;
                }
                self.spawn_at(point);
                TurnOutcome::SpawnChosen(point)
            }
            Progress::Playing => self.tap_while_playing(point),
            Progress::Cleared | Progress::Deadlock => TurnOutcome::Ignored,
        }
    }

    fn tap_while_playing(&mut self, point: Point) -> TurnOutcome {
        if let Some(forced) = self.selection.take() {
            return match forced.resolve(point) {
                Some(played) => self.set_pending(played),
                None => TurnOutcome::SelectionCleared,
            };
        }

        let candidates = self.available_moves();
        match resolve_tap(&candidates, point) {
            TapResolution::NoMatch => TurnOutcome::Ignored,
            TapResolution::Resolved(played) => self.set_pending(played),
            TapResolution::Conflict(warning) => {
                debug!(destination = %point, stacks = warning.stacks.len(), "ambiguous tap");
                TurnOutcome::Conflict(warning)
            }
        }
    }

    fn set_pending(&mut self, played: ResolvedCardMove) -> TurnOutcome {
        self.pending = Some(played);
        TurnOutcome::Resolved(played)
    }

    /// Drop the pending move without applying it.
    pub fn discard_pending(&mut self) -> Option<ResolvedCardMove> {
        self.pending.take()
    }

    /// Apply the pending move.
    ///
    /// Visits the destination, updates counters, replaces the played
    /// card and re-evaluates progress, all in one step. Returns `None`
    /// if nothing was pending or the move no longer matches the state.
    #[instrument(level = "debug", skip(self))]
    pub fn commit(&mut self) -> Option<TurnReport> {
        let played = self.pending.take()?;
        if !self.is_applicable(&played) {
            warn!(?played, "dropping stale pending move");
            return None;
        }

        let penalties_before = self.counters.penalties;
        let revisit = self.board.tile(played.destination).is_some_and(|t| {
            t.is_visited() && t.behavior() != TileBehavior::Toggle
        });

        self.board.mark_visited(played.destination);
        self.position = Some(played.destination);
        self.counters.moves = self.counters.moves.saturating_add(1);
        if revisit {
            self.counters.revisits = self.counters.revisits.saturating_add(1);
            self.counters.add_penalty(self.penalties.revisit);
        }
        self.replace_top(played.stack);
        self.history.push_back(played);

        debug!(
            from = %played.origin,
            to = %played.destination,
            card = %played.card.card,
            revisit,
            "move applied"
        );
        self.settle();

        Some(TurnReport {
            played,
            revisit,
            penalty_applied: self.counters.penalties - penalties_before,
            progress: self.progress,
            remaining: self.board.remaining_count(),
        })
    }

    fn is_applicable(&self, played: &ResolvedCardMove) -> bool {
        self.progress == Progress::Playing
            && self.position == Some(played.origin)
            && self.hand.top(played.stack) == Some(&played.card)
            && self.catalog.vectors(played.card.card).contains(&played.vector)
            && played.origin.translate(played.vector) == played.destination
            && self.board.is_traversable(played.destination)
    }

    // === Hand actions ===

    /// Discard the whole hand and deal a new one, paying the redraw cost.
    #[instrument(level = "debug", skip(self))]
    pub fn manual_redraw(&mut self) -> bool {
        if !self.can_change_hand() {
            return false;
        }
        self.redraw();
        self.counters.add_penalty(self.penalties.manual_redraw);
        debug!(penalty = self.penalties.manual_redraw, "manual redraw");
        self.settle();
        true
    }

    /// Discard one stack's top card and draw its replacement, paying the
    /// discard cost.
    #[instrument(level = "debug", skip(self))]
    pub fn manual_discard(&mut self, stack: StackId) -> bool {
        if !self.can_change_hand() || self.hand.top(stack).is_none() {
            return false;
        }
        self.replace_top(stack);
        self.counters.add_penalty(self.penalties.manual_discard);
        debug!(%stack, penalty = self.penalties.manual_discard, "manual discard");
        self.settle();
        true
    }

    /// System-initiated redraw out of a deadlock. The deadlock cost was
    /// already paid on entry, so this one is free.
    pub fn redraw_after_deadlock(&mut self) -> bool {
        if self.progress != Progress::Deadlock || self.pending.is_some() {
            return false;
        }
        self.redraw();
        self.settle();
        true
    }

    /// Replace the hand with fresh copies of `cards`, one per stack
    /// (wrapping onto earlier stacks if there are more cards than
    /// stacks). The old hand goes to the discard pile.
    pub fn replace_hand(&mut self, cards: &[CardId]) -> bool {
        if self.progress.is_terminal() || self.pending.is_some() {
            return false;
        }
        self.selection = None;
        for old in self.hand.clear() {
            self.deck.discard(old);
        }
        let stacks = self.hand.stack_count().max(1);
        for (i, &card) in cards.iter().enumerate() {
            let dealt = self.instances.deal(card);
            self.hand.push(StackId(i % stacks), dealt);
        }
        self.settle();
        true
    }

    fn can_change_hand(&self) -> bool {
        self.progress.accepts_hand_actions() && self.pending.is_none()
    }

    fn redraw(&mut self) {
        self.selection = None;
        for old in self.hand.clear() {
            self.deck.discard(old);
        }
        self.deal_hand();
    }

    fn deal_hand(&mut self) {
        for i in 0..self.hand.stack_count() {
            if let Some(card) = self.deck.draw(&mut self.rng) {
                self.hand.push(StackId(i), card);
            }
        }
    }

    /// Move a stack's top card to the discard pile and draw onto the stack.
    fn replace_top(&mut self, stack: StackId) {
        self.selection = None;
        if let Some(old) = self.hand.take_top(stack) {
            self.deck.discard(old);
        }
        if let Some(next) = self.deck.draw(&mut self.rng) {
            self.hand.push(stack, next);
        }
    }

    // === Progress ===

    fn spawn_at(&mut self, point: Point) {
        self.board.mark_visited(point);
        self.position = Some(point);
        self.progress = Progress::Playing;
        debug!(%point, "spawned");
        self.settle();
    }

    /// Re-derive progress after any state change.
    fn settle(&mut self) {
        let Some(origin) = self.position else {
            return;
        };
        if self.progress == Progress::Cleared {
            return;
        }
        if self.board.is_cleared() {
            self.progress = Progress::Cleared;
            debug!(moves = self.counters.moves, penalties = self.counters.penalties, "board cleared");
            return;
        }

        let can_move = has_legal_move(&self.board, origin, &self.hand, &self.catalog);
        match (self.progress, can_move) {
            (Progress::Playing, false) => {
                self.progress = Progress::Deadlock;
                self.selection = None;
                self.counters.add_penalty(self.penalties.deadlock);
                debug!(%origin, penalty = self.penalties.deadlock, "deadlock");
            }
            (Progress::Deadlock, true) => {
                self.progress = Progress::Playing;
                debug!(%origin, "deadlock resolved");
            }
            _ => {}
        }
    }

    // === Terminal output ===

    /// Metrics for the evaluator; `None` until cleared.
    ///
    /// Elapsed time comes from the caller, who owns the clock and any
    /// pausing.
    #[must_use]
    pub fn clear_metrics(&self, elapsed_seconds: u64, total_move_count: u32) -> Option<ClearMetrics> {
        if self.progress != Progress::Cleared {
            return None;
        }
        Some(ClearMetrics {
            move_count: self.counters.moves,
            penalty_count: self.counters.penalties,
            elapsed_seconds,
            total_move_count,
            score: self.counters.score(),
            revisited: self.counters.revisits > 0,
        })
    }

    /// Evaluate this clear against the stage thresholds.
    #[must_use]
    pub fn evaluate(&self, elapsed_seconds: u64, total_move_count: u32) -> Option<Evaluation> {
        self.clear_metrics(elapsed_seconds, total_move_count)
            .map(|metrics| evaluate(&metrics, &self.thresholds))
    }
}
