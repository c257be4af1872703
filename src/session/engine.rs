//! The session: one game from first team to winner.
//!
//! `Session` is the only type a presentation layer talks to. Each user
//! intent maps to one method that validates, mutates the components,
//! collects the resulting [`SessionEvent`]s, notifies the observer, and
//! saves a snapshot. A rejected intent returns an error and changes
//! nothing.
//!
//! ## Turn Flow
//!
//! ```text
//! draw_card      -> card shown, countdown restarted
//! card_success   -> +points, move, countdown stopped, card cleared
//! skip_card      -> move, countdown stopped, card cleared
//!                   then: finish reached  -> GameWon (terminal)
//!                         special square  -> BonusTurn prompt
//!                         otherwise       -> next team
//! tick (expiry)  -> TimeUp prompt if a card is showing
//! acknowledge    -> resolve the pending prompt
//! ```
//!
//! A pending prompt is also resolved implicitly by the next draw or dice
//! roll, the way dismissing a dialog by carrying on playing would.

use crate::board::{Board, Landing};
use crate::cards::{Card, Catalog, Deck};
use crate::core::{
    DicePolicy, GameError, GameRng, InvalidState, PersistenceError, Result, SessionConfig, Team,
    TeamId,
};
use crate::roster::Roster;
use crate::timer::{Countdown, NullScheduler, Tick, TickScheduler, TickToken};

use super::events::{Events, NoopObserver, Observer, SessionEvent};
use super::intent::Intent;
use super::phase::{Prompt, SessionPhase};
use super::snapshot::Snapshot;
use super::store::{NullStore, SnapshotStore};

/// How a shown card was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Resolution {
    Success,
    Skip,
}

/// Builder for a [`Session`].
///
/// Every component has a default derived from the config; hosts inject
/// the ones they want to control.
///
/// ```
/// use astro_pictionary::core::SessionConfig;
/// use astro_pictionary::session::{MemoryStore, SessionBuilder};
///
/// let mut session = SessionBuilder::new()
///     .config(SessionConfig::default().with_seed(7))
///     .store(MemoryStore::new())
///     .build()
///     .unwrap();
///
/// session.add_team("Alpha").unwrap();
/// assert!(session.game_started());
/// ```
pub struct SessionBuilder {
    config: SessionConfig,
    catalog: Catalog,
    deck: Option<Deck>,
    roster: Option<Roster>,
    board: Option<Board>,
    timer: Option<Countdown>,
    store: Box<dyn SnapshotStore>,
    scheduler: Box<dyn TickScheduler>,
    observer: Box<dyn Observer>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            config: SessionConfig::default(),
            catalog: Catalog::astronomy(),
            deck: None,
            roster: None,
            board: None,
            timer: None,
            store: Box::new(NullStore),
            scheduler: Box::new(NullScheduler),
            observer: Box::new(NoopObserver),
        }
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Card tables for the default deck.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn roster(mut self, roster: Roster) -> Self {
        self.roster = Some(roster);
        self
    }

    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    pub fn timer(mut self, timer: Countdown) -> Self {
        self.timer = Some(timer);
        self
    }

    pub fn store(mut self, store: impl SnapshotStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    pub fn scheduler(mut self, scheduler: impl TickScheduler + 'static) -> Self {
        self.scheduler = Box::new(scheduler);
        self
    }

    pub fn observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Validate the config and build the deck.
    pub fn build(self) -> Result<Session> {
        let config = self.config;
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut deck = self
            .deck
            .unwrap_or_else(|| Deck::new(self.catalog, rng.for_context("deck")));
        deck.build()?;

        let roster = self
            .roster
            .unwrap_or_else(|| Roster::new(config.max_teams, config.palette.clone()));
        let board = self
            .board
            .unwrap_or_else(|| Board::new(config.board_length, config.special_spaces.clone()));
        let timer = self
            .timer
            .unwrap_or_else(|| Countdown::new(config.timer_seconds));

        tracing::info!(seed = rng.seed(), cards = deck.len(), "session created");

        Ok(Session {
            config,
            deck,
            timer,
            roster,
            board,
            dice: rng.for_context("dice"),
            current_card: None,
            game_started: false,
            prompt: None,
            winner: None,
            last_roll: None,
            persistence_healthy: true,
            store: self.store,
            scheduler: self.scheduler,
            observer: self.observer,
        })
    }
}

/// A single game session.
pub struct Session {
    config: SessionConfig,
    deck: Deck,
    timer: Countdown,
    roster: Roster,
    board: Board,
    dice: GameRng,
    current_card: Option<Card>,
    game_started: bool,
    prompt: Option<Prompt>,
    winner: Option<TeamId>,
    last_roll: Option<u32>,
    persistence_healthy: bool,
    store: Box<dyn SnapshotStore>,
    scheduler: Box<dyn TickScheduler>,
    observer: Box<dyn Observer>,
}

impl Session {
    /// Session with default components and no persistence.
    pub fn new(config: SessionConfig) -> Result<Self> {
        SessionBuilder::new().config(config).build()
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if let Some(team) = self.winner {
            return SessionPhase::Won(team);
        }
        if self.roster.is_empty() {
            return SessionPhase::NoTeams;
        }
        match self.prompt {
            Some(Prompt::BonusTurn { .. }) => SessionPhase::BonusPrompt,
            Some(Prompt::TimeUp) => SessionPhase::TimeUp,
            None if self.current_card.is_some() => SessionPhase::InTurn,
            None => SessionPhase::Setup,
        }
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn teams(&self) -> &[Team] {
        self.roster.teams()
    }

    #[must_use]
    pub fn active_team(&self) -> Option<&Team> {
        self.roster.active_team()
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.current_card.as_ref()
    }

    #[must_use]
    pub fn timer(&self) -> &Countdown {
        &self.timer
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn game_started(&self) -> bool {
        self.game_started
    }

    #[must_use]
    pub fn prompt(&self) -> Option<Prompt> {
        self.prompt
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Team> {
        self.winner.and_then(|id| self.roster.get(id))
    }

    /// Value of the most recent dice roll.
    #[must_use]
    pub fn last_roll(&self) -> Option<u32> {
        self.last_roll
    }

    /// False when the most recent save or load failed; the game continues
    /// in memory but may not survive a reload.
    #[must_use]
    pub fn persistence_healthy(&self) -> bool {
        self.persistence_healthy
    }

    // === Intents ===

    /// Run any user intent.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Events> {
        match intent {
            Intent::AddTeam(name) => self.add_team(&name),
            Intent::DrawCard => self.draw_card(),
            Intent::CardSuccess => self.card_success(),
            Intent::SkipCard => self.skip_card(),
            Intent::RollDice => self.roll_dice(),
            Intent::ToggleTimer => self.toggle_timer(),
            Intent::SetActiveTeam(index) => self.set_active_team(index),
            Intent::ResetSession => self.reset_session(),
            Intent::Acknowledge => self.acknowledge(),
        }
    }

    /// Add a team. The first team starts the game.
    pub fn add_team(&mut self, name: &str) -> Result<Events> {
        self.ensure_not_won()?;

        let team = self.roster.add_team(name)?.clone();
        if self.roster.len() == 1 {
            self.game_started = true;
        }
        tracing::info!(team = %team.id, name = %team.name, total = self.roster.len(), "team added");

        let mut events = Events::new();
        events.push(SessionEvent::TeamAdded { team });
        Ok(self.finish(events))
    }

    /// Show a new card and restart the countdown.
    ///
    /// Replaces any card already showing.
    pub fn draw_card(&mut self) -> Result<Events> {
        self.ensure_playable()?;

        let draw = self.deck.draw()?;
        let mut events = Events::new();
        self.settle_prompt(&mut events);

        if draw.reshuffled {
            events.push(SessionEvent::Reshuffled);
        }
        tracing::debug!(card = %draw.card, index = draw.index, "card drawn");
        self.current_card = Some(draw.card.clone());
        events.push(SessionEvent::CardDrawn { card: draw.card });

        self.timer.reset();
        let token = self.timer.start();
        self.scheduler.arm(token);
        events.push(SessionEvent::TimerTick {
            seconds: self.timer.remaining(),
        });

        Ok(self.finish(events))
    }

    /// The active team guessed the card.
    pub fn card_success(&mut self) -> Result<Events> {
        self.resolve_card(Resolution::Success)
    }

    /// The active team passed on the card. Moves like a success but scores
    /// nothing; reaching the finish this way still wins.
    pub fn skip_card(&mut self) -> Result<Events> {
        self.resolve_card(Resolution::Skip)
    }

    /// Roll the die and move the active team.
    ///
    /// Lands on special squares are announced but do not force a draw.
    /// Turn order is left alone unless the config's dice policy is
    /// [`DicePolicy::AdvanceTurn`].
    pub fn roll_dice(&mut self) -> Result<Events> {
        self.ensure_playable()?;
        let team = self.active_team_id()?;

        let mut events = Events::new();
        self.settle_prompt(&mut events);
        // Settling may have passed the turn.
        let team = self.roster.active_team().map_or(team, |t| t.id);

        let roll = self.dice.roll_die(self.config.die_faces);
        let landing = self.board.move_team(&mut self.roster, team, roll)?;
        self.last_roll = Some(roll);
        tracing::debug!(%team, roll, position = landing.to, "dice rolled");

        events.push(SessionEvent::TeamMoved {
            team,
            position: landing.to,
        });

        if landing.won {
            self.declare_winner(team, &mut events);
        } else {
            if landing.special {
                events.push(SessionEvent::SpecialSpaceLanded {
                    team,
                    position: landing.to,
                });
            }
            if self.config.dice_policy == DicePolicy::AdvanceTurn {
                self.advance_turn(&mut events);
            }
        }

        Ok(self.finish(events))
    }

    /// Pause or resume the countdown.
    pub fn toggle_timer(&mut self) -> Result<Events> {
        self.ensure_not_won()?;

        match self.timer.toggle() {
            Some(token) => {
                self.scheduler.arm(token);
                tracing::debug!(remaining = self.timer.remaining(), "timer started");
            }
            None => {
                self.scheduler.disarm();
                tracing::debug!(remaining = self.timer.remaining(), "timer stopped");
            }
        }

        Ok(self.finish(Events::new()))
    }

    /// Make the team at `index` active.
    ///
    /// An explicit choice replaces any deferred turn change from a pending
    /// prompt; a time-up prompt still clears its card.
    pub fn set_active_team(&mut self, index: usize) -> Result<Events> {
        self.ensure_not_won()?;
        if index >= self.roster.len() {
            // Let the roster produce the error without touching anything else.
            self.roster.set_active(index)?;
        }

        let mut events = Events::new();
        if let Some(Prompt::TimeUp) = self.prompt.take() {
            self.clear_card(&mut events);
        }

        let before = self.roster.active_index();
        self.roster.set_active(index)?;
        if before != index {
            if let Some(team) = self.roster.active_team() {
                tracing::debug!(team = %team.id, "active team selected");
                events.push(SessionEvent::TurnChanged { team: team.id });
            }
        }

        Ok(self.finish(events))
    }

    /// Resolve the pending prompt, if any.
    pub fn acknowledge(&mut self) -> Result<Events> {
        if self.prompt.is_none() {
            return Ok(Events::new());
        }
        let mut events = Events::new();
        self.settle_prompt(&mut events);
        Ok(self.finish(events))
    }

    /// Deliver one second from the host clock.
    ///
    /// Ticks carrying a retired token change nothing. Ticks are not saved
    /// individually; expiry is.
    pub fn tick(&mut self, token: TickToken) -> Events {
        let mut events = Events::new();
        match self.timer.tick(token) {
            Tick::Stale => return events,
            Tick::Remaining(seconds) => {
                events.push(SessionEvent::TimerTick { seconds });
                self.notify(&events);
                return events;
            }
            Tick::Expired => {
                self.scheduler.disarm();
                tracing::info!("timer expired");
                events.push(SessionEvent::TimerTick { seconds: 0 });
                events.push(SessionEvent::TimerExpired);
                if self.current_card.is_some() && self.prompt.is_none() && self.winner.is_none() {
                    self.prompt = Some(Prompt::TimeUp);
                }
            }
        }
        self.finish(events)
    }

    /// Stop everything and start over with no teams.
    pub fn reset_session(&mut self) -> Result<Events> {
        self.deck.build()?;

        let mut events = Events::new();
        self.stop_timer();
        self.timer.reset();
        self.roster.clear();
        self.clear_card(&mut events);
        self.game_started = false;
        self.prompt = None;
        self.winner = None;
        self.last_roll = None;
        tracing::info!("session reset");

        events.push(SessionEvent::TimerTick {
            seconds: self.timer.remaining(),
        });
        Ok(self.finish(events))
    }

    /// The page is no longer visible: pause the countdown and save.
    pub fn page_hidden(&mut self) -> Events {
        if self.stop_timer() {
            tracing::debug!(remaining = self.timer.remaining(), "timer paused, page hidden");
        }
        self.finish(Events::new())
    }

    /// Save without changing anything, e.g. before the host exits.
    pub fn flush(&mut self) {
        self.persist();
    }

    // === Persistence ===

    /// Current state as a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            teams: self.roster.teams().to_vec(),
            current_team_index: self.roster.active_index(),
            current_card: self.current_card.clone(),
            timer_seconds: Some(self.timer.remaining()),
            used_cards: self.deck.used_indices().to_vec(),
            game_started: self.game_started,
            deck_order: self.deck.order_ids(),
            pending_prompt: self.prompt,
            ..Snapshot::default()
        }
    }

    /// Load the saved snapshot from the store, if there is one.
    ///
    /// Returns whether a snapshot was applied. On failure the session keeps
    /// its current state and reports the error; the countdown is never
    /// running after a load.
    pub fn load(&mut self) -> Result<bool> {
        let blob = match self.store.load(&self.config.storage_key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Ok(false),
            Err(e) => return Err(self.load_failed(e)),
        };
        let snapshot = match Snapshot::from_json(&blob) {
            Ok(snapshot) => snapshot,
            Err(e) => return Err(self.load_failed(e)),
        };
        self.restore(snapshot)?;
        Ok(true)
    }

    /// Replace the session state with `snapshot`.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<()> {
        let mut teams = snapshot.teams;
        for team in &mut teams {
            team.position = self.board.clamp(team.position);
        }

        if let Err(reason) = self.roster.restore(teams, snapshot.current_team_index) {
            return Err(self.load_failed(PersistenceError::Corrupt(reason)));
        }
        if !self.deck.restore(&snapshot.deck_order, &snapshot.used_cards)? {
            tracing::warn!("saved deck order does not match the catalog, deck rebuilt");
        }

        self.stop_timer();
        let duration = self.timer.duration();
        self.timer.restore(snapshot.timer_seconds.unwrap_or(duration));
        self.current_card = snapshot.current_card;
        self.game_started = snapshot.game_started;
        self.last_roll = None;
        self.winner = self
            .roster
            .teams()
            .iter()
            .find(|t| self.board.has_won(t.position))
            .map(|t| t.id);

        self.prompt = match snapshot.pending_prompt {
            _ if self.winner.is_some() => None,
            Some(Prompt::BonusTurn { team }) if self.roster.get(team).is_some() => {
                Some(Prompt::BonusTurn { team })
            }
            Some(Prompt::TimeUp) if self.current_card.is_some() => Some(Prompt::TimeUp),
            _ => None,
        };

        self.persistence_healthy = true;
        tracing::info!(teams = self.roster.len(), "session restored");
        Ok(())
    }

    // === Internals ===

    fn ensure_not_won(&self) -> Result<()> {
        if self.winner.is_some() {
            return Err(InvalidState::GameOver.into());
        }
        Ok(())
    }

    fn ensure_playable(&self) -> Result<()> {
        self.ensure_not_won()?;
        if self.roster.is_empty() {
            return Err(InvalidState::NoTeams.into());
        }
        Ok(())
    }

    fn active_team_id(&self) -> Result<TeamId> {
        self.roster
            .active_team()
            .map(|t| t.id)
            .ok_or_else(|| InvalidState::NoTeams.into())
    }

    fn resolve_card(&mut self, resolution: Resolution) -> Result<Events> {
        self.ensure_not_won()?;
        if self.current_card.is_none() {
            return Err(InvalidState::NoActiveCard.into());
        }
        let team = self.active_team_id()?;

        let spaces = match resolution {
            Resolution::Success => self.config.success_spaces,
            Resolution::Skip => self.config.skip_spaces,
        };
        let landing = self.board.move_team(&mut self.roster, team, spaces)?;
        self.record_resolution(team, resolution)?;

        let mut events = Events::new();
        events.push(SessionEvent::TeamMoved {
            team,
            position: landing.to,
        });

        self.stop_timer();
        // Resolving the card supersedes a time-up prompt for it.
        self.prompt = None;
        self.clear_card(&mut events);
        self.after_landing(landing, &mut events);

        Ok(self.finish(events))
    }

    fn record_resolution(&mut self, team: TeamId, resolution: Resolution) -> Result<()> {
        let points = self.config.points_per_success;
        let entry = self
            .roster
            .get_mut(team)
            .ok_or(GameError::NotFound { team })?;
        match resolution {
            Resolution::Success => {
                entry.score = entry.score.saturating_add(points);
                entry.successful_guesses = entry.successful_guesses.saturating_add(1);
            }
            Resolution::Skip => entry.skipped_cards = entry.skipped_cards.saturating_add(1),
        }
        tracing::info!(
            team = %entry.id,
            name = %entry.name,
            ?resolution,
            score = entry.score,
            position = entry.position,
            "card resolved"
        );
        Ok(())
    }

    /// Win check first, then special square, then the normal turn change.
    fn after_landing(&mut self, landing: Landing, events: &mut Events) {
        if landing.won {
            self.declare_winner(landing.team, events);
        } else if landing.special {
            events.push(SessionEvent::SpecialSpaceLanded {
                team: landing.team,
                position: landing.to,
            });
            self.prompt = Some(Prompt::BonusTurn { team: landing.team });
        } else {
            self.advance_turn(events);
        }
    }

    fn declare_winner(&mut self, team: TeamId, events: &mut Events) {
        self.stop_timer();
        self.clear_card(events);
        self.prompt = None;
        self.winner = Some(team);
        if let Some(winner) = self.roster.get(team) {
            tracing::info!(team = %winner.id, name = %winner.name, score = winner.score, "game won");
            events.push(SessionEvent::GameWon {
                team: winner.clone(),
            });
        }
    }

    fn advance_turn(&mut self, events: &mut Events) {
        if self.roster.advance() {
            if let Some(team) = self.roster.active_team() {
                events.push(SessionEvent::TurnChanged { team: team.id });
            }
        }
    }

    fn settle_prompt(&mut self, events: &mut Events) {
        match self.prompt.take() {
            Some(Prompt::BonusTurn { .. }) => self.advance_turn(events),
            Some(Prompt::TimeUp) => {
                self.clear_card(events);
                self.advance_turn(events);
            }
            None => {}
        }
    }

    fn clear_card(&mut self, events: &mut Events) {
        if self.current_card.take().is_some() {
            events.push(SessionEvent::CardCleared);
        }
    }

    /// Stop the countdown and the host clock. Returns whether it was running.
    fn stop_timer(&mut self) -> bool {
        let was_running = self.timer.stop();
        if was_running {
            self.scheduler.disarm();
        }
        was_running
    }

    fn load_failed(&mut self, error: PersistenceError) -> GameError {
        tracing::warn!(%error, "could not load saved session");
        self.persistence_healthy = false;
        error.into()
    }

    fn persist(&mut self) {
        let result = self
            .snapshot()
            .to_json()
            .and_then(|json| self.store.save(&self.config.storage_key, &json));
        match result {
            Ok(()) => {
                self.persistence_healthy = true;
                tracing::debug!("session saved");
            }
            Err(error) => {
                self.persistence_healthy = false;
                tracing::warn!(%error, "could not save session, continuing in memory");
            }
        }
    }

    fn notify(&mut self, events: &Events) {
        for event in events {
            self.observer.notify(event);
        }
    }

    fn finish(&mut self, events: Events) -> Events {
        self.persist();
        self.notify(&events);
        events
    }
}
