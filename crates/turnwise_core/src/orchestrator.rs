//! Game orchestration between players.
//!
//! The orchestrator owns the only mutable board. Each call to
//! [`Orchestrator::step`] advances one transition of the state machine:
//!
//! ```text
//! Setup -> AwaitingMove(One) -> Applying -> AwaitingMove(Two) -> ... -> Terminal
//! ```
//!
//! An illegal move from a human keeps the machine in `AwaitingMove`; an
//! illegal move from a computer is returned as an error.

use crate::player::{Player, PlayerKind};
use crate::{GameError, GameRules, GameStatus, PlayerId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Default number of consecutive rejections tolerated from a human.
pub const DEFAULT_MAX_REJECTIONS: usize = 3;

/// Where the orchestrator is in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase<M> {
    /// Board not yet created.
    Setup,
    /// Waiting for the given player to propose a move.
    AwaitingMove(PlayerId),
    /// A validated move is about to be placed.
    Applying {
        /// The mover.
        player: PlayerId,
        /// The validated move.
        mv: M,
    },
    /// Game over. Absorbing.
    Terminal(GameStatus),
}

/// A move together with the seat that played it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct PlayedMove<M> {
    /// The mover.
    pub player: PlayerId,
    /// The move.
    pub mv: M,
}

/// Final outcome of a game and how it got there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord<M> {
    status: GameStatus,
    moves: Vec<PlayedMove<M>>,
}

impl<M> GameRecord<M> {
    /// Final status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves in the order they were played.
    pub fn moves(&self) -> &[PlayedMove<M>] {
        &self.moves
    }
}

/// Notifications sent to observers while a game runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent<M> {
    /// The board was created.
    Started,
    /// A player was asked for a move.
    MoveRequested(PlayerId),
    /// A human move failed the legality check.
    MoveRejected {
        /// The proposer.
        player: PlayerId,
        /// The refused move.
        mv: M,
        /// Why it was refused.
        reason: GameError,
    },
    /// A move was placed on the board.
    MovePlayed(PlayedMove<M>),
    /// The game reached a terminal state.
    Finished(GameStatus),
}

/// Receives game events along with the board as it stands afterwards.
pub trait GameObserver<G: GameRules> {
    /// Handles one event.
    fn on_event(&mut self, board: &G::Board, event: &GameEvent<G::Move>);
}

/// Drives two players through one game.
pub struct Orchestrator<G: GameRules> {
    rules: G,
    board: G::Board,
    players: [Box<dyn Player<G>>; 2],
    phase: Phase<G::Move>,
    moves: Vec<PlayedMove<G::Move>>,
    rejections: usize,
    max_rejections: usize,
    observers: Vec<Box<dyn GameObserver<G>>>,
}

impl<G: GameRules> Orchestrator<G> {
    /// Creates an orchestrator in the `Setup` phase.
    pub fn new(rules: G, player_one: Box<dyn Player<G>>, player_two: Box<dyn Player<G>>) -> Self {
        let board = rules.new_board();
        Self {
            rules,
            board,
            players: [player_one, player_two],
            phase: Phase::Setup,
            moves: Vec::new(),
            rejections: 0,
            max_rejections: DEFAULT_MAX_REJECTIONS,
            observers: Vec::new(),
        }
    }

    /// Sets how many illegal moves in a row a human may propose.
    pub fn with_max_rejections(mut self, max_rejections: usize) -> Self {
        self.max_rejections = max_rejections;
        self
    }

    /// Registers an observer.
    pub fn with_observer(mut self, observer: impl GameObserver<G> + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// The rules being played.
    pub fn rules(&self) -> &G {
        &self.rules
    }

    /// The live board.
    pub fn board(&self) -> &G::Board {
        &self.board
    }

    /// Current phase.
    pub fn phase(&self) -> &Phase<G::Move> {
        &self.phase
    }

    /// Moves played so far.
    pub fn moves(&self) -> &[PlayedMove<G::Move>] {
        &self.moves
    }

    /// The player in `seat`.
    pub fn player(&self, seat: PlayerId) -> &dyn Player<G> {
        self.players[seat.index()].as_ref()
    }

    /// Final record once the game is over.
    pub fn record(&self) -> Option<GameRecord<G::Move>> {
        match self.phase {
            Phase::Terminal(status) => Some(GameRecord {
                status,
                moves: self.moves.clone(),
            }),
            _ => None,
        }
    }

    /// Runs the game loop to completion.
    #[instrument(skip(self), fields(game = self.rules.name()))]
    pub fn run(&mut self) -> Result<GameRecord<G::Move>, GameError> {
        info!(
            player_one = self.players[0].name(),
            player_two = self.players[1].name(),
            "Starting game"
        );
        loop {
            if let Some(record) = self.record() {
                return Ok(record);
            }
            self.step()?;
        }
    }

    /// Advances the state machine by one transition.
    pub fn step(&mut self) -> Result<&Phase<G::Move>, GameError> {
        match self.phase {
            Phase::Setup => self.setup()?,
            Phase::AwaitingMove(player) => self.request_move(player)?,
            Phase::Applying { player, mv } => self.apply_move(player, mv)?,
            Phase::Terminal(_) => return Err(GameError::GameOver),
        }
        Ok(&self.phase)
    }

    fn setup(&mut self) -> Result<(), GameError> {
        self.board = self.rules.new_board();
        self.moves.clear();
        self.rejections = 0;
        self.emit(GameEvent::Started);

        let status = self.rules.status(&self.board)?;
        if status.is_terminal() {
            self.finish(status);
        } else {
            self.phase = Phase::AwaitingMove(PlayerId::One);
        }
        Ok(())
    }

    fn request_move(&mut self, player: PlayerId) -> Result<(), GameError> {
        self.emit(GameEvent::MoveRequested(player));

        let seat = &mut self.players[player.index()];
        debug!(%player, name = seat.name(), "Waiting for move");
        let mv = seat.take_turn(&self.rules, &self.board, player)?;

        let reason = match self.rules.check_move(&self.board, mv) {
            Ok(()) => {
                self.rejections = 0;
                self.phase = Phase::Applying { player, mv };
                return Ok(());
            }
            Err(reason) => reason,
        };

        if seat.kind() == PlayerKind::Computer {
            return Err(GameError::IllegalStrategyMove {
                player,
                detail: reason.to_string(),
            });
        }

        self.rejections += 1;
        seat.on_rejected(mv, &reason);
        warn!(%player, %mv, %reason, attempt = self.rejections, "Illegal move, asking again");
        self.emit(GameEvent::MoveRejected { player, mv, reason });

        if self.rejections > self.max_rejections {
            return Err(GameError::TooManyRejections {
                player,
                attempts: self.rejections,
            });
        }
        Ok(())
    }

    fn apply_move(&mut self, player: PlayerId, mv: G::Move) -> Result<(), GameError> {
        self.rules.apply(&mut self.board, player, mv)?;
        let played = PlayedMove::new(player, mv);
        self.moves.push(played);
        debug!(%player, %mv, ply = self.moves.len(), "Move applied");
        self.emit(GameEvent::MovePlayed(played));

        let status = self.rules.status(&self.board)?;
        if status.is_terminal() {
            self.finish(status);
        } else {
            self.phase = Phase::AwaitingMove(player.opponent());
        }
        Ok(())
    }

    fn finish(&mut self, status: GameStatus) {
        info!(%status, moves = self.moves.len(), "Game over");
        self.phase = Phase::Terminal(status);
        self.emit(GameEvent::Finished(status));
    }

    fn emit(&mut self, event: GameEvent<G::Move>) {
        for observer in &mut self.observers {
            observer.on_event(&self.board, &event);
        }
    }
}

impl<G: GameRules> std::fmt::Debug for Orchestrator<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("game", &self.rules.name())
            .field("phase", &self.phase)
            .field("moves", &self.moves)
            .finish()
    }
}
