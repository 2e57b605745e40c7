//! Game orchestration between two players.

use crate::PlayError;
use crate::games::tictactoe::{Board, GameStatus, Mark, Outcome};
use crate::players::Player;
use tracing::{debug, info, instrument, warn};

/// Mark that makes the first move of every game.
pub const FIRST_MOVER: Mark = Mark::O;

/// Events emitted to an observer as the game progresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The first move is about to be requested.
    Started {
        /// Mark that moves first.
        first_mover: Mark,
    },
    /// A move was applied.
    MoveMade {
        /// Mark that moved.
        mark: Mark,
        /// Cell the mark was placed on.
        index: usize,
        /// Board after the move.
        board: Board,
    },
    /// Game ended.
    GameOver {
        /// Final result.
        outcome: Outcome,
    },
}

/// Receives game events; used for rendering and never affects the outcome.
pub trait Observer {
    /// Handles one event.
    fn notify(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> Observer for F {
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Orchestrates gameplay between two players on one board.
pub struct Orchestrator<'a> {
    board: Board,
    player_x: Box<dyn Player + 'a>,
    player_o: Box<dyn Player + 'a>,
    current: Mark,
    status: GameStatus,
    started: bool,
    observer: Option<Box<dyn Observer + 'a>>,
}

impl<'a> Orchestrator<'a> {
    /// Creates a new orchestrator with an empty board.
    ///
    /// # Errors
    ///
    /// Returns `PlayError::MarkMismatch` if a player does not hold the mark of
    /// its seat.
    pub fn new(
        player_x: Box<dyn Player + 'a>,
        player_o: Box<dyn Player + 'a>,
    ) -> Result<Self, PlayError> {
        for (seat, player) in [(Mark::X, &player_x), (Mark::O, &player_o)] {
            if player.mark() != seat {
                return Err(PlayError::MarkMismatch {
                    seat,
                    mark: player.mark(),
                });
            }
        }

        Ok(Self {
            board: Board::new(),
            player_x,
            player_o,
            current: FIRST_MOVER,
            status: GameStatus::InProgress,
            started: false,
            observer: None,
        })
    }

    /// Attaches an observer that is notified after every move.
    pub fn with_observer(mut self, observer: impl Observer + 'a) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the mark due to move next.
    pub fn current_mark(&self) -> Mark {
        self.current
    }

    /// Plays a single turn and returns the resulting status.
    ///
    /// Does nothing once the game has finished.
    ///
    /// # Errors
    ///
    /// Propagates player failures, and returns `PlayError::IllegalMove` if a
    /// player picks a cell the board rejects.
    #[instrument(skip(self), fields(mark = %self.current))]
    pub fn step(&mut self) -> Result<GameStatus, PlayError> {
        if self.status != GameStatus::InProgress {
            return Ok(self.status);
        }

        if !self.started {
            self.started = true;
            self.notify(GameEvent::Started {
                first_mover: self.current,
            });
        }

        let mark = self.current;
        let player = match mark {
            Mark::X => &mut self.player_x,
            Mark::O => &mut self.player_o,
        };
        debug!(player = %player.name(), "Waiting for move");
        let index = player.choose_move(&self.board)?;

        if !self.board.apply_move(index, mark) {
            warn!(index, "Player chose an illegal move");
            return Err(PlayError::IllegalMove { mark, index });
        }
        debug!(index, "Move applied");

        self.notify(GameEvent::MoveMade {
            mark,
            index,
            board: self.board.clone(),
        });

        if let Some(winner) = self.board.winner() {
            self.status = GameStatus::Won(winner);
        } else if !self.board.has_empty() {
            self.status = GameStatus::Tied;
        } else {
            self.current = mark.opponent();
        }

        if let Some(outcome) = self.status.outcome() {
            info!(%outcome, "Game over");
            self.notify(GameEvent::GameOver { outcome });
        }

        Ok(self.status)
    }

    /// Runs the game loop to completion.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, PlayError> {
        info!(
            x = %self.player_x.name(),
            o = %self.player_o.name(),
            "Starting game"
        );

        loop {
            if let Some(outcome) = self.step()?.outcome() {
                return Ok(outcome);
            }
        }
    }

    fn notify(&mut self, event: GameEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.notify(&event);
        }
    }
}

/// Plays one silent game between the two players.
pub fn play_one_game<'a>(
    player_x: Box<dyn Player + 'a>,
    player_o: Box<dyn Player + 'a>,
) -> Result<Outcome, PlayError> {
    Orchestrator::new(player_x, player_o)?.run()
}
