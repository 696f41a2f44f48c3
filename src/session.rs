//! Turn bookkeeping around a [Board] for an interactive game:
//! who is human, whether the game runs, forced passes and a single level of undo.
use crate::ai::Bot;
use crate::board::{Board, BoardDone, Outcome, PlayError, Player};

/// How the two sides are controlled.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Mode {
    HumanVsHuman,
    HumanVsAi { ai: Player },
}

/// Boards where a player can be forced to give up their turn.
pub trait ForcedPass: Board {
    /// The pass move if the next player has nothing else to play, `None` otherwise.
    fn forced_pass(&self) -> Option<Self::Move> {
        None
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("the game has not been started")]
    NotStarted,
    #[error("the game is over")]
    GameOver,
    #[error("it is the AI's turn")]
    AiTurn,
    #[error("it is not the AI's turn")]
    NotAiTurn,
    #[error("the move is not available")]
    UnavailableMove,
    #[error("there is nothing to undo")]
    NothingToUndo,
}

impl From<BoardDone> for SessionError {
    fn from(_: BoardDone) -> Self {
        SessionError::GameOver
    }
}

impl From<PlayError> for SessionError {
    fn from(e: PlayError) -> Self {
        match e {
            PlayError::BoardDone => SessionError::GameOver,
            PlayError::UnavailableMove => SessionError::UnavailableMove,
        }
    }
}

/// The state after a move was played.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Turn<M> {
    pub played: M,
    /// The player whose turn was skipped with a forced pass right after `played`.
    pub skipped: Option<Player>,
    pub outcome: Option<Outcome>,
    pub next_player: Player,
    /// Whether the AI should move now.
    pub ai_to_move: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession<B: ForcedPass> {
    start: B,
    board: B,
    mode: Mode,
    started: bool,
    undo: Option<B>,
}

impl<B: ForcedPass> GameSession<B> {
    /// A stopped session on `start`, call [GameSession::start] to begin playing.
    pub fn new(start: B, mode: Mode) -> Self {
        GameSession {
            board: start.clone(),
            start,
            mode,
            started: false,
            undo: None,
        }
    }

    /// Reset to the start position and begin a new game.
    pub fn start(&mut self) {
        tracing::info!("starting new game in mode {:?}", self.mode);
        self.board = self.start.clone();
        self.started = true;
        self.undo = None;
    }

    /// Switch modes, which resets the board and stops the game.
    pub fn set_mode(&mut self, mode: Mode) {
        tracing::info!("switching to mode {:?}", mode);
        self.mode = mode;
        self.board = self.start.clone();
        self.started = false;
        self.undo = None;
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.board.outcome()
    }

    pub fn can_undo(&self) -> bool {
        self.undo.is_some()
    }

    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            Mode::HumanVsHuman => false,
            Mode::HumanVsAi { ai } => self.started && !self.board.is_done() && self.board.next_player() == ai,
        }
    }

    fn check_running(&self) -> Result<(), SessionError> {
        if self.board.is_done() {
            return Err(SessionError::GameOver);
        }
        if !self.started {
            return Err(SessionError::NotStarted);
        }
        Ok(())
    }

    /// Play a move for the human whose turn it is. On error the board is left unchanged.
    pub fn play_human(&mut self, mv: B::Move) -> Result<Turn<B::Move>, SessionError> {
        self.check_running()?;
        if self.is_ai_turn() {
            return Err(SessionError::AiTurn);
        }
        if !self.board.is_available_move(mv)? {
            return Err(SessionError::UnavailableMove);
        }

        let snapshot = self.board.clone();
        self.board.play(mv)?;
        self.undo = Some(snapshot);

        Ok(self.finish_turn(mv))
    }

    /// Let `bot` pick and play the move for the AI side.
    pub fn play_ai(&mut self, bot: &mut impl Bot<B>) -> Result<Turn<B::Move>, SessionError> {
        self.check_running()?;
        if !self.is_ai_turn() {
            return Err(SessionError::NotAiTurn);
        }

        let mv = bot.select_move(&self.board)?;
        self.board.play(mv)?;
        self.undo = None;

        Ok(self.finish_turn(mv))
    }

    /// Restore the position from before the last human move.
    pub fn undo(&mut self) -> Result<(), SessionError> {
        let previous = self.undo.take().ok_or(SessionError::NothingToUndo)?;
        tracing::info!("undoing last move");
        self.board = previous;
        self.started = true;
        Ok(())
    }

    fn finish_turn(&mut self, played: B::Move) -> Turn<B::Move> {
        let mut skipped = None;
        if let Some(pass) = self.board.forced_pass() {
            let player = self.board.next_player();
            tracing::info!("player {:?} has no move and passes", player);
            // SAFETY: the board just reported this pass as the only option
            self.board.play(pass).unwrap();
            skipped = Some(player);
        }

        let outcome = self.board.outcome();
        if let Some(outcome) = outcome {
            tracing::info!("game over: {:?}", outcome);
            self.started = false;
            self.undo = None;
        }

        Turn {
            played,
            skipped,
            outcome,
            next_player: self.board.next_player(),
            ai_to_move: self.is_ai_turn(),
        }
    }
}
