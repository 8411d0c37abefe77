use crate::config::GameConfig;
use crate::error::BoardError;

use super::board::{Board, Cell};
use super::drop;
use super::player::{Player, PlayerId};
use super::windows::WindowIndex;

/// Where the game stands. Terminal states accept no further moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won(PlayerId),
    Tied,
}

/// Result of [`Game::make_move`]. Only `Placed` changes the game; the other
/// variants report why nothing happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A piece was placed in `cell_id`; `state` is the game state after the
    /// move, win and tie evaluation included.
    Placed { cell_id: usize, state: GameState },
    /// The column index is outside the board.
    InvalidColumn,
    /// The chosen column has no empty cell.
    ColumnFull,
    /// The game already ended in a win or tie.
    GameOver,
}

/// A full game: board, precomputed windows, two players, and turn state.
///
/// Single-threaded and synchronous: a call to [`Game::make_move`] commits
/// the placement together with all of its consequences before returning,
/// or changes nothing at all.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    windows: WindowIndex,
    players: [Player; 2],
    current: PlayerId,
    state: GameState,
    winning_cells: Vec<usize>,
}

impl Game {
    /// Create a game with the default player pair. Fails if either
    /// dimension is below 4.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Self::with_players(width, height, Player::default_pair())
    }

    /// Create a game with custom players; player 1 moves first.
    pub fn with_players(
        width: usize,
        height: usize,
        players: [Player; 2],
    ) -> Result<Self, BoardError> {
        let board = Board::new(width, height)?;
        let windows = WindowIndex::new(width, height);
        Ok(Game {
            board,
            windows,
            players,
            current: PlayerId::One,
            state: GameState::InProgress,
            winning_cells: Vec::new(),
        })
    }

    /// Create a game from a validated configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, BoardError> {
        Self::with_players(
            config.board.columns,
            config.board.rows,
            [
                Player::new(&config.players.one.name, &config.players.one.color),
                Player::new(&config.players.two.name, &config.players.two.color),
            ],
        )
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn windows(&self) -> &WindowIndex {
        &self.windows
    }

    /// All cells with their `(row, column, occupant)` state, for rendering.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.board.cells()
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn current_player_id(&self) -> PlayerId {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != GameState::InProgress
    }

    pub fn is_tie(&self) -> bool {
        self.state == GameState::Tied
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.state {
            GameState::Won(id) => Some(self.player(id)),
            _ => None,
        }
    }

    /// Ids of every cell in a winning window, sorted and deduplicated.
    /// Empty unless the game is won. When one move completes several
    /// windows at once, all of their cells are included.
    pub fn winning_cells(&self) -> &[usize] {
        &self.winning_cells
    }

    /// Columns that still have room. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        (0..self.board.width())
            .filter(|&column| !self.board.is_column_full(column))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// On `Placed` the move is fully committed: the cell is filled, win and
    /// tie are evaluated, and either the game ended or the turn passed to
    /// the other player. Every other outcome leaves the game untouched.
    pub fn make_move(&mut self, column: usize) -> MoveOutcome {
        if self.is_over() {
            return MoveOutcome::GameOver;
        }
        if column >= self.board.width() {
            return MoveOutcome::InvalidColumn;
        }
        let Some(cell_id) = drop::resolve_drop(&self.board, column) else {
            return MoveOutcome::ColumnFull;
        };

        let mover = self.current;
        self.board
            .fill(cell_id, mover)
            .expect("drop resolver targets an empty cell");

        let mut winning_cells: Vec<usize> = self
            .windows
            .through(cell_id)
            .filter(|window| {
                window
                    .cells()
                    .iter()
                    .all(|&id| self.cell_owner(id) == Some(mover))
            })
            .flat_map(|window| window.cells().iter().copied())
            .collect();

        if !winning_cells.is_empty() {
            winning_cells.sort_unstable();
            winning_cells.dedup();
            self.winning_cells = winning_cells;
            self.state = GameState::Won(mover);
        } else if self.board.is_full() {
            self.state = GameState::Tied;
        } else {
            self.current = self.current.other();
        }

        MoveOutcome::Placed {
            cell_id,
            state: self.state,
        }
    }

    /// Start over at the same dimensions: fresh board and windows, new cell
    /// identities, player 1 to move.
    pub fn reset(&mut self) {
        self.board = self.board.recreate();
        self.windows = WindowIndex::new(self.board.width(), self.board.height());
        self.current = PlayerId::One;
        self.state = GameState::InProgress;
        self.winning_cells.clear();
    }

    fn cell_owner(&self, cell_id: usize) -> Option<PlayerId> {
        self.board.get(cell_id).and_then(Cell::occupant)
    }
}

impl Default for Game {
    /// The classic 7x6 game with the default players.
    fn default() -> Self {
        Self::new(super::board::DEFAULT_COLS, super::board::DEFAULT_ROWS)
            .expect("default dimensions are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(game: &mut Game, column: usize) -> GameState {
        match game.make_move(column) {
            MoveOutcome::Placed { state, .. } => state,
            other => panic!("expected placement in column {column}, got {other:?}"),
        }
    }

    #[test]
    fn test_initial_state() {
        let game = Game::default();
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.current_player_id(), PlayerId::One);
        assert_eq!(game.current_player().name, "player1");
        assert_eq!(game.legal_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert!(game.winning_cells().is_empty());
    }

    #[test]
    fn test_turn_alternates_on_placement() {
        let mut game = Game::default();
        assert_eq!(place(&mut game, 3), GameState::InProgress);
        assert_eq!(game.current_player_id(), PlayerId::Two);
        assert_eq!(place(&mut game, 3), GameState::InProgress);
        assert_eq!(game.current_player_id(), PlayerId::One);
    }

    #[test]
    fn test_placement_reports_cell_id() {
        let mut game = Game::default();
        let outcome = game.make_move(3);
        assert_eq!(
            outcome,
            MoveOutcome::Placed {
                cell_id: 3,
                state: GameState::InProgress
            }
        );
        let cell = game.board().get(3).unwrap();
        assert_eq!(cell.row(), 0);
        assert_eq!(cell.occupant(), Some(PlayerId::One));
    }

    #[test]
    fn test_invalid_column() {
        let mut game = Game::default();
        assert_eq!(game.make_move(7), MoveOutcome::InvalidColumn);
        assert_eq!(game.current_player_id(), PlayerId::One);
    }

    #[test]
    fn test_column_fills_bottom_up_then_rejects() {
        let mut game = Game::default();
        for expected_row in 0..6 {
            let outcome = game.make_move(5);
            let MoveOutcome::Placed { cell_id, .. } = outcome else {
                panic!("expected placement, got {outcome:?}");
            };
            assert_eq!(game.board().get(cell_id).unwrap().row(), expected_row);
        }
        // Attempt height + 1 bounces, and the turn does not move.
        let before = game.current_player_id();
        assert_eq!(game.make_move(5), MoveOutcome::ColumnFull);
        assert_eq!(game.current_player_id(), before);
        assert_eq!(game.legal_columns(), vec![0, 1, 2, 3, 4, 6]);
    }

    #[test]
    fn test_vertical_win_in_column_zero() {
        let mut game = Game::default();
        // Player 1 stacks column 0; player 2 parks in column 1.
        for _ in 0..3 {
            assert_eq!(place(&mut game, 0), GameState::InProgress);
            assert_eq!(place(&mut game, 1), GameState::InProgress);
        }
        assert_eq!(place(&mut game, 0), GameState::Won(PlayerId::One));
        assert!(game.is_over());
        assert!(!game.is_tie());
        assert_eq!(game.winner().map(|p| p.name.as_str()), Some("player1"));
        // Rows 0..=3 of column 0, as ids.
        assert_eq!(game.winning_cells(), &[0, 7, 14, 21]);
        // The winner stays the current player; no turn passes after the end.
        assert_eq!(game.current_player_id(), PlayerId::One);
    }

    #[test]
    fn test_ascending_diagonal_win() {
        let mut game = Game::default();
        // Player 1 ends up owning (0,0), (1,1), (2,2), (3,3).
        let script = [0, 1, 1, 2, 2, 3, 2, 3, 3, 6];
        for &column in &script {
            assert_eq!(place(&mut game, column), GameState::InProgress);
        }
        assert_eq!(place(&mut game, 3), GameState::Won(PlayerId::One));
        assert_eq!(game.winning_cells(), &[0, 8, 16, 24]);
    }

    #[test]
    fn test_horizontal_win() {
        let mut game = Game::default();
        let script = [0, 0, 1, 1, 2, 2];
        for &column in &script {
            assert_eq!(place(&mut game, column), GameState::InProgress);
        }
        assert_eq!(place(&mut game, 3), GameState::Won(PlayerId::One));
        assert_eq!(game.winning_cells(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_terminal_state_is_idempotent() {
        let mut game = Game::default();
        for _ in 0..3 {
            place(&mut game, 0);
            place(&mut game, 1);
        }
        place(&mut game, 0); // player 1 wins

        let snapshot = game.board().clone();
        for column in 0..7 {
            assert_eq!(game.make_move(column), MoveOutcome::GameOver);
        }
        assert_eq!(game.board(), &snapshot);
        assert_eq!(game.state(), GameState::Won(PlayerId::One));
        assert!(game.legal_columns().is_empty());
    }

    #[test]
    fn test_tie_on_minimum_board() {
        let mut game = Game::new(4, 4).unwrap();
        // Two passes over the columns fill the board without any
        // four-in-a-row; see the column pattern below (A = player 1):
        //   row 3:  B B A A
        //   row 2:  A A B B
        //   row 1:  B B A A
        //   row 0:  A A B B
        let order = [0, 2, 1, 3, 2, 0, 3, 1];
        for &column in &order {
            assert_eq!(place(&mut game, column), GameState::InProgress);
        }
        for &column in &order[..7] {
            assert_eq!(place(&mut game, column), GameState::InProgress);
        }
        // The 16th move fills the board; no window is monochrome.
        assert_eq!(place(&mut game, 1), GameState::Tied);
        assert!(game.is_tie());
        assert!(game.winner().is_none());
        assert!(game.board().is_full());
        assert_eq!(game.make_move(0), MoveOutcome::GameOver);
    }

    #[test]
    fn test_reset_round_trip() {
        let mut game = Game::default();
        for _ in 0..3 {
            place(&mut game, 0);
            place(&mut game, 1);
        }
        place(&mut game, 0); // player 1 wins
        assert!(game.is_over());

        game.reset();
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.current_player_id(), PlayerId::One);
        assert!(game.cells().all(|cell| cell.occupant().is_none()));
        assert!(game.winning_cells().is_empty());
        assert_eq!(game.board().width(), 7);
        assert_eq!(game.board().height(), 6);
        assert_eq!(game.windows().len(), 69);

        // The fresh board plays normally.
        assert_eq!(place(&mut game, 4), GameState::InProgress);
        assert_eq!(game.current_player_id(), PlayerId::Two);
    }

    #[test]
    fn test_custom_players_pass_through() {
        let players = [
            Player::new("alice", "crimson"),
            Player::new("bob", "gold"),
        ];
        let mut game = Game::with_players(7, 6, players).unwrap();
        assert_eq!(game.current_player().name, "alice");
        place(&mut game, 0);
        assert_eq!(game.current_player().color, "gold");
    }

    #[test]
    fn test_double_win_collects_both_windows() {
        let mut game = Game::default();
        // Player 1's final piece at (0,3) completes two windows at once:
        // the horizontal (0,0)..(0,3) and the descending diagonal
        // (3,0),(2,1),(1,2),(0,3).
        //
        //   row 3:  A . . .
        //   row 2:  B A . .
        //   row 1:  B B A .  B .
        //   row 0:  A A A *  B B
        //           0 1 2 3  4 5
        let script = [0, 0, 1, 1, 2, 0, 2, 4, 1, 5, 0, 4];
        for &column in &script {
            assert_eq!(place(&mut game, column), GameState::InProgress);
        }
        assert_eq!(place(&mut game, 3), GameState::Won(PlayerId::One));
        // Union of both windows: row 0 columns 0..=3 plus the diagonal
        // cells (1,2), (2,1), (3,0).
        assert_eq!(game.winning_cells(), &[0, 1, 2, 3, 9, 15, 21]);
    }
}
