/// Identifies one of the two players. Cells and the game's turn state store
/// this copyable id instead of a reference to the [`Player`] itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Index into a `[Player; 2]` pair
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// A player's display attributes. `color` is a presentation pass-through the
/// engine never interprets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub color: String,
}

impl Player {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            color: color.into(),
        }
    }

    /// The conventional pairing: player 1 is red and moves first.
    pub fn default_pair() -> [Player; 2] {
        [
            Player::new("player1", "red"),
            Player::new("player2", "yellow"),
        ]
    }
}
