//! Core domain types for N×N tic-tac-toe.

use crate::coord::Coord;
use crate::error::BoardSizeError;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A placed mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Mark {
    /// Owner of the mark.
    pub player: Player,
    /// Whether the mark belongs to the winning line.
    #[new(value = "false")]
    pub highlighted: bool,
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the owning player, if any.
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark.player),
        }
    }

    /// Returns true if the cell is part of a highlighted winning line.
    pub fn is_highlighted(&self) -> bool {
        matches!(self, Cell::Occupied(Mark { highlighted: true, .. }))
    }

    /// Returns true if nothing is placed here.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Validated board dimension N.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
#[derive(derive_more::Display)]
#[display("{}", _0)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest playable board.
    pub const MIN: usize = 1;
    /// Largest supported board.
    pub const MAX: usize = 32;
    /// Classic 3×3.
    pub const CLASSIC: BoardSize = BoardSize(3);

    /// Validates a board dimension.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(BoardSizeError {
                requested: size,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Returns N.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// N×N board stored in row-major order.
///
/// `Clone` is a deep copy: snapshots never share cell storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.get() * size.get()],
        }
    }

    /// Returns the board dimension.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the cell at `coord`, or `None` when off the board.
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        if coord.fits(self.size.get()) {
            self.cells.get(coord.to_index(self.size.get()))
        } else {
            None
        }
    }

    /// Checks if the cell at `coord` is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Returns true if `coord` holds a mark of `player`.
    pub fn is_owned_by(&self, coord: Coord, player: Player) -> bool {
        self.get(coord).and_then(Cell::player) == Some(player)
    }

    /// Places an unhighlighted mark. Caller guarantees `coord` is on the board.
    pub(crate) fn place(&mut self, coord: Coord, player: Player) {
        let index = coord.to_index(self.size.get());
        self.cells[index] = Cell::Occupied(Mark::new(player));
    }

    /// Sets the highlight flag on an occupied cell.
    pub(crate) fn highlight(&mut self, coord: Coord) {
        let index = coord.to_index(self.size.get());
        if let Some(Cell::Occupied(mark)) = self.cells.get_mut(index) {
            mark.highlighted = true;
        }
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.get())
    }

    /// Iterates `(coord, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        let size = self.size.get();
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (Coord::from_index(index, size), cell))
    }

    /// Coordinates of every empty cell.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Highlighted marks are wrapped in brackets, empty cells are dots.
    pub fn display(&self) -> String {
        let size = self.size.get();
        let separator = vec!["---"; size].join("+");
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => " . ".to_string(),
                        Cell::Occupied(Mark {
                            player,
                            highlighted: true,
                        }) => format!("[{}]", player),
                        Cell::Occupied(Mark { player, .. }) => format!(" {} ", player),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join(&format!("\n{}\n", separator))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
