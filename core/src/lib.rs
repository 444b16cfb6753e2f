#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the grid robot simulator.
//!
//! This crate defines the message surface that connects callers and the
//! authoritative world. Callers submit [`Command`] values (or raw command
//! lines that [`parse`] turns into commands), the world executes them via its
//! `apply` entry point, and then reports [`Event`] values describing what
//! changed. Read-only state leaves the world as a [`StatusReport`] or a
//! [`GridView`], never as a reference into the mutable robot state.

mod error;
mod parse;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use error::{ErrorKind, SimulatorError};
pub use parse::{normalize, parse, DEFAULT_CHARGE_AMOUNT, DEFAULT_FORWARD_STEPS};

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Moves the robot along its heading by the provided number of cells.
    Forward {
        /// Number of unit steps to travel; each step costs one battery point.
        steps: u32,
    },
    /// Rotates the robot a quarter turn counter-clockwise.
    TurnLeft,
    /// Rotates the robot a quarter turn clockwise.
    TurnRight,
    /// Moves the robot a single cell diagonally.
    Diagonal {
        /// Compass diagonal to travel along.
        direction: Diagonal,
    },
    /// Requests a status report without mutating the robot.
    Report,
    /// Restores battery charge, capped at full.
    Charge {
        /// Battery points to add before capping.
        amount: u32,
    },
    /// Requests the grid classification for an external renderer.
    ShowGrid,
    /// Returns the robot to its initial pose, battery, and empty history.
    Reset,
    /// Marks a grid cell as impassable.
    PlaceObstacle {
        /// Cell that should become blocked.
        cell: CellCoord,
    },
    /// Clears an obstacle if one is present.
    RemoveObstacle {
        /// Cell that should become passable again.
        cell: CellCoord,
    },
    /// Grows the grid to exactly the provided dimensions.
    ExpandGrid {
        /// Requested number of columns.
        width: u32,
        /// Requested number of rows.
        height: u32,
    },
}

/// Events reported by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that the robot moved between two cells.
    Moved {
        /// Cell the robot occupied before moving.
        from: CellCoord,
        /// Cell the robot occupies after the move.
        to: CellCoord,
        /// Unit steps credited to the move counter.
        steps: u32,
    },
    /// Confirms that the robot rotated in place.
    Turned {
        /// Heading after the rotation.
        direction: Direction,
    },
    /// Signals that a consumption drained the battery to zero.
    ///
    /// The command that drained it still succeeds; the next consumption fails.
    BatteryDepleted,
    /// Confirms a charge and reports the capped gain.
    BatteryCharged {
        /// Battery points actually gained.
        gained: u8,
        /// Battery level after charging.
        level: u8,
    },
    /// Announces that the grid boundary grew.
    GridExpanded {
        /// Dimensions after the expansion.
        size: GridSize,
    },
    /// Confirms that an obstacle now blocks the cell.
    ObstaclePlaced {
        /// Cell that was blocked.
        cell: CellCoord,
    },
    /// Reports the outcome of an obstacle removal request.
    ObstacleRemoved {
        /// Cell named by the removal request.
        cell: CellCoord,
        /// Whether an obstacle occupied the cell before removal.
        was_present: bool,
    },
    /// Carries the status snapshot computed for a report request.
    StatusReported {
        /// Snapshot captured after the report command.
        report: StatusReport,
    },
    /// Carries the grid classification an external renderer should draw.
    GridRenderRequested {
        /// Classification of every cell at the time of the request.
        view: GridView,
    },
    /// Confirms that the robot returned to its initial state.
    Reset,
}

/// Cardinal headings available to the robot.
///
/// The declaration order is the rotation order: turning right advances one
/// ordinal, turning left retreats one, both modulo four.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Heading toward increasing `y`.
    North,
    /// Heading toward increasing `x`.
    East,
    /// Heading toward decreasing `y`.
    South,
    /// Heading toward decreasing `x`.
    West,
}

impl Direction {
    /// Every heading in rotation order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Zero-based position of the heading in rotation order.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Maps any ordinal onto a heading, wrapping modulo four.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Self {
        match ordinal % 4 {
            0 => Self::North,
            1 => Self::East,
            2 => Self::South,
            _ => Self::West,
        }
    }

    /// Heading after a quarter turn counter-clockwise.
    #[must_use]
    pub const fn turned_left(self) -> Self {
        // +3 is -1 modulo four without leaving unsigned arithmetic.
        Self::from_ordinal(self.ordinal() + 3)
    }

    /// Heading after a quarter turn clockwise.
    #[must_use]
    pub const fn turned_right(self) -> Self {
        Self::from_ordinal(self.ordinal() + 1)
    }

    /// Unit displacement `(dx, dy)` of a single step along the heading.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// Upper-case name used by status reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compass diagonals available to single-cell diagonal moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diagonal {
    /// Up and to the right.
    NorthEast,
    /// Down and to the right.
    SouthEast,
    /// Down and to the left.
    SouthWest,
    /// Up and to the left.
    NorthWest,
}

impl Diagonal {
    /// Every diagonal in the order error messages list them.
    pub const ALL: [Diagonal; 4] = [
        Diagonal::NorthEast,
        Diagonal::SouthEast,
        Diagonal::SouthWest,
        Diagonal::NorthWest,
    ];

    /// Unit displacement `(dx, dy)` of the diagonal.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::NorthEast => (1, 1),
            Self::SouthEast => (1, -1),
            Self::SouthWest => (-1, -1),
            Self::NorthWest => (-1, 1),
        }
    }

    /// Lower-case name accepted by the command grammar.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NorthEast => "northeast",
            Self::SouthEast => "southeast",
            Self::SouthWest => "southwest",
            Self::NorthWest => "northwest",
        }
    }
}

impl fmt::Display for Diagonal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Diagonal {
    type Err = SimulatorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lowered = value.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|diagonal| diagonal.name() == lowered)
            .ok_or_else(|| {
                let options: Vec<&str> = Self::ALL.iter().map(|diagonal| diagonal.name()).collect();
                SimulatorError::InvalidCommand(format!(
                    "Invalid diagonal direction: {lowered}. Valid options: {}",
                    options.join(", ")
                ))
            })
    }
}

/// Location of a single grid cell.
///
/// Coordinates are signed so that rejected targets to the south or west of
/// the origin remain representable while they are validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    x: i32,
    y: i32,
}

impl CellCoord {
    /// The cell every robot starts on.
    pub const ORIGIN: CellCoord = CellCoord::new(0, 0);

    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Zero-based column of the cell.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Zero-based row of the cell, increasing northward.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Dimensions of the grid measured in whole cells.
///
/// Serialises as a `[width, height]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    /// Creates a new size descriptor with explicit dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }
}

impl From<(u32, u32)> for GridSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

impl From<GridSize> for (u32, u32) {
    fn from(size: GridSize) -> Self {
        (size.width, size.height)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Immutable snapshot of the robot, produced without mutating the world.
///
/// Obstacle positions are deliberately reduced to a count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusReport {
    /// Column currently occupied by the robot.
    pub x: i32,
    /// Row currently occupied by the robot.
    pub y: i32,
    /// Current heading.
    pub direction: Direction,
    /// Battery level in the inclusive range 0..=100.
    pub battery: u8,
    /// Current grid dimensions.
    pub grid_size: GridSize,
    /// Cumulative number of unit steps taken.
    pub moves: u64,
    /// Number of blocked cells.
    pub obstacles: usize,
}

/// Classification of a single cell for presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Passable cell with nothing on it.
    Empty,
    /// Impassable cell.
    Obstacle,
    /// Cell occupied by the robot facing the provided heading.
    Robot(Direction),
}

/// Read-only classification of every cell inside the grid boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridView {
    size: GridSize,
    cells: Vec<CellKind>,
}

impl GridView {
    /// Largest number of cells a view will classify.
    pub const MAX_CELLS: u64 = 1 << 24;

    /// Builds a view by classifying each cell of a grid with the provided size.
    ///
    /// Cells are visited row by row starting at `y = 0`. Grids holding more
    /// than [`GridView::MAX_CELLS`] cells are refused without calling
    /// `classify`.
    pub fn from_fn<F>(size: GridSize, mut classify: F) -> Result<Self, SimulatorError>
    where
        F: FnMut(CellCoord) -> CellKind,
    {
        let capacity = u64::from(size.width()) * u64::from(size.height());
        let capacity = usize::try_from(capacity)
            .ok()
            .filter(|_| capacity <= Self::MAX_CELLS)
            .ok_or_else(|| {
                SimulatorError::Unexpected(format!("grid {size} is too large to display"))
            })?;

        let mut cells = Vec::with_capacity(capacity);
        for y in 0..size.height() {
            for x in 0..size.width() {
                let cell = CellCoord::new(clamp_to_i32(x), clamp_to_i32(y));
                cells.push(classify(cell));
            }
        }
        Ok(Self { size, cells })
    }

    /// Dimensions of the classified grid.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the classification of the provided cell, if it lies inside the grid.
    #[must_use]
    pub fn cell(&self, cell: CellCoord) -> Option<CellKind> {
        let x = u32::try_from(cell.x()).ok()?;
        let y = u32::try_from(cell.y()).ok()?;
        if x >= self.size.width() || y >= self.size.height() {
            return None;
        }
        let width = usize::try_from(self.size.width()).ok()?;
        let index = usize::try_from(y).ok()? * width + usize::try_from(x).ok()?;
        self.cells.get(index).copied()
    }

    /// Iterates rows from the top (`y = height - 1`) down to `y = 0`.
    ///
    /// Each item pairs the row index with the row's cells ordered by `x`.
    pub fn rows_top_down(&self) -> impl Iterator<Item = (u32, &[CellKind])> + '_ {
        let width = usize::try_from(self.size.width()).unwrap_or(0).max(1);
        self.cells
            .chunks(width)
            .enumerate()
            .rev()
            .map(|(row, cells)| (u32::try_from(row).unwrap_or(u32::MAX), cells))
    }
}

fn clamp_to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Envelope returned to callers after submitting a raw command line.
///
/// Serialises as `{"status": "success", "data": {...}}` or
/// `{"status": "error", "kind": ..., "message": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CommandOutcome {
    /// The command executed; carries the status captured afterwards.
    Success {
        /// Snapshot captured after the command completed.
        data: StatusReport,
    },
    /// The command was rejected.
    Error {
        /// Discriminant of the rejection.
        kind: ErrorKind,
        /// Human-readable rejection message.
        message: String,
    },
}

impl CommandOutcome {
    /// Reports whether the outcome represents a successful command.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<Result<StatusReport, SimulatorError>> for CommandOutcome {
    fn from(result: Result<StatusReport, SimulatorError>) -> Self {
        match result {
            Ok(data) => Self::Success { data },
            Err(error) => Self::Error {
                kind: error.kind(),
                message: error.to_string(),
            },
        }
    }
}
