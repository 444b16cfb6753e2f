#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative robot state management for the grid robot simulator.
//!
//! A [`World`] owns every piece of mutable robot state. Callers hold it
//! explicitly and pass it to [`apply`] (typed commands), [`execute`] (raw
//! command lines), or [`submit`] (raw command lines answered with a
//! [`CommandOutcome`]). Each call runs to completion; the world performs no
//! locking, so callers sharing one world must serialize access themselves.

mod battery;
mod boundary;
mod config;
mod history;
mod movement;
mod obstacles;

use gridbot_core::{
    normalize, parse, CellCoord, Command, CommandOutcome, Direction, Event, GridSize,
    SimulatorError,
};
use tracing::{debug, info, warn};

use self::{
    battery::Battery, boundary::GridBoundary, history::CommandHistory, movement::Rotation,
    obstacles::ObstacleRegistry,
};

pub use self::config::SimulatorConfig;

/// Represents the authoritative state of one simulated robot.
#[derive(Clone, Debug)]
pub struct World {
    position: CellCoord,
    direction: Direction,
    battery: Battery,
    boundary: GridBoundary,
    obstacles: ObstacleRegistry,
    history: CommandHistory,
    move_count: u64,
}

impl World {
    /// Creates a world from [`SimulatorConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&SimulatorConfig::default())
    }

    /// Creates a world at the origin, facing north, with the provided settings.
    ///
    /// The battery level is clamped into `0..=100` and zero grid dimensions
    /// are raised to one.
    #[must_use]
    pub fn with_config(config: &SimulatorConfig) -> Self {
        let size = GridSize::new(config.grid_width.max(1), config.grid_height.max(1));
        let world = Self {
            position: CellCoord::ORIGIN,
            direction: Direction::North,
            battery: Battery::clamped(config.battery_level),
            boundary: GridBoundary::new(size, config.expandable_grid),
            obstacles: ObstacleRegistry::new(),
            history: CommandHistory::new(),
            move_count: 0,
        };
        info!(
            position = %world.position,
            direction = %world.direction,
            grid = %size,
            battery = world.battery.level(),
            expandable = config.expandable_grid,
            "robot initialized"
        );
        world
    }

    /// Restores pose, battery, obstacles, counters, and history.
    ///
    /// Grid dimensions and the expansion policy keep their current values.
    fn reset(&mut self) {
        self.position = CellCoord::ORIGIN;
        self.direction = Direction::North;
        self.battery.recharge_fully();
        self.obstacles.clear();
        self.history.clear();
        self.move_count = 0;
        info!(grid = %self.boundary.size(), "robot reset to initial state");
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world.
///
/// Events describing the changes are appended to `out_events`, including
/// those produced before a rejection. A rejected command keeps every side
/// effect that happened before the rejection; in particular battery spent on
/// a move that is then blocked is not refunded.
pub fn apply(
    world: &mut World,
    command: Command,
    out_events: &mut Vec<Event>,
) -> Result<(), SimulatorError> {
    match command {
        Command::Forward { steps } => movement::forward(world, steps, out_events),
        Command::TurnLeft => movement::turn(world, Rotation::Left, out_events),
        Command::TurnRight => movement::turn(world, Rotation::Right, out_events),
        Command::Diagonal { direction } => movement::diagonal(world, direction, out_events),
        Command::Report => {
            out_events.push(Event::StatusReported {
                report: query::status(world),
            });
            Ok(())
        }
        Command::Charge { amount } => {
            let gained = world.battery.charge(amount);
            let level = world.battery.level();
            debug!(gained, level, "battery charged");
            out_events.push(Event::BatteryCharged { gained, level });
            Ok(())
        }
        Command::ShowGrid => {
            let view = query::grid_view(world)?;
            out_events.push(Event::GridRenderRequested { view });
            Ok(())
        }
        Command::Reset => {
            world.reset();
            out_events.push(Event::Reset);
            Ok(())
        }
        Command::PlaceObstacle { cell } => {
            let newly_blocked = world
                .obstacles
                .place(cell, &world.boundary, world.position)?;
            debug!(%cell, newly_blocked, "obstacle placed");
            out_events.push(Event::ObstaclePlaced { cell });
            Ok(())
        }
        Command::RemoveObstacle { cell } => {
            let was_present = world.obstacles.remove(cell);
            debug!(%cell, was_present, "obstacle removal processed");
            out_events.push(Event::ObstacleRemoved { cell, was_present });
            Ok(())
        }
        Command::ExpandGrid { width, height } => {
            let size = world.boundary.resize(width, height)?;
            info!(%size, "grid expanded");
            out_events.push(Event::GridExpanded { size });
            Ok(())
        }
    }
}

/// Executes a raw command line.
///
/// The line is normalized (trimmed and lower-cased) and, unless empty,
/// recorded in the command history before it is parsed, so malformed and
/// rejected commands are recorded too.
pub fn execute(
    world: &mut World,
    input: &str,
    out_events: &mut Vec<Event>,
) -> Result<(), SimulatorError> {
    let command = normalize(input);
    if command.is_empty() {
        return Err(SimulatorError::InvalidCommand("Empty command".to_owned()));
    }

    world.history.record(command.clone());
    debug!(%command, "dispatching command");

    let result = parse(&command).and_then(|parsed| apply(world, parsed, out_events));
    if let Err(error) = &result {
        warn!(%command, kind = ?error.kind(), %error, "command rejected");
    }
    result
}

/// Executes a raw command line and wraps the result in an outcome envelope.
///
/// Successful commands carry the status captured after they ran. Events are
/// discarded; use [`execute`] to observe them.
pub fn submit(world: &mut World, input: &str) -> CommandOutcome {
    let mut events = Vec::new();
    execute(world, input, &mut events)
        .map(|()| query::status(world))
        .into()
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use gridbot_core::{
        CellCoord, CellKind, Direction, GridSize, GridView, SimulatorError, StatusReport,
    };

    use super::World;

    /// Captures the status snapshot of the robot.
    #[must_use]
    pub fn status(world: &World) -> StatusReport {
        StatusReport {
            x: world.position.x(),
            y: world.position.y(),
            direction: world.direction,
            battery: world.battery.level(),
            grid_size: world.boundary.size(),
            moves: world.move_count,
            obstacles: world.obstacles.len(),
        }
    }

    /// Cell currently occupied by the robot.
    #[must_use]
    pub fn position(world: &World) -> CellCoord {
        world.position
    }

    /// Current heading of the robot.
    #[must_use]
    pub fn direction(world: &World) -> Direction {
        world.direction
    }

    /// Current battery level in `0..=100`.
    #[must_use]
    pub fn battery_level(world: &World) -> u8 {
        world.battery.level()
    }

    /// Current grid dimensions.
    #[must_use]
    pub fn grid_size(world: &World) -> GridSize {
        world.boundary.size()
    }

    /// Whether moves past the north or east edge grow the grid.
    #[must_use]
    pub fn is_expandable(world: &World) -> bool {
        world.boundary.is_expandable()
    }

    /// Cumulative number of unit steps taken since creation or the last reset.
    #[must_use]
    pub fn move_count(world: &World) -> u64 {
        world.move_count
    }

    /// Blocked cells in coordinate order.
    #[must_use]
    pub fn obstacles(world: &World) -> Vec<CellCoord> {
        world.obstacles.iter().collect()
    }

    /// Normalized command lines submitted since creation or the last reset.
    #[must_use]
    pub fn history(world: &World) -> &[String] {
        world.history.entries()
    }

    /// Classifies every cell inside the grid for presentation.
    ///
    /// Fails when the grid holds more than [`GridView::MAX_CELLS`] cells.
    pub fn grid_view(world: &World) -> Result<GridView, SimulatorError> {
        GridView::from_fn(world.boundary.size(), |cell| {
            if cell == world.position {
                CellKind::Robot(world.direction)
            } else if world.obstacles.contains(cell) {
                CellKind::Obstacle
            } else {
                CellKind::Empty
            }
        })
    }
}
