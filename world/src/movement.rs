//! Movement engine: rotation, straight travel, and diagonal travel.
//!
//! Every action pays its battery cost first. A move rejected afterwards by
//! the boundary or an obstacle keeps the payment and leaves the robot where
//! it was.

use gridbot_core::{CellCoord, Diagonal, Event, GridSize, SimulatorError};
use tracing::{debug, info, warn};

use crate::World;

const TURN_COST: u32 = 1;
const DIAGONAL_COST: u32 = 2;

/// Quarter-turn rotation sense.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Rotation {
    Left,
    Right,
}

/// Moves `steps` cells along the current heading, paying one point per step.
pub(crate) fn forward(
    world: &mut World,
    steps: u32,
    out_events: &mut Vec<Event>,
) -> Result<(), SimulatorError> {
    spend(world, steps, out_events)?;

    let (dx, dy) = world.direction.offset();
    let target = displaced(world.position, dx, dy, steps);
    travel(world, target, steps, out_events, |x, y, size| {
        SimulatorError::OutOfBounds(format!(
            "Cannot move to ({x}, {y}) - outside grid boundaries ({size})"
        ))
    })
}

/// Rotates a quarter turn in place for one battery point.
pub(crate) fn turn(
    world: &mut World,
    rotation: Rotation,
    out_events: &mut Vec<Event>,
) -> Result<(), SimulatorError> {
    spend(world, TURN_COST, out_events)?;

    world.direction = match rotation {
        Rotation::Left => world.direction.turned_left(),
        Rotation::Right => world.direction.turned_right(),
    };
    debug!(?rotation, direction = %world.direction, "robot turned");
    out_events.push(Event::Turned {
        direction: world.direction,
    });
    Ok(())
}

/// Moves a single cell diagonally; credits one step for two battery points.
pub(crate) fn diagonal(
    world: &mut World,
    diagonal: Diagonal,
    out_events: &mut Vec<Event>,
) -> Result<(), SimulatorError> {
    spend(world, DIAGONAL_COST, out_events)?;

    let (dx, dy) = diagonal.offset();
    let target = displaced(world.position, dx, dy, 1);
    travel(world, target, 1, out_events, |x, y, _| {
        SimulatorError::OutOfBounds(format!(
            "Cannot move diagonally to ({x}, {y}) - outside grid boundaries"
        ))
    })
}

fn spend(world: &mut World, amount: u32, out_events: &mut Vec<Event>) -> Result<(), SimulatorError> {
    let level = world.battery.consume(amount)?;
    if level == 0 {
        warn!("battery critically low");
        out_events.push(Event::BatteryDepleted);
    }
    Ok(())
}

fn displaced(origin: CellCoord, dx: i32, dy: i32, steps: u32) -> (i64, i64) {
    let steps = i64::from(steps);
    (
        i64::from(origin.x()) + i64::from(dx) * steps,
        i64::from(origin.y()) + i64::from(dy) * steps,
    )
}

/// Expands, validates, and commits a move to `(x, y)`.
fn travel<F>(
    world: &mut World,
    (x, y): (i64, i64),
    steps: u32,
    out_events: &mut Vec<Event>,
    out_of_bounds: F,
) -> Result<(), SimulatorError>
where
    F: FnOnce(i64, i64, GridSize) -> SimulatorError,
{
    if let Some(size) = world.boundary.expand_to_include(x, y) {
        info!(%size, "grid expanded");
        out_events.push(Event::GridExpanded { size });
    }

    let target = match (i32::try_from(x), i32::try_from(y)) {
        (Ok(column), Ok(row)) if world.boundary.contains(x, y) => CellCoord::new(column, row),
        _ => return Err(out_of_bounds(x, y, world.boundary.size())),
    };

    if world.obstacles.contains(target) {
        return Err(SimulatorError::Obstacle(format!(
            "Cannot move to {target} - obstacle present!"
        )));
    }

    let move_count = world
        .move_count
        .checked_add(u64::from(steps))
        .ok_or_else(|| SimulatorError::Unexpected("move counter overflowed".to_owned()))?;

    let from = world.position;
    world.position = target;
    world.move_count = move_count;
    debug!(%from, to = %target, steps, "robot moved");
    out_events.push(Event::Moved {
        from,
        to: target,
        steps,
    });
    Ok(())
}
