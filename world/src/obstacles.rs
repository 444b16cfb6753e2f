//! Authoritative obstacle state management utilities.

use std::collections::BTreeSet;

use gridbot_core::{CellCoord, SimulatorError};

use crate::boundary::GridBoundary;

/// Registry of blocked cells, iterated in coordinate order.
#[derive(Clone, Debug, Default)]
pub(crate) struct ObstacleRegistry {
    cells: BTreeSet<CellCoord>,
}

impl ObstacleRegistry {
    /// Creates an empty registry.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn contains(&self, cell: CellCoord) -> bool {
        self.cells.contains(&cell)
    }

    /// Blocks `cell`, returning whether it was newly blocked.
    ///
    /// The cell must lie inside `boundary` and must not be the robot's cell.
    pub(crate) fn place(
        &mut self,
        cell: CellCoord,
        boundary: &GridBoundary,
        robot: CellCoord,
    ) -> Result<bool, SimulatorError> {
        if !boundary.contains(i64::from(cell.x()), i64::from(cell.y())) {
            return Err(SimulatorError::OutOfBounds(format!(
                "Cannot place obstacle at {cell} - outside grid"
            )));
        }

        if cell == robot {
            return Err(SimulatorError::Obstacle(
                "Cannot place obstacle on robot's current position".to_owned(),
            ));
        }

        Ok(self.cells.insert(cell))
    }

    /// Unblocks `cell`, returning whether it was blocked.
    pub(crate) fn remove(&mut self, cell: CellCoord) -> bool {
        self.cells.remove(&cell)
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.cells.iter().copied()
    }

    pub(crate) fn clear(&mut self) {
        self.cells.clear();
    }
}
