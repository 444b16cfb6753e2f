//! Grid boundary tracking with one-directional growth.

use gridbot_core::{GridSize, SimulatorError};

/// Rectangular region `[0, width) x [0, height)` the robot may occupy.
#[derive(Clone, Debug)]
pub(crate) struct GridBoundary {
    size: GridSize,
    expandable: bool,
}

impl GridBoundary {
    /// Creates a boundary with the provided dimensions and expansion policy.
    pub(crate) const fn new(size: GridSize, expandable: bool) -> Self {
        Self { size, expandable }
    }

    pub(crate) const fn size(&self) -> GridSize {
        self.size
    }

    pub(crate) const fn is_expandable(&self) -> bool {
        self.expandable
    }

    /// Reports whether the coordinates name a cell inside the boundary.
    pub(crate) fn contains(&self, x: i64, y: i64) -> bool {
        (0..i64::from(self.size.width())).contains(&x)
            && (0..i64::from(self.size.height())).contains(&y)
    }

    /// Grows the boundary so that non-negative coordinates fall inside it.
    ///
    /// Does nothing unless the boundary is expandable. Returns the new size
    /// when either dimension changed. Negative coordinates never trigger
    /// growth, so they stay outside.
    pub(crate) fn expand_to_include(&mut self, x: i64, y: i64) -> Option<GridSize> {
        if !self.expandable {
            return None;
        }

        let grown = GridSize::new(
            grown_extent(self.size.width(), x),
            grown_extent(self.size.height(), y),
        );
        if grown == self.size {
            return None;
        }

        self.size = grown;
        Some(grown)
    }

    /// Sets the dimensions exactly, refusing to shrink either axis.
    pub(crate) fn resize(&mut self, width: u32, height: u32) -> Result<GridSize, SimulatorError> {
        if width < self.size.width() || height < self.size.height() {
            return Err(SimulatorError::InvalidCommand(
                "Cannot shrink grid size".to_owned(),
            ));
        }

        self.size = GridSize::new(width, height);
        Ok(self.size)
    }
}

fn grown_extent(current: u32, coordinate: i64) -> u32 {
    if coordinate < i64::from(current) {
        return current;
    }

    // Growth stops at the last cell a `CellCoord` can address.
    if i32::try_from(coordinate).is_err() {
        return current;
    }
    u32::try_from(coordinate + 1).unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let boundary = GridBoundary::new(GridSize::new(5, 3), false);
        assert!(boundary.contains(0, 0));
        assert!(boundary.contains(4, 2));
        assert!(!boundary.contains(5, 0));
        assert!(!boundary.contains(0, 3));
        assert!(!boundary.contains(-1, 0));
    }

    #[test]
    fn fixed_boundary_never_grows() {
        let mut boundary = GridBoundary::new(GridSize::new(5, 5), false);
        assert_eq!(boundary.expand_to_include(9, 9), None);
        assert_eq!(boundary.size(), GridSize::new(5, 5));
    }

    #[test]
    fn expansion_reaches_exactly_one_past_the_target() {
        let mut boundary = GridBoundary::new(GridSize::new(5, 5), true);
        assert_eq!(
            boundary.expand_to_include(7, 2),
            Some(GridSize::new(8, 5))
        );
        assert!(boundary.contains(7, 2));
        assert_eq!(
            boundary.expand_to_include(0, 5),
            Some(GridSize::new(8, 6))
        );
    }

    #[test]
    fn expansion_ignores_cells_already_inside_and_negative_cells() {
        let mut boundary = GridBoundary::new(GridSize::new(5, 5), true);
        assert_eq!(boundary.expand_to_include(4, 4), None);
        assert_eq!(boundary.expand_to_include(-1, 2), None);
        assert!(!boundary.contains(-1, 2));
        assert_eq!(boundary.size(), GridSize::new(5, 5));
    }

    #[test]
    fn expansion_past_the_dimension_range_is_ignored() {
        let mut boundary = GridBoundary::new(GridSize::new(5, 5), true);
        assert_eq!(boundary.expand_to_include(i64::from(u32::MAX), 0), None);
        assert_eq!(boundary.size(), GridSize::new(5, 5));
    }

    #[test]
    fn expansion_stops_at_the_last_addressable_cell() {
        let mut boundary = GridBoundary::new(GridSize::new(5, 5), true);
        assert_eq!(boundary.expand_to_include(1 << 31, 0), None);
        assert_eq!(boundary.expand_to_include(0, 3_000_000_000), None);
        assert_eq!(boundary.size(), GridSize::new(5, 5));

        let last = i64::from(i32::MAX);
        assert_eq!(
            boundary.expand_to_include(last, 0),
            Some(GridSize::new(1 << 31, 5))
        );
        assert!(boundary.contains(last, 0));
    }

    #[test]
    fn resize_grows_to_exact_dimensions() {
        let mut boundary = GridBoundary::new(GridSize::new(5, 5), false);
        assert_eq!(boundary.resize(5, 9), Ok(GridSize::new(5, 9)));
        assert_eq!(boundary.size(), GridSize::new(5, 9));
    }

    #[test]
    fn resize_refuses_to_shrink_either_axis() {
        let mut boundary = GridBoundary::new(GridSize::new(5, 5), true);
        let error = boundary.resize(10, 4).expect_err("height shrinks");
        assert_eq!(error.message(), "Cannot shrink grid size");
        assert_eq!(boundary.size(), GridSize::new(5, 5));
    }
}
