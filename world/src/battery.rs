//! Battery accounting.

use gridbot_core::SimulatorError;

/// Highest battery level, reached after a full recharge.
pub(crate) const FULL_CHARGE: u8 = 100;

/// Integer charge level kept inside `0..=FULL_CHARGE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Battery {
    level: u8,
}

impl Battery {
    /// Creates a battery, clamping the requested level into range.
    pub(crate) fn clamped(level: i32) -> Self {
        let level = level.clamp(0, i32::from(FULL_CHARGE));
        Self {
            level: u8::try_from(level).unwrap_or(FULL_CHARGE),
        }
    }

    pub(crate) const fn level(&self) -> u8 {
        self.level
    }

    /// Drains `amount` points, flooring at zero, and returns the new level.
    ///
    /// Fails only when the battery is already empty. Reaching zero succeeds;
    /// the following call is the one that fails.
    pub(crate) fn consume(&mut self, amount: u32) -> Result<u8, SimulatorError> {
        if self.level == 0 {
            return Err(SimulatorError::BatteryDead(
                "Robot battery is dead! Cannot perform actions.".to_owned(),
            ));
        }

        let remaining = u32::from(self.level).saturating_sub(amount);
        self.level = u8::try_from(remaining).unwrap_or(0);
        Ok(self.level)
    }

    /// Adds `amount` points, capped at full charge, returning the points gained.
    pub(crate) fn charge(&mut self, amount: u32) -> u8 {
        let before = self.level;
        let charged = u32::from(before)
            .saturating_add(amount)
            .min(u32::from(FULL_CHARGE));
        self.level = u8::try_from(charged).unwrap_or(FULL_CHARGE);
        self.level - before
    }

    pub(crate) fn recharge_fully(&mut self) {
        self.level = FULL_CHARGE;
    }
}
