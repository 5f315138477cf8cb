//! Hardware families.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of hardware a size name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Radial ball bearing.
    Bearing,
    /// Linear ball bearing riding on a smooth rod.
    LinearBearing,
    /// Socket head cap screw.
    Screw,
    /// Plain hex nut.
    Nut,
    /// Nylon-insert lock nut.
    LockNut,
    /// Stepper motor.
    Motor,
    /// Timing belt.
    Belt,
}

impl Family {
    /// Every family, in declaration order.
    pub const ALL: [Family; 7] = [
        Family::Bearing,
        Family::LinearBearing,
        Family::Screw,
        Family::Nut,
        Family::LockNut,
        Family::Motor,
        Family::Belt,
    ];
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Bearing => "bearing",
            Family::LinearBearing => "linear bearing",
            Family::Screw => "screw",
            Family::Nut => "nut",
            Family::LockNut => "lock nut",
            Family::Motor => "motor",
            Family::Belt => "belt",
        };
        f.write_str(name)
    }
}
