//! One module per printable part.

mod bearing_holder;
mod belt_clamp;
mod belt_retainer;
mod drill_template;
mod end_cap;
mod idler_mount;
mod motor_mount;
mod rod_mount;
mod x_carriage;
mod y_carriage;

pub use bearing_holder::{LinearBearingHolder, LinearBearingHolderConfig};
pub use belt_clamp::{BeltClamp, BeltClampConfig};
pub use belt_retainer::{BeltRetainer, BeltRetainerConfig};
pub use drill_template::{DrillTemplate, DrillTemplateConfig};
pub use end_cap::{YCarriageEndCap, YCarriageEndCapConfig};
pub use idler_mount::{YBearingMount, YBearingMountConfig};
pub use motor_mount::{MotorMount, MotorMountConfig};
pub use rod_mount::{YRodMount, YRodMountConfig};
pub use x_carriage::{MountingTab, XCarriage, XCarriageConfig};
pub use y_carriage::{YCarriage, YCarriageConfig};
