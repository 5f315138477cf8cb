//! # Part Registry
//!
//! The [`Part`] trait shared by every generator, and a name-keyed registry
//! used by the command-line driver.

use std::fmt;
use std::str::FromStr;

use hbot_catalog::Catalog;
use hbot_csg::Node;

use crate::error::{PartError, PartResult};
use crate::machine::MachineConfig;
use crate::parts::{
    BeltClamp, BeltClampConfig, BeltRetainer, BeltRetainerConfig, DrillTemplate,
    DrillTemplateConfig, LinearBearingHolder, LinearBearingHolderConfig, MotorMount,
    MotorMountConfig, XCarriage, XCarriageConfig, YBearingMount, YBearingMountConfig, YCarriage,
    YCarriageConfig, YCarriageEndCap, YCarriageEndCapConfig, YRodMount, YRodMountConfig,
};

/// A generated part.
pub trait Part {
    /// File-name friendly part name.
    fn name(&self) -> &'static str;

    /// Root of the part's CSG tree.
    fn construction(&self) -> &Node;
}

/// Every part the generator knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    LinearBearingHolder,
    XCarriage,
    YCarriage,
    YCarriageEndCap,
    YRodMount,
    MotorMount,
    YBearingMount,
    BeltClamp,
    BeltRetainer,
    DrillTemplate,
}

impl PartKind {
    /// All parts, in build order.
    pub const ALL: [PartKind; 10] = [
        PartKind::LinearBearingHolder,
        PartKind::XCarriage,
        PartKind::YCarriage,
        PartKind::YCarriageEndCap,
        PartKind::YRodMount,
        PartKind::MotorMount,
        PartKind::YBearingMount,
        PartKind::BeltClamp,
        PartKind::BeltRetainer,
        PartKind::DrillTemplate,
    ];

    /// Name used for scene files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            PartKind::LinearBearingHolder => "linearbearingholder",
            PartKind::XCarriage => "xcarriage",
            PartKind::YCarriage => "ycarriage",
            PartKind::YCarriageEndCap => "ycarriageendcap",
            PartKind::YRodMount => "yrodmount",
            PartKind::MotorMount => "motormount",
            PartKind::YBearingMount => "ybearingmount",
            PartKind::BeltClamp => "beltclamp",
            PartKind::BeltRetainer => "beltretainer",
            PartKind::DrillTemplate => "drilltemplate",
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PartKind {
    type Err = PartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase().replace(['-', '_'], "");
        PartKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| PartError::UnknownPart(s.to_string()))
    }
}

/// Builds `kind` for `machine`, resolving hardware through `catalog`.
///
/// ## Example
///
/// ```rust
/// use hbot_catalog::StandardCatalog;
/// use hbot_parts::{build_part, MachineConfig, PartKind};
///
/// let catalog = StandardCatalog::builtin();
/// let machine = MachineConfig::default();
/// for kind in PartKind::ALL {
///     let part = build_part(kind, &catalog, &machine).unwrap();
///     assert_eq!(part.name(), kind.name());
/// }
/// ```
pub fn build_part(
    kind: PartKind,
    catalog: &dyn Catalog,
    machine: &MachineConfig,
) -> PartResult<Box<dyn Part>> {
    let part: Box<dyn Part> = match kind {
        PartKind::LinearBearingHolder => Box::new(LinearBearingHolder::new(
            catalog,
            &LinearBearingHolderConfig::from_machine(machine)?,
        )?),
        PartKind::XCarriage => Box::new(XCarriage::new(
            catalog,
            &XCarriageConfig::from_machine(machine)?,
        )?),
        PartKind::YCarriage => Box::new(YCarriage::new(
            catalog,
            &YCarriageConfig::from_machine(machine)?,
        )?),
        PartKind::YCarriageEndCap => Box::new(YCarriageEndCap::new(
            catalog,
            &YCarriageEndCapConfig::from_machine(machine)?,
        )?),
        PartKind::YRodMount => Box::new(YRodMount::new(
            catalog,
            &YRodMountConfig::from_machine(machine)?,
        )?),
        PartKind::MotorMount => Box::new(MotorMount::new(
            catalog,
            &MotorMountConfig::from_machine(machine)?,
        )?),
        PartKind::YBearingMount => Box::new(YBearingMount::new(
            catalog,
            &YBearingMountConfig::from_machine(machine)?,
        )?),
        PartKind::BeltClamp => Box::new(BeltClamp::new(
            catalog,
            &BeltClampConfig::from_machine(machine)?,
        )?),
        PartKind::BeltRetainer => Box::new(BeltRetainer::new(
            catalog,
            &BeltRetainerConfig::from_machine(machine)?,
        )?),
        PartKind::DrillTemplate => Box::new(DrillTemplate::new(
            catalog,
            &DrillTemplateConfig::from_machine(machine)?,
        )?),
    };
    Ok(part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_back() {
        for kind in PartKind::ALL {
            assert_eq!(kind.name().parse::<PartKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_separators() {
        assert_eq!("X-Carriage".parse::<PartKind>().unwrap(), PartKind::XCarriage);
        assert_eq!("belt_clamp".parse::<PartKind>().unwrap(), PartKind::BeltClamp);
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "zcarriage".parse::<PartKind>().unwrap_err();
        assert!(matches!(err, PartError::UnknownPart(name) if name == "zcarriage"));
    }
}
