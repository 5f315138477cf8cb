//! Stock hardware dimensions.

use crate::records::{Bearing, Belt, DimensionRecord, LinearBearing, Nut, Screw, Stepper};

fn linear_bearing(inner_diameter: f64, outer_diameter: f64, length: f64) -> DimensionRecord {
    DimensionRecord::LinearBearing(LinearBearing {
        inner_diameter,
        outer_diameter,
        length,
    })
}

fn bearing(inner_diameter: f64, outer_diameter: f64, width: f64) -> DimensionRecord {
    DimensionRecord::Bearing(Bearing {
        inner_diameter,
        outer_diameter,
        width,
    })
}

fn screw(outer_diameter: f64, head_diameter: f64, head_height: f64) -> DimensionRecord {
    DimensionRecord::Screw(Screw {
        outer_diameter,
        head_diameter,
        head_height,
    })
}

fn nut(width: f64, height: f64, diameter: f64) -> Nut {
    Nut {
        width,
        height,
        diameter,
    }
}

#[allow(clippy::too_many_arguments)]
fn stepper(
    width: f64,
    length: f64,
    shaft_diameter: f64,
    shaft_length: f64,
    boss_diameter: f64,
    boss_height: f64,
    hole_spacing: f64,
    screw_size: &str,
) -> DimensionRecord {
    DimensionRecord::Motor(Stepper {
        width,
        length,
        shaft_diameter,
        shaft_length,
        boss_diameter,
        boss_height,
        hole_spacing,
        screw_size: screw_size.to_string(),
    })
}

fn belt(pitch: f64, width: f64, thickness: f64, tooth_height: f64) -> DimensionRecord {
    DimensionRecord::Belt(Belt {
        pitch,
        width,
        thickness,
        tooth_height,
    })
}

/// Every stock record with its size name.
pub(super) fn stock() -> Vec<(&'static str, DimensionRecord)> {
    vec![
        // Linear ball bearings: rod, outer diameter, length.
        ("LM3UU", linear_bearing(3.0, 7.0, 10.0)),
        ("LM4UU", linear_bearing(4.0, 8.0, 12.0)),
        ("LM5UU", linear_bearing(5.0, 10.0, 15.0)),
        ("LM6UU", linear_bearing(6.0, 12.0, 19.0)),
        ("LM8UU", linear_bearing(8.0, 15.0, 24.0)),
        ("LM10UU", linear_bearing(10.0, 19.0, 29.0)),
        ("LM12UU", linear_bearing(12.0, 21.0, 30.0)),
        // Radial ball bearings: bore, outer diameter, width.
        ("608", bearing(8.0, 22.0, 7.0)),
        ("623", bearing(3.0, 10.0, 4.0)),
        ("624", bearing(4.0, 13.0, 5.0)),
        ("625", bearing(5.0, 16.0, 5.0)),
        ("688", bearing(8.0, 16.0, 5.0)),
        // Cap screws.
        ("M3", screw(3.0, 5.5, 3.0)),
        ("M4", screw(4.0, 7.0, 4.0)),
        ("M5", screw(5.0, 8.5, 5.0)),
        ("M8", screw(8.0, 13.0, 8.0)),
        // Hex nuts.
        ("M3", DimensionRecord::Nut(nut(5.5, 2.4, 3.0))),
        ("M4", DimensionRecord::Nut(nut(7.0, 3.2, 4.0))),
        ("M5", DimensionRecord::Nut(nut(8.0, 4.0, 5.0))),
        ("M8", DimensionRecord::Nut(nut(13.0, 6.5, 8.0))),
        // Lock nuts.
        ("M3", DimensionRecord::LockNut(nut(5.5, 4.0, 3.0))),
        ("M4", DimensionRecord::LockNut(nut(7.0, 5.0, 4.0))),
        ("M5", DimensionRecord::LockNut(nut(8.0, 5.0, 5.0))),
        ("M8", DimensionRecord::LockNut(nut(13.0, 8.0, 8.0))),
        // Steppers.
        ("GenericNEMA14", stepper(35.2, 36.0, 5.0, 20.0, 22.0, 2.0, 26.0, "M3")),
        ("GenericNEMA17", stepper(42.3, 40.0, 5.0, 24.0, 22.0, 2.0, 31.0, "M3")),
        ("GenericNEMA23", stepper(56.4, 56.0, 6.35, 21.0, 38.1, 1.6, 47.14, "M5")),
        // Timing belts.
        ("GT2", belt(2.0, 6.0, 1.38, 0.75)),
        ("T2.5", belt(2.5, 6.0, 1.3, 0.7)),
        ("T5", belt(5.0, 10.0, 2.2, 1.2)),
    ]
}
