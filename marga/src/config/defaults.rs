//! Default value functions for serde deserialization.

pub fn clearance() -> f32 {
    20.0
}

pub fn enabled() -> bool {
    true
}

pub fn step_size() -> f32 {
    5.0
}

pub fn detour_step_length() -> f32 {
    1.0
}

pub fn sidestep_factor() -> f32 {
    1.5
}

pub fn arrival_tolerance() -> f32 {
    1.0
}

pub fn max_step_factor() -> f32 {
    50.0
}

pub fn cell_size() -> f32 {
    5.0
}

pub fn grid_extent() -> f32 {
    800.0
}

pub fn inflation_margin() -> f32 {
    6.0
}

pub fn max_iterations() -> usize {
    1_000_000
}

pub fn los_step() -> f32 {
    2.5
}

pub fn units_per_meter() -> f32 {
    10.0
}
