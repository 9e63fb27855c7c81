use crate::core::grid::SampleGrid;
use crate::design::functions::exp_f;
use crate::lut_create;

/// Last sample index; the table has `EXP_LUT_STEPS + 1` entries.
pub const EXP_LUT_STEPS: u32 = 1024;

/// Sample spacing is `2^EXP_LUT_STEP_LOG2` = 1/128.
pub const EXP_LUT_STEP_LOG2: i32 = -7;

/// x in [-8, 0], k = 0..=1024
pub const EXP_LUT_GRID: SampleGrid = SampleGrid::new(EXP_LUT_STEPS, EXP_LUT_STEP_LOG2);

pub const EXP_LUT_FILE: &str = "exp_lut_1over128.hex";

lut_create! {
    name = exp_lut_1over128,
    func = exp_f,
    grid = EXP_LUT_GRID,
    file = EXP_LUT_FILE
}
