use super::*;

#[test]
fn loads_the_upper_halfword() {
    instruction_runs! {
        instr_i!(LUI, T0, ZERO, 0xDEADu16 as i16),
        [] => [T0 = 0xDEAD_0000u32]
    };
}

#[test]
fn clears_the_low_halfword() {
    instruction_runs! {
        instr_i!(LUI, T0, ZERO, 1),
        [T0 = 0xFFFF_FFFFu32] => [T0 = 0x0001_0000u32]
    };
}
