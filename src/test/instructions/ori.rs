use super::*;

#[test]
fn immediate_is_zero_extended() {
    instruction_runs! {
        instr_i!(ORI, T0, ZERO, 0x8000u16 as i16),
        [] => [T0 = 0x0000_8000u32]
    };
}

#[test]
fn merges_low_bits() {
    instruction_runs! {
        instr_i!(ORI, T0, T1, 0xBEEFu16 as i16),
        [T1 = 0xDEAD_0000u32] => [T0 = 0xDEAD_BEEFu32]
    };
}
