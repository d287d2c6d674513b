use super::*;

#[test]
fn immediate_is_zero_extended() {
    instruction_runs! {
        instr_i!(XORI, T0, T1, 0xFFFFu16 as i16),
        [T1 = 0xFFFF_FFFFu32] => [T0 = 0xFFFF_0000u32]
    };
}
