use super::*;

#[test]
fn toggles_bits() {
    instruction_runs! {
        instr_r!(XOR, T2, T0, T1),
        [T0 = 0xFFFF_0000u32, T1 = 0xFF00_FF00u32] => [T2 = 0x00FF_FF00u32]
    };
}

#[test]
fn self_xor_clears() {
    instruction_runs! {
        instr_r!(XOR, T0, T0, T0),
        [T0 = 0xDEAD_BEEFu32] => [T0 = 0]
    };
}
