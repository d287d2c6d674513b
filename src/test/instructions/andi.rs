use super::*;

#[test]
fn immediate_is_zero_extended() {
    // 0xFFFF stays 0x0000_FFFF, it is not sign extended.
    instruction_runs! {
        instr_i!(ANDI, T0, T1, 0xFFFFu16 as i16),
        [T1 = 0xFFFF_FFFFu32] => [T0 = 0x0000_FFFFu32]
    };
}

#[test]
fn masks_bits() {
    instruction_runs! {
        instr_i!(ANDI, T0, T1, 0x0F0F),
        [T1 = 0xFFFF] => [T0 = 0x0F0F]
    };
}
