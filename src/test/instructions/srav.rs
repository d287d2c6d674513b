use super::*;

#[test]
fn inserts_the_sign_bit() {
    instruction_runs! {
        instr_r!(SRAV, T0, T2, T1),
        [T1 = 0x8000_0000u32, T2 = 4] => [T0 = 0xF800_0000u32]
    };
}

#[test]
fn amount_is_masked_to_five_bits() {
    instruction_runs! {
        instr_r!(SRAV, T0, T2, T1),
        [T1 = -8, T2 = 35] => [T0 = -1]
    };
}
