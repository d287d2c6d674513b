use super::*;

#[test]
fn negative_immediate() {
    instruction_runs! {
        instr_i!(ADDIU, T0, T1, -4),
        [T1 = 16] => [T0 = 12]
    };
}

#[test]
fn wraps_like_addi() {
    instruction_runs! {
        instr_i!(ADDIU, T0, T1, 1),
        [T1 = 0xFFFF_FFFFu32] => [T0 = 0]
    };
}
