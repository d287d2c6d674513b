use super::*;

#[test]
fn positive() {
    instruction_runs! {
        instr_i!(ADDI, T0, T1, 1234),
        [T1 = 5678] => [T0 = 6912]
    };
}

#[test]
fn negative_immediate_is_sign_extended() {
    instruction_runs! {
        instr_i!(ADDI, T0, ZERO, -1),
        [] => [T0 = 0xFFFF_FFFFu32]
    };
}

#[test]
fn signed_overflow_wraps_instead_of_trapping() {
    instruction_runs! {
        instr_i!(ADDI, T0, T1, 1),
        [T1 = 0x7FFF_FFFFu32] => [T0 = 0x8000_0000u32]
    };
}
