use super::*;

#[test]
fn compares_unsigned() {
    // 0xFFFF_FFFF is large unsigned, not -1.
    instruction_runs! {
        instr_r!(SLTU, T2, T0, T1),
        [T0 = 0xFFFF_FFFFu32, T1 = 1] => [T2 = 0]
    };
}

#[test]
fn less_than() {
    instruction_runs! {
        instr_r!(SLTU, T2, T0, T1),
        [T0 = 1, T1 = 0xFFFF_FFFFu32] => [T2 = 1]
    };
}
