use super::*;

#[test]
fn less_than() {
    instruction_runs! {
        instr_r!(SLT, T2, T0, T1),
        [T0 = -1, T1 = 1] => [T2 = 1]
    };
}

#[test]
fn not_less_than() {
    instruction_runs! {
        instr_r!(SLT, T2, T0, T1),
        [T0 = 1, T1 = -1] => [T2 = 0]
    };
}
