use super::*;

#[test]
fn amount_comes_from_rs() {
    instruction_runs! {
        instr_r!(SLLV, T0, T2, T1),
        [T1 = 1, T2 = 8] => [T0 = 256]
    };
}

#[test]
fn amount_is_masked_to_five_bits() {
    instruction_runs! {
        instr_r!(SLLV, T0, T2, T1),
        [T1 = 1, T2 = 33] => [T0 = 2]
    };
}
