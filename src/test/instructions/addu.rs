use super::*;

#[test]
fn unsigned_wrap() {
    instruction_runs! {
        instr_r!(ADDU, T2, T0, T1),
        [T0 = 0xFFFF_FFFFu32, T1 = 1] => [T2 = 0]
    };
}

#[test]
fn same_register_as_source_and_destination() {
    instruction_runs! {
        instr_r!(ADDU, T0, T0, T0),
        [T0 = 21] => [T0 = 42]
    };
}
