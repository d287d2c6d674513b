use super::*;

#[test]
fn negated_or() {
    instruction_runs! {
        instr_r!(NOR, T2, T0, T1),
        [T0 = 0xF000_0000u32, T1 = 0x0000_000Fu32] => [T2 = 0x0FFF_FFF0u32]
    };
}

#[test]
fn nor_with_zero_is_not() {
    instruction_runs! {
        instr_r!(NOR, T2, T0, ZERO),
        [T0 = 0x0000_FFFFu32] => [T2 = 0xFFFF_0000u32]
    };
}
