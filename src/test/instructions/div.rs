use super::*;

#[test]
fn quotient_and_remainder() {
    let simulator = instruction_runs! {
        instr_r!(DIV, ZERO, T0, T1),
        [T0 = 7, T1 = -2] => []
    };

    // Division truncates towards zero.
    assert_eq!(0xFFFF_FFFD, simulator.lo());
    assert_eq!(1, simulator.hi());
}

#[test]
fn division_by_zero_leaves_hi_and_lo_unchanged() {
    let mut simulator = load_words(&instructions![
        (r MTHI ZERO T3 ZERO),
        (r MTLO ZERO T4 ZERO),
        (r DIV ZERO T0 T1)
    ]);
    *simulator.register_mut(RegisterId::T3) = 0xAAAA_0001;
    *simulator.register_mut(RegisterId::T4) = 0xBBBB_0002;
    *simulator.register_mut(RegisterId::T0) = 7;

    simulator.run();

    assert_eq!(0xAAAA_0001, simulator.hi());
    assert_eq!(0xBBBB_0002, simulator.lo());
}

#[test]
fn minimum_over_minus_one_wraps() {
    let simulator = instruction_runs! {
        instr_r!(DIV, ZERO, T0, T1),
        [T0 = 0x8000_0000u32, T1 = -1] => []
    };

    assert_eq!(0x8000_0000, simulator.lo());
    assert_eq!(0, simulator.hi());
}
