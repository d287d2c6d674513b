use super::*;

#[test]
fn taken_for_positive_values() {
    let simulator = instruction_runs! {
        instr_i!(BGTZ, ZERO, T0, 1),
        [T0 = 1] => []
    };

    assert_eq!(constants::TEXT_BASE + 8, simulator.pc());
}

#[test]
fn not_taken_for_zero() {
    let simulator = instruction_runs! {
        instr_i!(BGTZ, ZERO, T0, 1),
        [] => []
    };

    assert_eq!(constants::TEXT_BASE + 4, simulator.pc());
}

#[test]
fn comparison_is_signed() {
    // 0xFFFF_FFFF is -1, not a large positive value.
    let simulator = instruction_runs! {
        instr_i!(BGTZ, ZERO, T0, 1),
        [T0 = -1] => []
    };

    assert_eq!(constants::TEXT_BASE + 4, simulator.pc());
}
