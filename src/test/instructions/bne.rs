use super::*;

#[test]
fn taken_when_different() {
    let simulator = instruction_runs! {
        instr_i!(BNE, T1, T0, 4),
        [T0 = 1, T1 = 2] => []
    };

    assert_eq!(constants::TEXT_BASE + 4 + 16, simulator.pc());
}

#[test]
fn not_taken_when_equal() {
    let simulator = instruction_runs! {
        instr_i!(BNE, T1, T0, 4),
        [T0 = 2, T1 = 2] => []
    };

    assert_eq!(constants::TEXT_BASE + 4, simulator.pc());
}
