use super::*;

#[test]
fn jumps_to_the_register_value() {
    let simulator = instruction_runs! {
        instr_r!(JR, ZERO, T0, ZERO),
        [T0 = 0x0040_0000u32] => []
    };

    assert_eq!(0x0040_0000, simulator.pc());
}

#[test]
fn arbitrary_targets_halt_on_the_next_fetch() {
    // The jump itself commits; the PC simply points outside the program
    // afterwards, so the next step reports out of bounds.
    let mut simulator = instruction_runs! {
        instr_r!(JR, ZERO, T0, ZERO),
        [T0 = 0x1234_5677u32] => []
    };

    assert_eq!(0x1234_5677, simulator.pc());
    assert_eq!(StepResult::Stopped(ExitCode::OutOfBounds), simulator.step());
    assert!(simulator.halted());
}
