use super::*;

#[test]
fn exit_call_halts_the_machine() {
    let mut simulator = load_words(&[instr_r!(SYSCALL, ZERO, ZERO, ZERO)]);
    *simulator.register_mut(RegisterId::V0) = 10;

    match simulator.step() {
        StepResult::Executed(step) => assert!(step.halted),
        StepResult::Stopped(code) => panic!("instruction did not execute: {}", code),
    }

    assert!(simulator.halted());
    assert_eq!(StepResult::Stopped(ExitCode::Halted), simulator.step());
}

#[test]
fn other_codes_are_ignored() {
    let simulator = instruction_runs! {
        instr_r!(SYSCALL, ZERO, ZERO, ZERO),
        [V0 = 4] => []
    };

    assert!(!simulator.halted());
    assert_eq!(constants::TEXT_BASE + 4, simulator.pc());
}
