use super::*;

#[test]
fn zero_extends() {
    let mut simulator = load_words(&[instr_i!(LHU, T0, ZERO, 0)]);
    simulator.memory_mut().write_half(0, 0xFFFE);

    simulator.step();

    assert_eq!(0x0000_FFFE, simulator.register(RegisterId::T0));
}
