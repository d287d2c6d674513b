use super::*;

#[test]
fn truncates_to_16_bits() {
    let mut simulator = load_words(&[instr_i!(SH, T0, ZERO, 0x10)]);
    *simulator.register_mut(RegisterId::T0) = 0xFFFF_ABCD;

    simulator.step();

    assert_eq!(&[0xAB, 0xCD], &simulator.memory().data()[0x10..0x12]);
}
