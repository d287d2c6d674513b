use super::*;

#[test]
fn reads_big_endian_words() {
    let mut simulator = load_words(&[instr_i!(LW, T0, T1, 4)]);
    simulator.memory_mut().write_word(8, 0xFFFE_FFFF);
    *simulator.register_mut(RegisterId::T1) = 4;

    simulator.step();

    assert_eq!(0xFFFE_FFFF, simulator.register(RegisterId::T0));
}

#[test]
fn negative_offset() {
    let mut simulator = load_words(&[instr_i!(LW, T0, T1, -4)]);
    simulator.memory_mut().write_word(12, 23);
    *simulator.register_mut(RegisterId::T1) = 16;

    simulator.step();

    assert_eq!(23, simulator.register(RegisterId::T0));
}

#[test]
fn unaligned_addresses_are_masked() {
    let mut simulator = load_words(&[instr_i!(LW, T0, T1, 0)]);
    simulator.memory_mut().write_word(8, 0x0102_0304);
    *simulator.register_mut(RegisterId::T1) = 11;

    simulator.step();

    assert_eq!(0x0102_0304, simulator.register(RegisterId::T0));
}

#[test]
fn out_of_range_reads_zero() {
    let mut simulator = load_words(&[instr_i!(LW, T0, T1, 0)]);
    *simulator.register_mut(RegisterId::T1) = 0xFFFF_0000;
    *simulator.register_mut(RegisterId::T0) = 7;

    simulator.step();

    assert_eq!(0, simulator.register(RegisterId::T0));
    assert!(!simulator.halted());
}
