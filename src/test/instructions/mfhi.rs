use super::*;

#[test]
fn moves_hi_into_rd() {
    let mut simulator = load_words(&instructions![
        (r MTHI ZERO T0 ZERO),
        (r MFHI T1 ZERO ZERO)
    ]);
    *simulator.register_mut(RegisterId::T0) = 0x1234_5678;

    simulator.run();

    assert_eq!(0x1234_5678, simulator.register(RegisterId::T1));
}

#[test]
fn reads_the_multiplication_high_word() {
    let mut simulator = load_words(&instructions![
        (r MULTU ZERO T0 T1),
        (r MFHI T2 ZERO ZERO)
    ]);
    *simulator.register_mut(RegisterId::T0) = 0x8000_0000;
    *simulator.register_mut(RegisterId::T1) = 4;

    simulator.run();

    assert_eq!(2, simulator.register(RegisterId::T2));
}
