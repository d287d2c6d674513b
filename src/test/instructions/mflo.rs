use super::*;

#[test]
fn reads_the_quotient() {
    let mut simulator = load_words(&instructions![
        (r DIV ZERO T0 T1),
        (r MFLO T2 ZERO ZERO)
    ]);
    *simulator.register_mut(RegisterId::T0) = 42;
    *simulator.register_mut(RegisterId::T1) = 5;

    simulator.run();

    assert_eq!(8, simulator.register(RegisterId::T2));
}
