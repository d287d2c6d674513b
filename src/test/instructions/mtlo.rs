use super::*;

#[test]
fn writes_lo() {
    let simulator = instruction_runs! {
        instr_r!(MTLO, ZERO, T0, ZERO),
        [T0 = 0xCAFE_0001u32] => []
    };

    assert_eq!(0xCAFE_0001, simulator.lo());
    assert_eq!(0, simulator.hi());
}
