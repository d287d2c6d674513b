use super::*;

#[test]
fn writes_hi() {
    let simulator = instruction_runs! {
        instr_r!(MTHI, ZERO, T0, ZERO),
        [T0 = 0xCAFE_0000u32] => []
    };

    assert_eq!(0xCAFE_0000, simulator.hi());
    assert_eq!(0, simulator.lo());
}
