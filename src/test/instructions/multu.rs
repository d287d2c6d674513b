use super::*;

#[test]
fn unsigned_product() {
    // As unsigned, 0xFFFF_FFFF * 2 = 0x1_FFFF_FFFE.
    let simulator = instruction_runs! {
        instr_r!(MULTU, ZERO, T0, T1),
        [T0 = 0xFFFF_FFFFu32, T1 = 2] => []
    };

    assert_eq!(1, simulator.hi());
    assert_eq!(0xFFFF_FFFE, simulator.lo());
}
