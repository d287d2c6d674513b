use super::*;

#[test]
fn links_the_return_address() {
    let simulator = instruction_runs! {
        instr_j!(JAL, 0x0040_0100),
        [] => [RA = 0x0040_0004u32]
    };

    assert_eq!(0x0040_0100, simulator.pc());
}
