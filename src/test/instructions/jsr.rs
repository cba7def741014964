use super::*;

#[test]
fn jsr_links_then_jumps_relative() {
    instruction_executes!(
        make_jsr(0x10),
        [] => [R7 = constants::PC_START + 1],
        pc: constants::PC_START + 0x11
    );
}

#[test]
fn jsr_negative_offset() {
    instruction_executes!(
        make_jsr(-3),
        [] => [R7 = constants::PC_START + 1],
        pc: constants::PC_START - 2
    );
}

#[test]
fn jsrr_links_then_jumps_to_the_base_register() {
    instruction_executes!(
        make_jsrr(Reg::R4),
        [R4 = 0x5000] => [R7 = constants::PC_START + 1],
        pc: 0x5000
    );
}

#[test]
fn jsrr_through_r7_uses_the_value_saved_before_linking() {
    // R7 is both base and link target; the link is written first, so the
    // jump lands on the already-incremented PC.
    instruction_executes!(
        make_jsrr(Reg::R7),
        [R7 = 0x5000] => [R7 = constants::PC_START + 1],
        pc: constants::PC_START + 1
    );
}
