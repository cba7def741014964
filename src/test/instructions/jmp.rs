use super::*;

#[test]
fn jumps_to_the_base_register() {
    instruction_executes!(
        make_jmp(Reg::R2),
        [R2 = 0x4000] => [],
        pc: 0x4000
    );
}

#[test]
fn ret_jumps_through_r7() {
    instruction_executes!(
        make_ret(),
        [R7 = 0x1234] => [],
        pc: 0x1234
    );
}

#[test]
fn does_not_touch_the_flags() {
    instruction_executes!(
        make_jmp(Reg::R0),
        [R0 = 0x8000, COND = 2] => [],
        pc: 0x8000
    );
}
