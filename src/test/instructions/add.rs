use super::*;

#[test]
fn register_mode() {
    run_program!(
        [
            instr_rri!(ADD, R0, R0, 13),
            instr_rri!(ADD, R1, R1, 8),
            instr_rrr!(ADD, R2, R0, R1),
        ],
        [] => [R0 = 13, R1 = 8, R2 = 21, COND = 1],
        3,
        true,
        constants::PC_START + 3
    );
}

#[test]
fn immediate_mode_sign_extends() {
    instruction_executes!(
        instr_rri!(ADD, R0, R1, -1),
        [R1 = 16] => [R0 = 15, COND = 1]
    );
}

#[test]
fn wraps_around_and_sets_zero() {
    instruction_executes!(
        instr_rri!(ADD, R0, R1, 1),
        [R1 = 0xFFFF] => [R0 = 0, COND = 2]
    );
}

#[test]
fn sets_negative() {
    instruction_executes!(
        instr_rri!(ADD, R0, R1, -1),
        [] => [R0 = 0xFFFF, COND = 4]
    );
}

#[test]
fn immediate_bounds() {
    instruction_executes!(
        instr_rri!(ADD, R0, R1, 15),
        [R1 = 1] => [R0 = 16, COND = 1]
    );
    instruction_executes!(
        instr_rri!(ADD, R0, R1, -16),
        [R1 = 16] => [R0 = 0, COND = 2]
    );
}
