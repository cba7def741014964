use super::*;

#[test]
fn taken_when_the_flag_matches() {
    // COND is POS after reset.
    instruction_executes!(
        make_br(false, false, true, 5),
        [] => [],
        pc: constants::PC_START + 6
    );
}

#[test]
fn not_taken_when_the_flag_differs() {
    instruction_executes!(
        make_br(true, false, false, 5),
        [] => []
    );
}

#[test]
fn backward_offset_wraps_the_pc() {
    instruction_executes!(
        make_br(true, true, true, -2),
        [] => [],
        pc: constants::PC_START - 1
    );
}

#[test]
fn tests_the_zero_flag() {
    instruction_executes!(
        make_br(false, true, false, 3),
        [COND = 2] => [],
        pc: constants::PC_START + 4
    );
}

#[test]
fn tests_the_negative_flag() {
    instruction_executes!(
        make_br(true, false, false, 3),
        [COND = 4] => [],
        pc: constants::PC_START + 4
    );
}

#[test]
fn unconditional_branch_always_goes() {
    for &cond in &[1, 2, 4] {
        instruction_executes!(
            make_br(true, true, true, 1),
            [COND = cond] => [],
            pc: constants::PC_START + 2
        );
    }
}
