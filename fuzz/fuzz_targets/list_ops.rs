#![no_main]
use libfuzzer_sys::fuzz_target;
use quicklist_fuzz_utils::{CommandSequence, ListCommand, RunnerState};

fuzz_target!(|cmds: CommandSequence<ListCommand<u8>>| {
    let mut runner: RunnerState<u8> = RunnerState::init();

    for c in &cmds.cmds {
        runner.run_list_cmd(c);
    }
});
