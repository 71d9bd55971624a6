#![no_main]
use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use quicklist_fuzz_utils::{CommandSequence, SetCommand, SetRunnerState};

// Keys from a small range, so that duplicate inserts and successful removals are common
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct SmallKey(u8);

impl<'d> Arbitrary<'d> for SmallKey {
    fn arbitrary(u: &mut Unstructured<'d>) -> arbitrary::Result<Self> {
        Ok(SmallKey(u.int_in_range(0_u8..=63)?))
    }
}

fuzz_target!(|cmds: CommandSequence<SetCommand<SmallKey>>| {
    let cmds = cmds.map(|cmd| cmd.map_value(|k| k.0));

    let mut runner: SetRunnerState<u8> = SetRunnerState::init();

    for c in &cmds.cmds {
        runner.run_set_cmd(c);
    }
});
