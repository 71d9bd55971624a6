use arbitrary::{Arbitrary, Unstructured};
use quicklist::mock::Mock;
use quicklist::{Error, QuickList, QuickSet};
use std::fmt::{self, Debug, Formatter};

/// A positional command, applied to a [`QuickList`]
///
/// The expected outcome of each command is recorded while generating, by running it against the
/// [`Mock`] implementation.
#[derive(Clone)]
pub enum ListCommand<T> {
    Push {
        value: T,
    },
    Extend {
        values: Vec<T>,
    },
    Insert {
        index: usize,
        value: T,
        result: Result<(), Error>,
    },
    Delete {
        index: usize,
        result: Result<T, Error>,
    },
    Replace {
        index: usize,
        value: T,
        result: Result<T, Error>,
    },
    Get {
        index: usize,
        result: Result<T, Error>,
    },
    /// Create a cursor at `start`, then advance it by `stride`
    Advance {
        start: usize,
        stride: usize,
        // outer error if the cursor can't be created, inner if advancing fails
        result: Result<Result<T, Error>, Error>,
    },
}

const LIST_VARIANTS: u8 = 7;

/// A command for the sorted-set layer, applied to a [`QuickSet`]
#[derive(Clone)]
pub enum SetCommand<T> {
    Insert { value: T, inserted: bool },
    Remove { value: T, removed: Option<T> },
    Find { value: T, found: bool },
}

const SET_VARIANTS: u8 = 3;

impl<T> SetCommand<T> {
    /// Converts the value type of the command, which must not change how values are ordered
    pub fn map_value<U, F: FnMut(T) -> U>(self, mut f: F) -> SetCommand<U> {
        match self {
            Self::Insert { value, inserted } => SetCommand::Insert {
                value: f(value),
                inserted,
            },
            Self::Remove { value, removed } => SetCommand::Remove {
                value: f(value),
                removed: removed.map(f),
            },
            Self::Find { value, found } => SetCommand::Find {
                value: f(value),
                found,
            },
        }
    }
}

/// Sequence of [`ListCommand`]s or [`SetCommand`]s
pub struct CommandSequence<C> {
    pub cmds: Vec<C>,
}

impl<C> CommandSequence<C> {
    pub fn map<D, F: FnMut(C) -> D>(self, f: F) -> CommandSequence<D> {
        CommandSequence {
            cmds: self.cmds.into_iter().map(f).collect(),
        }
    }
}

fn write_test_case<C: Debug>(f: &mut Formatter, init: &str, cmds: &[C]) -> fmt::Result {
    f.write_str("#[test]\n")?;
    f.write_str("fn test_case() {\n")?;
    writeln!(f, "    {init}")?;
    for c in cmds {
        c.fmt(f)?;
    }
    f.write_str("}")
}

struct ErrFmt<'r, T>(&'r Result<T, Error>);

impl<'r, T: Debug> Debug for ErrFmt<'r, T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.0 {
            Ok(v) => write!(f, "Ok({v:?})"),
            Err(e) => write!(f, "Err(Error::{e:?})"),
        }
    }
}

impl<T: Debug> Debug for CommandSequence<ListCommand<T>> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write_test_case(f, "let mut list_0: QuickList<_> = QuickList::new();", &self.cmds)
    }
}

impl<T: Debug> Debug for CommandSequence<SetCommand<T>> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write_test_case(f, "let mut set_0: QuickSet<_> = QuickSet::new();", &self.cmds)
    }
}

impl<T: Debug> Debug for ListCommand<T> {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Push { value } => {
                writeln!(f, "    list_0.push({value:?}).unwrap();")?;
            }
            Self::Extend { values } => {
                writeln!(f, "    list_0.try_extend({values:?}).unwrap();")?;
            }
            Self::Insert { index, value, result } => {
                let result = ErrFmt(result);
                writeln!(f, "    assert_eq!(list_0.insert({index}, {value:?}), {result:?});")?;
            }
            Self::Delete { index, result } => {
                let result = ErrFmt(result);
                writeln!(f, "    assert_eq!(list_0.delete({index}), {result:?});")?;
            }
            Self::Replace { index, value, result } => {
                let result = ErrFmt(result);
                writeln!(f, "    assert_eq!(list_0.replace({index}, {value:?}), {result:?});")?;
            }
            Self::Get { index, result } => {
                let result = ErrFmt(result);
                writeln!(f, "    assert_eq!(list_0.get({index}).cloned(), {result:?});")?;
                return Ok(());
            }
            Self::Advance { start, stride: _, result: Err(e) } => {
                writeln!(f, "    assert_eq!(list_0.cursor_at({start}).err(), Some(Error::{e:?}));")?;
                return Ok(());
            }
            Self::Advance { start, stride, result: Ok(inner) } => {
                f.write_str("    {\n")?;
                writeln!(f, "        let mut cursor = list_0.cursor_at({start}).unwrap();")?;
                match inner {
                    Ok(v) => {
                        writeln!(f, "        assert_eq!(cursor.advance({stride}), Ok(()));")?;
                        writeln!(f, "        assert_eq!(cursor.get(), Some(&{v:?}));")?;
                    }
                    Err(e) => {
                        writeln!(f, "        assert_eq!(cursor.advance({stride}), Err(Error::{e:?}));")?;
                    }
                }
                f.write_str("    }\n")?;
                return Ok(());
            }
        }

        // everything except read-only commands is followed by a validation
        writeln!(f, "    list_0.validate();")
    }
}

impl<T: Debug> Debug for SetCommand<T> {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Insert { value, inserted } => {
                writeln!(f, "    assert_eq!(set_0.insert({value:?}), Ok({inserted}));")?;
            }
            Self::Remove { value, removed } => {
                writeln!(f, "    assert_eq!(set_0.remove(&{value:?}), {removed:?});")?;
            }
            Self::Find { value, found } => {
                return writeln!(f, "    assert_eq!(set_0.contains(&{value:?}), {found});");
            }
        }

        writeln!(f, "    set_0.validate();")
    }
}

impl<'d, T> Arbitrary<'d> for CommandSequence<ListCommand<T>>
where
    T: Arbitrary<'d> + Clone,
{
    fn arbitrary(u: &mut Unstructured<'d>) -> arbitrary::Result<Self> {
        let mut cmds = Vec::new();
        let mut mock = Mock::new_empty();

        while !u.is_empty() {
            cmds.push(ListCommand::arbitrary(u, &mut mock)?);
        }

        Ok(CommandSequence { cmds })
    }
}

impl<'d, T> Arbitrary<'d> for CommandSequence<SetCommand<T>>
where
    T: Arbitrary<'d> + Clone + Ord,
{
    fn arbitrary(u: &mut Unstructured<'d>) -> arbitrary::Result<Self> {
        let mut cmds = Vec::new();
        let mut mock = Mock::new_empty();

        while !u.is_empty() {
            cmds.push(SetCommand::arbitrary(u, &mut mock)?);
        }

        Ok(CommandSequence { cmds })
    }
}

/// Picks an index that's usually in bounds for a list of length `len`, but occasionally one or
/// two past the end
fn choose_index(u: &mut Unstructured, len: usize) -> arbitrary::Result<usize> {
    u.int_in_range(0..=len + 1)
}

impl<'d, T: Arbitrary<'d> + Clone> ListCommand<T> {
    fn arbitrary(u: &mut Unstructured<'d>, mock: &mut Mock<T>) -> arbitrary::Result<Self> {
        let variant = u.int_in_range(0..=LIST_VARIANTS - 1)?;

        match variant {
            // push
            0 => {
                let value: T = u.arbitrary()?;
                mock.push(value.clone());
                Ok(Self::Push { value })
            }
            // extend
            1 => {
                let values: Vec<T> = u.arbitrary()?;
                for v in &values {
                    mock.push(v.clone());
                }
                Ok(Self::Extend { values })
            }
            // insert
            2 => {
                let index = choose_index(u, mock.len())?;
                let value: T = u.arbitrary()?;
                let result = mock.insert(index, value.clone());
                Ok(Self::Insert {
                    index,
                    value,
                    result,
                })
            }
            // delete
            3 => {
                let index = choose_index(u, mock.len())?;
                let result = mock.delete(index);
                Ok(Self::Delete { index, result })
            }
            // replace
            4 => {
                let index = choose_index(u, mock.len())?;
                let value: T = u.arbitrary()?;
                let result = mock.replace(index, value.clone());
                Ok(Self::Replace {
                    index,
                    value,
                    result,
                })
            }
            // get
            5 => {
                let index = choose_index(u, mock.len())?;
                let result = mock.get(index).cloned();
                Ok(Self::Get { index, result })
            }
            // advance
            _ => {
                let start = choose_index(u, mock.len())?;
                let stride = choose_index(u, mock.len())?;
                let result = mock.get(start).map(|_| {
                    mock.advance(start, stride)
                        .map(|p| mock.as_slice()[p].clone())
                });
                Ok(Self::Advance {
                    start,
                    stride,
                    result,
                })
            }
        }
    }
}

impl<'d, T: Arbitrary<'d> + Clone + Ord> SetCommand<T> {
    fn arbitrary(u: &mut Unstructured<'d>, mock: &mut Mock<T>) -> arbitrary::Result<Self> {
        let variant = u.int_in_range(0..=SET_VARIANTS - 1)?;
        let value: T = u.arbitrary()?;

        match variant {
            0 => {
                let inserted = mock.set_insert_by(value.clone(), T::cmp);
                Ok(Self::Insert { value, inserted })
            }
            1 => {
                let removed = mock.set_remove_by(&value, T::cmp);
                Ok(Self::Remove { value, removed })
            }
            _ => {
                let found = mock.set_find_by(&value, T::cmp).is_some();
                Ok(Self::Find { value, found })
            }
        }
    }
}

/// Ongoing state for executing [`ListCommand`]s on a [`QuickList`]
pub struct RunnerState<T> {
    list: QuickList<T>,
}

impl<T: Debug + Clone + PartialEq> RunnerState<T> {
    /// Creates a new, blank `RunnerState` to run a series of commands
    pub fn init() -> Self {
        RunnerState {
            list: QuickList::new(),
        }
    }

    /// Runs the command, panicking if the list's behavior differs from the recorded outcome
    #[rustfmt::skip]
    pub fn run_list_cmd(&mut self, cmd: &ListCommand<T>) {
        let list = &mut self.list;

        match cmd {
            ListCommand::Push { value } => {
                let cursor = list.push(value.clone()).unwrap();
                assert_eq!(cursor.get(), Some(value));
            }
            ListCommand::Extend { values } => {
                list.try_extend(values.iter().cloned()).unwrap();
            }
            ListCommand::Insert { index, value, result } => {
                assert_eq!(&list.insert(*index, value.clone()), result);
            }
            ListCommand::Delete { index, result } => {
                assert_eq!(&list.delete(*index), result);
            }
            ListCommand::Replace { index, value, result } => {
                assert_eq!(&list.replace(*index, value.clone()), result);
            }
            ListCommand::Get { index, result } => {
                assert_eq!(list.get(*index), result.as_ref().map_err(|e| *e));
            }
            ListCommand::Advance { start, stride, result } => {
                let actual = list.cursor_at(*start).map(|mut cursor| {
                    cursor.advance(*stride).map(|()| cursor.get().cloned())
                });
                let expected = result.clone().map(|inner| inner.map(Some));
                assert_eq!(actual, expected);
            }
        }

        list.validate();
    }
}

/// Ongoing state for executing [`SetCommand`]s on a [`QuickSet`]
pub struct SetRunnerState<T> {
    set: QuickSet<T>,
}

impl<T: Debug + Clone + Ord> SetRunnerState<T> {
    /// Creates a new, blank `SetRunnerState` to run a series of commands
    pub fn init() -> Self {
        SetRunnerState {
            set: QuickSet::new(),
        }
    }

    /// Runs the command, panicking if the set's behavior differs from the recorded outcome
    pub fn run_set_cmd(&mut self, cmd: &SetCommand<T>) {
        let set = &mut self.set;

        match cmd {
            SetCommand::Insert { value, inserted } => {
                assert_eq!(set.insert(value.clone()), Ok(*inserted));
                assert!(set.contains(value));
            }
            SetCommand::Remove { value, removed } => {
                assert_eq!(&set.remove(value), removed);
                assert!(!set.contains(value));
            }
            SetCommand::Find { value, found } => {
                assert_eq!(set.find(value).and_then(|c| c.get()), found.then_some(value));
            }
        }

        set.validate();
    }
}
