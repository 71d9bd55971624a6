use super::layout;
use crate::{Error, QuickList, LIMIT, MAXSIZE};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

#[test]
fn push_insert_delete() {
    let mut list = QuickList::new();
    list.push('A').unwrap();
    list.push('B').unwrap();
    list.push('C').unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.iter().collect::<String>(), "ABC");

    list.insert(1, 'X').unwrap();
    assert_eq!(list.iter().collect::<String>(), "AXBC");

    assert_eq!(list.delete(0), Ok('A'));
    assert_eq!(list.iter().collect::<String>(), "XBC");
    list.validate();
}

#[test]
fn twenty_pushes() {
    let mut list = QuickList::new();
    for i in 0..20_u32 {
        list.push(i).unwrap();
    }

    assert_eq!(list.len(), 20);
    assert_eq!(list.get(19), Ok(&19));
    assert!(list.node_count() >= 2);

    let first = list.nodes().next().unwrap().len();
    assert!((LIMIT + 1..=MAXSIZE).contains(&first));
    assert_eq!(layout(&list), [14, 6]);
    list.validate();
}

#[test]
fn push_returns_cursor_at_new_element() {
    let mut list: QuickList<u32> = (0..14).collect();
    let cursor = list.push(99).unwrap();
    assert_eq!(cursor.get(), Some(&99));
    assert_eq!(cursor.index(), 0);
    assert_eq!(cursor.node().map(|n| n.len()), Some(1));
}

#[test]
fn split_then_merge() {
    let mut list: QuickList<u32> = (0..20).collect();
    assert_eq!(layout(&list), [14, 6]);

    // The full first node splits: 7 elements stay, 7 move to the new sibling, and the new
    // element lands in the left half
    list.insert(3, 100).unwrap();
    assert_eq!(layout(&list), [8, 7, 6]);
    list.validate();

    let mut expected: Vec<u32> = (0..20).collect();
    expected.insert(3, 100);
    assert!(list.iter().eq(expected.iter()));

    // Dropping the first node to `LIMIT` lets it absorb its 7-element successor
    assert_eq!(list.delete(0), Ok(0));
    assert_eq!(layout(&list), [14, 6]);
    list.validate();

    expected.remove(0);
    assert!(list.iter().eq(expected.iter()));
}

#[test]
fn split_into_right_half() {
    let mut list: QuickList<u32> = (0..14).collect();
    list.insert(10, 100).unwrap();
    assert_eq!(layout(&list), [7, 8]);
    assert_eq!(list.get(10), Ok(&100));
    assert_eq!(list.nodes().nth(1).unwrap().as_slice(), [7, 8, 9, 100, 10, 11, 12, 13]);
    list.validate();
}

#[test]
fn delete_moves_one_element_when_merge_would_overflow() {
    let mut list: QuickList<u32> = (0..20).collect();
    let mut expected: Vec<u32> = (0..20).collect();

    list.insert(0, 100).unwrap();
    expected.insert(0, 100);
    for v in [101, 102, 103] {
        list.insert(9, v).unwrap();
        expected.insert(9, v);
    }
    assert_eq!(layout(&list), [8, 10, 6]);

    assert_eq!(list.delete(0), Ok(100));
    expected.remove(0);
    assert_eq!(layout(&list), [8, 9, 6]);
    assert!(list.iter().eq(expected.iter()));
    list.validate();

    assert_eq!(list.delete(0), Ok(0));
    expected.remove(0);
    assert_eq!(layout(&list), [8, 8, 6]);
    assert!(list.iter().eq(expected.iter()));
    list.validate();
}

#[test]
fn emptied_node_is_freed() {
    let mut list: QuickList<u32> = (0..15).collect();
    assert_eq!(layout(&list), [14, 1]);

    assert_eq!(list.delete(14), Ok(14));
    assert_eq!(layout(&list), [14]);

    let mut single = QuickList::new();
    single.push("only").unwrap();
    assert_eq!(single.delete(0), Ok("only"));
    assert!(single.is_empty());
    assert_eq!(single.node_count(), 0);
}

#[test]
fn insert_at_len_appends() {
    let mut list: QuickList<u32> = (0..14).collect();
    list.insert(14, 14).unwrap();
    assert_eq!(layout(&list), [14, 1]);
    assert_eq!(list.get(14), Ok(&14));

    let mut empty = QuickList::new();
    empty.insert(0, 'a').unwrap();
    assert_eq!(layout(&empty), [1]);
}

#[test]
fn insert_past_a_short_node() {
    let mut list: QuickList<u32> = (0..20).collect();
    list.insert(3, 100).unwrap();
    assert_eq!(layout(&list), [8, 7, 6]);

    // The index is within a node's capacity, but past its count
    list.insert(10, 200).unwrap();
    assert_eq!(layout(&list), [8, 8, 6]);
    assert_eq!(list.get(10), Ok(&200));
    list.validate();
}

#[test]
fn walks_stop_on_node_boundaries() {
    let mut list: QuickList<u32> = (0..20).collect();

    // Index 14 is past the first node's capacity, so it lands at the front of the second
    list.insert(14, 100).unwrap();
    assert_eq!(layout(&list), [14, 7]);
    assert_eq!(list.get(14), Ok(&100));

    assert_eq!(list.delete(13), Ok(13));
    list.validate();
    assert_eq!(layout(&list), [13, 7]);

    assert_eq!(list.delete(20), Err(Error::IndexOutOfRange { index: 20, len: 20 }));

    // The first node has room, but appending still goes to the last one
    list.push(200).unwrap();
    assert_eq!(layout(&list), [13, 8]);
    assert_eq!(list.iter().last(), Some(&200));
    list.validate();
}

#[test]
fn errors_leave_list_unchanged() {
    let mut list: QuickList<char> = QuickList::new();
    assert_eq!(list.get(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
    assert_eq!(list.insert(1, 'a'), Err(Error::InvalidArgument { index: 1 }));
    assert_eq!(list.delete(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
    assert_eq!(list.pop(), None);
    assert_eq!(list.node_count(), 0);

    list.extend("abc".chars());
    assert_eq!(list.insert(5, 'x'), Err(Error::IndexOutOfRange { index: 5, len: 3 }));
    assert_eq!(list.delete(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(list.replace(3, 'x'), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(list.cursor_at(3).err(), Some(Error::IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(list.iter().collect::<String>(), "abc");
}

#[test]
fn error_messages() {
    assert_eq!(
        Error::IndexOutOfRange { index: 4, len: 2 }.to_string(),
        "index 4 out of range for list of length 2"
    );
    assert_eq!(
        Error::InvalidArgument { index: 1 }.to_string(),
        "cannot insert at index 1 into an empty list"
    );
}

#[test]
fn replace_and_get_mut() {
    let mut list: QuickList<u32> = (0..30).collect();
    assert_eq!(list.replace(20, 200), Ok(20));
    assert_eq!(list.get(20), Ok(&200));

    *list.get_mut(29).unwrap() += 1;
    assert_eq!(list.get(29), Ok(&30));
    assert_eq!(list.pop(), Some(30));
    assert_eq!(list.len(), 29);
}

#[test]
fn cursor_advance() {
    let list: QuickList<u32> = (0..40).collect();
    assert_eq!(layout(&list), [14, 14, 12]);

    let mut cursor = list.cursor_at(13).unwrap();
    assert_eq!(cursor.get(), Some(&13));
    cursor.advance(1).unwrap();
    assert_eq!(cursor.get(), Some(&14));
    assert_eq!(cursor.index(), 0);

    cursor.advance(0).unwrap();
    assert_eq!(cursor.get(), Some(&14));

    cursor.advance(25).unwrap();
    assert_eq!(cursor.get(), Some(&39));

    assert_eq!(cursor.advance(1), Err(Error::RangeError));
    assert!(cursor.is_end());
    assert_eq!(cursor.get(), None);
    assert_eq!(cursor.advance(0), Err(Error::RangeError));
}

#[test]
fn cursor_overshoot() {
    let list: QuickList<u32> = (0..40).collect();
    let mut cursor = list.cursor_at(35).unwrap();
    let mut copy = cursor;

    assert_eq!(cursor.advance(5), Err(Error::RangeError));
    assert!(cursor.is_end());

    copy.advance(4).unwrap();
    assert_eq!(copy.get(), Some(&39));
    assert_eq!(copy.advance(usize::MAX), Err(Error::RangeError));
}

#[test]
fn cursor_on_empty_list() {
    let list: QuickList<u32> = QuickList::new();
    let mut cursor = list.cursor();
    assert!(cursor.is_end());
    assert_eq!(cursor.get(), None);
    assert_eq!(cursor.advance(0), Err(Error::RangeError));
}

#[test]
fn for_each_visits_in_order() {
    let mut list = QuickList::new();
    for i in (0..50_u32).rev() {
        list.insert(0, i).unwrap();
    }
    list.validate();

    let mut seen = Vec::new();
    list.for_each(|v| seen.push(*v));
    assert_eq!(seen, (0..50).collect::<Vec<_>>());
}

#[test]
fn clear_and_reuse() {
    let mut list: QuickList<String> = (0..100).map(|i| i.to_string()).collect();
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.node_count(), 0);

    list.push("again".to_owned()).unwrap();
    assert_eq!(list.get(0).map(String::as_str), Ok("again"));
}

#[test]
fn long_list_drop() {
    // Dropping must not recurse once per node
    let list: QuickList<u64> = (0..1_000_000).collect();
    assert_eq!(list.len(), 1_000_000);
    drop(list);
}

#[test]
fn elements_are_dropped() {
    let tracker = Rc::new(());
    let list: QuickList<Rc<()>> = (0..100).map(|_| Rc::clone(&tracker)).collect();
    assert_eq!(Rc::strong_count(&tracker), 101);

    // Partially consuming the owning iterator must still drop everything
    let mut iter = list.into_iter();
    for _ in 0..20 {
        iter.next();
    }
    assert_eq!(Rc::strong_count(&tracker), 81);
    drop(iter);
    assert_eq!(Rc::strong_count(&tracker), 1);

    let mut list: QuickList<Rc<()>> = (0..30).map(|_| Rc::clone(&tracker)).collect();
    drop(list.delete(3));
    drop(list.replace(0, Rc::clone(&tracker)));
    assert_eq!(Rc::strong_count(&tracker), 30);
    list.clear();
    assert_eq!(Rc::strong_count(&tracker), 1);
}

#[test]
fn list_of_references() {
    let owned: Vec<String> = (0..20).map(|i| format!("item {i}")).collect();
    let mut list: QuickList<&String> = owned.iter().collect();
    assert_eq!(list.delete(5).map(String::as_str), Ok("item 5"));
    drop(list);

    // The referents are untouched
    assert_eq!(owned[5], "item 5");
    assert_eq!(owned.len(), 20);
}

#[test]
fn into_iter_yields_everything() {
    let list: QuickList<u32> = (0..100).collect();
    assert!(list.into_iter().eq(0..100));
}

#[test]
fn clone_keeps_layout() {
    let mut list: QuickList<u32> = (0..20).collect();
    list.insert(3, 100).unwrap();

    let copy = list.clone();
    assert_eq!(copy, list);
    assert_eq!(layout(&copy), layout(&list));
    copy.validate();
}

#[test]
fn equality_ignores_layout() {
    let pushed: QuickList<u32> = (0..30).collect();
    let mut inserted = QuickList::new();
    for i in (0..30).rev() {
        inserted.insert(0, i).unwrap();
    }
    assert_ne!(layout(&pushed), layout(&inserted));
    assert_eq!(pushed, inserted);

    let hash = |list: &QuickList<u32>| {
        let mut hasher = DefaultHasher::new();
        list.hash(&mut hasher);
        hasher.finish()
    };
    assert_eq!(hash(&pushed), hash(&inserted));
}

#[test]
fn debug_formats_as_list() {
    let list: QuickList<u32> = (1..4).collect();
    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    assert_eq!(format!("{:?}", list.nodes().next().unwrap()), "[1, 2, 3]");
}

#[test]
fn traced_rebalancing() {
    enable_debug!();
    let mut list: QuickList<u32> = (0..20).collect();
    list.insert(3, 100).unwrap();
    list.delete(0).unwrap();
    while list.pop().is_some() {}
    disable_debug!();

    assert!(list.is_empty());
}

#[test]
fn set_example() {
    let mut list = QuickList::new();
    for v in [5, 1, 3] {
        assert_eq!(list.set_insert(v), Ok(true));
    }

    assert_eq!(list.set_find(&3).and_then(|c| c.get()), Some(&3));
    let mut seen = Vec::new();
    list.for_each(|v| seen.push(*v));
    assert_eq!(seen, [1, 3, 5]);
}

#[test]
fn set_insert_ascending_fills_nodes() {
    let mut list = QuickList::new();
    for v in 0..30_u32 {
        assert_eq!(list.set_insert(v), Ok(true));
    }
    assert_eq!(layout(&list), [14, 14, 2]);
    list.validate_sorted_by(u32::cmp);
}

#[test]
fn set_insert_descending() {
    let mut list = QuickList::new();
    for v in (0..30_u32).rev() {
        assert_eq!(list.set_insert(v), Ok(true));
        list.validate_sorted_by(u32::cmp);
    }
    assert!(list.iter().copied().eq(0..30));
}

#[test]
fn set_duplicates_and_missing() {
    let mut list: QuickList<u32> = QuickList::new();
    for v in (0..60).step_by(2) {
        list.set_insert(v).unwrap();
    }
    let len = list.len();

    assert_eq!(list.set_insert(20), Ok(false));
    assert_eq!(list.len(), len);

    assert!(list.set_find(&21).is_none());
    assert!(list.set_find(&100).is_none());
    assert_eq!(list.set_remove(&21), None);

    assert_eq!(list.set_insert(21), Ok(true));
    assert_eq!(list.set_find(&21).and_then(|c| c.get()), Some(&21));
    assert_eq!(list.set_remove(&21), Some(21));
    assert_eq!(list.len(), len);
    list.validate_sorted_by(u32::cmp);
}

#[test]
fn set_with_key_comparison() {
    let by_key = |a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0);

    let mut list = QuickList::new();
    assert_eq!(list.set_insert_by((2, 'b'), by_key), Ok(true));
    assert_eq!(list.set_insert_by((1, 'a'), by_key), Ok(true));
    assert_eq!(list.set_insert_by((2, 'z'), by_key), Ok(false));

    let found = list.set_find_by(&(2, '?'), by_key).and_then(|c| c.get());
    assert_eq!(found, Some(&(2, 'b')));
    assert_eq!(list.set_remove_by(&(1, '?'), by_key), Some((1, 'a')));
}
