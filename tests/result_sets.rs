use playbill::search::{IdSet, IdSetMode};

#[test]
fn starts_empty() {
    let set = IdSet::new();
    assert!(set.is_empty());
    assert_eq!(*set.mode(), IdSetMode::Empty);
    assert_eq!(set.len(), 0);
    assert!(!set.contains(1));
}

#[test]
fn single_id_stays_out_of_the_bitmap() {
    let mut set = IdSet::new();
    set.push(42);
    assert_eq!(*set.mode(), IdSetMode::One);
    assert_eq!(set.len(), 1);
    assert!(set.contains(42));
    assert!(!set.contains(43));
}

#[test]
fn second_id_promotes_to_a_bitmap() {
    let mut set = IdSet::new();
    set.push(42);
    set.push(7);
    assert_eq!(*set.mode(), IdSetMode::Many);
    assert_eq!(set.len(), 2);
    assert!(set.contains(7));
    assert!(set.contains(42));
    assert!(!set.contains(8));
}

#[test]
fn repeated_ids_do_not_inflate_the_count() {
    let mut set = IdSet::new();
    set.push(42);
    set.push(42);
    set.push(42);
    assert!(set.contains(42));
    assert_eq!(set.len(), 1);
}

#[test]
fn handles_many_ids() {
    let mut set = IdSet::new();
    for id in 0..1000 {
        set.push(id);
    }
    assert_eq!(set.len(), 1000);
    assert!(set.contains(0));
    assert!(set.contains(999));
    assert!(!set.contains(1000));
}
