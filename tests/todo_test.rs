use std::collections::HashSet;
use stardo::todo::TaskList;

#[test]
fn test_add_appends_trimmed_pending_task() {
    let mut tasks = TaskList::new();

    for (count, text) in ["Buy milk", "  walk the dog ", "\tcall mom\n", "x"].iter().enumerate() {
        let id = tasks.add(text).expect("non-blank text should be added");
        assert_eq!(tasks.len(), count + 1);

        let task = tasks.get(id).unwrap();
        assert_eq!(task.text, text.trim());
        assert!(!task.completed);
    }
}

#[test]
fn test_add_blank_is_noop() {
    let mut tasks = TaskList::new();
    tasks.add("existing").unwrap();

    assert_eq!(tasks.add(""), None);
    assert_eq!(tasks.add("   "), None);
    assert_eq!(tasks.add("\t\n"), None);
    assert_eq!(tasks.len(), 1);
}

#[test]
fn test_tasks_keep_insertion_order() {
    let mut tasks = TaskList::new();
    tasks.add("first").unwrap();
    tasks.add("second").unwrap();
    tasks.add("third").unwrap();

    let texts: Vec<&str> = tasks.iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

#[test]
fn test_ids_unique_under_rapid_adds() {
    let mut tasks = TaskList::new();
    let ids: Vec<_> = (0..500).map(|i| tasks.add(&format!("task {i}")).unwrap()).collect();

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_toggle_flips_only_target() {
    let mut tasks = TaskList::new();
    let a = tasks.add("a").unwrap();
    let b = tasks.add("b").unwrap();
    let c = tasks.add("c").unwrap();

    assert!(tasks.toggle(b));
    assert!(!tasks.get(a).unwrap().completed);
    assert!(tasks.get(b).unwrap().completed);
    assert!(!tasks.get(c).unwrap().completed);
    assert_eq!(tasks.completed_count(), 1);
}

#[test]
fn test_toggle_twice_restores_state() {
    let mut tasks = TaskList::new();
    tasks.add("a").unwrap();
    let b = tasks.add("b").unwrap();
    tasks.toggle(b);
    let before: Vec<_> = tasks.iter().cloned().collect();

    tasks.toggle(b);
    tasks.toggle(b);

    let after: Vec<_> = tasks.iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_toggle_unknown_id_is_noop() {
    let mut tasks = TaskList::new();
    let id = tasks.add("a").unwrap();
    let before: Vec<_> = tasks.iter().cloned().collect();

    assert!(!tasks.toggle(id + 1000));
    assert_eq!(before, tasks.iter().cloned().collect::<Vec<_>>());
}

#[test]
fn test_delete_removes_exactly_one() {
    let mut tasks = TaskList::new();
    let a = tasks.add("a").unwrap();
    let b = tasks.add("b").unwrap();
    let c = tasks.add("c").unwrap();

    assert!(tasks.delete(b));
    assert_eq!(tasks.len(), 2);
    assert!(tasks.get(b).is_none());
    assert!(tasks.get(a).is_some());
    assert!(tasks.get(c).is_some());
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let mut tasks = TaskList::new();
    let a = tasks.add("a").unwrap();

    assert!(!tasks.delete(a + 1));
    assert_eq!(tasks.len(), 1);

    assert!(tasks.delete(a));
    assert!(!tasks.delete(a));
    assert!(tasks.is_empty());
}

#[test]
fn test_ids_not_reused_after_delete() {
    let mut tasks = TaskList::new();
    let first = tasks.add("a").unwrap();
    tasks.delete(first);

    let second = tasks.add("b").unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_add_toggle_delete_lifecycle() {
    let mut tasks = TaskList::new();
    assert!(tasks.is_empty());

    let id = tasks.add("Buy milk").unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks.get(id).unwrap().text, "Buy milk");
    assert!(!tasks.get(id).unwrap().completed);

    tasks.toggle(id);
    assert!(tasks.get(id).unwrap().completed);

    tasks.delete(id);
    assert!(tasks.is_empty());
}
