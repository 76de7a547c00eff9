use eisen_core::drag::{DragEnd, DragState};
use eisen_core::editing::EditSession;
use eisen_core::quadrant::Quadrant;
use eisen_core::store::TaskStore;

#[test]
fn seeded_matrix_survives_a_full_interaction_session() {
    let mut store = TaskStore::seeded();
    assert_eq!(store.len(), 3);

    // a new task always starts in the lowest-priority bucket
    let uuid = store
        .create("Buy milk", "2024-02-01")
        .expect("create should accept a complete draft");
    let task = store.get(uuid).expect("created task");
    assert_eq!(task.quadrant, Quadrant::NotUrgentNotImportant);

    // drag it onto the Do First quadrant
    let drag = DragState::Idle.begin(&store, uuid);
    assert_eq!(drag.active(), Some(uuid));
    let (drag, end) = drag.finish(uuid, Some("urgent-important"));
    assert_eq!(drag, DragState::Idle);
    match end {
        DragEnd::Reassign { task, target } => {
            assert!(store.reassign(task, target));
        }
        DragEnd::Abandoned => panic!("drop on a quadrant must reassign"),
    }
    assert!(
        store
            .by_quadrant(Quadrant::UrgentImportant)
            .any(|task| task.uuid == uuid)
    );
    assert_eq!(
        store.by_quadrant(Quadrant::NotUrgentNotImportant).count(),
        0
    );

    // dropping onto another card's uuid is not a quadrant target
    let other = store
        .by_quadrant(Quadrant::NotUrgentImportant)
        .next()
        .expect("seeded task")
        .uuid;
    let drag = DragState::Idle.begin(&store, uuid);
    let (_, end) = drag.finish(uuid, Some(other.to_string().as_str()));
    assert_eq!(end, DragEnd::Abandoned);
    assert_eq!(
        store.get(uuid).expect("task").quadrant,
        Quadrant::UrgentImportant
    );

    // inline edit commits both fields together
    let mut session = EditSession::begin(&store, uuid).expect("session");
    session.draft.title = "Buy oat milk".to_string();
    session.draft.due = "2024-02-02".to_string();
    assert!(session.save(&mut store));
    let task = store.get(uuid).expect("task");
    assert_eq!(task.title, "Buy oat milk");
    assert_eq!(task.due.to_string(), "2024-02-02");
    assert_eq!(task.quadrant, Quadrant::UrgentImportant);

    // every task is always accounted for by exactly one quadrant listing
    let bucketed: usize = Quadrant::all()
        .into_iter()
        .map(|quadrant| store.by_quadrant(quadrant).count())
        .sum();
    assert_eq!(bucketed, store.len());

    // delete removes the task from every listing, once
    assert!(store.delete(uuid));
    assert!(!store.delete(uuid));
    assert_eq!(store.len(), 3);
    for quadrant in Quadrant::all() {
        assert!(store.by_quadrant(quadrant).all(|task| task.uuid != uuid));
    }
}
