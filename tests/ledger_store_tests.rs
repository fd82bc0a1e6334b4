mod common;

use bill_core::{
    CommitOutcome, DraftField, EditSession, LedgerError, LedgerStore, SessionState,
    ValidationError,
};
use common::{clock_at, draft, store_with};

#[test]
fn add_appends_exactly_one_equal_record_at_the_end() {
    let mut store = store_with(&[
        draft("expense", "dining", "12", "2024-02-01", ""),
        draft("expense", "shopping", "30", "2024-02-02", ""),
    ]);
    let candidate = draft("income", "salary", "5000", "2024-01-15", "");
    let before = store.len();

    let mutation = store.add(&candidate).expect("valid candidate");

    assert_eq!(store.len(), before + 1);
    assert_eq!(mutation.index, before);
    assert_eq!(store.list().last(), Some(&candidate.validate().unwrap()));
}

#[test]
fn add_reports_each_violated_constraint() {
    let cases = [
        (draft("", "salary", "1", "2024-01-01", ""), ValidationError::MissingDirection),
        (draft("income", "", "1", "2024-01-01", ""), ValidationError::MissingCategory),
        (draft("income", "salary", "", "2024-01-01", ""), ValidationError::MissingAmount),
        (draft("income", "salary", "1", "", ""), ValidationError::MissingDate),
        (
            draft("income", "salary", "abc", "2024-01-01", ""),
            ValidationError::InvalidAmount("abc".into()),
        ),
        (
            draft("income", "salary", "-1", "2024-01-01", ""),
            ValidationError::NegativeAmount("-1".into()),
        ),
        (
            draft("gift", "salary", "1", "2024-01-01", ""),
            ValidationError::UnknownDirection("gift".into()),
        ),
        (
            draft("income", "rent", "1", "2024-01-01", ""),
            ValidationError::UnknownCategory("rent".into()),
        ),
    ];
    let mut store = LedgerStore::in_memory();
    for (candidate, expected) in cases {
        let err = store.add(&candidate).expect_err("candidate must be rejected");
        match err {
            LedgerError::Validation(actual) => assert_eq!(actual, expected),
            other => panic!("unexpected error: {other:?}"),
        }
    }
    assert!(store.is_empty());
    assert_eq!(store.revision(), 0);
}

#[test]
fn update_in_range_replaces_and_out_of_range_never_mutates() {
    let mut store = store_with(&[
        draft("expense", "dining", "12", "2024-02-01", ""),
        draft("expense", "shopping", "30", "2024-02-02", ""),
    ]);
    let replacement = draft("income", "bonus", "99", "2024-03-03", "refund");

    for index in 0..store.len() {
        store.update(index, &replacement).expect("index in range");
        assert_eq!(store.list()[index], replacement.validate().unwrap());
    }

    let snapshot = store.list().to_vec();
    let revision = store.revision();
    for index in [2, 3, usize::MAX] {
        let err = store.update(index, &replacement).expect_err("out of range");
        assert!(err.is_index(), "unexpected error: {err:?}");
    }
    assert_eq!(store.list(), snapshot.as_slice());
    assert_eq!(store.revision(), revision);
}

#[test]
fn update_with_invalid_candidate_keeps_record() {
    let mut store = store_with(&[draft("expense", "dining", "12", "2024-02-01", "")]);
    let err = store
        .update(0, &draft("expense", "dining", "", "2024-02-01", ""))
        .expect_err("missing amount");
    assert!(err.is_validation());
    assert_eq!(store.list()[0].amount, 12.0);
}

#[test]
fn remove_preserves_relative_order() {
    let mut store = store_with(&[
        draft("expense", "dining", "1", "2024-02-01", "a"),
        draft("expense", "dining", "2", "2024-02-01", "b"),
        draft("expense", "dining", "3", "2024-02-01", "c"),
        draft("expense", "dining", "4", "2024-02-01", "d"),
    ]);
    let (removed, _) = store.remove(1).expect("in range");
    assert_eq!(removed.description, "b");
    let remaining: Vec<&str> = store.list().iter().map(|r| r.description.as_str()).collect();
    assert_eq!(remaining, ["a", "c", "d"]);

    let err = store.remove(3).expect_err("out of range");
    assert!(matches!(err, LedgerError::IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(store.len(), 3);
}

#[test]
fn begin_edit_then_cancel_leaves_ledger_unchanged() {
    let store = store_with(&[draft("income", "salary", "5000", "2024-01-15", "")]);
    let before = store.list().to_vec();
    let clock = clock_at(2024, 6, 1);
    let mut session = EditSession::new(&clock);

    session.begin_edit(&store, 0).expect("index in range");
    session.set_field(DraftField::Amount, "1");
    session.cancel(&clock);

    assert_eq!(session.state(), SessionState::Inactive);
    assert_eq!(store.list(), before.as_slice());
    assert_eq!(session.form().date, "2024-06-01");
}

#[test]
fn edit_session_full_cycle() {
    let clock = clock_at(2024, 6, 1);
    let mut store = LedgerStore::in_memory();
    let mut session = EditSession::new(&clock);

    session.set_field(DraftField::Direction, "expense");
    session.set_field(DraftField::Category, "dining");
    session.set_field(DraftField::Amount, "18");
    assert!(matches!(
        session.commit(&mut store, &clock).unwrap(),
        CommitOutcome::Added(_)
    ));
    assert_eq!(store.list()[0].date, clock.0);

    session.begin_edit(&store, 0).unwrap();
    session.set_field(DraftField::Description, "dumplings");
    assert!(matches!(
        session.commit(&mut store, &clock).unwrap(),
        CommitOutcome::Updated(_)
    ));
    assert_eq!(store.list()[0].description, "dumplings");
    assert_eq!(session.state(), SessionState::Inactive);
}
