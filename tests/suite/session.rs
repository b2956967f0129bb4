//! Session engine behaviour across whole command sequences.

use insta::assert_snapshot;
use rowops_core::{Matrix, MatrixError, OperationKind, Rational, RowOp, Session, SessionError};

use crate::common::{int, r, session_2x3, worked_example};

fn grid(rows: &[Vec<Rational>]) -> Matrix {
    Matrix::from_rows(rows.to_vec()).unwrap()
}

#[test]
fn worked_example_reaches_expected_states() {
    let mut session = session_2x3();

    session.scale(2, r(1, 2)).unwrap();
    assert_eq!(
        session.show_current().unwrap(),
        &grid(&[
            vec![int(1), int(2), int(3)],
            vec![int(2), r(5, 2), int(3)]
        ])
    );

    session.add_multiple(int(-1), 1, 2).unwrap();
    assert_eq!(
        session.show_current().unwrap(),
        &grid(&[
            vec![int(1), int(2), int(3)],
            vec![int(1), r(1, 2), int(0)]
        ])
    );

    session.swap(1, 2).unwrap();
    assert_eq!(
        session.show_current().unwrap(),
        &grid(&[
            vec![int(1), r(1, 2), int(0)],
            vec![int(1), int(2), int(3)]
        ])
    );
}

#[test]
fn worked_example_log_lists_every_step() {
    let session = worked_example();
    let log = session.show_log().unwrap();

    let kinds: Vec<_> = log.iter().map(|entry| entry.kind).collect();
    assert_eq!(
        kinds,
        [
            OperationKind::Create,
            OperationKind::Scale,
            OperationKind::AddMultiple,
            OperationKind::Swap
        ]
    );
    assert_eq!(log.last().unwrap().grid, session.show_current().unwrap());

    let rendered = log
        .iter()
        .map(|entry| format!("{}\n{}", entry.description, entry.grid))
        .collect::<Vec<_>>()
        .join("\n\n");
    assert_snapshot!(rendered, @r"
    Create a new 2 by 3 matrix.
    R1  1 2 3
    R2  4 5 6

    Multiply R2 by 1/2
    R1    1   2   3
    R2    2 5/2   3

    Add -1 times R1 to R2
    R1    1   2   3
    R2    1 1/2   0

    Swap R1 with R2
    R1    1 1/2   0
    R2    1   2   3
    ");
}

#[test]
fn undoing_worked_example_returns_to_original() {
    let mut session = worked_example();
    let original = session.original().unwrap().clone();

    for _ in 0..3 {
        session.undo().unwrap();
    }
    assert_eq!(session.show_current().unwrap(), &original);
    assert_eq!(session.log_len(), 1);
    assert_eq!(session.undo(), Err(SessionError::NothingToUndo));
    assert_eq!(session.show_current().unwrap(), &original);
}

#[test]
fn undo_replay_and_inverse_agree() {
    let mut session = worked_example();

    while session.log_len() > 1 {
        let inverse = {
            let records = session.records().unwrap();
            records
                .last()
                .and_then(|record| record.action().row_op())
                .and_then(RowOp::inverse)
                .expect("worked example steps are invertible")
        };
        let mut by_inverse = session.show_current().unwrap().clone();
        inverse.apply(&mut by_inverse).unwrap();

        let by_undo = session.undo().unwrap().clone();
        let by_replay = session.replay().unwrap();

        assert_eq!(by_undo, by_inverse);
        assert_eq!(by_undo, by_replay);
    }
}

#[test]
fn undo_recovers_row_zeroed_by_self_add() {
    let mut session = session_2x3();
    let before = session.show_current().unwrap().clone();
    session.add_multiple(int(-1), 1, 1).unwrap();
    assert!(
        session.show_current().unwrap().rows()[0]
            .iter()
            .all(|v| v.is_zero())
    );
    assert_eq!(&session.replay().unwrap(), session.show_current().unwrap());
    assert_eq!(session.undo().unwrap(), &before);
}

#[test]
fn revert_after_many_operations() {
    let mut session = session_2x3();
    for step in 1..=10_i64 {
        let row = if step % 2 == 0 { 1 } else { 2 };
        session.scale(row, int(step)).unwrap();
        session.add_multiple(r(1, step), 1, 2).unwrap();
        session.swap(1, 2).unwrap();
    }
    assert_eq!(session.log_len(), 31);
    assert_eq!(&session.replay().unwrap(), session.show_current().unwrap());

    let original = session.original().unwrap().clone();
    assert_eq!(session.revert().unwrap(), &original);
    assert_eq!(session.log_len(), 1);
}

#[test]
fn rejected_calls_leave_state_untouched() {
    let mut session = worked_example();
    let current = session.show_current().unwrap().clone();
    let len = session.log_len();

    assert!(matches!(
        session.swap(1, 9),
        Err(SessionError::Matrix(MatrixError::RowIndexOutOfRange {
            index: 9,
            rows: 2
        }))
    ));
    assert_eq!(session.scale(2, int(0)), Err(SessionError::ZeroMultiplier));
    assert!(matches!(
        session.add_multiple(int(2), 0, 1),
        Err(SessionError::Matrix(MatrixError::RowIndexOutOfRange { .. }))
    ));

    assert_eq!(session.show_current().unwrap(), &current);
    assert_eq!(session.log_len(), len);
}

#[test]
fn created_matrix_renders_as_entered() {
    let mut session = Session::new();
    let rendered = session
        .create_matrix_from_text(3, 2, &["1/2 -3", "0 4/6", "10 -7/3"])
        .unwrap()
        .to_string();
    assert_snapshot!(rendered, @r"
    R1   1/2   -3
    R2     0  2/3
    R3    10 -7/3
    ");
}

#[test]
fn independent_sessions_do_not_share_state() {
    let mut first = session_2x3();
    let second = session_2x3();
    first.swap(1, 2).unwrap();
    assert_eq!(second.log_len(), 1);
    assert_ne!(first.show_current().unwrap(), second.show_current().unwrap());
}
