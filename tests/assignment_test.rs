// ==========================================
// 保洁员分配与维修申请集成测试
// ==========================================

mod test_helpers;

use hotel_ops::domain::{AssignOutcome, NewRequest};
use hotel_ops::repository::RepositoryError;
use test_helpers::{create_test_state, date, insert_company, insert_repair};

#[test]
fn test_assign_without_row_is_silent_miss_not_error() {
    let (_temp, state) = create_test_state().unwrap();

    // (hotelID=5, staffID=9) 没有分配行：不报错，显式返回 NoMatchingRow
    let outcome = state
        .assignments
        .assign_staff(9, 5, 101)
        .expect("silent miss must not be a store error");
    assert_eq!(outcome, AssignOutcome::NoMatchingRow);
    assert!(!outcome.is_assigned());
}

#[test]
fn test_assign_after_create() {
    let (_temp, state) = create_test_state().unwrap();

    let created = state.assignments.create_assignment(9, 5, 101).unwrap();
    let outcome = state.assignments.assign_staff(9, 5, 303).unwrap();

    match outcome {
        AssignOutcome::Assigned { asg_id, rows } => {
            assert_eq!(rows, 1);
            assert_eq!(asg_id, created.asg_id + 1);
        }
        AssignOutcome::NoMatchingRow => panic!("assignment row exists"),
    }

    // 其他酒店的同一员工不受影响
    let outcome = state.assignments.assign_staff(9, 6, 101).unwrap();
    assert_eq!(outcome, AssignOutcome::NoMatchingRow);
}

#[test]
fn test_repair_request_flow() {
    let (_temp, state) = create_test_state().unwrap();
    insert_company(&state, 1, "FixIt");
    insert_repair(&state, 7, 5, 101, 1, date(2024, 1, 5));

    let request = NewRequest {
        staff_id: 9,
        repair_id: 7,
        request_date: date(2024, 1, 6),
        description: "broken lamp".to_string(),
    };
    let first = state.requests.create_request(&request).unwrap();
    let second = state.requests.create_request(&request).unwrap();
    assert_eq!(first.req_id, 1);
    assert_eq!(second.req_id, 2);

    let orphan = NewRequest {
        repair_id: 999,
        ..request
    };
    let err = state.requests.create_request(&orphan).unwrap_err();
    assert!(matches!(err, RepositoryError::ForeignKeyViolation(_)));
}
