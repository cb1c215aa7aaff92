// ==========================================
// 主键分配集成测试
// ==========================================
// 直接"读 MAX + 1"在读与写之间有竞争窗口；
// IdAllocator 在同一把锁内分配并写入，并发调用方拿到的ID互不相同，
// 未落库的分配不占用ID
// ==========================================

mod test_helpers;

use hotel_ops::domain::{AssignOutcome, NewBooking, NewRequest};
use hotel_ops::repository::{max_plus_one, IdAllocator, IdSequence, StoreExecutor};
use rusqlite::{params, Connection};
use std::collections::HashSet;
use std::sync::{Arc, Barrier, Mutex};
use std::thread;
use test_helpers::{create_test_state, date, insert_company, insert_customer, insert_repair};

fn setup_executor() -> StoreExecutor {
    let conn = hotel_ops::db::open_sqlite_connection(":memory:").unwrap();
    hotel_ops::db::init_schema(&conn).unwrap();
    conn.execute_batch(
        "INSERT INTO Customer VALUES (1, 'Ann', 'Lee', 'a', '1', '1990-01-01', 'Female');
         INSERT INTO Booking VALUES (1, 1, 5, 10, '2024-06-01', 2, 200.0);",
    )
    .unwrap();
    StoreExecutor::new(Arc::new(Mutex::new(conn)))
}

fn insert_booking(executor: &StoreExecutor, b_id: i64) -> hotel_ops::RepositoryResult<usize> {
    executor.execute(
        "INSERT INTO Booking VALUES (?1, 1, 5, 10, '2024-06-02', 1, 50.0)",
        params![b_id],
    )
}

fn ann_booking(price: f64) -> NewBooking {
    NewBooking {
        hotel_id: 5,
        room_no: 10,
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        booking_date: date(2024, 6, 10),
        no_of_people: 2,
        price,
    }
}

#[test]
fn test_raw_max_plus_one_reads_collide() {
    let executor = setup_executor();

    // 两个"并发"的新建预订都在插入前读取当前最大值
    let first = max_plus_one(&executor, IdSequence::Booking).unwrap();
    let second = max_plus_one(&executor, IdSequence::Booking).unwrap();
    assert_eq!(first, 2);
    assert_eq!(first, second, "raw max+1 reads hand out the same id");
}

#[test]
fn test_allocator_never_collides_across_threads() {
    let executor = setup_executor();
    let allocator = Arc::new(IdAllocator::new());
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let executor = executor.clone();
            let allocator = allocator.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                (0..25)
                    .map(|_| {
                        allocator
                            .allocate_with(&executor, IdSequence::Booking, |id| {
                                insert_booking(&executor, id)
                            })
                            .unwrap()
                            .0
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(seen.insert(id), "duplicate id {}", id);
        }
    }
    assert_eq!(seen.len(), 200);
    assert_eq!(seen.iter().min(), Some(&2));
    assert_eq!(seen.iter().max(), Some(&201));
}

#[test]
fn test_allocator_on_plain_connection() {
    // 没有任何业务表时读取 MAX 是存储错误，写入不会执行
    let executor = StoreExecutor::new(Arc::new(Mutex::new(Connection::open_in_memory().unwrap())));
    let allocator = IdAllocator::new();
    let result = allocator.allocate_with(&executor, IdSequence::Request, |_| {
        panic!("write must not run when MAX cannot be read")
    });
    assert!(result.is_err());
}

#[test]
fn test_rejected_booking_does_not_skip_id() {
    let (_temp, state) = create_test_state().unwrap();
    insert_customer(&state, 1, "Ann", "Lee");

    assert!(state.bookings.create_booking(&ann_booking(-1.0)).is_err());
    assert_eq!(state.bookings.create_booking(&ann_booking(120.0)).unwrap().b_id, 1);
}

#[test]
fn test_state_bookings_are_distinct_across_threads() {
    let (_temp, state) = create_test_state().unwrap();
    insert_customer(&state, 1, "Ann", "Lee");
    let state = &state;

    let ids: Vec<i64> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    (0..10)
                        .map(|_| state.bookings.create_booking(&ann_booking(60.0)).unwrap().b_id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect()
    });

    let distinct: HashSet<i64> = ids.iter().copied().collect();
    assert_eq!(distinct.len(), 40);
    assert_eq!(distinct.iter().max(), Some(&40));
}

#[test]
fn test_rejected_request_does_not_skip_id() {
    let (_temp, state) = create_test_state().unwrap();
    insert_company(&state, 1, "FixIt");
    insert_repair(&state, 7, 5, 101, 1, date(2024, 1, 5));

    let request = |repair_id: i64| NewRequest {
        staff_id: 9,
        repair_id,
        request_date: date(2024, 1, 6),
        description: "broken lamp".to_string(),
    };

    assert!(state.requests.create_request(&request(999)).is_err());
    assert_eq!(state.requests.create_request(&request(7)).unwrap().req_id, 1);
}

#[test]
fn test_assignment_miss_does_not_skip_id() {
    let (_temp, state) = create_test_state().unwrap();

    let outcome = state.assignments.assign_staff(9, 5, 101).unwrap();
    assert_eq!(outcome, AssignOutcome::NoMatchingRow);

    let created = state.assignments.create_assignment(9, 5, 101).unwrap();
    assert_eq!(created.asg_id, 1);
}
