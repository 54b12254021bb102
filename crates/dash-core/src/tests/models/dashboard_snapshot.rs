use crate::{DashboardSnapshot, Region, advance_timestamp};

use crate::tests::{at, user};

use chrono::Duration;

fn snapshot() -> DashboardSnapshot {
    DashboardSnapshot::new(
        vec![
            user("1", Region::Europe, true, at(2024, 1, 1)),
            user("2", Region::Asia, false, at(2024, 2, 1)),
        ],
        at(2024, 3, 1),
    )
}

#[test]
fn test_advance_timestamp_uses_later_candidate() {
    let prev = at(2024, 3, 1);
    let candidate = at(2024, 3, 2);

    assert_eq!(advance_timestamp(Some(prev), candidate), candidate);
    assert_eq!(advance_timestamp(None, prev), prev);
}

#[test]
fn test_advance_timestamp_bumps_stale_candidate() {
    let prev = at(2024, 3, 1);

    assert_eq!(
        advance_timestamp(Some(prev), prev),
        prev + Duration::milliseconds(1)
    );
    assert_eq!(
        advance_timestamp(Some(prev), at(2020, 1, 1)),
        prev + Duration::milliseconds(1)
    );
}

#[test]
fn test_with_appended_keeps_order_and_advances_stamp() {
    let snap = snapshot();
    let added = user("3", Region::Oceania, true, at(2024, 3, 1));

    let next = snap.with_appended(added.clone(), at(2024, 1, 1));

    assert_eq!(next.users.len(), 3);
    assert_eq!(next.users[2], added);
    assert!(next.last_updated > snap.last_updated);
}

#[test]
fn test_users_without_filters_only_matching_id() {
    let snap = snapshot();

    let remaining = snap.users_without("1");

    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "2");
    assert_eq!(snap.users_without("missing").len(), 2);
}

#[test]
fn test_find_user() {
    let snap = snapshot();

    assert_eq!(snap.find_user("2").map(|u| u.region), Some(Region::Asia));
    assert!(snap.find_user("3").is_none());
}

#[test]
fn test_snapshot_json_round_trip_is_deep_equal() {
    let snap = snapshot();

    let json = serde_json::to_string(&snap).unwrap();
    let restored: DashboardSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, snap);
    assert!(json.contains("lastUpdated"));
}
