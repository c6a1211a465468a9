use std::cmp::Ordering;

use super::entities::ResellerRecord;

/// The one listing order shared by paged listing and export:
/// monthly volume descending with absent values last, then newest first,
/// then highest id first so that no two rows compare equal.
pub fn canonical_order(a: &ResellerRecord, b: &ResellerRecord) -> Ordering {
    let by_volume = match (a.monthly_volume_num, b.monthly_volume_num) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_volume
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| b.id.cmp(&a.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::reseller_fixtures::record;
    use chrono::{Duration, Utc};

    #[test]
    fn higher_volume_first() {
        let now = Utc::now();
        let small = record(1, "A", Some(10), now);
        let big = record(2, "B", Some(500), now - Duration::days(3));

        assert_eq!(canonical_order(&big, &small), Ordering::Less);
    }

    #[test]
    fn missing_volume_sorts_last() {
        let now = Utc::now();
        let none = record(1, "A", None, now);
        let some = record(2, "B", Some(1), now - Duration::days(10));

        assert_eq!(canonical_order(&none, &some), Ordering::Greater);
    }

    #[test]
    fn equal_volume_newest_first_then_id() {
        let now = Utc::now();
        let older = record(1, "A", Some(5), now - Duration::hours(1));
        let newer = record(2, "B", Some(5), now);
        let twin = record(3, "C", Some(5), now);

        let mut rows = vec![older.clone(), newer.clone(), twin.clone()];
        rows.sort_by(canonical_order);

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
