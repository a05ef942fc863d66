use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};

use crate::utils::time::{parse_timestamp, time_to_seconds};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Which key orders a list, and in which direction. No key means the order
/// the API returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective<K> {
    pub key: Option<K>,
    pub direction: SortDirection,
}

impl<K> Default for SortDirective<K> {
    fn default() -> Self {
        Self {
            key: None,
            direction: SortDirection::Ascending,
        }
    }
}

impl<K: Copy + PartialEq> SortDirective<K> {
    pub fn by(key: K, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Header click: the active key flips direction, a new key starts
    /// ascending.
    pub fn toggle(&mut self, key: K) {
        if self.key == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn direction_for(&self, key: K) -> Option<SortDirection> {
        (self.key == Some(key)).then_some(self.direction)
    }
}

/// Resolved value of a sort key for one record.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Null,
    Bool(bool),
    Number(f64),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    /// Seconds since midnight.
    TimeOfDay(u32),
    Text(String),
}

impl SortValue {
    pub fn text(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }

    pub fn text_opt(value: Option<&str>) -> Self {
        value.map(Self::text).unwrap_or(SortValue::Null)
    }

    pub fn number(value: impl Into<f64>) -> Self {
        SortValue::Number(value.into())
    }

    pub fn number_opt<N: Into<f64>>(value: Option<N>) -> Self {
        value.map(Self::number).unwrap_or(SortValue::Null)
    }

    /// Date or datetime field; unparsable input sorts like a missing value.
    pub fn date(value: &str) -> Self {
        parse_timestamp(value)
            .map(SortValue::Timestamp)
            .unwrap_or(SortValue::Null)
    }

    pub fn date_opt(value: Option<&str>) -> Self {
        value.map(Self::date).unwrap_or(SortValue::Null)
    }

    /// `HH:MM[:SS]` field.
    pub fn time_of_day(value: &str) -> Self {
        time_to_seconds(value)
            .map(SortValue::TimeOfDay)
            .unwrap_or(SortValue::Null)
    }

    pub fn time_of_day_opt(value: Option<&str>) -> Self {
        value.map(Self::time_of_day).unwrap_or(SortValue::Null)
    }

    fn rank(&self) -> u8 {
        match self {
            SortValue::Null => 0,
            SortValue::Bool(_) => 1,
            SortValue::Number(_) => 2,
            SortValue::Timestamp(_) => 3,
            SortValue::TimeOfDay(_) => 4,
            SortValue::Text(_) => 5,
        }
    }

    /// Ascending order. `Null` comes before every present value; values of
    /// different kinds order by kind.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Null, SortValue::Null) => Ordering::Equal,
            (SortValue::Bool(a), SortValue::Bool(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortValue::Timestamp(a), SortValue::Timestamp(b)) => a.cmp(b),
            (SortValue::TimeOfDay(a), SortValue::TimeOfDay(b)) => a.cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => compare_text(a, b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

thread_local! {
    // Secondary strength: accents matter, case does not.
    static COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Secondary);
        match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(err) => {
                log::warn!("text collation unavailable, comparing code points: {}", err);
                None
            }
        }
    };
}

/// Locale-aware, case-insensitive text order.
fn compare_text(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase)),
    })
}

/// Stable sort; equal keys keep their prior relative order in both
/// directions.
pub fn sort_records<T>(
    mut records: Vec<T>,
    accessor: fn(&T) -> SortValue,
    direction: SortDirection,
) -> Vec<T> {
    records.sort_by(|a, b| {
        let ordering = accessor(a).compare(&accessor(b));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: Option<&'static str>,
        start: &'static str,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: 1,
                name: Some("charlie"),
                start: "13:00:00",
            },
            Row {
                id: 2,
                name: None,
                start: "09:30:00",
            },
            Row {
                id: 3,
                name: Some("Alpha"),
                start: "9:45:00",
            },
            Row {
                id: 4,
                name: Some("bravo"),
                start: "13:00:00",
            },
        ]
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    fn by_name(row: &Row) -> SortValue {
        SortValue::text_opt(row.name)
    }

    fn by_start(row: &Row) -> SortValue {
        SortValue::time_of_day(row.start)
    }

    #[test]
    fn text_is_case_insensitive_and_missing_sorts_first() {
        let sorted = sort_records(rows(), by_name, SortDirection::Ascending);
        assert_eq!(ids(&sorted), [2, 3, 4, 1]);
    }

    #[test]
    fn descending_puts_missing_values_last() {
        let sorted = sort_records(rows(), by_name, SortDirection::Descending);
        assert_eq!(ids(&sorted), [1, 4, 3, 2]);
    }

    #[test]
    fn time_fields_compare_as_seconds() {
        let sorted = sort_records(rows(), by_start, SortDirection::Ascending);
        assert_eq!(ids(&sorted), [2, 3, 1, 4]);
    }

    #[test]
    fn ties_keep_prior_order_in_both_directions() {
        let asc = sort_records(rows(), by_start, SortDirection::Ascending);
        let desc = sort_records(rows(), by_start, SortDirection::Descending);
        assert_eq!(ids(&asc)[2..], [1, 4]);
        assert_eq!(ids(&desc)[..2], [1, 4]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let once = sort_records(rows(), by_name, SortDirection::Ascending);
        let twice = sort_records(once.clone(), by_name, SortDirection::Ascending);
        assert_eq!(once, twice);
    }

    #[test]
    fn descending_reverses_ascending_for_distinct_keys() {
        let mut asc = sort_records(rows(), by_name, SortDirection::Ascending);
        let desc = sort_records(rows(), by_name, SortDirection::Descending);
        asc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn dates_compare_by_timestamp_not_text() {
        let a = SortValue::date("2024-02-01");
        let b = SortValue::date("2024-10-01T08:00:00Z");
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(SortValue::date("not a date"), SortValue::Null);
    }

    #[test]
    fn toggle_flips_active_key_and_resets_new_key() {
        let mut directive = SortDirective::default();
        directive.toggle("name");
        assert_eq!(directive, SortDirective::by("name", SortDirection::Ascending));
        directive.toggle("name");
        assert_eq!(directive.direction, SortDirection::Descending);
        directive.toggle("date");
        assert_eq!(directive, SortDirective::by("date", SortDirection::Ascending));
        assert_eq!(directive.direction_for("name"), None);
    }

    #[test]
    fn accented_text_sorts_with_its_base_letter() {
        fn by_text(name: &&'static str) -> SortValue {
            SortValue::text(name)
        }
        let sorted = sort_records(vec!["Zaki", "Élan", "adi"], by_text, SortDirection::Ascending);
        assert_eq!(sorted, ["adi", "Élan", "Zaki"]);
        assert_eq!(compare_text("ÉLAN", "élan"), Ordering::Equal);
        assert_eq!(compare_text("elan", "élan"), Ordering::Less);
    }

    #[test]
    fn mixed_kinds_order_by_kind() {
        assert_eq!(
            SortValue::Number(10.0).compare(&SortValue::text("1")),
            Ordering::Less
        );
        assert_eq!(SortValue::Null.compare(&SortValue::Bool(false)), Ordering::Less);
    }
}
