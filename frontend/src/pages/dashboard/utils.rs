use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    api::{Announcement, Assignment, Meeting},
    utils::time::parse_timestamp,
};

/// Record counts shown on the dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub announcements: usize,
    pub meetings: usize,
    pub upcoming_meetings: usize,
    pub assignments: usize,
}

/// Whether a record addressed to `record_division` is visible to a member of
/// `member_division`. Records without a division are for everyone, and
/// members without a division see everything.
pub fn in_scope(record_division: Option<i64>, member_division: Option<i64>) -> bool {
    match (record_division, member_division) {
        (Some(record), Some(member)) => record == member,
        _ => true,
    }
}

pub fn summarize(
    announcements: &[Announcement],
    meetings: &[Meeting],
    assignments: &[Assignment],
    member_division: Option<i64>,
    today: NaiveDate,
) -> DashboardSummary {
    let today_ms = today
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or_default();
    let meetings: Vec<&Meeting> = meetings
        .iter()
        .filter(|meeting| in_scope(meeting.division_id, member_division))
        .collect();
    DashboardSummary {
        announcements: announcements
            .iter()
            .filter(|a| in_scope(a.division_id, member_division))
            .count(),
        upcoming_meetings: meetings
            .iter()
            .filter(|meeting| {
                meeting
                    .date
                    .as_deref()
                    .and_then(parse_timestamp)
                    .is_some_and(|date| date >= today_ms)
            })
            .count(),
        meetings: meetings.len(),
        assignments: assignments
            .iter()
            .filter(|a| in_scope(a.division_id, member_division))
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meeting(id: i64, date: &str, division_id: Option<i64>) -> Meeting {
        Meeting {
            id,
            date: Some(date.into()),
            division_id,
            ..Meeting::default()
        }
    }

    #[test]
    fn scope_matches_division_or_shared_records() {
        assert!(in_scope(None, Some(2)));
        assert!(in_scope(Some(2), Some(2)));
        assert!(!in_scope(Some(3), Some(2)));
        assert!(in_scope(Some(3), None));
    }

    #[test]
    fn summary_counts_only_visible_records() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let meetings = vec![
            meeting(1, "2024-05-09", Some(2)),
            meeting(2, "2024-05-10", Some(2)),
            meeting(3, "2024-06-01", None),
            meeting(4, "2024-06-01", Some(5)),
        ];
        let announcements = vec![
            Announcement {
                id: 1,
                division_id: Some(5),
                ..Announcement::default()
            },
            Announcement {
                id: 2,
                ..Announcement::default()
            },
        ];
        let summary = summarize(&announcements, &meetings, &[], Some(2), today);
        assert_eq!(
            summary,
            DashboardSummary {
                announcements: 1,
                meetings: 3,
                upcoming_meetings: 2,
                assignments: 0,
            }
        );
    }
}
