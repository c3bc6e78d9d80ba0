//! # Analytics
//!
//! The one derived endpoint. Four collections in, one fixed-shape summary
//! out; a pure pass over freshly fetched snapshots, so concurrent requests
//! need no coordination.
//!
//! Registration labels are the raw date strings sorted lexicographically.
//! That matches chronological order only while every document carries the
//! same zero-padded `YYYY-MM-DD` format, which is what the seeder writes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::database::{Document, MENTORS, PARTICIPANTS, TEAMS};

pub const STATUS_ACTIVE: &str = "Active";
pub const AVAILABILITY_BUSY: &str = "Busy";

const TOP_UNIVERSITIES: usize = 10;

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub registration_analytics: RegistrationAnalytics,
    pub track_popularity: TrackPopularity,
    pub engagement_metrics: EngagementMetrics,
    pub university_distribution: Vec<UniversityShare>,
}

/// Parallel sequences: `counts[i]` participants registered on `labels[i]`.
#[derive(Debug, PartialEq, Serialize)]
pub struct RegistrationAnalytics {
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
}

/// Parallel sequences in first-seen order, never sorted.
#[derive(Debug, PartialEq, Serialize)]
pub struct TrackPopularity {
    pub tracks: Vec<String>,
    pub counts: Vec<u64>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementMetrics {
    pub avg_team_size: f64,
    pub submission_rate: f64,
    pub mentor_utilization: f64,
    pub active_participants: f64,
    pub total_participants: u64,
    pub total_teams: u64,
    pub total_projects: u64,
    pub total_mentors: u64,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct UniversityShare {
    pub university: String,
    pub percent: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ParticipantFields {
    registration_date: Option<String>,
    track: Option<String>,
    university: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TeamFields {
    members: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MentorFields {
    availability: Option<String>,
}

/// Computes the dashboard summary over full snapshots of the participants,
/// teams, projects and mentors collections.
///
/// Never fails: a wrong-typed field makes the whole record read as "fields
/// absent" (still counted in totals, part of no grouping), and every ratio
/// floors its denominator at 1, so empty inputs degrade to zeros and empty
/// lists.
pub fn aggregate(
    participants: &[Document],
    teams: &[Document],
    projects: &[Document],
    mentors: &[Document],
) -> AnalyticsSummary {
    let mut registrations: BTreeMap<String, u64> = BTreeMap::new();
    let mut track_counts: Vec<(String, u64)> = Vec::new();
    let mut university_counts: Vec<(String, u64)> = Vec::new();
    let mut active = 0_u64;

    for document in participants {
        let participant: ParticipantFields = decode(PARTICIPANTS, document);

        if let Some(date) = participant.registration_date {
            *registrations.entry(date).or_insert(0) += 1;
        }

        if let Some(track) = participant.track.as_deref() {
            bump(&mut track_counts, track);
        }

        if let Some(university) = participant.university.as_deref() {
            bump(&mut university_counts, university);
        }

        if participant.status.as_deref() == Some(STATUS_ACTIVE) {
            active += 1;
        }
    }

    let member_total: usize = teams
        .iter()
        .map(|document| decode::<TeamFields>(TEAMS, document).members.len())
        .sum();

    let busy = mentors
        .iter()
        .filter(|document| {
            decode::<MentorFields>(MENTORS, document).availability.as_deref()
                == Some(AVAILABILITY_BUSY)
        })
        .count();

    let (labels, counts) = registrations.into_iter().unzip();
    let (tracks, track_tallies) = track_counts.into_iter().unzip();

    AnalyticsSummary {
        registration_analytics: RegistrationAnalytics { labels, counts },
        track_popularity: TrackPopularity {
            tracks,
            counts: track_tallies,
        },
        engagement_metrics: EngagementMetrics {
            avg_team_size: round2(member_total as f64 / floor_one(teams.len())),
            submission_rate: round2(100.0 * projects.len() as f64 / floor_one(teams.len())),
            mentor_utilization: round2(100.0 * busy as f64 / floor_one(mentors.len())),
            active_participants: round2(100.0 * active as f64 / floor_one(participants.len())),
            total_participants: participants.len() as u64,
            total_teams: teams.len() as u64,
            total_projects: projects.len() as u64,
            total_mentors: mentors.len() as u64,
        },
        university_distribution: top_universities(university_counts),
    }
}

fn decode<T>(collection: &str, document: &Document) -> T
where
    T: Default + serde::de::DeserializeOwned,
{
    serde_json::from_value(Value::Object(document.clone())).unwrap_or_else(|e| {
        debug!("Reading a malformed {collection} document as empty: {e}");
        T::default()
    })
}

fn bump(counts: &mut Vec<(String, u64)>, key: &str) {
    match counts.iter_mut().find(|(existing, _)| existing == key) {
        Some((_, count)) => *count += 1,
        None => counts.push((key.to_string(), 1)),
    }
}

fn top_universities(counts: Vec<(String, u64)>) -> Vec<UniversityShare> {
    let with_university: u64 = counts.iter().map(|(_, count)| count).sum();

    let mut entries = counts;
    // Stable sort keeps first-seen order for equal counts.
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(TOP_UNIVERSITIES);

    entries
        .into_iter()
        .map(|(university, count)| UniversityShare {
            university,
            percent: round2(100.0 * count as f64 / with_university.max(1) as f64),
        })
        .collect()
}

fn floor_one(count: usize) -> f64 {
    count.max(1) as f64
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("test documents must be JSON objects"),
        }
    }

    fn docs(count: usize) -> Vec<Document> {
        (0..count).map(|_| doc(json!({}))).collect()
    }

    #[test]
    fn test_empty_collections() {
        let summary = aggregate(&[], &[], &[], &[]);

        assert!(summary.registration_analytics.labels.is_empty());
        assert!(summary.registration_analytics.counts.is_empty());
        assert!(summary.track_popularity.tracks.is_empty());
        assert!(summary.track_popularity.counts.is_empty());
        assert!(summary.university_distribution.is_empty());

        assert_eq!(summary.engagement_metrics.avg_team_size, 0.0);
        assert_eq!(summary.engagement_metrics.submission_rate, 0.0);
        assert_eq!(summary.engagement_metrics.mentor_utilization, 0.0);
        assert_eq!(summary.engagement_metrics.active_participants, 0.0);
        assert_eq!(summary.engagement_metrics.total_participants, 0);
        assert_eq!(summary.engagement_metrics.total_teams, 0);
        assert_eq!(summary.engagement_metrics.total_projects, 0);
        assert_eq!(summary.engagement_metrics.total_mentors, 0);
    }

    #[test]
    fn test_submission_rate() {
        let summary = aggregate(&[], &docs(4), &docs(2), &[]);

        assert_eq!(summary.engagement_metrics.submission_rate, 50.0);
    }

    #[test]
    fn test_submission_rate_without_teams() {
        // The denominator floors at 1, it is not capped at 100%.
        let summary = aggregate(&[], &[], &docs(3), &[]);

        assert_eq!(summary.engagement_metrics.submission_rate, 300.0);
    }

    #[test]
    fn test_avg_team_size_rounding() {
        let teams = vec![
            doc(json!({ "members": ["a", "b"] })),
            doc(json!({ "members": ["c", "d"] })),
            doc(json!({ "members": ["e", "f", "g"] })),
        ];

        let summary = aggregate(&[], &teams, &[], &[]);

        assert_eq!(summary.engagement_metrics.avg_team_size, 2.33);
    }

    #[test]
    fn test_registration_labels_sorted_lexicographically() {
        let participants = vec![
            doc(json!({ "registrationDate": "2025-11-08" })),
            doc(json!({ "registrationDate": "2025-11-02" })),
            doc(json!({ "registrationDate": "2025-11-02" })),
            doc(json!({ "registrationDate": "2025-10-30" })),
        ];

        let summary = aggregate(&participants, &[], &[], &[]);

        assert_eq!(
            summary.registration_analytics.labels,
            vec!["2025-10-30", "2025-11-02", "2025-11-08"]
        );
        assert_eq!(summary.registration_analytics.counts, vec![1, 2, 1]);
    }

    #[test]
    fn test_tracks_in_first_seen_order() {
        let participants = vec![
            doc(json!({ "track": "Web3" })),
            doc(json!({ "track": "Generative AI" })),
            doc(json!({ "track": "Web3" })),
            doc(json!({ "track": "Cybersecurity" })),
        ];

        let summary = aggregate(&participants, &[], &[], &[]);

        assert_eq!(
            summary.track_popularity.tracks,
            vec!["Web3", "Generative AI", "Cybersecurity"]
        );
        assert_eq!(summary.track_popularity.counts, vec![2, 1, 1]);
    }

    #[test]
    fn test_missing_track_still_counts_toward_totals() {
        let participants = vec![
            doc(json!({ "track": "Web3", "status": "Active" })),
            doc(json!({ "status": "Active" })),
        ];

        let summary = aggregate(&participants, &[], &[], &[]);

        assert_eq!(summary.track_popularity.tracks, vec!["Web3"]);
        assert_eq!(summary.track_popularity.counts, vec![1]);
        assert_eq!(summary.engagement_metrics.total_participants, 2);
        assert_eq!(summary.engagement_metrics.active_participants, 100.0);
    }

    #[test]
    fn test_wrong_typed_fields_read_as_absent() {
        let participants = vec![doc(json!({ "track": 42, "status": "Active" }))];

        let summary = aggregate(&participants, &[], &[], &[]);

        // The record still counts, but its fields join no grouping; the
        // whole-record fallback also drops the well-typed status field.
        assert!(summary.track_popularity.tracks.is_empty());
        assert_eq!(summary.engagement_metrics.total_participants, 1);
        assert_eq!(summary.engagement_metrics.active_participants, 0.0);
    }

    #[test]
    fn test_top_ten_universities() {
        let mut participants: Vec<Document> = (0..15)
            .map(|i| doc(json!({ "university": format!("University {i:02}") })))
            .collect();
        participants.push(doc(json!({ "status": "Active" })));

        let summary = aggregate(&participants, &[], &[], &[]);

        assert_eq!(summary.university_distribution.len(), 10);
        // Equal counts keep first-seen order.
        assert_eq!(summary.university_distribution[0].university, "University 00");
        assert_eq!(summary.university_distribution[9].university, "University 09");
        // Shares are computed against participants with a university, not all 16.
        for share in &summary.university_distribution {
            assert_eq!(share.percent, 6.67);
        }
    }

    #[test]
    fn test_university_percent_ranked_by_count() {
        let participants = vec![
            doc(json!({ "university": "X" })),
            doc(json!({ "university": "Y" })),
            doc(json!({ "university": "Y" })),
            doc(json!({ "university": "X" })),
            doc(json!({ "university": "Y" })),
            doc(json!({ "university": "Z" })),
        ];

        let summary = aggregate(&participants, &[], &[], &[]);

        assert_eq!(
            summary.university_distribution,
            vec![
                UniversityShare {
                    university: "Y".to_string(),
                    percent: 50.0,
                },
                UniversityShare {
                    university: "X".to_string(),
                    percent: 33.33,
                },
                UniversityShare {
                    university: "Z".to_string(),
                    percent: 16.67,
                },
            ]
        );
    }

    #[test]
    fn test_identical_output_for_identical_input() {
        let participants = vec![
            doc(json!({
                "registrationDate": "2025-11-07",
                "track": "Web3",
                "university": "X",
                "status": "Active"
            })),
            doc(json!({ "registrationDate": "2025-11-08", "track": "Agentic AI" })),
        ];
        let teams = vec![doc(json!({ "members": ["a", "b", "c"] }))];
        let projects = docs(1);
        let mentors = vec![doc(json!({ "availability": "Available" }))];

        let first =
            serde_json::to_string(&aggregate(&participants, &teams, &projects, &mentors)).unwrap();
        let second =
            serde_json::to_string(&aggregate(&participants, &teams, &projects, &mentors)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_worked_example() {
        let participants = vec![
            doc(json!({
                "registrationDate": "2025-11-08",
                "track": "Web3",
                "university": "X",
                "status": "Active"
            })),
            doc(json!({
                "registrationDate": "2025-11-08",
                "track": "Web3",
                "university": "X",
                "status": "Inactive"
            })),
        ];
        let teams = vec![doc(json!({ "members": ["a", "b"] }))];
        let projects = docs(1);
        let mentors = vec![doc(json!({ "availability": "Busy" }))];

        let summary = aggregate(&participants, &teams, &projects, &mentors);

        assert_eq!(summary.registration_analytics.labels, vec!["2025-11-08"]);
        assert_eq!(summary.registration_analytics.counts, vec![2]);
        assert_eq!(summary.track_popularity.tracks, vec!["Web3"]);
        assert_eq!(summary.track_popularity.counts, vec![2]);
        assert_eq!(summary.engagement_metrics.avg_team_size, 2.0);
        assert_eq!(summary.engagement_metrics.submission_rate, 100.0);
        assert_eq!(summary.engagement_metrics.mentor_utilization, 100.0);
        assert_eq!(summary.engagement_metrics.active_participants, 50.0);
        assert_eq!(summary.engagement_metrics.total_participants, 2);
        assert_eq!(summary.engagement_metrics.total_teams, 1);
        assert_eq!(summary.engagement_metrics.total_projects, 1);
        assert_eq!(summary.engagement_metrics.total_mentors, 1);
        assert_eq!(
            summary.university_distribution,
            vec![UniversityShare {
                university: "X".to_string(),
                percent: 100.0,
            }]
        );
    }

    #[test]
    fn test_wire_field_names() {
        let summary = aggregate(&[], &[], &[], &[]);
        let value = serde_json::to_value(&summary).unwrap();

        assert!(value.get("registrationAnalytics").is_some());
        assert!(value.get("trackPopularity").is_some());
        assert!(value.get("universityDistribution").is_some());

        let metrics = value.get("engagementMetrics").unwrap();
        for field in [
            "avgTeamSize",
            "submissionRate",
            "mentorUtilization",
            "activeParticipants",
            "totalParticipants",
            "totalTeams",
            "totalProjects",
            "totalMentors",
        ] {
            assert!(metrics.get(field).is_some(), "missing {field}");
        }
    }
}
