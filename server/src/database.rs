//! # Redis
//!
//! Document store backing the dashboard.
//!
//! ## Layout
//!
//! - One hash per collection, named after the collection
//! - Hash field: document id, hash value: the document as a JSON object
//! - Singleton collections hold one document at a well-known id
//!   (`public_stats/main`, `hackathon/info`)
//!
//! ## Requirements
//!
//! - Full-collection streaming for the REST surface and the analytics inputs
//! - Single-document lookup for the two singleton endpoints
//! - Read-only traffic, at most a few hundred documents per collection

use std::{collections::HashMap, time::Duration};

use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use serde_json::{Map, Value};
use tracing::warn;

use super::error::AppError;

pub const PARTICIPANTS: &str = "participants";
pub const TEAMS: &str = "teams";
pub const PROJECTS: &str = "projects";
pub const MENTORS: &str = "mentors";
pub const JUDGES: &str = "judges";
pub const TRACKS: &str = "tracks";
pub const TIMELINE: &str = "timeline";
pub const PUBLIC_ACTIVITIES: &str = "public_activities";
pub const FAQ: &str = "faq";
pub const ADMIN_USERS: &str = "admin_users";

pub const PUBLIC_STATS: &str = "public_stats";
pub const PUBLIC_STATS_ID: &str = "main";
pub const HACKATHON: &str = "hackathon";
pub const HACKATHON_ID: &str = "info";

/// Collections served whole as JSON arrays under `/api/{collection}`.
pub const STREAMED_COLLECTIONS: [&str; 10] = [
    PARTICIPANTS,
    TEAMS,
    PROJECTS,
    MENTORS,
    JUDGES,
    TRACKS,
    TIMELINE,
    PUBLIC_ACTIVITIES,
    FAQ,
    ADMIN_USERS,
];

pub type Document = Map<String, Value>;

pub async fn init_redis(redis_url: &str) -> ConnectionManager {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url).unwrap();

    client
        .get_connection_manager_with_config(config)
        .await
        .unwrap()
}

/// Every document of a collection, ordered by document id.
///
/// Hash iteration order is unspecified, so entries are sorted (numeric ids
/// first, numerically) to keep repeated reads of an unchanged snapshot
/// identical field for field.
pub async fn stream_collection(
    connection: &ConnectionManager,
    collection: &str,
) -> Result<Vec<Document>, AppError> {
    let mut connection = connection.clone();

    let raw: HashMap<String, String> = connection.hgetall(collection).await?;

    let mut entries: Vec<(String, String)> = raw.into_iter().collect();
    entries.sort_by_key(|(id, _)| (id.parse::<u64>().unwrap_or(u64::MAX), id.clone()));

    let mut documents = Vec::with_capacity(entries.len());
    for (id, raw) in entries {
        match serde_json::from_str::<Document>(&raw) {
            Ok(document) => documents.push(document),
            Err(e) => warn!("Skipping malformed document {collection}/{id}: {e}"),
        }
    }

    Ok(documents)
}

pub async fn get_document(
    connection: &ConnectionManager,
    collection: &str,
    id: &str,
) -> Result<Option<Document>, AppError> {
    let mut connection = connection.clone();

    let raw: Option<String> = connection.hget(collection, id).await?;

    match raw {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}
