//! # Seed
//!
//! Companion binary that writes the demo dataset into Redis so the dashboard
//! has something to show locally. Each collection becomes one hash keyed by
//! document id, matching the layout the server reads.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};
use serde::Serialize;
use serde_json::Value;

pub mod data;

use data::{generate_participants, generate_projects, generate_teams};

pub async fn run(redis_url: &str, flush: bool) -> Result<()> {
    let client = Client::open(redis_url)?;
    let mut connection = client.get_multiplexed_async_connection().await?;

    if flush {
        for collection in data::COLLECTIONS {
            let _: () = connection.del(collection).await?;
        }

        println!("Cleared {} collections\n", data::COLLECTIONS.len());
    }

    add_collection(&mut connection, "participants", &generate_participants()).await?;
    add_collection(&mut connection, "teams", &generate_teams()).await?;
    add_collection(&mut connection, "projects", &generate_projects()).await?;
    add_collection(&mut connection, "mentors", &data::mentors()).await?;
    add_collection(&mut connection, "judges", &data::judges()).await?;
    add_collection(&mut connection, "tracks", &data::tracks()).await?;
    add_collection(&mut connection, "timeline", &data::timeline()).await?;
    add_collection(&mut connection, "public_activities", &data::public_activities()).await?;
    add_collection(&mut connection, "faq", &data::faq()).await?;
    add_collection(&mut connection, "admin_users", &data::admin_users()).await?;

    set_document(&mut connection, "public_stats", "main", &data::public_stats()).await?;
    set_document(&mut connection, "hackathon", "info", &data::hackathon_info()).await?;

    println!("\nSeeding complete.");

    Ok(())
}

async fn add_collection<T: Serialize>(
    connection: &mut MultiplexedConnection,
    collection: &str,
    documents: &[T],
) -> Result<()> {
    let bar = ProgressBar::new(documents.len() as u64);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap()
        .progress_chars("=> "),
    );
    bar.set_message(collection.to_string());

    for document in documents {
        let value = serde_json::to_value(document)?;
        let id = value
            .get("id")
            .and_then(Value::as_u64)
            .with_context(|| format!("document in '{collection}' is missing a numeric id"))?;

        let _: () = connection
            .hset(collection, id.to_string(), value.to_string())
            .await?;

        bar.inc(1);
    }

    bar.finish_and_clear();
    println!("Added {} documents to '{collection}'", documents.len());

    Ok(())
}

async fn set_document<T: Serialize>(
    connection: &mut MultiplexedConnection,
    collection: &str,
    id: &str,
    document: &T,
) -> Result<()> {
    let _: () = connection
        .hset(collection, id, serde_json::to_string(document)?)
        .await?;

    println!("Added singleton '{collection}/{id}'");

    Ok(())
}
