use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, Sqlite, SqlitePool, migrate::MigrateDatabase};
use tracing::{debug, info};

use crate::error::SinkError;
use crate::models::PokemonRecord;
use crate::traits::{RecordSink, StoreOutcome};

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(db_url: &str) -> Result<Self> {
        // Create database file if it doesn't exist
        if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
            info!("Creating database file");
            Sqlite::create_database(db_url).await?;
        }

        let pool = SqlitePool::connect(db_url).await?;

        info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;

        info!("Database initialized successfully");
        Ok(Self { pool })
    }

    pub async fn save_record(&self, record: &PokemonRecord) -> Result<StoreOutcome, SinkError> {
        let body = serde_json::to_string(record)?;

        let result = sqlx::query(
            r"
            INSERT INTO pokedex (id, record_label, name, form, national_index, record, scraped_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO NOTHING
            ",
        )
        .bind(record.storage_id())
        .bind(&record.record_label)
        .bind(&record.name)
        .bind(&record.form)
        .bind(i64::from(record.index))
        .bind(body)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            debug!("Skipping duplicate record: {}", record.record_label);
            Ok(StoreOutcome::Duplicate)
        } else {
            Ok(StoreOutcome::Inserted)
        }
    }
}

#[async_trait]
impl RecordSink for Database {
    async fn store(&self, record: &PokemonRecord) -> Result<StoreOutcome, SinkError> {
        self.save_record(record).await
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::models::BaseStats;

    async fn temp_database(name: &str) -> Database {
        let path = std::env::temp_dir().join(format!(
            "pokedex-{name}-{}-{}.db",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        Database::new(&format!("sqlite:{}", path.display()))
            .await
            .expect("temporary database")
    }

    fn record(form: Option<&str>, label: &str) -> PokemonRecord {
        let stats: IndexMap<String, u32> = [("HP".to_string(), 78), ("Speed".to_string(), 100)]
            .into_iter()
            .collect();
        PokemonRecord {
            name: "Charizard".to_string(),
            form: form.map(str::to_string),
            index: 6,
            types: vec!["Fire".to_string()],
            species: "Flame Pokémon".to_string(),
            height: "1.7 m".to_string(),
            weight: "90.5 kg".to_string(),
            abilities: vec!["Blaze".to_string()],
            local_index: IndexMap::new(),
            training: IndexMap::new(),
            breeding: IndexMap::new(),
            base_stats: BaseStats::from_raw(stats).expect("small stats"),
            record_label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn second_insert_is_a_duplicate() {
        let db = temp_database("dupes").await;
        let charizard = record(None, "Charizard");

        assert_eq!(db.store(&charizard).await.expect("insert"), StoreOutcome::Inserted);
        assert_eq!(db.store(&charizard).await.expect("insert"), StoreOutcome::Duplicate);

        let mega = record(Some("Mega Charizard X"), "Mega Charizard X");
        assert_eq!(db.store(&mega).await.expect("insert"), StoreOutcome::Inserted);

        let labels: Vec<String> = sqlx::query_scalar("SELECT record_label FROM pokedex ORDER BY record_label")
            .fetch_all(&db.pool)
            .await
            .expect("labels");
        assert_eq!(labels, vec!["Charizard", "Mega Charizard X"]);
    }

    #[tokio::test]
    async fn stored_json_round_trips() {
        let db = temp_database("json").await;
        let charizard = record(None, "Charizard");
        db.store(&charizard).await.expect("insert");

        let row = sqlx::query("SELECT record, national_index FROM pokedex WHERE id = ?")
            .bind(charizard.storage_id())
            .fetch_one(&db.pool)
            .await
            .expect("stored row");
        let stored: PokemonRecord =
            serde_json::from_str(&row.get::<String, _>("record")).expect("valid json");

        assert_eq!(stored, charizard);
        assert_eq!(stored.base_stats.total(), 178);
        assert_eq!(row.get::<i64, _>("national_index"), 6);
    }
}
