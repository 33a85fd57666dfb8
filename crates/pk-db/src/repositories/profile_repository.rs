//! SQLite-backed profile repository.
//!
//! One wide row per record: a column per field value, a column per
//! visibility flag, plus the two timestamps. Timestamps are stored as epoch
//! milliseconds; an update always lands at least one millisecond after the
//! previous write for the same key, so two saves inside one clock tick still
//! order.

use crate::{DbError, ProfileStore, Result as DbErrorResult};

use pk_core::{OwnerKey, ProfileFields, ProfileRecord, VisibilitySettings};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct SqliteProfileRepository {
    pool: SqlitePool,
}

impl SqliteProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn record_from_row(row: &SqliteRow) -> DbErrorResult<ProfileRecord> {
        let raw_key: String = row.try_get("owner_key")?;
        let owner_key = OwnerKey::parse(&raw_key).map_err(|e| DbError::Corrupt {
            message: format!("invalid owner_key '{}': {}", raw_key, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let fields = ProfileFields {
            comment: row.try_get("comment")?,
            vehicle_number: row.try_get("vehicle_number")?,
            nickname: row.try_get("nickname")?,
            visit_place: row.try_get("visit_place")?,
            phone_number: row.try_get("phone_number")?,
            memo: row.try_get("memo")?,
            kakao_open_chat_url: row.try_get("kakao_open_chat_url")?,
        };

        let visibility = VisibilitySettings {
            comment: row.try_get("show_comment")?,
            vehicle_number: row.try_get("show_vehicle_number")?,
            nickname: row.try_get("show_nickname")?,
            visit_place: row.try_get("show_visit_place")?,
            phone_number: row.try_get("show_phone_number")?,
            memo: row.try_get("show_memo")?,
            kakao_open_chat_url: row.try_get("show_kakao_open_chat_url")?,
        };

        Ok(ProfileRecord {
            owner_key,
            fields,
            visibility,
            created_at: timestamp(row.try_get("created_at")?, "created_at")?,
            last_updated: timestamp(row.try_get("last_updated")?, "last_updated")?,
        })
    }
}

#[track_caller]
fn timestamp(millis: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| DbError::Corrupt {
        message: format!("invalid timestamp in profiles.{}: {}", column, millis),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[async_trait]
impl ProfileStore for SqliteProfileRepository {
    async fn get_by_key(&self, key: &OwnerKey) -> DbErrorResult<Option<ProfileRecord>> {
        let row = sqlx::query(
            r#"
                SELECT owner_key,
                    comment, vehicle_number, nickname, visit_place,
                    phone_number, memo, kakao_open_chat_url,
                    show_comment, show_vehicle_number, show_nickname, show_visit_place,
                    show_phone_number, show_memo, show_kakao_open_chat_url,
                    created_at, last_updated
                FROM profiles
                WHERE owner_key = ?
            "#,
        )
        .bind(key.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| Self::record_from_row(&r)).transpose()
    }

    async fn upsert(
        &self,
        key: &OwnerKey,
        fields: ProfileFields,
        visibility: VisibilitySettings,
    ) -> DbErrorResult<ProfileRecord> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query(
            r#"
                SELECT created_at, last_updated
                FROM profiles
                WHERE owner_key = ?
            "#,
        )
        .bind(key.as_str())
        .fetch_optional(&mut *tx)
        .await?;

        let now = Utc::now().timestamp_millis();
        let (created_at, last_updated) = match existing {
            Some(row) => {
                let created_at: i64 = row.try_get("created_at")?;
                let previous: i64 = row.try_get("last_updated")?;
                (created_at, now.max(previous + 1))
            }
            None => (now, now),
        };

        // created_at is deliberately absent from the update set: it is
        // written exactly once, at first save.
        sqlx::query(
            r#"
                INSERT INTO profiles (
                    owner_key,
                    comment, vehicle_number, nickname, visit_place,
                    phone_number, memo, kakao_open_chat_url,
                    show_comment, show_vehicle_number, show_nickname, show_visit_place,
                    show_phone_number, show_memo, show_kakao_open_chat_url,
                    created_at, last_updated
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(owner_key) DO UPDATE SET
                    comment = excluded.comment,
                    vehicle_number = excluded.vehicle_number,
                    nickname = excluded.nickname,
                    visit_place = excluded.visit_place,
                    phone_number = excluded.phone_number,
                    memo = excluded.memo,
                    kakao_open_chat_url = excluded.kakao_open_chat_url,
                    show_comment = excluded.show_comment,
                    show_vehicle_number = excluded.show_vehicle_number,
                    show_nickname = excluded.show_nickname,
                    show_visit_place = excluded.show_visit_place,
                    show_phone_number = excluded.show_phone_number,
                    show_memo = excluded.show_memo,
                    show_kakao_open_chat_url = excluded.show_kakao_open_chat_url,
                    last_updated = excluded.last_updated
            "#,
        )
        .bind(key.as_str())
        .bind(&fields.comment)
        .bind(&fields.vehicle_number)
        .bind(&fields.nickname)
        .bind(&fields.visit_place)
        .bind(&fields.phone_number)
        .bind(&fields.memo)
        .bind(&fields.kakao_open_chat_url)
        .bind(visibility.comment)
        .bind(visibility.vehicle_number)
        .bind(visibility.nickname)
        .bind(visibility.visit_place)
        .bind(visibility.phone_number)
        .bind(visibility.memo)
        .bind(visibility.kakao_open_chat_url)
        .bind(created_at)
        .bind(last_updated)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(ProfileRecord {
            owner_key: key.clone(),
            fields,
            visibility,
            created_at: timestamp(created_at, "created_at")?,
            last_updated: timestamp(last_updated, "last_updated")?,
        })
    }
}
