//! Postgres implementation of the BookingRepository trait

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Error::RowNotFound, FromRow};
use uuid::Uuid;

use crate::{
    domain::{
        bookings::{
            errors::{
                CreateBookingError, DeleteBookingError, GetBookingByIdError, ListBookingsError,
                UpdateBookingError,
            },
            Booking, BookingRepository, NewBooking,
        },
        comms::EmailAddress,
    },
    infrastructure::database::postgres::PostgresDatabase,
};

#[derive(FromRow)]
struct BookingRecord {
    id: Uuid,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BookingRecord> for Booking {
    fn from(record: BookingRecord) -> Self {
        Booking {
            id: record.id,
            email: EmailAddress::new_unchecked(record.email.as_ref()),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[async_trait]
impl BookingRepository for PostgresDatabase {
    #[mutants::skip]
    async fn create_booking(&self, booking: &NewBooking) -> Result<Uuid, CreateBookingError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO bookings (id, email)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(booking.id())
        .bind(booking.email().to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            CreateBookingError::UnknownError(anyhow!("Unknown database error: {:?}", err))
        })?;

        Ok(id)
    }

    #[mutants::skip]
    async fn list_bookings(&self) -> Result<Vec<Booking>, ListBookingsError> {
        let records = sqlx::query_as::<_, BookingRecord>(
            r#"
            SELECT id, email, created_at, updated_at
            FROM bookings
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            ListBookingsError::UnknownError(anyhow!("Unknown database error: {:?}", err))
        })?;

        Ok(records.into_iter().map(Booking::from).collect())
    }

    #[mutants::skip]
    async fn get_booking_by_id(&self, id: &Uuid) -> Result<Booking, GetBookingByIdError> {
        Ok(sqlx::query_as::<_, BookingRecord>(
            r#"
            SELECT id, email, created_at, updated_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            RowNotFound => GetBookingByIdError::BookingNotFound(*id),
            _ => GetBookingByIdError::UnknownError(anyhow!("Unknown database error: {:?}", err)),
        })?
        .into())
    }

    #[mutants::skip]
    async fn update_booking(
        &self,
        id: &Uuid,
        email: &EmailAddress,
    ) -> Result<Booking, UpdateBookingError> {
        Ok(sqlx::query_as::<_, BookingRecord>(
            r#"
            UPDATE bookings
            SET email = $2, updated_at = now()
            WHERE id = $1
            RETURNING id, email, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(email.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            RowNotFound => UpdateBookingError::BookingNotFound(*id),
            _ => UpdateBookingError::UnknownError(anyhow!("Unknown database error: {:?}", err)),
        })?
        .into())
    }

    #[mutants::skip]
    async fn delete_booking(&self, id: &Uuid) -> Result<(), DeleteBookingError> {
        let result = sqlx::query(
            r#"
            DELETE FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            DeleteBookingError::UnknownError(anyhow!("Unknown database error: {:?}", err))
        })?;

        if result.rows_affected() == 0 {
            return Err(DeleteBookingError::BookingNotFound(*id));
        }

        Ok(())
    }
}
