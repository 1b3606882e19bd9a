//! PostgreSQL Repository Implementation

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Exercise, ExerciseDraft};
use crate::domain::repository::ExerciseRepository;
use crate::domain::value_objects::{ExerciseFilter, ExerciseName, Unit};
use crate::error::{ExerciseError, ExerciseResult};
use kernel::id::ExerciseId;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgExerciseRepository {
    pool: PgPool,
}

impl PgExerciseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ExerciseRepository for PgExerciseRepository {
    async fn create(&self, exercise: &Exercise) -> ExerciseResult<()> {
        sqlx::query(
            r#"
            INSERT INTO exercises (
                exercise_id,
                name,
                reps,
                weight,
                unit,
                date
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(exercise.id.into_uuid())
        .bind(exercise.name.as_str())
        .bind(exercise.reps)
        .bind(exercise.weight)
        .bind(exercise.unit.as_str())
        .bind(exercise.date)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            exercise_id = %exercise.id,
            name = %exercise.name,
            "Exercise stored"
        );

        Ok(())
    }

    async fn find(&self, filter: &ExerciseFilter, limit: i64) -> ExerciseResult<Vec<Exercise>> {
        // NULLIF keeps the "0 = no limit" convention in a single statement
        let rows = if let Some(reps) = filter.reps {
            sqlx::query_as::<_, ExerciseRow>(
                r#"
                SELECT exercise_id, name, reps, weight, unit, date
                FROM exercises
                WHERE reps = $1
                ORDER BY created_at
                LIMIT NULLIF($2, 0)
                "#,
            )
            .bind(reps)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, ExerciseRow>(
                r#"
                SELECT exercise_id, name, reps, weight, unit, date
                FROM exercises
                ORDER BY created_at
                LIMIT NULLIF($1, 0)
                "#,
            )
            .bind(limit)
            .fetch_all(&self.pool)
            .await?
        };

        rows.into_iter().map(|r| r.into_exercise()).collect()
    }

    async fn find_by_id(&self, id: ExerciseId) -> ExerciseResult<Option<Exercise>> {
        let row = sqlx::query_as::<_, ExerciseRow>(
            r#"
            SELECT exercise_id, name, reps, weight, unit, date
            FROM exercises
            WHERE exercise_id = $1
            "#,
        )
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_exercise()).transpose()
    }

    async fn replace(
        &self,
        id: ExerciseId,
        draft: &ExerciseDraft,
    ) -> ExerciseResult<Option<Exercise>> {
        let row = sqlx::query_as::<_, ExerciseRow>(
            r#"
            UPDATE exercises
            SET name = $2, reps = $3, weight = $4, unit = $5, date = $6
            WHERE exercise_id = $1
            RETURNING exercise_id, name, reps, weight, unit, date
            "#,
        )
        .bind(id.into_uuid())
        .bind(draft.name.as_str())
        .bind(draft.reps)
        .bind(draft.weight)
        .bind(draft.unit.as_str())
        .bind(draft.date)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => {
                tracing::info!(exercise_id = %id, "Exercise replaced");
                Ok(Some(r.into_exercise()?))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: ExerciseId) -> ExerciseResult<u64> {
        let deleted = sqlx::query("DELETE FROM exercises WHERE exercise_id = $1")
            .bind(id.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted > 0 {
            tracing::info!(exercise_id = %id, "Exercise removed");
        }

        Ok(deleted)
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ExerciseRow {
    exercise_id: Uuid,
    name: String,
    reps: i32,
    weight: f64,
    unit: String,
    date: chrono::NaiveDate,
}

impl ExerciseRow {
    fn into_exercise(self) -> ExerciseResult<Exercise> {
        // The schema enforces both constraints; a failure here means a
        // corrupt row, not bad client input.
        let name = ExerciseName::new(&self.name)
            .map_err(|e| ExerciseError::Internal(format!("corrupt name column: {e}")))?;
        let unit: Unit = self
            .unit
            .parse()
            .map_err(|e| ExerciseError::Internal(format!("corrupt unit column: {e}")))?;

        Ok(Exercise {
            id: ExerciseId::from_uuid(self.exercise_id),
            name,
            reps: self.reps,
            weight: self.weight,
            unit,
            date: self.date,
        })
    }
}
