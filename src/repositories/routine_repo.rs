use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{
    CreateExerciseRow, CreateRoutine, ExerciseRow, Routine, UpdateExerciseRow, UpdateRoutine,
};

/// In-memory routine store. Row lists keep insertion order; add and duplicate
/// append at the end, delete does not renumber the remaining rows.
#[derive(Clone, Default)]
pub struct RoutineRepository {
    routines: Arc<RwLock<Vec<Routine>>>,
}

impl RoutineRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, payload: CreateRoutine) -> Routine {
        let routine = Routine {
            id: Uuid::new_v4().to_string(),
            title: payload.title,
            description: payload.description,
            client_id: payload.client_id,
            rows: Vec::new(),
        };
        self.routines.write().await.push(routine.clone());
        routine
    }

    pub async fn find_all(&self) -> Vec<Routine> {
        self.routines.read().await.clone()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Routine> {
        self.routines.read().await.iter().find(|r| r.id == id).cloned()
    }

    pub async fn update_info(&self, id: &str, payload: UpdateRoutine) -> Result<Routine> {
        let mut routines = self.routines.write().await;
        let routine = routines
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound("Routine not found".to_string()))?;

        if let Some(title) = payload.title {
            routine.title = title;
        }
        if let Some(description) = payload.description {
            routine.description = description;
        }

        Ok(routine.clone())
    }

    /// Appends a new row. `order` defaults to the new list length, matching
    /// how the grid numbers fresh rows; it is not kept unique afterwards.
    pub async fn add_row(&self, routine_id: &str, payload: CreateExerciseRow) -> Result<ExerciseRow> {
        let mut routines = self.routines.write().await;
        let routine = routines
            .iter_mut()
            .find(|r| r.id == routine_id)
            .ok_or_else(|| AppError::NotFound("Routine not found".to_string()))?;

        let order = payload.order.unwrap_or(routine.rows.len() as u32 + 1);
        let row = ExerciseRow {
            id: Uuid::new_v4().to_string(),
            order,
            exercise_name: payload.exercise_name,
            sets: payload.sets,
            reps: payload.reps,
            weight: payload.weight,
            rest_time: payload.rest_time,
            notes: payload.notes,
            media_ref: payload.media_ref,
        };
        routine.rows.push(row.clone());
        Ok(row)
    }

    pub async fn update_row(
        &self,
        routine_id: &str,
        row_id: &str,
        payload: UpdateExerciseRow,
    ) -> Result<ExerciseRow> {
        let mut routines = self.routines.write().await;
        let routine = routines
            .iter_mut()
            .find(|r| r.id == routine_id)
            .ok_or_else(|| AppError::NotFound("Routine not found".to_string()))?;
        let row = routine
            .rows
            .iter_mut()
            .find(|row| row.id == row_id)
            .ok_or_else(|| AppError::NotFound("Exercise row not found".to_string()))?;

        if let Some(order) = payload.order {
            row.order = order;
        }
        if let Some(exercise_name) = payload.exercise_name {
            row.exercise_name = exercise_name;
        }
        if let Some(sets) = payload.sets {
            row.sets = sets;
        }
        if let Some(reps) = payload.reps {
            row.reps = reps;
        }
        if let Some(weight) = payload.weight {
            row.weight = weight;
        }
        if let Some(rest_time) = payload.rest_time {
            row.rest_time = rest_time;
        }
        if let Some(notes) = payload.notes {
            row.notes = notes;
        }
        if let Some(media_ref) = payload.media_ref {
            row.media_ref = Some(media_ref);
        }

        Ok(row.clone())
    }

    /// Removes one row; the relative order of the remaining rows is untouched.
    pub async fn delete_row(&self, routine_id: &str, row_id: &str) -> Result<()> {
        let mut routines = self.routines.write().await;
        let routine = routines
            .iter_mut()
            .find(|r| r.id == routine_id)
            .ok_or_else(|| AppError::NotFound("Routine not found".to_string()))?;

        let before = routine.rows.len();
        routine.rows.retain(|row| row.id != row_id);
        if routine.rows.len() == before {
            return Err(AppError::NotFound("Exercise row not found".to_string()));
        }
        Ok(())
    }

    /// Copies a row to the end of the list with a fresh id and an `order` of
    /// the new list length.
    pub async fn duplicate_row(&self, routine_id: &str, row_id: &str) -> Result<ExerciseRow> {
        let mut routines = self.routines.write().await;
        let routine = routines
            .iter_mut()
            .find(|r| r.id == routine_id)
            .ok_or_else(|| AppError::NotFound("Routine not found".to_string()))?;
        let source = routine
            .rows
            .iter()
            .find(|row| row.id == row_id)
            .ok_or_else(|| AppError::NotFound("Exercise row not found".to_string()))?;

        let copy = ExerciseRow {
            id: Uuid::new_v4().to_string(),
            order: routine.rows.len() as u32 + 1,
            ..source.clone()
        };
        routine.rows.push(copy.clone());
        Ok(copy)
    }
}
