use serde::{Deserialize, Serialize};

/// One line item of a routine. `id` identifies the row for edits and is never
/// exported; `order` is user-editable and independent of list position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseRow {
    pub id: String,
    pub order: u32,
    pub exercise_name: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
    pub rest_time: String,
    pub notes: String,
    pub media_ref: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Routine {
    pub id: String,
    pub title: String,
    pub description: String,
    pub client_id: Option<String>,
    pub rows: Vec<ExerciseRow>,
}

#[derive(Debug, Deserialize)]
pub struct CreateRoutine {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub client_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRoutine {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// New rows start empty; every field may be filled in later from the grid.
#[derive(Debug, Default, Deserialize)]
pub struct CreateExerciseRow {
    pub order: Option<u32>,
    #[serde(default)]
    pub exercise_name: String,
    #[serde(default)]
    pub sets: String,
    #[serde(default)]
    pub reps: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub rest_time: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub media_ref: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateExerciseRow {
    pub order: Option<u32>,
    pub exercise_name: Option<String>,
    pub sets: Option<String>,
    pub reps: Option<String>,
    pub weight: Option<String>,
    pub rest_time: Option<String>,
    pub notes: Option<String>,
    pub media_ref: Option<String>,
}
