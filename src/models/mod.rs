pub mod client;
pub mod routine;

pub use client::{Client, CreateClient};
pub use routine::{CreateExerciseRow, CreateRoutine, ExerciseRow, Routine, UpdateExerciseRow, UpdateRoutine};
