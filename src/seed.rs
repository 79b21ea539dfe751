//! Demo dataset for local runs. State is in-memory only, so an unseeded
//! server starts empty; `SEED_DEMO=1` loads a handful of clients and one
//! routine to poke at.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Client, CreateExerciseRow, CreateRoutine};
use crate::repositories::{ClientRepository, RoutineRepository};

pub async fn load_demo_data(client_repo: &ClientRepository, routine_repo: &RoutineRepository) {
    let clients = [
        ("Carlos Mendez", "carlos@email.com", "+34 600 123 456", "Pérdida de peso", Some((2024, 1, 15)), 12),
        ("Ana García", "ana@email.com", "+34 600 234 567", "Ganancia muscular", Some((2024, 1, 20)), 8),
        ("Miguel Torres", "miguel@email.com", "+34 600 345 678", "Fuerza y resistencia", Some((2024, 1, 18)), 15),
        ("Laura Rodríguez", "laura@email.com", "+34 600 456 789", "Rehabilitación", None, 6),
    ];

    let mut first_client_id = None;
    for (name, email, phone, goals, last, total) in clients {
        let client = Client {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            goals: goals.to_string(),
            last_routine: last.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            total_routines: total,
        };
        first_client_id.get_or_insert_with(|| client.id.clone());
        client_repo.insert(client).await;
    }

    let routine = routine_repo
        .create(CreateRoutine {
            title: "Nueva Rutina".to_string(),
            description: String::new(),
            client_id: first_client_id,
        })
        .await;

    let rows = [
        ("Press banca", "4", "8-10", "80kg", "90s", "Control de la bajada"),
        ("Sentadillas", "3", "12-15", "100kg", "2min", "Profundidad completa"),
        ("Peso muerto", "3", "6-8", "120kg", "3min", "Activar core"),
    ];
    for (name, sets, reps, weight, rest, notes) in rows {
        let payload = CreateExerciseRow {
            order: None,
            exercise_name: name.to_string(),
            sets: sets.to_string(),
            reps: reps.to_string(),
            weight: weight.to_string(),
            rest_time: rest.to_string(),
            notes: notes.to_string(),
            media_ref: None,
        };
        if let Err(e) = routine_repo.add_row(&routine.id, payload).await {
            tracing::warn!("Failed to seed routine row: {}", e);
        }
    }

    tracing::info!("Loaded demo data: 4 clients, 1 routine");
}
