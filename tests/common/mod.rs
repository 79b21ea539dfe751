use axum::Router;

use rutina::handlers::{clients, dashboard, exports, routines};
use rutina::models::{Client, CreateClient, CreateExerciseRow, CreateRoutine, ExerciseRow, Routine};
use rutina::repositories::{ClientRepository, RoutineRepository};

pub struct TestApp {
    pub router: Router,
    pub client_repo: ClientRepository,
    pub routine_repo: RoutineRepository,
}

pub fn create_test_app() -> TestApp {
    let client_repo = ClientRepository::new();
    let routine_repo = RoutineRepository::new();

    let clients_state = clients::ClientsState {
        client_repo: client_repo.clone(),
    };
    let dashboard_state = dashboard::DashboardState {
        client_repo: client_repo.clone(),
    };
    let routines_state = routines::RoutinesState {
        routine_repo: routine_repo.clone(),
    };
    let exports_state = exports::ExportsState {
        routine_repo: routine_repo.clone(),
    };

    let router = rutina::routes::create_router(
        clients_state,
        dashboard_state,
        routines_state,
        exports_state,
    );

    TestApp {
        router,
        client_repo,
        routine_repo,
    }
}

// Test data creation helpers

#[allow(dead_code)]
pub async fn create_test_client(repo: &ClientRepository, name: &str, email: &str) -> Client {
    repo.create(CreateClient {
        name: name.to_string(),
        email: email.to_string(),
        phone: String::new(),
        goals: String::new(),
        last_routine: None,
    })
    .await
}

#[allow(dead_code)]
pub fn client_with_history(
    name: &str,
    email: &str,
    total_routines: u32,
    last_routine: Option<chrono::NaiveDate>,
) -> Client {
    Client {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: String::new(),
        goals: String::new(),
        last_routine,
        total_routines,
    }
}

#[allow(dead_code)]
pub async fn create_test_routine(repo: &RoutineRepository, title: &str) -> Routine {
    repo.create(CreateRoutine {
        title: title.to_string(),
        description: String::new(),
        client_id: None,
    })
    .await
}

#[allow(dead_code)]
pub async fn add_test_row(
    repo: &RoutineRepository,
    routine_id: &str,
    name: &str,
    notes: &str,
) -> ExerciseRow {
    repo.add_row(
        routine_id,
        CreateExerciseRow {
            order: None,
            exercise_name: name.to_string(),
            sets: "4".to_string(),
            reps: "8-10".to_string(),
            weight: "80kg".to_string(),
            rest_time: "90s".to_string(),
            notes: notes.to_string(),
            media_ref: None,
        },
    )
    .await
    .unwrap()
}
