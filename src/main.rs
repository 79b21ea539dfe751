use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rutina::config::Config;
use rutina::handlers::{clients, dashboard, exports, routines};
use rutina::repositories::{ClientRepository, RoutineRepository};
use rutina::{routes, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rutina=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Create repositories; all state is in-memory and dies with the process
    let client_repo = ClientRepository::new();
    let routine_repo = RoutineRepository::new();

    if config.seed_demo {
        seed::load_demo_data(&client_repo, &routine_repo).await;
    }

    // Create handler states
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

    // Build router
    let app = routes::create_router(
        clients_state,
        dashboard_state,
        routines_state,
        exports_state,
    );

    // Start server
    let addr = config.server_addr();
    tracing::info!("Starting server at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
