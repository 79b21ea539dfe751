use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Client, CreateClient};

/// In-memory client store. Insertion order is preserved; ids are opaque and
/// stable for the lifetime of the process.
#[derive(Clone, Default)]
pub struct ClientRepository {
    clients: Arc<RwLock<Vec<Client>>>,
}

impl ClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find_all(&self) -> Vec<Client> {
        self.clients.read().await.clone()
    }

    /// Case-insensitive substring match over name and email.
    pub async fn search(&self, term: &str) -> Vec<Client> {
        let term = term.to_lowercase();
        self.clients
            .read()
            .await
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&term) || c.email.to_lowercase().contains(&term)
            })
            .cloned()
            .collect()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Client> {
        self.clients.read().await.iter().find(|c| c.id == id).cloned()
    }

    pub async fn create(&self, payload: CreateClient) -> Client {
        let client = Client {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            goals: payload.goals,
            last_routine: payload.last_routine,
            total_routines: 0,
        };
        self.clients.write().await.push(client.clone());
        client
    }

    /// Used by the demo seed and tests to load pre-built records.
    pub async fn insert(&self, client: Client) {
        self.clients.write().await.push(client);
    }

    pub async fn count(&self) -> usize {
        self.clients.read().await.len()
    }

    pub async fn total_routines_sent(&self) -> u32 {
        self.clients
            .read()
            .await
            .iter()
            .map(|c| c.total_routines)
            .sum()
    }

    /// Clients with at least one routine on record.
    pub async fn count_active_programs(&self) -> usize {
        self.clients
            .read()
            .await
            .iter()
            .filter(|c| c.last_routine.is_some())
            .count()
    }
}
