use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub goals: String,
    pub last_routine: Option<NaiveDate>,
    pub total_routines: u32,
}

#[derive(Debug, Deserialize)]
pub struct CreateClient {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub goals: String,
    #[serde(default)]
    pub last_routine: Option<NaiveDate>,
}
