use crate::model::PerfKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perf {
    pub rating: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub patron: bool,
    #[serde(default)]
    pub perfs: HashMap<PerfKey, Perf>,
    #[serde(default)]
    pub online: bool,
}

impl Account {
    pub fn new(username: &str) -> Self {
        Account {
            id: Uuid::new_v4(),
            username: username.to_string(),
            title: None,
            patron: false,
            perfs: HashMap::new(),
            online: false,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_perf(mut self, key: PerfKey, rating: u32) -> Self {
        self.perfs.insert(key, Perf { rating });
        self
    }

    /// Honorific plus username, e.g. "GM alice".
    pub fn full_name(&self) -> String {
        match &self.title {
            Some(title) => format!("{} {}", title, self.username),
            None => self.username.clone(),
        }
    }

    pub fn perf_rating(&self, key: PerfKey) -> Option<u32> {
        self.perfs.get(&key).map(|perf| perf.rating)
    }
}
