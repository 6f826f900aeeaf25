use crate::model::Color;
use serde::{Deserialize, Serialize};

/// Broadcast stand-in for one side, not a live account reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayPlayer {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub rating: Option<u32>,
}

impl RelayPlayer {
    pub fn new(name: &str) -> Self {
        RelayPlayer {
            name: name.to_string(),
            title: None,
            rating: None,
        }
    }

    pub fn full_name(&self) -> String {
        match &self.title {
            Some(title) => format!("{} {}", title, self.name),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayNames {
    pub white: RelayPlayer,
    pub black: RelayPlayer,
}

impl RelayNames {
    pub fn get(&self, color: Color) -> &RelayPlayer {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}
