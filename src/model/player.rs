use crate::model::{Account, PerfKey};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub color: Color,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rating: Option<u32>,
    #[serde(default)]
    pub rating_diff: Option<i32>,
    #[serde(default)]
    pub provisional: bool,
    #[serde(default)]
    pub engine: bool,
    #[serde(default)]
    pub on_game: bool,
    #[serde(default)]
    pub ai: Option<u8>,
    #[serde(default)]
    pub user: Option<Account>,
}

impl Player {
    pub fn new(color: Color) -> Self {
        Player {
            color,
            name: None,
            rating: None,
            rating_diff: None,
            provisional: false,
            engine: false,
            on_game: false,
            ai: None,
            user: None,
        }
    }

    /// Game rating wins over the account's per-category rating.
    pub fn effective_rating(&self, perf: PerfKey) -> Option<u32> {
        self.rating
            .or_else(|| self.user.as_ref().and_then(|user| user.perf_rating(perf)))
    }

    // "Just reconnecting" as opposed to "genuinely left": the account is
    // online but not yet back on the game, within the opening seconds.
    pub fn connecting(&self, first_seconds: bool) -> bool {
        !self.on_game && first_seconds && self.user.as_ref().is_some_and(|user| user.online)
    }
}
