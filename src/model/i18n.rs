use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKey {
    AiNameLevelAiLevel,
    ThisPlayerUsesChessComputerAssistance,
}

/// Message-key based localization with English defaults. Hosts install
/// their own patterns through `with_message`; `%s` placeholders are
/// substituted positionally.
#[derive(Debug, Clone, PartialEq)]
pub struct Translator {
    messages: HashMap<MessageKey, String>,
}

impl Translator {
    pub fn new() -> Self {
        let mut messages = HashMap::new();
        messages.insert(MessageKey::AiNameLevelAiLevel, "%s, level %s".to_string());
        messages.insert(
            MessageKey::ThisPlayerUsesChessComputerAssistance,
            "This player uses chess computer assistance".to_string(),
        );
        Translator { messages }
    }

    pub fn with_message(mut self, key: MessageKey, pattern: &str) -> Self {
        self.messages.insert(key, pattern.to_string());
        self
    }

    pub fn trans(&self, key: MessageKey) -> String {
        self.trans_args(key, &[])
    }

    pub fn trans_args(&self, key: MessageKey, args: &[&str]) -> String {
        let mut out = self.messages.get(&key).cloned().unwrap_or_default();
        for arg in args {
            out = out.replacen("%s", arg, 1);
        }
        out
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}
