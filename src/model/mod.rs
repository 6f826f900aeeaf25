mod account;
mod context;
mod i18n;
mod keys;
mod player;
mod relay;

pub use account::{Account, Perf};
pub use context::RenderContext;
pub use i18n::{MessageKey, Translator};
pub use keys::{GameSource, ParseKeyError, PerfKey, VariantKey};
pub use player::{Color, Player};
pub use relay::{RelayNames, RelayPlayer};
