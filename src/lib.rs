#[cfg(feature = "yew")]
pub mod components;
pub mod model;
pub mod text;

pub mod prelude {
    #[cfg(feature = "yew")]
    pub use crate::components::*;
    pub use crate::model::Account;
    pub use crate::model::Color;
    pub use crate::model::GameSource;
    pub use crate::model::MessageKey;
    pub use crate::model::Perf;
    pub use crate::model::PerfKey;
    pub use crate::model::Player;
    pub use crate::model::RelayNames;
    pub use crate::model::RelayPlayer;
    pub use crate::model::RenderContext;
    pub use crate::model::Translator;
    pub use crate::model::VariantKey;
    pub use crate::text::{ai_name, player_text};
}
