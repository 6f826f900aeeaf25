use crate::model::{GameSource, PerfKey, RelayNames, Translator, VariantKey};

/// Per-game rendering context, owned by the surrounding game-state model.
/// `playing` carries the session's own "is this player still playing"
/// answer; `relay` switches both colors to broadcast stand-in names.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    pub variant: VariantKey,
    pub perf: PerfKey,
    pub source: GameSource,
    pub first_seconds: bool,
    pub playing: bool,
    pub relay: Option<RelayNames>,
    pub translator: Translator,
}

impl RenderContext {
    pub fn new(variant: VariantKey, perf: PerfKey) -> Self {
        RenderContext {
            variant,
            perf,
            source: GameSource::default(),
            first_seconds: false,
            playing: false,
            relay: None,
            translator: Translator::new(),
        }
    }
}
