use crate::model::{MessageKey, Player, RenderContext, VariantKey};

pub const ANONYMOUS: &str = "Anonymous";

/// Engine display name for a built-in opponent, localized with its level.
pub fn ai_name(ctx: &RenderContext, player: &Player) -> String {
    let name = match ctx.variant {
        VariantKey::Crazyhouse => "Sunsetter",
        _ => "Stockfish",
    };
    let level = player.ai.unwrap_or(1);
    ctx.translator
        .trans_args(MessageKey::AiNameLevelAiLevel, &[name, &level.to_string()])
}

/// Plain-text label for contexts where markup is unavailable, such as
/// move lists and notifications.
pub fn player_text(ctx: &RenderContext, player: &Player) -> String {
    if let Some(user) = &player.user {
        let name = user.full_name();
        match player.effective_rating(ctx.perf) {
            Some(rating) if player.provisional => format!("{} ({}?)", name, rating),
            Some(rating) => format!("{} ({})", name, rating),
            None => name,
        }
    } else if player.ai.is_some() {
        ai_name(ctx, player)
    } else {
        ANONYMOUS.to_string()
    }
}
