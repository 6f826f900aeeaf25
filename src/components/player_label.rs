use crate::components::{rating_diff, relay_label};
use crate::model::{GameSource, MessageKey, Player, RenderContext};
use crate::text::ANONYMOUS;
use yew::prelude::*;

// Names longer than this get the --long modifier so stylesheets can
// shrink or truncate them.
const LONG_NAME_CHARS: usize = 20;

#[derive(Properties, PartialEq, Clone)]
pub struct PlayerLabelProps {
    pub ctx: RenderContext,
    pub player: Player,
    #[prop_or_default]
    pub class: Classes,
    /// Connection-state fragment appended after an anonymous name,
    /// supplied by the host view.
    #[prop_or_default]
    pub on_game_icon: Html,
}

fn link_classes(full_name: &str, on_game: bool, connecting: bool, extra: &Classes) -> Classes {
    classes!(
        "player-label",
        if on_game {
            "player-label--online"
        } else {
            "player-label--offline"
        },
        extra.clone(),
        (full_name.chars().count() > LONG_NAME_CHARS).then_some("player-label--long"),
        connecting.then_some("player-label--connecting"),
    )
}

// connecting beats on_game for the tooltip
fn status_title(connecting: bool, on_game: bool) -> &'static str {
    if connecting {
        "Connecting to the game"
    } else if on_game {
        "Joined the game"
    } else {
        "Left the game"
    }
}

/// Markup label for one side of the game: a profile link with status,
/// name, rating, rating change and engine flag, or the relay/anonymous
/// fallbacks.
pub fn player_label(
    ctx: &RenderContext,
    player: &Player,
    class: &Classes,
    on_game_icon: &Html,
) -> Html {
    if let Some(relay) = &ctx.relay {
        return relay_label(relay.get(player.color), class);
    }

    let user = match &player.user {
        Some(user) => user,
        None => {
            let name = player.name.clone().unwrap_or_else(|| ANONYMOUS.to_string());
            return html! {
                <span class={classes!("player-label", "player-label--anonymous", class.clone())}>
                    {name}
                    if ctx.source != GameSource::Relay {
                        {on_game_icon.clone()}
                    }
                </span>
            };
        }
    };

    let full_name = user.full_name();
    let rating = player.effective_rating(ctx.perf);
    let connecting = player.connecting(ctx.first_seconds);
    let class = link_classes(&full_name, player.on_game, connecting, class);

    html! {
        <a
            {class}
            href={format!("/@/{}", user.username)}
            target={if ctx.playing { "_blank" } else { "_self" }}
        >
            <i
                class={classes!(
                    "player-label__status",
                    user.patron.then_some("player-label__status--patron"),
                )}
                title={status_title(connecting, player.on_game)}
            ></i>
            <span class="player-label__name">{full_name}</span>
            if let Some(rating) = rating {
                <span class="player-label__rating">
                    {if player.provisional {
                        format!("{}?", rating)
                    } else {
                        rating.to_string()
                    }}
                </span>
            }
            {rating_diff(player.rating_diff)}
            if player.engine {
                <i
                    class="fa-solid fa-robot player-label__engine"
                    title={ctx.translator.trans(MessageKey::ThisPlayerUsesChessComputerAssistance)}
                ></i>
            }
        </a>
    }
}

#[function_component(PlayerLabelComp)]
pub fn player_label_comp(props: &PlayerLabelProps) -> Html {
    player_label(&props.ctx, &props.player, &props.class, &props.on_game_icon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Account, Color, PerfKey, RelayNames, RelayPlayer, VariantKey};

    fn ctx() -> RenderContext {
        RenderContext::new(VariantKey::Standard, PerfKey::Blitz)
    }

    fn relay_ctx() -> RenderContext {
        let mut ctx = ctx();
        ctx.relay = Some(RelayNames {
            white: RelayPlayer::new("Carlsen, Magnus"),
            black: RelayPlayer::new("Caruana, Fabiano"),
        });
        ctx
    }

    #[test]
    fn long_modifier_above_twenty_chars() {
        let classes = link_classes(&"a".repeat(21), true, false, &Classes::new());

        assert!(classes.contains("player-label--long"));
    }

    #[test]
    fn no_long_modifier_at_exactly_twenty_chars() {
        let classes = link_classes(&"a".repeat(20), true, false, &Classes::new());

        assert!(!classes.contains("player-label--long"));
    }

    #[test]
    fn online_and_offline_modifiers() {
        let online = link_classes("alice", true, false, &Classes::new());
        let offline = link_classes("alice", false, false, &Classes::new());

        assert!(online.contains("player-label--online"));
        assert!(!online.contains("player-label--offline"));
        assert!(offline.contains("player-label--offline"));
        assert!(!offline.contains("player-label--online"));
    }

    #[test]
    fn connecting_modifier_follows_heuristic() {
        let mut player = Player::new(Color::White);
        let mut account = Account::new("alice");
        account.online = true;
        player.user = Some(account);

        let mut ctx = ctx();
        ctx.first_seconds = true;
        let connecting = player.connecting(ctx.first_seconds);
        let classes = link_classes("alice", player.on_game, connecting, &Classes::new());

        assert!(classes.contains("player-label--connecting"));

        ctx.first_seconds = false;
        let connecting = player.connecting(ctx.first_seconds);
        let classes = link_classes("alice", player.on_game, connecting, &Classes::new());

        assert!(!classes.contains("player-label--connecting"));
    }

    #[test]
    fn extra_class_is_kept() {
        let classes = link_classes("alice", true, false, &classes!("margin-left"));

        assert!(classes.contains("margin-left"));
    }

    #[test]
    fn status_title_precedence() {
        assert_eq!(status_title(true, false), "Connecting to the game");
        assert_eq!(status_title(true, true), "Connecting to the game");
        assert_eq!(status_title(false, true), "Joined the game");
        assert_eq!(status_title(false, false), "Left the game");
    }

    #[test]
    fn relay_mode_ignores_account() {
        let mut player = Player::new(Color::White);
        player.user = Some(Account::new("alice").with_title("GM"));
        let ctx = relay_ctx();

        assert_eq!(
            player_label(&ctx, &player, &Classes::new(), &Html::default()),
            relay_label(&RelayPlayer::new("Carlsen, Magnus"), &Classes::new())
        );
    }

    #[test]
    fn relay_mode_uses_the_player_color_entry() {
        let mut white = Player::new(Color::White);
        white.user = Some(Account::new("alice"));
        let black = Player::new(Color::Black);
        let ctx = relay_ctx();

        assert_eq!(
            player_label(&ctx, &black, &Classes::new(), &Html::default()),
            relay_label(&RelayPlayer::new("Caruana, Fabiano"), &Classes::new())
        );
        assert_ne!(
            player_label(&ctx, &white, &Classes::new(), &Html::default()),
            player_label(&ctx, &black, &Classes::new(), &Html::default())
        );
    }

    #[test]
    fn missing_name_falls_back_to_anonymous() {
        let unnamed = Player::new(Color::White);
        let mut named = Player::new(Color::White);
        named.name = Some(ANONYMOUS.to_string());
        let ctx = ctx();

        assert_eq!(
            player_label(&ctx, &unnamed, &Classes::new(), &Html::default()),
            player_label(&ctx, &named, &Classes::new(), &Html::default())
        );
    }

    #[test]
    fn relay_source_suppresses_on_game_icon() {
        let player = Player::new(Color::White);
        let icon = html! { <i class="line"></i> };

        let mut relay_source = ctx();
        relay_source.source = GameSource::Relay;

        // icon ignored entirely when the game came from a relay
        assert_eq!(
            player_label(&relay_source, &player, &Classes::new(), &icon),
            player_label(&relay_source, &player, &Classes::new(), &Html::default())
        );
        // and rendered otherwise
        assert_ne!(
            player_label(&ctx(), &player, &Classes::new(), &icon),
            player_label(&ctx(), &player, &Classes::new(), &Html::default())
        );
    }

    #[test]
    fn account_label_changes_with_playing_state() {
        let mut player = Player::new(Color::White);
        player.user = Some(Account::new("alice"));

        let mut playing = ctx();
        playing.playing = true;

        // target flips between _blank and _self
        assert_ne!(
            player_label(&playing, &player, &Classes::new(), &Html::default()),
            player_label(&ctx(), &player, &Classes::new(), &Html::default())
        );
    }

    #[test]
    fn engine_flag_changes_the_fragment() {
        let mut player = Player::new(Color::White);
        player.user = Some(Account::new("alice"));
        let mut flagged = player.clone();
        flagged.engine = true;

        assert_ne!(
            player_label(&ctx(), &flagged, &Classes::new(), &Html::default()),
            player_label(&ctx(), &player, &Classes::new(), &Html::default())
        );
    }
}
