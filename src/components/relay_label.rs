use crate::model::RelayPlayer;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RelayLabelProps {
    pub player: RelayPlayer,
    #[prop_or_default]
    pub class: Classes,
}

/// Display-only label for a broadcast stand-in: no link, no online state,
/// no rating change.
pub fn relay_label(player: &RelayPlayer, class: &Classes) -> Html {
    html! {
        <span class={classes!("player-label", "player-label--relay", class.clone())}>
            <i class="fa-solid fa-tower-broadcast player-label__icon"></i>
            {player.full_name()}
            if let Some(rating) = player.rating {
                <span class="player-label__rating">{format!(" ({})", rating)}</span>
            }
        </span>
    }
}

#[function_component(RelayLabelComp)]
pub fn relay_label_comp(props: &RelayLabelProps) -> Html {
    relay_label(&props.player, &props.class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_changes_the_fragment() {
        let mut with_rating = RelayPlayer::new("Carlsen, Magnus");
        with_rating.rating = Some(2850);
        let without_rating = RelayPlayer::new("Carlsen, Magnus");

        assert_ne!(
            relay_label(&with_rating, &Classes::new()),
            relay_label(&without_rating, &Classes::new())
        );
    }

    #[test]
    fn same_player_renders_identically() {
        let mut player = RelayPlayer::new("Caruana, Fabiano");
        player.title = Some("GM".to_string());

        assert_eq!(
            relay_label(&player, &Classes::new()),
            relay_label(&player.clone(), &Classes::new())
        );
    }
}
