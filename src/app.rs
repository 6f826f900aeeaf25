use player_label::prelude::*;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

fn sample_white() -> Player {
    let mut account = Account::new("alice")
        .with_title("GM")
        .with_perf(PerfKey::Blitz, 2400);
    account.patron = true;
    account.online = true;

    let mut player = Player::new(Color::White);
    player.rating = Some(2400);
    player.rating_diff = Some(7);
    player.on_game = true;
    player.user = Some(account);
    player
}

fn sample_black() -> Player {
    let mut player = Player::new(Color::Black);
    player.ai = Some(5);
    player
}

fn sample_relay() -> RelayNames {
    let mut white = RelayPlayer::new("Carlsen, Magnus");
    white.title = Some("GM".to_string());
    white.rating = Some(2850);

    let mut black = RelayPlayer::new("Caruana, Fabiano");
    black.title = Some("GM".to_string());
    black.rating = Some(2800);

    RelayNames { white, black }
}

#[function_component(App)]
pub fn app() -> Html {
    let variant = use_state(|| VariantKey::Standard);
    let first_seconds = use_state(|| false);
    let relay = use_state(|| false);

    let ctx = {
        let mut ctx = RenderContext::new(*variant, PerfKey::Blitz);
        ctx.playing = true;
        ctx.first_seconds = *first_seconds;
        if *relay {
            ctx.relay = Some(sample_relay());
        }
        ctx
    };

    let white = sample_white();
    let black = sample_black();

    let on_variant_change = {
        let variant = variant.clone();
        move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            match value.parse::<VariantKey>() {
                Ok(key) => variant.set(key),
                Err(err) => log::warn!("variant select: {}", err),
            }
        }
    };

    let on_first_seconds_change = {
        let first_seconds = first_seconds.clone();
        move |e: Event| {
            let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
            log::debug!("first seconds: {}", checked);
            first_seconds.set(checked);
        }
    };

    let on_relay_change = {
        let relay = relay.clone();
        move |e: Event| {
            let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
            log::debug!("relay mode: {}", checked);
            relay.set(checked);
        }
    };

    let on_game_icon = html! {
        <i class="fa-solid fa-circle player-label__icon"></i>
    };

    html! {
        <div class="player-label-demo">
            <div class="player-label-demo__controls">
                <select onchange={on_variant_change}>
                    <option value="standard" selected={*variant == VariantKey::Standard}>
                        {"Standard"}
                    </option>
                    <option value="crazyhouse" selected={*variant == VariantKey::Crazyhouse}>
                        {"Crazyhouse"}
                    </option>
                </select>
                <label>
                    <input
                        type="checkbox"
                        checked={*first_seconds}
                        onchange={on_first_seconds_change}
                    />
                    {"First seconds"}
                </label>
                <label>
                    <input type="checkbox" checked={*relay} onchange={on_relay_change} />
                    {"Relay"}
                </label>
            </div>
            <div class="player-label-demo__players">
                <PlayerLabelComp
                    ctx={ctx.clone()}
                    player={white.clone()}
                    class={classes!("player-label-demo__white")}
                    on_game_icon={on_game_icon.clone()}
                />
                <PlayerLabelComp
                    ctx={ctx.clone()}
                    player={black.clone()}
                    class={classes!("player-label-demo__black")}
                    {on_game_icon}
                />
            </div>
            <ul class="player-label-demo__text">
                <li>{player_text(&ctx, &white)}</li>
                <li>{player_text(&ctx, &black)}</li>
            </ul>
        </div>
    }
}
