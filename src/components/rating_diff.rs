use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RatingDiffProps {
    #[prop_or_default]
    pub diff: Option<i32>,
}

fn diff_parts(diff: i32) -> (&'static str, String) {
    if diff == 0 {
        ("player-label__diff--null", "±0".to_string())
    } else if diff > 0 {
        ("player-label__diff--up", format!("+{}", diff))
    } else {
        // the value's own minus sign supplies the "-"
        ("player-label__diff--down", diff.to_string())
    }
}

/// Rating change since the previous game; nothing when unrated.
pub fn rating_diff(diff: Option<i32>) -> Html {
    match diff {
        Some(diff) => {
            let (modifier, text) = diff_parts(diff);
            html! {
                <span class={classes!("player-label__diff", modifier)}>{text}</span>
            }
        }
        None => Html::default(),
    }
}

#[function_component(RatingDiffComp)]
pub fn rating_diff_comp(props: &RatingDiffProps) -> Html {
    rating_diff(props.diff)
}
