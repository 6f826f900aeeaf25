mod player_label;
mod rating_diff;
mod relay_label;

pub use player_label::{player_label, PlayerLabelComp, PlayerLabelProps};
pub use rating_diff::{rating_diff, RatingDiffComp, RatingDiffProps};
pub use relay_label::{relay_label, RelayLabelComp, RelayLabelProps};
