use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key: {0}")]
pub struct ParseKeyError(pub String);

/// Performance category an account rating is tracked under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PerfKey {
    UltraBullet,
    Bullet,
    Blitz,
    Rapid,
    Classical,
    Correspondence,
    Chess960,
    KingOfTheHill,
    ThreeCheck,
    Antichess,
    Atomic,
    Horde,
    RacingKings,
    Crazyhouse,
}

impl PerfKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerfKey::UltraBullet => "ultraBullet",
            PerfKey::Bullet => "bullet",
            PerfKey::Blitz => "blitz",
            PerfKey::Rapid => "rapid",
            PerfKey::Classical => "classical",
            PerfKey::Correspondence => "correspondence",
            PerfKey::Chess960 => "chess960",
            PerfKey::KingOfTheHill => "kingOfTheHill",
            PerfKey::ThreeCheck => "threeCheck",
            PerfKey::Antichess => "antichess",
            PerfKey::Atomic => "atomic",
            PerfKey::Horde => "horde",
            PerfKey::RacingKings => "racingKings",
            PerfKey::Crazyhouse => "crazyhouse",
        }
    }
}

impl fmt::Display for PerfKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PerfKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ultraBullet" => Ok(PerfKey::UltraBullet),
            "bullet" => Ok(PerfKey::Bullet),
            "blitz" => Ok(PerfKey::Blitz),
            "rapid" => Ok(PerfKey::Rapid),
            "classical" => Ok(PerfKey::Classical),
            "correspondence" => Ok(PerfKey::Correspondence),
            "chess960" => Ok(PerfKey::Chess960),
            "kingOfTheHill" => Ok(PerfKey::KingOfTheHill),
            "threeCheck" => Ok(PerfKey::ThreeCheck),
            "antichess" => Ok(PerfKey::Antichess),
            "atomic" => Ok(PerfKey::Atomic),
            "horde" => Ok(PerfKey::Horde),
            "racingKings" => Ok(PerfKey::RacingKings),
            "crazyhouse" => Ok(PerfKey::Crazyhouse),
            other => Err(ParseKeyError(other.to_string())),
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariantKey {
    #[default]
    Standard,
    Chess960,
    KingOfTheHill,
    ThreeCheck,
    Antichess,
    Atomic,
    Horde,
    RacingKings,
    Crazyhouse,
    FromPosition,
}

impl VariantKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantKey::Standard => "standard",
            VariantKey::Chess960 => "chess960",
            VariantKey::KingOfTheHill => "kingOfTheHill",
            VariantKey::ThreeCheck => "threeCheck",
            VariantKey::Antichess => "antichess",
            VariantKey::Atomic => "atomic",
            VariantKey::Horde => "horde",
            VariantKey::RacingKings => "racingKings",
            VariantKey::Crazyhouse => "crazyhouse",
            VariantKey::FromPosition => "fromPosition",
        }
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(VariantKey::Standard),
            "chess960" => Ok(VariantKey::Chess960),
            "kingOfTheHill" => Ok(VariantKey::KingOfTheHill),
            "threeCheck" => Ok(VariantKey::ThreeCheck),
            "antichess" => Ok(VariantKey::Antichess),
            "atomic" => Ok(VariantKey::Atomic),
            "horde" => Ok(VariantKey::Horde),
            "racingKings" => Ok(VariantKey::RacingKings),
            "crazyhouse" => Ok(VariantKey::Crazyhouse),
            "fromPosition" => Ok(VariantKey::FromPosition),
            other => Err(ParseKeyError(other.to_string())),
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameSource {
    #[default]
    Lobby,
    Friend,
    Ai,
    Position,
    Import,
    Tournament,
    Simul,
    Relay,
}
