// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which side of the match performed an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamSide {
    /// The home side.
    Home,
    /// The away side.
    Away,
}

impl TeamSide {
    /// Converts this side to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Away => "AWAY",
        }
    }

    /// Returns the opposing side.
    #[must_use]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }

    /// Parses a wire string into a `TeamSide`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownEnumValue` for any value outside the set.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "HOME" => Ok(Self::Home),
            "AWAY" => Ok(Self::Away),
            _ => Err(DomainError::UnknownEnumValue {
                field: "teamSide",
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for TeamSide {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for TeamSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tactical context of the possession an action belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttackType {
    /// A set attack against an organized defense.
    Positional,
    /// A fast break before the defense is set.
    FastBreak,
}

impl AttackType {
    /// Converts this attack type to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positional => "POSITIONAL",
            Self::FastBreak => "FAST_BREAK",
        }
    }

    /// Parses a wire string into an `AttackType`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownEnumValue` for any value outside the set.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "POSITIONAL" => Ok(Self::Positional),
            "FAST_BREAK" => Ok(Self::FastBreak),
            _ => Err(DomainError::UnknownEnumValue {
                field: "attackType",
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for AttackType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for AttackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the possession that produced an action started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionOrigin {
    /// Normal continuation of play after a change of possession.
    ContinuousPlay,
    /// The attacking team recovered its own shot directly.
    DirectRebound,
    /// The attacking team recovered its own shot after a scramble.
    IndirectRebound,
    /// A seven-meter penalty throw.
    SevenMeter,
}

impl ActionOrigin {
    /// Converts this origin to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ContinuousPlay => "CONTINUOUS_PLAY",
            Self::DirectRebound => "DIRECT_REBOUND",
            Self::IndirectRebound => "INDIRECT_REBOUND",
            Self::SevenMeter => "SEVEN_METER",
        }
    }

    /// Parses a wire string into an `ActionOrigin`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownEnumValue` for any value outside the set.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "CONTINUOUS_PLAY" => Ok(Self::ContinuousPlay),
            "DIRECT_REBOUND" => Ok(Self::DirectRebound),
            "INDIRECT_REBOUND" => Ok(Self::IndirectRebound),
            "SEVEN_METER" => Ok(Self::SevenMeter),
            _ => Err(DomainError::UnknownEnumValue {
                field: "actionOrigin",
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for ActionOrigin {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ActionOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The terminal event of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    /// The shot scored.
    Goal,
    /// The shot was stopped by the goalkeeper or a defender.
    ShotSaved,
    /// The shot missed the goal.
    ShotWide,
    /// Possession was lost without a shot.
    Turnover,
}

impl EventKind {
    /// Converts this event kind to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Goal => "GOAL",
            Self::ShotSaved => "SHOT_SAVED",
            Self::ShotWide => "SHOT_WIDE",
            Self::Turnover => "TURNOVER",
        }
    }

    /// Returns whether this event is a shot attempt (goal, saved, or wide).
    #[must_use]
    pub const fn is_shot(&self) -> bool {
        matches!(self, Self::Goal | Self::ShotSaved | Self::ShotWide)
    }

    /// Parses a wire string into an `EventKind`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownEnumValue` for any value outside the set.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "GOAL" => Ok(Self::Goal),
            "SHOT_SAVED" => Ok(Self::ShotSaved),
            "SHOT_WIDE" => Ok(Self::ShotWide),
            "TURNOVER" => Ok(Self::Turnover),
            _ => Err(DomainError::UnknownEnumValue {
                field: "eventKind",
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for EventKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tactical classification of how a shot was taken.
///
/// The first five values belong to positional attacks, the last four to
/// fast breaks. The registry enforces which subset is legal in context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinalizationDetail {
    /// A shot from the backcourt line.
    ExteriorShot,
    /// A shot by the pivot from the six-meter line.
    Pivot,
    /// A shot after breaking through the defense.
    Penetration,
    /// A shot from the wing.
    Wing,
    /// A seven-meter penalty throw.
    SevenMeter,
    /// A direct counter-goal by the goalkeeper or defense.
    CounterGoal,
    /// First wave of a fast break.
    FirstWave,
    /// Second wave of a fast break.
    SecondWave,
    /// Third wave of a fast break.
    ThirdWave,
}

impl FinalizationDetail {
    /// Converts this detail to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExteriorShot => "EXTERIOR_SHOT",
            Self::Pivot => "PIVOT",
            Self::Penetration => "PENETRATION",
            Self::Wing => "WING",
            Self::SevenMeter => "SEVEN_METER",
            Self::CounterGoal => "COUNTER_GOAL",
            Self::FirstWave => "FIRST_WAVE",
            Self::SecondWave => "SECOND_WAVE",
            Self::ThirdWave => "THIRD_WAVE",
        }
    }

    /// Returns whether this detail belongs to positional attacks.
    #[must_use]
    pub const fn is_positional(&self) -> bool {
        matches!(
            self,
            Self::ExteriorShot | Self::Pivot | Self::Penetration | Self::Wing | Self::SevenMeter
        )
    }

    /// Returns whether this detail belongs to fast breaks.
    #[must_use]
    pub const fn is_fast_break(&self) -> bool {
        !self.is_positional()
    }

    /// Parses a wire string into a `FinalizationDetail`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownEnumValue` for any value outside the set.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "EXTERIOR_SHOT" => Ok(Self::ExteriorShot),
            "PIVOT" => Ok(Self::Pivot),
            "PENETRATION" => Ok(Self::Penetration),
            "WING" => Ok(Self::Wing),
            "SEVEN_METER" => Ok(Self::SevenMeter),
            "COUNTER_GOAL" => Ok(Self::CounterGoal),
            "FIRST_WAVE" => Ok(Self::FirstWave),
            "SECOND_WAVE" => Ok(Self::SecondWave),
            "THIRD_WAVE" => Ok(Self::ThirdWave),
            _ => Err(DomainError::UnknownEnumValue {
                field: "finalizationDetail",
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for FinalizationDetail {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for FinalizationDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Court zone a shot was launched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LaunchZone {
    /// Left third of the court.
    Left,
    /// Central third of the court.
    Center,
    /// Right third of the court.
    Right,
}

impl LaunchZone {
    /// Converts this zone to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Center => "CENTER",
            Self::Right => "RIGHT",
        }
    }

    /// Parses a wire string into a `LaunchZone`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownEnumValue` for any value outside the set.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "LEFT" => Ok(Self::Left),
            "CENTER" => Ok(Self::Center),
            "RIGHT" => Ok(Self::Right),
            _ => Err(DomainError::UnknownEnumValue {
                field: "launchZone",
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for LaunchZone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for LaunchZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sub-classification of non-goal events.
///
/// Saves split into goalkeeper save vs. defender block; wide shots into
/// post vs. direct out; turnovers into eight rule-infraction sub-types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventDetail {
    /// The goalkeeper stopped the shot.
    GoalkeeperSave,
    /// A field defender blocked the shot.
    DefenderBlock,
    /// The shot hit the post and stayed in play.
    Post,
    /// The shot went directly out of bounds.
    DirectOut,
    /// Traveling violation.
    Steps,
    /// Double dribble violation.
    DoubleDribble,
    /// Offensive foul.
    OffensiveFoul,
    /// Passive play called by the referees.
    PassivePlay,
    /// Attacker stepped into the goal area.
    AreaInvasion,
    /// The defense stole the ball.
    Steal,
    /// The ball touched an attacker's foot.
    FootFault,
    /// The ball went out of bounds off the attack.
    BallOut,
}

impl EventDetail {
    /// Converts this detail to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoalkeeperSave => "GOALKEEPER_SAVE",
            Self::DefenderBlock => "DEFENDER_BLOCK",
            Self::Post => "POST",
            Self::DirectOut => "DIRECT_OUT",
            Self::Steps => "STEPS",
            Self::DoubleDribble => "DOUBLE_DRIBBLE",
            Self::OffensiveFoul => "OFFENSIVE_FOUL",
            Self::PassivePlay => "PASSIVE_PLAY",
            Self::AreaInvasion => "AREA_INVASION",
            Self::Steal => "STEAL",
            Self::FootFault => "FOOT_FAULT",
            Self::BallOut => "BALL_OUT",
        }
    }

    /// Parses a wire string into an `EventDetail`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownEnumValue` for any value outside the set.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "GOALKEEPER_SAVE" => Ok(Self::GoalkeeperSave),
            "DEFENDER_BLOCK" => Ok(Self::DefenderBlock),
            "POST" => Ok(Self::Post),
            "DIRECT_OUT" => Ok(Self::DirectOut),
            "STEPS" => Ok(Self::Steps),
            "DOUBLE_DRIBBLE" => Ok(Self::DoubleDribble),
            "OFFENSIVE_FOUL" => Ok(Self::OffensiveFoul),
            "PASSIVE_PLAY" => Ok(Self::PassivePlay),
            "AREA_INVASION" => Ok(Self::AreaInvasion),
            "STEAL" => Ok(Self::Steal),
            "FOOT_FAULT" => Ok(Self::FootFault),
            "BALL_OUT" => Ok(Self::BallOut),
            _ => Err(DomainError::UnknownEnumValue {
                field: "eventDetail",
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for EventDetail {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for EventDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
