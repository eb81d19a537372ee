use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Start,
    Center,
    End,
}

/// Where the floating element sits relative to its reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    Top,
    TopStart,
    TopEnd,
    #[default]
    Bottom,
    BottomStart,
    BottomEnd,
    Left,
    LeftStart,
    LeftEnd,
    Right,
    RightStart,
    RightEnd,
}

impl Placement {
    pub const ALL: [Placement; 12] = [
        Placement::Top,
        Placement::TopStart,
        Placement::TopEnd,
        Placement::Bottom,
        Placement::BottomStart,
        Placement::BottomEnd,
        Placement::Left,
        Placement::LeftStart,
        Placement::LeftEnd,
        Placement::Right,
        Placement::RightStart,
        Placement::RightEnd,
    ];

    pub fn new(side: Side, alignment: Alignment) -> Self {
        use Alignment::*;
        match (side, alignment) {
            (Side::Top, Center) => Placement::Top,
            (Side::Top, Start) => Placement::TopStart,
            (Side::Top, End) => Placement::TopEnd,
            (Side::Bottom, Center) => Placement::Bottom,
            (Side::Bottom, Start) => Placement::BottomStart,
            (Side::Bottom, End) => Placement::BottomEnd,
            (Side::Left, Center) => Placement::Left,
            (Side::Left, Start) => Placement::LeftStart,
            (Side::Left, End) => Placement::LeftEnd,
            (Side::Right, Center) => Placement::Right,
            (Side::Right, Start) => Placement::RightStart,
            (Side::Right, End) => Placement::RightEnd,
        }
    }

    pub fn side(self) -> Side {
        match self {
            Placement::Top | Placement::TopStart | Placement::TopEnd => Side::Top,
            Placement::Bottom | Placement::BottomStart | Placement::BottomEnd => Side::Bottom,
            Placement::Left | Placement::LeftStart | Placement::LeftEnd => Side::Left,
            Placement::Right | Placement::RightStart | Placement::RightEnd => Side::Right,
        }
    }

    pub fn alignment(self) -> Alignment {
        match self {
            Placement::TopStart
            | Placement::BottomStart
            | Placement::LeftStart
            | Placement::RightStart => Alignment::Start,
            Placement::TopEnd | Placement::BottomEnd | Placement::LeftEnd | Placement::RightEnd => {
                Alignment::End
            }
            _ => Alignment::Center,
        }
    }

    /// Same alignment on the opposite side, used when flipping
    pub fn opposite(self) -> Placement {
        Placement::new(self.side().opposite(), self.alignment())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::TopStart => "top-start",
            Placement::TopEnd => "top-end",
            Placement::Bottom => "bottom",
            Placement::BottomStart => "bottom-start",
            Placement::BottomEnd => "bottom-end",
            Placement::Left => "left",
            Placement::LeftStart => "left-start",
            Placement::LeftEnd => "left-end",
            Placement::Right => "right",
            Placement::RightStart => "right-start",
            Placement::RightEnd => "right-end",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Placement::ALL
            .into_iter()
            .find(|placement| placement.as_str() == value)
            .ok_or_else(|| format!("unknown placement '{}'", value))
    }
}
