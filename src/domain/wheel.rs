//! Wheel segments as a closed variant set.
//!
//! The physical wheel is not simulated. An operator keys in the segment the
//! wheel landed on, and the engine branches on the segment kind.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Outcome of a single spin of the physical wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelResult {
    Money100,
    Money200,
    Money300,
    Money500,
    Money750,
    Money1000,
    Bankrupt,
    LoseATurn,
    FreeSpin,
}

impl WheelResult {
    pub const MONEY_SEGMENTS: [WheelResult; 6] = [
        WheelResult::Money100,
        WheelResult::Money200,
        WheelResult::Money300,
        WheelResult::Money500,
        WheelResult::Money750,
        WheelResult::Money1000,
    ];

    pub const SPECIAL_SEGMENTS: [WheelResult; 3] = [
        WheelResult::Bankrupt,
        WheelResult::LoseATurn,
        WheelResult::FreeSpin,
    ];

    /// Dollar value of a money segment; `None` for special segments.
    pub const fn money_value(self) -> Option<u32> {
        match self {
            WheelResult::Money100 => Some(100),
            WheelResult::Money200 => Some(200),
            WheelResult::Money300 => Some(300),
            WheelResult::Money500 => Some(500),
            WheelResult::Money750 => Some(750),
            WheelResult::Money1000 => Some(1000),
            WheelResult::Bankrupt | WheelResult::LoseATurn | WheelResult::FreeSpin => None,
        }
    }

    pub const fn is_money(self) -> bool {
        self.money_value().is_some()
    }

    pub const fn label(self) -> &'static str {
        match self {
            WheelResult::Money100 => "$100",
            WheelResult::Money200 => "$200",
            WheelResult::Money300 => "$300",
            WheelResult::Money500 => "$500",
            WheelResult::Money750 => "$750",
            WheelResult::Money1000 => "$1000",
            WheelResult::Bankrupt => "BANKRUPT",
            WheelResult::LoseATurn => "LOSE A TURN",
            WheelResult::FreeSpin => "FREE SPIN",
        }
    }
}

impl Display for WheelResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}
