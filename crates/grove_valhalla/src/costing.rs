use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// https://valhalla.github.io/valhalla/api/turn-by-turn/api-reference/#costing-models
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValhallaCosting {
    #[default]
    Auto,
    Bicycle,
    Bus,
    MotorScooter,
    Motorcycle,
    Pedestrian,
    Taxi,
    Truck,
}

impl ValhallaCosting {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValhallaCosting::Auto => "auto",
            ValhallaCosting::Bicycle => "bicycle",
            ValhallaCosting::Bus => "bus",
            ValhallaCosting::MotorScooter => "motor_scooter",
            ValhallaCosting::Motorcycle => "motorcycle",
            ValhallaCosting::Pedestrian => "pedestrian",
            ValhallaCosting::Taxi => "taxi",
            ValhallaCosting::Truck => "truck",
        }
    }
}

impl Display for ValhallaCosting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown costing profile: {0}")]
pub struct UnknownCosting(String);

impl FromStr for ValhallaCosting {
    type Err = UnknownCosting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ValhallaCosting::Auto),
            "bicycle" => Ok(ValhallaCosting::Bicycle),
            "bus" => Ok(ValhallaCosting::Bus),
            "motor_scooter" => Ok(ValhallaCosting::MotorScooter),
            "motorcycle" => Ok(ValhallaCosting::Motorcycle),
            "pedestrian" => Ok(ValhallaCosting::Pedestrian),
            "taxi" => Ok(ValhallaCosting::Taxi),
            "truck" => Ok(ValhallaCosting::Truck),
            other => Err(UnknownCosting(other.to_string())),
        }
    }
}
