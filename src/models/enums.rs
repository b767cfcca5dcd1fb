use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Menu categories used to resolve unit prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Starter,
    Main,
    Dessert,
    Drink,
}

impl FoodCategory {
    /// Every category, in menu order
    pub const ALL: [FoodCategory; 4] = [
        FoodCategory::Starter,
        FoodCategory::Main,
        FoodCategory::Dessert,
        FoodCategory::Drink,
    ];
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoodCategory::Starter => write!(f, "starter"),
            FoodCategory::Main => write!(f, "main"),
            FoodCategory::Dessert => write!(f, "dessert"),
            FoodCategory::Drink => write!(f, "drink"),
        }
    }
}

impl FromStr for FoodCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "starter" => Ok(FoodCategory::Starter),
            "main" => Ok(FoodCategory::Main),
            "dessert" => Ok(FoodCategory::Dessert),
            "drink" => Ok(FoodCategory::Drink),
            _ => Err(format!("Invalid food category: {}", s)),
        }
    }
}
