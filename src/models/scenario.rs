use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A savings growth assumption used for projections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Annual rate, e.g. `0.08` for 8%.
    pub growth_rate: Decimal,
    /// Horizon in months.
    pub timeframe: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewScenario {
    pub name: String,
    pub description: String,
    pub growth_rate: Decimal,
    pub timeframe: u32,
}

impl NewScenario {
    pub fn new(name: impl Into<String>, growth_rate: Decimal, timeframe: u32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            growth_rate,
            timeframe,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
