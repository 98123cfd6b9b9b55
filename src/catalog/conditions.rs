use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Health challenges a user can pick; each one keys a list of recommended foods
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthCondition {
    #[serde(rename = "diabetes")]
    Diabetes,
    #[serde(rename = "high blood pressure")]
    HighBloodPressure,
    #[serde(rename = "weight loss")]
    WeightLoss,
    #[serde(rename = "high cholesterol")]
    HighCholesterol,
    #[serde(rename = "digestive issues")]
    DigestiveIssues,
    #[serde(rename = "low energy")]
    LowEnergy,
    #[serde(rename = "skin health")]
    SkinHealth,
    #[serde(rename = "immune support")]
    ImmuneSupport,
    #[serde(rename = "bone health")]
    BoneHealth,
    #[serde(rename = "heart health")]
    HeartHealth,
    #[serde(rename = "stress relief")]
    StressRelief,
    #[serde(rename = "inflammation")]
    Inflammation,
    #[serde(rename = "mood improvement")]
    MoodImprovement,
    #[serde(rename = "hydration")]
    Hydration,
    #[serde(rename = "hair health")]
    HairHealth,
}

impl HealthCondition {
    /// Every condition, in table order
    pub const ALL: [HealthCondition; 15] = [
        HealthCondition::Diabetes,
        HealthCondition::HighBloodPressure,
        HealthCondition::WeightLoss,
        HealthCondition::HighCholesterol,
        HealthCondition::DigestiveIssues,
        HealthCondition::LowEnergy,
        HealthCondition::SkinHealth,
        HealthCondition::ImmuneSupport,
        HealthCondition::BoneHealth,
        HealthCondition::HeartHealth,
        HealthCondition::StressRelief,
        HealthCondition::Inflammation,
        HealthCondition::MoodImprovement,
        HealthCondition::Hydration,
        HealthCondition::HairHealth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HealthCondition::Diabetes => "diabetes",
            HealthCondition::HighBloodPressure => "high blood pressure",
            HealthCondition::WeightLoss => "weight loss",
            HealthCondition::HighCholesterol => "high cholesterol",
            HealthCondition::DigestiveIssues => "digestive issues",
            HealthCondition::LowEnergy => "low energy",
            HealthCondition::SkinHealth => "skin health",
            HealthCondition::ImmuneSupport => "immune support",
            HealthCondition::BoneHealth => "bone health",
            HealthCondition::HeartHealth => "heart health",
            HealthCondition::StressRelief => "stress relief",
            HealthCondition::Inflammation => "inflammation",
            HealthCondition::MoodImprovement => "mood improvement",
            HealthCondition::Hydration => "hydration",
            HealthCondition::HairHealth => "hair health",
        }
    }

    /// Lower-case food names recommended for this condition
    pub fn recommended_foods(self) -> &'static [&'static str] {
        match self {
            HealthCondition::Diabetes => &["whole grains", "leafy greens", "berries", "nuts", "fish"],
            HealthCondition::HighBloodPressure => &["bananas", "beets", "oats", "fatty fish", "garlic"],
            HealthCondition::WeightLoss => &["fruits", "vegetables", "lean proteins", "legumes", "whole grains"],
            HealthCondition::HighCholesterol => &["oats", "avocados", "fatty fish", "walnuts", "olive oil"],
            HealthCondition::DigestiveIssues => &["yogurt", "fiber-rich foods", "bananas", "whole grains", "fermented foods"],
            HealthCondition::LowEnergy => &["nuts", "whole grains", "fruits", "lean meats", "dark chocolate"],
            HealthCondition::SkinHealth => &["avocados", "blueberries", "salmon", "sweet potatoes", "olive oil"],
            HealthCondition::ImmuneSupport => &["citrus fruits", "garlic", "spinach", "yogurt", "almonds"],
            HealthCondition::BoneHealth => &["dairy products", "leafy greens", "salmon", "fortified foods", "nuts"],
            HealthCondition::HeartHealth => &["berries", "oats", "dark chocolate", "olive oil", "fatty fish"],
            HealthCondition::StressRelief => &["dark chocolate", "green tea", "berries", "nuts", "oats"],
            HealthCondition::Inflammation => &["leafy greens", "berries", "fatty fish", "turmeric", "olive oil"],
            HealthCondition::MoodImprovement => &["bananas", "berries", "oats", "dark chocolate", "nuts"],
            HealthCondition::Hydration => &["cucumbers", "watermelon", "celery", "orange", "strawberries"],
            HealthCondition::HairHealth => &["nuts", "salmon", "eggs", "berries", "avocados"],
        }
    }
}

impl fmt::Display for HealthCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown health condition: {0}")]
pub struct UnknownCondition(pub String);

impl FromStr for HealthCondition {
    type Err = UnknownCondition;

    /// Labels match ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        HealthCondition::ALL
            .into_iter()
            .find(|condition| condition.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCondition(s.to_string()))
    }
}
