use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Form controls the prediction form is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Field {
    Weight,
    Height,
    Age,
    Gender,
    MainMeals,
    HighCaloricFood,
    VegetableIntake,
    AlcoholIntake,
}

impl Field {
    /// DOM id of the control bound to this field.
    pub fn element_id(self) -> &'static str {
        match self {
            Field::Weight => "weight",
            Field::Height => "height",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::MainMeals => "mainMeals",
            Field::HighCaloricFood => "highCaloricFood",
            Field::VegetableIntake => "vegetableIntake",
            Field::AlcoholIntake => "alcoholIntake",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Weight => "Weight (kg)",
            Field::Height => "Height (m)",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::MainMeals => "Main meals per day",
            Field::HighCaloricFood => "Frequent high-caloric food",
            Field::VegetableIntake => "Vegetable intake (1-3)",
            Field::AlcoholIntake => "Alcohol intake",
        }
    }

    pub fn is_select(self) -> bool {
        matches!(
            self,
            Field::Gender | Field::HighCaloricFood | Field::AlcoholIntake
        )
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.element_id())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumIter, EnumString,
)]
pub enum Gender {
    Male,
    Female,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumIter, EnumString,
)]
pub enum HighCaloricFood {
    Yes,
    No,
}

// The backend's encoder keys "no" in lowercase and the rest capitalised.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumIter, EnumString,
)]
pub enum AlcoholIntake {
    #[serde(rename = "no")]
    #[strum(serialize = "no")]
    No,
    Sometimes,
    Frequently,
    Always,
}

/// A select value together with the text shown for it.
pub trait SelectOption: AsRef<str> + Copy {
    fn label(&self) -> &'static str;
}

impl SelectOption for Gender {
    fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl SelectOption for HighCaloricFood {
    fn label(&self) -> &'static str {
        match self {
            HighCaloricFood::Yes => "Yes",
            HighCaloricFood::No => "No",
        }
    }
}

impl SelectOption for AlcoholIntake {
    fn label(&self) -> &'static str {
        match self {
            AlcoholIntake::No => "No",
            AlcoholIntake::Sometimes => "Sometimes",
            AlcoholIntake::Frequently => "Frequently",
            AlcoholIntake::Always => "Always",
        }
    }
}

/// Raw control values captured at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    values: HashMap<Field, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Missing fields read as empty, like an untouched control.
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }
}
