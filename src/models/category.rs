use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Category {
    Food,
    Transportation,
    Housing,
    Entertainment,
    Shopping,
    HealthAndFitness,
    PersonalCare,
    WorkEducation,
    Travel,
    Custom(String),
}

static PRESETS: [Category; 9] = [
    Category::Food,
    Category::Transportation,
    Category::Housing,
    Category::Entertainment,
    Category::Shopping,
    Category::HealthAndFitness,
    Category::PersonalCare,
    Category::WorkEducation,
    Category::Travel,
];

impl Category {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Housing => "Housing",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::HealthAndFitness => "Health and Fitness",
            Self::PersonalCare => "Personal Care",
            Self::WorkEducation => "Work/Education",
            Self::Travel => "Travel",
            Self::Custom(name) => name,
        }
    }

    /// Map a label onto a preset (case-insensitive), otherwise keep it as a custom category.
    pub(crate) fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankCategory);
        }
        let lower = trimmed.to_lowercase();
        Ok(PRESETS
            .iter()
            .find(|c| c.as_str().to_lowercase() == lower)
            .cloned()
            .unwrap_or_else(|| Self::Custom(trimmed.to_string())))
    }

    /// The fixed categories offered by the menu, in menu order.
    pub(crate) fn presets() -> &'static [Category] {
        &PRESETS
    }

    /// Menu position reserved for "Custom Category" (one past the presets).
    pub(crate) fn custom_choice() -> usize {
        PRESETS.len() + 1
    }

    /// Resolve a 1-based menu choice. The custom slot needs a name, which goes
    /// through [`Category::parse`] so a preset typed by hand becomes that preset.
    pub(crate) fn from_choice(
        choice: &str,
        custom_name: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let max = Self::custom_choice();
        let index: usize = choice
            .trim()
            .parse()
            .map_err(|_| ValidationError::NotANumber(choice.trim().to_string()))?;
        match index {
            i if (1..max).contains(&i) => Ok(PRESETS[i - 1].clone()),
            i if i == max => Self::parse(custom_name.unwrap_or("")),
            _ => Err(ValidationError::CategoryOutOfRange {
                choice: choice.trim().to_string(),
                max,
            }),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
