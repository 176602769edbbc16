use std::fmt;

use serde::{Deserialize, Serialize};

/// Industry category a project belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Healthcare,
    Government,
    Manufacturing,
    Retail,
    FinancialServices,
    Technology,
    Education,
    Utilities,
    ProfessionalServices,
    #[default]
    Other,
}

impl Industry {
    pub const ALL: [Industry; 10] = [
        Industry::Healthcare,
        Industry::Government,
        Industry::Manufacturing,
        Industry::Retail,
        Industry::FinancialServices,
        Industry::Technology,
        Industry::Education,
        Industry::Utilities,
        Industry::ProfessionalServices,
        Industry::Other,
    ];

    /// Identifier used in project files
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Industry::Healthcare => "healthcare",
            Industry::Government => "government",
            Industry::Manufacturing => "manufacturing",
            Industry::Retail => "retail",
            Industry::FinancialServices => "financial_services",
            Industry::Technology => "technology",
            Industry::Education => "education",
            Industry::Utilities => "utilities",
            Industry::ProfessionalServices => "professional_services",
            Industry::Other => "other",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
