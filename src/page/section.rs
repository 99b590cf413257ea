use std::{fmt, str::FromStr};

use thiserror::Error;

/// A navigable region of the page, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("unknown section: {0}")]
    Unknown(String),
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Education,
        Section::Contact,
    ];

    /// The element id the section is rendered under.
    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| SectionError::Unknown(s.to_string()))
    }
}
