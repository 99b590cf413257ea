use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

pub static GLOBAL_PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| load(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse {file}: {reason}")]
    ParseError { file: String, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub meta: SiteMeta,
    pub profile: Profile,
    pub about: About,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub contact: Contact,
    pub resume: ResumeResource,
    pub copyright: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub full_name: String,
    pub greeting: String,
    pub headline: Vec<String>,
    pub tagline: String,
    pub availability: String,
    pub specialty: String,
    pub portrait: Image,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub strengths: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
}

impl SkillCategory {
    pub fn title(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Database => "Database",
            Self::Tools => "Tools",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub url: String,
    pub tech: Vec<String>,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub phone_href: String,
    pub location: String,
    pub linkedin: String,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// The remote resume file offered by the resume dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeResource {
    pub url: String,
    pub file_name: String,
}

/// Returns the embedded portfolio, parsed on first use.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    GLOBAL_PORTFOLIO.as_ref().map_err(Clone::clone)
}

fn load(name: &str) -> Result<Portfolio, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    parse(name, &file.data)
}

fn parse(name: &str, data: &[u8]) -> Result<Portfolio, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::ParseError {
        file: name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_portfolio_parses() {
        let portfolio = portfolio().expect("embedded portfolio should parse");
        assert_eq!(portfolio.profile.name, "Bilal");
        assert_eq!(portfolio.projects.len(), 5);
        assert_eq!(portfolio.experience.len(), 1);
        assert_eq!(portfolio.education.len(), 1);
        assert_eq!(portfolio.resume.file_name, "Bilal_Iftikhar_Resume.pdf");
    }

    #[test]
    fn test_skill_categories_in_display_order() {
        let portfolio = portfolio().unwrap();
        let categories = portfolio
            .skills
            .iter()
            .map(|g| g.category)
            .collect::<Vec<_>>();
        assert_eq!(
            categories,
            vec![
                SkillCategory::Frontend,
                SkillCategory::Backend,
                SkillCategory::Database,
                SkillCategory::Tools
            ]
        );
        assert!(portfolio.skills.iter().all(|g| !g.skills.is_empty()));
    }

    #[test]
    fn test_external_urls_are_https() {
        let portfolio = portfolio().unwrap();
        assert!(portfolio.resume.url.starts_with("https://"));
        assert!(portfolio.contact.linkedin.starts_with("https://"));
        for project in &portfolio.projects {
            assert!(
                project.url.starts_with("https://"),
                "{} should link over https",
                project.title
            );
        }
    }

    #[test]
    fn test_contact_links() {
        let contact = &portfolio().unwrap().contact;
        assert_eq!(contact.mailto(), "mailto:bilaliftikhar431@gmail.com");
        assert!(contact.phone_href.starts_with("tel:"));
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            load("nope.json").unwrap_err(),
            ContentError::NotFound("nope.json".to_string())
        );
    }

    #[test]
    fn test_malformed_content() {
        let err = parse("broken.json", b"{ \"meta\": ").unwrap_err();
        assert!(matches!(err, ContentError::ParseError { ref file, .. } if file == "broken.json"));
    }
}
