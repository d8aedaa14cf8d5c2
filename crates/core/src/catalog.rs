//! Project catalog domain types and validation.
//!
//! Input DTOs deserialize every field as optional and defer checks to
//! `validate()`, so a single response can report every failing field.
//! The wire format is camelCase to match the public API contract.

use serde::Deserialize;

use crate::error::{CoreError, FieldError};

/// How a project's showcase image is scaled by the front end.
///
/// Stored as lowercase text; anything outside this set is a
/// validation failure and never reaches the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageFit {
    #[default]
    Cover,
    Contain,
}

impl ImageFit {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFit::Cover => "cover",
            ImageFit::Contain => "contain",
        }
    }

    /// Parse a client-supplied value. Case-sensitive by contract.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "cover" => Some(ImageFit::Cover),
            "contain" => Some(ImageFit::Contain),
            _ => None,
        }
    }
}

/// Listing filter parsed straight from query parameters.
///
/// `featured` only restricts when explicitly `true`; absent or
/// `false` imposes no filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    /// Exact membership test against the project's tag list.
    pub tag: Option<String>,
    /// Case-insensitive substring match over title OR description.
    pub search: Option<String>,
    pub featured: Option<bool>,
}

/// Fields accepted when creating a project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub image_url: Option<String>,
    pub image_fit: Option<String>,
    pub featured: Option<bool>,
    pub order: Option<i32>,
}

/// Validated and defaulted creation fields, ready for insertion.
///
/// Counters (`stars`, `views`) are not part of this type: they always
/// start at zero and only move through their dedicated operations.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub github_link: String,
    pub live_link: Option<String>,
    pub image_url: Option<String>,
    pub image_fit: ImageFit,
    pub featured: bool,
    pub order: i32,
}

impl CreateProject {
    /// Check required fields and apply defaults.
    ///
    /// Every failing field is reported in one `CoreError::Validation`.
    pub fn validate(self) -> Result<NewProject, CoreError> {
        let mut errors = Vec::new();

        require_text("title", self.title.as_deref(), &mut errors);
        require_text("description", self.description.as_deref(), &mut errors);
        require_text("githubLink", self.github_link.as_deref(), &mut errors);

        let image_fit = parse_image_fit(self.image_fit.as_deref(), &mut errors)
            .unwrap_or_default();

        if !errors.is_empty() {
            return Err(CoreError::Validation(errors));
        }

        Ok(NewProject {
            title: trimmed(self.title),
            description: trimmed(self.description),
            tags: normalize_tags(self.tags.unwrap_or_default()),
            github_link: trimmed(self.github_link),
            live_link: optional_text(self.live_link),
            image_url: optional_text(self.image_url),
            image_fit,
            featured: self.featured.unwrap_or(false),
            order: self.order.unwrap_or(0),
        })
    }
}

/// Partial-update fields. Presence carries meaning: `featured: false`
/// and `order: 0` are legitimate values that replace the stored ones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub image_url: Option<String>,
    pub image_fit: Option<String>,
    pub featured: Option<bool>,
    pub order: Option<i32>,
}

/// Validated patch. `None` means "leave the stored value unchanged".
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub image_url: Option<String>,
    pub image_fit: Option<ImageFit>,
    pub featured: Option<bool>,
    pub order: Option<i32>,
}

impl UpdateProject {
    /// Check that supplied required-text fields are non-empty and that
    /// `imageFit`, if present, is a known value.
    ///
    /// Optional links supplied as empty strings are treated as absent
    /// rather than rejected, matching the original API behavior.
    pub fn validate(self) -> Result<ProjectPatch, CoreError> {
        let mut errors = Vec::new();

        reject_empty("title", self.title.as_deref(), &mut errors);
        reject_empty("description", self.description.as_deref(), &mut errors);
        reject_empty("githubLink", self.github_link.as_deref(), &mut errors);

        let image_fit = parse_image_fit(self.image_fit.as_deref(), &mut errors);

        if !errors.is_empty() {
            return Err(CoreError::Validation(errors));
        }

        Ok(ProjectPatch {
            title: self.title.map(|s| s.trim().to_string()),
            description: self.description.map(|s| s.trim().to_string()),
            tags: self.tags.map(normalize_tags),
            github_link: self.github_link.map(|s| s.trim().to_string()),
            live_link: optional_text(self.live_link),
            image_url: optional_text(self.image_url),
            image_fit,
            featured: self.featured,
            order: self.order,
        })
    }
}

/// Trim each tag. Duplicates and empty sequences are allowed -- the
/// store does not deduplicate.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter().map(|t| t.trim().to_string()).collect()
}

fn require_text(field: &'static str, value: Option<&str>, errors: &mut Vec<FieldError>) {
    if value.is_none_or(|v| v.trim().is_empty()) {
        errors.push(FieldError::new(field, format!("{field} is required")));
    }
}

fn reject_empty(field: &'static str, value: Option<&str>, errors: &mut Vec<FieldError>) {
    if value.is_some_and(|v| v.trim().is_empty()) {
        errors.push(FieldError::new(field, format!("{field} cannot be empty")));
    }
}

fn parse_image_fit(raw: Option<&str>, errors: &mut Vec<FieldError>) -> Option<ImageFit> {
    let raw = raw?;
    match ImageFit::parse(raw) {
        Some(fit) => Some(fit),
        None => {
            errors.push(FieldError::new(
                "imageFit",
                format!("imageFit must be one of: cover, contain (got '{raw}')"),
            ));
            None
        }
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Collapse present-but-blank optional text to `None`.
fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
