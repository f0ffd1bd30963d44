use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of labels classifying an entry's role in theater production.
///
/// The wire and storage form is the display label, including the space in
/// "Stage Manager".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Actor,
    Director,
    Playwright,
    Designer,
    Place,
    Play,
    Producer,
    #[serde(rename = "Stage Manager")]
    StageManager,
    Choreographer,
    Other,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// All categories, in the order filter controls present them.
    pub const ALL: [Category; 10] = [
        Category::Actor,
        Category::Director,
        Category::Playwright,
        Category::Designer,
        Category::Place,
        Category::Play,
        Category::Producer,
        Category::StageManager,
        Category::Choreographer,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Actor => "Actor",
            Category::Director => "Director",
            Category::Playwright => "Playwright",
            Category::Designer => "Designer",
            Category::Place => "Place",
            Category::Play => "Play",
            Category::Producer => "Producer",
            Category::StageManager => "Stage Manager",
            Category::Choreographer => "Choreographer",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
