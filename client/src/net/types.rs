//! Wire DTOs for the snippet REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the JSON records served by `/api/snippets` so serde
//! round-trips stay lossless. Snippet ids are opaque: the backend may emit
//! them as strings or integers, and the client only compares and displays them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language category a snippet is filed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "PHP")]
    Php,
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "CSS")]
    Css,
}

impl Category {
    /// Every category, in filter-bar order.
    pub const ALL: [Category; 3] = [Category::Php, Category::Html, Category::Css];

    /// Wire/query-string spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Php => "PHP",
            Category::Html => "HTML",
            Category::Css => "CSS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PHP" => Ok(Category::Php),
            "HTML" => Ok(Category::Html),
            "CSS" => Ok(Category::Css),
            other => Err(format!("unknown category: {other:?}")),
        }
    }
}

/// Server-assigned snippet identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnippetId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnippetId::Number(n) => write!(f, "{n}"),
            SnippetId::Text(s) => f.write_str(s),
        }
    }
}

/// A stored snippet as returned by `GET /api/snippets`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: SnippetId,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Code body, whitespace preserved verbatim.
    pub code: String,
}

/// Request body for `POST /api/snippets`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSnippet {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub code: String,
}
