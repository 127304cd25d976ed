use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Public account record from `GET /users/{username}`.
///
/// Fields the API returns but we never display are ignored on decode.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    #[serde(default)]
    pub public_gists: u32,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
    pub twitter_username: Option<String>,
}

impl Profile {
    /// Name to show in headings; the login when no display name is set.
    pub fn display_name(&self) -> &str {
        non_blank(self.name.as_deref()).unwrap_or(&self.login)
    }

    pub fn bio(&self) -> Option<&str> {
        non_blank(self.bio.as_deref())
    }

    pub fn location(&self) -> Option<&str> {
        non_blank(self.location.as_deref())
    }

    pub fn company(&self) -> Option<&str> {
        non_blank(self.company.as_deref())
    }

    /// Blog link as a navigable URL. GitHub stores whatever the user typed,
    /// which is frequently a bare host.
    pub fn blog_url(&self) -> Option<String> {
        let blog = non_blank(self.blog.as_deref())?;
        if blog.starts_with("http") {
            Some(blog.to_string())
        } else {
            Some(format!("https://{blog}"))
        }
    }

    pub fn twitter_url(&self) -> Option<String> {
        non_blank(self.twitter_username.as_deref()).map(|h| format!("https://twitter.com/{h}"))
    }

    /// Account creation date, e.g. `Jul 13, 2011`.
    pub fn joined(&self) -> String {
        self.created_at.format("%b %-d, %Y").to_string()
    }
}

/// Condensed repository metadata from `GET /users/{username}/repos`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub language: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Hand-picked accounts shown before any lookup and used as shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeaturedUser {
    pub login: &'static str,
    pub name: &'static str,
    pub avatar_url: &'static str,
}

pub const FEATURED_USERS: [FeaturedUser; 5] = [
    FeaturedUser {
        login: "gaearon",
        name: "Dan Abramov",
        avatar_url: "https://avatars.githubusercontent.com/u/810438",
    },
    FeaturedUser {
        login: "sindresorhus",
        name: "Sindre Sorhus",
        avatar_url: "https://avatars.githubusercontent.com/u/170270",
    },
    FeaturedUser {
        login: "tj",
        name: "TJ Holowaychuk",
        avatar_url: "https://avatars.githubusercontent.com/u/25254",
    },
    FeaturedUser {
        login: "addyosmani",
        name: "Addy Osmani",
        avatar_url: "https://avatars.githubusercontent.com/u/110953",
    },
    FeaturedUser {
        login: "kentcdodds",
        name: "Kent C. Dodds",
        avatar_url: "https://avatars.githubusercontent.com/u/1500684",
    },
];

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
