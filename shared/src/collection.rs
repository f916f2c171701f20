use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One of the four content sets served by the content API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Projects,
    Photography,
    Calligraphy,
    Blog,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown collection `{0}`")]
pub struct UnknownCollection(pub String);

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Projects,
        Collection::Photography,
        Collection::Calligraphy,
        Collection::Blog,
    ];

    /// Key under which the collection is stored and cached.
    pub fn key(self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::Photography => "photography",
            Collection::Calligraphy => "calligraphy",
            Collection::Blog => "blog",
        }
    }

    pub fn api_path(self) -> String {
        format!("/api/{}", self.key())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|collection| collection.key() == raw)
            .ok_or_else(|| UnknownCollection(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_parse() {
        for collection in Collection::ALL {
            assert_eq!(collection.key().parse::<Collection>(), Ok(collection));
        }
        assert_eq!(Collection::Blog.api_path(), "/api/blog");
        assert!("settings".parse::<Collection>().is_err());
    }
}
