//! The closed set of cuisine types a restaurant can offer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cuisine {
    Brazilian,
    Italian,
    Japanese,
    Chinese,
    Mexican,
    French,
    Indian,
    Arabic,
    Portuguese,
    Seafood,
    Vegetarian,
    Vegan,
}

impl Cuisine {
    pub const ALL: [Cuisine; 12] = [
        Cuisine::Brazilian,
        Cuisine::Italian,
        Cuisine::Japanese,
        Cuisine::Chinese,
        Cuisine::Mexican,
        Cuisine::French,
        Cuisine::Indian,
        Cuisine::Arabic,
        Cuisine::Portuguese,
        Cuisine::Seafood,
        Cuisine::Vegetarian,
        Cuisine::Vegan,
    ];

    /// Wire and storage representation, e.g. `"ITALIAN"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::Brazilian => "BRAZILIAN",
            Cuisine::Italian => "ITALIAN",
            Cuisine::Japanese => "JAPANESE",
            Cuisine::Chinese => "CHINESE",
            Cuisine::Mexican => "MEXICAN",
            Cuisine::French => "FRENCH",
            Cuisine::Indian => "INDIAN",
            Cuisine::Arabic => "ARABIC",
            Cuisine::Portuguese => "PORTUGUESE",
            Cuisine::Seafood => "SEAFOOD",
            Cuisine::Vegetarian => "VEGETARIAN",
            Cuisine::Vegan => "VEGAN",
        }
    }

    /// Parse the wire representation. Returns `None` outside the set.
    pub fn from_name(name: &str) -> Option<Cuisine> {
        Cuisine::ALL.iter().copied().find(|c| c.as_str() == name)
    }
}

impl std::fmt::Display for Cuisine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_round_trips() {
        for cuisine in Cuisine::ALL {
            assert_eq!(Cuisine::from_name(cuisine.as_str()), Some(cuisine));
        }
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert_eq!(Cuisine::from_name("KLINGON"), None);
        assert_eq!(Cuisine::from_name("italian"), None);
    }

    #[test]
    fn serde_matches_as_str() {
        let json = serde_json::to_string(&Cuisine::Seafood).unwrap();
        assert_eq!(json, "\"SEAFOOD\"");
        let back: Cuisine = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Cuisine::Seafood);
    }
}
