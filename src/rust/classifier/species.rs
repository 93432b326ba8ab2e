use std::fmt;

/// Label returned for class ids outside the species table.
pub const UNKNOWN_SPECIES: &str = "unknown";

/// The three iris species the model was trained to tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    /// Maps a class id produced by the classifier to its species.
    pub fn from_class_id(id: i64) -> Option<Self> {
        match id {
            0 => Some(Species::Setosa),
            1 => Some(Species::Versicolor),
            2 => Some(Species::Virginica),
            _ => None,
        }
    }

    pub fn class_id(self) -> i64 {
        match self {
            Species::Setosa => 0,
            Species::Versicolor => 1,
            Species::Virginica => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up the label for a class id, falling back to `"unknown"`.
pub fn species_name(id: i64) -> &'static str {
    Species::from_class_id(id)
        .map(Species::name)
        .unwrap_or(UNKNOWN_SPECIES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids() {
        assert_eq!(species_name(0), "setosa");
        assert_eq!(species_name(1), "versicolor");
        assert_eq!(species_name(2), "virginica");
    }

    #[test]
    fn test_unknown_ids() {
        assert_eq!(species_name(3), UNKNOWN_SPECIES);
        assert_eq!(species_name(-1), UNKNOWN_SPECIES);
        assert_eq!(species_name(i64::MAX), UNKNOWN_SPECIES);
    }

    #[test]
    fn test_class_id_matches_table() {
        for species in Species::ALL {
            assert_eq!(Species::from_class_id(species.class_id()), Some(species));
            assert_eq!(species.to_string(), species_name(species.class_id()));
        }
    }
}
