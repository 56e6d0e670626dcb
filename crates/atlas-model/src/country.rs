//! Country name resolution between display names, backend dataset names and
//! GeoJSON feature names.
//!
//! The dictionary is an immutable value: build it once and pass it by
//! reference to whatever needs name resolution.

use std::collections::HashMap;

/// Common name -> backend dataset name, in lookup priority order.
const COMMON_TO_BACKEND: &[(&str, &str)] = &[
    ("China", "China"),
    ("People's Republic of China", "China"),
    ("South Korea", "Korea, Rep."),
    ("Republic of Korea", "Korea, Rep."),
    ("North Korea", "Korea, Dem. People's Rep."),
    ("Democratic People's Republic of Korea", "Korea, Dem. People's Rep."),
    ("Dem. Rep. Korea", "Korea, Dem. People's Rep."),
    ("Korea, Dem. People's Rep.", "Korea, Dem. People's Rep."),
    ("Iran", "Iran, Islamic Rep."),
    ("Vietnam", "Viet Nam"),
    ("Syria", "Syrian Arab Republic"),
    ("Laos", "Lao PDR"),
    ("Kyrgyzstan", "Kyrgyz Republic"),
    ("Turkey", "Turkiye"),
    ("Yemen", "Yemen, Rep."),
    ("Egypt", "Egypt, Arab Rep."),
    ("Central African Rep.", "Central African Republic"),
    ("Dem. Rep. Congo", "Congo, Dem. Rep."),
    ("Congo", "Congo, Rep."),
    ("Côte d'Ivoire", "Cote d'Ivoire"),
    ("Gambia", "Gambia, The"),
    ("eSwatini", "Eswatini"),
    ("S. Sudan", "South Sudan"),
    ("Somaliland", "Somalia"),
    ("Solomon Is.", "Solomon Islands"),
    ("Russia", "Russian Federation"),
    ("Slovakia", "Slovak Republic"),
    ("Macedonia", "North Macedonia"),
    ("The Republic of North Macedonia", "North Macedonia"),
    ("Bosnia and Herz.", "Bosnia and Herzegovina"),
    ("United States", "United States"),
    ("United States of America", "United States"),
    ("USA", "United States"),
    ("US", "United States"),
    ("Dominican Rep.", "Dominican Republic"),
    ("Venezuela", "Venezuela, RB"),
];

/// Common or backend name -> world-atlas GeoJSON feature name.
const COMMON_TO_GEOJSON: &[(&str, &str)] = &[
    ("China", "China"),
    ("Russia", "Russia"),
    ("United States", "United States of America"),
    ("United States of America", "United States of America"),
    ("USA", "United States of America"),
    ("South Korea", "Korea, Republic of"),
    ("North Korea", "North Korea"),
    ("Korea, Dem. People's Rep.", "North Korea"),
    ("Democratic People's Republic of Korea", "North Korea"),
    ("Iran", "Iran"),
    ("Vietnam", "Vietnam"),
    ("Congo (Kinshasa)", "Democratic Republic of the Congo"),
    ("Congo (Brazzaville)", "Republic of the Congo"),
    ("Egypt", "Egypt"),
    ("Syria", "Syria"),
    ("Laos", "Laos"),
    ("Central African Republic", "Central African Rep."),
];

#[derive(Debug, Clone)]
pub struct CountryDictionary {
    to_backend: HashMap<String, String>,
    /// backend -> first common name mapping to it
    to_display: HashMap<String, String>,
    to_geojson: HashMap<String, String>,
}

impl CountryDictionary {
    /// Builds a dictionary from explicit tables. Earlier entries win when two
    /// common names map to the same backend name.
    pub fn from_tables<'a, B, G>(common_to_backend: B, common_to_geojson: G) -> Self
    where
        B: IntoIterator<Item = (&'a str, &'a str)>,
        G: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut to_backend = HashMap::new();
        let mut to_display = HashMap::new();
        for (common, backend) in common_to_backend {
            to_backend
                .entry(common.to_string())
                .or_insert_with(|| backend.to_string());
            to_display
                .entry(backend.to_string())
                .or_insert_with(|| common.to_string());
        }
        let to_geojson = common_to_geojson
            .into_iter()
            .map(|(name, geojson)| (name.to_string(), geojson.to_string()))
            .collect();
        Self {
            to_backend,
            to_display,
            to_geojson,
        }
    }

    /// Name the backend datasets use; unknown names pass through.
    pub fn backend_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.to_backend.get(name).map_or(name, String::as_str)
    }

    /// Human-facing name for a backend name; unknown names pass through.
    pub fn display_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.to_display.get(name).map_or(name, String::as_str)
    }

    /// GeoJSON feature name, trying the backend name first and then the input.
    pub fn geojson_name<'a>(&'a self, name: &'a str) -> &'a str {
        let backend = self.backend_name(name);
        self.to_geojson
            .get(backend)
            .or_else(|| self.to_geojson.get(name))
            .map_or(name, String::as_str)
    }
}

impl Default for CountryDictionary {
    fn default() -> Self {
        Self::from_tables(
            COMMON_TO_BACKEND.iter().copied(),
            COMMON_TO_GEOJSON.iter().copied(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_names() {
        let dict = CountryDictionary::default();
        assert_eq!(dict.backend_name("Russia"), "Russian Federation");
        assert_eq!(dict.backend_name("USA"), "United States");
        assert_eq!(dict.backend_name("Brazil"), "Brazil");
    }

    #[test]
    fn display_uses_first_common_name() {
        let dict = CountryDictionary::default();
        assert_eq!(dict.display_name("Korea, Rep."), "South Korea");
        assert_eq!(dict.display_name("United States"), "United States");
        assert_eq!(dict.display_name("Brazil"), "Brazil");
    }

    #[test]
    fn geojson_names() {
        let dict = CountryDictionary::default();
        assert_eq!(dict.geojson_name("USA"), "United States of America");
        assert_eq!(dict.geojson_name("Iran"), "Iran");
        assert_eq!(
            dict.geojson_name("Democratic People's Republic of Korea"),
            "North Korea"
        );
        assert_eq!(dict.geojson_name("Brazil"), "Brazil");
    }
}
