//! REST Countries v3.1 wire types.
//!
//! Field names follow the v3.1 payloads (`cca3`, `nativeName`, `googleMaps`,
//! ...), renamed to Rust conventions on the way in. All collection fields
//! default to empty when the endpoint omits them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Country display names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    /// Common display name (e.g. "France").
    #[serde(default)]
    pub common: String,
    /// Official long-form name (e.g. "French Republic").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official: Option<String>,
    /// Native names keyed by language code.
    #[serde(
        rename = "nativeName",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub native_name: BTreeMap<String, NativeName>,
}

/// A native-language rendering of a country name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeName {
    #[serde(default)]
    pub official: String,
    #[serde(default)]
    pub common: String,
}

/// Flag image references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    /// Alt text describing the flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// One entry of the country list endpoint.
///
/// Immutable once fetched; lives for the duration of the list page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySummary {
    /// ISO 3166-1 alpha-3 code, the record's identity.
    #[serde(rename = "cca3")]
    pub code: String,
    /// Display names.
    #[serde(default)]
    pub name: CountryName,
    /// Flag image references, if published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<Flags>,
    /// Population count.
    #[serde(default)]
    pub population: u64,
    /// Coarse geographic grouping (e.g. "Africa", "Americas").
    #[serde(default)]
    pub region: String,
    /// Capital city names; usually one, sometimes several or none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capital: Vec<String>,
}

impl CountrySummary {
    /// Whether the record carries a usable display name.
    ///
    /// Records failing this check are dropped from the list entirely.
    #[must_use]
    pub fn has_usable_name(&self) -> bool {
        !self.name.common.trim().is_empty()
    }

    /// The common display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.name.common
    }
}

/// A currency used by a country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Currency display name (e.g. "Euro").
    #[serde(default)]
    pub name: String,
    /// Currency symbol, if one exists (e.g. "€").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// External map links for a country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maps {
    #[serde(
        rename = "googleMaps",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub google_maps: Option<String>,
    #[serde(
        rename = "openStreetMaps",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub open_street_maps: Option<String>,
}

/// The full record of the detail endpoint.
///
/// Superset of [`CountrySummary`]. Immutable once fetched; lives for the
/// duration of the detail page, keyed by the route's country code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDetail {
    /// ISO 3166-1 alpha-3 code, the record's identity.
    #[serde(rename = "cca3")]
    pub code: String,
    /// Display names, including native-language renderings.
    #[serde(default)]
    pub name: CountryName,
    /// Flag image references, if published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<Flags>,
    /// Population count.
    #[serde(default)]
    pub population: u64,
    /// Coarse geographic grouping.
    #[serde(default)]
    pub region: String,
    /// Finer geographic grouping (e.g. "Western Europe").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
    /// Capital city names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capital: Vec<String>,
    /// Language code → display name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub languages: BTreeMap<String, String>,
    /// Currency code → currency.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub currencies: BTreeMap<String, Currency>,
    /// External map links.
    #[serde(default)]
    pub maps: Maps,
    /// Codes of neighboring countries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub borders: Vec<String>,
    /// Top-level domains (e.g. ".fr").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tld: Vec<String>,
}

impl CountryDetail {
    /// Whether the record carries a usable display name.
    #[must_use]
    pub fn has_usable_name(&self) -> bool {
        !self.name.common.trim().is_empty()
    }

    /// The common display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.name.common
    }
}

/// A resolved neighboring country: code plus display name.
///
/// Projection of the batched code lookup; exists only after a detail
/// record's border codes are known.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderCountry {
    /// ISO 3166-1 alpha-3 code.
    pub code: String,
    /// Common display name.
    pub name: String,
}

/// Wire shape of one batched-lookup entry: `{"cca3": ..., "name": {"common": ...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct BorderCountryWire {
    pub cca3: String,
    #[serde(default)]
    pub name: CountryName,
}

impl From<BorderCountryWire> for BorderCountry {
    fn from(wire: BorderCountryWire) -> Self {
        Self {
            code: wire.cca3,
            name: wire.name.common,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_deserializes_list_payload() {
        let json = r#"{
            "flags": {
                "png": "https://flagcdn.com/w320/ci.png",
                "svg": "https://flagcdn.com/ci.svg",
                "alt": "The flag of Côte d'Ivoire is composed of three equal vertical bands."
            },
            "name": {
                "common": "Ivory Coast",
                "official": "Republic of Côte d'Ivoire"
            },
            "cca3": "CIV",
            "capital": ["Yamoussoukro"],
            "region": "Africa",
            "population": 26378275
        }"#;

        let summary: CountrySummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.code, "CIV");
        assert_eq!(summary.display_name(), "Ivory Coast");
        assert_eq!(summary.region, "Africa");
        assert_eq!(summary.population, 26_378_275);
        assert_eq!(summary.capital, vec!["Yamoussoukro".to_string()]);
        assert!(summary.has_usable_name());
        assert!(summary.flags.is_some());
    }

    #[test]
    fn summary_tolerates_missing_optional_fields() {
        let json = r#"{"cca3": "ATA", "name": {"common": "Antarctica"}, "population": 1000, "region": "Antarctic"}"#;
        let summary: CountrySummary = serde_json::from_str(json).unwrap();
        assert!(summary.capital.is_empty());
        assert!(summary.flags.is_none());
    }

    #[test]
    fn summary_without_name_is_not_usable() {
        let json = r#"{"cca3": "XXX", "name": {}, "population": 0, "region": ""}"#;
        let summary: CountrySummary = serde_json::from_str(json).unwrap();
        assert!(!summary.has_usable_name());
    }

    #[test]
    fn detail_deserializes_full_payload() {
        let json = r#"{
            "name": {
                "common": "Germany",
                "official": "Federal Republic of Germany",
                "nativeName": {
                    "deu": {"official": "Bundesrepublik Deutschland", "common": "Deutschland"}
                }
            },
            "tld": [".de"],
            "cca3": "DEU",
            "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
            "capital": ["Berlin"],
            "region": "Europe",
            "subregion": "Western Europe",
            "languages": {"deu": "German"},
            "borders": ["AUT", "BEL", "CZE", "DNK", "FRA", "LUX", "NLD", "POL", "CHE"],
            "population": 83240525,
            "maps": {
                "googleMaps": "https://goo.gl/maps/mD9FBMq1nvXUBrkv6",
                "openStreetMaps": "https://www.openstreetmap.org/relation/51477"
            },
            "flags": {"png": "https://flagcdn.com/w320/de.png"}
        }"#;

        let detail: CountryDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.code, "DEU");
        assert_eq!(detail.subregion.as_deref(), Some("Western Europe"));
        assert_eq!(detail.borders.len(), 9);
        assert_eq!(detail.tld, vec![".de".to_string()]);
        assert_eq!(detail.languages.get("deu").map(String::as_str), Some("German"));
        assert_eq!(
            detail.currencies.get("EUR").and_then(|c| c.symbol.as_deref()),
            Some("€")
        );
        assert_eq!(
            detail.name.native_name.get("deu").map(|n| n.common.as_str()),
            Some("Deutschland")
        );
        assert!(detail.maps.google_maps.is_some());
    }

    #[test]
    fn detail_with_no_borders_defaults_empty() {
        let json = r#"{"cca3": "ISL", "name": {"common": "Iceland"}, "population": 366425, "region": "Europe"}"#;
        let detail: CountryDetail = serde_json::from_str(json).unwrap();
        assert!(detail.borders.is_empty());
        assert!(detail.currencies.is_empty());
        assert!(detail.maps.google_maps.is_none());
    }

    #[test]
    fn border_wire_projects_to_code_and_name() {
        let json = r#"[
            {"name": {"common": "France", "official": "French Republic"}, "cca3": "FRA"},
            {"name": {"common": "Germany", "official": "Federal Republic of Germany"}, "cca3": "DEU"}
        ]"#;
        let wire: Vec<BorderCountryWire> = serde_json::from_str(json).unwrap();
        let borders: Vec<BorderCountry> = wire.into_iter().map(BorderCountry::from).collect();
        assert_eq!(
            borders,
            vec![
                BorderCountry {
                    code: "FRA".to_string(),
                    name: "France".to_string()
                },
                BorderCountry {
                    code: "DEU".to_string(),
                    name: "Germany".to_string()
                },
            ]
        );
    }

    #[test]
    fn summary_serializes_back_with_wire_names() {
        let summary = CountrySummary {
            code: "FRA".to_string(),
            name: CountryName {
                common: "France".to_string(),
                ..CountryName::default()
            },
            population: 67_391_582,
            region: "Europe".to_string(),
            capital: vec!["Paris".to_string()],
            flags: None,
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"cca3\":\"FRA\""));
        assert!(!json.contains("\"code\""));
    }
}
