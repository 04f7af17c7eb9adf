//! Nationality lookup for player rows.
//!
//! Backend rows carry whatever the player typed as nationality, which may be
//! a code ("PT") or a name ("portugal").

use phf::phf_ordered_map;

/// Country code to display name, in lookup priority order
static COUNTRIES: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "PT" => "Portugal",
    "ES" => "Spain",
    "FR" => "France",
    "DE" => "Germany",
    "IT" => "Italy",
    "ENG" => "England",
    "GB" => "United Kingdom",
    "NL" => "Netherlands",
    "BE" => "Belgium",
    "HR" => "Croatia",
    "PL" => "Poland",
    "UA" => "Ukraine",
    "SE" => "Sweden",
    "NO" => "Norway",
    "DK" => "Denmark",
    "FI" => "Finland",
    "CH" => "Switzerland",
    "AT" => "Austria",
    "GR" => "Greece",
    "CZ" => "Czech Republic",
    "RO" => "Romania",
    "HU" => "Hungary",
    "RS" => "Serbia",
    "SI" => "Slovenia",
    "SK" => "Slovakia",
    "BA" => "Bosnia",
    "IS" => "Iceland",
    "IE" => "Ireland",
    "SCT" => "Scotland",
    "WLS" => "Wales",
    "RU" => "Russia",
    "BG" => "Bulgaria",
    "AL" => "Albania",
    "ME" => "Montenegro",
    "MK" => "North Macedonia",
    "XK" => "Kosovo",
    "MD" => "Moldova",
    "BY" => "Belarus",
    "LT" => "Lithuania",
    "LV" => "Latvia",
    "EE" => "Estonia",
    "LU" => "Luxembourg",
    "MT" => "Malta",
    "CY" => "Cyprus",
    "TR" => "Turkey",
    "AZ" => "Azerbaijan",
    "GE" => "Georgia",
    "AM" => "Armenia",
    "IR" => "Iran",
    "IQ" => "Iraq",
    "SA" => "Saudi Arabia",
    "AE" => "United Arab Emirates",
    "QA" => "Qatar",
    "KW" => "Kuwait",
    "BH" => "Bahrain",
    "OM" => "Oman",
    "YE" => "Yemen",
    "JO" => "Jordan",
    "LB" => "Lebanon",
    "SY" => "Syria",
    "PS" => "Palestine",
    "IL" => "Israel",
    "JP" => "Japan",
    "KR" => "South Korea",
    "KP" => "North Korea",
    "CN" => "China",
    "TW" => "Taiwan",
    "HK" => "Hong Kong",
    "IN" => "India",
    "PK" => "Pakistan",
    "BD" => "Bangladesh",
    "NP" => "Nepal",
    "LK" => "Sri Lanka",
    "AF" => "Afghanistan",
    "ID" => "Indonesia",
    "TH" => "Thailand",
    "VN" => "Vietnam",
    "PH" => "Philippines",
    "MY" => "Malaysia",
    "SG" => "Singapore",
    "MM" => "Myanmar",
    "KH" => "Cambodia",
    "LA" => "Laos",
    "KZ" => "Kazakhstan",
    "UZ" => "Uzbekistan",
    "TM" => "Turkmenistan",
    "KG" => "Kyrgyzstan",
    "TJ" => "Tajikistan",
    "MN" => "Mongolia",
    "US" => "United States",
    "CA" => "Canada",
    "MX" => "Mexico",
    "BR" => "Brazil",
    "AR" => "Argentina",
    "CO" => "Colombia",
    "CL" => "Chile",
    "PE" => "Peru",
    "VE" => "Venezuela",
    "EC" => "Ecuador",
    "UY" => "Uruguay",
    "PY" => "Paraguay",
    "BO" => "Bolivia",
    "CR" => "Costa Rica",
    "PA" => "Panama",
    "JM" => "Jamaica",
    "CU" => "Cuba",
    "DO" => "Dominican Republic",
    "PR" => "Puerto Rico",
    "HN" => "Honduras",
    "SV" => "El Salvador",
    "GT" => "Guatemala",
    "NI" => "Nicaragua",
    "TT" => "Trinidad and Tobago",
    "HT" => "Haiti",
    "SR" => "Suriname",
    "GY" => "Guyana",
    "MA" => "Morocco",
    "DZ" => "Algeria",
    "TN" => "Tunisia",
    "LY" => "Libya",
    "EG" => "Egypt",
    "SD" => "Sudan",
    "NG" => "Nigeria",
    "GH" => "Ghana",
    "SN" => "Senegal",
    "CM" => "Cameroon",
    "CI" => "Ivory Coast",
    "ZA" => "South Africa",
    "KE" => "Kenya",
    "TZ" => "Tanzania",
    "UG" => "Uganda",
    "ET" => "Ethiopia",
    "CD" => "DR Congo",
    "ML" => "Mali",
    "BF" => "Burkina Faso",
    "NE" => "Niger",
    "TD" => "Chad",
    "AO" => "Angola",
    "MZ" => "Mozambique",
    "ZW" => "Zimbabwe",
    "ZM" => "Zambia",
    "BW" => "Botswana",
    "NA" => "Namibia",
    "RW" => "Rwanda",
    "SO" => "Somalia",
    "MG" => "Madagascar",
    "MU" => "Mauritius",
    "CV" => "Cape Verde",
    "GM" => "Gambia",
    "GN" => "Guinea",
    "LR" => "Liberia",
    "SL" => "Sierra Leone",
    "TG" => "Togo",
    "BJ" => "Benin",
    "GA" => "Gabon",
    "GQ" => "Equatorial Guinea",
    "CF" => "Central African Republic",
    "AU" => "Australia",
    "NZ" => "New Zealand",
    "FJ" => "Fiji",
    "PG" => "Papua New Guinea",
    "WS" => "Samoa",
    "TO" => "Tonga",
};

/// Country code and name matched by `find_country`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

/// Resolve free-form nationality text to a known country
///
/// Exact code or name matches win; otherwise the first country whose name
/// contains the input (or is contained in it) is returned.
pub fn find_country(input: &str) -> Option<Country> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some((code, name)) = COUNTRIES.get_entry(needle.to_uppercase().as_str()) {
        return Some(Country { code: *code, name: *name });
    }

    let entries = || {
        COUNTRIES
            .entries()
            .map(|(code, name)| Country { code: *code, name: *name })
    };

    entries()
        .find(|c| c.name.to_lowercase() == needle)
        .or_else(|| {
            entries().find(|c| {
                let name = c.name.to_lowercase();
                name.contains(&needle) || needle.contains(&name)
            })
        })
}

/// Short label for a nationality column: the country code when known,
/// otherwise the raw text
pub fn nationality_label(input: &str) -> String {
    match find_country(input) {
        Some(country) => country.code.to_string(),
        None => input.trim().to_string(),
    }
}
