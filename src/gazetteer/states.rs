//! Postal abbreviation → state slug table (50 states + DC).

struct StateEntry {
    code: &'static str,
    slug: &'static str,
}

const STATES: &[StateEntry] = &[
    StateEntry {
        code: "AL",
        slug: "alabama",
    },
    StateEntry {
        code: "AK",
        slug: "alaska",
    },
    StateEntry {
        code: "AZ",
        slug: "arizona",
    },
    StateEntry {
        code: "AR",
        slug: "arkansas",
    },
    StateEntry {
        code: "CA",
        slug: "california",
    },
    StateEntry {
        code: "CO",
        slug: "colorado",
    },
    StateEntry {
        code: "CT",
        slug: "connecticut",
    },
    StateEntry {
        code: "DE",
        slug: "delaware",
    },
    StateEntry {
        code: "FL",
        slug: "florida",
    },
    StateEntry {
        code: "GA",
        slug: "georgia",
    },
    StateEntry {
        code: "HI",
        slug: "hawaii",
    },
    StateEntry {
        code: "ID",
        slug: "idaho",
    },
    StateEntry {
        code: "IL",
        slug: "illinois",
    },
    StateEntry {
        code: "IN",
        slug: "indiana",
    },
    StateEntry {
        code: "IA",
        slug: "iowa",
    },
    StateEntry {
        code: "KS",
        slug: "kansas",
    },
    StateEntry {
        code: "KY",
        slug: "kentucky",
    },
    StateEntry {
        code: "LA",
        slug: "louisiana",
    },
    StateEntry {
        code: "ME",
        slug: "maine",
    },
    StateEntry {
        code: "MD",
        slug: "maryland",
    },
    StateEntry {
        code: "MA",
        slug: "massachusetts",
    },
    StateEntry {
        code: "MI",
        slug: "michigan",
    },
    StateEntry {
        code: "MN",
        slug: "minnesota",
    },
    StateEntry {
        code: "MS",
        slug: "mississippi",
    },
    StateEntry {
        code: "MO",
        slug: "missouri",
    },
    StateEntry {
        code: "MT",
        slug: "montana",
    },
    StateEntry {
        code: "NE",
        slug: "nebraska",
    },
    StateEntry {
        code: "NV",
        slug: "nevada",
    },
    StateEntry {
        code: "NH",
        slug: "new-hampshire",
    },
    StateEntry {
        code: "NJ",
        slug: "new-jersey",
    },
    StateEntry {
        code: "NM",
        slug: "new-mexico",
    },
    StateEntry {
        code: "NY",
        slug: "new-york",
    },
    StateEntry {
        code: "NC",
        slug: "north-carolina",
    },
    StateEntry {
        code: "ND",
        slug: "north-dakota",
    },
    StateEntry {
        code: "OH",
        slug: "ohio",
    },
    StateEntry {
        code: "OK",
        slug: "oklahoma",
    },
    StateEntry {
        code: "OR",
        slug: "oregon",
    },
    StateEntry {
        code: "PA",
        slug: "pennsylvania",
    },
    StateEntry {
        code: "RI",
        slug: "rhode-island",
    },
    StateEntry {
        code: "SC",
        slug: "south-carolina",
    },
    StateEntry {
        code: "SD",
        slug: "south-dakota",
    },
    StateEntry {
        code: "TN",
        slug: "tennessee",
    },
    StateEntry {
        code: "TX",
        slug: "texas",
    },
    StateEntry {
        code: "UT",
        slug: "utah",
    },
    StateEntry {
        code: "VT",
        slug: "vermont",
    },
    StateEntry {
        code: "VA",
        slug: "virginia",
    },
    StateEntry {
        code: "WA",
        slug: "washington",
    },
    StateEntry {
        code: "WV",
        slug: "west-virginia",
    },
    StateEntry {
        code: "WI",
        slug: "wisconsin",
    },
    StateEntry {
        code: "WY",
        slug: "wyoming",
    },
    StateEntry {
        code: "DC",
        slug: "district-of-columbia",
    },
];

/// Look up the state slug for a postal abbreviation. Case-insensitive,
/// surrounding whitespace ignored.
pub fn state_slug(code: &str) -> Option<&'static str> {
    let code = code.trim();
    STATES
        .iter()
        .find(|s| s.code.eq_ignore_ascii_case(code))
        .map(|s| s.slug)
}
