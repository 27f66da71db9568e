use serde_json::{Map, Value, json};

pub fn summary_payload(cases: u64, deaths: u64, recovered: u64, affected: u64) -> Value {
    json!({
        "updated": 1_700_000_000_000u64,
        "cases": cases,
        "todayCases": 0,
        "deaths": deaths,
        "todayDeaths": 0,
        "recovered": recovered,
        "affectedCountries": affected
    })
}

/// A list element carrying the three tracked totals and zeroed daily counts
pub fn territory(name: &str, cases: u64, deaths: u64, recovered: u64) -> Value {
    json!({
        "country": name,
        "cases": cases,
        "todayCases": 0,
        "deaths": deaths,
        "todayDeaths": 0,
        "recovered": recovered,
        "todayRecovered": 0,
        "active": cases as i64 - deaths as i64 - recovered as i64
    })
}

pub fn list_payload(territories: Vec<Value>) -> Value {
    Value::Array(territories)
}

/// Historical payload with the series nested under `timeline`
pub fn timeline_payload(
    country: &str,
    cases: &[(&str, u64)],
    deaths: &[(&str, u64)],
    recovered: &[(&str, u64)],
) -> Value {
    json!({
        "country": country,
        "province": ["mainland"],
        "timeline": {
            "cases": series(cases),
            "deaths": series(deaths),
            "recovered": series(recovered)
        }
    })
}

fn series(points: &[(&str, u64)]) -> Value {
    let map: Map<String, Value> = points
        .iter()
        .map(|(date, value)| (date.to_string(), json!(value)))
        .collect();
    Value::Object(map)
}
