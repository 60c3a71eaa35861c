//! Selector re-encoding.
//!
//! Turns a validated [`Selector`] back into selector-file JSON. The output
//! round-trips through [`crate::validate::validate_selector`]; snapshot
//! dates come out sorted because the model stores them as an ordered set.

use serde_json::{json, Value};

use crate::model::Selector;
use crate::timestamp::{DATE_FORMAT, TIMESTAMP_FORMAT};

/// Encode a validated selector as selector-file JSON.
pub fn encode_selector(selector: &Selector) -> Value {
    let subsets: Vec<Value> = selector
        .subsets
        .iter()
        .map(|subset| {
            json!({
                "site": subset.site,
                "client_provider": subset.client_provider,
                "start_time": subset.start_time.format(TIMESTAMP_FORMAT).to_string(),
            })
        })
        .collect();

    let db_snapshots: Vec<String> = selector
        .ip_translation
        .db_snapshots
        .iter()
        .map(|date| date.format(DATE_FORMAT).to_string())
        .collect();

    json!({
        "file_format_version": selector.format_version,
        "duration": format!("{}d", selector.duration_days),
        "metric": selector.metric.name(),
        "ip_translation": {
            "strategy": selector.ip_translation.strategy.name(),
            "params": { "db_snapshots": db_snapshots },
        },
        "subsets": subsets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_selector;
    use serde_json::json;

    #[test]
    fn test_encode_round_trips() {
        let doc = json!({
            "file_format_version": 1,
            "duration": "45d",
            "metric": "upload_throughput",
            "ip_translation": {
                "strategy": "maxmind",
                "params": { "db_snapshots": ["2015-02-05"] }
            },
            "subsets": [
                {
                    "site": "mia01",
                    "client_provider": "twc",
                    "start_time": "2015-04-02T10:27:34Z"
                }
            ]
        });

        let selector = validate_selector(&doc).unwrap();
        let encoded = encode_selector(&selector);

        assert_eq!(encoded["duration"], "45d");
        assert_eq!(encoded["subsets"][0]["start_time"], "2015-04-02T10:27:34Z");
        assert_eq!(encoded["subsets"][0]["client_provider"], "Time Warner Cable");
        assert_eq!(encoded["ip_translation"]["params"]["db_snapshots"][0], "2015-02-05");

        let revalidated = validate_selector(&encoded).unwrap();
        assert_eq!(revalidated, selector);
    }

    #[test]
    fn test_encode_sorts_snapshots() {
        let doc = json!({
            "file_format_version": 1,
            "duration": "30d",
            "metric": "all",
            "ip_translation": {
                "strategy": "maxmind",
                "params": { "db_snapshots": ["2015-02-05", "2014-08-04"] }
            },
            "subsets": [
                {
                    "site": "lga02",
                    "client_provider": "comcast",
                    "start_time": "2014-02-01T00:00:00Z"
                }
            ]
        });

        let encoded = encode_selector(&validate_selector(&doc).unwrap());
        let dates = encoded["ip_translation"]["params"]["db_snapshots"]
            .as_array()
            .unwrap();
        assert_eq!(dates[0], "2014-08-04");
        assert_eq!(dates[1], "2015-02-05");
    }
}
