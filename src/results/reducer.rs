//! Reduce terms aggregation responses to suggestions and counts

use crate::query::aggregation_name;
use serde_json::Value;

/// Bucket array of `aggregations.unique_<field>.buckets`, if present
fn buckets<'a>(response: &'a Value, field: &str) -> Option<&'a Vec<Value>> {
    response
        .get("aggregations")
        .and_then(|aggs| aggs.get(aggregation_name(field)))
        .and_then(|agg| agg.get("buckets"))
        .and_then(|b| b.as_array())
}

/// Bucket keys in the order the engine returned them.
///
/// Missing or mistyped structure yields an empty list.
pub fn extract_suggestions(response: &Value, field: &str) -> Vec<String> {
    buckets(response, field)
        .map(|arr| {
            arr.iter()
                .filter_map(|bucket| bucket.get("key").and_then(|k| k.as_str()))
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Number of bucket objects; zero when the structure is missing.
pub fn extract_bucket_count(response: &Value, field: &str) -> usize {
    buckets(response, field)
        .map(|arr| arr.iter().filter(|b| b.is_object()).count())
        .unwrap_or(0)
}

/// Whether a `GET <index>/_mapping` response declares `<field>.keyword`.
///
/// The response is keyed by concrete index name, which differs from `index`
/// when an alias is queried, so every entry is inspected.
pub fn mapping_has_keyword(mapping: &Value, index: &str, field: &str) -> bool {
    let has_keyword = |entry: &Value| {
        entry
            .get("mappings")
            .and_then(|m| m.get("properties"))
            .and_then(|p| p.get(field))
            .and_then(|f| f.get("fields"))
            .and_then(|f| f.get("keyword"))
            .and_then(|k| k.get("type"))
            .and_then(|t| t.as_str())
            == Some("keyword")
    };

    if let Some(entry) = mapping.get(index) {
        return has_keyword(entry);
    }

    mapping
        .as_object()
        .map(|indices| indices.values().any(has_keyword))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_in_order() {
        let response = json!({
            "aggregations": {
                "unique_telepules": {
                    "buckets": [{"key": "Szeged"}, {"key": "Szentes"}]
                }
            }
        });
        assert_eq!(
            extract_suggestions(&response, "telepules"),
            vec!["Szeged", "Szentes"]
        );
    }

    #[test]
    fn test_missing_path_is_empty() {
        for response in [
            json!({}),
            json!({"aggregations": {}}),
            json!({"aggregations": {"unique_telepules": {}}}),
            json!({"aggregations": {"unique_other": {"buckets": [{"key": "x"}]}}}),
            json!({"aggregations": "oops"}),
            json!({"aggregations": {"unique_telepules": {"buckets": {"key": "x"}}}}),
            json!([1, 2, 3]),
            Value::Null,
        ] {
            assert!(extract_suggestions(&response, "telepules").is_empty());
            assert_eq!(extract_bucket_count(&response, "telepules"), 0);
        }
    }

    #[test]
    fn test_skips_mistyped_buckets() {
        let response = json!({
            "aggregations": {
                "unique_telepules": {
                    "buckets": [
                        {"key": "Pécs", "doc_count": 12},
                        {"key": 42},
                        "Eger",
                        {"doc_count": 3},
                        {"key": "Győr", "doc_count": 2}
                    ]
                }
            }
        });
        assert_eq!(extract_suggestions(&response, "telepules"), vec!["Pécs", "Győr"]);
        assert_eq!(extract_bucket_count(&response, "telepules"), 4);
    }

    #[test]
    fn test_count_hundred_buckets() {
        let buckets: Vec<Value> = (0..100)
            .map(|i| json!({"key": format!("hely {}", i), "doc_count": 1}))
            .collect();
        let response = json!({"aggregations": {"unique_telepules": {"buckets": buckets}}});
        assert_eq!(extract_bucket_count(&response, "telepules"), 100);
    }

    #[test]
    fn test_mapping_has_keyword() {
        let mapping = json!({
            "orszagos_cimlista": {
                "mappings": {
                    "properties": {
                        "telepules": {
                            "type": "text",
                            "fields": {"keyword": {"type": "keyword"}}
                        },
                        "kozter_nev": {"type": "text"}
                    }
                }
            }
        });
        assert!(mapping_has_keyword(&mapping, "orszagos_cimlista", "telepules"));
        assert!(!mapping_has_keyword(&mapping, "orszagos_cimlista", "kozter_nev"));
        assert!(mapping_has_keyword(&mapping, "cimlista_alias", "telepules"));
        assert!(!mapping_has_keyword(&json!({}), "orszagos_cimlista", "telepules"));
    }
}
