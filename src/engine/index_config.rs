//! Index settings and mappings for the address list index.

use serde_json::{json, Value};

/// Name of the edge n-gram analyzer used at index time.
pub const AUTOCOMPLETE_ANALYZER: &str = "autocomplete";

/// Build the settings and mappings for an index whose `field` is searchable
/// as-you-type and aggregatable through its `keyword` sub-field.
///
/// - `autocomplete` analyzer: standard tokenizer, lowercase, edge n-grams 1..20
/// - `field`: `text` with the analyzer above and a `keyword` sub-field
/// - `kozter_nev` (street name): plain `text`
pub fn index_body(field: &str) -> Value {
    json!({
        "settings": {
            "analysis": {
                "filter": {
                    "autocomplete_filter": {
                        "type": "edge_ngram",
                        "min_gram": 1,
                        "max_gram": 20
                    }
                },
                "analyzer": {
                    AUTOCOMPLETE_ANALYZER: {
                        "type": "custom",
                        "tokenizer": "standard",
                        "filter": ["lowercase", "autocomplete_filter"]
                    }
                }
            }
        },
        "mappings": {
            "properties": {
                field: {
                    "type": "text",
                    "analyzer": AUTOCOMPLETE_ANALYZER,
                    "search_analyzer": "standard",
                    "fields": {
                        "keyword": {
                            "type": "keyword"
                        }
                    }
                },
                "kozter_nev": {
                    "type": "text"
                }
            }
        }
    })
}
