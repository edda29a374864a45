use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "provider": {
                "type": "object",
                "properties": {
                    "name": { "type": "string", "enum": ["openrouter", "openai-compatible"] },
                    "api_key": { "type": "string" },
                    "base_url": { "type": "string", "format": "uri" },
                    "referer": { "type": "string" },
                    "timeout_secs": { "type": "integer", "minimum": 1, "maximum": 600 }
                }
            },
            "candidates": {
                "type": "array",
                "items": { "$ref": "#/$defs/candidate" }
            },
            "auth": {
                "type": "object",
                "properties": {
                    "mode": { "type": "string", "enum": ["supabase", "static"] },
                    "supabase_url": { "type": "string" },
                    "anon_key": { "type": "string" },
                    "tokens": {
                        "type": "object",
                        "additionalProperties": { "type": "string" }
                    }
                }
            },
            "server": {
                "type": "object",
                "properties": {
                    "host": { "type": "string" },
                    "port": { "type": "integer", "minimum": 1, "maximum": 65535 },
                    "db": { "type": "string" }
                }
            }
        },
        "$defs": {
            "candidate": {
                "type": "object",
                "required": ["model"],
                "properties": {
                    "model": { "type": "string", "minLength": 1 },
                    "cost_per_1k_tokens": { "type": "number", "minimum": 0 }
                }
            }
        }
    })
});
