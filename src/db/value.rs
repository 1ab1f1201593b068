// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Conversion between JSON document data and Firestore wire values.
//!
//! Documents are written and read as raw Firestore `Value`s rather than
//! through serde, so nulls (including null array elements) are stored as
//! `nullValue` and reads carry no injected metadata fields.
//!
//! Integers that fit in `i64` become `integerValue`; larger unsigned values
//! and all fractional numbers become `doubleValue`. Types JSON cannot express
//! are rendered on read as: timestamps as RFC 3339 strings, bytes as base64,
//! references as their resource path, geo points as
//! `{"latitude", "longitude"}`.

use crate::models::DocumentData;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::SecondsFormat;
use gcloud_sdk::google::firestore::v1::{value::ValueType, ArrayValue, MapValue, Value};
use serde_json::{json, Number, Value as Json};
use std::collections::HashMap;

/// Encode document data as Firestore document fields.
pub fn to_fields(data: &DocumentData) -> HashMap<String, Value> {
    data.iter()
        .map(|(key, value)| (key.clone(), to_value(value)))
        .collect()
}

/// Decode Firestore document fields into document data.
pub fn from_fields(fields: HashMap<String, Value>) -> DocumentData {
    fields
        .into_iter()
        .map(|(key, value)| (key, from_value(value)))
        .collect()
}

/// Pass data through a Firestore encode/decode cycle, yielding exactly what a
/// later read from Firestore would return.
pub fn normalize(data: &DocumentData) -> DocumentData {
    from_fields(to_fields(data))
}

pub fn to_value(value: &Json) -> Value {
    let value_type = match value {
        Json::Null => ValueType::NullValue(0),
        Json::Bool(b) => ValueType::BooleanValue(*b),
        Json::Number(n) => n
            .as_i64()
            .map(ValueType::IntegerValue)
            .or_else(|| n.as_f64().map(ValueType::DoubleValue))
            .unwrap_or(ValueType::NullValue(0)),
        Json::String(s) => ValueType::StringValue(s.clone()),
        Json::Array(items) => ValueType::ArrayValue(ArrayValue {
            values: items.iter().map(to_value).collect(),
        }),
        Json::Object(map) => ValueType::MapValue(MapValue {
            fields: to_fields(map),
        }),
    };

    Value {
        value_type: Some(value_type),
    }
}

pub fn from_value(value: Value) -> Json {
    match value.value_type {
        None | Some(ValueType::NullValue(_)) => Json::Null,
        Some(ValueType::BooleanValue(b)) => Json::Bool(b),
        Some(ValueType::IntegerValue(i)) => Json::from(i),
        // NaN and infinities have no JSON form
        Some(ValueType::DoubleValue(d)) => Number::from_f64(d).map_or(Json::Null, Json::Number),
        Some(ValueType::StringValue(s)) => Json::String(s),
        Some(ValueType::TimestampValue(ts)) => {
            chrono::DateTime::from_timestamp(ts.seconds, ts.nanos.max(0) as u32)
                .map_or(Json::Null, |t| {
                    Json::String(t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
                })
        }
        Some(ValueType::BytesValue(bytes)) => Json::String(BASE64.encode(bytes)),
        Some(ValueType::ReferenceValue(path)) => Json::String(path),
        Some(ValueType::GeoPointValue(point)) => json!({
            "latitude": point.latitude,
            "longitude": point.longitude,
        }),
        Some(ValueType::ArrayValue(array)) => {
            Json::Array(array.values.into_iter().map(from_value).collect())
        }
        Some(ValueType::MapValue(map)) => Json::Object(from_fields(map.fields)),
        #[allow(unreachable_patterns)]
        Some(_) => Json::Null,
    }
}
