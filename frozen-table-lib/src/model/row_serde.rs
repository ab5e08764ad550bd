//! Order-preserving deserialization of fetched records.
//!
//! `serde_json::Map` does not keep insertion order without extra features,
//! but column order decides which columns are pinned. Records are therefore
//! read through a visitor that collects `(key, value)` pairs as they appear.
//! Non-object records are kept as a marker so the dataset can report which
//! index was malformed instead of failing with a generic parse error.

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::de::IgnoredAny;
use serde::de::MapAccess;
use serde::de::SeqAccess;
use serde::de::Visitor;

/// One element of the fetched JSON array.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawRecord {
    /// A JSON object, fields in source order.
    Object(Vec<(String, serde_json::Value)>),
    /// Anything else, labelled with its JSON type.
    Other(&'static str),
}

impl<'de> Deserialize<'de> for RawRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawRecordVisitor)
    }
}

struct RawRecordVisitor;

impl<'de> Visitor<'de> for RawRecordVisitor {
    type Value = RawRecord;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON value representing a table row")
    }

    fn visit_map<M>(self, mut map: M) -> Result<RawRecord, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key::<String>()? {
            let value: serde_json::Value = map.next_value()?;
            fields.push((key, value));
        }
        Ok(RawRecord::Object(fields))
    }

    fn visit_seq<S>(self, mut seq: S) -> Result<RawRecord, S::Error>
    where
        S: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RawRecord::Other("array"))
    }

    fn visit_unit<E>(self) -> Result<RawRecord, E> {
        Ok(RawRecord::Other("null"))
    }

    fn visit_bool<E>(self, _: bool) -> Result<RawRecord, E> {
        Ok(RawRecord::Other("bool"))
    }

    fn visit_i64<E>(self, _: i64) -> Result<RawRecord, E> {
        Ok(RawRecord::Other("number"))
    }

    fn visit_u64<E>(self, _: u64) -> Result<RawRecord, E> {
        Ok(RawRecord::Other("number"))
    }

    fn visit_f64<E>(self, _: f64) -> Result<RawRecord, E> {
        Ok(RawRecord::Other("number"))
    }

    fn visit_str<E>(self, _: &str) -> Result<RawRecord, E> {
        Ok(RawRecord::Other("string"))
    }
}
