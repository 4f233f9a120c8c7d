//! Injective cache keys for `memoize`.
//!
//! Arguments are encoded into a JSON tree and rendered as text. The tree
//! follows `serde_json`'s shape with a few tagged forms, so values that
//! plain JSON would merge keep separate keys:
//!
//! - non-finite floats become `{"$float": "NaN" | "Infinity" | "-Infinity"}`
//! - `Some(v)` becomes `{"$some": v}`, keeping `Some(None)` apart from `None`
//! - unit structs become `{"$unit": name}` (`Value::Undefined` is one)
//!
//! Map and struct keys are stored as their own JSON text (`"a"` becomes
//! `"\"a\""`), so user keys can never spell a tag. Entries are sorted, which
//! makes mappings that differ only in insertion order share a key.

use serde::Serialize;
use serde::ser::{self, Error as _};
use serde_json::{Map, Number, Value as Json};

type Error = serde_json::Error;

/// Encodes `arguments` into its cache key.
pub(crate) fn encode<T: Serialize + ?Sized>(arguments: &T) -> Result<String, Error> {
    arguments.serialize(KeyEncoder).map(|tree| tree.to_string())
}

fn tagged(tag: &str, value: Json) -> Json {
    let mut object = Map::new();
    object.insert(tag.to_owned(), value);
    Json::Object(object)
}

fn float(number: f64) -> Json {
    Number::from_f64(number).map_or_else(
        || {
            let name = if number.is_nan() {
                "NaN"
            } else if number.is_sign_positive() {
                "Infinity"
            } else {
                "-Infinity"
            };
            tagged("$float", Json::from(name))
        },
        Json::Number,
    )
}

struct KeyEncoder;

impl ser::Serializer for KeyEncoder {
    type Ok = Json;
    type Error = Error;
    type SerializeSeq = SequenceEncoder;
    type SerializeTuple = SequenceEncoder;
    type SerializeTupleStruct = SequenceEncoder;
    type SerializeTupleVariant = VariantEncoder<SequenceEncoder>;
    type SerializeMap = MapEncoder;
    type SerializeStruct = MapEncoder;
    type SerializeStructVariant = VariantEncoder<MapEncoder>;

    fn serialize_bool(self, flag: bool) -> Result<Json, Error> {
        Ok(Json::Bool(flag))
    }

    fn serialize_i8(self, number: i8) -> Result<Json, Error> {
        self.serialize_i64(i64::from(number))
    }

    fn serialize_i16(self, number: i16) -> Result<Json, Error> {
        self.serialize_i64(i64::from(number))
    }

    fn serialize_i32(self, number: i32) -> Result<Json, Error> {
        self.serialize_i64(i64::from(number))
    }

    fn serialize_i64(self, number: i64) -> Result<Json, Error> {
        Ok(Json::from(number))
    }

    fn serialize_u8(self, number: u8) -> Result<Json, Error> {
        self.serialize_u64(u64::from(number))
    }

    fn serialize_u16(self, number: u16) -> Result<Json, Error> {
        self.serialize_u64(u64::from(number))
    }

    fn serialize_u32(self, number: u32) -> Result<Json, Error> {
        self.serialize_u64(u64::from(number))
    }

    fn serialize_u64(self, number: u64) -> Result<Json, Error> {
        Ok(Json::from(number))
    }

    fn serialize_f32(self, number: f32) -> Result<Json, Error> {
        Ok(float(f64::from(number)))
    }

    fn serialize_f64(self, number: f64) -> Result<Json, Error> {
        Ok(float(number))
    }

    fn serialize_char(self, character: char) -> Result<Json, Error> {
        Ok(Json::String(character.to_string()))
    }

    fn serialize_str(self, text: &str) -> Result<Json, Error> {
        Ok(Json::String(text.to_owned()))
    }

    fn serialize_bytes(self, bytes: &[u8]) -> Result<Json, Error> {
        Ok(Json::Array(bytes.iter().copied().map(Json::from).collect()))
    }

    fn serialize_none(self) -> Result<Json, Error> {
        Ok(Json::Null)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Json, Error> {
        Ok(tagged("$some", value.serialize(self)?))
    }

    fn serialize_unit(self) -> Result<Json, Error> {
        Ok(Json::Null)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Json, Error> {
        Ok(tagged("$unit", Json::from(name)))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<Json, Error> {
        Ok(Json::from(variant))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Json, Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Json, Error> {
        Ok(tagged(variant, value.serialize(self)?))
    }

    fn serialize_seq(self, length: Option<usize>) -> Result<SequenceEncoder, Error> {
        Ok(SequenceEncoder {
            elements: Vec::with_capacity(length.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, length: usize) -> Result<SequenceEncoder, Error> {
        self.serialize_seq(Some(length))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        length: usize,
    ) -> Result<SequenceEncoder, Error> {
        self.serialize_seq(Some(length))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        length: usize,
    ) -> Result<VariantEncoder<SequenceEncoder>, Error> {
        Ok(VariantEncoder {
            variant,
            inner: self.serialize_seq(Some(length))?,
        })
    }

    fn serialize_map(self, length: Option<usize>) -> Result<MapEncoder, Error> {
        Ok(MapEncoder {
            entries: Vec::with_capacity(length.unwrap_or(0)),
            pending: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, length: usize) -> Result<MapEncoder, Error> {
        self.serialize_map(Some(length))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        length: usize,
    ) -> Result<VariantEncoder<MapEncoder>, Error> {
        Ok(VariantEncoder {
            variant,
            inner: self.serialize_map(Some(length))?,
        })
    }
}

struct SequenceEncoder {
    elements: Vec<Json>,
}

impl ser::SerializeSeq for SequenceEncoder {
    type Ok = Json;
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        self.elements.push(value.serialize(KeyEncoder)?);
        Ok(())
    }

    fn end(self) -> Result<Json, Error> {
        Ok(Json::Array(self.elements))
    }
}

impl ser::SerializeTuple for SequenceEncoder {
    type Ok = Json;
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Json, Error> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SequenceEncoder {
    type Ok = Json;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Json, Error> {
        ser::SerializeSeq::end(self)
    }
}

struct MapEncoder {
    entries: Vec<(String, Json)>,
    pending: Option<String>,
}

impl MapEncoder {
    fn push<T: Serialize + ?Sized>(&mut self, key: String, value: &T) -> Result<(), Error> {
        self.entries.push((key, value.serialize(KeyEncoder)?));
        Ok(())
    }

    fn finish(mut self) -> Json {
        self.entries.sort_by(|left, right| left.0.cmp(&right.0));
        Json::Object(self.entries.into_iter().collect())
    }
}

impl ser::SerializeMap for MapEncoder {
    type Ok = Json;
    type Error = Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), Error> {
        self.pending = Some(key.serialize(KeyEncoder)?.to_string());
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        let key = self
            .pending
            .take()
            .ok_or_else(|| Error::custom("map value serialized before its key"))?;
        self.push(key, value)
    }

    fn end(self) -> Result<Json, Error> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for MapEncoder {
    type Ok = Json;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Error> {
        self.push(Json::from(key).to_string(), value)
    }

    fn end(self) -> Result<Json, Error> {
        Ok(self.finish())
    }
}

struct VariantEncoder<E> {
    variant: &'static str,
    inner: E,
}

impl ser::SerializeTupleVariant for VariantEncoder<SequenceEncoder> {
    type Ok = Json;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        ser::SerializeSeq::serialize_element(&mut self.inner, value)
    }

    fn end(self) -> Result<Json, Error> {
        Ok(tagged(self.variant, ser::SerializeSeq::end(self.inner)?))
    }
}

impl ser::SerializeStructVariant for VariantEncoder<MapEncoder> {
    type Ok = Json;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Error> {
        ser::SerializeStruct::serialize_field(&mut self.inner, key, value)
    }

    fn end(self) -> Result<Json, Error> {
        Ok(tagged(self.variant, self.inner.finish()))
    }
}
