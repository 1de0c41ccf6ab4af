//! Positional serde deserializer over the fields of one row.
//!
//! Drives `T::deserialize` from left to right across the row: the row is
//! exposed as a sequence, each field as a string that parses itself on
//! demand when the target type asks for a number, bool, or char.

use serde::de::{self, DeserializeSeed, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;

use super::SchemaViolation;

/// Deserializer that walks the fields of one row.
pub(super) struct RowDeserializer<'de> {
    fields: &'de [String],
    index: usize,
}

impl<'de> RowDeserializer<'de> {
    pub(super) fn new(fields: &'de [String]) -> Self {
        Self { fields, index: 0 }
    }

    /// Reject rows with fields left over after the record was built.
    pub(super) fn end(&self) -> Result<(), SchemaViolation> {
        if self.index < self.fields.len() {
            return Err(SchemaViolation::Arity {
                expected: self.index,
                actual: self.fields.len(),
            });
        }
        Ok(())
    }
}

impl<'de> de::Deserializer<'de> for &mut RowDeserializer<'de> {
    type Error = SchemaViolation;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_seq(RowFields { de: self })
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    // Field structs are filled in declaration order.
    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct map enum identifier ignored_any
    }
}

struct RowFields<'a, 'de> {
    de: &'a mut RowDeserializer<'de>,
}

impl<'de> de::SeqAccess<'de> for RowFields<'_, 'de> {
    type Error = SchemaViolation;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>, Self::Error>
    where
        T: DeserializeSeed<'de>,
    {
        let Some(value) = self.de.fields.get(self.de.index) else {
            return Ok(None);
        };
        let index = self.de.index;
        self.de.index += 1;
        seed.deserialize(FieldDeserializer {
            value: value.as_str(),
            index,
        })
        .map(Some)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.de.fields.len() - self.de.index)
    }
}

/// Deserializer for a single field, coercing by parsing on demand.
struct FieldDeserializer<'de> {
    value: &'de str,
    index: usize,
}

impl FieldDeserializer<'_> {
    fn reject(&self, expected: &str) -> SchemaViolation {
        SchemaViolation::Field {
            index: self.index,
            value: self.value.to_string(),
            expected: expected.to_string(),
        }
    }
}

macro_rules! parsed_field {
    ($($method:ident => $ty:ty, $visit:ident, $expected:literal;)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value, Self::Error>
            where
                V: Visitor<'de>,
            {
                match self.value.parse::<$ty>() {
                    Ok(parsed) => visitor.$visit(parsed),
                    Err(_) => Err(self.reject($expected)),
                }
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for FieldDeserializer<'de> {
    type Error = SchemaViolation;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_str(self.value)
    }

    parsed_field! {
        deserialize_bool => bool, visit_bool, "a boolean";
        deserialize_i8 => i8, visit_i8, "an integer";
        deserialize_i16 => i16, visit_i16, "an integer";
        deserialize_i32 => i32, visit_i32, "an integer";
        deserialize_i64 => i64, visit_i64, "an integer";
        deserialize_i128 => i128, visit_i128, "an integer";
        deserialize_u8 => u8, visit_u8, "an unsigned integer";
        deserialize_u16 => u16, visit_u16, "an unsigned integer";
        deserialize_u32 => u32, visit_u32, "an unsigned integer";
        deserialize_u64 => u64, visit_u64, "an unsigned integer";
        deserialize_u128 => u128, visit_u128, "an unsigned integer";
        deserialize_f32 => f32, visit_f32, "a number";
        deserialize_f64 => f64, visit_f64, "a number";
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        let mut chars = self.value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => visitor.visit_char(c),
            _ => Err(self.reject("a single character")),
        }
    }

    // Empty field means absent for optional targets.
    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        if self.value.is_empty() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_enum(self.value.into_deserializer())
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        str string bytes byte_buf unit unit_struct seq tuple tuple_struct
        map struct identifier ignored_any
    }
}
