//! Tests for the schema layer: SerdeSchema coercion and RowSchema impls.

use serde::Deserialize;

use crate::schema::{RowSchema, SchemaViolation, SerdeSchema};

fn fields(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn serde_schema_deserializes_tuples() {
    let schema = SerdeSchema::<(String, u32)>::new();
    let record = schema
        .validate(&fields(&["Alice", "23"]))
        .expect("tuple row should validate");
    assert_eq!(record, ("Alice".into(), 23));
}

#[test]
fn serde_schema_deserializes_field_structs_in_order() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Reading {
        sensor: String,
        value: f64,
        ok: bool,
    }

    let schema = SerdeSchema::<Reading>::new();
    let record = schema
        .validate(&fields(&["thermo-1", "21.5", "true"]))
        .expect("struct row should validate");
    assert_eq!(
        record,
        Reading {
            sensor: "thermo-1".into(),
            value: 21.5,
            ok: true,
        }
    );
}

#[test]
fn serde_schema_vec_accepts_any_width() {
    let schema = SerdeSchema::<Vec<String>>::new();

    let narrow = schema.validate(&fields(&["a"])).expect("one field");
    let wide = schema
        .validate(&fields(&["a", "b", "c", "d"]))
        .expect("four fields");

    assert_eq!(narrow, vec!["a"]);
    assert_eq!(wide, vec!["a", "b", "c", "d"]);
}

#[test]
fn serde_schema_empty_field_is_none_for_options() {
    let schema = SerdeSchema::<(String, Option<u32>)>::new();

    let absent = schema.validate(&fields(&["Alice", ""])).expect("empty field");
    assert_eq!(absent, ("Alice".into(), None));

    let present = schema.validate(&fields(&["Bob", "9"])).expect("filled field");
    assert_eq!(present, ("Bob".into(), Some(9)));
}

#[test]
fn serde_schema_parses_signed_and_char() {
    let schema = SerdeSchema::<(i32, char)>::new();
    let record = schema
        .validate(&fields(&["-12", "x"]))
        .expect("signed and char should parse");
    assert_eq!(record, (-12, 'x'));
}

#[test]
fn serde_schema_reports_field_index_on_bad_coercion() {
    let schema = SerdeSchema::<(String, u32)>::new();

    let err = schema
        .validate(&fields(&["Alice", "twenty"]))
        .expect_err("non-numeric age should fail");
    match err {
        SchemaViolation::Field {
            index,
            value,
            expected,
        } => {
            assert_eq!(index, 1);
            assert_eq!(value, "twenty");
            assert_eq!(expected, "an unsigned integer");
        }
        other => panic!("expected Field violation, got {other:?}"),
    }
}

#[test]
fn serde_schema_rejects_bad_bool() {
    let schema = SerdeSchema::<(bool,)>::new();

    let err = schema
        .validate(&fields(&["yes"]))
        .expect_err("'yes' is not a bool literal");
    assert!(matches!(err, SchemaViolation::Field { index: 0, .. }));
}

#[test]
fn serde_schema_rejects_extra_fields() {
    let schema = SerdeSchema::<(String, u32)>::new();

    let err = schema
        .validate(&fields(&["Alice", "23", "extra"]))
        .expect_err("extra field should fail");
    assert_eq!(
        err,
        SchemaViolation::Arity {
            expected: 2,
            actual: 3,
        }
    );
}

#[test]
fn serde_schema_rejects_missing_fields() {
    let schema = SerdeSchema::<(String, u32)>::new();

    let err = schema
        .validate(&fields(&["Alice"]))
        .expect_err("missing field should fail");
    // Short rows surface serde's own length error.
    assert!(matches!(err, SchemaViolation::Other(_)));
}

#[test]
fn serde_schema_deserializes_unit_enum_variants() {
    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "lowercase")]
    enum Status {
        Active,
        Retired,
    }

    let schema = SerdeSchema::<(String, Status)>::new();
    let record = schema
        .validate(&fields(&["Alice", "active"]))
        .expect("variant name should deserialize");
    assert_eq!(record, ("Alice".into(), Status::Active));

    let err = schema
        .validate(&fields(&["Bob", "unknown"]))
        .expect_err("unknown variant should fail");
    assert!(matches!(err, SchemaViolation::Other(_)));
}

#[test]
fn closure_schemas_implement_row_schema() {
    let schema = |row: &[String]| match row {
        [single] => Ok(single.len()),
        _ => Err(SchemaViolation::Arity {
            expected: 1,
            actual: row.len(),
        }),
    };

    assert_eq!(schema.validate(&fields(&["hello"])), Ok(5));
    assert_eq!(
        schema.validate(&fields(&["a", "b"])),
        Err(SchemaViolation::Arity {
            expected: 1,
            actual: 2,
        })
    );
}

#[test]
fn schema_violation_messages_name_the_problem() {
    let arity = SchemaViolation::Arity {
        expected: 2,
        actual: 3,
    };
    assert_eq!(arity.to_string(), "expected 2 field(s), got 3");

    let field = SchemaViolation::Field {
        index: 1,
        value: "twenty".into(),
        expected: "an unsigned integer".into(),
    };
    assert_eq!(
        field.to_string(),
        "field 1 ('twenty'): expected an unsigned integer"
    );
}
