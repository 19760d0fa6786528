//! Integration tests for the Shape derive macro.
//!
//! These tests verify that the generated records and `Shape` impls compose
//! with the `schemata` node types.

use chrono::{TimeZone, Utc};
use schemata::{
    array, boolean, date, number, object, string, ArraySchema, BooleanSchema, DateSchema,
    Nullable, NumberSchema, ObjectSchema, Schema, SchemaDef, SchemaKind, Shape, StringSchema,
    Value,
};
use serde_json::json;

#[derive(Debug, Shape)]
#[shape(input = "NestedInput", output = "Nested")]
struct NestedShape {
    name: Nullable<DateSchema>,
    age: BooleanSchema,
}

#[derive(Debug, Shape)]
#[shape(input = "PersonInput", output = "Person")]
struct PersonShape {
    name: Nullable<StringSchema>,
    age: NumberSchema,
    nested: ObjectSchema<NestedShape>,
    arr: ArraySchema<StringSchema>,
}

fn person_schema() -> ObjectSchema<PersonShape> {
    object(PersonShape {
        name: string().nullable().default(Some(String::new())),
        age: number().default(0.0),
        nested: object(NestedShape {
            name: date().nullable(),
            age: boolean(),
        }),
        arr: array(string()),
    })
}

// =============================================================================
// Generated Records
// =============================================================================

#[test]
fn test_parse_person_record() {
    let schema = person_schema();
    let when = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

    let person: Person = schema.parse(PersonInput {
        name: None,
        age: 42.0,
        nested: NestedInput {
            name: Some(when),
            age: true,
        },
        arr: vec!["a".to_string(), "b".to_string()],
    });

    assert_eq!(person.name, None);
    assert_eq!(person.age, 42.0);
    assert_eq!(person.nested.name, Some(when));
    assert!(person.nested.age);
    assert_eq!(person.arr, vec!["a", "b"]);
}

#[test]
fn test_property_parse_returns_input() {
    #[derive(Debug, Shape)]
    struct CoordShape {
        x: NumberSchema,
    }

    let schema = object(CoordShape { x: number() });
    assert_eq!(schema.properties().x.parse(5.0), 5.0);
    assert_eq!(schema.parse(CoordInput { x: 5.0 }), Coord { x: 5.0 });
}

#[test]
fn test_default_record_names() {
    #[derive(Debug, Shape)]
    struct PointShape {
        x: NumberSchema,
        y: NumberSchema,
    }

    #[derive(Debug, Shape)]
    struct Flags {
        enabled: BooleanSchema,
    }

    let point: Point = object(PointShape { x: number(), y: number() })
        .parse(PointInput { x: 1.0, y: -2.5 });
    assert_eq!(point, Point { x: 1.0, y: -2.5 });

    let flags: FlagsOutput =
        object(Flags { enabled: boolean() }).parse(FlagsInput { enabled: false });
    assert!(!flags.enabled);
}

#[test]
fn test_empty_shape() {
    #[derive(Debug, Shape)]
    struct EmptyShape {}

    let schema = object(EmptyShape {});
    assert_eq!(schema.parse(EmptyInput {}), Empty {});
    assert!(schema.property_names().is_empty());
    assert!(schema.validate(json!({})).is_success());
}

// =============================================================================
// Definitions
// =============================================================================

#[test]
fn test_property_names() {
    let schema = person_schema();
    assert_eq!(schema.property_names(), vec!["age", "arr", "name", "nested"]);
    assert_eq!(
        schema.properties().nested.property_names(),
        vec!["age", "name"]
    );
}

#[test]
fn test_property_names_are_sorted() {
    #[derive(Debug, Shape)]
    struct LetterShape {
        zeta: StringSchema,
        alpha: StringSchema,
    }

    let schema = object(LetterShape {
        zeta: string(),
        alpha: string(),
    });
    assert_eq!(schema.property_names(), vec!["alpha", "zeta"]);
}

#[test]
fn test_renamed_property() {
    #[derive(Debug, Shape)]
    struct EventShape {
        #[shape(rename = "createdAt")]
        created_at: DateSchema,
    }

    let schema = object(EventShape { created_at: date() });
    let defs = schema.properties().definitions();
    assert_eq!(defs.get("createdAt"), Some(&SchemaDef::new(SchemaKind::Date)));
    assert!(!defs.contains_key("created_at"));
}

#[test]
fn test_definition_builds_equivalent_tree() {
    let definition = person_schema().definition();
    let built = definition.build().unwrap();
    assert_eq!(built.definition(), definition);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_object_validation_is_shallow() {
    let schema = person_schema();

    let bad_fields = Value::from(json!({
        "name": 1,
        "age": "old",
        "nested": [],
        "arr": "not an array",
    }));
    let result = schema.validate(bad_fields.clone());
    assert!(result.is_success());
    assert_eq!(result.value(), Some(&bad_fields));

    assert!(schema.validate(Value::Null).is_success());
    assert_eq!(
        schema.validate("person").issues()[0].message,
        "Expected object but got string"
    );
}

#[test]
fn test_children_validate_independently() {
    let schema = person_schema();
    let shape = schema.properties();

    assert!(shape.age.validate(3).is_success());
    assert!(shape.name.validate("John").is_success());
    assert!(shape.name.validate(Value::Null).is_failure());
    assert!(shape.arr.validate(vec!["a"]).is_failure());
    assert!(shape.nested.properties().name.validate(Utc::now()).is_failure());
    assert!(shape.nested.properties().age.validate(true).is_success());
}
