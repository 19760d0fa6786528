//! Basic Usage Example
//!
//! Builds a nested object schema, parses a typed record through it and shows
//! what shallow validation reports for the same tree.
//!
//! Run with: `cargo run --example basic_usage`

use chrono::Utc;
use schemata::{
    array, boolean, date, number, object, string, ArraySchema, BooleanSchema, DateSchema,
    Nullable, NumberSchema, ObjectSchema, Schema, Shape, StringSchema, Value,
};
use serde_json::json;

// =============================================================================
// Shapes
// =============================================================================

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

fn main() {
    println!("=== schemata Basic Usage ===\n");

    let schema = object(PersonShape {
        name: string().nullable().default(Some(String::new())),
        age: number().default(0.0),
        nested: object(NestedShape {
            name: date().nullable(),
            age: boolean(),
        }),
        arr: array(string()),
    });

    // =========================================================================
    // Example 1: Parsing a single property
    // =========================================================================
    println!("1. Parsing a single property:");
    let name = schema.properties().name.parse(Some("John".to_string()));
    println!("   name = {:?}\n", name);

    // =========================================================================
    // Example 2: Parsing the whole tree
    // =========================================================================
    println!("2. Parsing the whole tree:");
    let person: Person = schema.parse(PersonInput {
        name: Some("John".to_string()),
        age: 1.0,
        nested: NestedInput {
            name: Some(Utc::now()),
            age: true,
        },
        arr: vec!["John".to_string(), "Doe".to_string()],
    });
    println!("   {:?}\n", person);

    // =========================================================================
    // Example 3: Shallow validation
    // =========================================================================
    println!("3. Shallow validation:");
    let input = Value::from(json!({
        "name": "John",
        "age": 1,
        "nested": { "name": null, "age": true },
        "arr": ["John", "Doe"],
    }));
    report("object", schema.validate(input));
    report("object (string input)", schema.validate("John"));
    report("age", schema.properties().age.validate(1));
    report("arr", schema.properties().arr.validate(vec!["John", "Doe"]));
    report(
        "nested.name",
        schema.properties().nested.properties().name.validate(Utc::now()),
    );
    println!();

    // =========================================================================
    // Example 4: Exported definition
    // =========================================================================
    println!("4. Exported definition:");
    println!("{}", schema.definition().to_json_pretty());

    let standard = schema.standard();
    println!(
        "\nStandard Schema: version {} vendor {:?}",
        standard.version(),
        standard.vendor()
    );
}

fn report(label: &str, result: schemata::ValidationResult) {
    match result.into_result() {
        Ok(value) => println!("   {}: ok ({})", label, serde_json::to_string(&value).unwrap_or_default()),
        Err(err) => println!("   {}: {}", label, err),
    }
}
