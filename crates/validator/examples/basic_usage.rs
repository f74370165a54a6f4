//! Building a schema and inspecting a validation report.
//!
//! Run: `cargo run -p tessera-validator --example basic_usage`

use serde_json::json;
use tessera_validator::prelude::*;

fn main() -> Result<(), ValidationError> {
    let user = Schema::object([
        ("name", Schema::string().min_length(2).max_length(50).boxed()),
        (
            "email",
            Schema::string()
                .pattern_str(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?
                .boxed(),
        ),
        (
            "age",
            Schema::number()
                .integer()
                .min_value(0.0)
                .max_value(150.0)
                .optional()
                .boxed(),
        ),
        ("is_active", Schema::boolean().boxed()),
        ("tags", Schema::array(Schema::string()).min_length(1).boxed()),
        ("signup_date", Schema::date().optional().boxed()),
    ]);

    let good = Value::from(json!({
        "name": "John Doe",
        "email": "john@example.com",
        "age": 30,
        "is_active": true,
        "tags": ["developer", "rust"],
        "signup_date": "2024-06-01"
    }));
    println!("good input:  {}", user.validate(&good));

    let bad = Value::from(json!({
        "name": "J",
        "email": "not-an-email",
        "age": -5,
        "is_active": "yes",
        "tags": []
    }));
    println!("bad input:   {}", user.validate(&bad));

    Ok(())
}
