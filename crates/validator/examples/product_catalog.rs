//! Validating a product catalog before it is handed to downstream
//! filtering and search tooling.
//!
//! Run: `cargo run -p tessera-validator --example product_catalog`

use serde_json::json;
use tessera_validator::prelude::*;

/// One product record: name, category, price, rating, stock flag.
fn product_schema() -> ObjectValidator {
    Schema::object([
        ("name", Schema::string().min_length(1).boxed()),
        ("category", Schema::string().min_length(1).boxed()),
        (
            "price",
            Schema::number()
                .min_value(0.0)
                .with_message("Price must be a non-negative number")
                .boxed(),
        ),
        (
            "rating",
            Schema::number().min_value(0.0).max_value(5.0).boxed(),
        ),
        ("in_stock", Schema::boolean().boxed()),
    ])
    .strict()
}

fn main() {
    let catalog = Schema::array(product_schema()).min_length(1);

    let clean = Value::from(json!([
        {"name": "Wireless Headphones", "category": "Electronics",
         "price": 99.99, "rating": 4.5, "in_stock": true},
        {"name": "Yoga Mat", "category": "Fitness",
         "price": 29.99, "rating": 4.3, "in_stock": true},
    ]));

    println!("clean catalog: {}", catalog.validate(&clean));

    let dirty = Value::from(json!([
        {"name": "Blender", "category": "Kitchen",
         "price": -10, "rating": 4.2, "in_stock": true},
        {"name": "", "category": "Books",
         "price": 14.99, "rating": 7, "in_stock": "yes",
         "discount": 0.2},
    ]));

    let report = catalog.validate(&dirty);
    println!("dirty catalog:");
    for error in report.errors() {
        println!("  - {error}");
    }
}
