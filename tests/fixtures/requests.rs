use serde_json::{json, Value};

/// Body for creating the curry recipe
pub fn chicken_curry() -> Value {
    json!({
        "name": "Chicken Curry",
        "ingredients": ["chicken thighs", "curry powder", "cream"]
    })
}

/// Body replacing a recipe with the spinach dip
pub fn spinach_dip(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Spinach Dip",
        "ingredients": ["cream cheese", "spinach", "cheese"]
    })
}
