//! Render a table field to the log and apply a few gestures.

use std::fs::File;

use schema_fields::prelude::*;
use serde_json::json;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() {
    let log_file = File::create("schema-fields.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let schema = Schema::from_value(&json!({
        "type": "array",
        "x-component": "table",
        "maxItems": 4,
        "items": {
            "type": "object",
            "properties": {
                "name": { "type": "string", "title": "Name" },
                "score": { "type": "number", "title": "Score", "x-component": "rating" }
            }
        },
        "x-component-props": { "dragable": true, "operationsWidth": 120 }
    }))
    .expect("Invalid schema");

    let form = FormState::new(json!({
        "players": [
            { "name": "Ada", "score": 5 },
            { "name": "Grace", "score": 4 }
        ]
    }));
    let registry = FieldRegistry::builtin();
    let fields = SchemaField::new(&registry, &form, true);
    let path = FieldPath::parse("players");

    fields.handle_action(&schema, &path, RowAction::Add);
    fields.handle_action(&schema, &path, RowAction::Move { from: 2, to: 0 });

    let node = fields.render_field(&schema, &path);
    println!("{:#?}", node);
    println!("{}", form.get());
}
