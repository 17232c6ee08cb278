//! `skillbot fields` command - show the field catalog and weight table

use serde_json::json;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format_result;
use skillbot_core::error::Result;
use skillbot_core::format::escape_record_value;
use skillbot_core::recommend::{Field, FieldWeights, WeightTable};

/// Execute the fields command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let table = match ctx.optional_store()? {
        Some(store) => store.weight_table()?,
        None => WeightTable::default(),
    };

    output_by_format_result!(ctx.cli.format,
        json => {
            let fields: Vec<_> = Field::ALL
                .iter()
                .map(|field| {
                    json!({
                        "field": field,
                        "subfields": field.subfields(),
                        "weights": table.weights(*field),
                    })
                })
                .collect();
            print_json(&json!({ "weights_version": table.version, "fields": fields }))
        },
        human => {
            if !ctx.cli.quiet {
                println!("Weight table version {}", table.version);
                println!();
            }
            for field in Field::ALL {
                println!("{}", field.name());
                println!("  subfields: {}", field.subfields().join(", "));
                if let Some(weights) = table.weights(field) {
                    println!("  weights:   {}", describe_weights(weights));
                }
            }
        },
        records => {
            print_records_header("fields", &[("weights", table.version.to_string())]);
            for field in Field::ALL {
                println!(
                    "F {} subfields={}",
                    escape_record_value(field.name()),
                    escape_record_value(&field.subfields().join(","))
                );
            }
        }
    )
}

fn describe_weights(weights: &FieldWeights) -> String {
    weights
        .subjects
        .iter()
        .map(|(key, w)| format!("{}={:.2}", key.as_str(), w))
        .chain(weights.traits.iter().map(|(key, w)| format!("{}={:.2}", key, w)))
        .collect::<Vec<_>>()
        .join(" ")
}
