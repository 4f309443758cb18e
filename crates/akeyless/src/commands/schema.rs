//! Schema command

use anyhow::Result;
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use crate::output;
use akeyless_core::ResourceSchema;
use akeyless_provider::{create_data_source, create_resource, DATA_SOURCE_TYPES, RESOURCE_TYPES};

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Resource or data source type to describe
    pub r#type: Option<String>,

    /// Describe the data source rather than the resource of that name
    #[arg(long)]
    pub data_source: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct TypeRow {
    name: &'static str,
    kind: &'static str,
    description: &'static str,
}

#[derive(Tabled)]
struct AttributeRow {
    name: &'static str,
    #[tabled(rename = "type")]
    kind: String,
    mode: &'static str,
    flags: String,
    description: &'static str,
}

pub fn run(args: SchemaArgs) -> Result<()> {
    match args.r#type.as_deref() {
        Some(name) => describe(name, args.data_source, args.json),
        None => list(args.json),
    }
}

fn all_schemas() -> Result<Vec<(&'static str, &'static ResourceSchema)>> {
    let mut schemas = Vec::new();
    for name in RESOURCE_TYPES {
        schemas.push(("resource", create_resource(name)?.schema()));
    }
    for name in DATA_SOURCE_TYPES {
        schemas.push(("data source", create_data_source(name)?.schema()));
    }
    Ok(schemas)
}

fn list(json: bool) -> Result<()> {
    let schemas = all_schemas()?;

    if json {
        let value: Vec<_> = schemas
            .iter()
            .map(|(kind, schema)| serde_json::json!({ "kind": kind, "schema": schema }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let rows: Vec<TypeRow> = schemas
        .iter()
        .map(|&(kind, schema)| TypeRow {
            name: schema.name,
            kind,
            description: schema.description,
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{}", table);
    Ok(())
}

fn describe(name: &str, data_source: bool, json: bool) -> Result<()> {
    let schema = if data_source {
        create_data_source(name)?.schema()
    } else {
        match create_resource(name) {
            Ok(resource) => resource.schema(),
            Err(_) => create_data_source(name)?.schema(),
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(schema)?);
        return Ok(());
    }

    output::header(schema.name);
    output::kv("description", schema.description);
    println!();

    let rows: Vec<AttributeRow> = schema
        .attributes
        .iter()
        .map(|attr| {
            let mode = if attr.required {
                "required"
            } else if attr.optional && attr.computed {
                "optional, computed"
            } else if attr.computed {
                "computed"
            } else {
                "optional"
            };
            let mut flags = Vec::new();
            if attr.force_new {
                flags.push("force-new".to_string());
            }
            if attr.sensitive {
                flags.push("sensitive".to_string());
            }
            if let Some(default) = &attr.default {
                flags.push(format!("default={}", default));
            }
            AttributeRow {
                name: attr.name,
                kind: serde_json::to_value(attr.kind)
                    .ok()
                    .and_then(|v| v.as_str().map(str::to_string))
                    .unwrap_or_default(),
                mode,
                flags: flags.join(", "),
                description: attr.description,
            }
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{}", table);
    Ok(())
}
