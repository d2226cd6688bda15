use anyhow::Result;
use ldedit_core::prelude::*;
use serde::Serialize;

use super::Setup;
use crate::output;

#[derive(Debug, Serialize)]
struct TypeSummary<'a> {
    #[serde(rename = "type")]
    type_name: &'a str,
    properties: usize,
}

pub fn run(setup: &Setup, name: Option<&str>) -> Result<()> {
    match name {
        None => list(&setup.catalog),
        Some(name) => {
            let schema = setup
                .catalog
                .get(name)
                .ok_or_else(|| LdError::unknown_type(name))?;
            describe(schema)
        }
    }
}

fn list(catalog: &Catalog) -> Result<()> {
    let types: Vec<TypeSummary<'_>> = catalog
        .iter()
        .map(|s| TypeSummary {
            type_name: &s.type_name,
            properties: s.properties.len(),
        })
        .collect();

    output::emit(&types, |types| {
        for t in types {
            println!("{:<16} {} properties", t.type_name, t.properties);
        }
        Ok(())
    })
}

fn describe(schema: &SchemaDefinition) -> Result<()> {
    output::emit(schema, |schema| {
        println!("{}", schema.type_name);
        for p in &schema.properties {
            println!("  {:<20} {}", p.name, p.kind);
        }
        Ok(())
    })
}
