//! Simple inspector for Siren documents.
//!
//! Usage: `cargo run --example inspect -- path/to/document.json`
//! Set `RUST_LOG=siren=trace` to see decoder classification.

use std::fs;

use siren::{
    Entity, EntityCore, SubEntity, Validate, canonical::format_fingerprint, collect_issues,
    decode_entity_slice, fingerprint,
};
use tracing_subscriber::EnvFilter;

fn format_rel(rel: &siren::Rel) -> String {
    if rel.as_slice().is_empty() {
        "<none>".to_string()
    } else {
        rel.as_slice().join(" ")
    }
}

fn print_core(core: &EntityCore, indent: usize) {
    let pad = " ".repeat(indent);

    if !core.class.is_empty() {
        println!("{pad}class: {}", core.class.join(", "));
    }
    if !core.title.is_empty() {
        println!("{pad}title: {}", core.title);
    }
    for (key, value) in &core.properties {
        let text = value.to_string();
        let preview: String = text.chars().take(60).collect();
        if text.chars().count() > 60 {
            println!("{pad}property {key} = {preview}...");
        } else {
            println!("{pad}property {key} = {preview}");
        }
    }
    for link in &core.links {
        println!("{pad}link [{}] -> {}", format_rel(&link.rel), link.href);
    }
    for action in &core.actions {
        println!("{pad}action {} {} {}", action.name, action.method, action.href);
        for field in &action.fields {
            println!("{pad}  field {} ({})", field.name, field.input_type);
        }
    }
    for sub in &core.entities {
        match sub {
            SubEntity::Link(link) => {
                println!("{pad}embedded link [{}] -> {}", format_rel(&link.rel), link.href);
            }
            SubEntity::Entity(entity) => {
                println!("{pad}embedded entity [{}]", format_rel(&entity.rel));
                print_core(&entity.core, indent + 2);
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "document.json".to_string());

    println!("Reading: {}", path);

    let data = fs::read(&path).expect("Failed to read file");
    println!("File size: {} bytes", data.len());

    let mut entity: Entity = decode_entity_slice(&data).expect("Failed to decode");

    println!("\n=== Entity ===");
    print_core(&entity.core, 0);

    println!("\n=== Validation ===");
    if entity.validate() {
        println!("valid");
    } else {
        for issue in collect_issues(&entity) {
            let at = if issue.path.is_empty() { "/" } else { issue.path.as_str() };
            println!("{at}: {} {}", issue.field, issue.message);
        }
    }

    println!("\nFingerprint: {}", format_fingerprint(&fingerprint(&entity)));
}
