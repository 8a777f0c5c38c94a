//! Creates profiles, activates one and prints its dump.
//!
//! Run with: `cargo run --example dump_profile [settings.cfg] [profile]`
//!
//! The settings file uses the `ice.config`, `ice.options`, `ice.slice` and
//! `ice.profiles` keys. Without one, a small demo definition set is written
//! to a temporary directory and used as the default profile.

use slicephp::ast::{
    BuiltinKind, ClassDef, ConstDef, DataMember, Definition, EnumDef, Module, Operation,
    ParamDecl, StructDef, Type,
};
use slicephp::prelude::*;
use tracing_subscriber::EnvFilter;

fn demo_definitions() -> Vec<Definition> {
    vec![
        Module::new("::Demo")
            .with(EnumDef::new("::Demo::Color", ["Red", "Green", "Blue"]))
            .with(
                StructDef::new("::Demo::Point")
                    .with_member(DataMember::new("x", BuiltinKind::Int))
                    .with_member(DataMember::new("y", BuiltinKind::Int)),
            )
            .with(
                ClassDef::interface("::Demo::Canvas").with_operation(
                    Operation::new("draw")
                        .with_param(ParamDecl::input("at", Type::Struct("::Demo::Point".into())))
                        .with_param(ParamDecl::input("color", Type::Enum("::Demo::Color".into())))
                        .with_param(ParamDecl::output("id", BuiltinKind::Long)),
                ),
            )
            .with(ConstDef::new(
                "::Demo::Greeting",
                BuiltinKind::String,
                "Hello, $world",
            ))
            .into(),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let dir = tempfile::tempdir()?;

    let settings = match args.first() {
        Some(path) => RuntimeSettings::load(path)?,
        None => {
            let file = dir.path().join("Demo.json");
            std::fs::write(&file, serde_json::to_string_pretty(&demo_definitions())?)?;
            RuntimeSettings::new()
                .with_options("--Ice.Trace.Network=1")
                .with_slice(format!("-I{} Demo.json", dir.path().display()))
        }
    };

    let mut registry = ProfileRegistry::new();
    registry.initialize(&settings)?;
    for profile in registry.profiles() {
        tracing::info!(
            "profile {}: {} classes, {} warnings",
            profile.name(),
            profile.classes().len(),
            profile.warnings().len()
        );
    }

    let name = args.get(1).map(String::as_str).unwrap_or_default();
    let mut host = CollectingHost::new();
    registry.activate(name, &["--Ice.Default.Locator=demo"], &mut host)?;

    println!("{}", registry.dump()?);

    let report = registry.teardown();
    tracing::info!(
        "released {} profiles, {} failures",
        report.released.len(),
        report.failures.len()
    );
    Ok(())
}
