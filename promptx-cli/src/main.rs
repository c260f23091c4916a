//! Command-line interface for promptx
//! This binary parses prompt documents and prints the recognized structure,
//! extracted variables, quality metrics, a structure review, or a
//! transformed rendition.
//!
//! Usage:
//!   promptx `<path>` [--op `<operation>`]                  - Run one operation ('-' reads stdin)
//!   promptx `<path>` --op transform --transform `<name>`   - Rewrite the prompt

use clap::{Arg, ArgAction, Command};

fn main() {
    let matches = Command::new("promptx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and transforming prompt documents")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the prompt file, or '-' to read stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("op")
                .long("op")
                .short('o')
                .help("Operation: 'ast', 'variables', 'metrics', 'review' or 'transform'")
                .default_value("ast"),
        )
        .arg(
            Arg::new("transform")
                .long("transform")
                .short('t')
                .help("Transformation name (e.g., 'markdown_to_json', 'normalize_variables')"),
        )
        .arg(
            Arg::new("target-style")
                .long("target-style")
                .help("Placeholder syntax normalize_variables rewrites to (default: double_brace)"),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .help("Restrict variable extraction to one placeholder syntax"),
        )
        .arg(
            Arg::new("no-infer-types")
                .long("no-infer-types")
                .help("Report every variable as a plain string instead of inferring types")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let source = read_source(path);

    let op = matches.get_one::<String>("op").expect("op has a default value");
    match op.as_str() {
        "ast" => handle_ast_command(&source),
        "variables" => handle_variables_command(
            &source,
            matches.get_one::<String>("style"),
            matches.get_flag("no-infer-types"),
        ),
        "metrics" => handle_metrics_command(&source),
        "review" => handle_review_command(&source),
        "transform" => handle_transform_command(
            &source,
            matches.get_one::<String>("transform"),
            matches.get_one::<String>("target-style"),
        ),
        other => {
            eprintln!("Unknown operation '{}'", other);
            eprintln!("Available operations: ast, variables, metrics, review, transform");
            std::process::exit(1);
        }
    }
}

fn read_source(path: &str) -> String {
    use std::io::Read;

    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(1);
            });
        buffer
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading '{}': {}", path, e);
            std::process::exit(1);
        })
    }
}

/// Handle the ast operation
fn handle_ast_command(source: &str) {
    use promptx_parser::prompt::{ast_to_json, build_ast};

    let ast = build_ast(source);
    let formatted = serde_json::to_string_pretty(&ast_to_json(&ast)).unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        std::process::exit(1);
    });
    println!("{}", formatted);
}

/// Handle the variables operation
fn handle_variables_command(source: &str, style: Option<&String>, no_infer_types: bool) {
    use promptx_parser::prompt::{extract_variables, ExtractOptions};

    let options = ExtractOptions {
        style: style.map(|name| parse_style(name)),
        infer_types: !no_infer_types,
    };
    let extraction = extract_variables(source, &options);
    let formatted = serde_json::to_string_pretty(&extraction).unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        std::process::exit(1);
    });
    println!("{}", formatted);
}

/// Handle the metrics operation
fn handle_metrics_command(source: &str) {
    use promptx_analysis::compute_metrics;
    use promptx_parser::prompt::build_ast;

    let ast = build_ast(source);
    let metrics = compute_metrics(&ast, source);
    let formatted = serde_json::to_string_pretty(&metrics).unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        std::process::exit(1);
    });
    println!("{}", formatted);
}

/// Handle the review operation
fn handle_review_command(source: &str) {
    use promptx_analysis::review_structure;
    use promptx_parser::prompt::build_ast;

    let ast = build_ast(source);
    let report = review_structure(&ast, source);
    let formatted = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        std::process::exit(1);
    });
    println!("{}", formatted);
}

/// Handle the transform operation
fn handle_transform_command(source: &str, name: Option<&String>, target_style: Option<&String>) {
    use promptx_parser::prompt::build_ast;
    use promptx_transform::{TransformOptions, TransformRegistry};

    let registry = TransformRegistry::with_defaults();
    let name = name.unwrap_or_else(|| {
        eprintln!("The transform operation needs --transform <name>");
        print_available(&registry);
        std::process::exit(1);
    });

    let mut options = TransformOptions::default();
    if let Some(style) = target_style {
        options.target_style = parse_style(style);
    }

    let ast = build_ast(source);
    let result = registry
        .apply(source, &ast, name, &options)
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            print_available(&registry);
            std::process::exit(1);
        });
    let formatted = serde_json::to_string_pretty(&result).unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        std::process::exit(1);
    });
    println!("{}", formatted);
}

fn print_available(registry: &promptx_transform::TransformRegistry) {
    eprintln!("\nAvailable transformations:");
    for name in registry.names() {
        if let Ok(transform) = registry.get(&name) {
            eprintln!("  {} - {}", name, transform.description());
        }
    }
}

fn parse_style(name: &str) -> promptx_parser::prompt::PlaceholderStyle {
    promptx_parser::prompt::PlaceholderStyle::from_name(name).unwrap_or_else(|| {
        eprintln!("Unknown placeholder style '{}'", name);
        eprintln!("Available styles: double_brace, single_brace, template_literal, bracket_upper");
        std::process::exit(1);
    })
}
