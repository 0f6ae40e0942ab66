use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;

use cfnspec_aws::registry;
use cfnspec_core::schema::{PropertySchema, ResourceTypeSchema, SchemaRegistry};
use cfnspec_core::template::Template;

#[derive(Parser)]
#[command(name = "cfnspec")]
#[command(about = "Typed CloudFormation resource schemas and template validation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a CloudFormation template against the schema corpus
    Validate {
        /// Path to template JSON file
        file: PathBuf,
    },
    /// Show the schema for a resource type
    Schema {
        /// CloudFormation type name (e.g., AWS::EC2::SecurityGroup)
        type_name: String,
    },
    /// List all resource types in the corpus
    List {
        /// Only list types for one service (e.g., EC2)
        #[arg(long)]
        service: Option<String>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { file } => run_validate(&file),
        Commands::Schema { type_name } => run_schema(&type_name),
        Commands::List { service } => run_list(service.as_deref()),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "cfnspec", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_validate(file: &PathBuf) -> Result<(), String> {
    let content = fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;

    let template = Template::from_json(&content).map_err(|e| format!("Parse error: {}", e))?;

    println!("{}", "Validating...".cyan());

    let registry = registry();
    match template.validate(&registry) {
        Ok(()) => {
            println!(
                "{}",
                format!(
                    "✓ {} resources validated successfully.",
                    template.resources.len()
                )
                .green()
                .bold()
            );
            let mut ids: Vec<&String> = template.resources.keys().collect();
            ids.sort();
            for id in ids {
                println!("  • {} ({})", id, template.resources[id].type_name);
            }
            Ok(())
        }
        Err(diagnostics) => {
            for diagnostic in &diagnostics {
                println!("  {} {}", "✗".red(), diagnostic);
            }
            println!();
            Err(format!("{} validation error(s)", diagnostics.len()))
        }
    }
}

fn run_schema(type_name: &str) -> Result<(), String> {
    let registry = registry();
    let schema = registry
        .lookup(type_name)
        .ok_or_else(|| unknown_type_message(type_name, &registry))?;

    println!("{}", schema.type_name.cyan().bold());
    if let Some(desc) = &schema.description {
        println!("  {}", desc);
    }
    if let Some(url) = &schema.documentation {
        println!("  {}", url.blue());
    }
    println!();

    println!("{}", "Properties:".bold());
    for prop in sorted_properties(schema) {
        print_property(prop, "  ");
    }

    if !schema.property_bags.is_empty() {
        let mut bag_names: Vec<&String> = schema.property_bags.keys().collect();
        bag_names.sort();
        for name in bag_names {
            let bag = &schema.property_bags[name];
            println!();
            println!("{}", format!("{}:", name).bold());
            let mut props: Vec<&PropertySchema> = bag.properties.values().collect();
            props.sort_by(|a, b| a.name.cmp(&b.name));
            for prop in props {
                print_property(prop, "  ");
            }
        }
    }

    Ok(())
}

fn run_list(service: Option<&str>) -> Result<(), String> {
    let registry = registry();
    let mut schemas: Vec<&ResourceTypeSchema> = registry
        .iter()
        .filter(|s| service.is_none_or(|svc| s.service().eq_ignore_ascii_case(svc)))
        .collect();
    schemas.sort_by(|a, b| a.type_name.cmp(&b.type_name));

    if schemas.is_empty() {
        return Err(format!(
            "No resource types found for service '{}'",
            service.unwrap_or("")
        ));
    }

    for schema in schemas {
        match &schema.description {
            Some(desc) => println!("{}  {}", schema.type_name.cyan(), desc.dimmed()),
            None => println!("{}", schema.type_name.cyan()),
        }
    }
    Ok(())
}

fn sorted_properties(schema: &ResourceTypeSchema) -> Vec<&PropertySchema> {
    let mut props: Vec<&PropertySchema> = schema.properties.values().collect();
    // Required properties first, then alphabetical
    props.sort_by(|a, b| b.required.cmp(&a.required).then(a.name.cmp(&b.name)));
    props
}

fn print_property(prop: &PropertySchema, indent: &str) {
    let required = if prop.required {
        " (required)".yellow().to_string()
    } else {
        String::new()
    };
    println!(
        "{}{}: {}{}",
        indent,
        prop.name.bold(),
        prop.prop_type.to_string().green(),
        required
    );
    if let Some(desc) = &prop.description {
        println!("{}  {}", indent, desc.dimmed());
    }
    println!("{}  Update: {}", indent, prop.update_type);
    if !prop.constraints.is_empty() {
        if let Some(pattern) = &prop.constraints.pattern {
            println!("{}  Pattern: {}", indent, pattern);
        }
        if prop.constraints.min_length.is_some() || prop.constraints.max_length.is_some() {
            println!(
                "{}  Length: {}..{}",
                indent,
                prop.constraints
                    .min_length
                    .map_or(String::new(), |v| v.to_string()),
                prop.constraints
                    .max_length
                    .map_or(String::new(), |v| v.to_string()),
            );
        }
        if prop.constraints.minimum.is_some() || prop.constraints.maximum.is_some() {
            println!(
                "{}  Range: {}..{}",
                indent,
                prop.constraints
                    .minimum
                    .map_or(String::new(), |v| v.to_string()),
                prop.constraints
                    .maximum
                    .map_or(String::new(), |v| v.to_string()),
            );
        }
        if !prop.constraints.allowed_values.is_empty() {
            println!(
                "{}  Allowed: {}",
                indent,
                prop.constraints.allowed_values.join(" | ")
            );
        }
    }
}

fn unknown_type_message(type_name: &str, registry: &SchemaRegistry) -> String {
    // Suggest types from the same service when the resource name is wrong
    let service = type_name.split("::").nth(1).unwrap_or("");
    let mut siblings: Vec<&str> = registry
        .iter()
        .filter(|s| s.service().eq_ignore_ascii_case(service))
        .map(|s| s.type_name.as_str())
        .collect();
    siblings.sort();

    if siblings.is_empty() {
        format!("Unknown resource type: {}", type_name)
    } else {
        format!(
            "Unknown resource type: {}. Known {} types: {}",
            type_name,
            service,
            siblings.join(", ")
        )
    }
}
