//! Devicedoc CLI - generate reference documentation for device modules.

use std::{path::PathBuf, process};

use clap::{Parser, Subcommand};
use devicedoc::{
    generator::DocsGenerator,
    loader::{ModuleLoader, SkipPolicy},
    resolver::MockResolver,
    tracing_config,
};

#[derive(Parser)]
#[command(name = "devicedoc")]
#[command(about = "Generate documentation for device-control modules")]
struct Cli {
    /// Omit skipped modules and members without any diagnostic
    #[arg(long, global = true)]
    quiet_skips: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate documentation files for the given module manifests
    Generate {
        /// Module manifest paths
        manifests: Vec<PathBuf>,

        #[arg(short, long, default_value = "docs/devices")]
        output: String,

        /// Re-read manifests from disk even if already loaded
        #[arg(long)]
        fresh: bool,
    },
    /// Generate documentation for a single device class
    Class {
        /// Module manifest path
        manifest: PathBuf,

        /// Device class name
        name: String,

        #[arg(short, long, default_value = "docs/devices")]
        output: String,
    },
    /// List the device classes declared in a module manifest
    List {
        /// Module manifest path
        manifest: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_config::init()?;

    let cli = Cli::parse();
    let skip_policy = if cli.quiet_skips {
        SkipPolicy::Silent
    } else {
        SkipPolicy::Warn
    };

    let resolver = MockResolver;
    let mut loader = ModuleLoader::new(&resolver).with_skip_policy(skip_policy);

    match cli.command {
        Commands::Generate {
            manifests,
            output,
            fresh,
        } => {
            let generator = DocsGenerator::new()
                .with_output_dir(output)
                .with_skip_policy(skip_policy)
                .with_fresh_load(fresh);

            if let Err(e) = generator.generate_all(&mut loader, &manifests) {
                eprintln!("{e}");
                process::exit(1);
            }
        }
        Commands::Class {
            manifest,
            name,
            output,
        } => {
            let generator = DocsGenerator::new()
                .with_output_dir(output)
                .with_skip_policy(skip_policy);

            if let Err(e) = generator.generate_class(&mut loader, &manifest, &name) {
                eprintln!("{e}");
                process::exit(1);
            }
        }
        Commands::List { manifest } => {
            let generator = DocsGenerator::new().with_skip_policy(skip_policy);

            match generator.list_classes(&mut loader, &manifest) {
                Ok(classes) => {
                    println!("Device classes:");
                    for class in classes {
                        println!("  - {class}");
                    }
                }
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}
