use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;

use hwreg::error::RegGenError;
use hwreg::{compile_to_json, generate_header, EmitOptions};

#[derive(Parser)]
#[command(name = "hwreg")]
#[command(about = "Generate C++ register accessors from JSON register definitions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a C++ header with enums, register accessors, or both
    Generate {
        /// Input `.json` definition file
        input: PathBuf,

        /// Output header (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Which declarations to put in the header
        #[arg(long = "type", value_enum)]
        kind: ArtifactKind,

        /// Namespace wrapping the generated declarations
        #[arg(long, default_value = "registers")]
        namespace: String,

        /// Header that provides the enums when only accessors are generated
        #[arg(long, default_value = "enums.hpp")]
        enum_header: String,
    },

    /// Print the compiled definitions as JSON
    Dump {
        /// Input `.json` definition file
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ArtifactKind {
    Enum,
    Accessors,
    Both,
}

impl ArtifactKind {
    fn describe(&self) -> &'static str {
        match self {
            ArtifactKind::Enum      => "enum",
            ArtifactKind::Accessors => "accessor",
            ArtifactKind::Both      => "register",
        }
    }
}

fn main() -> Result<(), RegGenError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate { input, output, kind, namespace, enum_header } => {
            let text = fs::read_to_string(input)?;
            let options = EmitOptions {
                emit_enums:     matches!(kind, ArtifactKind::Enum | ArtifactKind::Both),
                emit_accessors: matches!(kind, ArtifactKind::Accessors | ArtifactKind::Both),
                namespace:      namespace.clone(),
                enum_header:    enum_header.clone(),
            };
            // The header is complete before anything touches the filesystem
            let header = generate_header(&text, &options)?;
            if let Some(out_path) = output {
                if let Some(parent) = out_path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(out_path, &header)?;
                println!("Generated {} header written to {}", kind.describe(), out_path.display());
            } else {
                print!("{}", header);
            }
            Ok(())
        }

        Commands::Dump { input } => {
            let text = fs::read_to_string(input)?;
            let json = compile_to_json(&text)?;
            println!("{}", json);
            Ok(())
        }
    }
}
