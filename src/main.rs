use clap::{Parser, Subcommand};
use dirdex::{config, generate, list, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dirdex")]
#[command(version)]
#[command(about = "Static index page generator for content directories")]
#[command(long_about = "\
Static index page generator for content directories

Point dirdex at a directory of arbitrary assets and it writes an
index.html into that directory listing every file with its last-modified
date. Run it as a build step; the page needs no server-side directory
listing to browse.

  contents/
  ├── paper.pdf        # listed: paper.pdf  2024-01-05
  ├── slides.pdf       # listed: slides.pdf 2024-03-10
  ├── drafts/          # subdirectories are never listed
  └── index.html       # previous output — excluded, then overwritten

The content directory comes from --source, or `source` in dirdex.toml,
or the default \"contents\". Keep dirdex.toml outside the content
directory: files inside it get listed.

Run 'dirdex gen-config' to print a documented dirdex.toml.")]
struct Cli {
    /// Content directory (overrides `source` from the config file)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Config file
    #[arg(long, default_value = "dirdex.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the content directory and write index.html into it
    Build,
    /// Print the listing without writing anything
    List {
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the content directory without building
    Check,
    /// Print a stock dirdex.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let site = config::load_config(&cli.config)?;
    let source = cli.source.unwrap_or_else(|| site.source.clone());

    match cli.command {
        Command::Build => {
            let summary = generate::generate(&source, &site)?;
            output::print_build_output(&summary);
        }
        Command::List { json } => {
            let entries = list::list_files(&source)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                output::print_listing(&entries);
            }
        }
        Command::Check => {
            println!("==> Checking {}", source.display());
            let entries = list::list_files(&source)?;
            output::print_listing(&entries);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
