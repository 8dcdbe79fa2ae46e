use clap::Parser;

use toolrank::{best_match, suggestions, Catalog, CatalogError, FacetFilter, Tool};

mod cli;
use cli::display::{badges, styled, BOLD, DIM};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CatalogError> {
    let catalog = Catalog::from_json_file(&cli.catalog)?;

    match cli.command {
        Commands::Search { query, limit, best } => {
            if best {
                match best_match(catalog.tools(), &query) {
                    Some(tool) => print_tool(tool),
                    None => println!("no match"),
                }
                return Ok(());
            }

            let hits = suggestions(catalog.tools(), &query, limit);
            if hits.is_empty() {
                println!("no matches for \"{}\"", query);
                return Ok(());
            }
            for (position, tool) in hits.iter().enumerate() {
                print!("{:>2}. ", position + 1);
                print_tool(tool);
            }
        }

        Commands::List {
            category,
            free,
            open_source,
            web3,
            sort,
            search,
        } => {
            let filter = FacetFilter {
                category,
                free_only: free,
                open_source_only: open_source,
                web3_only: web3,
            };
            let tools = catalog.query(&filter, sort.into(), &search);
            println!(
                "{} of {} tools",
                styled(BOLD, &tools.len().to_string()),
                catalog.len()
            );
            for tool in tools {
                print_tool(tool);
            }
        }

        Commands::Categories => {
            for category in catalog.categories() {
                println!("{}", category);
            }
        }
    }

    Ok(())
}

fn print_tool(tool: &Tool) {
    let mut line = styled(BOLD, &tool.name);
    if !tool.handle.is_empty() {
        line.push(' ');
        line.push_str(&styled(DIM, &format!("@{}", tool.handle)));
    }
    if !tool.category.is_empty() {
        line.push_str(&format!("  ({})", tool.category));
    }
    let tags = badges(tool.free, tool.open_source, tool.web3);
    if !tags.is_empty() {
        line.push_str("  ");
        line.push_str(&tags);
    }
    println!("{}", line);
    if !tool.website.is_empty() {
        println!("    {}", styled(DIM, &tool.website));
    }
}
