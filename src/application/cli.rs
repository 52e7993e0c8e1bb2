use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Catalog;
use crate::domain::models::Recipe;
use crate::domain::models::RecipeId;
use crate::domain::services::actions::help_text;
use crate::infrastructure::catalog::http::HttpCatalog;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

fn format_recipe_line(recipe: &Recipe) -> String {
    let id = recipe
        .id
        .as_ref()
        .map(|id| return id.to_string())
        .unwrap_or_default();

    let mut res = format!("- (ID: {id}) {}, {}", recipe.title, recipe.summary());
    if !recipe.tags.is_empty() {
        res = format!("{res}, Tags: {}", recipe.tags.join(", "));
    }

    return res;
}

fn format_recipe(recipe: &Recipe) -> String {
    let mut lines = vec![Paint::new(&recipe.title).bold().to_string()];
    if let Some(description) = &recipe.description {
        lines.push(description.to_string());
    }

    lines.push("".to_string());
    lines.push("Ingredients:".to_string());
    for ingredient in recipe.ingredients.iter() {
        lines.push(format!("- {ingredient}"));
    }

    lines.push("".to_string());
    lines.push("Steps:".to_string());
    for (idx, step) in recipe.steps.iter().enumerate() {
        lines.push(format!("{}. {step}", idx + 1));
    }

    if !recipe.tags.is_empty() {
        lines.push("".to_string());
        lines.push(
            recipe
                .tags
                .iter()
                .map(|tag| return format!("#{tag}"))
                .collect::<Vec<String>>()
                .join(" "),
        );
    }

    return lines.join("\n");
}

async fn print_recipes_list() -> Result<()> {
    let recipes = HttpCatalog::default()
        .list()
        .await?
        .iter()
        .map(|recipe| {
            return format_recipe_line(recipe);
        })
        .collect::<Vec<String>>();

    if recipes.is_empty() {
        println!("No recipes yet. Start by creating one.");
    } else {
        println!("{}", recipes.join("\n"));
    }

    return Ok(());
}

async fn print_recipe(matches: &ArgMatches) -> Result<()> {
    let id = match matches.get_one::<String>("recipe-id") {
        Some(id) => RecipeId::new(id),
        None => bail!("A recipe id is required"),
    };

    let recipe = HttpCatalog::default().get(&id).await?;
    println!("{}", format_recipe(&recipe));

    return Ok(());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for KitchenPal")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running KitchenPal with environment variable RUST_LOG=kitchenpal")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn subcommand_recipes() -> Command {
    return Command::new("recipes")
        .about("Read the recipe catalog without starting the UI.")
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List all recipes with their ids."))
        .subcommand(
            Command::new("show")
                .about("Print a single recipe by ID.")
                .arg(
                    clap::Arg::new("recipe-id")
                        .short('i')
                        .long("id")
                        .help("Recipe ID")
                        .required(true),
                ),
        );
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("HOTKEYS:")
                || line.starts_with("RECIPE LIST:")
                || line.starts_with("CHAT:")
            {
                return Paint::new(line).underline().bold().to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("kitchenpal")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .subcommand(subcommand_recipes())
        .arg(
            Arg::new(ConfigKey::CatalogURL.to_string())
                .long(ConfigKey::CatalogURL.to_string())
                .env("KITCHENPAL_CATALOG_URL")
                .num_args(1)
                .help(format!("Base URL of the recipe service. [default: {}]", Config::default(ConfigKey::CatalogURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Model.to_string())
                .short('m')
                .long(ConfigKey::Model.to_string())
                .env("KITCHENPAL_MODEL")
                .num_args(1)
                .help("Model the assistant should use. The service picks its own default when unset.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::OpenAiKey.to_string())
                .long(ConfigKey::OpenAiKey.to_string())
                .env("KITCHENPAL_OPENAI_KEY")
                .num_args(1)
                .hide_env_values(true)
                .help("OpenAI API key used to pre-fill the key input. It is only held in memory and sent with each chat request.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("KITCHENPAL_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        );
}

/// Handles one-shot subcommands. Returns true when the UI should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = dirs::cache_dir()
                        .unwrap_or_else(std::env::temp_dir)
                        .join("kitchenpal/debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        Some(("recipes", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
            match subcmd_matches.subcommand() {
                Some(("list", _)) => {
                    print_recipes_list().await?;
                }
                Some(("show", show_matches)) => {
                    print_recipe(show_matches).await?;
                }
                _ => {
                    subcommand_recipes().print_long_help()?;
                }
            }

            return Ok(false);
        }
        _ => {
            Config::load(vec![&matches]).await?;
        }
    }

    return Ok(true);
}
