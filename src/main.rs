use clap::{Parser, Subcommand};
use log::error;
use recipe_lookup::{
    load_config, random_gif, search_recipes, EmptyTokens, GifLookup, GiphyClient,
    RecipePuppyClient, RecipeSearch,
};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "recipe-lookup", version, about = "Look up recipes and GIFs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search recipes by ingredients and print them with sorted ingredient lists
    Recipes {
        /// Ingredients to search for; each may be a comma-separated list
        #[arg(required = true)]
        ingredients: Vec<String>,
    },
    /// Print a random GIF for a tag
    Gif {
        tag: String,
    },
}

fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let config = load_config()?;

    match cli.command {
        Command::Recipes { ingredients } => {
            let client = RecipePuppyClient::new(&config.recipes)?;
            let provider: &dyn RecipeSearch = &client;
            let ingredients: Vec<&str> = ingredients.iter().map(String::as_str).collect();
            let policy = EmptyTokens::from_drop_flag(config.recipes.drop_empty_ingredients);

            let recipes = search_recipes(provider, &ingredients, policy)?;
            Ok(serde_json::to_string_pretty(&recipes)?)
        }
        Command::Gif { tag } => {
            let client = GiphyClient::new(&config.giphy)?;
            let provider: &dyn GifLookup = &client;

            let gif = random_gif(provider, &tag)?;
            Ok(serde_json::to_string_pretty(&gif)?)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
