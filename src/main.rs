use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use hopboard::browser::{BrowserNavigator, Navigator};
use hopboard::redirect::{SystemClock, REDIRECT_DELAY_MS};
use hopboard::tui::App;

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 2;
const EXIT_BROWSER: i32 = 3;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the button board in the terminal (default if no subcommand)
    Launch,
    /// Print the button board, one numbered line per button
    List,
    /// Redirect to a button by its index number
    Open {
        /// Index number of the button (1-based, as shown in list)
        index: usize,
    },
    /// Write a starter config file
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "hopboard")]
#[command(about = "Terminal homepage: a board of link buttons", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/hopboard/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Launch);
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init = command {
        if let Err(e) = hopboard::config::run_init(config_path) {
            eprintln!("Init error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load the board once; buttons added to the file later are not picked up
    // until the next launch.
    let config = match hopboard::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        eprintln!("Loaded {} buttons from config", config.buttons.len());
        for (i, button) in config.buttons.iter().enumerate() {
            eprintln!("  {}. {} -> {}", i + 1, button.display_label(), button.target());
        }
    }

    match command {
        Commands::Launch => {
            if config.buttons.is_empty() {
                eprintln!("No buttons configured in config file.");
                eprintln!("Add buttons to ~/.config/hopboard/config.yaml:");
                eprintln!("  buttons:");
                eprintln!("    - label: Posts");
                eprintln!("      url: http://localhost:3002/posts");
                std::process::exit(EXIT_CONFIG);
            }

            let app = App::new(
                config.buttons,
                Box::new(BrowserNavigator),
                Box::new(SystemClock),
                cli.verbose,
            );

            if let Err(e) = hopboard::tui::run_tui(app).await {
                eprintln!("TUI error: {}", e);
                std::process::exit(EXIT_BROWSER);
            }
        }
        Commands::List => {
            let use_colors = hopboard::output::should_use_colors();
            println!(
                "{}",
                hopboard::output::format_button_list(&config.buttons, use_colors)
            );
        }
        Commands::Open { index } => {
            // Validate index bounds (1-based)
            if index < 1 || index > config.buttons.len() {
                eprintln!(
                    "Invalid index {}. Must be between 1 and {}.",
                    index,
                    config.buttons.len()
                );
                std::process::exit(EXIT_CONFIG);
            }

            let button = &config.buttons[index - 1];

            // Same sequence as the board: announce, wait, navigate.
            println!("Redirecting to {}...", button.target());
            tokio::time::sleep(Duration::from_millis(REDIRECT_DELAY_MS)).await;

            if let Err(e) = BrowserNavigator.go_to(button.target()) {
                eprintln!("Failed to open browser: {}", e);
                std::process::exit(EXIT_BROWSER);
            }
        }
        Commands::Init => unreachable!("handled above"),
    }

    std::process::exit(EXIT_SUCCESS);
}
