use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{ensure_config_dir, get_config_path};

/// Starter board pointing at the local services a homepage like this usually
/// fronts. Edit freely after generation.
const STARTER_CONFIG: &str = "\
# hopboard button board. Each button needs a label and a destination URL.
buttons:
  - label: Posts
    url: http://localhost:3002/posts
  - label: Todos
    url: http://localhost:3001/todos
  - label: Food
    url: http://localhost:3003/food
";

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    print!("{} [{}]: ", message, hint);
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;

    let input = input.trim().to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Write a starter config, prompting before overwriting an existing one.
///
/// If `path` is Some, writes there; otherwise uses the default config path.
pub fn run_init(path: Option<PathBuf>) -> Result<()> {
    let config_path = match path {
        Some(p) => p,
        None => {
            ensure_config_dir()?;
            get_config_path()
        }
    };

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!("{} already exists. Overwrite?", config_path.display()),
            false,
        )?;
        if !overwrite {
            println!("Keeping existing config.");
            return Ok(());
        }
    }

    std::fs::write(&config_path, STARTER_CONFIG)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!("Wrote starter config to {}", config_path.display());
    println!("Edit it to add your own buttons, then run `hopboard`.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::STARTER_CONFIG;
    use crate::config::Config;

    #[test]
    fn test_starter_config_is_valid_yaml() {
        let config: Config = serde_saphyr::from_str(STARTER_CONFIG).unwrap();
        assert_eq!(config.buttons.len(), 3);
        assert!(config.buttons.iter().all(|b| b.url.is_some()));
    }
}
