//! Init command implementation

use colored::Colorize;
use dialoguer::{Confirm, Input, Password, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Run the init command
///
/// Starts from the existing file when there is one. A blank credential
/// answer clears that credential.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let theme = ColorfulTheme::default();
    let path = Config::resolve_path(opts.config_ref())?;
    let mut config = match Config::load_from(path.clone()) {
        Ok(existing) => existing,
        Err(Error::Config(ConfigError::NotFound)) => Config::default(),
        Err(e) => return Err(e),
    };

    println!("{}", "Welcome to Groktutor!".bold().green());
    println!("Sources without credentials serve sample data.\n");

    config.sample_mode = Confirm::with_theme(&theme)
        .with_prompt("Use sample data only (no network calls)?")
        .default(config.sample_mode)
        .interact()?;

    if !config.sample_mode {
        config.reddit.client_id = prompt_plain(&theme, "Reddit client id")?;
        config.reddit.client_secret = prompt_secret(&theme, "Reddit client secret")?;
        config.twitter.bearer_token = prompt_secret(&theme, "Twitter bearer token")?;
        config.github.token = prompt_secret(&theme, "GitHub token")?;
        config.huggingface.token = prompt_secret(&theme, "HuggingFace token")?;
    }

    config.feed_limit = Input::with_theme(&theme)
        .with_prompt("Records per source")
        .default(config.feed_limit)
        .validate_with(|limit: &usize| {
            if *limit == 0 {
                Err("must be at least 1")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    config.validate()?;
    config.save_to(path.clone())?;

    println!(
        "\n{} Configuration saved to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );
    println!("Try {} next.", "groktutor feed all".cyan());
    Ok(())
}

fn prompt_plain(theme: &ColorfulTheme, prompt: &str) -> Result<Option<String>> {
    let value: String = Input::with_theme(theme)
        .with_prompt(format!("{} (blank to skip)", prompt))
        .allow_empty(true)
        .interact_text()?;
    Ok(non_blank(value))
}

fn prompt_secret(theme: &ColorfulTheme, prompt: &str) -> Result<Option<String>> {
    let value = Password::with_theme(theme)
        .with_prompt(format!("{} (blank to skip)", prompt))
        .allow_empty_password(true)
        .interact()?;
    Ok(non_blank(value))
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("   ".to_string()), None);
        assert_eq!(non_blank(" tok ".to_string()), Some("tok".to_string()));
    }
}
