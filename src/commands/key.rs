//! `briefcanvas key`: manage the stored API credential

use anyhow::{bail, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Password};

use crate::store::{mask_key, FileStore, KeyValueStore, API_KEY, API_KEY_ENV};

#[derive(Debug, Clone)]
pub enum KeySubcommand {
    /// Store a key; prompts when `value` is None
    Set { value: Option<String> },
    Show { reveal: bool },
    Clear,
}

pub fn execute_key(subcommand: KeySubcommand) -> Result<()> {
    let mut store = FileStore::default_location()?;
    run(subcommand, &mut store)
}

fn run(subcommand: KeySubcommand, store: &mut dyn KeyValueStore) -> Result<()> {
    match subcommand {
        KeySubcommand::Set { value } => {
            let value = match value {
                Some(value) => value,
                None => Password::with_theme(&ColorfulTheme::default())
                    .with_prompt("OpenAI API key")
                    .interact()?,
            };
            let value = value.trim();
            if value.is_empty() {
                bail!("API key is empty");
            }
            store.set(API_KEY, value)?;
            println!("{} Saved API key {}", style("✓").green(), mask_key(value));
        }
        KeySubcommand::Show { reveal } => match store.get(API_KEY)? {
            Some(key) => {
                let shown = if reveal { key.clone() } else { mask_key(&key) };
                println!("{} {}", style("→").cyan(), shown);
            }
            None if std::env::var(API_KEY_ENV).is_ok() => {
                println!("{} No stored key; using {}", style("→").cyan(), API_KEY_ENV);
            }
            None => {
                println!("{} No API key configured", style("✗").red());
            }
        },
        KeySubcommand::Clear => {
            store.remove(API_KEY)?;
            println!("{} Removed stored API key", style("✓").green());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_set_and_clear() {
        let mut store = MemoryStore::default();
        run(
            KeySubcommand::Set {
                value: Some("  sk-abcdefghijkl ".to_string()),
            },
            &mut store,
        )
        .unwrap();
        assert_eq!(store.get(API_KEY).unwrap().as_deref(), Some("sk-abcdefghijkl"));

        run(KeySubcommand::Clear, &mut store).unwrap();
        assert_eq!(store.get(API_KEY).unwrap(), None);
    }

    #[test]
    fn test_blank_key_rejected() {
        let mut store = MemoryStore::default();
        let result = run(
            KeySubcommand::Set {
                value: Some("   ".to_string()),
            },
            &mut store,
        );
        assert!(result.is_err());
    }
}
