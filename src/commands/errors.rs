use std::path::PathBuf;
use std::process::ExitCode;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::form::FormError;
use crate::open::OpenError;

const EXIT_RUNTIME: u8 = 1;
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    Form(#[from] FormError),

    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Failed to open search in browser: {0}")]
    Open(#[from] OpenError),

    #[error("invalid search URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("could not read request {}: {source}", path.display())]
    RequestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid request JSON in {}: {source}", path.display())]
    RequestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("could not encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CommandError {
    /// Whether the error comes from user input rather than the environment.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(
            self,
            CommandError::Open(_) | CommandError::Encode(_) | CommandError::Output(_)
        )
    }

    pub fn exit_status(&self) -> u8 {
        if self.is_invalid_input() {
            EXIT_INVALID_INPUT
        } else {
            EXIT_RUNTIME
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// The error message plus a hint on how to fix it, where one applies.
    pub fn user_message(&self) -> String {
        match self {
            CommandError::Form(FormError::EmptyJobTitle) => format!("{self} (pass --title)"),
            CommandError::Form(FormError::NoSitesSelected) => format!(
                "{self} (pass --site, --sites-matching or --all-sites, or set JOBSCOUT_SITES)"
            ),
            CommandError::Catalog(_) => format!("{self} (see `jobscout sites` for the catalog)"),
            _ => self.to_string(),
        }
    }
}
