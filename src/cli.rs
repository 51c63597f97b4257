use crate::session::DEFAULT_PROMPT;
use clap::Parser;

/// Shell command line arguments
#[derive(Parser, Debug)]
#[command(name = "eafitos", version)]
#[command(about = "EAFITos: a small interactive shell", long_about = None)]
pub struct ShellArgs {
    /// Initial prompt text (at most 63 bytes are kept)
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Disable ANSI colors (also disabled when NO_COLOR is set)
    #[arg(long)]
    pub no_color: bool,

    /// Log filter for diagnostics written to stderr
    #[arg(long, env = "EAFITOS_LOG", default_value = "warn")]
    pub log_level: String,
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    pub color: bool,
    pub log_level: String,
}

impl Config {
    pub fn from_args(args: ShellArgs) -> Self {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            prompt: args.prompt,
            color: !args.no_color && !no_color_env,
            log_level: args.log_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            color: true,
            log_level: "warn".to_string(),
        }
    }
}
