use clap::{builder::BoolishValueParser, ArgAction, Args, Parser, Subcommand};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

/// CLI to interact with OpenRouter-compatible LLM APIs
#[derive(Parser, Debug)]
#[command(
    name = "openrouter",
    version,
    long_about = "A fast, ergonomic CLI to chat with LLMs via OpenRouter-compatible APIs."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// API base URL (OpenRouter-compatible)
    #[arg(long, global = true, env = "OPENROUTER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// API key
    #[arg(long, global = true, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model id
    #[arg(long, global = true, env = "OPENROUTER_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Sampling temperature, 0 leaves it to the server
    #[arg(long, global = true, env = "OPENROUTER_TEMPERATURE", default_value_t = 0.7)]
    pub temperature: f64,

    /// Stream responses when supported
    #[arg(
        long,
        global = true,
        env = "OPENROUTER_STREAM",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub stream: bool,

    /// Seconds to wait for a complete answer, or for response headers when streaming
    #[arg(long, global = true, env = "OPENROUTER_TIMEOUT", default_value_t = 60)]
    pub timeout: u64,

    /// Seconds to wait for the next streamed chunk, 0 waits forever
    #[arg(long, global = true, env = "OPENROUTER_IDLE_TIMEOUT", default_value_t = 60)]
    pub idle_timeout: u64,

    /// Proxy URL for outbound requests (http, https or socks5)
    #[arg(long, global = true, env = "OPENROUTER_PROXY")]
    pub proxy: Option<String>,

    /// Proxy credentials as user:pass
    #[arg(long, global = true, env = "OPENROUTER_PROXY_AUTH", hide_env_values = true)]
    pub proxy_auth: Option<String>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Send a chat prompt to the model
    ///
    /// Send a one-off prompt to the model. Provide [PROMPT] or pipe via stdin.
    Chat(ChatArgs),

    /// List available models
    Models,
}

#[derive(Args, Debug, Clone)]
pub struct ChatArgs {
    /// Prompt words, joined with spaces
    pub prompt: Vec<String>,

    /// System message sent ahead of the prompt
    #[arg(long)]
    pub system: Option<String>,

    /// Upper bound on generated tokens
    #[arg(long)]
    pub max_tokens: Option<u32>,
}
