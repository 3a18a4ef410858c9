use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Completion provider configuration
///
/// Read-only after startup; the gateway never mutates it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Which explainer serves requests: "openai" or "template"
    pub backend: String,
    /// Base URL of the OpenAI-compatible API
    pub api_base: String,
    pub model: String,
    /// Credential; taken from the OPENAI_API_KEY environment variable,
    /// never from the config file
    #[serde(skip)]
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

/// Command line arguments for configuration overrides
#[derive(Parser, Debug, Clone)]
#[command(name = "explaina")]
#[command(version, about = "Explaina - AI explanations for selected text")]
pub struct CommandLineArgs {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Server host (overrides config file)
    #[arg(long, value_name = "HOST")]
    pub server_host: Option<String>,

    /// Server port (overrides config file)
    #[arg(long, value_name = "PORT")]
    pub server_port: Option<u16>,

    /// Explainer backend: "openai" or "template" (overrides config file)
    #[arg(long, value_name = "BACKEND")]
    pub provider_backend: Option<String>,

    /// Provider API base URL (overrides config file)
    #[arg(long, value_name = "URL")]
    pub provider_api_base: Option<String>,

    /// Provider model name (overrides config file)
    #[arg(long, value_name = "MODEL")]
    pub provider_model: Option<String>,

    /// Logging level (overrides config file, e.g., "info,explaina=debug")
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration with command line, environment variable, and file support
    ///
    /// Loading order (priority from highest to lowest):
    /// 1. Command line arguments
    /// 2. Environment variables
    /// 3. Configuration file (config.toml)
    /// 4. Default values
    pub fn load() -> Result<Self, anyhow::Error> {
        // Pick up a .env file if present, before any env reads
        dotenvy::dotenv().ok();

        let cli_args = CommandLineArgs::parse();

        // 1. Load from config file (use CLI --config if provided, otherwise find default)
        let config_path = cli_args.config.clone().or_else(Self::find_config_file);
        let mut config = if let Some(config_path) = config_path {
            Self::from_toml(&config_path)?
        } else {
            tracing::warn!("Configuration file not found, using defaults");
            Config::default()
        };

        // 2. Override with environment variables
        config.apply_env_overrides();

        // 3. Override with command line arguments (highest priority)
        config.apply_cli_overrides(&cli_args);

        // 4. Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - PORT: Server port (extension contract, default: 8000)
    /// - APP_SERVER_HOST: Server host (default: 0.0.0.0)
    /// - APP_SERVER_PORT: Server port; wins over PORT
    /// - APP_LOG_LEVEL: Logging level (e.g., "info,explaina=debug")
    /// - APP_PROVIDER_BACKEND: Explainer backend ("openai" or "template")
    /// - APP_PROVIDER_API_BASE: Provider API base URL
    /// - APP_PROVIDER_MODEL: Provider model name
    /// - OPENAI_API_KEY: Provider credential
    fn apply_env_overrides(&mut self) {
        if let Ok(port) = std::env::var("PORT")
            && let Ok(port) = port.parse()
        {
            self.server.port = port;
            tracing::info!("Override server.port from env PORT: {}", self.server.port);
        }

        if let Ok(host) = std::env::var("APP_SERVER_HOST") {
            self.server.host = host;
            tracing::info!("Override server.host from env: {}", self.server.host);
        }

        if let Ok(port) = std::env::var("APP_SERVER_PORT")
            && let Ok(port) = port.parse()
        {
            self.server.port = port;
            tracing::info!("Override server.port from env: {}", self.server.port);
        }

        if let Ok(level) = std::env::var("APP_LOG_LEVEL") {
            self.logging.level = level;
            tracing::info!("Override logging.level from env: {}", self.logging.level);
        }

        if let Ok(backend) = std::env::var("APP_PROVIDER_BACKEND") {
            self.provider.backend = backend;
            tracing::info!("Override provider.backend from env: {}", self.provider.backend);
        }

        if let Ok(api_base) = std::env::var("APP_PROVIDER_API_BASE") {
            self.provider.api_base = api_base;
            tracing::info!("Override provider.api_base from env: {}", self.provider.api_base);
        }

        if let Ok(model) = std::env::var("APP_PROVIDER_MODEL") {
            self.provider.model = model;
            tracing::info!("Override provider.model from env: {}", self.provider.model);
        }

        if let Ok(key) = std::env::var("OPENAI_API_KEY")
            && !key.is_empty()
        {
            self.provider.api_key = Some(key);
            tracing::info!("Provider credential loaded from env");
        }
    }

    /// Apply command line argument overrides (highest priority)
    fn apply_cli_overrides(&mut self, args: &CommandLineArgs) {
        if let Some(host) = &args.server_host {
            self.server.host = host.clone();
            tracing::info!("Override server.host from CLI: {}", self.server.host);
        }

        if let Some(port) = args.server_port {
            self.server.port = port;
            tracing::info!("Override server.port from CLI: {}", self.server.port);
        }

        if let Some(backend) = &args.provider_backend {
            self.provider.backend = backend.clone();
            tracing::info!("Override provider.backend from CLI: {}", self.provider.backend);
        }

        if let Some(api_base) = &args.provider_api_base {
            self.provider.api_base = api_base.clone();
            tracing::info!("Override provider.api_base from CLI: {}", self.provider.api_base);
        }

        if let Some(model) = &args.provider_model {
            self.provider.model = model.clone();
            tracing::info!("Override provider.model from CLI: {}", self.provider.model);
        }

        if let Some(level) = &args.log_level {
            self.logging.level = level.clone();
            tracing::info!("Override logging.level from CLI: {}", self.logging.level);
        }
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        match self.provider.backend.as_str() {
            "openai" | "template" => {},
            other => anyhow::bail!("Unknown provider backend: {} (expected openai or template)", other),
        }

        if self.provider.api_base.is_empty() {
            anyhow::bail!("Provider API base cannot be empty");
        }
        if self.provider.model.is_empty() {
            anyhow::bail!("Provider model cannot be empty");
        }
        if self.provider.max_tokens == 0 {
            anyhow::bail!("provider.max_tokens must be > 0");
        }
        if self.provider.timeout_seconds == 0 {
            anyhow::bail!("provider.timeout_seconds must be > 0");
        }
        if !(0.0..=2.0).contains(&self.provider.temperature) {
            anyhow::bail!("provider.temperature must be within [0, 2]");
        }

        // Missing credential is not fatal: the gateway still attempts calls
        // and serves the fallback, and /health reports the gap
        if self.provider.backend == "openai" && self.provider.api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY is not set!");
            tracing::warn!("Explanations will degrade to the fallback response until it is provided");
        }

        Ok(())
    }

    fn find_config_file() -> Option<String> {
        let possible_paths =
            ["conf/config.toml", "config.toml", "./conf/config.toml", "./config.toml"];

        for path in &possible_paths {
            if Path::new(path).exists() {
                return Some(path.to_string());
            }
        }
        None
    }

    fn from_toml(path: &str) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8000 }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            backend: "openai".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            api_key: None,
            max_tokens: 200,
            temperature: 0.7,
            timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info,explaina=debug".to_string(), file: None }
    }
}
