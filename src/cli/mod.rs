use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Port for the HTTP API server.
    #[arg(long, env = "PORT", default_value = "5000")]
    pub port: u16,

    // --- History Store Args ---
    /// Conversation history store type (memory, redis)
    #[arg(long, env = "HISTORY_TYPE", default_value = "memory")]
    pub history_type: String,

    /// History store host endpoint for the durable variant (e.g., redis://127.0.0.1:6379)
    #[arg(long, env = "HISTORY_HOST", default_value = "redis://127.0.0.1:6379")]
    pub history_host: String,

    /// Prefix for Redis history keys.
    #[arg(long, env = "HISTORY_REDIS_PREFIX", default_value = "chat:")]
    pub history_redis_prefix: String,

    // --- Completion Gateway Args ---
    /// API key for the Groq completion endpoint. Empty or placeholder means
    /// the gateway is disabled and replies come from the canned-response engine.
    #[arg(long, env = "GROQ_API_KEY", default_value = "")]
    pub groq_api_key: String,

    /// Model name for chat completion (e.g., llama-3.3-70b-versatile)
    #[arg(long, env = "GROQ_MODEL")] // No default, gateway supplies one if None
    pub groq_model: Option<String>,

    /// Base URL for the Groq API
    #[arg(long, env = "GROQ_BASE_URL")] // No default, gateway supplies one if None
    pub groq_base_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Flag parsing only; default values come from env fallbacks and are not
    // asserted here to keep the tests independent of the ambient environment.
    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "mockingbird",
            "--port",
            "8080",
            "--history-type",
            "redis",
            "--groq-api-key",
            "gsk_test",
        ]);
        assert_eq!(args.port, 8080);
        assert_eq!(args.history_type, "redis");
        assert_eq!(args.groq_api_key, "gsk_test");
    }

    #[test]
    fn history_host_flag_is_parsed() {
        let args = Args::parse_from([
            "mockingbird",
            "--history-host",
            "redis://example:6380",
        ]);
        assert_eq!(args.history_host, "redis://example:6380");
    }
}
