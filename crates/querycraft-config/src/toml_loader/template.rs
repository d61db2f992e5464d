//! Commented default config file contents.

pub(super) fn default_config_toml() -> &'static str {
    r##"# QueryCraft Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# API keys are read from the environment (GOOGLE_API_KEY / ANTHROPIC_API_KEY),
# optionally via a .env file in the working directory.

[database]
# default_path = "chinook.db"

[model]
# provider = "gemini"    # gemini, claude
# model = "gemini-1.5-flash-latest"
# max_tokens = 1024      # 1-65536
# temperature = 0.0      # 0.0-2.0

[retry]
# max_attempts = 3       # 1-10, counts the first attempt
# delay_secs = 5         # 0-120, fixed wait after a rate-limit response

[display]
# max_rows = 200         # 1-10000
# format = "table"       # table, json
# show_sql = true

[logging]
# level = "WARNING"      # DEBUG, INFO, WARNING, ERROR
"##
}
