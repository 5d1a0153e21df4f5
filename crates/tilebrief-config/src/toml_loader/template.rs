//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# tilebrief configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[model]
# model = "gemini-2.5-flash"
# api_base = "https://generativelanguage.googleapis.com/v1beta/models"
# api_key_env = "API_KEY"          # environment variable holding the key
# temperature = 0.7                # 0.0-2.0
# max_output_tokens = 8192         # 1-65536
# connect_timeout_secs = 10        # 1-600
# request_timeout_secs = 120       # 1-600
# google_search = false

[conversation]
# use_context_tool = true
# include_history = true
# max_tool_rounds = 5              # 1-16

[publisher]
# enabled = true
# endpoint = "https://api.xtiles.app/api/v1/projects/import/markdown"
# api_key_env = "XTILES_API_KEY"
# timeout_secs = 60                # 1-600

[logging]
# level = "INFO"                   # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
