//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Finquiz Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# API keys are read from the environment (or a .env file):
#   GEMINI_API_KEY       required
#   PINECONE_API_KEY     optional, enables resource links
#   PINECONE_INDEX_HOST  optional, overrides [resources].index_host

[server]
# host = "0.0.0.0"
# port = 5000
# cors_permissive = true

[model]
# name = "gemini-1.5-flash"
# api_base = "https://generativelanguage.googleapis.com/v1beta/models"
# max_tokens = 1024      # 1-8192
# temperature = 0.7      # 0.0-2.0
# timeout_secs = 60      # 1-600

[quiz]
# default_topic = "financial literacy"
# safety_instruction = "Please ensure that the content you generate is safe, appropriate, and free from explicit or harmful language."

[embedding]
# url = "http://127.0.0.1:8081"
# model = "distilbert-base-nli-stsb-mean-tokens"
# dimensions = 768       # 1-4096
# timeout_secs = 30

[resources]
# index_name = "fidhacks"
# index_host = "https://fidhacks-xxxxxxx.svc.pinecone.io"
# namespace = "auto_loan_resources"
# top_k = 1              # 1-10
# timeout_secs = 30

[logging]
# level = "finquiz=info"
"##
}
