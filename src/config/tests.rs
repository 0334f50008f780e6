#[cfg(test)]
mod tests {
    use crate::config::{BREADTH_RANGE, Config, ConfigError, DEPTH_RANGE, LLMConfig, LLMProvider};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert!(config.query.is_none());
        assert_eq!(config.depth, 2);
        assert_eq!(config.breadth, 4);
        assert_eq!(config.output_path, PathBuf::from("./deepresearch.out"));
        assert_eq!(config.internal_path, PathBuf::from("./.deepresearch"));
        assert!(!config.verbose);
    }

    #[test]
    fn test_llm_config_default() {
        let llm = LLMConfig::default();

        assert_eq!(llm.provider, LLMProvider::OpenAI);
        assert_eq!(llm.max_tokens, 131072);
        assert_eq!(llm.temperature, 0.3);
        assert_eq!(llm.timeout_seconds, 300);
    }

    #[test]
    fn test_llm_provider_from_str() {
        assert_eq!(
            "openai".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenAI
        );
        assert_eq!(
            "moonshot".parse::<LLMProvider>().unwrap(),
            LLMProvider::Moonshot
        );
        assert_eq!(
            "deepseek".parse::<LLMProvider>().unwrap(),
            LLMProvider::DeepSeek
        );
        assert_eq!(
            "openrouter".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenRouter
        );
        assert_eq!(
            "anthropic".parse::<LLMProvider>().unwrap(),
            LLMProvider::Anthropic
        );
        assert_eq!(
            "ollama".parse::<LLMProvider>().unwrap(),
            LLMProvider::Ollama
        );
        assert_eq!(
            "OpenAI".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenAI
        );

        assert!("invalid".parse::<LLMProvider>().is_err());
    }

    #[test]
    fn test_llm_provider_display() {
        assert_eq!(LLMProvider::OpenAI.to_string(), "openai");
        assert_eq!(LLMProvider::Moonshot.to_string(), "moonshot");
        assert_eq!(LLMProvider::DeepSeek.to_string(), "deepseek");
        assert_eq!(LLMProvider::OpenRouter.to_string(), "openrouter");
        assert_eq!(LLMProvider::Anthropic.to_string(), "anthropic");
        assert_eq!(LLMProvider::Ollama.to_string(), "ollama");
    }

    #[test]
    fn test_validate_requires_query() {
        let config = Config::default();
        assert_eq!(config.validate(), Err(ConfigError::MissingQuery));

        // 纯空白的主题同样被拒绝
        let mut config = Config::default();
        config.query = Some("   ".to_string());
        assert_eq!(config.validate(), Err(ConfigError::MissingQuery));
    }

    #[test]
    fn test_validate_depth_range() {
        let mut config = Config::default();
        config.query = Some("Rust异步运行时的演进".to_string());

        config.depth = 0;
        assert_eq!(config.validate(), Err(ConfigError::DepthOutOfRange(0)));

        config.depth = 6;
        assert_eq!(config.validate(), Err(ConfigError::DepthOutOfRange(6)));

        for depth in DEPTH_RANGE {
            config.depth = depth;
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_validate_breadth_range() {
        let mut config = Config::default();
        config.query = Some("Rust异步运行时的演进".to_string());

        config.breadth = 1;
        assert_eq!(config.validate(), Err(ConfigError::BreadthOutOfRange(1)));

        config.breadth = 11;
        assert_eq!(config.validate(), Err(ConfigError::BreadthOutOfRange(11)));

        for breadth in BREADTH_RANGE {
            config.breadth = breadth;
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_query_text() {
        let mut config = Config::default();
        assert_eq!(config.query_text(), "");

        config.query = Some("量子计算的商业化现状".to_string());
        assert_eq!(config.query_text(), "量子计算的商业化现状");
    }

    #[test]
    fn test_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("deepresearch.toml");

        let content = r#"
query = "WebAssembly在服务端的应用"
depth = 3
breadth = 5
output_path = "./out"
internal_path = "./.deepresearch"
verbose = true

[llm]
provider = "deepseek"
api_key = "test-key"
api_base_url = "https://api.deepseek.com/v1"
model = "deepseek-chat"
max_tokens = 8192
temperature = 0.5
timeout_seconds = 120
"#;
        fs::write(&config_path, content).unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.query.as_deref(), Some("WebAssembly在服务端的应用"));
        assert_eq!(config.depth, 3);
        assert_eq!(config.breadth, 5);
        assert!(config.verbose);
        assert_eq!(config.llm.provider, LLMProvider::DeepSeek);
        assert_eq!(config.llm.model, "deepseek-chat");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_file_missing() {
        let path = PathBuf::from("/nonexistent/deepresearch.toml");
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_config_from_file_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "query = [not valid toml").unwrap();

        assert!(Config::from_file(&config_path).is_err());
    }
}
