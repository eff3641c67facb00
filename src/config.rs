use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Call name whose parenthesized argument is captured.
    #[serde(default = "default_call")]
    pub call: String,

    /// Emit the trailing `wait-input` line.
    #[serde(default = "default_wait_input")]
    pub wait_input: bool,
}

fn default_call() -> String {
    "Println".to_string()
}
fn default_wait_input() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            call: default_call(),
            wait_input: default_wait_input(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.call, "Println");
        assert!(config.wait_input);
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "call": "Printf",
            "wait_input": false
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.call, "Printf");
        assert!(!config.wait_input);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: Config = serde_json::from_str(r#"{"wait_input": false}"#).unwrap();
        assert_eq!(config.call, "Println");
        assert!(!config.wait_input);

        let empty: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.call, "Println");
        assert!(empty.wait_input);
    }
}
