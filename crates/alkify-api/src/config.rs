/// Fallback for local development against a locally running API.
const DEFAULT_API_URL: &str = "http://localhost:8080/";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base: String,
}

impl Config {
    /// Reads the API base address baked in at build time via
    /// `ALKIFY_API_URL`.
    pub fn from_env() -> Self {
        Self::new(option_env!("ALKIFY_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn new(base: &str) -> Self {
        Self {
            api_base: normalize_base(base),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Request paths are joined by plain concatenation, so the base must end
/// with exactly one slash.
fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    format!("{trimmed}/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_gains_single_trailing_slash() {
        assert_eq!(Config::new("http://api.test").api_base, "http://api.test/");
        assert_eq!(
            Config::new("http://api.test///").api_base,
            "http://api.test/"
        );
        assert_eq!(
            Config::new("  http://api.test/ ").api_base,
            "http://api.test/"
        );
    }
}
