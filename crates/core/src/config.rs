use crate::error::{Error, Result};
use crate::types::SiteLayout;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TITLE: &str = "Daily Math for Kids";
pub const PLACEHOLDER_REPOSITORY: &str = "YOUR_USERNAME/dailymathforkids";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
/// Looked up in the site root when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "daily-math.toml";

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_TITLE: &str = "SITE_TITLE";
pub const ENV_BASE_URL: &str = "SITE_BASE_URL";
pub const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const ENV_MODEL: &str = "OPENAI_MODEL";
pub const ENV_API_BASE: &str = "OPENAI_BASE_URL";

/// An `owner/name` pair identifying the hosting repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    /// Split on the first `/`; a missing name is left empty
    pub fn parse(value: &str) -> Self {
        let (owner, name) = value.trim().split_once('/').unwrap_or((value.trim(), ""));
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }

    /// Project pages URL, e.g. `https://owner.github.io/name/`
    pub fn pages_url(&self) -> String {
        if self.name.is_empty() {
            format!("https://{}.github.io/", self.owner)
        } else {
            format!("https://{}.github.io/{}/", self.owner, self.name)
        }
    }
}

/// Process-wide settings, built once at startup and passed to every stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub title: String,
    /// Bearer credential for the generation service; `None` disables generation
    pub credential: Option<String>,
    /// Public base URL, always ending in `/`
    pub base_url: String,
    pub repository: Repository,
    /// Directory containing `index.html`, `sitemap.xml` and `daily/`
    pub root: PathBuf,
    pub model: String,
    pub api_base: String,
}

/// Raw TOML configuration structure
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub site: FileSite,
    #[serde(default)]
    pub generation: FileGeneration,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSite {
    pub title: Option<String>,
    pub base_url: Option<String>,
    pub repository: Option<String>,
    pub root: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileGeneration {
    pub model: Option<String>,
    pub api_base: Option<String>,
}

/// Parse a config file from a path
pub fn parse_config_toml<P: AsRef<Path>>(path: P) -> Result<FileConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::at_path(path, e))?;
    parse_config_toml_str(&content)
}

/// Parse a config file from a string (useful for testing)
pub fn parse_config_toml_str(content: &str) -> Result<FileConfig> {
    let raw: FileConfig = toml::from_str(content)?;
    if let Some(root) = &raw.site.root
        && root.trim().is_empty()
    {
        return Err(Error::ConfigParse("Empty path in 'site.root' field".to_string()));
    }
    Ok(raw)
}

impl SiteConfig {
    /// Build the configuration from the process environment and an optional config file.
    ///
    /// `root` overrides `site.root`. Without an explicit `config_file`,
    /// `daily-math.toml` in the root is used when it exists.
    pub fn load(root: Option<&Path>, config_file: Option<&Path>) -> Result<Self> {
        let file = match config_file {
            Some(path) => parse_config_toml(path)?,
            None => {
                let default_path = root.unwrap_or(Path::new(".")).join(CONFIG_FILE_NAME);
                if default_path.is_file() {
                    tracing::debug!("Using config file {}", default_path.display());
                    parse_config_toml(&default_path)?
                } else {
                    FileConfig::default()
                }
            }
        };

        let mut config = Self::from_lookup(file, |key| std::env::var(key).ok());
        if let Some(root) = root {
            config.root = root.to_path_buf();
        }
        Ok(config)
    }

    /// Resolve settings with environment values taking precedence over the file.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(file: FileConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let title = env(ENV_TITLE)
            .or(file.site.title)
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let repository = Repository::parse(
            &env(ENV_REPOSITORY)
                .or(file.site.repository)
                .unwrap_or_else(|| PLACEHOLDER_REPOSITORY.to_string()),
        );

        let base_url = env(ENV_BASE_URL)
            .or(file.site.base_url)
            .map(|url| normalize_base_url(&url))
            .unwrap_or_else(|| repository.pages_url());

        Self {
            title,
            credential: env(ENV_API_KEY),
            base_url,
            repository,
            root: PathBuf::from(file.site.root.unwrap_or_else(|| ".".to_string())),
            model: env(ENV_MODEL)
                .or(file.generation.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: env(ENV_API_BASE)
                .or(file.generation.api_base)
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }

    pub fn layout(&self) -> SiteLayout {
        SiteLayout::new(&self.root)
    }
}

fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    format!("{}/", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = SiteConfig::from_lookup(FileConfig::default(), lookup(&[]));
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.credential, None);
        assert_eq!(config.base_url, "https://YOUR_USERNAME.github.io/dailymathforkids/");
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_blank_credential_is_absent() {
        let config = SiteConfig::from_lookup(FileConfig::default(), lookup(&[(ENV_API_KEY, "   ")]));
        assert_eq!(config.credential, None);

        let config =
            SiteConfig::from_lookup(FileConfig::default(), lookup(&[(ENV_API_KEY, " sk-test \n")]));
        assert_eq!(config.credential.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_repository_builds_pages_url() {
        let config = SiteConfig::from_lookup(
            FileConfig::default(),
            lookup(&[(ENV_REPOSITORY, "octo/math-site")]),
        );
        assert_eq!(config.repository.owner, "octo");
        assert_eq!(config.repository.name, "math-site");
        assert_eq!(config.base_url, "https://octo.github.io/math-site/");
    }

    #[test]
    fn test_repository_without_name() {
        let repo = Repository::parse("octo");
        assert_eq!(repo.owner, "octo");
        assert_eq!(repo.name, "");
        assert_eq!(repo.pages_url(), "https://octo.github.io/");
    }

    #[test]
    fn test_base_url_override_wins() {
        let config = SiteConfig::from_lookup(
            FileConfig::default(),
            lookup(&[
                (ENV_REPOSITORY, "octo/math-site"),
                (ENV_BASE_URL, "https://math.example.org"),
            ]),
        );
        assert_eq!(config.base_url, "https://math.example.org/");
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = parse_config_toml_str(
            r#"
[site]
title = "From File"
base_url = "https://file.example.org/"
root = "public"

[generation]
model = "file-model"
"#,
        )
        .unwrap();

        let config = SiteConfig::from_lookup(file, lookup(&[(ENV_TITLE, "From Env")]));
        assert_eq!(config.title, "From Env");
        assert_eq!(config.base_url, "https://file.example.org/");
        assert_eq!(config.root, PathBuf::from("public"));
        assert_eq!(config.model, "file-model");
    }

    #[test]
    fn test_parse_config_rejects_unknown_keys() {
        let result = parse_config_toml_str("[site]\ntitel = \"typo\"\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Configuration parse error"));
    }

    #[test]
    fn test_parse_config_rejects_empty_root() {
        let result = parse_config_toml_str("[site]\nroot = \"  \"\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("site.root"));
    }

    #[test]
    fn test_load_reads_config_from_root() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[generation]\napi_base = \"http://localhost:9999/v1\"\n",
        )
        .unwrap();

        let config = SiteConfig::load(Some(dir.path()), None).unwrap();
        assert_eq!(config.root, dir.path());
        // OPENAI_BASE_URL may be set by the caller's environment
        if std::env::var(ENV_API_BASE).is_err() {
            assert_eq!(config.api_base, "http://localhost:9999/v1");
        }
    }

    #[test]
    fn test_load_missing_explicit_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = SiteConfig::load(None, Some(&dir.path().join("nope.toml")));
        assert!(result.is_err());
    }
}
