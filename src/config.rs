use anyhow::{Result, anyhow, bail};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::llm::{DEFAULT_GROQ_BASE_URL, DEFAULT_GROQ_MODEL};
use crate::rates::api_ninjas::{DEFAULT_RATE_SERIES, DEFAULT_RATES_BASE_URL};

const CONFIG_DIR_NAME: &str = "loanadvisor";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub groq_api_key: Option<String>,
    pub groq_model: String,
    pub groq_base_url: String,
    pub rates_api_key: Option<String>,
    pub rates_base_url: String,
    pub rate_series: String,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub preset: ThemePreset,
    pub styles: HashMap<ThemeToken, StyleOverride>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: ThemePreset::Default,
            styles: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    Default,
    Light,
    HighContrast,
}

impl FromStr for ThemePreset {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "default" => Ok(Self::Default),
            "light" => Ok(Self::Light),
            "high-contrast" => Ok(Self::HighContrast),
            _ => Err(format!("unknown preset '{value}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeToken {
    LoanPrompt,
    AssistantPrompt,
    CommandPrompt,
    UserInputLoan,
    UserInputAssistant,
    QuoteValue,
    VerdictEligible,
    VerdictRejected,
    AssistantText,
    SystemInfo,
    SystemError,
    Status,
    InputBlock,
}

impl ThemeToken {
    pub const ALL: [ThemeToken; 13] = [
        ThemeToken::LoanPrompt,
        ThemeToken::AssistantPrompt,
        ThemeToken::CommandPrompt,
        ThemeToken::UserInputLoan,
        ThemeToken::UserInputAssistant,
        ThemeToken::QuoteValue,
        ThemeToken::VerdictEligible,
        ThemeToken::VerdictRejected,
        ThemeToken::AssistantText,
        ThemeToken::SystemInfo,
        ThemeToken::SystemError,
        ThemeToken::Status,
        ThemeToken::InputBlock,
    ];
}

impl FromStr for ThemeToken {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "loan_prompt" => Ok(Self::LoanPrompt),
            "assistant_prompt" => Ok(Self::AssistantPrompt),
            "command_prompt" => Ok(Self::CommandPrompt),
            "user_input_loan" => Ok(Self::UserInputLoan),
            "user_input_assistant" => Ok(Self::UserInputAssistant),
            "quote_value" => Ok(Self::QuoteValue),
            "verdict_eligible" => Ok(Self::VerdictEligible),
            "verdict_rejected" => Ok(Self::VerdictRejected),
            "assistant_text" => Ok(Self::AssistantText),
            "system_info" => Ok(Self::SystemInfo),
            "system_error" => Ok(Self::SystemError),
            "status" => Ok(Self::Status),
            "input_block" => Ok(Self::InputBlock),
            _ => Err(format!("unknown token '{value}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleOverride {
    pub fg: Option<HexColor>,
    pub bg: Option<HexColor>,
    pub modifiers: Option<Vec<ThemeModifier>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl FromStr for HexColor {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let bytes = value.as_bytes();
        if bytes.len() != 7 || bytes[0] != b'#' {
            return Err("invalid hex color, expected #RRGGBB".to_string());
        }

        let r = u8::from_str_radix(&value[1..3], 16)
            .map_err(|_| "invalid hex color, expected #RRGGBB".to_string())?;
        let g = u8::from_str_radix(&value[3..5], 16)
            .map_err(|_| "invalid hex color, expected #RRGGBB".to_string())?;
        let b = u8::from_str_radix(&value[5..7], 16)
            .map_err(|_| "invalid hex color, expected #RRGGBB".to_string())?;

        Ok(Self { r, g, b })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeModifier {
    Bold,
    Dim,
    Italic,
    Underlined,
    Reversed,
    CrossedOut,
}

impl FromStr for ThemeModifier {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "bold" => Ok(Self::Bold),
            "dim" => Ok(Self::Dim),
            "italic" => Ok(Self::Italic),
            "underlined" => Ok(Self::Underlined),
            "reversed" => Ok(Self::Reversed),
            "crossed_out" => Ok(Self::CrossedOut),
            _ => Err(format!("unknown modifier '{value}'")),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFileConfig {
    groq_api_key: Option<String>,
    groq_model: Option<String>,
    groq_base_url: Option<String>,
    rates_api_key: Option<String>,
    rates_base_url: Option<String>,
    rate_series: Option<String>,
    theme: Option<RawThemeConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawThemeConfig {
    name: Option<String>,
    styles: Option<HashMap<String, RawStyleOverride>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStyleOverride {
    fg: Option<String>,
    bg: Option<String>,
    modifiers: Option<Vec<String>>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_path(None)
    }

    /// Load configuration, preferring process environment over the config
    /// file over built-in defaults. An explicit path skips discovery.
    pub fn load_with_path(explicit: Option<&Path>) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => path.to_path_buf(),
            None => discover_config_path()?,
        };
        let file_config = load_file_config(&config_path)?;

        dotenvy::dotenv().ok();

        let from_file = |pick: fn(&RawFileConfig) -> Option<&String>| {
            file_config
                .as_ref()
                .and_then(pick)
                .and_then(|value| non_empty(value).map(ToOwned::to_owned))
        };

        let theme = validate_theme(
            file_config.as_ref().and_then(|cfg| cfg.theme.as_ref()),
            &config_path,
        )?;

        Ok(Self {
            groq_api_key: env_non_empty("GROQ_API_KEY")
                .or_else(|| from_file(|cfg| cfg.groq_api_key.as_ref())),
            groq_model: env_non_empty("GROQ_MODEL")
                .or_else(|| from_file(|cfg| cfg.groq_model.as_ref()))
                .unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string()),
            groq_base_url: env_non_empty("GROQ_BASE_URL")
                .or_else(|| from_file(|cfg| cfg.groq_base_url.as_ref()))
                .unwrap_or_else(|| DEFAULT_GROQ_BASE_URL.to_string()),
            rates_api_key: env_non_empty("RATES_API_KEY")
                .or_else(|| from_file(|cfg| cfg.rates_api_key.as_ref())),
            rates_base_url: env_non_empty("RATES_BASE_URL")
                .or_else(|| from_file(|cfg| cfg.rates_base_url.as_ref()))
                .unwrap_or_else(|| DEFAULT_RATES_BASE_URL.to_string()),
            rate_series: env_non_empty("RATE_SERIES")
                .or_else(|| from_file(|cfg| cfg.rate_series.as_ref()))
                .unwrap_or_else(|| DEFAULT_RATE_SERIES.to_string()),
            theme,
        })
    }
}

fn discover_config_path() -> Result<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let trimmed = xdg.trim();
        if trimmed.is_empty() {
            bail!("Failed to resolve config path: XDG_CONFIG_HOME is set but empty");
        }

        return Ok(PathBuf::from(trimmed)
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME));
    }

    let home = dirs::home_dir().ok_or_else(|| {
        anyhow!("Failed to resolve config path: HOME directory is unavailable")
    })?;

    Ok(home
        .join(".config")
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME))
}

fn load_file_config(config_path: &Path) -> Result<Option<RawFileConfig>> {
    if !config_path.is_file() {
        return Ok(None);
    }

    let config_text = fs::read_to_string(config_path).map_err(|err| {
        anyhow!(
            "Failed to load config {}: unable to read file: {err}",
            config_path.display()
        )
    })?;

    toml::from_str(&config_text)
        .map(Some)
        .map_err(|err| anyhow!("Failed to load config {}: {err}", config_path.display()))
}

fn validate_theme(raw_theme: Option<&RawThemeConfig>, config_path: &Path) -> Result<ThemeConfig> {
    let Some(theme) = raw_theme else {
        return Ok(ThemeConfig::default());
    };

    let mut config = ThemeConfig::default();

    if let Some(name) = &theme.name {
        config.preset = ThemePreset::from_str(name)
            .map_err(|reason| config_error(config_path, "theme.name", &reason))?;
    }

    if let Some(styles) = &theme.styles {
        for (token_name, raw_style) in styles {
            let token = ThemeToken::from_str(token_name).map_err(|reason| {
                config_error(config_path, &format!("theme.styles.{token_name}"), &reason)
            })?;

            let fg = parse_color(raw_style.fg.as_deref(), config_path, token_name, "fg")?;
            let bg = parse_color(raw_style.bg.as_deref(), config_path, token_name, "bg")?;
            let modifiers =
                parse_modifiers(raw_style.modifiers.as_deref(), config_path, token_name)?;

            config
                .styles
                .insert(token, StyleOverride { fg, bg, modifiers });
        }
    }

    Ok(config)
}

fn parse_color(
    value: Option<&str>,
    config_path: &Path,
    token_name: &str,
    field_name: &str,
) -> Result<Option<HexColor>> {
    let Some(value) = value else {
        return Ok(None);
    };

    HexColor::from_str(value).map(Some).map_err(|reason| {
        config_error(
            config_path,
            &format!("theme.styles.{token_name}.{field_name}"),
            &reason,
        )
    })
}

fn parse_modifiers(
    values: Option<&[String]>,
    config_path: &Path,
    token_name: &str,
) -> Result<Option<Vec<ThemeModifier>>> {
    let Some(values) = values else {
        return Ok(None);
    };

    let mut parsed = Vec::with_capacity(values.len());
    for value in values {
        let modifier = ThemeModifier::from_str(value).map_err(|reason| {
            config_error(
                config_path,
                &format!("theme.styles.{token_name}.modifiers"),
                &reason,
            )
        })?;
        parsed.push(modifier);
    }

    Ok(Some(parsed))
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

fn config_error(config_path: &Path, key_path: &str, reason: &str) -> anyhow::Error {
    anyhow!(
        "Failed to load config {}: {key_path}: {reason}",
        config_path.display()
    )
}
