use serde::{Deserialize, Serialize};
use std::fmt;

pub const INVALID_OPERATION: &str = "Invalid operation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// Wire id used by `/api/calculate` and `/api/history`.
    pub fn id(self) -> u8 {
        match self {
            Operator::Add => 1,
            Operator::Sub => 2,
            Operator::Mul => 3,
            Operator::Div => 4,
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol.trim())
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|op| i64::from(op.id()) == id)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A result slot: a number, or a server-provided message such as "Invalid operation".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultValue::Number(value) => f.write_str(&format_number(*value)),
            ResultValue::Text(text) => f.write_str(text),
        }
    }
}

/// Formats a number the way the page always has: integral values without a fraction.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationRequest {
    pub operand1: f64,
    pub operand2: f64,
    pub operator: Operator,
}

#[derive(Debug, Serialize)]
pub struct CalculateBody {
    pub num1: f64,
    pub num2: f64,
    pub operator_id: u8,
    pub result: Option<f64>,
}

impl From<CalculationRequest> for CalculateBody {
    fn from(request: CalculationRequest) -> Self {
        Self {
            num1: request.operand1,
            num2: request.operand2,
            operator_id: request.operator.id(),
            result: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalculationResult {
    #[serde(default, alias = "value")]
    pub result: Option<ResultValue>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CalculationResult {
    /// The text shown after "Result: ". Never coerces a message into a number.
    pub fn display_value(&self) -> String {
        match (&self.result, &self.error) {
            (Some(value), _) => value.to_string(),
            (None, Some(error)) => error.clone(),
            (None, None) => INVALID_OPERATION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionInfo {
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(default)]
    pub hash: Option<String>,
}

impl SessionInfo {
    pub fn hash_prefix(&self) -> Option<String> {
        self.hash
            .as_deref()
            .filter(|hash| !hash.is_empty())
            .map(|hash| hash.chars().take(5).collect())
    }
}

#[derive(Debug, Serialize)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryEntry {
    pub num1: f64,
    pub num2: f64,
    pub operator_id: i64,
    #[serde(default)]
    pub result: Option<ResultValue>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecord {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<UserRecord>,
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const STORAGE_KEY: &'static str = "theme";

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }

    /// Unknown or missing stored values fall back to light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark-theme") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
