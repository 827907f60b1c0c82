use serde::{de, Deserialize, Deserializer};

/// Cell values the merged file uses for "no observation".
const NULL_TOKENS: [&str; 5] = ["", "nan", "na", "null", "n/a"];

/// One row of the merged CO₂/GDP file, exactly as read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Country Name")]
    pub country: String,

    #[serde(rename = "Year", deserialize_with = "de_year")]
    pub year: i32,

    #[serde(rename = "GDP_Value", deserialize_with = "de_nullable")]
    pub gdp_value: Option<f64>,

    #[serde(rename = "co2", deserialize_with = "de_nullable")]
    pub co2: Option<f64>,

    #[serde(rename = "co2_per_capita", deserialize_with = "de_nullable")]
    pub co2_per_capita: Option<f64>,
}

/// A cleaned country-year observation. GDP and per-capita CO₂ are always present.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub country: String,
    pub year: i32,
    pub gdp_value: f64,
    /// Total emissions in million metric tons; the file may leave it blank.
    pub co2: Option<f64>,
    pub co2_per_capita: f64,
}

impl Record {
    /// Returns `None` when GDP or per-capita CO₂ is missing.
    pub fn from_raw(raw: RawRecord) -> Option<Record> {
        Some(Record {
            gdp_value: raw.gdp_value?,
            co2_per_capita: raw.co2_per_capita?,
            country: raw.country,
            year: raw.year,
            co2: raw.co2,
        })
    }
}

pub(crate) fn is_null_token(value: &str) -> bool {
    let value = value.trim();
    NULL_TOKENS.iter().any(|token| value.eq_ignore_ascii_case(token))
}

pub(crate) fn parse_nullable(value: &str) -> Result<Option<f64>, String> {
    if is_null_token(value) {
        return Ok(None);
    }
    let value = value.trim();
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(Some(number)),
        Ok(_) => Err(format!("`{value}` is not a finite number")),
        Err(_) => Err(format!("`{value}` is not a number")),
    }
}

pub(crate) fn parse_year(value: &str) -> Result<i32, String> {
    let value = value.trim();
    if is_null_token(value) {
        return Err("year is missing".to_string());
    }
    if let Ok(year) = value.parse::<i32>() {
        return Ok(year);
    }
    // Dataframe exports write integer columns with nulls as floats ("2020.0").
    match value.parse::<f64>() {
        Ok(year) if year.fract() == 0.0 && year.abs() <= i32::MAX as f64 => Ok(year as i32),
        _ => Err(format!("`{value}` is not a year")),
    }
}

fn de_nullable<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_nullable(&raw).map_err(de::Error::custom)
}

fn de_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_year(&raw).map_err(de::Error::custom)
}
