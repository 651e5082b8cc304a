use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::course::loader::LoadError;

/// Course content as published in `data.json`.
///
/// Every field is optional on the wire. A field that is missing or has the
/// wrong JSON type comes out as its empty value instead of failing the whole
/// document.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseModel {
    #[serde(default, deserialize_with = "lenient")]
    pub course_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub currency: String,
    #[serde(default, deserialize_with = "lenient")]
    pub includes: String,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub highlights: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub career_training: Option<CareerTraining>,
    #[serde(default, deserialize_with = "lenient")]
    pub images: Option<CourseImages>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CareerTraining {
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub goal: String,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CourseImages {
    #[serde(default, deserialize_with = "lenient")]
    pub hero: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub career: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

// Keeps the string entries of an array and drops everything else.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let price = Value::deserialize(deserializer)?.as_f64().unwrap_or(0.0);
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Ok(0.0)
    }
}

impl CourseModel {
    /// Parses a content document. Only a body that is not a JSON object fails.
    pub fn from_json(body: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(LoadError::NotAnObject);
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn topics(&self) -> &[String] {
        self.career_training
            .as_ref()
            .map(|career| career.topics.as_slice())
            .unwrap_or(&[])
    }

    /// Content shown when `data.json` cannot be loaded.
    pub fn fallback() -> Self {
        Self {
            course_name: "Mobile Repairing Master Course".to_string(),
            duration: "1 Month".to_string(),
            price: 20000.0,
            currency: "INR".to_string(),
            includes: "Includes full repairing toolkit".to_string(),
            highlights: [
                "Learn repairing from small mobiles to advanced iPhones and Android devices",
                "Hands-on training with real devices",
                "100% practical sessions",
                "Industry expert instructors",
                "Free tool kit with the course",
                "Lifetime technical support",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            career_training: Some(CareerTraining {
                title: "Career & Business Training".to_string(),
                goal: "Prepare students to start earning immediately after completing the course."
                    .to_string(),
                topics: [
                    "How to start your own repair shop",
                    "Estimating costs, sourcing spare parts, and dealing with suppliers",
                    "Handling customers professionally",
                    "Digital marketing for repair business",
                    "Creating a YouTube/Instagram repair brand",
                    "Certification after course completion",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            }),
            images: None,
        }
    }
}

/// Whole units grouped by thousands, e.g. `20000.0` -> `"20,000"`.
pub fn format_price(price: f64) -> String {
    let whole = if price.is_finite() && price > 0.0 { price.floor() as u64 } else { 0 };
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
