//! Cell value formatters and label helpers the grid calls back into.
//!
//! # Example
//!
//! ```
//! use grid_locale::format::{FormattedValue, ValueFormatterParams, format_number, to_title_case};
//! use serde_json::json;
//!
//! assert_eq!(to_title_case("pivot_mode"), "Pivot Mode");
//!
//! let params: ValueFormatterParams = serde_json::from_value(json!({"value": 1234.5})).unwrap();
//! assert_eq!(
//!     format_number(&params).unwrap(),
//!     FormattedValue::Text("1.234,50".into())
//! );
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::trace;

/// Largest fraction digit count the grid host accepts.
pub const MAX_FRACTION_DIGITS: u8 = 20;

/// Errors from formatter callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The cell value was present but not numeric.
    NotANumber { found: &'static str },
    /// Formatting options are inconsistent.
    InvalidOptions(String),
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber { found } => write!(f, "expected a number, found {found}"),
            Self::InvalidOptions(msg) => write!(f, "invalid number format options: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Title-case a label.
///
/// Underscores become spaces, the text is lowercased, then the first
/// character of each whitespace-delimited word is uppercased. Whitespace
/// is kept exactly as given.
#[must_use]
pub fn to_title_case(input: &str) -> String {
    let lowered = input.replace('_', " ").to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut at_word_start = true;

    for ch in lowered.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }

    out
}

/// Decimal formatting options.
///
/// Defaults are the pt-BR grid settings: two fixed fraction digits, `.`
/// between thousands and `,` before the fraction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberFormatOptions {
    /// Fraction digits always shown (zero padded).
    pub min_fraction_digits: u8,
    /// Fraction digits kept after rounding.
    pub max_fraction_digits: u8,
    /// Whether the integer part is split into groups of three.
    pub use_grouping: bool,
    /// Character placed before the fraction digits.
    pub decimal_separator: char,
    /// Character placed between thousands groups.
    pub grouping_separator: char,
}

impl Default for NumberFormatOptions {
    fn default() -> Self {
        Self::pt_br()
    }
}

impl NumberFormatOptions {
    /// Brazilian Portuguese settings with two fraction digits.
    #[must_use]
    pub const fn pt_br() -> Self {
        Self {
            min_fraction_digits: 2,
            max_fraction_digits: 2,
            use_grouping: true,
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }

    /// Set both fraction digit bounds.
    #[must_use]
    pub fn with_fraction_digits(mut self, min: u8, max: u8) -> Self {
        self.min_fraction_digits = min;
        self.max_fraction_digits = max;
        self
    }

    /// Enable or disable thousands grouping.
    #[must_use]
    pub fn with_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = use_grouping;
        self
    }

    /// Check that the digit bounds are usable.
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.max_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(FormatError::InvalidOptions(format!(
                "maxFractionDigits {} exceeds {MAX_FRACTION_DIGITS}",
                self.max_fraction_digits
            )));
        }
        if self.min_fraction_digits > self.max_fraction_digits {
            return Err(FormatError::InvalidOptions(format!(
                "minFractionDigits {} is greater than maxFractionDigits {}",
                self.min_fraction_digits, self.max_fraction_digits
            )));
        }
        Ok(())
    }
}

/// Format `value` with the given separators and digit bounds.
///
/// Rounds to `max_fraction_digits`, then drops trailing zeros down to
/// `min_fraction_digits`. Negative values (negative zero included) carry a
/// leading `-`. Non-finite values render as `NaN`, `∞` and `-∞`; cell
/// payloads are JSON and cannot carry them, so only direct callers see these.
///
/// Options are assumed valid; see [`NumberFormatOptions::validate`].
#[must_use]
pub fn format_decimal(value: f64, options: &NumberFormatOptions) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}∞");
    }

    let min = usize::from(options.min_fraction_digits);
    let max = usize::from(options.max_fraction_digits).max(min);
    let fixed = format!("{:.*}", max, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut frac = frac_part.to_string();
    while frac.len() > min && frac.ends_with('0') {
        frac.pop();
    }

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    out.push_str(sign);
    if options.use_grouping {
        let len = int_part.len();
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(options.grouping_separator);
            }
            out.push(digit);
        }
    } else {
        out.push_str(int_part);
    }
    if !frac.is_empty() {
        out.push(options.decimal_separator);
        out.push_str(&frac);
    }
    out
}

/// Payload the grid passes to a value formatter.
///
/// `value` distinguishes an absent field (`None`, the host's `undefined`)
/// from an explicit `null` (`Some(Value::Null)`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ValueFormatterParams {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub value: Option<Value>,
}

impl ValueFormatterParams {
    /// Params for a numeric cell, or `None` when `value` is `NaN` or
    /// infinite (JSON has no representation for either).
    #[must_use]
    pub fn number(value: f64) -> Option<Self> {
        serde_json::Number::from_f64(value).map(|n| Self {
            value: Some(Value::Number(n)),
        })
    }

    /// Params for a cell with an explicit `null`.
    #[must_use]
    pub fn null() -> Self {
        Self {
            value: Some(Value::Null),
        }
    }

    /// Params for a cell with no value at all.
    #[must_use]
    pub fn missing() -> Self {
        Self { value: None }
    }
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// What a value formatter hands back to the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedValue {
    /// Display text for the cell.
    Text(String),
    /// The original `value`, returned untouched so the grid renders its
    /// own placeholder.
    PassThrough(Option<Value>),
}

impl FormattedValue {
    /// Convert to the JSON the host expects (`None` meaning `undefined`).
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Text(s) => Some(Value::String(s)),
            Self::PassThrough(v) => v,
        }
    }
}

/// pt-BR number formatter for grid cells: two fixed fraction digits.
///
/// Missing and `null` values pass through unchanged; non-numeric values
/// are rejected.
pub fn format_number(params: &ValueFormatterParams) -> Result<FormattedValue, FormatError> {
    format_number_with(params, &NumberFormatOptions::pt_br())
}

/// [`format_number`] with explicit options.
pub fn format_number_with(
    params: &ValueFormatterParams,
    options: &NumberFormatOptions,
) -> Result<FormattedValue, FormatError> {
    options.validate()?;
    match &params.value {
        None | Some(Value::Null) => {
            trace!(value = ?params.value, "formatter pass-through");
            Ok(FormattedValue::PassThrough(params.value.clone()))
        }
        Some(Value::Number(n)) => n
            .as_f64()
            .map(|v| FormattedValue::Text(format_decimal(v, options)))
            .ok_or(FormatError::NotANumber { found: "number" }),
        Some(other) => Err(FormatError::NotANumber {
            found: json_kind(other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(s: &str) -> FormattedValue {
        FormattedValue::Text(s.to_string())
    }

    #[test]
    fn title_case_snake_key() {
        assert_eq!(to_title_case("row_group_panel"), "Row Group Panel");
    }

    #[test]
    fn title_case_empty() {
        assert_eq!(to_title_case(""), "");
    }

    #[test]
    fn title_case_mixed_input() {
        assert_eq!(to_title_case("already Title"), "Already Title");
        assert_eq!(to_title_case("SHOUTING_KEY"), "Shouting Key");
    }

    #[test]
    fn title_case_keeps_whitespace() {
        assert_eq!(to_title_case("  two  spaces\tand_tab "), "  Two  Spaces\tAnd Tab ");
        assert_eq!(to_title_case("__"), "  ");
    }

    #[test]
    fn title_case_non_ascii() {
        assert_eq!(to_title_case("ÁREA_empilhada"), "Área Empilhada");
        assert_eq!(to_title_case("são paulo"), "São Paulo");
    }

    #[test]
    fn decimal_pt_br() {
        let opts = NumberFormatOptions::pt_br();
        assert_eq!(format_decimal(1234.5, &opts), "1.234,50");
        assert_eq!(format_decimal(0.0, &opts), "0,00");
        assert_eq!(format_decimal(999.999, &opts), "1.000,00");
        assert_eq!(format_decimal(1_234_567.891, &opts), "1.234.567,89");
        assert_eq!(format_decimal(-42.1, &opts), "-42,10");
        assert_eq!(format_decimal(100.0, &opts), "100,00");
    }

    #[test]
    fn decimal_negative_zero_keeps_sign() {
        assert_eq!(format_decimal(-0.0, &NumberFormatOptions::pt_br()), "-0,00");
    }

    #[test]
    fn decimal_non_finite() {
        let opts = NumberFormatOptions::pt_br();
        assert_eq!(format_decimal(f64::NAN, &opts), "NaN");
        assert_eq!(format_decimal(f64::INFINITY, &opts), "∞");
        assert_eq!(format_decimal(f64::NEG_INFINITY, &opts), "-∞");
    }

    #[test]
    fn decimal_trims_to_min_digits() {
        let opts = NumberFormatOptions::pt_br().with_fraction_digits(0, 3);
        assert_eq!(format_decimal(1.5, &opts), "1,5");
        assert_eq!(format_decimal(2.0, &opts), "2");
        assert_eq!(format_decimal(0.1234, &opts), "0,123");
    }

    #[test]
    fn decimal_without_grouping() {
        let opts = NumberFormatOptions::pt_br().with_grouping(false);
        assert_eq!(format_decimal(1_234_567.0, &opts), "1234567,00");
    }

    #[test]
    fn options_validation() {
        assert!(NumberFormatOptions::pt_br().validate().is_ok());
        assert!(matches!(
            NumberFormatOptions::pt_br().with_fraction_digits(3, 2).validate(),
            Err(FormatError::InvalidOptions(_))
        ));
        assert!(
            NumberFormatOptions::pt_br()
                .with_fraction_digits(0, 21)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn options_from_partial_json() {
        let opts: NumberFormatOptions =
            serde_json::from_value(json!({"maxFractionDigits": 4, "minFractionDigits": 1}))
                .unwrap();
        assert_eq!(opts.max_fraction_digits, 4);
        assert_eq!(opts.min_fraction_digits, 1);
        assert_eq!(opts.decimal_separator, ',');
        assert!(opts.use_grouping);
    }

    #[test]
    fn format_number_values() {
        assert_eq!(
            format_number(&ValueFormatterParams::number(1234.5).unwrap()).unwrap(),
            text("1.234,50")
        );
        assert_eq!(
            format_number(&ValueFormatterParams::number(0.0).unwrap()).unwrap(),
            text("0,00")
        );
    }

    #[test]
    fn non_finite_numbers_have_no_params() {
        assert_eq!(ValueFormatterParams::number(f64::NAN), None);
        assert_eq!(ValueFormatterParams::number(f64::INFINITY), None);
        assert_eq!(ValueFormatterParams::number(f64::NEG_INFINITY), None);
    }

    #[test]
    fn format_number_extremes() {
        let max = ValueFormatterParams::number(f64::MAX).unwrap();
        let FormattedValue::Text(out) = format_number(&max).unwrap() else {
            panic!("expected text");
        };
        assert!(out.starts_with("179.769.313.486.231.570"));
        assert!(out.ends_with(",00"));

        let tiny = ValueFormatterParams::number(-f64::MIN_POSITIVE).unwrap();
        assert_eq!(format_number(&tiny).unwrap(), text("-0,00"));
    }

    #[test]
    fn format_number_rejects_out_of_range_json() {
        assert!(serde_json::from_str::<ValueFormatterParams>(r#"{"value": 1e400}"#).is_err());
    }

    #[test]
    fn format_number_integer_json() {
        let params = ValueFormatterParams {
            value: Some(json!(1500)),
        };
        assert_eq!(format_number(&params).unwrap(), text("1.500,00"));
    }

    #[test]
    fn format_number_passes_through_null_and_missing() {
        assert_eq!(
            format_number(&ValueFormatterParams::null()).unwrap(),
            FormattedValue::PassThrough(Some(Value::Null))
        );
        assert_eq!(
            format_number(&ValueFormatterParams::missing()).unwrap(),
            FormattedValue::PassThrough(None)
        );
    }

    #[test]
    fn format_number_rejects_non_numeric() {
        let params = ValueFormatterParams {
            value: Some(json!("12,5")),
        };
        assert_eq!(
            format_number(&params),
            Err(FormatError::NotANumber { found: "string" })
        );
        let params = ValueFormatterParams {
            value: Some(json!(true)),
        };
        assert_eq!(
            format_number(&params).unwrap_err().to_string(),
            "expected a number, found boolean"
        );
    }

    #[test]
    fn format_number_with_invalid_options() {
        let opts = NumberFormatOptions::pt_br().with_fraction_digits(5, 1);
        assert!(format_number_with(&ValueFormatterParams::number(1.0).unwrap(), &opts).is_err());
    }

    #[test]
    fn params_distinguish_null_from_missing() {
        let missing: ValueFormatterParams = serde_json::from_value(json!({})).unwrap();
        let null: ValueFormatterParams = serde_json::from_value(json!({"value": null})).unwrap();
        assert_eq!(missing, ValueFormatterParams::missing());
        assert_eq!(null, ValueFormatterParams::null());
    }

    #[test]
    fn formatted_value_into_json() {
        assert_eq!(text("1,00").into_json(), Some(json!("1,00")));
        assert_eq!(FormattedValue::PassThrough(None).into_json(), None);
        assert_eq!(
            FormattedValue::PassThrough(Some(Value::Null)).into_json(),
            Some(Value::Null)
        );
    }
}
