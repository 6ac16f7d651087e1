//! Lot size calculation DTOs

use serde::{Deserialize, Serialize};

use crate::domain::lot_sizing::{
    LotSizeCalculation, LotSizeParameters, LotSizingError, PipConvention, parse_decimal,
};

/// Wire names of the calculator fields.
pub mod fields {
    /// Entry price.
    pub const ENTRY_PRICE: &str = "entryPrice";
    /// Stop-loss price.
    pub const STOP_LOSS_PRICE: &str = "stopLossPrice";
    /// Account balance.
    pub const ACCOUNT_BALANCE: &str = "accountBalance";
    /// Risk percentage.
    pub const RISK_PERCENTAGE: &str = "riskPercentageUWantToRisk";
    /// Gold/JPY flag.
    pub const GOLD_OR_JPY_PAIR: &str = "goldOrJPYPair";
}

/// A raw field value as submitted by a form or a JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// JSON boolean.
    Bool(bool),
    /// JSON number.
    Number(serde_json::Number),
    /// Text (every form value arrives as text).
    Text(String),
    /// Anything else (arrays, objects).
    Other(serde_json::Value),
}

impl FieldValue {
    /// Textual form used for numeric parsing and for echoing back to the user.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::Other(v) => v.to_string(),
        }
    }

    /// Only `"on"`, `true` and `"true"` count as set.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        matches!(self, Self::Bool(true)) || matches!(self, Self::Text(s) if s == "on" || s == "true")
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Calculator input, field-for-field as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateLotSizeRequestDto {
    /// Trade entry price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_price: Option<FieldValue>,
    /// Stop-loss price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss_price: Option<FieldValue>,
    /// Account balance in account currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_balance: Option<FieldValue>,
    /// Percent of the balance to risk.
    #[serde(
        rename = "riskPercentageUWantToRisk",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub risk_percentage: Option<FieldValue>,
    /// Gold or JPY-quoted pair flag.
    #[serde(
        rename = "goldOrJPYPair",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gold_or_jpy_pair: Option<FieldValue>,
}

impl CalculateLotSizeRequestDto {
    /// Build a request from plain text values.
    #[must_use]
    pub fn from_text(
        entry_price: &str,
        stop_loss_price: &str,
        account_balance: &str,
        risk_percentage: &str,
        gold_or_jpy_pair: bool,
    ) -> Self {
        Self {
            entry_price: Some(entry_price.into()),
            stop_loss_price: Some(stop_loss_price.into()),
            account_balance: Some(account_balance.into()),
            risk_percentage: Some(risk_percentage.into()),
            gold_or_jpy_pair: Some(gold_or_jpy_pair.into()),
        }
    }

    /// Whether the gold/JPY pip convention applies.
    #[must_use]
    pub fn is_gold_or_jpy(&self) -> bool {
        self.gold_or_jpy_pair
            .as_ref()
            .is_some_and(FieldValue::is_truthy)
    }

    /// Submitted text for a field, by wire name. Empty when absent.
    #[must_use]
    pub fn field_text(&self, name: &str) -> String {
        let value = match name {
            fields::ENTRY_PRICE => self.entry_price.as_ref(),
            fields::STOP_LOSS_PRICE => self.stop_loss_price.as_ref(),
            fields::ACCOUNT_BALANCE => self.account_balance.as_ref(),
            fields::RISK_PERCENTAGE => self.risk_percentage.as_ref(),
            fields::GOLD_OR_JPY_PAIR => self.gold_or_jpy_pair.as_ref(),
            _ => None,
        };
        value.map(FieldValue::to_text).unwrap_or_default()
    }

    /// Parse into domain parameters.
    ///
    /// # Errors
    ///
    /// Returns the first field that is missing or not a number, in form order.
    pub fn to_parameters(&self) -> Result<LotSizeParameters, LotSizingError> {
        let parse = |name: &str, value: Option<&FieldValue>| {
            let text = value.map(FieldValue::to_text);
            parse_decimal(name, text.as_deref())
        };

        Ok(LotSizeParameters {
            entry_price: parse(fields::ENTRY_PRICE, self.entry_price.as_ref())?,
            stop_loss_price: parse(fields::STOP_LOSS_PRICE, self.stop_loss_price.as_ref())?,
            account_balance: parse(fields::ACCOUNT_BALANCE, self.account_balance.as_ref())?,
            risk_percent: parse(fields::RISK_PERCENTAGE, self.risk_percentage.as_ref())?,
            convention: PipConvention::from_gold_or_jpy(self.is_gold_or_jpy()),
        })
    }
}

/// Calculator output with both numbers fixed to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResultDto {
    /// Recommended lot size, e.g. `"0.20"`.
    pub recommended_lot_size: String,
    /// Pips lost if the stop-loss is hit, e.g. `"50.00"`.
    pub pips_if_loose: String,
}

impl From<&LotSizeCalculation> for CalculationResultDto {
    fn from(calc: &LotSizeCalculation) -> Self {
        Self {
            recommended_lot_size: calc.lot_size.to_string(),
            pips_if_loose: calc.pips.to_string(),
        }
    }
}
