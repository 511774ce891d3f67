use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

/// ledger configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    #[serde(default)]
    pub accrual: AccrualConfig,
    /// percentages offered as one-click payment amounts
    #[serde(default = "default_quick_payment_percentages")]
    pub quick_payment_percentages: Vec<Decimal>,
}

/// accrual engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualConfig {
    #[serde(default)]
    pub pre_start_payments: PreStartPaymentPolicy,
    /// decimal places used when presenting currency amounts
    #[serde(default = "default_currency_scale")]
    pub currency_scale: u32,
}

/// treatment of payments dated before the loan start date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PreStartPaymentPolicy {
    /// apply the payment with zero elapsed months before it
    #[default]
    ZeroElapsed,
    /// fail with `PaymentBeforeStart`
    Reject,
}

fn default_currency_scale() -> u32 {
    2
}

fn default_quick_payment_percentages() -> Vec<Decimal> {
    vec![dec!(25), dec!(50), dec!(75), dec!(100)]
}

impl Default for AccrualConfig {
    fn default() -> Self {
        Self {
            pre_start_payments: PreStartPaymentPolicy::ZeroElapsed,
            currency_scale: default_currency_scale(),
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            accrual: AccrualConfig::default(),
            quick_payment_percentages: default_quick_payment_percentages(),
        }
    }
}

impl LedgerConfig {
    /// configuration that rejects payments dated before the loan start
    pub fn strict() -> Self {
        Self {
            accrual: AccrualConfig {
                pre_start_payments: PreStartPaymentPolicy::Reject,
                ..AccrualConfig::default()
            },
            ..Self::default()
        }
    }

    /// load from json, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LedgerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.accrual.currency_scale > 8 {
            return Err(LedgerError::InvalidConfiguration {
                message: format!(
                    "currency scale {} exceeds working precision of 8",
                    self.accrual.currency_scale
                ),
            });
        }

        for pct in &self.quick_payment_percentages {
            if *pct <= Decimal::ZERO || *pct > dec!(100) {
                return Err(LedgerError::InvalidConfiguration {
                    message: format!("quick payment percentage {pct} outside (0, 100]"),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LedgerConfig::default();
        assert_eq!(config.accrual.pre_start_payments, PreStartPaymentPolicy::ZeroElapsed);
        assert_eq!(config.accrual.currency_scale, 2);
        assert_eq!(config.quick_payment_percentages.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strict_preset() {
        let config = LedgerConfig::strict();
        assert_eq!(config.accrual.pre_start_payments, PreStartPaymentPolicy::Reject);
        assert_eq!(config.quick_payment_percentages, LedgerConfig::default().quick_payment_percentages);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = LedgerConfig::from_json(r#"{"accrual": {"pre_start_payments": "Reject"}}"#).unwrap();
        assert_eq!(config.accrual.pre_start_payments, PreStartPaymentPolicy::Reject);
        assert_eq!(config.accrual.currency_scale, 2);
        assert_eq!(config.quick_payment_percentages, default_quick_payment_percentages());

        let config = LedgerConfig::from_json("{}").unwrap();
        assert_eq!(config, LedgerConfig::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = LedgerConfig::strict();
        let json = config.to_json().unwrap();
        assert_eq!(LedgerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_percentages_rejected() {
        let result = LedgerConfig::from_json(r#"{"quick_payment_percentages": ["0"]}"#);
        assert!(matches!(result, Err(LedgerError::InvalidConfiguration { .. })));

        let result = LedgerConfig::from_json(r#"{"quick_payment_percentages": [150]}"#);
        assert!(matches!(result, Err(LedgerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let result = LedgerConfig::from_json(r#"{"accrual": {"currency_scale": 12}}"#);
        assert!(matches!(result, Err(LedgerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(LedgerConfig::from_json("{"), Err(LedgerError::Serialization(_))));
    }
}
