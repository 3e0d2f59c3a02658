// Currency conversion (fixed-rate stand-in)
use crate::domain::ConversionError;
use tracing::debug;

/// Default USD -> EUR rate
pub const DEFAULT_EUR_RATE: f64 = 0.85;

/// Converts salary amounts to EUR using a fixed multiplicative rate.
///
/// Rejections are returned as [`ConversionError`]; callers on the opaque
/// channel fold them into their own result at the service boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyConverter {
    rate: f64,
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self {
            rate: DEFAULT_EUR_RATE,
        }
    }
}

impl CurrencyConverter {
    /// Create a converter with a custom fixed rate
    ///
    /// # Arguments
    /// * `rate` - Multiplier applied to every amount (finite and > 0)
    pub fn with_rate(rate: f64) -> Result<Self, ConversionError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConversionError::InvalidArgument(format!(
                "conversion rate must be a positive number, got {}",
                rate
            )));
        }
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Convert an amount to EUR
    ///
    /// Returns:
    /// - `Ok(amount * rate)` for a present, non-negative amount
    /// - `ConversionError::InvalidArgument` when the amount is absent or negative
    pub fn convert_to_eur(&self, amount: Option<f64>) -> Result<f64, ConversionError> {
        let amount = amount.ok_or_else(|| {
            ConversionError::InvalidArgument("amount must not be absent".to_string())
        })?;

        if amount < 0.0 {
            return Err(ConversionError::InvalidArgument(format!(
                "amount must not be negative, got {}",
                amount
            )));
        }

        let converted = amount * self.rate;
        debug!(amount = %amount, rate = %self.rate, converted = %converted, "Converted to EUR");
        Ok(converted)
    }
}
