use alloy::primitives::{
    U256,
    utils::{format_units, parse_units},
};

use crate::common::DisplayError;

fn pow10(exp: u8) -> U256 {
    U256::from(10).pow(U256::from(exp))
}

// Round a fixed-point value with `scale` decimals to `decimals` decimals,
// half away from zero. Returns the value at the new scale.
pub fn round_to_decimals(value: U256, scale: u8, decimals: u8) -> U256 {
    if decimals >= scale {
        return value.saturating_mul(pow10(decimals - scale));
    }

    let divisor = pow10(scale - decimals);
    let (quotient, remainder) = value.div_rem(divisor);
    if remainder.saturating_mul(U256::from(2)) >= divisor {
        quotient.saturating_add(U256::from(1))
    } else {
        quotient
    }
}

// Fixed-point value printed with exactly `decimals` fraction digits
pub fn format_fixed(value: U256, decimals: u8) -> String {
    if decimals == 0 {
        return value.to_string();
    }

    let (integer, fraction) = value.div_rem(pow10(decimals));
    format!(
        "{}.{:0>width$}",
        integer,
        fraction.to_string(),
        width = decimals as usize
    )
}

/// Format a wei-scaled value rounded to `decimals`, dropping trailing zeros.
pub fn format_trimmed(value: U256, scale: u8, decimals: u8) -> Result<String, DisplayError> {
    let rounded = round_to_decimals(value, scale, decimals);
    let formatted = format_units(rounded, decimals)?;
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };
    Ok(trimmed.to_string())
}

/// Parse a decimal conversion rate ("1850.25") into fixed point.
pub fn parse_rate(rate: &str, decimals: u8) -> Result<U256, DisplayError> {
    let parsed = parse_units(rate.trim(), decimals).map_err(|e| {
        DisplayError::InvalidConversionRate {
            rate: rate.to_string(),
            reason: e.to_string(),
        }
    })?;

    if parsed.is_negative() {
        return Err(DisplayError::InvalidConversionRate {
            rate: rate.to_string(),
            reason: "rate must not be negative".to_string(),
        });
    }

    Ok(parsed.get_absolute())
}
