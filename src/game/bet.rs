use crate::error::BetError;

/// Largest accepted bet. A doubled bet, or a split pair of naturals, still fits in an `i64`.
pub const MAX_BET: i64 = i64::MAX / 4;

/// Checks a bet against the current balance.
///
/// # Errors
///
/// Returns an error if the bet is zero or negative, above [`MAX_BET`], or
/// larger than `balance`.
pub const fn validate_bet(amount: i64, balance: i64) -> Result<i64, BetError> {
    if amount <= 0 {
        return Err(BetError::NotPositive);
    }
    if amount > MAX_BET {
        return Err(BetError::AboveTableLimit {
            bet: amount,
            limit: MAX_BET,
        });
    }
    if amount > balance {
        return Err(BetError::InsufficientFunds {
            bet: amount,
            balance,
        });
    }
    Ok(amount)
}

/// Parses raw bet text and validates it against the current balance.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`BetError::NotANumber`] for text that is not a whole number, and
/// otherwise the errors of [`validate_bet`].
pub fn parse_bet(raw: &str, balance: i64) -> Result<i64, BetError> {
    let amount = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| BetError::NotANumber)?;
    validate_bet(amount, balance)
}
