//! Client-side form validation.
//!
//! Pure checks that run before any network call; a validation failure never
//! reaches the resource client. Messages are user-facing (Portuguese).

use chrono::NaiveDateTime;

pub const MIN_PASSWORD_LEN: usize = 6;

/// All listed fields must be non-empty (after trimming).
pub fn required(fields: &[&str]) -> Result<(), String> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        Err("Por favor, preencha todos os campos obrigatórios.".to_string())
    } else {
        Ok(())
    }
}

pub fn password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        Err(format!(
            "A senha deve ter pelo menos {MIN_PASSWORD_LEN} caracteres."
        ))
    } else {
        Ok(())
    }
}

/// Parse a daily rate typed into a form. Must be a non-negative decimal.
pub fn daily_rate(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| "Valor da diária inválido.".to_string())?;
    if value.is_sign_negative() || !value.is_finite() {
        Err("O valor da diária não pode ser negativo.".to_string())
    } else {
        Ok(value)
    }
}

/// Parse the value of an HTML `datetime-local` input.
pub fn local_datetime(raw: &str) -> Result<NaiveDateTime, String> {
    // Browsers may or may not include seconds.
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| "Data/hora inválida.".to_string())
}

/// Check-out must be strictly after check-in.
pub fn stay_period(
    checkin: &str,
    checkout: &str,
) -> Result<(NaiveDateTime, NaiveDateTime), String> {
    let start = local_datetime(checkin)?;
    let end = local_datetime(checkout)?;
    if end <= start {
        Err("A data de check-out deve ser posterior à data de check-in.".to_string())
    } else {
        Ok((start, end))
    }
}

/// Progressive CPF mask: digits only, capped at 11, shaped 000.000.000-00.
pub fn mask_cpf(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).take(11).collect();
    let mut out = String::with_capacity(14);
    for (i, c) in digits.chars().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_and_whitespace() {
        assert!(required(&["a", "b"]).is_ok());
        assert!(required(&["a", ""]).is_err());
        assert!(required(&["a", "   "]).is_err());
        assert!(required(&[]).is_ok());
    }

    #[test]
    fn password_needs_six_chars() {
        assert!(password("12345").is_err());
        assert!(password("123456").is_ok());
        assert!(password("").is_err());
    }

    #[test]
    fn daily_rate_must_be_a_non_negative_decimal() {
        assert_eq!(daily_rate("150.00").unwrap(), 150.0);
        assert_eq!(daily_rate(" 0 ").unwrap(), 0.0);
        assert!(daily_rate("-1").is_err());
        assert!(daily_rate("abc").is_err());
        assert!(daily_rate("").is_err());
    }

    #[test]
    fn stay_period_rejects_checkout_not_after_checkin() {
        assert!(stay_period("2026-02-01T14:00", "2026-02-03T11:00").is_ok());
        // equal
        assert!(stay_period("2026-02-01T14:00", "2026-02-01T14:00").is_err());
        // inverted
        assert!(stay_period("2026-02-03T11:00", "2026-02-01T14:00").is_err());
        // unparseable
        assert!(stay_period("", "2026-02-01T14:00").is_err());
    }

    #[test]
    fn local_datetime_accepts_both_browser_shapes() {
        assert!(local_datetime("2026-02-01T14:00").is_ok());
        assert!(local_datetime("2026-02-01T14:00:30").is_ok());
        assert!(local_datetime("01/02/2026 14:00").is_err());
    }

    #[test]
    fn cpf_mask_is_progressive() {
        assert_eq!(mask_cpf("123"), "123");
        assert_eq!(mask_cpf("1234"), "123.4");
        assert_eq!(mask_cpf("1234567"), "123.456.7");
        assert_eq!(mask_cpf("12345678901"), "123.456.789-01");
        // junk and overflow stripped
        assert_eq!(mask_cpf("123.456.789-01999"), "123.456.789-01");
        assert_eq!(mask_cpf("abc12x3"), "123");
    }
}
