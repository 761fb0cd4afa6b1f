// Duration parsing for elapsed-time arguments

use anyhow::Result;

/// Parse a duration expression and return seconds
///
/// Accepts unit form (`45s`, `2m`, `1h`, `1m30s`) and clock form (`MM:SS`,
/// the same shape the game timer displays). Zero is allowed.
pub fn parse_duration(expr: &str) -> Result<i64> {
    let expr = expr.trim();
    if expr.is_empty() {
        anyhow::bail!("Duration cannot be empty");
    }

    if let Some((mins, secs)) = expr.split_once(':') {
        let mins: i64 = mins.parse()
            .map_err(|_| anyhow::anyhow!("Invalid duration format: {}", expr))?;
        let secs: i64 = secs.parse()
            .map_err(|_| anyhow::anyhow!("Invalid duration format: {}", expr))?;
        if mins < 0 || !(0..60).contains(&secs) {
            anyhow::bail!("Invalid duration format: {}", expr);
        }
        return mins
            .checked_mul(60)
            .and_then(|m| m.checked_add(secs))
            .ok_or_else(|| anyhow::anyhow!("Duration out of range: {}", expr));
    }

    let mut total_secs = 0i64;
    let mut digits = String::new();

    for c in expr.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let multiplier = match c {
            'd' => 86400,
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => anyhow::bail!("Invalid duration format: {}", expr),
        };
        if digits.is_empty() {
            anyhow::bail!("Invalid duration format: {}", expr);
        }
        let value: i64 = digits.parse()
            .map_err(|_| anyhow::anyhow!("Duration out of range: {}", expr))?;
        total_secs = value
            .checked_mul(multiplier)
            .and_then(|v| total_secs.checked_add(v))
            .ok_or_else(|| anyhow::anyhow!("Duration out of range: {}", expr))?;
        digits.clear();
    }

    // Trailing number without a unit
    if !digits.is_empty() {
        anyhow::bail!("Invalid duration format: {} (missing unit)", expr);
    }

    Ok(total_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("30s").unwrap(), 30);
        assert_eq!(parse_duration("10m").unwrap(), 600);
        assert_eq!(parse_duration("2h").unwrap(), 7200);
        assert_eq!(parse_duration("1m30s").unwrap(), 90);
        assert_eq!(parse_duration("0s").unwrap(), 0);
    }

    #[test]
    fn test_parse_clock_form() {
        assert_eq!(parse_duration("00:45").unwrap(), 45);
        assert_eq!(parse_duration("05:00").unwrap(), 300);
        assert_eq!(parse_duration("120:01").unwrap(), 7201);
        assert!(parse_duration("01:75").is_err());
    }

    #[test]
    fn test_parse_duration_errors() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("45").is_err());
        assert!(parse_duration("m").is_err());
        assert!(parse_duration("5x").is_err());
    }

    #[test]
    fn test_parse_duration_overflow() {
        let err = parse_duration("999999999999999999d").unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert!(parse_duration("9223372036854775807s1s").is_err());
        assert!(parse_duration("99999999999999999999s").is_err());
        assert!(parse_duration("999999999999999999:00").is_err());
    }
}
