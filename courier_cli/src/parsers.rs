use jiff::SpanRelativeTo;

/// Accepts `30s`, `5m`, ISO 8601 (`PT1H30M`) or a plain number of seconds.
pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return Ok(duration);
    }

    if let Ok(seconds) = input.parse::<i64>() {
        return Ok(jiff::SignedDuration::from_secs(seconds.abs()));
    }

    Err(format!("Invalid duration '{input}'"))
}

/// Probability in `[0, 1]`.
pub fn parse_probability(input: &str) -> Result<f64, String> {
    let value = input
        .parse::<f64>()
        .map_err(|_| format!("Invalid probability '{input}'"))?;

    if !(0.0..=1.0).contains(&value) {
        return Err(format!("Probability {value} is outside [0, 1]"));
    }

    Ok(value)
}
