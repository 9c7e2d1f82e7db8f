use tm4c_port::gpio::PinMode;

/// Parse a pin mode given by name (`adc`, `dio`, `alt1` to `alt9`) or by code.
pub(crate) fn mode_code(value: &str) -> Result<u8, String> {
    let lower = value.to_ascii_lowercase();
    match lower.as_str() {
        "adc" | "analog" => return Ok(PinMode::Adc.into()),
        "dio" | "gpio" => return Ok(PinMode::Dio.into()),
        _ => {}
    }
    let digits = lower.strip_prefix("alt").unwrap_or(&lower);
    digits
        .parse::<u8>()
        .map_err(|e| format!("not a pin mode: {value} ({e})"))
}
