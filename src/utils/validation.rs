use anyhow::bail;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::NaiveDate;
use validator::ValidationError;

/// Payload-level check that a field holds a real `YYYY-MM-DD` date.
pub fn iso_date(value: &str) -> Result<(), ValidationError> {
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        let mut err = ValidationError::new("date");
        err.message = Some("must be a valid date (YYYY-MM-DD)".into());
        return Err(err);
    }
    Ok(())
}

/// Splits a self-describing `data:<mime>;base64,<payload>` blob into its
/// MIME type and decoded bytes. Only base64 data URIs are accepted.
pub fn parse_data_uri(uri: &str) -> anyhow::Result<(String, Vec<u8>)> {
    let Some(rest) = uri.strip_prefix("data:") else {
        bail!("expected a data: URI");
    };
    let Some((meta, payload)) = rest.split_once(',') else {
        bail!("data URI is missing its payload separator");
    };
    let Some(mime) = meta.strip_suffix(";base64") else {
        bail!("only base64-encoded data URIs are supported");
    };
    if mime.is_empty() {
        bail!("data URI is missing its MIME type");
    }
    let bytes = BASE64.decode(payload.trim().as_bytes())?;
    if bytes.is_empty() {
        bail!("document payload is empty");
    }
    Ok((mime.to_string(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_real_dates_only() {
        assert!(iso_date("2025-01-01").is_ok());
        assert!(iso_date("2025-02-30").is_err());
        assert!(iso_date("tomorrow").is_err());
    }

    #[test]
    fn splits_a_well_formed_data_uri() {
        let (mime, bytes) = parse_data_uri("data:application/pdf;base64,JVBERg==").unwrap();
        assert_eq!(mime, "application/pdf");
        assert_eq!(bytes, b"%PDF");
    }

    #[test]
    fn rejects_malformed_data_uris() {
        assert!(parse_data_uri("JVBERg==").is_err());
        assert!(parse_data_uri("data:application/pdf;base64").is_err());
        assert!(parse_data_uri("data:;base64,JVBERg==").is_err());
        assert!(parse_data_uri("data:application/pdf,plain").is_err());
        assert!(parse_data_uri("data:application/pdf;base64,!!!").is_err());
    }
}
