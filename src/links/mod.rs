//! Dial, SMS and WhatsApp link builders.
//!
//! Only the URIs are produced here; launching them is up to the host.

use crate::config::Config;
use crate::domain::{PhoneNumber, ValidationError};

const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";

/// Country-code preferences used when building WhatsApp links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSettings {
    /// Default dialing prefix, e.g. `+880`
    pub default_country_code: String,

    /// Ask the user for a prefix instead of prepending the default
    pub always_ask: bool,
}

impl LinkSettings {
    pub fn new(default_country_code: impl Into<String>, always_ask: bool) -> Self {
        Self {
            default_country_code: default_country_code.into(),
            always_ask,
        }
    }
}

impl From<&Config> for LinkSettings {
    fn from(config: &Config) -> Self {
        Self::new(config.default_country_code.clone(), config.always_ask_country_code)
    }
}

/// Outcome of resolving a WhatsApp link for a phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhatsAppTarget {
    /// Link is ready to open
    Ready(String),

    /// The number lacks the default prefix and the host must ask for one,
    /// then call [`whatsapp_url_with_code`]
    NeedsCountryCode,
}

/// `tel:` URI for the dialer.
pub fn dial_uri(phone: &PhoneNumber) -> String {
    format!("tel:{}", urlencoding::encode(phone.as_str()))
}

/// `sms:` URI for the messaging app.
pub fn sms_uri(phone: &PhoneNumber) -> String {
    format!("sms:{}", urlencoding::encode(phone.as_str()))
}

/// `https://api.whatsapp.com/send?phone=<digits>`
pub fn whatsapp_url(number_digits: &str) -> String {
    format!(
        "{}?phone={}",
        WHATSAPP_SEND_URL,
        urlencoding::encode(number_digits)
    )
}

fn digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// International digits for `phone` under `country_code`: the code's digits
/// followed by the phone's digits with one leading trunk `0` removed.
pub fn whatsapp_number(phone: &PhoneNumber, country_code: &str) -> String {
    let local = phone.digits_only();
    let local = local.strip_prefix('0').unwrap_or(&local);
    format!("{}{}", digits(country_code), local)
}

/// WhatsApp link using an explicitly chosen country code.
pub fn whatsapp_url_with_code(phone: &PhoneNumber, country_code: &str) -> String {
    whatsapp_url(&whatsapp_number(phone, country_code))
}

/// Resolve the WhatsApp link for a stored phone value.
///
/// Numbers whose digits already start with the default code are used as is.
/// Otherwise the default code is prepended, unless `always_ask` is set.
///
/// # Errors
///
/// `ValidationError::InvalidPhone` if `raw_phone` is not dialable.
pub fn resolve_whatsapp(
    raw_phone: &str,
    settings: &LinkSettings,
) -> Result<WhatsAppTarget, ValidationError> {
    let phone = PhoneNumber::new(raw_phone)?;
    let number = phone.digits_only();
    let code = digits(&settings.default_country_code);

    if number.starts_with(&code) {
        return Ok(WhatsAppTarget::Ready(whatsapp_url(&number)));
    }

    if settings.always_ask {
        Ok(WhatsAppTarget::NeedsCountryCode)
    } else {
        Ok(WhatsAppTarget::Ready(whatsapp_url_with_code(
            &phone,
            &settings.default_country_code,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(s: &str) -> PhoneNumber {
        PhoneNumber::new(s).unwrap()
    }

    #[test]
    fn test_dial_and_sms_uris() {
        assert_eq!(dial_uri(&phone("01711000000")), "tel:01711000000");
        assert_eq!(sms_uri(&phone("+1 555")), "sms:%2B1%20555");
    }

    #[test]
    fn test_whatsapp_number_drops_one_trunk_zero() {
        assert_eq!(whatsapp_number(&phone("01711-000000"), "+880"), "8801711000000");
        assert_eq!(whatsapp_number(&phone("1711000000"), "880"), "8801711000000");
        assert_eq!(whatsapp_number(&phone("0044 20"), "+1"), "104420");
    }

    #[test]
    fn test_resolve_number_with_code_is_ready() {
        let settings = LinkSettings::new("+880", true);
        assert_eq!(
            resolve_whatsapp("+880 1711-000000", &settings).unwrap(),
            WhatsAppTarget::Ready("https://api.whatsapp.com/send?phone=8801711000000".to_string())
        );
    }

    #[test]
    fn test_resolve_missing_code_asks_or_prepends() {
        let ask = LinkSettings::new("+880", true);
        assert_eq!(
            resolve_whatsapp("01711000000", &ask).unwrap(),
            WhatsAppTarget::NeedsCountryCode
        );

        let prepend = LinkSettings::new("+880", false);
        assert_eq!(
            resolve_whatsapp("01711000000", &prepend).unwrap(),
            WhatsAppTarget::Ready("https://api.whatsapp.com/send?phone=8801711000000".to_string())
        );
    }

    #[test]
    fn test_resolve_rejects_undialable_values() {
        let settings = LinkSettings::new("+880", false);
        assert!(resolve_whatsapp("ask reception", &settings).is_err());
    }
}
