use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SendSMS account username.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Query parameter name used by SendSMS (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// SendSMS account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
/// `Debug` output is redacted; the cleartext only ever reaches the wire.
pub struct Password(String);

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

impl Password {
    /// Query parameter name used by SendSMS (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated destination phone number as sent to SendSMS (`to`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you
/// want E.164 normalization, parse into [`PhoneNumber`] and convert it into
/// [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Query parameter name used by SendSMS (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidPhoneNumber { input: value });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to SendSMS.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Query parameter name used by SendSMS (`to`).
    pub const FIELD: &'static str = "to";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit
    /// country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::InvalidPhoneNumber { input });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message body (`text`).
///
/// Invariant: non-empty after trimming. The original value (including
/// whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Query parameter name used by SendSMS (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender label or number (`from`).
///
/// Invariant: non-empty after trimming. The value must be enabled for your
/// SendSMS account.
pub struct SenderId(String);

impl SenderId {
    /// Query parameter name used by SendSMS (`from`).
    pub const FIELD: &'static str = "from";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery-report callback URL (`callback_url`).
///
/// Invariant: parses as an absolute URL.
pub struct CallbackUrl(String);

impl CallbackUrl {
    /// Query parameter name used by SendSMS (`callback_url`).
    pub const FIELD: &'static str = "callback_url";

    /// Create a validated [`CallbackUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if url::Url::parse(trimmed).is_err() {
            return Err(ValidationError::InvalidCallbackUrl {
                input: value.clone(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated callback url.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Character set of the message body (`charset`), e.g. `UTF-8`.
///
/// Invariant: non-empty after trimming.
pub struct Charset(String);

impl Charset {
    /// Query parameter name used by SendSMS (`charset`).
    pub const FIELD: &'static str = "charset";

    /// Create a validated [`Charset`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated charset.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// SMS data-coding scheme (`coding`).
///
/// The gateway interprets the numeric value; no range validation is
/// performed here.
pub struct DataCoding(u8);

impl DataCoding {
    /// Query parameter name used by SendSMS (`coding`).
    pub const FIELD: &'static str = "coding";

    /// Create a data-coding value.
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the underlying coding value.
    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// SMS message class (`class`).
///
/// Invariant: `0..=3` (GSM message classes; class 0 is a flash SMS).
pub struct MessageClass(u8);

impl MessageClass {
    /// Query parameter name used by SendSMS (`class`).
    pub const FIELD: &'static str = "class";

    /// Maximum allowed message class.
    pub const MAX: u8 = 3;

    /// Create a validated message class.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if value > Self::MAX {
            return Err(ValidationError::MessageClassOutOfRange {
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying class value.
    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery-report mask (`report_mask`).
///
/// Bit values: 1 delivered, 2 undelivered, 4 queued at network, 8 sent to
/// network, 16 failed at network. Invariant: `0..=31`.
pub struct ReportMask(u16);

impl ReportMask {
    /// Query parameter name used by SendSMS (`report_mask`).
    pub const FIELD: &'static str = "report_mask";

    /// Report delivered messages.
    pub const DELIVERED: u16 = 1;
    /// Report undelivered messages.
    pub const UNDELIVERED: u16 = 2;
    /// Report messages queued at the network.
    pub const QUEUED_AT_NETWORK: u16 = 4;
    /// Report messages handed over to the network.
    pub const SENT_TO_NETWORK: u16 = 8;
    /// Report messages that failed at the network.
    pub const FAILED_AT_NETWORK: u16 = 16;

    /// Maximum allowed mask (all bits set).
    pub const MAX: u16 = 31;

    /// Create a validated report mask.
    pub fn new(value: u16) -> Result<Self, ValidationError> {
        if value > Self::MAX {
            return Err(ValidationError::ReportMaskOutOfRange {
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying mask value.
    pub fn value(self) -> u16 {
        self.0
    }

    /// Whether the given report bit is set.
    pub fn includes(self, bit: u16) -> bool {
        self.0 & bit != 0
    }
}

impl Default for ReportMask {
    /// Delivered + undelivered + failed at network (1 + 2 + 16).
    fn default() -> Self {
        Self(19)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// URL-shortening behavior for links in the message body (`short_url`).
pub enum ShortUrl {
    /// Turn the gateway's shortener on or off.
    Toggle(bool),
    /// Use a custom shortener domain.
    Custom(String),
}

impl ShortUrl {
    /// Query parameter name used by SendSMS (`short_url`).
    pub const FIELD: &'static str = "short_url";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let username = Username::new("  user ").unwrap();
        assert_eq!(username.as_str(), "user");
        assert!(Username::new("  ").is_err());

        let password = Password::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert!(Password::new("").is_err());
        assert_eq!(format!("{password:?}"), "Password(<redacted>)");

        let sender = SenderId::new(" SHOP ").unwrap();
        assert_eq!(sender.as_str(), "SHOP");
        assert!(SenderId::new("").is_err());

        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(matches!(
            MessageText::new("  "),
            Err(ValidationError::EmptyMessage)
        ));

        let charset = Charset::new(" UTF-8 ").unwrap();
        assert_eq!(charset.as_str(), "UTF-8");
        assert!(Charset::new("").is_err());
    }

    #[test]
    fn raw_phone_number_trims_and_carries_offending_input() {
        let raw = RawPhoneNumber::new(" +40751234567 ").unwrap();
        assert_eq!(raw.raw(), "+40751234567");

        assert!(matches!(
            RawPhoneNumber::new(""),
            Err(ValidationError::InvalidPhoneNumber { input }) if input.is_empty()
        ));
    }

    #[test]
    fn phone_number_parsing_and_equality_use_e164() {
        let p1 = PhoneNumber::parse(None, "+40751234567").unwrap();
        let p2 = PhoneNumber::parse(None, "+40 751 234 567").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+40751234567");
        assert_eq!(p1.raw(), "+40751234567");

        let raw: RawPhoneNumber = p1.clone().into();
        assert_eq!(raw.raw(), "+40751234567");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn callback_url_must_parse() {
        let url = CallbackUrl::new(" https://example.com/dlr ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/dlr");
        assert!(matches!(
            CallbackUrl::new("not a url"),
            Err(ValidationError::InvalidCallbackUrl { .. })
        ));
    }

    #[test]
    fn report_mask_enforces_range_and_exposes_bits() {
        let mask = ReportMask::default();
        assert_eq!(mask.value(), 19);
        assert!(mask.includes(ReportMask::DELIVERED));
        assert!(mask.includes(ReportMask::UNDELIVERED));
        assert!(mask.includes(ReportMask::FAILED_AT_NETWORK));
        assert!(!mask.includes(ReportMask::QUEUED_AT_NETWORK));

        assert!(ReportMask::new(0).is_ok());
        assert!(ReportMask::new(ReportMask::MAX).is_ok());
        assert!(ReportMask::new(ReportMask::MAX + 1).is_err());
    }

    #[test]
    fn message_class_enforces_range() {
        assert!(MessageClass::new(0).is_ok());
        assert!(MessageClass::new(MessageClass::MAX).is_ok());
        assert!(MessageClass::new(MessageClass::MAX + 1).is_err());
    }
}
