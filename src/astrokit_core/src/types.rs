use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValueError {
    #[error("invalid star name: must be a non-empty string")]
    StarName,
    #[error("invalid payload: must be a non-empty string")]
    Payload,
    #[error("invalid symbol version: must be between 1 and 40")]
    SymbolVersion,
}

/// A star identifier as understood by SIMBAD (e.g. "Sirius", "HD 48915", "* alf CMa").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StarName(String);
impl StarName {
    pub fn new(s: &str) -> Result<Self, ValueError> {
        let t = s.trim();
        if t.is_empty() {
            Err(ValueError::StarName)
        } else {
            Ok(Self(t.into()))
        }
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl FromStr for StarName {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
impl AsRef<str> for StarName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl std::fmt::Display for StarName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text to encode in a QR symbol. Only emptiness is checked, capacity is left to the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload(String);
impl Payload {
    pub fn new(s: &str) -> Result<Self, ValueError> {
        if s.is_empty() {
            Err(ValueError::Payload)
        } else {
            Ok(Self(s.into()))
        }
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl FromStr for Payload {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
impl AsRef<str> for Payload {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// QR symbol version, 1 (21x21 modules) to 40 (177x177 modules).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolVersion(u8);
impl SymbolVersion {
    pub fn new(v: u8) -> Result<Self, ValueError> {
        if (1..=40).contains(&v) {
            Ok(Self(v))
        } else {
            Err(ValueError::SymbolVersion)
        }
    }
    pub fn get(self) -> u8 {
        self.0
    }
}
impl FromStr for SymbolVersion {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v: u8 = s.trim().parse().map_err(|_| ValueError::SymbolVersion)?;
        Self::new(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_name_is_trimmed() {
        let name = StarName::new("  Sirius ").unwrap();
        assert_eq!(name.as_str(), "Sirius");
        assert_eq!(name.to_string(), "Sirius");
    }

    #[test]
    fn test_star_name_rejects_blank() {
        assert!(StarName::new("").is_err());
        assert!("   ".parse::<StarName>().is_err());
    }

    #[test]
    fn test_payload_keeps_whitespace() {
        let payload = Payload::new(" a b ").unwrap();
        assert_eq!(payload.as_ref(), " a b ");
        assert!(Payload::new("").is_err());
    }

    #[test]
    fn test_symbol_version_range() {
        assert_eq!("1".parse::<SymbolVersion>().unwrap().get(), 1);
        assert_eq!("40".parse::<SymbolVersion>().unwrap().get(), 40);
        assert!("0".parse::<SymbolVersion>().is_err());
        assert!("41".parse::<SymbolVersion>().is_err());
        assert!("v2".parse::<SymbolVersion>().is_err());
    }
}
