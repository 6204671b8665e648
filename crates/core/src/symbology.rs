//! Barcode symbology selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Barcode scheme used for the folio column.
///
/// The symbology also decides which optional columns the sheet carries,
/// see [`crate::ColumnSet::for_symbology`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Symbology {
    /// Fixed-length numeric EAN-13 with check digit.
    Ean13,
    /// Variable-length alphanumeric Code 128.
    #[default]
    Code128,
}

impl Symbology {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Ean13 => "ean13",
            Self::Code128 => "code128",
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbology {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "ean13" => Ok(Self::Ean13),
            "code128" => Ok(Self::Code128),
            _ => Err(ConfigError::UnknownSymbology(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!("ean13".parse::<Symbology>(), Ok(Symbology::Ean13));
        assert_eq!("EAN-13".parse::<Symbology>(), Ok(Symbology::Ean13));
        assert_eq!("Code128".parse::<Symbology>(), Ok(Symbology::Code128));
        assert_eq!("code_128".parse::<Symbology>(), Ok(Symbology::Code128));
    }

    #[test]
    fn rejects_unknown() {
        assert_eq!(
            "qr".parse::<Symbology>(),
            Err(ConfigError::UnknownSymbology("qr".to_owned()))
        );
    }
}
