use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Sequential document number, printed zero-padded to four digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentNumber(pub u32);

impl DocumentNumber {
    /// The number following `last`, where 0 means nothing was issued yet.
    /// `None` once the sequence is used up.
    pub fn after(last: u32) -> Option<Self> {
        last.checked_add(1).map(DocumentNumber)
    }

    /// Parse a printed number such as "0042".
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse::<u32>().ok().filter(|n| *n > 0).map(DocumentNumber)
    }
}

impl fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl Serialize for DocumentNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DocumentNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text)
            .ok_or_else(|| de::Error::custom(format!("invalid document number '{}'", text)))
    }
}
