use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Baltimore virus classes, grouped by genome type and replication strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BaltimoreClass {
    #[serde(rename = "I")]
    I,
    #[serde(rename = "II")]
    II,
    #[serde(rename = "III")]
    III,
    #[serde(rename = "IV")]
    IV,
    #[serde(rename = "V")]
    V,
    #[serde(rename = "VI")]
    VI,
    #[serde(rename = "VII")]
    VII,
}

impl BaltimoreClass {
    pub const ALL: [BaltimoreClass; 7] = [
        Self::I,
        Self::II,
        Self::III,
        Self::IV,
        Self::V,
        Self::VI,
        Self::VII,
    ];

    pub fn numeral(&self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
            Self::V => "V",
            Self::VI => "VI",
            Self::VII => "VII",
        }
    }

    /// Nucleic acid and sense, e.g. `-ssRNA`
    pub fn genome(&self) -> &'static str {
        match self {
            Self::I => "dsDNA",
            Self::II => "ssDNA",
            Self::III => "dsRNA",
            Self::IV => "+ssRNA",
            Self::V => "-ssRNA",
            Self::VI => "ssRNA-RT",
            Self::VII => "dsDNA-RT",
        }
    }
}

impl fmt::Display for BaltimoreClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.numeral())
    }
}

/// Accepts the roman numeral or the genome label
impl FromStr for BaltimoreClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|class| class.numeral().eq_ignore_ascii_case(s) || class.genome() == s)
            .ok_or_else(|| format!("unknown Baltimore class '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("vii".parse::<BaltimoreClass>(), Ok(BaltimoreClass::VII));
        assert_eq!("-ssRNA".parse::<BaltimoreClass>(), Ok(BaltimoreClass::V));
        assert!("VIII".parse::<BaltimoreClass>().is_err());
    }

    #[test]
    fn test_display_and_genome() {
        assert_eq!(BaltimoreClass::IV.to_string(), "IV");
        assert_eq!(BaltimoreClass::IV.genome(), "+ssRNA");
        assert_eq!(
            serde_json::to_string(&BaltimoreClass::III).unwrap(),
            "\"III\""
        );
    }
}
