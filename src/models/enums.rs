use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ModelError;

/// Macro to generate a string-backed enum with as_str + FromStr.
///
/// Serde goes through the canonical wire string on both sides, so the JSON
/// form, `as_str`, and `FromStr` can never disagree.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(D::Error::custom)
            }
        }
    };
}

str_enum!(RiskLevel {
    High => "high",
    Medium => "medium",
    Low => "low",
});

impl RiskLevel {
    /// Inclusive score band implied by this level.
    pub fn score_band(&self) -> (u8, u8) {
        match self {
            Self::High => (80, 100),
            Self::Medium => (50, 79),
            Self::Low => (10, 49),
        }
    }
}

str_enum!(Gender {
    Male => "Male",
    Female => "Female",
    Other => "Other",
});

str_enum!(AlertType {
    RiskIncrease => "risk-increase",
    MissedAppointment => "missed-appointment",
    NewCondition => "new-condition",
    Medication => "medication",
});

str_enum!(PatientTab {
    All => "all",
    HighRisk => "high-risk",
});

impl Default for PatientTab {
    fn default() -> Self {
        Self::All
    }
}
