use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Declares a closed enumeration whose display label is also its CSV and
/// serde representation.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($label => Ok($name::$variant),)+
                    _ => Err(Error::UnknownLabel {
                        kind: $kind,
                        value: value.to_string(),
                    }),
                }
            }
        }
    };
}

labeled_enum! {
    /// Top-level material classification.
    Category, "category" {
        Natural => "Natural",
        Synthetic => "Synthetic",
        Recycled => "Recycled",
        BioBased => "Bio-based",
    }
}

labeled_enum! {
    /// Product component a material is used for.
    UseCase, "use case" {
        Fabric => "Fabric",
        Upper => "Upper",
        Midsole => "Midsole",
        Outsole => "Outsole",
        Packaging => "Packaging",
        Trim => "Trim",
    }
}

labeled_enum! {
    /// Primary sourcing region.
    Region, "region" {
        Vietnam => "Vietnam",
        China => "China",
        India => "India",
        Turkey => "Turkey",
        Usa => "USA",
        Mexico => "Mexico",
        Brazil => "Brazil",
        Indonesia => "Indonesia",
        Thailand => "Thailand",
        Italy => "Italy",
    }
}

labeled_enum! {
    /// Supply-chain tier. Tier 1 is the direct supplier.
    Tier, "tier" {
        Tier1 => "Tier 1",
        Tier2 => "Tier 2",
        Tier3 => "Tier 3",
    }
}

labeled_enum! {
    /// Shared three-step scale for risk and confidence levels.
    Level, "level" {
        Low => "Low",
        Medium => "Medium",
        High => "High",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().ok(), Some(*category));
        }
        for region in Region::ALL {
            assert_eq!(region.to_string().parse::<Region>().ok(), Some(*region));
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "Tier 4".parse::<Tier>().unwrap_err();
        assert_eq!(err.to_string(), "unknown tier label: 'Tier 4'");
    }

    #[test]
    fn enumerations_keep_fixed_order() {
        let labels: Vec<&str> = UseCase::ALL.iter().map(|u| u.as_str()).collect();
        assert_eq!(
            labels,
            ["Fabric", "Upper", "Midsole", "Outsole", "Packaging", "Trim"]
        );
        assert_eq!(Region::ALL.len(), 10);
        assert_eq!(Category::BioBased.as_str(), "Bio-based");
        assert_eq!(Region::Usa.as_str(), "USA");
    }
}
