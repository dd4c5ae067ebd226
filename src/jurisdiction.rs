//! U.S. state codes accepted as governing law

use std::fmt;
use std::str::FromStr;

macro_rules! us_states {
    ($($variant:ident => $code:literal, $name:literal;)+) => {
        /// Governing-law jurisdiction (50 states plus the District of Columbia)
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum UsState {
            $($variant,)+
        }

        impl UsState {
            pub fn all() -> &'static [UsState] {
                &[$(UsState::$variant),+]
            }

            /// Two-letter postal code
            pub fn code(&self) -> &'static str {
                match self {
                    $(UsState::$variant => $code,)+
                }
            }

            /// Full name used in clause text
            pub fn name(&self) -> &'static str {
                match self {
                    $(UsState::$variant => $name,)+
                }
            }
        }
    };
}

us_states! {
    Alabama => "AL", "Alabama";
    Alaska => "AK", "Alaska";
    Arizona => "AZ", "Arizona";
    Arkansas => "AR", "Arkansas";
    California => "CA", "California";
    Colorado => "CO", "Colorado";
    Connecticut => "CT", "Connecticut";
    Delaware => "DE", "Delaware";
    DistrictOfColumbia => "DC", "District of Columbia";
    Florida => "FL", "Florida";
    Georgia => "GA", "Georgia";
    Hawaii => "HI", "Hawaii";
    Idaho => "ID", "Idaho";
    Illinois => "IL", "Illinois";
    Indiana => "IN", "Indiana";
    Iowa => "IA", "Iowa";
    Kansas => "KS", "Kansas";
    Kentucky => "KY", "Kentucky";
    Louisiana => "LA", "Louisiana";
    Maine => "ME", "Maine";
    Maryland => "MD", "Maryland";
    Massachusetts => "MA", "Massachusetts";
    Michigan => "MI", "Michigan";
    Minnesota => "MN", "Minnesota";
    Mississippi => "MS", "Mississippi";
    Missouri => "MO", "Missouri";
    Montana => "MT", "Montana";
    Nebraska => "NE", "Nebraska";
    Nevada => "NV", "Nevada";
    NewHampshire => "NH", "New Hampshire";
    NewJersey => "NJ", "New Jersey";
    NewMexico => "NM", "New Mexico";
    NewYork => "NY", "New York";
    NorthCarolina => "NC", "North Carolina";
    NorthDakota => "ND", "North Dakota";
    Ohio => "OH", "Ohio";
    Oklahoma => "OK", "Oklahoma";
    Oregon => "OR", "Oregon";
    Pennsylvania => "PA", "Pennsylvania";
    RhodeIsland => "RI", "Rhode Island";
    SouthCarolina => "SC", "South Carolina";
    SouthDakota => "SD", "South Dakota";
    Tennessee => "TN", "Tennessee";
    Texas => "TX", "Texas";
    Utah => "UT", "Utah";
    Vermont => "VT", "Vermont";
    Virginia => "VA", "Virginia";
    Washington => "WA", "Washington";
    WestVirginia => "WV", "West Virginia";
    Wisconsin => "WI", "Wisconsin";
    Wyoming => "WY", "Wyoming";
}

impl fmt::Display for UsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown state code '{0}'")]
pub struct ParseStateError(pub String);

impl FromStr for UsState {
    type Err = ParseStateError;

    /// Accepts postal codes case-insensitively ("ca", "CA")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        UsState::all()
            .iter()
            .copied()
            .find(|st| st.code() == code)
            .ok_or_else(|| ParseStateError(s.to_string()))
    }
}

/// Display name for a governing-law code; unknown codes pass through unchanged
pub fn state_name(code: &str) -> String {
    code.parse::<UsState>()
        .map(|st| st.name().to_string())
        .unwrap_or_else(|_| code.trim().to_string())
}
