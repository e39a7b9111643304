//! US state codes (50 states plus the District of Columbia)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Two-letter USPS state code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StateCode {
    AL,
    AK,
    AZ,
    AR,
    CA,
    CO,
    CT,
    DE,
    DC,
    FL,
    GA,
    HI,
    ID,
    IL,
    IN,
    IA,
    KS,
    KY,
    LA,
    ME,
    MD,
    MA,
    MI,
    MN,
    MS,
    MO,
    MT,
    NE,
    NV,
    NH,
    NJ,
    NM,
    NY,
    NC,
    ND,
    OH,
    OK,
    OR,
    PA,
    RI,
    SC,
    SD,
    TN,
    TX,
    UT,
    VT,
    VA,
    WA,
    WV,
    WI,
    WY,
}

impl StateCode {
    pub const ALL: [StateCode; 51] = [
        StateCode::AL,
        StateCode::AK,
        StateCode::AZ,
        StateCode::AR,
        StateCode::CA,
        StateCode::CO,
        StateCode::CT,
        StateCode::DE,
        StateCode::DC,
        StateCode::FL,
        StateCode::GA,
        StateCode::HI,
        StateCode::ID,
        StateCode::IL,
        StateCode::IN,
        StateCode::IA,
        StateCode::KS,
        StateCode::KY,
        StateCode::LA,
        StateCode::ME,
        StateCode::MD,
        StateCode::MA,
        StateCode::MI,
        StateCode::MN,
        StateCode::MS,
        StateCode::MO,
        StateCode::MT,
        StateCode::NE,
        StateCode::NV,
        StateCode::NH,
        StateCode::NJ,
        StateCode::NM,
        StateCode::NY,
        StateCode::NC,
        StateCode::ND,
        StateCode::OH,
        StateCode::OK,
        StateCode::OR,
        StateCode::PA,
        StateCode::RI,
        StateCode::SC,
        StateCode::SD,
        StateCode::TN,
        StateCode::TX,
        StateCode::UT,
        StateCode::VT,
        StateCode::VA,
        StateCode::WA,
        StateCode::WV,
        StateCode::WI,
        StateCode::WY,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StateCode::AL => "AL",
            StateCode::AK => "AK",
            StateCode::AZ => "AZ",
            StateCode::AR => "AR",
            StateCode::CA => "CA",
            StateCode::CO => "CO",
            StateCode::CT => "CT",
            StateCode::DE => "DE",
            StateCode::DC => "DC",
            StateCode::FL => "FL",
            StateCode::GA => "GA",
            StateCode::HI => "HI",
            StateCode::ID => "ID",
            StateCode::IL => "IL",
            StateCode::IN => "IN",
            StateCode::IA => "IA",
            StateCode::KS => "KS",
            StateCode::KY => "KY",
            StateCode::LA => "LA",
            StateCode::ME => "ME",
            StateCode::MD => "MD",
            StateCode::MA => "MA",
            StateCode::MI => "MI",
            StateCode::MN => "MN",
            StateCode::MS => "MS",
            StateCode::MO => "MO",
            StateCode::MT => "MT",
            StateCode::NE => "NE",
            StateCode::NV => "NV",
            StateCode::NH => "NH",
            StateCode::NJ => "NJ",
            StateCode::NM => "NM",
            StateCode::NY => "NY",
            StateCode::NC => "NC",
            StateCode::ND => "ND",
            StateCode::OH => "OH",
            StateCode::OK => "OK",
            StateCode::OR => "OR",
            StateCode::PA => "PA",
            StateCode::RI => "RI",
            StateCode::SC => "SC",
            StateCode::SD => "SD",
            StateCode::TN => "TN",
            StateCode::TX => "TX",
            StateCode::UT => "UT",
            StateCode::VT => "VT",
            StateCode::VA => "VA",
            StateCode::WA => "WA",
            StateCode::WV => "WV",
            StateCode::WI => "WI",
            StateCode::WY => "WY",
        }
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        StateCode::ALL
            .iter()
            .copied()
            .find(|state| state.as_str() == code)
            .ok_or_else(|| anyhow::anyhow!("Unknown state code: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("va".parse::<StateCode>().unwrap(), StateCode::VA);
        assert_eq!(" DC ".parse::<StateCode>().unwrap(), StateCode::DC);
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!("PR".parse::<StateCode>().is_err());
        assert!("".parse::<StateCode>().is_err());
    }

    #[test]
    fn test_display_round_trips_every_code() {
        for state in StateCode::ALL {
            assert_eq!(state.to_string().parse::<StateCode>().unwrap(), state);
        }
    }

    #[test]
    fn test_serializes_as_two_letter_code() {
        assert_eq!(serde_json::to_string(&StateCode::NY).unwrap(), "\"NY\"");
        let parsed: StateCode = serde_json::from_str("\"TX\"").unwrap();
        assert_eq!(parsed, StateCode::TX);
    }
}
