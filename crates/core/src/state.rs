//! Brazilian federative units, the closed set of valid address states.

use serde::{Deserialize, Serialize};

/// Two-letter code of a Brazilian federative unit.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    AC,
    AL,
    AP,
    AM,
    BA,
    CE,
    DF,
    ES,
    GO,
    MA,
    MT,
    MS,
    MG,
    PA,
    PB,
    PR,
    PE,
    PI,
    RJ,
    RN,
    RS,
    RO,
    RR,
    SC,
    SP,
    SE,
    TO,
}

impl State {
    pub const ALL: [State; 27] = [
        State::AC,
        State::AL,
        State::AP,
        State::AM,
        State::BA,
        State::CE,
        State::DF,
        State::ES,
        State::GO,
        State::MA,
        State::MT,
        State::MS,
        State::MG,
        State::PA,
        State::PB,
        State::PR,
        State::PE,
        State::PI,
        State::RJ,
        State::RN,
        State::RS,
        State::RO,
        State::RR,
        State::SC,
        State::SP,
        State::SE,
        State::TO,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            State::AC => "AC",
            State::AL => "AL",
            State::AP => "AP",
            State::AM => "AM",
            State::BA => "BA",
            State::CE => "CE",
            State::DF => "DF",
            State::ES => "ES",
            State::GO => "GO",
            State::MA => "MA",
            State::MT => "MT",
            State::MS => "MS",
            State::MG => "MG",
            State::PA => "PA",
            State::PB => "PB",
            State::PR => "PR",
            State::PE => "PE",
            State::PI => "PI",
            State::RJ => "RJ",
            State::RN => "RN",
            State::RS => "RS",
            State::RO => "RO",
            State::RR => "RR",
            State::SC => "SC",
            State::SP => "SP",
            State::SE => "SE",
            State::TO => "TO",
        }
    }

    /// Parse a two-letter code. Returns `None` for anything outside the set.
    pub fn from_code(code: &str) -> Option<State> {
        State::ALL.iter().copied().find(|s| s.as_str() == code)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_accepts_every_unit() {
        for state in State::ALL {
            assert_eq!(State::from_code(state.as_str()), Some(state));
        }
    }

    #[test]
    fn from_code_rejects_unknown_and_lowercase() {
        assert_eq!(State::from_code("XX"), None);
        assert_eq!(State::from_code("sp"), None);
        assert_eq!(State::from_code(""), None);
    }

    #[test]
    fn serializes_as_bare_code() {
        assert_eq!(serde_json::to_string(&State::SP).unwrap(), "\"SP\"");
    }
}
