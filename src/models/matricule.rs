//! Matricule and role family types.
//!
//! A matricule is the company-wide employee identifier: one role letter
//! followed by a zero-padded five digit sequence number (e.g. `T00346`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The highest sequence number a matricule can carry.
pub const MAX_MATRICULE_NUMBER: u32 = 99_999;

/// Number of digits in the sequence part of a matricule.
const MATRICULE_DIGITS: usize = 5;

/// The role family of an employee, encoded as the first letter of the matricule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Technician (`T`).
    Technician,
    /// Manager (`M`).
    Manager,
    /// Commercial / sales staff (`C`).
    Commercial,
}

impl Role {
    /// Returns the matricule prefix letter for this role.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_engine::models::Role;
    ///
    /// assert_eq!(Role::Manager.letter(), 'M');
    /// ```
    pub fn letter(self) -> char {
        match self {
            Role::Technician => 'T',
            Role::Manager => 'M',
            Role::Commercial => 'C',
        }
    }

    /// Returns the role encoded by a matricule prefix letter, if any.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'T' => Some(Role::Technician),
            'M' => Some(Role::Manager),
            'C' => Some(Role::Commercial),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Technician => write!(f, "Technician"),
            Role::Manager => write!(f, "Manager"),
            Role::Commercial => write!(f, "Commercial"),
        }
    }
}

/// A validated employee identifier.
///
/// # Example
///
/// ```
/// use hr_engine::models::{Matricule, Role};
///
/// let matricule = Matricule::new(Role::Technician, 346).unwrap();
/// assert_eq!(matricule.to_string(), "T00346");
///
/// let parsed: Matricule = "C00345".parse().unwrap();
/// assert_eq!(parsed.role(), Role::Commercial);
/// assert_eq!(parsed.number(), 345);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Matricule {
    role: Role,
    number: u32,
}

impl Matricule {
    /// Creates a matricule from a role and a sequence number.
    ///
    /// Fails with [`EngineError::CapacityExceeded`] when the number is above
    /// [`MAX_MATRICULE_NUMBER`] and with [`EngineError::InvalidArgument`] when it is zero.
    pub fn new(role: Role, number: u32) -> EngineResult<Self> {
        if number == 0 {
            return Err(EngineError::invalid_argument(
                "matricule",
                "sequence number must be at least 1",
            ));
        }
        if number > MAX_MATRICULE_NUMBER {
            return Err(EngineError::CapacityExceeded {
                limit: MAX_MATRICULE_NUMBER,
            });
        }
        Ok(Self { role, number })
    }

    /// Returns the role family encoded in the prefix.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the sequence number.
    pub fn number(&self) -> u32 {
        self.number
    }
}

impl fmt::Display for Matricule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:0width$}",
            self.role.letter(),
            self.number,
            width = MATRICULE_DIGITS
        )
    }
}

impl FromStr for Matricule {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || {
            EngineError::invalid_argument(
                "matricule",
                format!("'{}' is not a role letter followed by {} digits", s, MATRICULE_DIGITS),
            )
        };

        let mut chars = s.chars();
        let role = chars
            .next()
            .and_then(Role::from_letter)
            .ok_or_else(malformed)?;
        let digits = chars.as_str();
        if digits.len() != MATRICULE_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let number = digits.parse::<u32>().map_err(|_| malformed())?;

        Matricule::new(role, number)
    }
}

impl TryFrom<String> for Matricule {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Matricule> for String {
    fn from(value: Matricule) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_zero_pads_to_five_digits() {
        let matricule = Matricule::new(Role::Manager, 1).unwrap();
        assert_eq!(matricule.to_string(), "M00001");
    }

    #[test]
    fn test_display_full_width_number() {
        let matricule = Matricule::new(Role::Commercial, 99_999).unwrap();
        assert_eq!(matricule.to_string(), "C99999");
    }

    #[test]
    fn test_new_rejects_number_above_limit() {
        let result = Matricule::new(Role::Technician, 100_000);
        assert!(matches!(
            result,
            Err(EngineError::CapacityExceeded { limit: 99_999 })
        ));
    }

    #[test]
    fn test_new_rejects_zero() {
        let result = Matricule::new(Role::Technician, 0);
        assert!(matches!(result, Err(EngineError::InvalidArgument { .. })));
    }

    #[test]
    fn test_parse_valid_matricule() {
        let matricule: Matricule = "T12345".parse().unwrap();
        assert_eq!(matricule.role(), Role::Technician);
        assert_eq!(matricule.number(), 12345);
    }

    #[test]
    fn test_parse_rejects_unknown_prefix() {
        assert!("X00001".parse::<Matricule>().is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!("T0001".parse::<Matricule>().is_err());
        assert!("T000001".parse::<Matricule>().is_err());
        assert!("".parse::<Matricule>().is_err());
    }

    #[test]
    fn test_parse_rejects_signs_and_letters_in_number() {
        assert!("T+0001".parse::<Matricule>().is_err());
        assert!("T00A01".parse::<Matricule>().is_err());
    }

    #[test]
    fn test_role_letters_round_trip() {
        for role in [Role::Technician, Role::Manager, Role::Commercial] {
            assert_eq!(Role::from_letter(role.letter()), Some(role));
        }
        assert_eq!(Role::from_letter('Z'), None);
    }

    #[test]
    fn test_serializes_as_string() {
        let matricule = Matricule::new(Role::Commercial, 345).unwrap();
        assert_eq!(serde_json::to_string(&matricule).unwrap(), "\"C00345\"");

        let parsed: Matricule = serde_json::from_str("\"C00345\"").unwrap();
        assert_eq!(parsed, matricule);
    }

    #[test]
    fn test_deserialize_rejects_malformed_string() {
        let result: Result<Matricule, _> = serde_json::from_str("\"C345\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_ordering_follows_role_then_number() {
        let a = Matricule::new(Role::Technician, 2).unwrap();
        let b = Matricule::new(Role::Technician, 10).unwrap();
        assert!(a < b);
    }
}
