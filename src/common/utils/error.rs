use std::fmt::{Display, Error, Formatter};

// Placement violation
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum PlacementViolation {
    // Data path reached a module already claimed by a function pattern or format area
    ReservedCollision { r: i16, c: i16 },
    // Data path ended somewhere other than the terminal module
    UnexpectedTerminal { found: Option<(i16, i16)> },
    // Payload has more bits than the data path has modules
    DataOverflow { placed: usize, total: usize },
    // Module left unset after all phases
    UnsetModule { r: i16, c: i16 },
}

impl Display for PlacementViolation {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match *self {
            Self::ReservedCollision { r, c } => {
                write!(f, "data path collides with reserved module at ({r}, {c})")
            }
            Self::UnexpectedTerminal { found: Some((r, c)) } => {
                write!(f, "data path terminated at ({r}, {c})")
            }
            Self::UnexpectedTerminal { found: None } => f.write_str("data path is empty"),
            Self::DataOverflow { placed, total } => {
                write!(f, "data path exhausted after {placed} of {total} bits")
            }
            Self::UnsetModule { r, c } => write!(f, "module at ({r}, {c}) was never set"),
        }
    }
}

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // QR builder
    EmptyData,
    UnsupportedCharacter { ch: char, pos: usize },
    // Character count doesn't fit the count indicator
    CharCountOverflow { count: usize, max: usize },
    // Bit lengths, measured before terminator and padding
    CapacityExceeded { required: usize, capacity: usize },

    // Internal invariants
    FieldDomain,
    PlacementInvariant(PlacementViolation),
}

impl Display for QRError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match *self {
            Self::EmptyData => f.write_str("Empty data"),
            Self::UnsupportedCharacter { ch, pos } => {
                write!(f, "Unsupported character {ch:?} at position {pos} for alphanumeric mode")
            }
            Self::CharCountOverflow { count, max } => {
                write!(f, "Character count {count} exceeds count indicator limit {max}")
            }
            Self::CapacityExceeded { required, capacity } => {
                let over = required - capacity;
                write!(
                    f,
                    "Capacity exceeded by {} bits ({} bytes): required {required}, capacity {capacity}",
                    over,
                    (over + 7) >> 3
                )
            }
            Self::FieldDomain => f.write_str("Zero has no logarithm or inverse in GF(256)"),
            Self::PlacementInvariant(v) => write!(f, "Placement invariant violated: {v}"),
        }
    }
}

impl std::error::Error for QRError {}

impl From<PlacementViolation> for QRError {
    fn from(v: PlacementViolation) -> Self {
        Self::PlacementInvariant(v)
    }
}

pub type QRResult<T> = Result<T, QRError>;

#[cfg(test)]
mod error_tests {
    use super::{PlacementViolation, QRError};

    #[test]
    fn test_capacity_message_reports_delta() {
        let err = QRError::CapacityExceeded { required: 74, capacity: 72 };
        assert_eq!(
            err.to_string(),
            "Capacity exceeded by 2 bits (1 bytes): required 74, capacity 72"
        );
    }

    #[test]
    fn test_unsupported_character_message() {
        let err = QRError::UnsupportedCharacter { ch: 'a', pos: 3 };
        assert_eq!(
            err.to_string(),
            "Unsupported character 'a' at position 3 for alphanumeric mode"
        );
    }

    #[test]
    fn test_char_count_overflow_message() {
        let err = QRError::CharCountOverflow { count: 512, max: 511 };
        assert_eq!(err.to_string(), "Character count 512 exceeds count indicator limit 511");
    }

    #[test]
    fn test_placement_violation_into_error() {
        let err: QRError = PlacementViolation::ReservedCollision { r: 6, c: 10 }.into();
        assert_eq!(
            err.to_string(),
            "Placement invariant violated: data path collides with reserved module at (6, 10)"
        );
    }
}
