use thiserror::Error;

pub const DIVISION_BY_ZERO: i32 = 500;

const DIVISION_BY_ZERO_MESSAGE: &str = "valor igual a 0";

// Fields are fixed at construction.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("Err {code}: {message}")]
pub struct ChamadaError {
    message: String,
    code: i32,
}

impl ChamadaError {
    #[must_use]
    pub fn new(message: impl Into<String>, code: i32) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    #[must_use]
    pub fn division_by_zero() -> Self {
        Self::new(DIVISION_BY_ZERO_MESSAGE, DIVISION_BY_ZERO)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn code(&self) -> i32 {
        self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_form() {
        let error = ChamadaError::new("valor igual a 0", 500);
        assert_eq!("Err 500: valor igual a 0", error.to_string());
    }

    #[test]
    fn division_by_zero_fields() {
        let error = ChamadaError::division_by_zero();
        assert_eq!(DIVISION_BY_ZERO, error.code());
        assert_eq!("valor igual a 0", error.message());
        assert_eq!(ChamadaError::new("valor igual a 0", 500), error);
    }

    #[test]
    fn equality_covers_both_fields() {
        let error = ChamadaError::division_by_zero();
        assert_ne!(ChamadaError::new("valor igual a 0", 400), error);
        assert_ne!(ChamadaError::new("valor igual a  0", 500), error);
    }

    #[test]
    fn converts_into_anyhow() {
        let error = anyhow::Error::from(ChamadaError::division_by_zero());
        assert_eq!("Err 500: valor igual a 0", error.to_string());
        assert!(error.downcast_ref::<ChamadaError>().is_some());
    }
}
