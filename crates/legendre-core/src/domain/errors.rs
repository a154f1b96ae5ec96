use thiserror::Error;

pub type LegendreResult<T> = Result<T, LegendreError>;

/// Contract violations surfaced by the evaluators.
///
/// All variants are caller errors over runtime inputs; the pure index
/// functions treat their preconditions as programmer errors and assert
/// instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LegendreError {
    #[error("cosine of colatitude {costheta} lies outside [-1, 1]")]
    CosthetaOutOfRange { costheta: f64 },
    #[error("latitude {latitude} degrees lies outside [-90, 90]")]
    LatitudeOutOfRange { latitude: f64 },
    #[error(
        "output buffer holds {actual} slots but maximum degree {nmax} requires {required}"
    )]
    OutputTooSmall {
        nmax: usize,
        required: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegendreErrorCategory {
    InputValidationError,
    IoSystemError,
    InternalError,
}

impl LegendreErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::InternalError => 5,
        }
    }
}

impl LegendreError {
    pub const fn category(&self) -> LegendreErrorCategory {
        match self {
            Self::CosthetaOutOfRange { .. }
            | Self::LatitudeOutOfRange { .. }
            | Self::OutputTooSmall { .. } => LegendreErrorCategory::InputValidationError,
        }
    }

    pub const fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }
}

#[cfg(test)]
mod tests {
    use super::{LegendreError, LegendreErrorCategory};

    #[test]
    fn exit_mapping_is_stable() {
        assert_eq!(LegendreErrorCategory::InputValidationError.exit_code(), 2);
        assert_eq!(LegendreErrorCategory::IoSystemError.exit_code(), 3);
        assert_eq!(LegendreErrorCategory::InternalError.exit_code(), 5);
    }

    #[test]
    fn contract_violations_render_their_inputs() {
        let error = LegendreError::CosthetaOutOfRange { costheta: 1.5 };
        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.to_string(),
            "cosine of colatitude 1.5 lies outside [-1, 1]"
        );

        let error = LegendreError::OutputTooSmall {
            nmax: 5,
            required: 21,
            actual: 20,
        };
        assert_eq!(
            error.to_string(),
            "output buffer holds 20 slots but maximum degree 5 requires 21"
        );
    }
}
