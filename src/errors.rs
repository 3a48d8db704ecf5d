#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PowerCalcError {
    InvalidNumber(String),
    NotAnInteger(String),
    OutOfRange(String),
    InvalidStep(String),
    StepOverflow { value: i64, step: i64, up: bool },
}

impl std::error::Error for PowerCalcError {}

impl std::fmt::Display for PowerCalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            PowerCalcError::InvalidNumber(ref text) => write!(f, "`{}` is not a number", text),
            PowerCalcError::NotAnInteger(ref text) => write!(f, "`{}` is not an integer", text),
            PowerCalcError::OutOfRange(ref text) => {
                write!(f, "`{}` is out of range for a 64-bit integer", text)
            }
            PowerCalcError::InvalidStep(ref text) => {
                write!(f, "`{}` is not a valid step size", text)
            }
            PowerCalcError::StepOverflow { value, step, up } => write!(
                f,
                "stepping {} by {}{} leaves the 64-bit integer range",
                value,
                if up { '+' } else { '-' },
                step
            ),
        }
    }
}
