use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub struct BigIntError {
    kind: BigIntErrorKind,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntErrorKind {
    DivisionByZero,
    CapacityOverflow,
    InvalidDigit,
    EmptyInput,
    UnsupportedBase,
}

impl BigIntError {
    pub fn new(kind: BigIntErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> BigIntErrorKind {
        self.kind
    }
}

impl Display for BigIntErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BigIntErrorKind::DivisionByZero => "DivisionByZero",
            BigIntErrorKind::CapacityOverflow => "CapacityOverflow",
            BigIntErrorKind::InvalidDigit => "InvalidDigit",
            BigIntErrorKind::EmptyInput => "EmptyInput",
            BigIntErrorKind::UnsupportedBase => "UnsupportedBase",
        })
    }
}

impl Display for BigIntError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!(
            "ErrorKind: {}, Message: {}",
            self.kind, self.message
        ))
    }
}

pub type BigIntResult<T> = Result<T, BigIntError>;
pub type BigIntTestResult = Result<(), BigIntError>;
