#![forbid(unsafe_code)]

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(i64);

impl StationId {
    pub fn get(self) -> i64 {
        self.0
    }

    pub fn try_new(value: i64) -> Result<Self, IdError> {
        validate_id(value)?;
        Ok(Self(value))
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "station#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId(i64);

impl LineId {
    pub fn get(self) -> i64 {
        self.0
    }

    pub fn try_new(value: i64) -> Result<Self, IdError> {
        validate_id(value)?;
        Ok(Self(value))
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdError {
    NotPositive { value: i64 },
}

impl IdError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotPositive { .. } => "id must be a positive integer",
        }
    }
}

impl std::fmt::Display for IdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotPositive { value } => write!(f, "{} (got {value})", self.message()),
        }
    }
}

impl std::error::Error for IdError {}

fn validate_id(value: i64) -> Result<(), IdError> {
    if value <= 0 {
        return Err(IdError::NotPositive { value });
    }
    Ok(())
}
