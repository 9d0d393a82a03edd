use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use thiserror::Error;

use crate::model::ids::{CertificateId, CourseId, LearnerId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CertificateError {
    #[error("certificate prefix must be non-empty ASCII letters")]
    InvalidPrefix,

    #[error("certificate serial {0} does not fit in six digits")]
    SerialOverflow(u32),

    #[error("malformed certificate number: {0}")]
    Malformed(String),
}

const SERIAL_DIGITS: usize = 6;
const SERIAL_MAX: u32 = 999_999;

/// `<PREFIX>-<YYYY>-<NNNNNN>`, e.g. `CERT-2024-001234`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CertificateNumber {
    prefix: String,
    year: i32,
    serial: u32,
}

impl CertificateNumber {
    /// # Errors
    ///
    /// Returns `CertificateError::InvalidPrefix` unless the prefix is ASCII
    /// letters, and `SerialOverflow` for serials above 999999.
    pub fn new(prefix: &str, year: i32, serial: u32) -> Result<Self, CertificateError> {
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CertificateError::InvalidPrefix);
        }
        if serial > SERIAL_MAX {
            return Err(CertificateError::SerialOverflow(serial));
        }
        Ok(Self {
            prefix: prefix.to_ascii_uppercase(),
            year,
            serial,
        })
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn serial(&self) -> u32 {
        self.serial
    }
}

impl fmt::Display for CertificateNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:04}-{:0width$}",
            self.prefix,
            self.year,
            self.serial,
            width = SERIAL_DIGITS
        )
    }
}

impl FromStr for CertificateNumber {
    type Err = CertificateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CertificateError::Malformed(s.to_owned());
        let mut parts = s.trim().split('-');
        let (Some(prefix), Some(year), Some(serial), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        if year.len() != 4 || serial.len() != SERIAL_DIGITS {
            return Err(malformed());
        }
        if !year.chars().chain(serial.chars()).all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let serial: u32 = serial.parse().map_err(|_| malformed())?;
        Self::new(prefix, year, serial).map_err(|_| malformed())
    }
}

/// Proof of a passed course test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub id: CertificateId,
    pub learner_id: LearnerId,
    pub course_id: CourseId,
    pub course_title: String,
    pub issued_at: DateTime<Utc>,
    pub number: CertificateNumber,
    pub score: u8,
    pub instructor: String,
}

impl Certificate {
    /// Number for a certificate issued at `issued_at` with the given serial.
    ///
    /// # Errors
    ///
    /// See `CertificateNumber::new`.
    pub fn number_for(
        prefix: &str,
        issued_at: DateTime<Utc>,
        serial: u32,
    ) -> Result<CertificateNumber, CertificateError> {
        CertificateNumber::new(prefix, issued_at.year(), serial)
    }
}
