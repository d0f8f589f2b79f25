use std::{fmt, io};

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn new(code: i32, message: &str) -> Self {
        Self {
            code: code,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::new(2003, &format!("{}: {}", ERROR_2003, e))
    }
}

impl std::error::Error for Error {}

pub type Result<T, E = Error> = ::std::result::Result<T, E>;

pub static ERROR_1001: &'static str = "Logger configuration could not be installed";

pub static ERROR_2001: &'static str = "Coordinate is not a valid floating-point number";
pub static ERROR_2002: &'static str = "Input ended before name, latitude and longitude were read";
pub static ERROR_2003: &'static str = "I/O error";
pub static ERROR_2004: &'static str = "Token is not valid UTF-8";

pub static ERROR_3001: &'static str = "Roster slot out of range";
pub static ERROR_3002: &'static str = "Roster slot has already been released";
