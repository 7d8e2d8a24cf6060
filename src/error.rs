use std::{error::Error, fmt};

#[derive(Debug)]
pub enum JsonMapError {
    Simple(String),
    Io(std::io::Error),
    SerdesJson(serde_json::Error),
}

impl Error for JsonMapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            JsonMapError::Simple(_) => None,
            JsonMapError::Io(err) => Some(err),
            JsonMapError::SerdesJson(err) => Some(err),
        }
    }
}

impl fmt::Display for JsonMapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let error_string = match self {
            JsonMapError::Simple(msg) => format!("json-map-Error | Other - {}", msg),
            JsonMapError::Io(err) => format!("json-map-Error | IoError - {}", err),
            JsonMapError::SerdesJson(err) => {
                format!("json-map-Error | SerdesJsonError - {}", err)
            }
        };
        write!(f, "{}", error_string)
    }
}

impl From<std::io::Error> for JsonMapError {
    fn from(e: std::io::Error) -> JsonMapError {
        JsonMapError::Io(e)
    }
}

impl From<serde_json::Error> for JsonMapError {
    fn from(e: serde_json::Error) -> JsonMapError {
        JsonMapError::SerdesJson(e)
    }
}

impl JsonMapError {
    /// True when the failure came from the payload itself rather than the file system.
    pub fn is_serialization(&self) -> bool {
        match self {
            JsonMapError::SerdesJson(err) => !err.is_io(),
            _ => false,
        }
    }
}
