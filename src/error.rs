// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// Failed to parse an SVG data.
    ParsingFailed(roxmltree::Error),

    /// A `circle` element has a coordinate that is not a number.
    ///
    /// A missing coordinate gets a default, but a present one must parse.
    InvalidCoordinate(svgtypes::Error),

    /// The document has no `path` and no `circle` elements.
    ///
    /// Nothing is written in this case.
    NoShapes,

    /// Failed to read the source or write the destination file.
    Io(std::io::Error),
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::ParsingFailed(e)
    }
}

impl From<svgtypes::Error> for Error {
    fn from(e: svgtypes::Error) -> Self {
        Error::InvalidCoordinate(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::ParsingFailed(ref e) => {
                write!(f, "SVG data parsing failed cause {}", e)
            }
            Error::InvalidCoordinate(ref e) => {
                write!(f, "invalid circle coordinate cause {}", e)
            }
            Error::NoShapes => {
                write!(f, "no paths or circles found")
            }
            Error::Io(ref e) => {
                write!(f, "{}", e)
            }
        }
    }
}

impl std::error::Error for Error {}
