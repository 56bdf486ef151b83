//! Opening the four inputs of a group.

use std::ffi::OsStr;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::buffer::STREAMS;
use crate::{Error, Result};

/// Where one stream comes from: `-` is standard input, anything else a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSpec {
    Stdin,
    Path(PathBuf),
}

impl InputSpec {
    pub fn is_stdin(&self) -> bool { matches!(self, Self::Stdin) }
}

impl From<&OsStr> for InputSpec {
    fn from(arg: &OsStr) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }
}

impl From<&str> for InputSpec {
    fn from(arg: &str) -> Self { Self::from(OsStr::new(arg)) }
}

impl From<&Path> for InputSpec {
    fn from(path: &Path) -> Self { Self::from(path.as_os_str()) }
}

impl fmt::Display for InputSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("-"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// An open stream. Dropping a file handle closes it; stdin stays open.
#[derive(Debug)]
pub enum Input {
    Stdin(io::Stdin),
    File(File),
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Stdin(stdin) => stdin.read(buf),
            Self::File(file) => file.read(buf),
        }
    }
}

pub fn open_input(spec: &InputSpec) -> Result<Input> {
    let input = match spec {
        InputSpec::Stdin => Input::Stdin(io::stdin()),
        InputSpec::Path(path) => {
            let file = File::open(path).map_err(|source| Error::OpenFailure {
                path: path.clone(),
                source,
            })?;
            Input::File(file)
        }
    };
    debug!(input = %spec, "opened input");

    Ok(input)
}

/// Open all four inputs of a group, in order.
///
/// Every input is attempted; the first failure in slot order is returned and
/// any handles that did open are closed.
pub fn open_group(specs: &[InputSpec; STREAMS]) -> Result<[Input; STREAMS]> {
    let [first, second, third, fourth] = specs.each_ref().map(open_input);
    Ok([first?, second?, third?, fourth?])
}
