//! CLI enum types for sampling and line ending options.

use clap::ValueEnum;

use crate::ascii;

/// Resampling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SamplingArg {
    #[default]
    Nearest,
    Average,
}

impl From<SamplingArg> for ascii::Sampling {
    fn from(s: SamplingArg) -> Self {
        match s {
            SamplingArg::Nearest => ascii::Sampling::Nearest,
            SamplingArg::Average => ascii::Sampling::Average,
        }
    }
}

/// Line ending for rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LineEndingArg {
    #[default]
    Lf,
    Crlf,
    Native,
}

impl From<LineEndingArg> for ascii::LineEnding {
    fn from(l: LineEndingArg) -> Self {
        match l {
            LineEndingArg::Lf => ascii::LineEnding::Lf,
            LineEndingArg::Crlf => ascii::LineEnding::Crlf,
            LineEndingArg::Native => ascii::LineEnding::Native,
        }
    }
}
