use crate::addr;
use std::fmt;

#[derive(PartialEq)]
pub enum Candidate<'a> {
    Text(&'a str),
    Flag(bool),
    Number(f64),
    Sequence(Vec<Candidate<'a>>),
    Nothing,
}

impl<'a> fmt::Debug for Candidate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Text(v) => f.write_fmt(format_args!("Text({})", v)),
            Self::Flag(v) => f.write_fmt(format_args!("Flag({})", v)),
            Self::Number(v) => f.write_fmt(format_args!("Number({})", v)),
            Self::Sequence(v) => f.write_fmt(format_args!("Sequence({:?})", v)),
            Self::Nothing => f.write_str("Nothing"),
        }
    }
}

pub fn is_valid_ipv4(candidate: &Candidate) -> bool {
    // anything that is not text cannot be an address literal
    match candidate {
        Candidate::Text(text) => addr::validate_v4(text).is_ok(),
        _ => false,
    }
}

pub fn is_valid_ipv6(candidate: &Candidate) -> bool {
    match candidate {
        Candidate::Text(text) => addr::validate_v6(text).is_ok(),
        _ => false,
    }
}
