use std::error::Error as StdError;
use std::fmt;

#[derive(PartialEq, Eq)]
pub enum Error {
    IllegalChar,
    LeadingZero,
    Overflow,
    NullComponent,
    MissingComponents,
    ExcessComponents,
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::IllegalChar => write!(f, "IllegalChar"),
            Self::LeadingZero => write!(f, "LeadingZero"),
            Self::Overflow => write!(f, "Overflow"),
            Self::NullComponent => write!(f, "NullComponent"),
            Self::MissingComponents => write!(f, "MissingComponents"),
            Self::ExcessComponents => write!(f, "ExcessComponents"),
        }
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::IllegalChar => write!(f, "Illegal character (expected decimal or hex digits)"),
            Self::LeadingZero => write!(f, "Leading zero in decimal component"),
            Self::Overflow => write!(f, "Too large a component for IP address"),
            Self::NullComponent => write!(f, "Empty component"),
            Self::MissingComponents => write!(f, "Missing components for IP address"),
            Self::ExcessComponents => write!(f, "Too many components for IP address"),
        }
    }
}

impl StdError for Error {
    fn description(&self) -> &str {
        match self {
            Self::IllegalChar => "Illegal character (expected decimal or hex digits)",
            Self::LeadingZero => "Leading zero in decimal component",
            Self::Overflow => "Too large a component for IP address",
            Self::NullComponent => "Empty component",
            Self::MissingComponents => "Missing components for IP address",
            Self::ExcessComponents => "Too many components for IP address",
        }
    }
    fn cause(&self) -> Option<&dyn StdError> {
        match self {
            Self::IllegalChar => None,
            Self::LeadingZero => None,
            Self::Overflow => None,
            Self::NullComponent => None,
            Self::MissingComponents => None,
            Self::ExcessComponents => None,
        }
    }
}

fn validate_octet(octet: &str) -> Result<(), Error> {
    // empty component should be garbaged
    if octet.len() == 0 {
        return Err(Error::NullComponent);
    }
    // a zero octet is written as exactly "0", zero-padded forms are
    // not minimal decimal
    if octet.len() > 1 && octet.starts_with('0') {
        return Err(Error::LeadingZero);
    }
    // overflow pre-verifications
    if octet.len() > 3 {
        return Err(Error::Overflow);
    }
    // transform base10 string to int
    let mut res = 0;
    for ch in octet.chars() {
        if ch < '0' || ch > '9' {
            return Err(Error::IllegalChar);
        }
        res = res * 10 + ch as u32 - '0' as u32;
    }
    // verify final result
    if res < 256 {
        Ok(())
    } else {
        Err(Error::Overflow)
    }
}

pub fn validate_v4(addr: &str) -> Result<(), Error> {
    let mut buffer = String::from("");
    let mut cnt = 0;
    // octets are terminated by dots, the last one by end of input
    for ch in addr.chars() {
        if ch == '.' {
            if cnt >= 4 {
                return Err(Error::ExcessComponents);
            }
            validate_octet(&buffer)?;
            cnt += 1;
            buffer.clear();
        } else {
            buffer.push(ch);
        }
    }
    // the last component, if any
    if cnt >= 4 {
        return Err(Error::ExcessComponents);
    }
    validate_octet(&buffer)?;
    cnt += 1;
    // check for count mismatch
    if cnt == 4 {
        Ok(())
    } else {
        Err(Error::MissingComponents)
    }
}

fn validate_hextet(hextet: &str) -> Result<(), Error> {
    if hextet.len() == 0 {
        return Err(Error::NullComponent);
    }
    // a group holds 16 bits, at most 4 hex digits
    if hextet.len() > 4 {
        return Err(Error::Overflow);
    }
    for ch in hextet.chars() {
        let is_digit = ch >= '0' && ch <= '9';
        let is_hex_lower = ch >= 'a' && ch <= 'f';
        let is_hex_upper = ch >= 'A' && ch <= 'F';
        if !(is_digit || is_hex_lower || is_hex_upper) {
            return Err(Error::IllegalChar);
        }
    }
    Ok(())
}

fn validate_full(components: &[&str]) -> Result<(), Error> {
    let (tail, heads) = match components.split_last() {
        Some(found) => found,
        None => return Err(Error::MissingComponents),
    };
    if validate_v4(tail).is_ok() {
        // an embedded dotted quad covers the last two groups
        // rfc4291: 2.2 alternative form x:x:x:x:x:x:d.d.d.d
        if heads.len() < 6 {
            return Err(Error::MissingComponents);
        }
        if heads.len() > 6 {
            return Err(Error::ExcessComponents);
        }
    } else {
        if heads.len() < 7 {
            return Err(Error::MissingComponents);
        }
        if heads.len() > 7 {
            return Err(Error::ExcessComponents);
        }
        validate_hextet(tail)?;
    }
    for component in heads {
        validate_hextet(component)?;
    }
    Ok(())
}

fn validate_compact(left: &[&str], right: &[&str]) -> Result<(), Error> {
    // "::" always stands for one zero group or more, so the groups
    // written out must leave room for it
    match right.split_last() {
        Some((tail, heads)) => {
            if validate_v4(tail).is_ok() {
                if left.len() + right.len() > 6 {
                    return Err(Error::ExcessComponents);
                }
            } else {
                if left.len() + right.len() > 7 {
                    return Err(Error::ExcessComponents);
                }
                validate_hextet(tail)?;
            }
            for component in heads {
                validate_hextet(component)?;
            }
        }
        None => {
            // nothing after the gap, the collapsed run is the tail
            if left.len() > 7 {
                return Err(Error::ExcessComponents);
            }
        }
    }
    for component in left {
        validate_hextet(component)?;
    }
    Ok(())
}

pub fn validate_v6(addr: &str) -> Result<(), Error> {
    // the unspecified address has no components to scan
    if addr == "::" {
        return Ok(());
    }
    let mut components: Vec<&str> = addr.split(':').collect();
    // a leading or trailing "::" leaves an empty artifact at the
    // matching end of the split, drop at most one from each end
    if components.len() > 0 && components[0].len() == 0 {
        components.remove(0);
    }
    if components.len() > 0 && components[components.len() - 1].len() == 0 {
        components.pop();
    }
    // the first empty component left over marks the "::" gap
    let mut gap = None;
    for (index, component) in components.iter().enumerate() {
        if component.len() == 0 {
            gap = Some(index);
            break;
        }
    }
    match gap {
        Some(index) => validate_compact(&components[..index], &components[index + 1..]),
        None => validate_full(&components),
    }
}

#[cfg(test)]
mod tests_v4_ok {
    use crate::addr::validate_v4;

    fn expect(origin: &str) {
        assert_eq!(validate_v4(origin), Ok(()));
    }

    #[test]
    fn null() {
        expect("0.0.0.0");
    }

    #[test]
    fn loopback() {
        expect("127.0.0.1");
    }

    #[test]
    fn broadcast() {
        expect("255.255.255.255");
    }

    #[test]
    fn typec() {
        expect("192.168.1.2");
    }

    #[test]
    fn subnet_mask() {
        expect("255.255.255.0");
    }

    #[test]
    fn mixed_widths() {
        expect("9.99.199.249");
    }

    #[test]
    fn range_upper() {
        expect("250.251.252.254");
    }
}

#[cfg(test)]
mod tests_v4_fail {
    use crate::addr::validate_v4;
    use crate::addr::Error;

    fn expect(origin: &str, target: Error) {
        assert_eq!(validate_v4(origin).unwrap_err(), target);
    }

    #[test]
    fn illegal_char_too_long() {
        expect("-192.168.0.1", Error::Overflow);
    }

    #[test]
    fn illegal_char() {
        expect("-92.168.0.1", Error::IllegalChar);
    }

    #[test]
    fn illegal_char_hex() {
        expect("1a.2.3.4", Error::IllegalChar);
    }

    #[test]
    fn trailing_space() {
        expect("192.168.0.1 ", Error::IllegalChar);
    }

    #[test]
    fn cidr_suffix() {
        expect("10.0.0.1/8", Error::IllegalChar);
    }

    #[test]
    fn overflow_comp_1() {
        expect("256.0.0.0", Error::Overflow);
    }

    #[test]
    fn overflow_comp_2() {
        expect("192.168.0.259", Error::Overflow);
    }

    #[test]
    fn overflow_digits() {
        expect("1111.0.0.1", Error::Overflow);
    }

    #[test]
    fn leading_zero_1() {
        expect("192.168.00.2", Error::LeadingZero);
    }

    #[test]
    fn leading_zero_2() {
        expect("0192.168.0.2", Error::LeadingZero);
    }

    #[test]
    fn leading_zero_3() {
        expect("192.168.0.02", Error::LeadingZero);
    }

    #[test]
    fn missing_comp() {
        expect("127.0.0", Error::MissingComponents);
    }

    #[test]
    fn too_many_comp() {
        expect("127.0.0.1.2", Error::ExcessComponents);
    }

    #[test]
    fn excessive_dot() {
        expect("127.0.0.1.", Error::ExcessComponents);
    }

    #[test]
    fn null_comp() {
        expect("127..0.1", Error::NullComponent);
    }

    #[test]
    fn empty() {
        expect("", Error::NullComponent);
    }
}
