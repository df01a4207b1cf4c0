//! String guards

use std::fmt::Debug;

use crate::foundation::{GuardError, GuardResult, Named};

/// Fails when the string is absent or exactly empty.
///
/// Whitespace-only strings pass: the check is for `""`, not for visible
/// content.
///
/// # Examples
///
/// ```
/// use claws::guards::not_null_not_blank;
/// use claws::named;
///
/// let title = Some("Quarterly report");
/// assert!(not_null_not_blank(named!(title)).is_ok());
///
/// let padding = Some("   ");
/// assert!(not_null_not_blank(named!(padding)).is_ok());
///
/// let empty = Some("");
/// assert!(not_null_not_blank(named!(empty)).is_err());
/// ```
pub fn not_null_not_blank<S>(input: Named<Option<S>>) -> GuardResult<S>
where
    S: AsRef<str>,
{
    let (name, value) = input.into_parts();
    match value {
        None => Err(GuardError::MustNotBeNull { name }.traced()),
        Some(s) if s.as_ref().is_empty() => Err(GuardError::MustNotBeBlank { name }.traced()),
        Some(s) => Ok(s),
    }
}

/// Fails with [`GuardError::MustBeNumeric`] unless the string parses as an
/// `f64`.
///
/// Parsing does not depend on any locale: `.` is the only decimal separator,
/// an exponent and a leading sign are allowed, and surrounding whitespace is
/// ignored. `,` is a group separator in the integer part (`"1,000.5"`) and is
/// stripped before parsing; after the decimal point or exponent it is
/// rejected. `NaN` and `inf`/`infinity` spellings are accepted. Returns the
/// parsed number.
///
/// # Examples
///
/// ```
/// use claws::guards::numeric;
/// use claws::named;
///
/// let amount = "3.14";
/// assert_eq!(numeric(named!(amount)).unwrap(), 3.14);
///
/// let amount = "12,500.75";
/// assert_eq!(numeric(named!(amount)).unwrap(), 12500.75);
///
/// let amount = "3.1,4";
/// assert!(numeric(named!(amount)).is_err());
/// ```
pub fn numeric<S>(input: Named<S>) -> GuardResult<f64>
where
    S: AsRef<str> + Debug,
{
    match parse_invariant(input.value().as_ref()) {
        Some(number) => Ok(number),
        None => {
            let (name, value) = input.into_parts();
            Err(GuardError::MustBeNumeric {
                name,
                value: format!("{value:?}"),
            }
            .traced())
        }
    }
}

/// Parses an `f64`, accepting `,` group separators before the fraction.
fn parse_invariant(s: &str) -> Option<f64> {
    let s = s.trim();
    let end = s.find(['.', 'e', 'E']).unwrap_or(s.len());
    let (integer, rest) = s.split_at(end);
    if !integer.contains(',') {
        return s.parse().ok();
    }

    // A separator needs a digit in front of it: ",5" and "-,5" stay invalid.
    let digits = integer.trim_start_matches(['+', '-']);
    if !digits.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let mut normalized = integer.replace(',', "");
    normalized.push_str(rest);
    normalized.parse().ok()
}
