use std::io::{self, Write};
use std::str::FromStr;

use error_stack::ResultExt;
use kernel::KernelError;

fn read_raw(label: &str) -> error_stack::Result<String, KernelError> {
    print!("{label}");
    io::stdout()
        .flush()
        .change_context(KernelError::Internal)?;
    let mut buf = String::new();
    io::stdin()
        .read_line(&mut buf)
        .change_context(KernelError::Internal)?;
    Ok(buf.trim().to_string())
}

pub fn read_line(label: &str) -> error_stack::Result<String, KernelError> {
    read_raw(label)
}

/// Re-prompts until the input parses.
pub fn read_parsed<T: FromStr>(label: &str) -> error_stack::Result<T, KernelError> {
    loop {
        match read_raw(label)?.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a valid value (numeric)."),
        }
    }
}

fn parse_non_negative(input: &str) -> Option<f64> {
    input.parse::<f64>().ok().filter(|value| *value >= 0.0)
}

fn parse_positive(input: &str) -> Option<i64> {
    input.parse::<i64>().ok().filter(|value| *value > 0)
}

pub fn read_non_negative(label: &str) -> error_stack::Result<f64, KernelError> {
    loop {
        match parse_non_negative(&read_raw(label)?) {
            Some(value) => return Ok(value),
            None => println!("Please enter a valid non-negative value."),
        }
    }
}

pub fn read_positive(label: &str) -> error_stack::Result<i64, KernelError> {
    loop {
        match parse_positive(&read_raw(label)?) {
            Some(value) => return Ok(value),
            None => println!("Please enter a valid positive number of days."),
        }
    }
}

/// Blank input means "keep current".
pub fn read_optional(label: &str) -> error_stack::Result<Option<String>, KernelError> {
    let value = read_raw(label)?;
    Ok(if value.is_empty() { None } else { Some(value) })
}

pub fn read_optional_parsed<T: FromStr>(
    label: &str,
) -> error_stack::Result<Option<T>, KernelError> {
    loop {
        let value = read_raw(label)?;
        if value.is_empty() {
            return Ok(None);
        }
        match value.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Please enter a valid value (numeric)."),
        }
    }
}

pub fn read_optional_non_negative(label: &str) -> error_stack::Result<Option<f64>, KernelError> {
    loop {
        let value = read_raw(label)?;
        if value.is_empty() {
            return Ok(None);
        }
        match parse_non_negative(&value) {
            Some(value) => return Ok(Some(value)),
            None => println!("Please enter a valid non-negative value."),
        }
    }
}

pub fn read_optional_positive(label: &str) -> error_stack::Result<Option<i64>, KernelError> {
    loop {
        let value = read_raw(label)?;
        if value.is_empty() {
            return Ok(None);
        }
        match parse_positive(&value) {
            Some(value) => return Ok(Some(value)),
            None => println!("Please enter a valid positive number of days."),
        }
    }
}

pub fn read_optional_yes_no(label: &str) -> error_stack::Result<Option<bool>, KernelError> {
    loop {
        match read_raw(label)?.to_ascii_lowercase().as_str() {
            "" => return Ok(None),
            "yes" => return Ok(Some(true)),
            "no" => return Ok(Some(false)),
            _ => println!("Please enter a valid yes/no."),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{parse_non_negative, parse_positive};

    #[test]
    fn daily_rate_input_cannot_be_negative() {
        assert_eq!(parse_non_negative("-5"), None);
        assert_eq!(parse_non_negative("-0.01"), None);
        assert_eq!(parse_non_negative("0"), Some(0.0));
        assert_eq!(parse_non_negative("49.5"), Some(49.5));
        assert_eq!(parse_non_negative("abc"), None);
    }

    #[test]
    fn rent_period_input_must_be_positive() {
        assert_eq!(parse_positive("-3"), None);
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("7"), Some(7));
        assert_eq!(parse_positive("2.5"), None);
        assert_eq!(parse_positive(""), None);
    }
}
