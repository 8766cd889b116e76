use crate::{HashKeyError, HashResult};

pub const USAGE: &str = "Usage: generate-hash <identifier> [timestamp]";

/// Positional arguments of one CLI run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub identifier: String,
    pub timestamp: Option<String>,
}

/// Parse positional arguments, program name already stripped.
/// Anything past the second argument is ignored.
pub fn parse_args<I>(args: I) -> HashResult<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let identifier = args.next().ok_or(HashKeyError::MissingIdentifier)?;
    let timestamp = args.next();

    Ok(Invocation {
        identifier,
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_identifier() {
        let result = parse_args(Vec::<String>::new());
        assert!(matches!(result, Err(HashKeyError::MissingIdentifier)));
    }

    #[test]
    fn test_identifier_only() {
        let invocation = parse_args(strings(&["5551234567"])).unwrap();
        assert_eq!(invocation.identifier, "5551234567");
        assert_eq!(invocation.timestamp, None);
    }

    #[test]
    fn test_identifier_and_timestamp() {
        let invocation = parse_args(strings(&["5551234567", "1700000000000", "extra"])).unwrap();
        assert_eq!(invocation.identifier, "5551234567");
        assert_eq!(invocation.timestamp.as_deref(), Some("1700000000000"));
    }

    #[test]
    fn test_empty_strings_are_kept() {
        let invocation = parse_args(strings(&["", ""])).unwrap();
        assert_eq!(invocation.identifier, "");
        assert_eq!(invocation.timestamp.as_deref(), Some(""));
    }

    #[test]
    fn test_usage_names_invocation() {
        assert!(USAGE.contains("<identifier> [timestamp]"));
    }
}
