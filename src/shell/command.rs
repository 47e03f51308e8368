use crate::domain::model::parse_number;
use crate::utils::error::{MarinaError, Result};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Inventory,
    Add,
    Remove,
    Payment,
    Month,
    Exit,
}

impl Command {
    const WORDS: [(Command, &'static str, &'static str); 6] = [
        (Command::Inventory, "i", "inventory"),
        (Command::Add, "a", "add"),
        (Command::Remove, "r", "remove"),
        (Command::Payment, "p", "payment"),
        (Command::Month, "m", "month"),
        (Command::Exit, "x", "exit"),
    ];

    /// Splits a console line into the command and whatever text follows it.
    pub fn parse(input: &str) -> Result<(Command, &str)> {
        let input = input.trim();
        let (word, rest) = match input.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (input, ""),
        };

        Self::WORDS
            .iter()
            .find(|(_, short, long)| word.eq_ignore_ascii_case(short) || word.eq_ignore_ascii_case(long))
            .map(|(command, _, _)| (*command, rest))
            .ok_or_else(|| MarinaError::UnrecognizedCommand {
                input: input.to_string(),
            })
    }
}

/// A payment amount as typed at the console, with an optional leading `$`.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    parse_number(raw.trim().trim_start_matches('$'))
}

/// Splits `payment` arguments into a boat name and the trailing amount.
/// The last word counts as the amount only when it reads as a number;
/// otherwise the whole text is the name.
pub fn split_payment_args(args: &str) -> (&str, Option<&str>) {
    let args = args.trim();
    match args.rsplit_once(char::is_whitespace) {
        Some((name, amount)) if parse_amount(amount).is_some() => (name.trim(), Some(amount)),
        _ => (args, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_long_words() {
        assert_eq!(Command::parse("i").unwrap(), (Command::Inventory, ""));
        assert_eq!(Command::parse("INVENTORY").unwrap(), (Command::Inventory, ""));
        assert_eq!(Command::parse("X").unwrap(), (Command::Exit, ""));
        assert_eq!(Command::parse(" month ").unwrap(), (Command::Month, ""));
    }

    #[test]
    fn test_arguments_follow_the_word() {
        assert_eq!(
            Command::parse("add Anna,25,slip,12,500.00").unwrap(),
            (Command::Add, "Anna,25,slip,12,500.00")
        );
        assert_eq!(
            Command::parse("r  Sea Breeze").unwrap(),
            (Command::Remove, "Sea Breeze")
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = Command::parse("launch").unwrap_err();
        assert!(matches!(err, MarinaError::UnrecognizedCommand { input } if input == "launch"));
        assert!(Command::parse("q").is_err());
    }

    #[test]
    fn test_split_payment_args() {
        assert_eq!(split_payment_args("Anna 100"), ("Anna", Some("100")));
        assert_eq!(
            split_payment_args("Sea Breeze 12.50"),
            ("Sea Breeze", Some("12.50"))
        );
        assert_eq!(split_payment_args("Anna"), ("Anna", None));
        assert_eq!(split_payment_args("Anna $40"), ("Anna", Some("$40")));
    }

    #[test]
    fn test_split_payment_args_without_amount_keeps_full_name() {
        assert_eq!(split_payment_args("Sea Breeze"), ("Sea Breeze", None));
        assert_eq!(split_payment_args("Beth ten"), ("Beth ten", None));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$12.50"), Some(rust_decimal_macros::dec!(12.50)));
        assert_eq!(parse_amount(" 100 "), Some(rust_decimal_macros::dec!(100)));
        assert_eq!(parse_amount("1_00"), None);
        assert_eq!(parse_amount("Breeze"), None);
    }
}
