use clap::Parser;

/// Values printed when no arguments are given
pub const DEMO_VALUES: [i64; 4] = [2, 3, 5, 10];

#[derive(Parser, Debug)]
#[command(
    name = "factorial",
    version,
    about = "Compute n! by iterative multiplication"
)]
pub struct Args {
    /// Values to compute the factorial of. Without any, prints 2!, 3!, 5!
    /// and 10!
    #[arg(
        value_name = "N",
        allow_negative_numbers = true,
        value_parser = parse_number
    )]
    pub values: Vec<i64>,

    /// Print the running product after each multiplication
    #[arg(long, short)]
    pub trace: bool,

    /// Print the grouped value, digit count and trailing zeros of each
    /// result
    #[arg(long, short)]
    pub summary: bool,

    /// Start an interactive prompt
    #[arg(long, short, conflicts_with = "values")]
    pub interactive: bool,
}

impl Args {
    /// The values to compute, falling back to the demonstration set
    pub fn values(&self) -> Vec<i64> {
        if self.values.is_empty() {
            DEMO_VALUES.to_vec()
        } else {
            self.values.clone()
        }
    }
}

/// Parses a decimal integer, accepting an optional trailing `!` ("5!").
pub fn parse_number(string: &str) -> Result<i64, std::num::ParseIntError> {
    let string = string.strip_suffix('!').unwrap_or(string);

    string.parse::<i64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_demo_values() {
        let args = Args::try_parse_from(["factorial"]).unwrap();

        assert_eq!(args.values(), vec![2, 3, 5, 10]);
        assert!(!args.trace);
        assert!(!args.summary);
        assert!(!args.interactive);
    }

    #[test]
    fn test_values_and_switches() {
        let args =
            Args::try_parse_from(["factorial", "-t", "--summary", "7", "4!"])
                .unwrap();

        assert_eq!(args.values(), vec![7, 4]);
        assert!(args.trace);
        assert!(args.summary);
    }

    #[test]
    fn test_negative_values_reach_the_calculator() {
        let args = Args::try_parse_from(["factorial", "-1"]).unwrap();

        assert_eq!(args.values(), vec![-1]);
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert!(Args::try_parse_from(["factorial", "five"]).is_err());
    }

    #[test]
    fn test_interactive_conflicts_with_values() {
        assert!(Args::try_parse_from(["factorial", "-i", "5"]).is_err());
        assert!(Args::try_parse_from(["factorial", "-i"]).unwrap().interactive);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Ok(42));
        assert_eq!(parse_number("5!"), Ok(5));
        assert_eq!(parse_number("-3"), Ok(-3));
        assert!(parse_number("!").is_err());
        assert!(parse_number("0x10").is_err());
    }
}
