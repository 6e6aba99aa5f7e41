use clap::Parser;
use friends_core::DEFAULT_FRIENDS_FILE;
use std::path::PathBuf;

/// CLI arguments for friends-cli
#[derive(Debug, Parser)]
#[command(
    name = "friends",
    version,
    about = "Print the friends living within 100 km, ordered by user_id"
)]
pub struct CliArgs {
    /// Friend list with one JSON object per line
    #[arg(default_value = DEFAULT_FRIENDS_FILE)]
    pub input: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_defaults_to_friend_list() {
        let args = CliArgs::parse_from(["friends"]);
        assert_eq!(args.input, PathBuf::from("friend_list.json"));
    }

    #[test]
    fn input_is_positional() {
        let args = CliArgs::parse_from(["friends", "data/customers.txt"]);
        assert_eq!(args.input, PathBuf::from("data/customers.txt"));
    }
}
