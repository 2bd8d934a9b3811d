use clap::{Arg, Command};

pub const CMD_USERS: &str = "users";
pub const CMD_USER: &str = "user";

pub const ARG_PAGE: &str = "page";
pub const ARG_ID: &str = "id";

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new(CMD_USERS).about("List users, three per page").arg(
                Arg::new(ARG_PAGE)
                    .long(ARG_PAGE)
                    .help("Zero-based page number")
                    .default_value("0")
                    .value_parser(clap::value_parser!(u32)),
            ),
        )
        .subcommand(
            Command::new(CMD_USER)
                .about("Show a user profile")
                .arg(
                    Arg::new(ARG_ID)
                        .help("Numeric user id")
                        .required(true)
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
}
