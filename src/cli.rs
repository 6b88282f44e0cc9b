use structopt::StructOpt;

#[derive(Debug, StructOpt)]
/// Finds games that have achievements but are
/// missing from the archive listings.
pub struct Cli {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    /// Logs more, repeat for debug and trace output.
    pub verbose: u8,
    #[structopt(subcommand)]
    pub command: Command
}

#[derive(Debug, StructOpt)]
pub enum Command {
    #[structopt(name = "new")]
    /// Creates a default .config file.
    New { },
    #[structopt(name = "normalize")]
    /// Prints the comparison key of every title.
    Normalize {
        titles: Vec<String>,
        #[structopt(long = "region", default_value = "USA")]
        /// Region tag to strip.
        region: String,
        #[structopt(long = "extension", default_value = "ZIP")]
        /// File extension to strip.
        extension: String
    },
    #[structopt(name = "check")]
    /// Tells whether two titles would be matched.
    Check {
        first: String,
        second: String
    },
    #[structopt(name = "missing")]
    /// Downloads the achievement list and the archive
    /// pages from the config file and prints games
    /// without an archive.
    Missing {
        #[structopt(long = "matched")]
        /// Also prints the matched archives.
        matched: bool,
        #[structopt(long = "json")]
        /// Prints JSON instead of a table.
        json: bool
    }
}
