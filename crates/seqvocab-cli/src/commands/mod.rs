use crate::commands::cat::CatArgs;

pub mod cat;

/// Subcommands for svocab
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Act as a streaming encoder/decoder.
    Cat(CatArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Cat(cmd) => cmd.run(),
        }
    }
}
