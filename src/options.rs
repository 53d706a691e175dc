use structopt::StructOpt;

#[derive(StructOpt)]
pub struct Options {
    /// Path of the config file
    #[structopt(default_value = "checkout.toml")]
    pub config: String,

    /// Validate only the field with this identifier
    #[structopt(long)]
    pub only: Option<String>,

    /// Check the form without triggering field errors
    #[structopt(long)]
    pub silent: bool,
}
