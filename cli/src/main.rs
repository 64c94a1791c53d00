mod commands;
mod terminal;

use commands::{CommandLine, analyse};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(&cfg);

    analyse::analyse(&commands.maps, &cfg)
}
