//! Render markup given on the command line to the terminal.
//!
//! ```text
//! cargo run --example render -- "<bold>Hi <gradient:red:gold:blue>there</gradient></bold>"
//! ```
//!
//! Set `MINIFORMAT_LOG=/path/to/file` to capture debug logging.

use log::LevelFilter;
use miniformat_rs::log_init::init_logger;
use miniformat_rs::{print_markup, Result};

const SAMPLES: &[&str] = &[
    "<bold>Hi <gradient:red:blue>there</gradient></bold>",
    "<gold>Gold</gold>, <#3366cc>hex</#3366cc> and <color:aqua>color:aqua</color>",
    "<gradient:red:gold:green:aqua:blue>a five stop rainbow across one line</gradient>",
    "<gradient:dark_purple:light_purple>outer <u>inner restarts</u> outer again</gradient>",
    "<i>unclosed italic <b>and bold",
];

fn main() -> Result<()> {
    if let Ok(path) = std::env::var("MINIFORMAT_LOG") {
        init_logger(&path, LevelFilter::Debug)?;
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        for sample in SAMPLES {
            print_markup(sample)?;
        }
    } else {
        print_markup(&args.join(" "))?;
    }
    Ok(())
}
