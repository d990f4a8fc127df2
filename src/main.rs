use polygon_engine::config::Config;
use polygon_engine::constants::Color;

pub mod tui;

/// Who sits on each side of the board.
#[derive(Debug, Clone)]
pub struct Options {
    pub red_is_human: bool,
    pub black_is_human: bool,
    pub seed: Option<u64>,
    pub config: Config,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            red_is_human: true,
            black_is_human: false,
            seed: None,
            config: Config::default(),
        }
    }
}

impl Options {
    pub fn is_human(&self, color: Color) -> bool {
        match color {
            Color::Red => self.red_is_human,
            Color::Black => self.black_is_human,
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--ai-red" => options.red_is_human = false,
            "--human-black" => options.black_is_human = true,
            "--seed" => {
                let value = args.next().ok_or("--seed needs a number")?;
                let seed = value.parse().map_err(|_| format!("bad seed '{value}'"))?;
                options.seed = Some(seed);
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }
    Ok(options)
}

fn main() {
    env_logger::init();

    match parse_args(std::env::args().skip(1)) {
        Ok(options) => tui::run(options),
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: polygon_war [--ai-red] [--human-black] [--seed <n>]");
            std::process::exit(2);
        }
    }
}
