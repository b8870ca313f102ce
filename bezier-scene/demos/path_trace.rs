use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use bezier_scene::config::SceneConfig;

fn init_logger(level: log::LevelFilter) -> Result<(), Box<dyn std::error::Error + 'static>> {
    let stderr = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S%.3f)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

pub fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    let matches = clap::Command::new("path_trace")
        .version("0.1.2")
        .author("NAiveD <nice-die@live.com>")
        .about("Print the animated position along the default chained path")
        .arg(
            clap::Arg::new("from")
                .long("from")
                .default_value("0")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64))
                .help("First frame to print"),
        )
        .arg(
            clap::Arg::new("to")
                .long("to")
                .default_value("120")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64))
                .help("Last frame to print, inclusive"),
        )
        .arg(
            clap::Arg::new("step")
                .long("step")
                .short('s')
                .default_value("5")
                .value_parser(clap::value_parser!(u32).range(1..))
                .help("Frames between two printed lines"),
        )
        .arg(
            clap::Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(clap::ArgAction::SetTrue)
                .help("Log path construction and per frame lookups"),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };
    init_logger(level)?;

    let from = matches.get_one::<i64>("from").copied().unwrap_or(0);
    let to = matches.get_one::<i64>("to").copied().unwrap_or(120);
    let step = matches.get_one::<u32>("step").copied().unwrap_or(5) as usize;

    let series = SceneConfig::default().build_series()?;
    log::info!(
        "Tracing frames {}..={} of path [{}, {})",
        from,
        to,
        series.start_frame(),
        series.end_frame()
    );
    println!("{:>6} {:>7} {:>7}  position", "frame", "segment", "t");
    for frame in (from..=to).step_by(step) {
        let location = series.locate(frame);
        let position = series.position_at(frame);
        println!(
            "{:>6} {:>7} {:>7.4}  ({:.4}, {:.4}, {:.4})",
            frame, location.segment_index, location.t, position.x, position.y, position.z
        );
    }
    Ok(())
}
