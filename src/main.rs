use clap::{Parser, Subcommand};
use gnostic_circle::config;
use gnostic_circle::gui::app::AppModel;
use gnostic_circle::gui::circle::State;
use gnostic_circle::sys::{runtime, snapshot};
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gnostic-circle", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Open the animated circle (the default).
    Run,
    /// Render a single frame to a PNG file.
    Render {
        #[arg(short, long, default_value = "gnostic-circle.png")]
        output: PathBuf,
        /// Width and height of the image in pixels
        #[arg(short, long, default_value_t = 800)]
        size: i32,
        /// Seconds into the animation
        #[arg(short, long, default_value_t = 0.0)]
        time: f64,
    },
    /// Write the default config file if none exists and print its path.
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(config::load_or_default()),
        Commands::Render {
            output,
            size,
            time,
        } => {
            snapshot::write_png(&config::load_or_default(), size, time, &output)?;
            Ok(())
        }
        Commands::InitConfig => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run(config: config::Config) -> anyhow::Result<()> {
    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    // clap already consumed the arguments, keep GTK from parsing them again
    let app = RelmApp::new("org.gnostic.circle").with_args(Vec::new());

    app.run::<AppModel>((State::new(config), rx));
    Ok(())
}
