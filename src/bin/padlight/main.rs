mod settings;

use std::sync::Arc;

use clap::Parser;
use log::{error, info, warn};
use padlight::{midi_io, Engine};

use crate::settings::Settings;

#[derive(Parser, Debug)]
#[clap(
    name = "padlight",
    version = env!("CARGO_PKG_VERSION"),
    about = "Light up a Launchpad's pads as you play them"
)]
struct Args {
    #[clap(short, long, help = "Config file (TOML, YAML, JSON...)")]
    config: Option<String>,

    #[clap(short, long, help = "Log every MIDI message sent")]
    verbose: bool,

    #[clap(short, long, help = "List the MIDI ports and exit")]
    list_ports: bool,
}

fn list_ports() -> Result<(), padlight::MidiError> {
    println!("Inputs:");
    for name in midi_io::input_port_names()? {
        println!("  {name}");
    }
    println!("Outputs:");
    for name in midi_io::output_port_names()? {
        println!("  {name}");
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "trace" } else { "info" }),
    )
    .init();

    if args.list_ports {
        list_ports()?;
        return Ok(());
    }

    let settings = Settings::load(args.config.as_deref())?;
    settings.validate()?;
    info!("Running with settings: {settings:?}");

    let mut engine = Engine::new(settings.pad_grid(), settings.protocol)
        .with_frame_delay(settings.frame_delay());

    match &settings.visual_output {
        Some(keyword) => engine = engine.with_visual_output(Arc::new(midi_io::connect_output(keyword)?)),
        None => warn!("No visual output configured, effects won't be drawn"),
    }
    for keyword in &settings.playback_outputs {
        engine = engine.with_playback_output(Arc::new(midi_io::connect_output(keyword)?));
    }

    let (sender, receiver) = tokio::sync::mpsc::channel(settings.event_queue);
    let input = midi_io::connect_input(&settings.input_port, sender)?;
    info!("Playing from {:?}, press Ctrl-C to stop", input.name());

    tokio::select! {
        _ = engine.run(receiver) => {
            error!("Input connection closed");
        }
        result = tokio::signal::ctrl_c() => {
            result?;
            info!("Stopping");
        }
    }

    Ok(())
}
