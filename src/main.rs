use clap::Parser;
use image::Rgba;
use log::info;
use std::process;

use asciify::cli::{self, Args, Command};
use asciify::config::Config;
use asciify::convert::Asciifier;
use asciify::palette::Palette;
use asciify::region::BlockSize;
use asciify::render::FontSpec;

fn main() {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Some(Command::Palettes) => cli::list_palettes(),
        Some(Command::Config { action }) => cli::handle_config_action(action),
        None => {
            if let Err(e) = run(args) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }
}

/// Run a conversion: CLI flags win over config values, which win over
/// built-in defaults.
fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(args.config.as_deref())?;

    let input = args
        .input
        .ok_or("missing input image path (see --help)")?;

    let block = match args.block_size {
        Some(block) => block,
        None => BlockSize::new(config.conversion.block_width, config.conversion.block_height)?,
    };
    let scale = args.scale.unwrap_or(config.conversion.scale);
    let palette = match (args.charset, config.conversion.charset.as_deref()) {
        (Some(charset), _) => Palette::from(charset),
        (None, Some(name)) => Palette::from_str(name)
            .ok_or_else(|| format!("Unknown charset '{}' in config", name))?,
        (None, None) => Palette::default(),
    };

    let source = image::open(&input)?.to_rgba8();
    info!(
        "loaded {} ({}x{})",
        input.display(),
        source.width(),
        source.height()
    );

    let mut asciifier = Asciifier::new(source, block, scale);
    asciifier.set_palette(palette);

    match &args.output {
        Some(output) => {
            let font_path = args
                .font
                .clone()
                .or_else(|| config.render.font.clone())
                .ok_or("no font specified: use --font or set render.font in the config")?;
            let font_size = args.font_size.unwrap_or(config.render.font_size);
            let color = match (args.color, config.render.color.as_deref()) {
                (Some(color), _) => color,
                (None, Some(hex)) => cli::parse_color(hex)
                    .map_err(|e| format!("Bad render.color in config: {}", e))?,
                (None, None) => Rgba([255, 255, 255, 255]),
            };

            let font_data = std::fs::read(&font_path)?;
            asciifier.set_font(FontSpec::from_bytes(&font_data, font_size)?);
            asciifier.set_color(color);

            let art = asciifier.ascii_image()?;
            info!("rendered {}x{} art", art.width(), art.height());
            art.save(output)?;
            println!("Saved {}", output.display());

            if args.text {
                println!("{}", asciifier.ascii_text()?);
            }
        }
        None => {
            println!("{}", asciifier.ascii_text()?);
        }
    }

    Ok(())
}
