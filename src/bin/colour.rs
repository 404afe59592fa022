use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colour_value::{named_colours, ColourValue, Component, WcagLevel};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "colour",
    about = "Inspect colours, convert between RGB and HSV, check WCAG contrast",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show hex, RGB, HSV and perceptual metrics of a colour
    Inspect {
        /// Hex string (#RRGGBB or #RGB) or web colour name
        colour: String,
    },

    /// Compute the WCAG contrast ratio of two colours
    Contrast {
        /// Foreground colour
        foreground: String,

        /// Background colour
        background: String,

        /// WCAG level to check against (AA or AAA)
        #[arg(short, long, default_value = "AA")]
        level: String,

        /// Judge as large text
        #[arg(long)]
        large: bool,
    },

    /// Apply component assignments in order and print the result
    Set {
        /// Starting colour
        colour: String,

        /// Assignments such as H=120 or s=0.5; values are clamped
        #[arg(required = true)]
        assignments: Vec<String>,
    },

    /// List the known web colour names
    Names {
        /// Only show names containing this text
        #[arg(short, long)]
        filter: Option<String>,
    },
}

fn parse_colour(text: &str) -> Result<ColourValue> {
    ColourValue::from_hex(text).with_context(|| format!("cannot read colour '{text}'"))
}

fn parse_assignment(text: &str) -> Result<(Component, f64)> {
    let Some((name, value)) = text.split_once('=') else {
        bail!("expected COMPONENT=VALUE, got '{text}'");
    };
    let component = name.trim().parse::<Component>()?;
    let value = value
        .trim()
        .parse::<f64>()
        .with_context(|| format!("'{value}' is not a number"))?;
    Ok((component, value))
}

fn inspect(text: &str) -> Result<()> {
    let mut colour = parse_colour(text)?;
    let (h, s, v) = colour.to_hsv();
    let (r, g, b) = colour.to_rgb();

    println!("hex:        {}", colour.to_hex());
    println!("rgb:        {r:.0}, {g:.0}, {b:.0}");
    println!("hsv:        {h:.1}, {s:.3}, {v:.3}");
    println!("brightness: {}", colour.brightness());
    println!("luminosity: {:.4}", colour.luminosity());
    Ok(())
}

fn contrast(foreground: &str, background: &str, level: &str, large: bool) -> Result<bool> {
    let mut fg = parse_colour(foreground)?;
    let mut bg = parse_colour(background)?;
    let level = level.parse::<WcagLevel>()?;
    let verdict = fg.meets_wcag(level, large, &mut bg);

    println!(
        "{} on {}: {:.2}:1 {} {level}{}",
        fg.to_hex(),
        bg.to_hex(),
        verdict.ratio,
        if verdict.passes { "PASS" } else { "FAIL" },
        if large { " (large text)" } else { "" }
    );
    Ok(verdict.passes)
}

fn set(text: &str, assignments: &[String]) -> Result<()> {
    let mut colour = parse_colour(text)?;
    for assignment in assignments {
        let (component, value) = parse_assignment(assignment)?;
        colour.set(component, value);
        tracing::debug!(%component, value, stored = colour.get(component), "applied");
    }
    println!("{}", colour.to_hex());
    Ok(())
}

fn names(filter: Option<&str>) {
    let filter = filter.map(str::to_ascii_lowercase);
    for (name, hex) in named_colours() {
        if filter.as_deref().map_or(true, |f| name.contains(f)) {
            println!("{name:<22}{}", hex.to_ascii_uppercase());
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colour_value=warn,colour=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { colour } => inspect(&colour)?,
        Commands::Contrast {
            foreground,
            background,
            level,
            large,
        } => {
            if !contrast(&foreground, &background, &level, large)? {
                std::process::exit(1);
            }
        }
        Commands::Set {
            colour,
            assignments,
        } => set(&colour, &assignments)?,
        Commands::Names { filter } => names(filter.as_deref()),
    }

    Ok(())
}
