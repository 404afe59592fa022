//! Standalone demo: walks a colour through both representations.

use colour_value::{ColourValue, WcagLevel};

fn main() -> colour_value::Result<()> {
    let mut colour = ColourValue::from_hex("cornflowerblue")?;
    println!("{colour} starts as {}", colour.representation());

    println!(
        "hue {:.1}, saturation {:.3}, value {:.3}",
        colour.h(),
        colour.s(),
        colour.v()
    );

    let hue = colour.h();
    colour.set_h((hue + 180.0) % 360.0);
    println!("complement: {} ({})", colour.to_hex(), colour.representation());

    let mut background = ColourValue::from_hex("#FFFFFF")?;
    for level in [WcagLevel::Aa, WcagLevel::Aaa] {
        let verdict = colour.meets_wcag(level, false, &mut background);
        println!(
            "{level} on white: {:.2}:1 {}",
            verdict.ratio,
            if verdict.passes { "pass" } else { "fail" }
        );
    }
    println!("brightness {}", colour.brightness());
    Ok(())
}
