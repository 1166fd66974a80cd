use cad_units::translate::{degrees, meters};
use cad_units::*;
use uom::si::angle::degree;
use uom::si::length::millimeter;

fn main() {
    println!("=== Unit Report ===\n");

    let s = "-".repeat(50);

    println!("Default display units");
    println!("{}", s);
    print_defaults();

    println!("\n");

    println!("Ranged display units");
    println!("{}", s);
    print_ranged();

    println!("\n");

    println!("Parsing user input");
    println!("{}", s);
    print_parsed();

    println!("\n");

    println!("Helpers");
    println!("{}", s);
    let angle = Angle::new::<degree>(30.0);
    let length = Length::new::<millimeter>(1250.0);
    println!("{} = {}", angle.get::<degree>(), degrees(angle).display(3));
    println!("{} mm = {}", length.get::<millimeter>(), meters(length).display(3));
}

fn print_defaults() {
    let samples = [
        (25.4, Dimension::Length),
        (645.16, Dimension::Area),
        (16387.064, Dimension::Volume),
        (10.0, Dimension::Velocity),
        (1.5, Dimension::Angle),
    ];

    for schema in Schema::ALL {
        let settings = UnitSettings {
            schema,
            ..UnitSettings::default()
        };
        for (value, dimension) in samples {
            println!("{:<12} {:<10} {}", schema.to_string(), dimension.to_string(), settings.format(value, dimension));
        }
    }
}

fn print_ranged() {
    let settings = UnitSettings {
        ranged: true,
        decimals: 3,
        ..UnitSettings::default()
    };

    for value in [0.0005, 0.05, 42.0, 2500.0, 5e7] {
        println!("{:>12} mm -> {}", value, settings.format(value, Dimension::Length));
    }
}

fn print_parsed() {
    for text in ["42", "25.4mm", "1in", "3'", "90°", "2.5g/cm³", "5 mm", "abc", "5xyz"] {
        match parse_quantity(text) {
            Ok(parsed) => println!(
                "{:<10} -> {} ({}), canonical {}",
                text,
                parsed.result.display(4),
                parsed.dimension,
                parsed.canonical_value()
            ),
            Err(e) => println!("{:<10} -> error: {}", text, e),
        }
    }
}
