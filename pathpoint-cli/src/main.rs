use std::error::Error;
use std::fmt;
use std::io;

use clap::{Parser, Subcommand};
use pathpoint::{Complex, DivisionByZeroError, Point};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

const POINT_HELP: &str = "Point written as `x,y` or `Point(x,y)`.";

fn parse_point_arg(arg: &str) -> Result<Point, String> {
    arg.parse::<Point>().map_err(|report| format!("{report:?}"))
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Euclidean length of a vector.
    Length {
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        point: Point,
    },

    /// Squared length of a vector.
    LengthSq {
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        point: Point,
    },

    /// Distance between two points.
    Distance {
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        from: Point,
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        to: Point,
    },

    /// Squared distance between two points.
    DistanceSq {
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        from: Point,
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        to: Point,
    },

    /// Unit vector with the same direction (the zero vector stays as is).
    Normalize {
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        point: Point,
    },

    /// Dot product of two vectors.
    Dot {
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        a: Point,
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        b: Point,
    },

    /// Signed angle in degrees from one vector to another (counter-clockwise is negative).
    Angle {
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        from: Point,
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        to: Point,
    },

    /// Rotate a vector counter-clockwise by some amount of degrees.
    Rotate {
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        point: Point,
        #[arg(allow_hyphen_values = true, help = "Angle in degrees (can be a decimal number).")]
        degrees: f64,
    },

    /// Componentwise sum.
    Add {
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        a: Point,
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        b: Point,
    },

    /// Componentwise difference.
    Sub {
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        a: Point,
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        b: Point,
    },

    /// Componentwise product (not the dot product).
    Mul {
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        a: Point,
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        b: Point,
    },

    /// Componentwise quotient. Fails if the divisor has a zero component.
    Div {
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        a: Point,
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        b: Point,
    },

    /// Componentwise absolute value.
    Abs {
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        point: Point,
    },

    /// Truncate both coordinates toward zero.
    Trunc {
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        point: Point,
    },

    /// Convert a point to the complex number `x + yj`.
    Complex {
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        point: Point,
    },

    /// Multiply both coordinates by the same factor.
    Scale {
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        point: Point,
        #[arg(allow_hyphen_values = true, help = "Scale factor.")]
        factor: f64,
    },

    /// Move a point by some offset.
    Shift {
        #[arg(allow_hyphen_values = true, value_parser = parse_point_arg, help = POINT_HELP)]
        point: Point,
        #[arg(allow_hyphen_values = true, help = "Offset along the X axis.")]
        dx: f64,
        #[arg(allow_hyphen_values = true, help = "Offset along the Y axis.")]
        dy: f64,
    },
}

#[derive(Debug, PartialEq)]
enum Output {
    Point(Point),
    Scalar(f64),
    Complex(Complex),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point(point) => write!(f, "{point}"),
            Self::Scalar(value) => write!(f, "{value}"),
            Self::Complex(value) => write!(f, "{value}"),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let Cli { command } = Cli::parse();

    tracing::debug!("Evaluating {command:?}...");
    match evaluate(command) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            tracing::error!("{err}");
            return Err(err.into());
        }
    }

    Ok(())
}

fn evaluate(command: Commands) -> Result<Output, DivisionByZeroError> {
    Ok(match command {
        Commands::Length { point } => Output::Scalar(point.length()),
        Commands::LengthSq { point } => Output::Scalar(point.length_sq()),
        Commands::Distance { from, to } => Output::Scalar(from.distance(to)),
        Commands::DistanceSq { from, to } => Output::Scalar(from.distance_sq(to)),
        Commands::Normalize { point } => Output::Point(point.normalize()),
        Commands::Dot { a, b } => Output::Scalar(a.dot(b)),
        Commands::Angle { from, to } => Output::Scalar(from.angle(to)),
        Commands::Rotate { point, degrees } => Output::Point(point.rotate(degrees)),
        Commands::Add { a, b } => Output::Point(a + b),
        Commands::Sub { a, b } => Output::Point(a - b),
        Commands::Mul { a, b } => Output::Point(a * b),
        Commands::Div { a, b } => Output::Point(a.divide(b)?),
        Commands::Abs { point } => Output::Point(point.abs()),
        Commands::Trunc { point } => Output::Point(point.trunc()),
        Commands::Complex { point } => Output::Complex(point.to_complex()),
        Commands::Scale { mut point, factor } => {
            point.scale(factor);
            Output::Point(point)
        }
        Commands::Shift { mut point, dx, dy } => {
            point.shift(dx, dy);
            Output::Point(point)
        }
    })
}
