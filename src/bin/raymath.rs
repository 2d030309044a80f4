use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::Context;
    use clap::{Parser, Subcommand, ValueEnum};
    use raymath::{Mat2d, Mat3d, Mat4d, Point3d, Rayd, Vec3d};

    #[derive(Debug, Parser)]
    #[command(about = "Matrix and ray calculations with the raymath library", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Compute the determinant of a matrix
        Det(MatrixArgs),
        /// Compute the inverse of a matrix
        Inverse(MatrixArgs),
        /// Compute the transpose of a matrix
        Transpose(MatrixArgs),
        /// Evaluate the position along a ray
        Ray {
            /// Origin of the ray, like "0 0 0"
            #[arg(short, long)]
            origin: String,

            /// Direction of the ray, like "0 0 1"
            #[arg(short, long)]
            direction: String,

            /// Ray parameter to evaluate the position at
            #[arg(short, long)]
            t: f64,

            /// Maximum ray parameter (infinite if not given)
            #[arg(long)]
            max_range: Option<f64>,
        },
    }

    #[derive(Debug, clap::Args)]
    struct MatrixArgs {
        /// Number of rows and columns
        #[arg(long, value_enum)]
        dim: Dimension,

        /// Elements in row order, separated by whitespace or commas
        elements: String,
    }

    #[derive(Clone, Copy, Debug, ValueEnum)]
    enum Dimension {
        #[value(name = "2")]
        Two,
        #[value(name = "3")]
        Three,
        #[value(name = "4")]
        Four,
    }

    #[derive(Clone, Copy, Debug)]
    enum MatrixOperation {
        Determinant,
        Inverse,
        Transpose,
    }

    macro_rules! evaluate_matrix_operation {
        ($matrix:ty, $elements:expr, $operation:expr) => {{
            let matrix: $matrix = $elements
                .parse()
                .with_context(|| format!("Invalid matrix elements `{}`", $elements))?;
            log::debug!("Parsed matrix\n{matrix}");
            match $operation {
                MatrixOperation::Determinant => matrix.determinant().to_string(),
                MatrixOperation::Inverse => matrix.inverse()?.to_string(),
                MatrixOperation::Transpose => matrix.transpose().to_string(),
            }
        }};
    }

    fn run_matrix_operation(args: &MatrixArgs, operation: MatrixOperation) -> Result<String> {
        let output = match args.dim {
            Dimension::Two => evaluate_matrix_operation!(Mat2d, args.elements, operation),
            Dimension::Three => evaluate_matrix_operation!(Mat3d, args.elements, operation),
            Dimension::Four => evaluate_matrix_operation!(Mat4d, args.elements, operation),
        };
        Ok(output)
    }

    fn run_ray(origin: &str, direction: &str, t: f64, max_range: Option<f64>) -> Result<String> {
        let origin: Point3d = origin
            .parse()
            .with_context(|| format!("Invalid ray origin `{origin}`"))?;
        let direction: Vec3d = direction
            .parse()
            .with_context(|| format!("Invalid ray direction `{direction}`"))?;

        let mut ray = Rayd::new(origin, direction);
        if let Some(max_range) = max_range {
            ray.set_max_range(max_range);
        }
        if !ray.contains_parameter(t) {
            log::warn!("Parameter {t} is outside the ray range [0, {}]", ray.max_range());
        }
        Ok(ray.position(t).to_string())
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        let output = match cli.command {
            Command::Det(args) => run_matrix_operation(&args, MatrixOperation::Determinant)?,
            Command::Inverse(args) => run_matrix_operation(&args, MatrixOperation::Inverse)?,
            Command::Transpose(args) => run_matrix_operation(&args, MatrixOperation::Transpose)?,
            Command::Ray {
                origin,
                direction,
                t,
                max_range,
            } => run_ray(&origin, &direction, t, max_range)?,
        };
        println!("{output}");
        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
