use clap::{Parser, Subcommand, ValueEnum};
use numbox::{AngleUnit, LinearSystem2x2, TrigRequest, TrigRow};

/// numbox is a small interactive toolbox for numeric mathematics: a
/// sandboxed expression evaluator, a 2x2 linear system solver, and a
/// trigonometric table generator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates an arithmetic expression.
    Eval {
        /// The expression to evaluate, e.g. "2 + 3 * 4" or "comb(5, 2)".
        expression: String,
    },
    /// Solves the system a1*x + b1*y = c1, a2*x + b2*y = c2.
    #[command(allow_negative_numbers = true)]
    Solve {
        a1: f64,
        b1: f64,
        c1: f64,
        a2: f64,
        b2: f64,
        c2: f64,
    },
    /// Prints a table of sin, cos and tan over a range of angles, or for a
    /// single angle.
    #[command(allow_negative_numbers = true)]
    Table {
        /// The unit the angles are expressed in.
        #[arg(short, long, value_enum, default_value_t = UnitArg::Degrees)]
        unit: UnitArg,

        /// First angle of the range.
        #[arg(long, requires = "end", requires = "step", conflicts_with = "theta")]
        start: Option<f64>,

        /// Last angle of the range (inclusive).
        #[arg(long)]
        end: Option<f64>,

        /// Distance between consecutive angles.
        #[arg(long)]
        step: Option<f64>,

        /// A single angle instead of a range.
        #[arg(long)]
        theta: Option<f64>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum UnitArg {
    /// Degrees (a full turn is 360).
    #[value(alias = "deg")]
    Degrees,
    /// Radians (a full turn is 2π).
    #[value(alias = "rad")]
    Radians,
}

impl From<UnitArg> for AngleUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Degrees => Self::Degrees,
            UnitArg::Radians => Self::Radians,
        }
    }
}

fn main() {
    let args = Args::parse();

    let outcome = match args.command {
        Command::Eval { expression } => run_eval(&expression),
        Command::Solve { a1, b1, c1, a2, b2, c2 } => {
            run_solve(&LinearSystem2x2::new(a1, b1, c1, a2, b2, c2))
        },
        Command::Table { unit, start, end, step, theta } => {
            run_table(unit.into(), start, end, step, theta)
        },
    };

    if let Err(message) = outcome {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

fn run_eval(expression: &str) -> Result<(), String> {
    let value = numbox::evaluate(expression).map_err(|e| e.to_string())?;
    println!("{value}");
    Ok(())
}

fn run_solve(system: &LinearSystem2x2) -> Result<(), String> {
    let solution = numbox::solve_linear_system(system).map_err(|e| e.to_string())?;
    println!("x = {}", solution.x);
    println!("y = {}", solution.y);
    Ok(())
}

fn run_table(unit: AngleUnit,
             start: Option<f64>,
             end: Option<f64>,
             step: Option<f64>,
             theta: Option<f64>)
             -> Result<(), String> {
    let request = match (start, end, step, theta) {
        (Some(start), Some(end), Some(step), None) => TrigRequest::Range { start, end, step },
        (None, None, None, Some(theta)) => TrigRequest::Point { theta },
        _ => {
            return Err("Specify either --start/--end/--step for a range, or --theta for a \
                        single angle."
                .to_string());
        },
    };

    let rows = numbox::generate_trig_table(&request, unit).map_err(|e| e.to_string())?;
    print_table(&rows);
    Ok(())
}

fn print_table(rows: &[TrigRow]) {
    println!("{:>12}  {:>12}  {:>12}  {:>12}  {:>12}",
             "theta (deg)", "theta (rad)", "sin", "cos", "tan");

    let mut has_singularity = false;
    for row in rows {
        let tan = row.tan.map_or_else(
            || {
                has_singularity = true;
                String::new()
            },
            |tan| format!("{tan:>12.6}"),
        );
        println!("{:>12.6}  {:>12.6}  {:>12.6}  {:>12.6}  {tan}",
                 row.angle_deg, row.angle_rad, row.sin, row.cos);
    }

    if has_singularity {
        println!("Blank tangent cells mark angles where the tangent diverges.");
    }
}
