//! Solve and Gray sequence commands

use super::util::{load_config, parse_format_arg, parse_output_arg, write_output};
use kmap::*;
use std::fs;

pub fn cmd_solve(args: &[String]) -> Result<()> {
    let Some(input_path) = args.first() else {
        return Err(
            "Usage: kmap solve <input.yaml|json> [--json|--html] [--output <file>] [--config <file>]"
                .into(),
        );
    };

    let format = parse_format_arg(args)?;
    let output = parse_output_arg(args);
    let config = load_config(args)?;

    let content = fs::read_to_string(input_path).map_err(Error::Io)?;
    let input = Input::parse(&content)?;
    tracing::info!(path = %input_path, num_inputs = input.num_inputs, "solving");

    let solver = Solver::new(config);
    let grid = solver.solve(&input)?;
    let rendered = render(&grid, format)?;

    write_output(&output, &rendered)
}

pub fn cmd_gray(args: &[String]) -> Result<()> {
    let Some(bits) = args.first() else {
        return Err("Usage: kmap gray <bits> [--json]".into());
    };
    let bits: u32 = bits
        .parse()
        .map_err(|_| Error::Other(format!("Invalid bit width: {}", bits)))?;

    let sequence = gray_sequence(bits)?;

    if args.iter().any(|a| a == "--json") {
        println!("{}", serde_json::to_string(&sequence)?);
    } else {
        for value in sequence {
            if bits == 0 {
                println!("{}", value);
            } else {
                println!("{:>4}  {}", value, bit_string(value, bits));
            }
        }
    }
    Ok(())
}
