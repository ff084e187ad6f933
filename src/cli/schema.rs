//! Schema CLI command

use kmap::*;

pub fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: input, grid, config, solver-request, solver-response");
            Ok(())
        }
        "input" => print_schema::<Input>(),
        "grid" => print_schema::<Grid>(),
        "config" => print_schema::<Config>(),
        "solver-request" => print_schema::<SolverRequest>(),
        "solver-response" => print_schema::<SolverResponse>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
