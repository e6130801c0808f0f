use anyhow::{bail, Result};
use colored::Colorize;
use serde_json::json;
use spa_router::{Resolution, RouteError, RouteTable};

/// Resolves each input and prints the view it maps to
///
/// Fails when at least one input does not resolve.
pub fn execute(table: &RouteTable, inputs: &[String], location: bool, as_json: bool) -> Result<()> {
    let results: Vec<(&str, Result<Resolution, RouteError>)> = inputs
        .iter()
        .map(|input| {
            let result = if location {
                table.resolve_location(input)
            } else {
                table.resolve(input)
            };
            (input.as_str(), result)
        })
        .collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&to_json(&results))?);
    } else {
        for (input, result) in &results {
            println!("{}", describe(input, result));
        }
    }

    let failed = results.iter().filter(|(_, r)| r.is_err()).count();
    if failed > 0 {
        bail!("{} of {} path(s) did not resolve", failed, results.len());
    }

    Ok(())
}

fn to_json(results: &[(&str, Result<Resolution, RouteError>)]) -> serde_json::Value {
    results
        .iter()
        .map(|(input, result)| match result {
            Ok(resolution) => json!({ "input": input, "resolution": resolution }),
            Err(e) => json!({ "input": input, "error": e.to_string() }),
        })
        .collect()
}

fn describe(input: &str, result: &Result<Resolution, RouteError>) -> String {
    match result {
        Ok(resolution) => {
            let params = resolution
                .params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(" ");

            format!(
                "  {} {} {} {} {}",
                "✓".green(),
                input,
                "→".cyan(),
                resolution.view.bold(),
                format!("({}) {}", resolution.component, params).dimmed()
            )
        }
        Err(e) => format!("  {} {} {}", "✗".red(), input, e.to_string().red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_output_shape() {
        let table = RouteTable::demo();
        let results = vec![("/hello", table.resolve("/hello")), ("/a/b", table.resolve("/a/b"))];

        let value = to_json(&results);
        assert_eq!(value[0]["resolution"]["params"]["initial"], "hello");
        assert_eq!(value[1]["error"], "no route matches path `/a/b`");
    }

    #[test]
    fn test_execute_fails_on_miss() {
        let table = RouteTable::demo();
        let ok = execute(&table, &["/hello".to_string()], false, true);
        assert!(ok.is_ok());

        let err = execute(&table, &["/".to_string(), "/a/b".to_string()], false, true).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 path(s) did not resolve");
    }
}
