use colored::Colorize;
use spa_router::{Route, RouteTable};

pub fn execute(table: &RouteTable) {
    println!(
        "{} mode={} base={} case-insensitive={}",
        "Routes:".cyan().bold(),
        table.mode(),
        table.base(),
        table.case_insensitive()
    );

    if table.routes().is_empty() {
        println!("  {}", "(none)".dimmed());
        return;
    }

    for route in table.routes() {
        println!(
            "  {} {} {} {} {}",
            "→".green(),
            route.pattern,
            route.name.bold(),
            format!("({})", route.component).dimmed(),
            format!("[{}]", param_summary(route)).dimmed()
        );
    }
}

/// Parameter names in pattern order; optional ones carry a trailing `?`
fn param_summary(route: &Route) -> String {
    route
        .segments
        .iter()
        .filter_map(|segment| {
            segment.param_name().map(|name| {
                if segment.is_optional() {
                    format!("{}?", name)
                } else {
                    name.to_string()
                }
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_param_summary() {
        let table = RouteTable::demo();
        assert_eq!(param_summary(&table.routes()[0]), "initial?");

        let route = Route::new("/users/:id/:tab?", "user", "User").unwrap();
        assert_eq!(param_summary(&route), "id, tab?");

        let route = Route::new("/about", "about", "About").unwrap();
        assert_eq!(param_summary(&route), "");
    }
}
