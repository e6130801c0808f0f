use std::collections::BTreeMap;

use anyhow::Result;
use spa_router::RouteTable;

pub fn execute(table: &RouteTable, name: &str, params: Vec<(String, String)>) -> Result<()> {
    let params: BTreeMap<String, String> = params.into_iter().collect();
    println!("{}", table.href_for(name, &params)?);
    Ok(())
}
