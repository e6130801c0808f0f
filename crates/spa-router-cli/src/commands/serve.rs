use anyhow::Result;
use spa_router::RouteTable;

#[cfg(feature = "preview")]
pub fn execute(table: RouteTable, port: u16) -> Result<()> {
    use crate::preview::start_preview_server;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async { start_preview_server(table, port).await })
}

#[cfg(not(feature = "preview"))]
pub fn execute(_table: RouteTable, _port: u16) -> Result<()> {
    use colored::Colorize;

    println!("{}", "⚠ Preview server not available".yellow());
    println!();
    println!("The preview server requires the 'preview' feature.");
    println!("Rebuild with: cargo build --features preview");
    Ok(())
}
