use std::io;

use doc_budget::action::cli::process_args;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let summary = process_args(args)?;
    log::info!("程式執行完成，最終預估大小：{} 位元組", summary.final_size);
    Ok(())
}
