use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::taxonomy::COST_CODES;

pub fn run() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Label"]);
    for cc in COST_CODES {
        table.add_row(vec![Cell::new(cc.code), Cell::new(cc.label)]);
    }
    println!("Cost codes\n{table}");
    Ok(())
}
