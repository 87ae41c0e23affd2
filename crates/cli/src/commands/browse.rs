use rolodex_core::StoreHandle;
use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::browser::Browser;

pub fn run<R: BufRead, W: Write>(
    store: Arc<StoreHandle>,
    input: R,
    out: W,
    per_page: usize,
) -> anyhow::Result<()> {
    let mut browser = Browser::new(store, input, out, per_page);
    browser.run()?;
    Ok(())
}
