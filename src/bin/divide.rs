use anstyle::{AnsiColor, Style};
use anyhow::Result;
use division_service::report;
use std::io::{IsTerminal, stdout};

const DIVIDEND: i64 = 10;
const DIVISOR: i64 = 0;

fn main() -> Result<()> {
    env_logger::try_init().unwrap_or_default();

    let stdout = stdout();
    let style = if stdout.is_terminal() {
        Style::new().bold().fg_color(Some(AnsiColor::Red.into()))
    } else {
        Style::new()
    };

    // The division error is reported, not propagated. Only a failed write makes this fail.
    let _: i64 = report(&mut stdout.lock(), style, DIVIDEND, DIVISOR)?;

    Ok(())
}
