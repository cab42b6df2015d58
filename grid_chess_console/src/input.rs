use anyhow::{Context, bail};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Turn { start: (i8, i8), end: (i8, i8) },
    Quit,
}

fn parse_xy(s: &str) -> anyhow::Result<(i8, i8)> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("Expected \"x,y\", got \"{s}\"");
    };
    let x = x.trim().parse().with_context(|| format!("Invalid x in \"{s}\""))?;
    let y = y.trim().parse().with_context(|| format!("Invalid y in \"{s}\""))?;
    Ok((x, y))
}

// Accepts "x1,y1 x2,y2" or "quit".
pub fn parse_command(line: &str) -> anyhow::Result<Command> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }
    let parts: Vec<&str> = line.split_ascii_whitespace().collect();
    let [start, end] = parts.as_slice() else {
        bail!("Expected two squares, e.g. \"4,1 4,3\"");
    };
    Ok(Command::Turn { start: parse_xy(start)?, end: parse_xy(end)? })
}
