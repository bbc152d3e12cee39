#![cfg(feature = "std")]

/// Discrete events delivered to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A player picked the cell at (x, y).
    TileClick { x: usize, y: usize },
    /// Start a new game, keeping the score.
    Restart,
    /// Take back the last move.
    Undo,
}

/// Parse a line typed at the terminal into an event.
///
/// Accepts `x y` or `x,y` (zero-based), `restart`/`new`/`r` and `undo`/`u`.
pub fn parse_input(input: &str, size: usize) -> Result<InputEvent, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    match input.to_ascii_lowercase().as_str() {
        "restart" | "new" | "r" => return Ok(InputEvent::Restart),
        "undo" | "u" => return Ok(InputEvent::Undo),
        _ => {}
    }

    let parts: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 2 {
        return Err(format!(
            "Expected two coordinates like '1 2' or a command, got '{}'",
            input
        ));
    }
    let x = parse_coord(parts[0], "row", size)?;
    let y = parse_coord(parts[1], "column", size)?;
    Ok(InputEvent::TileClick { x, y })
}

fn parse_coord(part: &str, name: &str, size: usize) -> Result<usize, String> {
    let value: usize = part
        .parse()
        .map_err(|_| format!("Invalid {} '{}' - must be a number", name, part))?;
    if value >= size {
        return Err(format!(
            "{} {} out of bounds - must be 0-{}",
            name,
            value,
            size.saturating_sub(1)
        ));
    }
    Ok(value)
}
