use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::io::{self, Write};
use std::time::Duration;

/// Reads one line in raw mode. `Ok(None)` when the user presses Esc.
pub fn read_input_raw(prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{}: ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    loop {
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
            if kind == KeyEventKind::Release {
                continue;
            }
            match code {
                KeyCode::Enter => {
                    print!("\r\n");
                    return Ok(Some(input));
                }
                KeyCode::Char(c) => {
                    input.push(c);
                    print!("{}", c);
                    io::stdout().flush()?;
                }
                KeyCode::Backspace => {
                    if input.pop().is_some() {
                        print!("\u{0008} \u{0008}");
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Esc => {
                    print!("\r\n");
                    return Ok(None);
                }
                _ => {}
            }
        }
    }
}

/// Shows a numbered menu and waits for a digit key. `Ok(None)` on `q`.
pub fn select_option(title: &str, options: &[&str]) -> anyhow::Result<Option<usize>> {
    print!("\r\n{}\r\n", title);
    for (i, option) in options.iter().enumerate() {
        print!("{}. {}\r\n", i + 1, option);
    }
    io::stdout().flush()?;

    loop {
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(None),
                KeyCode::Char(c) => {
                    if let Some(n) = c.to_digit(10) {
                        let n = n as usize;
                        if (1..=options.len()).contains(&n) {
                            return Ok(Some(n - 1));
                        }
                    }
                }
                _ => {}
            }
        }
    }
}
