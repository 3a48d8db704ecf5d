use crate::calc::Powers;
use std::fmt::Display;
use std::io::Write;
use termcolor::{Color, ColorSpec, WriteColor};

pub const TITLE: &str = "Power Calculator";
pub const DESCRIPTION: &str = "Enter a number to calculate its square, cube and fifth power.";
pub const PROMPT: &str = "Enter an integer> ";

pub fn write_header(output: &mut dyn WriteColor) -> anyhow::Result<()> {
    output.set_color(ColorSpec::new().set_bold(true).set_underline(true))?;
    write!(output, "{}", TITLE)?;
    output.reset()?;
    writeln!(output)?;
    writeln!(output, "{}", DESCRIPTION)?;
    Ok(())
}

/// Writes one `The <label> of <n> is: <value>` line per power.
pub fn write_powers(output: &mut dyn WriteColor, powers: &Powers) -> anyhow::Result<()> {
    for (exponent, value) in powers.iter() {
        write!(output, "The ")?;
        output.set_color(ColorSpec::new().set_bold(true))?;
        write!(output, "{}", exponent.label())?;
        output.reset()?;
        write!(output, " of {} is: ", powers.n)?;
        output.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(output, "{}", value)?;
        output.reset()?;
        writeln!(output)?;
    }
    Ok(())
}

pub fn write_error(output: &mut dyn WriteColor, err: &dyn Display) -> anyhow::Result<()> {
    output.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(output, "error")?;
    output.reset()?;
    writeln!(output, ": {}", err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::calculate;
    use crate::errors::PowerCalcError;
    use termcolor::Buffer;

    fn render(f: impl FnOnce(&mut Buffer) -> anyhow::Result<()>) -> String {
        let mut buffer = Buffer::no_color();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn three_result_lines() {
        let text = render(|out| write_powers(out, &calculate(-2)));
        assert_eq!(
            text,
            "The square of -2 is: 4\n\
             The cube of -2 is: -8\n\
             The fifth_power of -2 is: -32\n"
        );
    }

    #[test]
    fn header_has_title_and_description() {
        let text = render(|out| write_header(out));
        assert_eq!(
            text,
            "Power Calculator\nEnter a number to calculate its square, cube and fifth power.\n"
        );
    }

    #[test]
    fn errors_are_prefixed() {
        let err = PowerCalcError::InvalidNumber("x".into());
        let text = render(|out| write_error(out, &err));
        assert_eq!(text, "error: `x` is not a number\n");
    }

    #[test]
    fn color_does_not_change_the_text() {
        let mut buffer = Buffer::ansi();
        write_powers(&mut buffer, &calculate(3)).unwrap();
        let colored = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(colored.contains("\x1b["));
        assert!(colored.contains("243"));
        assert_ne!(colored, render(|out| write_powers(out, &calculate(3))));
    }
}
