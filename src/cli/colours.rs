use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::types::{Colour, DEFAULT_COLOUR, NAMED_COLOURS};

/// List the colour names scripts can use
#[derive(Args, Debug)]
pub struct ColoursArgs {}

pub fn run(_args: ColoursArgs, printer: &Printer) -> Result<()> {
    printer.info("Default", &DEFAULT_COLOUR.to_string());
    print!("{}", colour_table());
    Ok(())
}

/// `name  #RRGGBB` lines, one per name (synonyms listed separately).
pub fn colour_table() -> String {
    NAMED_COLOURS
        .iter()
        .map(|&(name, value)| format!("{:<8} {}\n", name, Colour::from(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_table() {
        insta::assert_snapshot!(colour_table(), @r"
        red      #FF0000
        orange   #FFA500
        yellow   #FFFF00
        green    #008000
        blue     #0000FF
        violet   #800080
        purple   #800080
        magenta  #FF00FF
        pink     #FF00FF
        brown    #A52A2A
        gray     #808080
        grey     #808080
        ");
    }
}
