use crate::parser::base::ParseError;

pub(crate) trait UserInterface {
    fn print_error(&self, error: &ParseError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print_error(&self, error: &ParseError) {
        eprintln!("Parse error: {error}");
    }
}
