use crate::commands::help::{Category, CommandHelp};
use crate::commands::registry::BuiltinCommand;
use crate::commands::Context;
use crate::errors::{ShellError, ShellResult};
use crate::style;
use crate::tokenizer::ArgVector;

pub struct CalcCommand;

static HELP: CommandHelp = CommandHelp {
    category: Category::System,
    usage: "calc <n1> <op> <n2>",
    summary: "Realiza cálculos (+, -, *, /).",
    description: "Realiza operaciones aritméticas básicas entre dos números.",
    examples: &["calc 10 + 5", "calc 3.14 * 2", "calc 100 / 4"],
    notes: &[
        "Operadores soportados: + (suma), - (resta), * o x (multiplicación), / (división).",
        "La división por cero está protegida.",
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" | "x" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }
}

pub fn evaluate(lhs: f64, op: Operator, rhs: f64) -> ShellResult<f64> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Sub => Ok(lhs - rhs),
        Operator::Mul => Ok(lhs * rhs),
        Operator::Div if rhs == 0.0 => Err(ShellError::Command(
            "División por cero no permitida.".to_string(),
        )),
        Operator::Div => Ok(lhs / rhs),
    }
}

fn parse_number(token: &str) -> ShellResult<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ShellError::Command(format!("'{}' no es un número válido.", token)))
}

impl BuiltinCommand for CalcCommand {
    fn name(&self) -> &'static str {
        "calc"
    }

    fn help(&self) -> &'static CommandHelp {
        &HELP
    }

    fn run(&self, args: &ArgVector<'_>, ctx: &mut Context<'_>) -> ShellResult<()> {
        let (Some(lhs), Some(op), Some(rhs)) = (args.get(1), args.get(2), args.get(3)) else {
            return Err(ShellError::Usage(
                "calc <num1> <operador> <num2>  (ejemplo: calc 5 + 3)".to_string(),
            ));
        };

        let lhs = parse_number(lhs)?;
        let operator = Operator::parse(op).ok_or_else(|| {
            ShellError::Command(format!("Operador '{}' no reconocido. Use +, -, * o /.", op))
        })?;
        let rhs = parse_number(rhs)?;

        let result = evaluate(lhs, operator, rhs)?;

        let style = ctx.session.style();
        writeln!(
            ctx.out,
            "  {}{}",
            style.paint(style::GREEN, "Resultado: "),
            style.paint(style::BOLD, &format!("{:.2}", result))
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        assert_eq!(evaluate(5.0, Operator::Add, 3.0).unwrap(), 8.0);
        assert_eq!(evaluate(10.0, Operator::Sub, 4.0).unwrap(), 6.0);
        assert_eq!(evaluate(3.0, Operator::Mul, 7.0).unwrap(), 21.0);
        assert_eq!(evaluate(15.0, Operator::Div, 3.0).unwrap(), 5.0);
    }

    #[test]
    fn division_by_zero_is_rejected() {
        let err = evaluate(1.0, Operator::Div, 0.0).unwrap_err();
        assert!(err.to_string().contains("División por cero"));
    }

    #[test]
    fn x_is_an_alias_for_multiplication() {
        assert_eq!(Operator::parse("x"), Some(Operator::Mul));
        assert_eq!(Operator::parse("*"), Some(Operator::Mul));
    }

    #[test]
    fn unknown_operators() {
        assert_eq!(Operator::parse("%"), None);
        assert_eq!(Operator::parse("++"), None);
        assert_eq!(Operator::parse("X"), None);
    }

    #[test]
    fn numbers_must_be_finite() {
        assert_eq!(parse_number("3.5").unwrap(), 3.5);
        assert!(parse_number("tres").is_err());
        assert!(parse_number("inf").is_err());
        assert!(parse_number("NaN").is_err());
    }
}
