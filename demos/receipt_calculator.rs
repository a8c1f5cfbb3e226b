/// receipt calculator - interest due on a receipt as of today
use clap::Parser;
use interest_calculator_rs::{
    CalculatorConfig, InterestCalculator, ResultView, SafeTimeProvider, TimeSource,
};

/// Interest due on a receipt since its date
#[derive(Parser, Debug)]
#[command(name = "receipt_calculator")]
#[command(about, long_about = None)]
struct Args {
    /// Receipt date, day first (e.g. 3.2.21 or 03-02-2021)
    #[arg(default_value = "01.01.2023")]
    date: String,

    /// Amount on the receipt
    #[arg(default_value = "1000")]
    amount: String,

    /// Rate per month as a fraction (defaults to 0.03)
    #[arg(short, long)]
    rate: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let calculator = InterestCalculator::new(CalculatorConfig::receipt_compound())?;
    let time = SafeTimeProvider::new(TimeSource::System);

    let outcome = calculator.calculate_raw(&args.date, &args.amount, args.rate.as_deref(), &time);
    let view = ResultView::from_outcome(&outcome);

    println!("{}", view.to_json_pretty()?);
    if let Ok(result) = outcome {
        println!("{}", result.to_json_pretty()?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_args_and_rate_flag() {
        let args = Args::try_parse_from(["receipt_calculator", "3.2.21", "250", "--rate", "0.02"])
            .unwrap();

        assert_eq!(args.date, "3.2.21");
        assert_eq!(args.amount, "250");
        assert_eq!(args.rate.as_deref(), Some("0.02"));
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["receipt_calculator"]).unwrap();

        assert_eq!(args.date, "01.01.2023");
        assert_eq!(args.amount, "1000");
        assert!(args.rate.is_none());
    }
}
