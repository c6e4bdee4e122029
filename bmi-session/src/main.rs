use std::error::Error;

use bmi_advice::GeminiConfig;
use bmi_model::{input::InputField, unit::UnitSystem};
use bmi_session::{request_advice, AdviceState, Session};
use clap::Parser;
use futures::lock::Mutex;
use log::info;

#[derive(Parser)]
#[command(name = "bmi")]
#[command(about = "Body Mass Index calculator with optional health tips")]
#[command(version)]
struct Args {
    /// Unit system of the measurements (metric or imperial)
    #[arg(long, short = 'u', default_value_t = UnitSystem::Metric)]
    unit: UnitSystem,

    /// Height in centimeters (metric)
    #[arg(long)]
    height_cm: Option<String>,

    /// Weight in kilograms (metric)
    #[arg(long)]
    weight_kg: Option<String>,

    /// Height in feet (imperial)
    #[arg(long)]
    height_ft: Option<String>,

    /// Additional inches of height (imperial)
    #[arg(long)]
    height_in: Option<String>,

    /// Weight in pounds (imperial)
    #[arg(long)]
    weight_lbs: Option<String>,

    /// Ask the advice service for a summary and tips
    #[arg(long, short = 'a')]
    advice: bool,

    /// log4rs configuration file
    #[arg(long, env = "BMI_LOG_CONFIG", default_value = "log4rs.yml")]
    log_config: String,
}

impl Args {
    fn fields(&self) -> impl Iterator<Item = (InputField, &str)> {
        [
            (InputField::HeightCm, &self.height_cm),
            (InputField::WeightKg, &self.weight_kg),
            (InputField::HeightFt, &self.height_ft),
            (InputField::HeightIn, &self.height_in),
            (InputField::WeightLbs, &self.weight_lbs),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    log4rs::init_file(&args.log_config, Default::default())?;

    let mut session = Session::new();
    session.set_unit_system(args.unit);
    for (field, value) in args.fields() {
        if !session.set_field(field, value) {
            eprintln!("Ignoring {}: \"{}\" is not a number", field, value);
        }
    }

    let Some(result) = session.result().copied() else {
        println!("Enter your details to calculate BMI");
        return Ok(());
    };
    println!("BMI:      {:.1}", result.bmi());
    println!("Category: {}", result.category());
    println!("Color:    {}", result.color());
    println!("Gauge:    {:.0}%", result.gauge_percent());

    if !args.advice {
        return Ok(());
    }

    info!("Loading advice configuration");
    let gateway = bmi_advice::create(GeminiConfig::from_env());
    let session = Mutex::new(session);
    request_advice(&session, &gateway).await;

    println!();
    match session.lock().await.advice() {
        AdviceState::Ready(advice) => {
            println!("{}", advice.summary);
            for (i, tip) in advice.tips.iter().enumerate() {
                println!("  {}. {}", i + 1, tip);
            }
        }
        AdviceState::NotRequested | AdviceState::Unavailable => println!("Advice unavailable"),
    }

    Ok(())
}
